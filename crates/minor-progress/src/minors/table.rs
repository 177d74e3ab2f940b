use super::rules::{Branch, Bucket, CourseMatcher, ElectiveRule};
use super::{Minor, MinorDefinition};

pub(super) fn standard_minor_definitions() -> Vec<MinorDefinition> {
    vec![
        MinorDefinition {
            minor: Minor::Business,
            required_courses: &["BADM 310", "BADM 320", "FIN 221"],
            required_credit_hours: 18,
            electives: ElectiveRule::Buckets(BUSINESS_ELECTIVES),
        },
        MinorDefinition {
            minor: Minor::BusinessAnalytics,
            required_courses: &["BADM 352", "BADM 356", "BADM 358", "BADM 373", "BADM 374"],
            required_credit_hours: 18,
            electives: ElectiveRule::Buckets(BUSINESS_ANALYTICS_ELECTIVES),
        },
        MinorDefinition {
            minor: Minor::Biology,
            required_courses: &[],
            required_credit_hours: 16,
            electives: ElectiveRule::Buckets(BIOLOGY_ELECTIVES),
        },
        MinorDefinition {
            minor: Minor::ComputerScience,
            required_courses: &["CS 124", "CS 128", "CS 173", "CS 225"],
            required_credit_hours: 19,
            electives: ElectiveRule::Buckets(COMPUTER_SCIENCE_ELECTIVES),
        },
        MinorDefinition {
            minor: Minor::Math,
            required_courses: &["MATH 241"],
            required_credit_hours: 19,
            electives: ElectiveRule::Buckets(MATH_ELECTIVES),
        },
        MinorDefinition {
            minor: Minor::DataScience,
            required_courses: &["STAT 107", "STAT 207", "CS 307"],
            required_credit_hours: 21,
            electives: ElectiveRule::Buckets(DATA_SCIENCE_ELECTIVES),
        },
        MinorDefinition {
            minor: Minor::Economics,
            required_courses: &["ECON 102", "ECON 202", "ECON 203", "ECON 302"],
            required_credit_hours: 18,
            electives: ElectiveRule::Branches(ECONOMICS_TRACKS),
        },
        MinorDefinition {
            minor: Minor::Statistics,
            required_courses: &[],
            required_credit_hours: 17,
            electives: ElectiveRule::Buckets(STATISTICS_ELECTIVES),
        },
        MinorDefinition {
            minor: Minor::Spanish,
            required_courses: &["SPAN 228"],
            required_credit_hours: 18,
            electives: ElectiveRule::Buckets(SPANISH_ELECTIVES),
        },
        MinorDefinition {
            minor: Minor::Physics,
            required_courses: &["PHYS 211", "PHYS 212", "PHYS 225", "PHYS 325"],
            required_credit_hours: 21,
            electives: ElectiveRule::Buckets(PHYSICS_ELECTIVES),
        },
    ]
}

// Only the first two listed business electives are ever honoured; the
// accounting sequence counts when ACCY 200 is taken or both halves are.
const BUSINESS_ELECTIVES: &[Bucket] = &[Bucket::uncapped(CourseMatcher::Either(&[
    CourseMatcher::LeadingOf {
        courses: &[
            "BADM 275", "BADM 300", "BADM 311", "BADM 312", "BADM 313", "BADM 314", "BADM 323",
            "BADM 326", "BADM 340", "BADM 350", "BADM 380", "BADM 381", "BDI 367", "BDI 411",
            "BDI 475", "BDI 477", "FIN 230", "FIN 241", "FIN 435",
        ],
        keep: 2,
    },
    CourseMatcher::AnyOf(&["ACCY 200"]),
    CourseMatcher::JointPair(["ACCY 201", "ACCY 202"]),
]))];

const BUSINESS_ANALYTICS_ELECTIVES: &[Bucket] = &[Bucket::capped(
    CourseMatcher::AnyOf(&[
        "BADM 336", "BADM 351", "BADM 361", "BADM 362", "BADM 379", "BADM 453", "ACCY 302",
        "FIN 464",
    ]),
    1,
)];

const BIOLOGY_ELECTIVES: &[Bucket] = &[
    Bucket::uncapped(CourseMatcher::LeadingOf {
        courses: &["IB 150", "IB 103", "IB 104"],
        keep: 1,
    }),
    Bucket::uncapped(CourseMatcher::LeadingOf {
        courses: &["IB 202", "IB 203", "IB 204", "IB 302"],
        keep: 2,
    }),
    Bucket::capped(
        CourseMatcher::Prefixed {
            prefixes: &["IB 3", "IB 4"],
            excluding: &[],
        },
        2,
    ),
];

const COMPUTER_SCIENCE_ELECTIVES: &[Bucket] = &[Bucket::capped(
    CourseMatcher::Prefixed {
        prefixes: &["CS 3", "CS 4"],
        excluding: &[
            "CS 397", "CS 398", "CS 400", "CS 401", "CS 402", "CS 403", "CS 413", "CS 491",
            "CS 492", "CS 493", "CS 494", "CS 497", "CS 499",
        ],
    },
    2,
)];

const MATH_ELECTIVES: &[Bucket] = &[Bucket::capped(
    CourseMatcher::Either(&[
        CourseMatcher::AnyOf(&[
            "ASRM 406", "MATH 257", "MATH 415", "MATH 416", "MATH 417", "MATH 418", "MATH 427",
            "MATH 453", "MATH 412", "MATH 413", "MATH 414", "MATH 482", "MATH 284", "MATH 285",
            "MATH 424", "MATH 425", "MATH 441", "MATH 442", "MATH 444", "MATH 446", "MATH 447",
            "MATH 448", "CS 450", "MATH 484", "MATH 487", "MATH 489", "MATH 347", "MATH 402",
            "MATH 403", "MATH 423", "MATH 428", "MATH 432", "MATH 481", "MATH 461", "STAT 400",
        ]),
        CourseMatcher::ExclusivePair(["STAT 410", "STAT 420"]),
    ]),
    5,
)];

const DATA_SCIENCE_ELECTIVES: &[Bucket] = &[
    Bucket::capped(
        CourseMatcher::Either(&[
            CourseMatcher::AnyOf(&[
                "ATMS 207", "CS 416", "CS 441", "GGIS 407", "IS 357", "IS 417", "IS 445",
                "LING 406", "MATH 467", "STAT 432", "STAT 440", "STAT 447", "STAT 480",
            ]),
            CourseMatcher::ExclusivePair(["CS 225", "CS 277"]),
        ]),
        2,
    ),
    Bucket::capped(CourseMatcher::AnyOf(&["IS 467", "IS 477"]), 1),
];

const ECONOMICS_ADVANCED: &[&str] = &[
    "ECON 411", "ECON 414", "ECON 440", "ECON 450", "ECON 451", "ECON 452", "ECON 480",
    "ECON 481", "ECON 483", "ECON 482", "ECON 484", "ECON 490",
];

const ECONOMICS_TRACKS: &[Branch] = &[
    Branch {
        triggers: ECONOMICS_ADVANCED,
        granted: &[],
        buckets: &[Bucket::capped(CourseMatcher::AnyOf(ECONOMICS_ADVANCED), 2)],
    },
    Branch {
        triggers: &[
            "ECON 103", "ECON 303", "ECON 420", "ECON 425", "ECON 452", "ECON 490",
        ],
        granted: &["ECON 103", "ECON 303"],
        buckets: &[Bucket::capped(
            CourseMatcher::AnyOf(&["ECON 420", "ECON 425", "ECON 452", "ECON 490"]),
            1,
        )],
    },
    Branch {
        triggers: &["ECON 471", "ECON 465", "ECON 490"],
        granted: &[],
        buckets: &[Bucket::uncapped(CourseMatcher::AnyOf(&[
            "ECON 471", "ECON 465", "ECON 490",
        ]))],
    },
];

const STATISTICS_ELECTIVES: &[Bucket] = &[
    Bucket::capped(
        CourseMatcher::AnyOf(&[
            "CPSC 241", "ECON 202", "EPSY 280", "PSYC 235", "STAT 100", "STAT 107", "SOC 280",
        ]),
        1,
    ),
    Bucket::capped(
        CourseMatcher::AnyOf(&["STAT 200", "STAT 207", "STAT 212", "ECON 203"]),
        1,
    ),
    Bucket::capped(CourseMatcher::AnyOf(&["MATH 225", "MATH 257", "MATH 415"]), 1),
    Bucket::capped(CourseMatcher::AnyOf(&["STAT 400", "STAT 408", "MATH 461"]), 1),
    Bucket::capped(
        CourseMatcher::AnyOf(&[
            "STAT 409", "STAT 410", "STAT 420", "STAT 424", "STAT 425", "STAT 426", "STAT 427",
            "STAT 428", "STAT 429", "STAT 430", "STAT 431", "STAT 432", "STAT 433", "STAT 434",
            "STAT 437", "STAT 440", "STAT 443", "STAT 447", "STAT 448", "STAT 480",
        ]),
        2,
    ),
];

const SPANISH_ELECTIVES: &[Bucket] = &[
    Bucket::capped(
        CourseMatcher::Prefixed {
            prefixes: &["SPAN 2"],
            excluding: &[],
        },
        3,
    ),
    Bucket::capped(
        CourseMatcher::Prefixed {
            prefixes: &["SPAN 3", "SPAN 4"],
            excluding: &[],
        },
        3,
    ),
];

const PHYSICS_ELECTIVES: &[Bucket] = &[
    Bucket::capped(
        CourseMatcher::Prefixed {
            prefixes: &["PHYS 3", "PHYS 4"],
            excluding: &["PHYS 419", "PHYS 420"],
        },
        2,
    ),
    Bucket::capped(CourseMatcher::AnyOf(&["PHYS 213", "PHYS 214"]), 1),
];
