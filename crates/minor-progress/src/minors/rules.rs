use std::collections::HashSet;

/// Student course list with a membership index for pair rules.
pub(crate) struct Transcript<'a> {
    courses: &'a [String],
    taken: HashSet<&'a str>,
}

impl<'a> Transcript<'a> {
    pub(crate) fn new(courses: &'a [String]) -> Self {
        Self {
            courses,
            taken: courses.iter().map(String::as_str).collect(),
        }
    }

    pub(crate) fn courses(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.courses.iter().map(String::as_str)
    }

    pub(crate) fn has(&self, course: &str) -> bool {
        self.taken.contains(course)
    }

    fn has_all(&self, courses: &[&str]) -> bool {
        courses.iter().all(|course| self.has(course))
    }

    fn has_any(&self, courses: &[&str]) -> bool {
        courses.iter().any(|course| self.has(course))
    }
}

/// Predicate deciding whether a single course is eligible for a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseMatcher {
    /// Exact membership in a fixed course set.
    AnyOf(&'static [&'static str]),
    /// Only the first `keep` listed courses are matchable. The remaining
    /// entries are documented offerings that never earn credit.
    LeadingOf {
        courses: &'static [&'static str],
        keep: usize,
    },
    /// Subject-level prefix match with an exclusion list.
    Prefixed {
        prefixes: &'static [&'static str],
        excluding: &'static [&'static str],
    },
    /// Either course of the pair counts, unless both were taken.
    ExclusivePair([&'static str; 2]),
    /// Either course of the pair counts, but only when both were taken.
    JointPair([&'static str; 2]),
    /// Matches when any inner matcher does.
    Either(&'static [CourseMatcher]),
}

impl CourseMatcher {
    pub(crate) fn matches(&self, course: &str, transcript: &Transcript<'_>) -> bool {
        match self {
            CourseMatcher::AnyOf(courses) => courses.contains(&course),
            CourseMatcher::LeadingOf { courses, keep } => courses
                .iter()
                .take(*keep)
                .any(|candidate| *candidate == course),
            CourseMatcher::Prefixed {
                prefixes,
                excluding,
            } => {
                prefixes.iter().any(|prefix| course.starts_with(*prefix))
                    && !excluding.contains(&course)
            }
            CourseMatcher::ExclusivePair(pair) => {
                pair.contains(&course) && !transcript.has_all(pair)
            }
            CourseMatcher::JointPair(pair) => pair.contains(&course) && transcript.has_all(pair),
            CourseMatcher::Either(matchers) => matchers
                .iter()
                .any(|matcher| matcher.matches(course, transcript)),
        }
    }
}

/// One elective category: matching courses in submitted order, optionally
/// capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub matcher: CourseMatcher,
    pub cap: Option<usize>,
}

impl Bucket {
    pub const fn capped(matcher: CourseMatcher, cap: usize) -> Self {
        Self {
            matcher,
            cap: Some(cap),
        }
    }

    pub const fn uncapped(matcher: CourseMatcher) -> Self {
        Self { matcher, cap: None }
    }

    pub(crate) fn collect(&self, transcript: &Transcript<'_>) -> Vec<String> {
        let limit = self.cap.unwrap_or(usize::MAX);
        transcript
            .courses()
            .filter(|course| self.matcher.matches(course, transcript))
            .take(limit)
            .map(str::to_string)
            .collect()
    }
}

/// Elective track chosen when any trigger course appears in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branch {
    pub triggers: &'static [&'static str],
    /// Courses credited whenever the branch is selected, taken or not.
    pub granted: &'static [&'static str],
    pub buckets: &'static [Bucket],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElectiveRule {
    /// Independent buckets concatenated in order.
    Buckets(&'static [Bucket]),
    /// Only the first branch whose triggers are present is evaluated.
    Branches(&'static [Branch]),
}

impl ElectiveRule {
    pub(crate) fn matches(&self, transcript: &Transcript<'_>) -> Vec<String> {
        match self {
            ElectiveRule::Buckets(buckets) => collect_buckets(buckets, transcript),
            ElectiveRule::Branches(branches) => branches
                .iter()
                .find(|branch| transcript.has_any(branch.triggers))
                .map(|branch| {
                    let mut matched: Vec<String> =
                        branch.granted.iter().map(|course| course.to_string()).collect();
                    matched.extend(collect_buckets(branch.buckets, transcript));
                    matched
                })
                .unwrap_or_default(),
        }
    }
}

fn collect_buckets(buckets: &[Bucket], transcript: &Transcript<'_>) -> Vec<String> {
    buckets
        .iter()
        .flat_map(|bucket| bucket.collect(transcript))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn prefix_matcher_honours_exclusions() {
        let matcher = CourseMatcher::Prefixed {
            prefixes: &["CS 3", "CS 4"],
            excluding: &["CS 499"],
        };
        let list = courses(&["CS 374", "CS 499", "CS 225"]);
        let transcript = Transcript::new(&list);

        assert!(matcher.matches("CS 374", &transcript));
        assert!(!matcher.matches("CS 499", &transcript));
        assert!(!matcher.matches("CS 225", &transcript));
    }

    #[test]
    fn exclusive_pair_drops_both_when_both_taken() {
        let matcher = CourseMatcher::ExclusivePair(["STAT 410", "STAT 420"]);

        let both = courses(&["STAT 410", "STAT 420"]);
        let transcript = Transcript::new(&both);
        assert!(!matcher.matches("STAT 410", &transcript));
        assert!(!matcher.matches("STAT 420", &transcript));

        let single = courses(&["STAT 410"]);
        let transcript = Transcript::new(&single);
        assert!(matcher.matches("STAT 410", &transcript));
    }

    #[test]
    fn joint_pair_requires_both() {
        let matcher = CourseMatcher::JointPair(["ACCY 201", "ACCY 202"]);

        let single = courses(&["ACCY 201"]);
        assert!(!matcher.matches("ACCY 201", &Transcript::new(&single)));

        let both = courses(&["ACCY 202", "ACCY 201"]);
        let transcript = Transcript::new(&both);
        assert!(matcher.matches("ACCY 201", &transcript));
        assert!(matcher.matches("ACCY 202", &transcript));
    }

    #[test]
    fn leading_matcher_ignores_entries_past_keep() {
        let matcher = CourseMatcher::LeadingOf {
            courses: &["IB 150", "IB 103", "IB 104"],
            keep: 1,
        };
        let list = courses(&["IB 103", "IB 150"]);
        let transcript = Transcript::new(&list);

        assert!(matcher.matches("IB 150", &transcript));
        assert!(!matcher.matches("IB 103", &transcript));
    }

    #[test]
    fn bucket_keeps_submission_order_and_cap() {
        let bucket = Bucket::capped(
            CourseMatcher::AnyOf(&["MATH 415", "MATH 416", "MATH 417"]),
            2,
        );
        let list = courses(&["MATH 417", "CS 225", "MATH 415", "MATH 416"]);

        assert_eq!(
            bucket.collect(&Transcript::new(&list)),
            vec!["MATH 417", "MATH 415"]
        );
    }

    #[test]
    fn duplicate_submissions_can_fill_a_bucket() {
        let bucket = Bucket::capped(CourseMatcher::AnyOf(&["PHYS 213", "PHYS 214"]), 2);
        let list = courses(&["PHYS 213", "PHYS 213"]);

        assert_eq!(
            bucket.collect(&Transcript::new(&list)),
            vec!["PHYS 213", "PHYS 213"]
        );
    }

    #[test]
    fn branches_stop_at_first_triggered_track() {
        const FIRST: &[Bucket] = &[Bucket::uncapped(CourseMatcher::AnyOf(&["A 1"]))];
        const SECOND: &[Bucket] = &[Bucket::uncapped(CourseMatcher::AnyOf(&["B 1"]))];
        const BRANCHES: &[Branch] = &[
            Branch {
                triggers: &["A 1"],
                granted: &[],
                buckets: FIRST,
            },
            Branch {
                triggers: &["B 1"],
                granted: &["B 0"],
                buckets: SECOND,
            },
        ];
        let rule = ElectiveRule::Branches(BRANCHES);

        let both = courses(&["B 1", "A 1"]);
        assert_eq!(rule.matches(&Transcript::new(&both)), vec!["A 1"]);

        let second = courses(&["B 1"]);
        assert_eq!(rule.matches(&Transcript::new(&second)), vec!["B 0", "B 1"]);

        let neither = courses(&["C 1"]);
        assert!(rule.matches(&Transcript::new(&neither)).is_empty());
    }
}
