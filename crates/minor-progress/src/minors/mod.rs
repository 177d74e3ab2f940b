//! Static rule table for the supported minors.
//!
//! Each minor pairs a required-course list and a credit-hour target with a
//! declarative elective rule. The table is built once per process and shared
//! by every evaluation.

mod rules;
mod table;

pub use rules::{Branch, Bucket, CourseMatcher, ElectiveRule};
pub(crate) use rules::Transcript;

use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Minor {
    Business,
    BusinessAnalytics,
    Biology,
    ComputerScience,
    Math,
    DataScience,
    Economics,
    Statistics,
    Spanish,
    Physics,
}

impl Minor {
    /// Every minor in declared order. Progress ties keep this order.
    pub const ALL: [Minor; 10] = [
        Minor::Business,
        Minor::BusinessAnalytics,
        Minor::Biology,
        Minor::ComputerScience,
        Minor::Math,
        Minor::DataScience,
        Minor::Economics,
        Minor::Statistics,
        Minor::Spanish,
        Minor::Physics,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Minor::Business => "Business",
            Minor::BusinessAnalytics => "Business Analytics",
            Minor::Biology => "Biology",
            Minor::ComputerScience => "Computer Science",
            Minor::Math => "Math",
            Minor::DataScience => "Data Science",
            Minor::Economics => "Economics",
            Minor::Statistics => "Statistics",
            Minor::Spanish => "Spanish",
            Minor::Physics => "Physics",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|minor| minor.name() == name)
    }
}

impl fmt::Display for Minor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Minor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinorDefinition {
    pub minor: Minor,
    pub required_courses: &'static [&'static str],
    pub required_credit_hours: u32,
    pub electives: ElectiveRule,
}

impl MinorDefinition {
    /// Elective courses credited toward this minor, in match order.
    pub fn elective_matches(&self, courses: &[String]) -> Vec<String> {
        self.electives.matches(&Transcript::new(courses))
    }

    /// Required courses present in the submission, each counted once.
    pub fn required_matches(&self, courses: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        courses
            .iter()
            .filter(|course| self.required_courses.contains(&course.as_str()))
            .filter(|course| seen.insert(course.as_str()))
            .cloned()
            .collect()
    }
}

#[derive(Debug)]
pub struct MinorCatalog {
    definitions: Vec<MinorDefinition>,
}

impl MinorCatalog {
    pub fn standard() -> &'static MinorCatalog {
        static STANDARD: OnceLock<MinorCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| MinorCatalog {
            definitions: table::standard_minor_definitions(),
        })
    }

    pub fn from_definitions(definitions: Vec<MinorDefinition>) -> Self {
        Self { definitions }
    }

    pub fn definitions(&self) -> &[MinorDefinition] {
        &self.definitions
    }

    pub fn get(&self, minor: Minor) -> Option<&MinorDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.minor == minor)
    }
}
