//! Minor progress evaluation.
//!
//! For every minor the evaluator collects elective and required matches,
//! resolves their credit hours and reports completion as a percentage of the
//! minor's credit-hour target, sorted from most to least complete.

use crate::catalog::CreditLookup;
use crate::minors::{Minor, MinorCatalog, MinorDefinition};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

/// Progress toward a single minor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinorProgress {
    pub minor: Minor,
    pub percentage: f64,
    pub current_credit_hours: u32,
    pub required_credit_hours: u32,
    pub elective_matches: Vec<String>,
    pub required_matches: Vec<String>,
}

/// Per-minor progress ordered by completion, highest first.
#[derive(Debug, Clone, PartialEq)]
pub struct MinorProgressReport {
    entries: Vec<MinorProgress>,
}

impl MinorProgressReport {
    pub fn entries(&self) -> &[MinorProgress] {
        &self.entries
    }

    pub fn get(&self, minor: Minor) -> Option<&MinorProgress> {
        self.entries.iter().find(|entry| entry.minor == minor)
    }

    pub fn percentage(&self, minor: Minor) -> Option<f64> {
        self.get(minor).map(|entry| entry.percentage)
    }

    /// Minor name to percentage, in report order.
    pub fn percentages(&self) -> PercentageMap<'_> {
        PercentageMap(&self.entries)
    }
}

/// Ordered `name -> percentage` view that serializes as a JSON object.
#[derive(Debug, Clone, Copy)]
pub struct PercentageMap<'a>(&'a [MinorProgress]);

impl<'a> PercentageMap<'a> {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + 'a {
        let entries = self.0;
        entries
            .iter()
            .map(|entry| (entry.minor.name(), entry.percentage))
    }
}

impl Serialize for PercentageMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, percentage) in self.iter() {
            map.serialize_entry(name, &percentage)?;
        }
        map.end()
    }
}

pub struct ProgressEvaluator {
    minors: &'static MinorCatalog,
}

impl Default for ProgressEvaluator {
    fn default() -> Self {
        Self::new(MinorCatalog::standard())
    }
}

impl ProgressEvaluator {
    pub fn new(minors: &'static MinorCatalog) -> Self {
        Self { minors }
    }

    pub fn evaluate<C: CreditLookup>(&self, courses: &[String], credits: &C) -> MinorProgressReport {
        let mut entries: Vec<MinorProgress> = self
            .minors
            .definitions()
            .iter()
            .map(|definition| evaluate_minor(definition, courses, credits))
            .collect();

        // `sort_by` is stable, so ties keep the declared minor order.
        entries.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));

        debug!(
            courses = courses.len(),
            leader = entries.first().map(|entry| entry.minor.name()),
            "minor progress evaluated"
        );

        MinorProgressReport { entries }
    }
}

fn evaluate_minor<C: CreditLookup>(
    definition: &MinorDefinition,
    courses: &[String],
    credits: &C,
) -> MinorProgress {
    let elective_matches = definition.elective_matches(courses);
    let required_matches = definition.required_matches(courses);

    // A course that is both required and matched as an elective is credited
    // by both lists.
    let current_credit_hours: u32 = elective_matches
        .iter()
        .chain(required_matches.iter())
        .map(|course| credits.credit_hours(course))
        .fold(0u32, u32::saturating_add);

    let percentage = if definition.required_credit_hours > 0 {
        100.0 * f64::from(current_credit_hours) / f64::from(definition.required_credit_hours)
    } else {
        0.0
    };

    MinorProgress {
        minor: definition.minor,
        percentage,
        current_credit_hours,
        required_credit_hours: definition.required_credit_hours,
        elective_matches,
        required_matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedCredits(HashMap<&'static str, u32>);

    impl CreditLookup for FixedCredits {
        fn credit_hours(&self, course: &str) -> u32 {
            self.0.get(course).copied().unwrap_or(0)
        }
    }

    struct FlatCredits(u32);

    impl CreditLookup for FlatCredits {
        fn credit_hours(&self, _course: &str) -> u32 {
            self.0
        }
    }

    fn courses(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn oversized_credit_values_saturate_instead_of_overflowing() {
        let report = ProgressEvaluator::default()
            .evaluate(&courses(&["CS 124", "CS 128"]), &FlatCredits(u32::MAX));
        let entry = report.get(Minor::ComputerScience).expect("present");

        assert_eq!(entry.current_credit_hours, u32::MAX);
        assert_eq!(report.entries()[0].minor, Minor::ComputerScience);
    }

    #[test]
    fn reports_every_minor_even_without_matches() {
        let report = ProgressEvaluator::default().evaluate(&courses(&["ART 101"]), &FlatCredits(3));

        assert_eq!(report.entries().len(), 10);
        let names: Vec<&str> = report.percentages().iter().map(|(name, _)| name).collect();
        let declared: Vec<&str> = Minor::ALL.iter().map(Minor::name).collect();
        assert_eq!(names, declared);
        assert!(report.entries().iter().all(|entry| entry.percentage == 0.0));
    }

    #[test]
    fn sorts_descending_and_keeps_declared_order_on_ties() {
        let report = ProgressEvaluator::default().evaluate(
            &courses(&["CS 225", "CS 124", "MATH 241", "PHYS 211"]),
            &FlatCredits(4),
        );

        let percentages: Vec<f64> = report.entries().iter().map(|e| e.percentage).collect();
        assert!(percentages.windows(2).all(|pair| pair[0] >= pair[1]));

        let order: Vec<Minor> = report.entries().iter().map(|entry| entry.minor).collect();
        // CS 225 is required for Computer Science and a Data Science elective.
        assert_eq!(order[0], Minor::ComputerScience);
        assert_eq!(order[1], Minor::Math);
        assert_eq!(order[2], Minor::DataScience);
        assert_eq!(order[3], Minor::Physics);
        assert_eq!(
            &order[4..],
            &[
                Minor::Business,
                Minor::BusinessAnalytics,
                Minor::Biology,
                Minor::Economics,
                Minor::Statistics,
                Minor::Spanish,
            ]
        );
    }

    #[test]
    fn computes_percentage_from_resolved_credits() {
        let credits = FixedCredits(HashMap::from([
            ("CS 124", 3),
            ("CS 128", 3),
            ("CS 173", 3),
            ("CS 225", 4),
            ("CS 374", 4),
        ]));
        let report = ProgressEvaluator::default().evaluate(
            &courses(&["CS 124", "CS 128", "CS 173", "CS 225", "CS 374"]),
            &credits,
        );

        let entry = report.get(Minor::ComputerScience).expect("present");
        assert_eq!(entry.current_credit_hours, 17);
        assert!(approx_eq(entry.percentage, 100.0 * 17.0 / 19.0));
    }

    #[test]
    fn over_completion_is_not_clamped() {
        let report = ProgressEvaluator::default().evaluate(
            &courses(&["SPAN 228", "SPAN 252", "SPAN 254", "SPAN 332", "SPAN 351", "SPAN 435"]),
            &FlatCredits(4),
        );

        let entry = report.get(Minor::Spanish).expect("present");
        // SPAN 228 is credited as required and as an elective.
        assert_eq!(entry.current_credit_hours, 28);
        assert!(entry.percentage > 100.0);
        assert_eq!(report.entries()[0].minor, Minor::Spanish);
    }

    #[test]
    fn empty_required_list_only_counts_electives() {
        let report = ProgressEvaluator::default()
            .evaluate(&courses(&["IB 150", "STAT 100"]), &FlatCredits(4));

        let biology = report.get(Minor::Biology).expect("present");
        assert!(biology.required_matches.is_empty());
        assert!(approx_eq(biology.percentage, 25.0));

        let statistics = report.get(Minor::Statistics).expect("present");
        assert!(statistics.required_matches.is_empty());
        assert_eq!(statistics.current_credit_hours, 4);
    }

    #[test]
    fn zero_credit_target_stays_at_zero() {
        use crate::minors::{Bucket, CourseMatcher, ElectiveRule, MinorDefinition};

        static ELECTIVES: &[Bucket] = &[Bucket::uncapped(CourseMatcher::AnyOf(&["CS 374"]))];
        let catalog: &'static MinorCatalog =
            Box::leak(Box::new(MinorCatalog::from_definitions(vec![MinorDefinition {
                minor: Minor::ComputerScience,
                required_courses: &[],
                required_credit_hours: 0,
                electives: ElectiveRule::Buckets(ELECTIVES),
            }])));

        let report = ProgressEvaluator::new(catalog).evaluate(&courses(&["CS 374"]), &FlatCredits(4));
        let entry = report.get(Minor::ComputerScience).expect("present");
        assert_eq!(entry.current_credit_hours, 4);
        assert_eq!(entry.percentage, 0.0);
    }

    #[test]
    fn percentages_serialize_in_report_order() {
        let report = ProgressEvaluator::default()
            .evaluate(&courses(&["PHYS 211", "PHYS 212"]), &FlatCredits(4));

        let json = serde_json::to_string(&report.percentages()).expect("serializes");
        assert!(json.starts_with("{\"Physics\":"));
        assert!(json.contains("\"Business Analytics\":0.0"));
    }
}
