//! Course catalog snapshot and credit-hour resolution.
//!
//! The catalog is a CSV export keyed by `courseName`. Only the course name,
//! subject and credit-hour columns are read; everything else in the export is
//! ignored.

mod credits;

pub use credits::{parse_credit_hours, CreditLookup, MAX_CREDIT_HOURS};

use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

const COURSE_NAME_COLUMN: &str = "courseName";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("course catalog not found at {path}")]
    NotFound { path: String },
    #[error("failed to read course catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid course catalog data: {0}")]
    Csv(#[from] csv::Error),
    #[error("course catalog is missing the '{0}' column")]
    MissingColumn(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogRow {
    #[serde(rename = "courseName")]
    pub course_name: String,
    #[serde(rename = "Subject", default, deserialize_with = "empty_string_as_none")]
    pub subject: Option<String>,
    #[serde(
        rename = "Credit Hours",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub credit_hours: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// In-memory snapshot of the course catalog, read fresh for every request.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    rows: Vec<CatalogRow>,
}

impl CourseCatalog {
    pub fn from_rows(rows: Vec<CatalogRow>) -> Self {
        Self { rows }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => CatalogError::NotFound {
                path: path.display().to_string(),
            },
            _ => CatalogError::Io(err),
        })?;

        let catalog = Self::from_reader(file)?;
        debug!(path = %path.display(), rows = catalog.len(), "course catalog loaded");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if !headers.iter().any(|header| header == COURSE_NAME_COLUMN) {
            return Err(CatalogError::MissingColumn(COURSE_NAME_COLUMN));
        }

        let mut rows = Vec::new();
        for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            match record {
                Ok(row) => rows.push(row),
                Err(err) if matches!(err.kind(), csv::ErrorKind::Io(_)) => {
                    return Err(CatalogError::Csv(err));
                }
                Err(err) => {
                    // Header is line 1, so data rows start at line 2.
                    warn!(line = index + 2, error = %err, "skipping malformed catalog row");
                }
            }
        }

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    /// First row whose course name matches exactly.
    pub fn find(&self, course: &str) -> Option<&CatalogRow> {
        self.rows.iter().find(|row| row.course_name == course)
    }

    /// Distinct course names in file order.
    pub fn course_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter(|row| seen.insert(row.course_name.as_str()))
            .map(|row| row.course_name.clone())
            .collect()
    }

    /// Distinct, non-empty subjects in file order.
    pub fn subjects(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter_map(|row| row.subject.as_deref())
            .filter(|subject| seen.insert(*subject))
            .map(str::to_string)
            .collect()
    }
}

impl CreditLookup for CourseCatalog {
    fn credit_hours(&self, course: &str) -> u32 {
        self.find(course)
            .and_then(|row| row.credit_hours.as_deref())
            .and_then(parse_credit_hours)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    const SAMPLE: &str = "courseName,Subject,Credit Hours,Description\n\
CS 225,CS,4 hours.,Data Structures\n\
CS 225,CS,3 hours.,Duplicate listing\n\
STAT 107,STAT,3 hours.,Data Science Discovery\n\
SPAN 228,,3 hours.,Spanish Composition\n\
IB 150,IB,,Organismal Biology\n\
BADM 310,BADM,TBD,Management\n";

    fn sample_catalog() -> CourseCatalog {
        CourseCatalog::from_reader(Cursor::new(SAMPLE)).expect("sample catalog parses")
    }

    #[test]
    fn resolves_first_matching_row() {
        let catalog = sample_catalog();
        assert_eq!(catalog.credit_hours("CS 225"), 4);
        assert_eq!(catalog.credit_hours("STAT 107"), 3);
    }

    #[test]
    fn unknown_and_malformed_rows_resolve_to_zero() {
        let catalog = sample_catalog();
        assert_eq!(catalog.credit_hours("UNKNOWN 999"), 0);
        assert_eq!(catalog.credit_hours("IB 150"), 0);
        assert_eq!(catalog.credit_hours("BADM 310"), 0);
    }

    #[test]
    fn lookup_is_exact_match() {
        let catalog = sample_catalog();
        assert_eq!(catalog.credit_hours("cs 225"), 0);
        assert_eq!(catalog.credit_hours("CS225"), 0);
    }

    #[test]
    fn course_names_are_not_normalized() {
        let catalog = CourseCatalog::from_reader(Cursor::new(
            " courseName , Credit Hours \n CS 225,4 hours.\nCS 374 ,4 hours.\n",
        ))
        .expect("padded headers accepted");

        assert_eq!(catalog.credit_hours("CS 225"), 0);
        assert_eq!(catalog.credit_hours(" CS 225"), 4);
        assert_eq!(catalog.credit_hours("CS 374"), 0);
        assert_eq!(catalog.course_names(), vec![" CS 225", "CS 374 "]);
    }

    #[test]
    fn lists_distinct_names_and_subjects_in_file_order() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.course_names(),
            vec!["CS 225", "STAT 107", "SPAN 228", "IB 150", "BADM 310"]
        );
        assert_eq!(catalog.subjects(), vec!["CS", "STAT", "IB", "BADM"]);
    }

    #[test]
    fn rejects_catalog_without_course_name_column() {
        let err = CourseCatalog::from_reader(Cursor::new("name,Credit Hours\nCS 225,4\n"))
            .expect_err("missing column rejected");
        assert!(matches!(err, CatalogError::MissingColumn("courseName")));
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = CourseCatalog::from_path(dir.path().join("absent.csv"))
            .expect_err("missing file rejected");
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[test]
    fn loads_catalog_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write sample");

        let catalog = CourseCatalog::from_path(file.path()).expect("catalog loads");
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.credit_hours("SPAN 228"), 3);
    }
}
