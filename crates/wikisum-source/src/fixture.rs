//! Canned records for test mode.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;
use wikisum_report::Record;

use crate::source::{PageSource, SourceError};

/// In-memory source keyed by page id.
///
/// Lookups match the request identifier against [`Record::page_id`]
/// exactly; titles are not resolved.
///
/// # Example
///
/// ```
/// use wikisum_source::{FixtureSource, PageSource};
///
/// let source = FixtureSource::builtin();
/// let record = source.fetch("16815").unwrap();
/// assert_eq!(record.title, "Kraków");
/// assert!(source.fetch("0").is_err());
/// ```
#[derive(Debug, Default)]
pub struct FixtureSource {
    records: HashMap<String, Record>,
}

impl FixtureSource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Source holding the built-in pages (Kraków and New York City).
    #[must_use]
    pub fn builtin() -> Self {
        Self::new()
            .with_record(Record::new(
                "Kraków",
                "http://en.wikipedia.org/wiki/Krak%C3%B3w",
                "16815",
                "657359058",
                "658830708",
            ))
            .with_record(Record::new(
                "New York City",
                "http://en.wikipedia.org/wiki/New_york_city",
                "645042",
                "658917492",
                "658950766",
            ))
    }

    /// Add a record, replacing any with the same page id.
    #[must_use]
    pub fn with_record(mut self, record: Record) -> Self {
        self.records.insert(record.page_id.clone(), record);
        self
    }

    /// Add records from a JSON file holding an array of records.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] if the file cannot be read and
    /// [`SourceError::Json`] if it is not a valid record array.
    pub fn with_records_from_file(self, path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path)?;
        let records: Vec<Record> = serde_json::from_str(&content)?;
        debug!(count = records.len(), path = %path.display(), "Loaded fixture records");
        Ok(records.into_iter().fold(self, Self::with_record))
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the source holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PageSource for FixtureSource {
    fn fetch(&self, id: &str) -> Result<Record, SourceError> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(id.to_owned()))
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}
