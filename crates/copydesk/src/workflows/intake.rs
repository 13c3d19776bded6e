//! Batch intake of article submissions from editorial desk CSV exports.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use super::review::domain::{self, ArticleSubmission};

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read editorial export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid editorial CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} has no article content")]
    EmptyContent { row: usize },
}

/// One article drawn from an editorial export, with the desk's submission
/// date when the export carries one.
#[derive(Debug, Clone)]
pub struct IntakeRecord {
    pub submission: ArticleSubmission,
    pub submitted_on: Option<NaiveDate>,
}

pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<IntakeRecord>, IntakeError> {
    let file = std::fs::File::open(path)?;
    from_reader(file)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Vec<IntakeRecord>, IntakeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<ArticleRow>().enumerate() {
        let row = row?;
        if row.content.trim().is_empty() {
            return Err(IntakeError::EmptyContent { row: index + 1 });
        }

        let submitted_on = row.submitted_date();
        records.push(IntakeRecord {
            submission: ArticleSubmission {
                title: row.title,
                content: row.content,
                language: row.language.unwrap_or_else(domain::default_language),
            },
            submitted_on,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ArticleRow {
    #[serde(rename = "Title", default, deserialize_with = "empty_string_as_none")]
    title: Option<String>,
    #[serde(rename = "Content")]
    content: String,
    #[serde(rename = "Language", default, deserialize_with = "empty_string_as_none")]
    language: Option<String>,
    #[serde(
        rename = "Submitted At",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    submitted_at: Option<String>,
}

impl ArticleRow {
    fn submitted_date(&self) -> Option<NaiveDate> {
        self.submitted_at
            .as_deref()
            .and_then(parse_datetime)
            .map(|dt| dt.date())
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}
