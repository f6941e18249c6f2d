use std::path::Path;

use thiserror::Error;

use crate::domain::Record;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("record #{index} has a missing or empty name")]
    MissingName { index: usize },
}

/// Loads the gallery dataset once at startup.
///
/// Any failure (I/O, malformed JSON, a record without a name) fails the
/// load as a whole. The caller logs the error and keeps the gallery empty;
/// there is no retry.
pub async fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, DataError> {
    let raw = tokio::fs::read_to_string(path).await?;
    parse_records(&raw)
}

/// Parses and validates a JSON array of records.
pub fn parse_records(raw: &str) -> Result<Vec<Record>, DataError> {
    let records: Vec<Record> = serde_json::from_str(raw)?;
    validate_records(&records)?;
    Ok(records)
}

fn validate_records(records: &[Record]) -> Result<(), DataError> {
    for (index, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() {
            return Err(DataError::MissingName { index });
        }
    }
    Ok(())
}
