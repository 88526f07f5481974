//! Loading and selecting quotation records.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rand::Rng;
use serde::Deserialize;

use super::record::QuotationRecord;

/// Errors produced while loading or selecting quotations.
#[derive(Debug)]
pub enum DataError {
    /// The data file is missing, unreadable or structurally invalid.
    Format { path: String, reason: String },
    /// The collection holds no quotations.
    EmptyCollection,
    /// No quotation carries the requested number.
    NotFound(String),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format { path, reason } => {
                write!(f, "Invalid quotation data in {path}: {reason}")
            }
            Self::EmptyCollection => write!(f, "The collection has no quotations"),
            Self::NotFound(number) => write!(f, "No quotation numbered {number}"),
        }
    }
}

impl std::error::Error for DataError {}

/// Top-level document layout: `{ "features": [ { "properties": {...} }, ... ] }`.
#[derive(Deserialize)]
struct Document {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    properties: QuotationRecord,
}

/// Loads every quotation from the JSON document at `path`, in file order.
///
/// # Errors
///
/// Returns `DataError::Format` if the file cannot be opened or read, is not
/// JSON, lacks the `features` array, or has an entry without `properties`.
pub fn load_collection(path: &Path) -> Result<Vec<QuotationRecord>, DataError> {
    let format_error = |reason: String| DataError::Format {
        path: path.display().to_string(),
        reason,
    };

    let file = File::open(path).map_err(|err| format_error(err.to_string()))?;
    let document: Document = serde_json::from_reader(BufReader::new(file))
        .map_err(|err| format_error(err.to_string()))?;

    let records: Vec<QuotationRecord> =
        document.features.into_iter().map(|feature| feature.properties).collect();

    tracing::debug!(path = %path.display(), count = records.len(), "loaded quotations");

    Ok(records)
}

/// Picks one quotation uniformly at random using the thread-local RNG.
///
/// # Errors
///
/// Returns `DataError::EmptyCollection` if `collection` is empty.
pub fn pick_random(collection: &[QuotationRecord]) -> Result<&QuotationRecord, DataError> {
    pick_random_with(collection, &mut rand::rng())
}

/// Picks one quotation uniformly at random using the given RNG.
///
/// # Errors
///
/// Returns `DataError::EmptyCollection` if `collection` is empty.
pub fn pick_random_with<'a, R: Rng + ?Sized>(
    collection: &'a [QuotationRecord],
    rng: &mut R,
) -> Result<&'a QuotationRecord, DataError> {
    if collection.is_empty() {
        return Err(DataError::EmptyCollection);
    }

    let index = rng.random_range(0..collection.len());
    Ok(&collection[index])
}

/// Finds the quotation whose sequence number equals `number`.
///
/// # Errors
///
/// Returns `DataError::EmptyCollection` if `collection` is empty and
/// `DataError::NotFound` if no record matches.
pub fn find_by_number<'a>(
    collection: &'a [QuotationRecord],
    number: &str,
) -> Result<&'a QuotationRecord, DataError> {
    if collection.is_empty() {
        return Err(DataError::EmptyCollection);
    }

    let number = number.trim();
    collection
        .iter()
        .find(|record| record.sequence_number.trim() == number)
        .ok_or_else(|| DataError::NotFound(number.to_string()))
}
