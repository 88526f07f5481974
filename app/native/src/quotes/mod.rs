//! Quotation data: the record model and the loader that reads a collection
//! from disk and selects one entry.

pub mod loader;
pub mod record;

pub use loader::{DataError, find_by_number, load_collection, pick_random, pick_random_with};
pub use record::QuotationRecord;
