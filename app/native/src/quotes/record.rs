//! Quotation record model.
//!
//! The source dataset is a GeoJSON-like document where every entry keeps its
//! text fields in a nested `properties` object using the dataset's own key
//! names. [`QuotationRecord`] maps those keys onto descriptive field names.

use serde::{Deserialize, Deserializer, Serialize};

/// One quotation from the collection.
///
/// Every field defaults to the empty string when the source entry omits it;
/// records are not validated on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationRecord {
    /// First line in the primary (Tamil Unicode) script. May hold both lines
    /// separated by a newline.
    #[serde(rename = "kural_tamil1", default)]
    pub primary_script_line_1: String,

    /// Second line in the primary script, when stored separately. Kept for
    /// output only; the wallpaper reads the primary script from line 1.
    #[serde(rename = "kural_tamil2", default)]
    pub primary_script_line_2: String,

    /// First line in the fallback (Bamini-encoded) script.
    #[serde(rename = "kural_bamini1", default)]
    pub fallback_script_line_1: String,

    /// Second line in the fallback script.
    #[serde(rename = "kural_bamini2", default)]
    pub fallback_script_line_2: String,

    /// English explanation of the couplet.
    #[serde(rename = "kuralvilakam_english", default)]
    pub explanation_text: String,

    /// Number of the couplet within the collection (1-1330).
    #[serde(rename = "kural_no", default, deserialize_with = "text_or_number")]
    pub sequence_number: String,

    /// English name of the chapter (adhikaram).
    #[serde(rename = "adhikarm_english", default)]
    pub chapter_name: String,
}

/// A scalar that may appear as either a JSON string or number.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
    Null(()),
}

/// Accepts `"1330"`, `1330` or `null` and stores the value as text.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
        TextOrNumber::Null(()) => String::new(),
    })
}
