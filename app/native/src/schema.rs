//! JSON Schema for the configuration file.

use crate::config::KuralConfig;

/// Generates a JSON Schema for the Kuralpaper configuration.
///
/// The schema includes all configuration options with their types,
/// descriptions, and default values.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(KuralConfig);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert("$id".to_string(), serde_json::json!("kuralpaper.schema.json"));
    }

    schema
}

/// Returns the schema as pretty-printed JSON.
#[must_use]
pub fn print_schema() -> String {
    serde_json::to_string_pretty(&generate_schema()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_describes_every_option() {
        let parsed: serde_json::Value = serde_json::from_str(&print_schema()).unwrap();

        assert_eq!(parsed["title"], "KuralConfig");
        assert_eq!(parsed["$id"], "kuralpaper.schema.json");
        for key in [
            "dataPath",
            "outputDir",
            "width",
            "height",
            "fonts",
            "headerLabel",
            "footerCaption",
            "applyWallpaper",
        ] {
            assert!(parsed["properties"][key].is_object(), "missing {key}");
        }
    }

    #[test]
    fn test_schema_records_defaults() {
        let parsed: serde_json::Value = serde_json::from_str(&print_schema()).unwrap();
        assert_eq!(parsed["properties"]["width"]["default"], 1920);
        assert_eq!(parsed["properties"]["footerCaption"]["default"], "~ THIRUVALLUVAR ~");
    }
}
