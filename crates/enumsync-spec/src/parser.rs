use crate::types::config::GeneratorConfig;
use crate::types::error::{ErrorEntry, E_PARSE_ERROR};

/// Parse a generator config from JSON text
#[allow(clippy::result_large_err)]
pub fn parse_config(content: &str, file_path: &str) -> Result<GeneratorConfig, ErrorEntry> {
    serde_json::from_str(content).map_err(|e| serde_error_to_entry(e, file_path))
}

/// Convert a serde_json error into a structured ErrorEntry
fn serde_error_to_entry(err: serde_json::Error, file_path: &str) -> ErrorEntry {
    let line = err.line();
    let col = err.column();
    let path = format!("$.line:{line}:col:{col}");

    ErrorEntry::error(
        E_PARSE_ERROR,
        format!("JSON parse error: {err}"),
        file_path,
        &path,
    )
    .with_suggestion("Check JSON syntax and field types")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_config() {
        let json = r#"{
            "typeName": "Status",
            "table": [
                { "name": "Ok", "value": 0 },
                { "name": "Busy", "value": 7 }
            ],
            "managed": { "path": "Status.cs", "namespace": "Acme.Status" },
            "native": { "path": "status.h", "namespace": "acme" }
        }"#;

        let config = parse_config(json, "enums.json").unwrap();
        assert_eq!(config.type_name, "Status");
        assert_eq!(config.table.len(), 2);
        assert_eq!(config.table.get("Busy"), Some(7));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_config("{ invalid json }", "enums.json").unwrap_err();
        assert_eq!(err.code, E_PARSE_ERROR);
        assert_eq!(err.file, "enums.json");
        assert!(err.message.contains("JSON parse error"));
    }

    #[test]
    fn test_parse_missing_target() {
        let json = r#"{ "table": [], "managed": { "path": "A.cs", "namespace": "A" } }"#;
        let err = parse_config(json, "enums.json").unwrap_err();
        assert!(err.message.contains("native"));
    }
}
