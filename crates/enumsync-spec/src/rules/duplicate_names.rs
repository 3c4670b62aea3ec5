use indexmap::IndexMap;

use crate::types::config::GeneratorConfig;
use crate::types::error::{ErrorEntry, ValidationReport, E_DUPLICATE_SYMBOL};

/// Report entry names declared more than once.
///
/// Values may repeat; only names must be unique, since every target emits
/// one member per entry.
pub fn check(config: &GeneratorConfig, source: &str, report: &mut ValidationReport) {
    let mut first_seen: IndexMap<&str, usize> = IndexMap::new();

    for (i, entry) in config.table.iter().enumerate() {
        match first_seen.get(entry.name.as_str()) {
            Some(&first) => {
                report.push(
                    ErrorEntry::error(
                        E_DUPLICATE_SYMBOL,
                        format!(
                            "Duplicate enum member '{}' (first declared at index {})",
                            entry.name, first
                        ),
                        source,
                        &format!("$.table[{i}].name"),
                    )
                    .with_suggestion("Rename or remove one of the entries"),
                );
            }
            None => {
                first_seen.insert(entry.name.as_str(), i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::table::EnumTable;

    fn config_with(table: EnumTable) -> GeneratorConfig {
        GeneratorConfig {
            table,
            ..GeneratorConfig::builtin()
        }
    }

    #[test]
    fn test_reports_each_repeat() {
        let config = config_with(
            EnumTable::new()
                .with_entry("NoDevice", 100)
                .with_entry("NoDevice", 101)
                .with_entry("NoDevice", 102),
        );
        let mut report = ValidationReport::success();
        check(&config, "<builtin>", &mut report);

        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].path, "$.table[1].name");
        assert_eq!(report.errors[1].path, "$.table[2].name");
        assert!(report.errors[0].message.contains("index 0"));
    }

    #[test]
    fn test_duplicate_values_are_allowed() {
        let config = config_with(EnumTable::new().with_entry("A", 1).with_entry("B", 1));
        let mut report = ValidationReport::success();
        check(&config, "<builtin>", &mut report);
        assert!(report.ok);
    }
}
