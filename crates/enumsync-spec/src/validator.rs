use tracing::debug;

use crate::rules;
use crate::types::config::GeneratorConfig;
use crate::types::error::ValidationReport;

/// Validate a generator config.
/// Runs all rules and returns a consolidated report; `source` names where
/// the config came from and is copied into every entry.
pub fn validate(config: &GeneratorConfig, source: &str) -> ValidationReport {
    let mut report = ValidationReport::success();

    rules::duplicate_names::check(config, source, &mut report);
    rules::identifiers::check(config, source, &mut report);
    rules::targets::check(config, source, &mut report);

    debug!(source, %report, "validated generator config");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::error::{E_DUPLICATE_SYMBOL, E_INVALID_IDENTIFIER};
    use crate::types::table::EnumTable;

    #[test]
    fn test_builtin_config_is_clean() {
        let report = validate(&GeneratorConfig::builtin(), "<builtin>");
        assert!(report.ok);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_collects_every_problem() {
        let mut config = GeneratorConfig::builtin();
        config.table = EnumTable::new()
            .with_entry("A", 0)
            .with_entry("A", 1)
            .with_entry("9Lives", 2);

        let report = validate(&config, "<builtin>");
        assert!(report.has_errors());
        assert!(report.contains_code(E_DUPLICATE_SYMBOL));
        assert!(report.contains_code(E_INVALID_IDENTIFIER));
    }
}
