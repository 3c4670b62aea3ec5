use std::path::{Component, Path};

use crate::types::config::GeneratorConfig;
use crate::types::error::{
    ErrorEntry, ValidationReport, E_EMPTY_TABLE, E_INVALID_HEADER, E_INVALID_PATH,
    E_PATH_CONFLICT,
};

/// Check the table is non-empty, that both targets get distinct, relative
/// output paths, and that header lines are line comments.
pub fn check(config: &GeneratorConfig, source: &str, report: &mut ValidationReport) {
    if config.table.is_empty() {
        report.push(
            ErrorEntry::warning(
                E_EMPTY_TABLE,
                format!("Enum '{}' has no members", config.type_name),
                source,
                "$.table",
            )
            .with_suggestion("Add at least one { \"name\", \"value\" } entry"),
        );
    }

    for (key, target) in [("managed", &config.managed), ("native", &config.native)] {
        if !is_relative_path(&target.path) {
            report.push(
                ErrorEntry::error(
                    E_INVALID_PATH,
                    format!("Output path '{}' must be relative", target.path),
                    source,
                    &format!("$.{key}.path"),
                )
                .with_suggestion("Use a path relative to the output directory"),
            );
        }

        for (i, line) in target.header.iter().enumerate() {
            if !line.is_empty() && !line.starts_with("//") {
                report.push(
                    ErrorEntry::error(
                        E_INVALID_HEADER,
                        format!("Header line '{line}' is not a '//' comment"),
                        source,
                        &format!("$.{key}.header[{i}]"),
                    )
                    .with_suggestion("Start every header line with '//'"),
                );
            }
        }
    }

    if normalized(&config.managed.path) == normalized(&config.native.path) {
        report.push(
            ErrorEntry::error(
                E_PATH_CONFLICT,
                format!(
                    "Both targets write to '{}'; the second would overwrite the first",
                    config.native.path
                ),
                source,
                "$.native.path",
            )
            .with_suggestion("Give each target its own output path"),
        );
    }
}

/// Components with `.` dropped, so `./a/b.h` and `a/b.h` compare equal.
fn normalized(path: &str) -> Vec<Component<'_>> {
    Path::new(path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn is_relative_path(path: &str) -> bool {
    let path = Path::new(path);
    path.components().next().is_some()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
