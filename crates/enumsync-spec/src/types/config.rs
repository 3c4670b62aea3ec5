use serde::{Deserialize, Serialize};

use super::table::EnumTable;

/// Name of the generated enum type in every target.
pub const DEFAULT_TYPE_NAME: &str = "InitErrors";

/// License header written at the top of every generated file.
pub const LICENSE_HEADER: [&str; 3] = [
    "// Copyright (c) 2020, Meta View, Inc.",
    "// All rights reserved.",
    "// SPDX-License-Identifier: UNLICENSED",
];

/// Per-target output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetMeta {
    /// Output path, relative to the output root
    pub path: String,

    /// Namespace the enum is declared in (dotted for C#, plain for C++)
    pub namespace: String,

    /// Comment lines emitted verbatim before anything else
    #[serde(default = "default_header")]
    pub header: Vec<String>,
}

impl TargetMeta {
    pub fn new(path: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            namespace: namespace.into(),
            header: default_header(),
        }
    }
}

/// Everything the generator needs: the shared table and both targets.
///
/// Built once and never mutated; emitters only borrow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Enum type name (e.g., "InitErrors")
    #[serde(default = "default_type_name")]
    pub type_name: String,

    /// Shared constants, in emission order
    pub table: EnumTable,

    /// C# output
    pub managed: TargetMeta,

    /// C++ output
    pub native: TargetMeta,
}

impl GeneratorConfig {
    /// The `InitErrors` table shared by the Unity package and the native plugin.
    pub fn builtin() -> Self {
        Self {
            type_name: default_type_name(),
            table: builtin_table(),
            managed: TargetMeta::new(
                "com.metavision.unity/Runtime/InitErrors.cs",
                "Unity.XR.MetaView",
            ),
            native: TargetMeta::new("Model/InitErrors.h", "metaview"),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_table() -> EnumTable {
    EnumTable::new()
        .with_entry("None", 0)
        .with_entry("NotInitialized", 1)
        .with_entry("NoDevice", 100)
        .with_entry("TooManyDevices", 101)
}

fn default_type_name() -> String {
    DEFAULT_TYPE_NAME.to_string()
}

fn default_header() -> Vec<String> {
    LICENSE_HEADER.iter().map(|s| s.to_string()).collect()
}
