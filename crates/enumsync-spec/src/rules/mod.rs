pub mod duplicate_names;
pub mod identifiers;
pub mod targets;
