pub mod loader;
pub mod parser;
pub mod rules;
pub mod types;
pub mod validator;

// Re-exports
pub use loader::{load_config, LoadError};
pub use types::config::{GeneratorConfig, TargetMeta};
pub use types::error::{ErrorEntry, Severity, ValidationReport};
pub use types::table::{EnumEntry, EnumTable, INVALID_NAME};
pub use validator::validate;
