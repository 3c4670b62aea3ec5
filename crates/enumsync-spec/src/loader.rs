use std::path::Path;

use tracing::debug;

use crate::parser;
use crate::types::config::GeneratorConfig;
use crate::types::error::ErrorEntry;

/// Load a generator config from a JSON file.
#[allow(clippy::result_large_err)]
pub fn load_config(path: &Path) -> Result<GeneratorConfig, LoadError> {
    if !path.is_file() {
        return Err(LoadError::ConfigNotFound(
            path.to_string_lossy().into_owned(),
        ));
    }

    let file = path.to_string_lossy().into_owned();
    let content =
        std::fs::read_to_string(path).map_err(|e| LoadError::IoError(file.clone(), e))?;

    let config = parser::parse_config(&content, &file).map_err(LoadError::ConfigParseError)?;
    debug!(
        path = %file,
        entries = config.table.len(),
        "loaded generator config"
    );
    Ok(config)
}

/// Errors that prevent the config from loading at all
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("failed to parse config: {0}")]
    ConfigParseError(ErrorEntry),

    #[error("I/O error reading {0}: {1}")]
    IoError(String, std::io::Error),
}
