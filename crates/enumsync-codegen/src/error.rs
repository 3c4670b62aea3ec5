use enumsync_spec::ValidationReport;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("invalid generator config: {0}")]
    InvalidConfig(ValidationReport),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
