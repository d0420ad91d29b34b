use thiserror::Error;

/// One variant per pipeline stage that can fail, so the failing stage is
/// always identifiable from the message alone.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("Input error: {0}")]
    Input(String),

    #[error("Output target error: {0}")]
    OutputTarget(String),

    #[error("Schema parse error: {0}")]
    SchemaParse(String),

    #[error("Emit error: {0}")]
    Emit(String),
}
