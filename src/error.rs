use thiserror::Error;

/// Errors raised by the pipeline stages themselves.
///
/// `Validation` covers structural problems caught before any transformation
/// starts: an empty table, missing required columns, or a mapping table that
/// cannot drive a remap. `Format` covers a field value that does not match
/// its documented shape, such as a duration missing a component.
///
/// Stages raise these synchronously and never recover from them; translating
/// them into log output and a process exit code is the caller's job.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RollupError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("format error: {0}")]
    Format(String),
}
