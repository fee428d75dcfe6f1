use thiserror::Error;

/// Errors raised while building a pipeline.
///
/// Failures inside user callables are never wrapped here; they reach the
/// caller of `call` untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The requested result unpack mode is not recognized or not implemented.
    #[error("Unsupported unpack result: {0}")]
    UnsupportedUnpack(String),
}

/// Result type for pipeline construction
pub type Result<T> = std::result::Result<T, PipelineError>;
