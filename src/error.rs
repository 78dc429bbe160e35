use derive_more::Display;

/// Structural errors only: the engine absorbs missing data with documented
/// defaults, so the sole failures are programmer errors at the call site.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum EngineError {
    #[display(fmt = "per_page must be at least 1")]
    InvalidPageSize,
    #[display(fmt = "trailing window must span at least one bucket")]
    EmptyWindow,
}

impl std::error::Error for EngineError {}

pub type Result<T> = std::result::Result<T, EngineError>;
