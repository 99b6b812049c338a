use thiserror::Error;

/// Core error type shared across wellgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A district name does not appear in the catalog.
    #[error("unknown district: {0}")]
    UnknownDistrict(String),
    /// A record violates the model contract.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Convenience alias for results returned by wellgen crates.
pub type Result<T> = std::result::Result<T, Error>;
