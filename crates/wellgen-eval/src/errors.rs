use thiserror::Error;

/// Errors emitted by dataset evaluation.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset has {0} violation(s)")]
    Violations(usize),
}
