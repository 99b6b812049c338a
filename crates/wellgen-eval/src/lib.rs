//! Evaluation of generated well datasets.
//!
//! Re-derives every rule a record must satisfy from its district and its
//! own readings, and reports each mismatch as a structured violation.

pub mod checks;
pub mod engine;
pub mod errors;
pub mod model;
pub mod report;

pub use engine::{evaluate, write_violations};
pub use errors::EvaluationError;
pub use model::{EvaluateOptions, EvaluationReport, Violation};
pub use report::{render_report, write_report};
