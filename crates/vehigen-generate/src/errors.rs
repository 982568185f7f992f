use std::path::PathBuf;

use thiserror::Error;

use crate::checks::Violation;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    /// A [`FakeSource::choose`](crate::FakeSource::choose) implementation
    /// returned nothing for a reference table. The built-in tables are never
    /// empty, so only custom sources reach this.
    #[error("reference table '{0}' is empty")]
    EmptyTable(&'static str),
    #[error("invalid value: {0}")]
    Value(#[from] vehigen_core::Error),
    #[error("record {index} violates invariants: {violations:?}")]
    InvariantViolation {
        index: usize,
        violations: Vec<Violation>,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
