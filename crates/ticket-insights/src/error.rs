use std::path::PathBuf;

use thiserror::Error;

use crate::models::ErrorCode;

/// Failures the engine can hit while loading or querying the dataset.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("ticket dataset not found at {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("ticket dataset at {} is malformed: {reason}", .path.display())]
    MalformedSource { path: PathBuf, reason: String },

    #[error("query failed: {0}")]
    Query(String),
}

impl EngineError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedSource {
            path: path.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::SourceNotFound { .. } => ErrorCode::SourceNotFound,
            Self::MalformedSource { .. } => ErrorCode::MalformedSource,
            Self::Query(_) => ErrorCode::QueryError,
        }
    }
}
