use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the analysis pipeline
///
/// Unresolved replies and unusable text fragments are not errors; they are
/// reported through `ReplyDisposition` and `FragmentOutcome` instead.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("malformed message at index {index}: missing or null `{field}`")]
    MalformedMessage { index: usize, field: &'static str },

    #[error("{kind} not available at {path:?}: {source}")]
    MissingResource {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl AnalysisError {
    pub(crate) fn malformed(index: usize, field: &'static str) -> Self {
        Self::MalformedMessage { index, field }
    }

    pub(crate) fn missing(kind: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::MissingResource {
            kind,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
