use std::path::PathBuf;
use thiserror::Error;

use crate::sentinel::SentinelError;

#[derive(Debug, Error)]
pub enum VifloError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(
        "{}: contains multiple sentinel blocks ({source}). \
         Remove duplicates manually before running 'viflo init'.",
        path.display()
    )]
    MultipleSentinelBlocks {
        path: PathBuf,
        #[source]
        source: SentinelError,
    },

    #[error(
        "{}: sentinel markers are unbalanced ({source}). \
         Fix the markers manually before running 'viflo init'.",
        path.display()
    )]
    UnbalancedSentinel {
        path: PathBuf,
        #[source]
        source: SentinelError,
    },

    #[error("{}: malformed settings: {reason}", path.display())]
    MalformedSettings { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl VifloError {
    /// Attach the offending file to a marker error from the pure merge.
    pub fn sentinel(path: impl Into<PathBuf>, source: SentinelError) -> Self {
        let path = path.into();
        match source {
            SentinelError::Multiple { .. } => VifloError::MultipleSentinelBlocks { path, source },
            SentinelError::Unbalanced { .. } => VifloError::UnbalancedSentinel { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, VifloError>;
