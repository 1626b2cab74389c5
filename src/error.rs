use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Failures raised while validating or materializing a [`crate::tree::Tree`].
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("creating directory {path}")]
    CreateDir {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("writing {path}")]
    WriteFile {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid entry name `{name}` at {path}: {reason}")]
    InvalidName {
        path: Utf8PathBuf,
        name: String,
        reason: &'static str,
    },
}

impl ScaffoldError {
    /// Path of the entry that caused the failure.
    pub fn path(&self) -> &Utf8Path {
        match self {
            ScaffoldError::CreateDir { path, .. }
            | ScaffoldError::WriteFile { path, .. }
            | ScaffoldError::InvalidName { path, .. } => path,
        }
    }

    pub fn is_filesystem(&self) -> bool {
        matches!(
            self,
            ScaffoldError::CreateDir { .. } | ScaffoldError::WriteFile { .. }
        )
    }
}
