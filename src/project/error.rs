//! Error types for corpus loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort a corpus load.
///
/// Problems with individual files never do: they are logged and the file is
/// left out.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A workspace root does not exist or is not a directory.
    #[error("Directory not found: {}", .path.display())]
    RootNotFound { path: PathBuf },

    /// A workspace root could not be read.
    #[error("Failed to read directory {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl LoadError {
    pub fn root_not_found(path: impl AsRef<Path>) -> Self {
        Self::RootNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn walk(path: impl AsRef<Path>, source: walkdir::Error) -> Self {
        Self::Walk {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
