//! Error types for the rename pass.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the block-device rename pass.
///
/// Every variant except a registry failure while renaming aborts the pass
/// before any rename is applied.
#[derive(Debug, Error)]
pub enum RenameError {
    /// `actual-dev[index]` does not name an existing block device.
    #[error("no block device at {}", path.display())]
    NotFound {
        /// Device path that failed to resolve.
        path: PathBuf,
    },

    /// `rename-dev` has no entry for `actual-dev[index]`.
    #[error("rename-dev for actual-dev = {actual} (index {index}) is missing")]
    MissingRenameTarget {
        /// Device that has no new name.
        actual: String,
        /// Position in the `actual-dev` list.
        index: usize,
    },

    /// A new name is not a single path component.
    #[error("{name:?} is not a valid block device name")]
    InvalidName {
        /// Rejected name.
        name: String,
    },

    /// The new name is already taken.
    #[error("block device name {name} already exists")]
    AlreadyExists {
        /// Conflicting name.
        name: String,
    },

    /// Malformed device-tree property.
    #[error("invalid device-tree property {}: {reason}", path.display())]
    DeviceTree {
        /// Property file.
        path: PathBuf,
        /// What is wrong with it.
        reason: String,
    },

    /// Filesystem access failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl RenameError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for rename operations.
pub type RenameResult<T> = Result<T, RenameError>;
