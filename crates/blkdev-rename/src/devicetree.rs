//! Reading the rename node from a flattened device tree.
//!
//! `/proc/device-tree` exposes every node as a directory and every
//! property as a file. String-list properties hold NUL-terminated strings
//! back to back.

use crate::error::{RenameError, RenameResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Property listing the devices to rename.
pub const ACTUAL_DEV: &str = "actual-dev";
/// Property listing the new names, index-aligned with [`ACTUAL_DEV`].
pub const RENAME_DEV: &str = "rename-dev";

/// Split a device-tree string list into its strings.
///
/// # Errors
///
/// Returns [`RenameError::DeviceTree`] if a string is not valid UTF-8.
pub fn parse_string_list(path: &Path, bytes: &[u8]) -> RenameResult<Vec<String>> {
    let bytes = bytes.strip_suffix(&[0]).unwrap_or(bytes);
    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    bytes
        .split(|&b| b == 0)
        .map(|s| {
            String::from_utf8(s.to_vec()).map_err(|e| RenameError::DeviceTree {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Read a string-list property. A missing property reads as an empty list.
///
/// # Errors
///
/// Returns an I/O error other than not-found, or a parse error.
pub fn read_string_list(node: &Path, property: &str) -> RenameResult<Vec<String>> {
    let path = node.join(property);
    match fs::read(&path) {
        Ok(bytes) => parse_string_list(&path, &bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(RenameError::io(path, e)),
    }
}

/// Find the first node, depth first in name order, whose `compatible`
/// list contains `compatible`.
///
/// # Errors
///
/// Returns an I/O error if `root` or a node directory cannot be listed.
pub fn find_compatible_node(root: &Path, compatible: &str) -> RenameResult<Option<PathBuf>> {
    if read_string_list(root, "compatible")?
        .iter()
        .any(|c| c == compatible)
    {
        return Ok(Some(root.to_path_buf()));
    }

    let mut children = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| RenameError::io(root, e))? {
        let entry = entry.map_err(|e| RenameError::io(root, e))?;
        let file_type = entry.file_type().map_err(|e| RenameError::io(entry.path(), e))?;
        if file_type.is_dir() {
            children.push(entry.path());
        }
    }
    children.sort();

    for child in children {
        if let Some(found) = find_compatible_node(&child, compatible)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

/// The rename node's paired name lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameNode {
    /// Node directory.
    pub path: PathBuf,
    /// Current device names.
    pub actual_devs: Vec<String>,
    /// New names, by index.
    pub rename_devs: Vec<String>,
}

impl RenameNode {
    /// Locate and read the rename node under `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be walked or a property is malformed.
    pub fn load(root: &Path, compatible: &str) -> RenameResult<Option<Self>> {
        let Some(path) = find_compatible_node(root, compatible)? else {
            return Ok(None);
        };
        let node = Self {
            actual_devs: read_string_list(&path, ACTUAL_DEV)?,
            rename_devs: read_string_list(&path, RENAME_DEV)?,
            path,
        };
        debug!(
            node = %node.path.display(),
            actual = node.actual_devs.len(),
            rename = node.rename_devs.len(),
            "Found rename node"
        );
        Ok(Some(node))
    }

    /// Build a node from in-memory lists.
    pub fn new<A, R>(actual_devs: A, rename_devs: R) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            path: PathBuf::new(),
            actual_devs: actual_devs.into_iter().map(Into::into).collect(),
            rename_devs: rename_devs.into_iter().map(Into::into).collect(),
        }
    }

    /// New name for `actual_devs[index]`.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::MissingRenameTarget`] if `rename-dev` is too short.
    pub fn rename_target(&self, index: usize) -> RenameResult<&str> {
        self.rename_devs
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| RenameError::MissingRenameTarget {
                actual: self.actual_devs.get(index).cloned().unwrap_or_default(),
                index,
            })
    }
}
