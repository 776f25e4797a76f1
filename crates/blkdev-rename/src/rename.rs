//! The rename pass.
//!
//! Every `actual-dev[i]` is resolved and paired with `rename-dev[i]` before
//! anything is renamed, so a bad entry anywhere in the lists leaves every
//! device under its original name. Once renaming starts, a registry failure
//! stops the pass; renames already applied are kept.

use crate::devicetree::RenameNode;
use crate::error::{RenameError, RenameResult};
use crate::registry::{is_valid_device_name, BlockDevice, BlockDeviceRegistry};
use debugcc_common::config::RenameConfig;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{info, warn};

/// One resolved rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedRename {
    /// Device being renamed.
    pub device: BlockDevice,
    /// Its new name.
    pub new_name: String,
}

/// Outcome of a rename pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameReport {
    /// Node the pairs came from, `None` if the tree has no rename node.
    pub node: Option<PathBuf>,
    /// Renames performed (or, for a dry run, that would be performed).
    pub renamed: Vec<PlannedRename>,
    /// True if nothing was changed on purpose.
    pub dry_run: bool,
}

/// Resolve every pair of `node` against `registry`.
///
/// Entries are checked in index order: device first, then its new name.
///
/// # Errors
///
/// - [`RenameError::NotFound`] for an actual device that does not exist
/// - [`RenameError::MissingRenameTarget`] for an actual device without a new name
/// - [`RenameError::InvalidName`] for a new name that is not a single path component
/// - [`RenameError::AlreadyExists`] if a new name is taken or given twice
pub fn plan_renames<R>(node: &RenameNode, registry: &R) -> RenameResult<Vec<PlannedRename>>
where
    R: BlockDeviceRegistry + ?Sized,
{
    let mut plan = Vec::with_capacity(node.actual_devs.len());
    let mut claimed = BTreeSet::new();

    for (index, actual) in node.actual_devs.iter().enumerate() {
        let device = registry.resolve(actual)?;
        let new_name = node.rename_target(index)?;
        if !is_valid_device_name(new_name) {
            return Err(RenameError::InvalidName {
                name: new_name.to_string(),
            });
        }

        if !claimed.insert(new_name) || !registry.is_available_for(new_name, &device) {
            return Err(RenameError::AlreadyExists {
                name: new_name.to_string(),
            });
        }
        plan.push(PlannedRename {
            device,
            new_name: new_name.to_string(),
        });
    }

    if node.rename_devs.len() > node.actual_devs.len() {
        warn!(
            extra = node.rename_devs.len() - node.actual_devs.len(),
            "rename-dev has more entries than actual-dev, ignoring the rest"
        );
    }
    Ok(plan)
}

/// Apply the renames of `node`.
///
/// An absent node is not an error: the pass succeeds with no renames.
///
/// # Errors
///
/// Any [`plan_renames`] error, in which case nothing is renamed, or a
/// registry failure while renaming. The latter stops the pass and leaves
/// the renames applied before it in place.
pub fn apply_renames<R>(
    node: Option<&RenameNode>,
    registry: &mut R,
    dry_run: bool,
) -> RenameResult<RenameReport>
where
    R: BlockDeviceRegistry + ?Sized,
{
    let Some(node) = node else {
        warn!("No block-device rename node present, nothing to rename");
        return Ok(RenameReport {
            dry_run,
            ..RenameReport::default()
        });
    };

    let plan = plan_renames(node, registry)?;
    if !dry_run {
        for rename in &plan {
            registry.rename(&rename.device, &rename.new_name)?;
            info!(from = %rename.device.name, to = %rename.new_name, "Renamed block device");
        }
    }

    info!(count = plan.len(), dry_run, "Block-device rename pass complete");
    Ok(RenameReport {
        node: Some(node.path.clone()),
        renamed: plan,
        dry_run,
    })
}

/// Read the rename node from the device tree in `config` and apply it.
///
/// # Errors
///
/// Device-tree read errors, plus everything [`apply_renames`] returns.
pub fn rename_from_device_tree<R>(
    config: &RenameConfig,
    registry: &mut R,
    dry_run: bool,
) -> RenameResult<RenameReport>
where
    R: BlockDeviceRegistry + ?Sized,
{
    let node = RenameNode::load(&config.device_tree_root, &config.compatible)?;
    apply_renames(node.as_ref(), registry, dry_run)
}
