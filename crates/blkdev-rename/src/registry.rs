//! Block device registries.
//!
//! A registry resolves a device name to the device it names and gives a
//! device a new name. [`SysfsRegistry`] works against a live system,
//! [`InMemoryRegistry`] against a fixed device list.

use crate::error::{RenameError, RenameResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A resolved block device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockDevice {
    /// Kernel name ("sda", "mmcblk0p3").
    pub name: String,
    /// Device node path.
    pub path: PathBuf,
    /// Major number.
    pub major: u32,
    /// Minor number.
    pub minor: u32,
}

/// Returns true if `name` is a single path component usable under `/dev`.
#[must_use]
pub fn is_valid_device_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\0'])
}

/// Lookup and rename of block devices.
pub trait BlockDeviceRegistry {
    /// Resolve `/dev/<name>` to a block device.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::NotFound`] if no such device exists.
    fn resolve(&self, name: &str) -> RenameResult<BlockDevice>;

    /// Returns true if `device` can take `name` (free, or already its own).
    fn is_available_for(&self, name: &str, device: &BlockDevice) -> bool;

    /// Give `device` the name `new_name`.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::AlreadyExists`] if the name is taken.
    fn rename(&mut self, device: &BlockDevice, new_name: &str) -> RenameResult<()>;
}

/// Fixed set of devices held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryRegistry {
    dev_dir: PathBuf,
    devices: BTreeMap<String, (u32, u32)>,
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self {
            dev_dir: PathBuf::from("/dev"),
            devices: BTreeMap::new(),
        }
    }
}

impl InMemoryRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a device.
    #[must_use]
    pub fn with_device(mut self, name: &str, major: u32, minor: u32) -> Self {
        self.devices.insert(name.to_string(), (major, minor));
        self
    }

    /// Current device names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.devices.keys().map(String::as_str)
    }
}

impl BlockDeviceRegistry for InMemoryRegistry {
    fn resolve(&self, name: &str) -> RenameResult<BlockDevice> {
        let path = self.dev_dir.join(name);
        let &(major, minor) = self
            .devices
            .get(name)
            .ok_or(RenameError::NotFound { path: path.clone() })?;
        Ok(BlockDevice {
            name: name.to_string(),
            path,
            major,
            minor,
        })
    }

    fn is_available_for(&self, name: &str, device: &BlockDevice) -> bool {
        name == device.name || !self.devices.contains_key(name)
    }

    fn rename(&mut self, device: &BlockDevice, new_name: &str) -> RenameResult<()> {
        if new_name == device.name {
            return Ok(());
        }
        if self.devices.contains_key(new_name) {
            return Err(RenameError::AlreadyExists {
                name: new_name.to_string(),
            });
        }
        let numbers = self
            .devices
            .remove(&device.name)
            .ok_or_else(|| RenameError::NotFound {
                path: device.path.clone(),
            })?;
        self.devices.insert(new_name.to_string(), numbers);
        Ok(())
    }
}

/// Live system registry.
///
/// Devices are resolved through `<sys_block_dir>/<name>/dev`. The kernel
/// does not let userspace rename a disk, so a rename publishes the device
/// under its new name as a symlink `<link_dir>/<new_name>` to its node.
#[derive(Debug, Clone)]
pub struct SysfsRegistry {
    sys_block_dir: PathBuf,
    dev_dir: PathBuf,
    link_dir: PathBuf,
}

impl SysfsRegistry {
    /// Create a registry over the given directories.
    pub fn new(
        sys_block_dir: impl Into<PathBuf>,
        dev_dir: impl Into<PathBuf>,
        link_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            sys_block_dir: sys_block_dir.into(),
            dev_dir: dev_dir.into(),
            link_dir: link_dir.into(),
        }
    }

    /// Where `name` is published after a rename.
    #[must_use]
    pub fn link_path(&self, name: &str) -> PathBuf {
        self.link_dir.join(name)
    }

    fn parse_dev_numbers(path: &Path, text: &str) -> RenameResult<(u32, u32)> {
        let bad = || RenameError::DeviceTree {
            path: path.to_path_buf(),
            reason: format!("expected MAJOR:MINOR, got {:?}", text.trim()),
        };
        let (major, minor) = text.trim().split_once(':').ok_or_else(bad)?;
        Ok((
            major.parse().map_err(|_| bad())?,
            minor.parse().map_err(|_| bad())?,
        ))
    }
}

impl BlockDeviceRegistry for SysfsRegistry {
    fn resolve(&self, name: &str) -> RenameResult<BlockDevice> {
        let path = self.dev_dir.join(name);
        if !is_valid_device_name(name) {
            return Err(RenameError::NotFound { path });
        }

        let dev_file = self.sys_block_dir.join(name).join("dev");
        let text = match fs::read_to_string(&dev_file) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(RenameError::NotFound { path });
            }
            Err(e) => return Err(RenameError::io(dev_file, e)),
        };
        let (major, minor) = Self::parse_dev_numbers(&dev_file, &text)?;

        debug!(name, major, minor, "Resolved block device");
        Ok(BlockDevice {
            name: name.to_string(),
            path,
            major,
            minor,
        })
    }

    fn is_available_for(&self, name: &str, device: &BlockDevice) -> bool {
        if name != device.name && self.sys_block_dir.join(name).exists() {
            return false;
        }
        match fs::read_link(self.link_path(name)) {
            Ok(target) => target == device.path,
            Err(e) => e.kind() == ErrorKind::NotFound,
        }
    }

    fn rename(&mut self, device: &BlockDevice, new_name: &str) -> RenameResult<()> {
        if !is_valid_device_name(new_name) {
            return Err(RenameError::InvalidName {
                name: new_name.to_string(),
            });
        }
        fs::create_dir_all(&self.link_dir).map_err(|e| RenameError::io(&self.link_dir, e))?;

        let link = self.link_path(new_name);
        match fs::read_link(&link) {
            // Already published by an earlier run
            Ok(target) if target == device.path => return Ok(()),
            Ok(_) => {
                return Err(RenameError::AlreadyExists {
                    name: new_name.to_string(),
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(_) => {
                return Err(RenameError::AlreadyExists {
                    name: new_name.to_string(),
                })
            }
        }

        std::os::unix::fs::symlink(&device.path, &link).map_err(|e| RenameError::io(&link, e))?;
        info!(
            from = %device.name,
            to = new_name,
            link = %link.display(),
            "Published renamed block device"
        );
        Ok(())
    }
}
