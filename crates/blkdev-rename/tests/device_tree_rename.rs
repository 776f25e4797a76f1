//! Rename pass against a device tree and sysfs laid out in a temp directory.

use blkdev_rename::{rename_from_device_tree, RenameError, SysfsRegistry};
use debugcc_common::config::RenameConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Test Helpers
// ============================================================================

struct Fixture {
    root: TempDir,
    config: RenameConfig,
}

impl Fixture {
    fn new(disks: &[(&str, &str)]) -> Self {
        let root = TempDir::new().unwrap();
        let config = RenameConfig {
            device_tree_root: root.path().join("proc/device-tree"),
            sys_block_dir: root.path().join("sys/class/block"),
            dev_dir: root.path().join("dev"),
            link_dir: root.path().join("dev/block/by-name"),
            ..RenameConfig::default()
        };

        fs::create_dir_all(&config.device_tree_root).unwrap();
        fs::write(
            config.device_tree_root.join("compatible"),
            b"qcom,sm8150-mtp\0qcom,sm8150\0",
        )
        .unwrap();
        for (name, numbers) in disks {
            let dir = config.sys_block_dir.join(name);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("dev"), format!("{numbers}\n")).unwrap();
        }

        Self { root, config }
    }

    fn with_rename_node(self, actual: &[u8], rename: Option<&[u8]>) -> Self {
        let node = self.config.device_tree_root.join("soc").join("blkdev-rename");
        fs::create_dir_all(&node).unwrap();
        fs::write(node.join("compatible"), b"qcom,blkdev-rename\0").unwrap();
        fs::write(node.join("actual-dev"), actual).unwrap();
        if let Some(rename) = rename {
            fs::write(node.join("rename-dev"), rename).unwrap();
        }
        self
    }

    fn registry(&self) -> SysfsRegistry {
        SysfsRegistry::new(
            &self.config.sys_block_dir,
            &self.config.dev_dir,
            &self.config.link_dir,
        )
    }

    fn links(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.config.link_dir) else {
            return Vec::new();
        };
        let mut names: Vec<_> = entries
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    fn dev(&self, name: &str) -> std::path::PathBuf {
        self.root.path().join("dev").join(name)
    }
}

fn link_target(path: &Path) -> std::path::PathBuf {
    fs::read_link(path).unwrap()
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_renames_listed_devices() {
    let fx = Fixture::new(&[("sda", "8:0"), ("sdb", "8:16"), ("sdc", "8:32")])
        .with_rename_node(b"sda\0sdb\0", Some(b"boot\0userdata\0"));
    let mut registry = fx.registry();

    let report = rename_from_device_tree(&fx.config, &mut registry, false).unwrap();
    assert_eq!(report.renamed.len(), 2);
    assert!(report.node.unwrap().ends_with("soc/blkdev-rename"));

    assert_eq!(fx.links(), vec!["boot", "userdata"]);
    assert_eq!(
        link_target(&fx.config.link_dir.join("boot")),
        fx.dev("sda")
    );
    assert_eq!(
        link_target(&fx.config.link_dir.join("userdata")),
        fx.dev("sdb")
    );

    // A second pass finds everything already in place
    let again = rename_from_device_tree(&fx.config, &mut registry, false).unwrap();
    assert_eq!(again.renamed.len(), 2);
}

#[test]
fn test_missing_device_fails_without_renames() {
    let fx = Fixture::new(&[("sda", "8:0")])
        .with_rename_node(b"sda\0missing\0", Some(b"boot\0data\0"));
    let mut registry = fx.registry();

    let err = rename_from_device_tree(&fx.config, &mut registry, false).unwrap_err();
    assert!(matches!(err, RenameError::NotFound { .. }));
    assert!(err.to_string().contains("missing"));
    assert!(fx.links().is_empty(), "no rename may happen on failure");
}

#[test]
fn test_missing_rename_list_fails() {
    let fx = Fixture::new(&[("sda", "8:0")]).with_rename_node(b"sda\0", None);
    let mut registry = fx.registry();

    let err = rename_from_device_tree(&fx.config, &mut registry, false).unwrap_err();
    assert!(matches!(err, RenameError::MissingRenameTarget { index: 0, .. }));
    assert!(fx.links().is_empty());
}

#[test]
fn test_absent_node_succeeds_with_zero_renames() {
    let fx = Fixture::new(&[("sda", "8:0")]);
    let mut registry = fx.registry();

    let report = rename_from_device_tree(&fx.config, &mut registry, false).unwrap();
    assert!(report.node.is_none());
    assert!(report.renamed.is_empty());
    assert!(fx.links().is_empty());
}

#[test]
fn test_dry_run_creates_no_links() {
    let fx = Fixture::new(&[("mmcblk0p3", "179:3")])
        .with_rename_node(b"mmcblk0p3\0", Some(b"vendor\0"));
    let mut registry = fx.registry();

    let report = rename_from_device_tree(&fx.config, &mut registry, true).unwrap();
    assert!(report.dry_run);
    assert_eq!(report.renamed[0].device.major, 179);
    assert!(fx.links().is_empty());
}

#[test]
fn test_target_outside_link_dir_rejected() {
    let fx = Fixture::new(&[("sda", "8:0")]);
    let outside = fx.root.path().join("outside_link");
    let mut target = outside.to_string_lossy().into_owned().into_bytes();
    target.push(0);
    let fx = fx.with_rename_node(b"sda\0", Some(&target));
    let mut registry = fx.registry();

    let err = rename_from_device_tree(&fx.config, &mut registry, false).unwrap_err();
    assert!(matches!(err, RenameError::InvalidName { .. }), "{err}");
    assert!(fs::symlink_metadata(&outside).is_err());
    assert!(fx.links().is_empty());

    // Relative escapes are refused too
    let fx = Fixture::new(&[("sda", "8:0")]).with_rename_node(b"sda\0", Some(b"../escaped\0"));
    let mut registry = fx.registry();
    let err = rename_from_device_tree(&fx.config, &mut registry, false).unwrap_err();
    assert!(matches!(err, RenameError::InvalidName { ref name } if name == "../escaped"));
    assert!(fs::symlink_metadata(fx.config.link_dir.join("../escaped")).is_err());
}
