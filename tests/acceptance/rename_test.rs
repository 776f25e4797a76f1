//! Block-device rename acceptance tests.
//!
//! # Acceptance Criteria
//!
//! - Each listed device becomes reachable under its new name
//! - Any unresolvable pair aborts the pass before the first rename
//! - A device tree without the rename node is a successful no-op

use blkdev_rename::{
    apply_renames, rename_from_device_tree, InMemoryRegistry, RenameError, RenameNode,
    SysfsRegistry,
};
use debugcc_common::config::RenameConfig;
use std::fs;
use tempfile::TempDir;

fn disks() -> InMemoryRegistry {
    InMemoryRegistry::new()
        .with_device("sda", 8, 0)
        .with_device("sdb", 8, 16)
        .with_device("sde", 8, 64)
}

#[test]
fn test_sda_becomes_boot() {
    let mut registry = disks();
    let node = RenameNode::new(["sda"], ["boot"]);

    let report = apply_renames(Some(&node), &mut registry, false).unwrap();
    assert_eq!(report.renamed.len(), 1);
    assert_eq!((report.renamed[0].device.major, report.renamed[0].device.minor), (8, 0));
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["boot", "sdb", "sde"]);
}

#[test]
fn test_unresolvable_pair_renames_nothing() {
    let cases = [
        // Second device does not exist
        (RenameNode::new(["sda", "sdz"], ["boot", "misc"]), "sdz"),
        // Second device has no new name
        (RenameNode::new(["sda", "sdb"], ["boot"]), "rename-dev for actual-dev = sdb"),
        // New name collides with an existing device
        (RenameNode::new(["sda", "sdb"], ["boot", "sde"]), "sde"),
        // Same new name given twice
        (RenameNode::new(["sda", "sdb"], ["boot", "boot"]), "boot"),
    ];

    for (node, needle) in cases {
        let mut registry = disks();
        let err = apply_renames(Some(&node), &mut registry, false).unwrap_err();
        assert!(err.to_string().contains(needle), "{err}");
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["sda", "sdb", "sde"],
            "registry changed after {err}"
        );
    }
}

#[test]
fn test_device_tree_pass_against_sysfs() {
    let root = TempDir::new().unwrap();
    let config = RenameConfig {
        device_tree_root: root.path().join("dt"),
        sys_block_dir: root.path().join("sys"),
        dev_dir: root.path().join("dev"),
        link_dir: root.path().join("by-name"),
        ..RenameConfig::default()
    };
    let mut registry =
        SysfsRegistry::new(&config.sys_block_dir, &config.dev_dir, &config.link_dir);

    fs::create_dir_all(&config.device_tree_root).unwrap();
    fs::create_dir_all(config.sys_block_dir.join("sda")).unwrap();
    fs::write(config.sys_block_dir.join("sda/dev"), "8:0\n").unwrap();

    // No node yet
    let report = rename_from_device_tree(&config, &mut registry, false).unwrap();
    assert!(report.node.is_none());
    assert!(!config.link_dir.exists());

    let node = config.device_tree_root.join("blkdev-rename@0");
    fs::create_dir_all(&node).unwrap();
    fs::write(node.join("compatible"), b"qcom,blkdev-rename\0").unwrap();
    fs::write(node.join("actual-dev"), b"sda\0").unwrap();
    fs::write(node.join("rename-dev"), b"boot\0").unwrap();

    let report = rename_from_device_tree(&config, &mut registry, false).unwrap();
    assert_eq!(report.renamed[0].new_name, "boot");
    assert_eq!(
        fs::read_link(config.link_dir.join("boot")).unwrap(),
        config.dev_dir.join("sda")
    );

    // A different device may not take an existing alias
    fs::create_dir_all(config.sys_block_dir.join("sdb")).unwrap();
    fs::write(config.sys_block_dir.join("sdb/dev"), "8:16\n").unwrap();
    fs::write(node.join("actual-dev"), b"sdb\0").unwrap();
    let err = rename_from_device_tree(&config, &mut registry, false).unwrap_err();
    assert!(matches!(err, RenameError::AlreadyExists { ref name } if name == "boot"));
}
