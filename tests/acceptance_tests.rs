//! Acceptance tests for soc-debugcc.
//!
//! These drive the public crates the way the `debugcc` binary does:
//! - Configuration-driven sampler bring-up against the simulated SM8150
//! - Clock sweeps across every clock controller
//! - Device-tree block-device renames against a temp sysfs

mod acceptance;
