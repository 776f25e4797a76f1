//! Acceptance test modules.

mod clock_sweep_test;
mod common;
mod rename_test;
