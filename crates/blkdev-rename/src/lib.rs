#![doc = "Rename block devices from a device-tree node of paired actual/rename names."]

pub mod devicetree;
pub mod error;
pub mod registry;
pub mod rename;

pub use devicetree::RenameNode;
pub use error::*;
pub use registry::*;
pub use rename::*;
