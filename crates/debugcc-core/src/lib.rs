#![doc = "Clock-debug mux sampler: descriptor tables, register blocks, and frequency measurement."]

pub mod block;
pub mod builder;
pub mod clock;
pub mod counter;
pub mod descriptor;
#[cfg(target_os = "linux")]
#[allow(unsafe_code)]
pub mod devmem;
pub mod regmap;
pub mod sampler;
#[cfg(feature = "simulated")]
pub mod simulated;
pub mod sm8150;
pub mod table;

pub use block::*;
pub use builder::*;
pub use clock::*;
pub use counter::ReferenceCounter;
pub use descriptor::*;
#[cfg(target_os = "linux")]
pub use devmem::{map_blocks, DevMemBlock};
pub use regmap::*;
pub use sampler::*;
#[cfg(feature = "simulated")]
pub use simulated::*;
pub use table::*;
