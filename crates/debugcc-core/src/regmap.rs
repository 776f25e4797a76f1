//! Register block abstraction.
//!
//! A [`RegisterBlock`] is a 32-bit register window of one clock controller,
//! addressed by byte offset. Backends (simulated SoC, `/dev/mem`, test mocks)
//! implement the raw `read`/`write`; field updates are provided on top as
//! read-modify-write sequences, the way a regmap does it.

use crate::block::BlockId;
use crate::descriptor::BitField;
use debugcc_common::error::DebugccResult;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A live handle to one clock controller's registers.
///
/// Implementations may be shared between threads; the sampler serializes
/// every access sequence behind its own lock.
pub trait RegisterBlock: Send + Sync + fmt::Debug {
    /// Read the 32-bit register at `offset`.
    fn read(&self, offset: u32) -> DebugccResult<u32>;

    /// Write the 32-bit register at `offset`.
    fn write(&self, offset: u32, value: u32) -> DebugccResult<()>;

    /// Replace `field` of the register at `offset` with `value`.
    ///
    /// Bits outside the field are preserved. Returns the register's
    /// previous contents.
    fn update_field(&self, offset: u32, field: BitField, value: u32) -> DebugccResult<u32> {
        let prior = self.read(offset)?;
        let updated = field.insert(prior, value);
        self.write(offset, updated)?;
        Ok(prior)
    }

    /// Set `bits` in the register at `offset`, returning its previous contents.
    fn set_bits(&self, offset: u32, bits: u32) -> DebugccResult<u32> {
        let prior = self.read(offset)?;
        self.write(offset, prior | bits)?;
        Ok(prior)
    }
}

/// Shared handle to a register block.
pub type BlockHandle = Arc<dyn RegisterBlock>;

/// Mapping from block id to its live register handle.
///
/// Populated during bring-up and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct RegisterBlockMap {
    blocks: BTreeMap<BlockId, BlockHandle>,
}

impl RegisterBlockMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `block` to `handle`, returning the handle it replaces.
    pub fn insert(&mut self, block: BlockId, handle: BlockHandle) -> Option<BlockHandle> {
        self.blocks.insert(block, handle)
    }

    /// Look up the handle for `block`.
    #[must_use]
    pub fn get(&self, block: BlockId) -> Option<&BlockHandle> {
        self.blocks.get(&block)
    }

    /// Returns true if `block` is mapped.
    #[must_use]
    pub fn contains(&self, block: BlockId) -> bool {
        self.blocks.contains_key(&block)
    }

    /// Mapped block ids, in enum order.
    pub fn mapped(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.blocks.keys().copied()
    }

    /// Number of mapped blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if no block is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
