//! Simulated SoC for testing without hardware.
//!
//! Every block is a sparse 32-bit register file. The global block's
//! reference counter decodes whatever routing is currently programmed into
//! the debug muxes, checks the branch gates and reports the edge count the
//! selected clock would produce over the requested window.

use crate::block::BlockId;
use crate::counter::{CTL_START, CTL_TICKS_MASK, STATUS_COUNT_MASK, STATUS_DONE};
use crate::descriptor::MuxDescriptor;
use crate::regmap::{BlockHandle, RegisterBlock};
use crate::sampler::CBCR_ENABLE;
use crate::table::MuxDescriptorTable;
use debugcc_common::error::{DebugccError, DebugccResult};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::trace;

#[derive(Debug, Default)]
struct SocState {
    regs: BTreeMap<(BlockId, u32), u32>,
    rates: HashMap<&'static str, u64>,
    /// Last count latched by the counter. It only advances while the
    /// routed clock is running.
    latched: u32,
    done: bool,
    stalled: bool,
    writes: u64,
}

impl SocState {
    fn reg(&self, block: BlockId, offset: u32) -> u32 {
        self.regs.get(&(block, offset)).copied().unwrap_or(0)
    }

    fn gate_open(&self, block: BlockId, offset: u32) -> bool {
        self.reg(block, offset) & CBCR_ENABLE != 0
    }
}

#[derive(Debug)]
struct Shared {
    table: MuxDescriptorTable,
    reference_hz: u64,
    state: Mutex<SocState>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, SocState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Descriptor currently routed to the counter, if any.
    fn routed<'a>(&'a self, state: &SocState) -> Option<&'a MuxDescriptor> {
        let layout = self.table.layout();
        let select = layout
            .src_sel_field
            .extract(state.reg(BlockId::Gcc, layout.debug_offset));

        self.table.iter().find(|desc| {
            desc.intermediate_select == select
                && (!desc.has_local_stage()
                    || desc
                        .effective_select_field()
                        .extract(state.reg(desc.block, desc.mux_offset))
                        == desc.final_select)
        })
    }

    /// Edge count the counter latches for a window of `ticks`.
    fn count(&self, state: &SocState, ticks: u32) -> Option<u32> {
        let layout = self.table.layout();
        if !state.gate_open(BlockId::Gcc, layout.cbcr_offset)
            || !state.gate_open(BlockId::Gcc, layout.reference_cbcr_offset)
        {
            return None;
        }

        let desc = self.routed(state)?;
        if desc.has_local_stage() {
            if let Some(cbcr) = desc.cbcr_offset {
                if !state.gate_open(desc.block, cbcr) {
                    return None;
                }
            }
        }

        let rate = state.rates.get(desc.name).copied().unwrap_or(0);
        if rate == 0 {
            return None;
        }

        let predivider = u128::from(
            layout
                .post_div_field
                .extract(state.reg(BlockId::Gcc, layout.post_div_offset))
                + 1,
        );
        let post_divider = if desc.has_local_stage() {
            u128::from(
                desc.post_div_field
                    .extract(state.reg(desc.block, desc.post_div_offset))
                    + 1,
            )
        } else {
            1
        };

        let count = u128::from(rate) * u128::from(ticks)
            / (u128::from(self.reference_hz) * predivider * post_divider);
        Some(u32::try_from(count).map_or(STATUS_COUNT_MASK, |c| c.min(STATUS_COUNT_MASK)))
    }
}

/// In-memory SoC model.
///
/// Cloning shares the same model.
#[derive(Debug, Clone)]
pub struct SimulatedSoc {
    shared: Arc<Shared>,
}

impl SimulatedSoc {
    /// Create a SoC whose routing follows `table` and whose counter sees
    /// `reference_hz` edges per second.
    pub fn new(table: MuxDescriptorTable, reference_hz: u64) -> Self {
        Self {
            shared: Arc::new(Shared {
                table,
                reference_hz: reference_hz.max(1),
                state: Mutex::new(SocState::default()),
            }),
        }
    }

    /// Set the true rate of a clock (0 stops it).
    ///
    /// # Errors
    ///
    /// Returns [`DebugccError::UnknownSignal`] if the table has no such clock.
    pub fn set_rate(&self, name: &str, hz: u64) -> DebugccResult<()> {
        let desc = self.shared.table.lookup(name)?;
        self.shared.lock().rates.insert(desc.name, hz);
        Ok(())
    }

    /// Make the counter never report completion.
    pub fn set_counter_stalled(&self, stalled: bool) {
        self.shared.lock().stalled = stalled;
    }

    /// Register handle for `block`.
    #[must_use]
    pub fn block(&self, block: BlockId) -> BlockHandle {
        Arc::new(SimulatedBlock {
            block,
            shared: Arc::clone(&self.shared),
        })
    }

    /// Handles for every block the table references.
    #[must_use]
    pub fn blocks(&self) -> Vec<(BlockId, BlockHandle)> {
        let mut blocks = self.shared.table.referenced_blocks();
        blocks.insert(BlockId::Gcc);
        blocks.into_iter().map(|id| (id, self.block(id))).collect()
    }

    /// Current value of a register.
    #[must_use]
    pub fn peek(&self, block: BlockId, offset: u32) -> u32 {
        self.shared.lock().reg(block, offset)
    }

    /// Set a register without counting it as a write.
    pub fn poke(&self, block: BlockId, offset: u32, value: u32) {
        self.shared.lock().regs.insert((block, offset), value);
    }

    /// Number of register writes performed through block handles.
    #[must_use]
    pub fn write_count(&self) -> u64 {
        self.shared.lock().writes
    }
}

/// One block of a [`SimulatedSoc`].
#[derive(Debug)]
pub struct SimulatedBlock {
    block: BlockId,
    shared: Arc<Shared>,
}

impl SimulatedBlock {
    fn is_counter(&self, offset: u32) -> bool {
        let layout = self.shared.table.layout();
        self.block.is_global()
            && (offset == layout.counter_ctl_offset || offset == layout.counter_status_offset)
    }
}

impl RegisterBlock for SimulatedBlock {
    fn read(&self, offset: u32) -> DebugccResult<u32> {
        let state = self.shared.lock();
        if self.is_counter(offset) && offset == self.shared.table.layout().counter_status_offset {
            let done = if state.done { STATUS_DONE } else { 0 };
            return Ok(done | state.latched);
        }
        Ok(state.reg(self.block, offset))
    }

    fn write(&self, offset: u32, value: u32) -> DebugccResult<()> {
        if offset % 4 != 0 {
            return Err(DebugccError::BusError {
                block: self.block.name().to_string(),
                offset,
                reason: "unaligned access".into(),
            });
        }

        let mut state = self.shared.lock();
        state.writes += 1;
        state.regs.insert((self.block, offset), value);

        if self.is_counter(offset) && offset == self.shared.table.layout().counter_ctl_offset {
            if value & CTL_START == 0 {
                state.done = false;
            } else {
                let ticks = value & CTL_TICKS_MASK;
                if let Some(count) = self.shared.count(&state, ticks) {
                    state.latched = count;
                }
                state.done = !state.stalled;
                trace!(ticks, latched = state.latched, "Simulated counter window");
            }
        }
        Ok(())
    }
}
