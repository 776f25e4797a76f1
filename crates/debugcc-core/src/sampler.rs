//! Frequency sampler.
//!
//! Routes a named clock through the global and block-local debug muxes,
//! opens the branch gates, runs the reference counter and converts the
//! edge count into a frequency.
//!
//! # Locking
//!
//! The debug muxes and the counter are single shared hardware resources.
//! All register handles live behind one mutex which is held from the first
//! select write until the last gate is restored, so two measurements never
//! interleave their register sequences.

use crate::block::BlockId;
use crate::clock::ReferenceClock;
use crate::counter::ReferenceCounter;
use crate::descriptor::MuxDescriptor;
use crate::regmap::{BlockHandle, RegisterBlock, RegisterBlockMap};
use crate::table::MuxDescriptorTable;
use debugcc_common::error::{DebugccError, DebugccResult};
use debugcc_common::metrics::{MeasurementStats, StatsSnapshot};
use debugcc_common::state::SamplerPhase;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use tracing::{debug, info, trace, warn};

/// Branch control register enable bit.
pub const CBCR_ENABLE: u32 = 1 << 0;

/// Outcome of one measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleResult {
    /// Measured clock.
    pub signal_name: String,
    /// Frequency in Hz (0 if the clock is not running).
    pub frequency_hz: u64,
    /// Length of the counting window in reference ticks.
    pub sample_window_ticks: u32,
    /// Raw edge count of the full window.
    pub raw_count: u32,
    /// Product of all dividers between the clock and the counter.
    pub divider: u64,
}

/// Convert a raw count into Hz.
///
/// `raw_count * reference_hz * divider / window_ticks`, saturating at `u64::MAX`.
#[must_use]
pub fn frequency_hz(raw_count: u32, reference_hz: u64, divider: u64, window_ticks: u32) -> u64 {
    if window_ticks == 0 {
        return 0;
    }
    let hz = u128::from(raw_count) * u128::from(reference_hz) * u128::from(divider)
        / u128::from(window_ticks);
    u64::try_from(hz).unwrap_or(u64::MAX)
}

/// Hardware owned by the sampler: register handles and the current phase.
#[derive(Debug)]
struct Hardware {
    blocks: RegisterBlockMap,
    phase: SamplerPhase,
}

impl Hardware {
    fn block(&self, block: BlockId, signal: &str) -> DebugccResult<BlockHandle> {
        self.blocks
            .get(block)
            .cloned()
            .ok_or_else(|| DebugccError::UnmappedBlock {
                signal: signal.to_string(),
                block: block.dt_property().to_string(),
            })
    }
}

/// Gates opened for a measurement, restored in reverse order.
#[derive(Default)]
struct OpenGates<'a> {
    opened: Vec<(&'a dyn RegisterBlock, u32, u32)>,
}

impl<'a> OpenGates<'a> {
    fn open(&mut self, block: &'a dyn RegisterBlock, offset: u32) -> DebugccResult<()> {
        let prior = block.set_bits(offset, CBCR_ENABLE)?;
        self.opened.push((block, offset, prior));
        Ok(())
    }

    /// Write back every prior value, returning the first failure.
    fn restore(self) -> DebugccResult<()> {
        let mut first_err = None;
        for (block, offset, prior) in self.opened.into_iter().rev() {
            if let Err(e) = block.write(offset, prior) {
                warn!(offset, error = %e, "Failed to restore gate");
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

/// Measures internal clocks through the debug mux.
///
/// Created by [`SamplerBuilder`](crate::SamplerBuilder) once every required
/// register block is mapped. `FrequencySampler` is `Send + Sync`; share it
/// with `Arc` to measure from several threads.
#[derive(Debug)]
pub struct FrequencySampler {
    table: MuxDescriptorTable,
    clock: Arc<dyn ReferenceClock>,
    counter: ReferenceCounter,
    window_ticks: u32,
    probe_window_ticks: u32,
    hardware: Mutex<Hardware>,
    stats: Mutex<MeasurementStats>,
}

impl FrequencySampler {
    pub(crate) fn new(
        table: MuxDescriptorTable,
        blocks: RegisterBlockMap,
        clock: Arc<dyn ReferenceClock>,
        counter: ReferenceCounter,
        window_ticks: u32,
        probe_window_ticks: u32,
    ) -> Self {
        Self {
            table,
            clock,
            counter,
            window_ticks,
            probe_window_ticks,
            hardware: Mutex::new(Hardware {
                blocks,
                phase: SamplerPhase::Idle,
            }),
            stats: Mutex::new(MeasurementStats::new()),
        }
    }

    /// Names of all measurable signals, in table order.
    #[must_use]
    pub fn list_signal_names(&self) -> Vec<&'static str> {
        self.table.names().collect()
    }

    /// The descriptor table this sampler measures from.
    #[must_use]
    pub fn table(&self) -> &MuxDescriptorTable {
        &self.table
    }

    /// Blocks mapped at bring-up.
    #[must_use]
    pub fn mapped_blocks(&self) -> Vec<BlockId> {
        self.lock_hardware().blocks.mapped().collect()
    }

    /// Current phase of the shared hardware.
    #[must_use]
    pub fn phase(&self) -> SamplerPhase {
        self.lock_hardware().phase
    }

    /// Measurement statistics so far.
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .snapshot()
    }

    /// Measure the frequency of `name`.
    ///
    /// # Errors
    ///
    /// - [`DebugccError::UnknownSignal`] if `name` is not in the table
    /// - [`DebugccError::UnmappedBlock`] if its register block was not mapped
    /// - [`DebugccError::HardwareTimeout`] if the counter never completes
    /// - [`DebugccError::BusError`] if a register access fails
    ///
    /// None of these are retried.
    ///
    /// When a probe window shorter than the full window is configured, a
    /// full count equal to the probe count means the clock is not running
    /// and the result is 0 Hz. A counter source that returns the same count
    /// for any window length therefore reads 0 Hz unless the probe is
    /// disabled or not shorter than the window.
    pub fn measure(&self, name: &str) -> DebugccResult<SampleResult> {
        let started = Instant::now();
        let result = self.measure_locked(name);

        let mut stats = self
            .stats
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        match &result {
            Ok(sample) => {
                stats.record_success(started.elapsed(), sample.frequency_hz);
                debug!(
                    signal = name,
                    frequency_hz = sample.frequency_hz,
                    raw_count = sample.raw_count,
                    "Measured clock"
                );
            }
            Err(e) => {
                stats.record_failure(e);
                debug!(signal = name, error = %e, "Measurement failed");
            }
        }
        result
    }

    /// Measure every signal in table order. Failures do not stop the sweep.
    pub fn measure_all(&self) -> Vec<(&'static str, DebugccResult<SampleResult>)> {
        let results: Vec<_> = self
            .table
            .names()
            .map(|name| (name, self.measure(name)))
            .collect();
        let failed = results.iter().filter(|(_, r)| r.is_err()).count();
        info!(total = results.len(), failed, "Measured all clocks");
        results
    }

    fn measure_locked(&self, name: &str) -> DebugccResult<SampleResult> {
        let desc = *self.table.lookup(name)?;

        let mut hw = self.lock_hardware();
        let global = hw.block(BlockId::Gcc, name)?;
        let local = hw.block(desc.block, name)?;

        self.clock.enable()?;
        let outcome = self.run_cycle(&mut hw.phase, &desc, global.as_ref(), local.as_ref());
        self.clock.disable();

        let (probe, raw_count) = match outcome {
            Ok(counts) => counts,
            Err(e) => {
                hw.phase = SamplerPhase::Idle;
                return Err(e);
            }
        };
        drop(hw);

        let divider = desc.total_divider();
        let frequency_hz = if probe == Some(raw_count) {
            // The counter does not reset while its input is stopped
            trace!(signal = name, raw_count, "Counts did not advance, clock is off");
            0
        } else {
            frequency_hz(raw_count, self.clock.rate_hz(), divider, self.window_ticks)
        };

        Ok(SampleResult {
            signal_name: name.to_string(),
            frequency_hz,
            sample_window_ticks: self.window_ticks,
            raw_count,
            divider,
        })
    }

    /// One IDLE → SELECTING → GATING → COUNTING → IDLE cycle.
    ///
    /// Returns the probe count (if a probe ran) and the full-window count.
    fn run_cycle(
        &self,
        phase: &mut SamplerPhase,
        desc: &MuxDescriptor,
        global: &dyn RegisterBlock,
        local: &dyn RegisterBlock,
    ) -> DebugccResult<(Option<u32>, u32)> {
        phase.transition_to(SamplerPhase::Selecting)?;
        self.select(desc, global, local)?;

        phase.transition_to(SamplerPhase::Gating)?;
        let layout = self.table.layout();
        let mut gates = OpenGates::default();
        let counted = gates
            .open(global, layout.cbcr_offset)
            .and_then(|()| match desc.cbcr_offset {
                Some(offset) if desc.has_local_stage() => gates.open(local, offset),
                _ => Ok(()),
            })
            .and_then(|()| gates.open(global, layout.reference_cbcr_offset))
            .and_then(|()| {
                phase.transition_to(SamplerPhase::Counting)?;
                self.count(global)
            });
        let restored = gates.restore();

        let counts = counted?;
        restored?;
        phase.transition_to(SamplerPhase::Idle)?;
        Ok(counts)
    }

    fn select(
        &self,
        desc: &MuxDescriptor,
        global: &dyn RegisterBlock,
        local: &dyn RegisterBlock,
    ) -> DebugccResult<()> {
        let layout = self.table.layout();
        trace!(
            signal = desc.name,
            select = desc.intermediate_select,
            predivider = desc.intermediate_predivider,
            "Programming global debug mux"
        );
        global.update_field(
            layout.debug_offset,
            layout.src_sel_field,
            desc.intermediate_select,
        )?;
        global.update_field(
            layout.post_div_offset,
            layout.post_div_field,
            desc.intermediate_predivider - 1,
        )?;

        if desc.has_local_stage() {
            trace!(
                signal = desc.name,
                block = %desc.block,
                select = desc.final_select,
                post_divider = desc.post_divider,
                "Programming block debug mux"
            );
            local.update_field(
                desc.mux_offset,
                desc.effective_select_field(),
                desc.final_select,
            )?;
            local.update_field(
                desc.post_div_offset,
                desc.post_div_field,
                desc.post_divider - 1,
            )?;
        }
        Ok(())
    }

    fn count(&self, global: &dyn RegisterBlock) -> DebugccResult<(Option<u32>, u32)> {
        // A probe no shorter than the window cannot tell a stopped clock apart
        let probe = if self.probe_window_ticks > 0 && self.probe_window_ticks < self.window_ticks {
            Some(self.counter.run(global, self.probe_window_ticks)?)
        } else {
            None
        };
        let full = self.counter.run(global, self.window_ticks)?;
        Ok((probe, full))
    }

    fn lock_hardware(&self) -> MutexGuard<'_, Hardware> {
        match self.hardware.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                // Every measurement reprograms all registers it depends on
                warn!("Hardware lock poisoned by a panicked measurement, recovering");
                self.hardware.clear_poison();
                let mut guard = poisoned.into_inner();
                guard.phase = SamplerPhase::Idle;
                guard
            }
        }
    }
}
