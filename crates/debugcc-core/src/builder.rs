//! Sampler bring-up.
//!
//! Bring-up is all-or-nothing: [`SamplerBuilder::build`] either returns a
//! sampler with every required block mapped, or an error and nothing.

use crate::block::BlockId;
use crate::clock::{FixedReferenceClock, ReferenceClock};
use crate::counter::ReferenceCounter;
use crate::regmap::{BlockHandle, RegisterBlockMap};
use crate::sampler::FrequencySampler;
use crate::table::MuxDescriptorTable;
use debugcc_common::config::{CounterConfig, DebugccConfig};
use debugcc_common::error::{DebugccError, DebugccResult};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Builder for a [`FrequencySampler`].
pub struct SamplerBuilder {
    table: MuxDescriptorTable,
    blocks: RegisterBlockMap,
    optional: BTreeSet<BlockId>,
    clock: Option<Arc<dyn ReferenceClock>>,
    counter: CounterConfig,
}

impl SamplerBuilder {
    /// Start bring-up for `table`.
    pub fn new(table: MuxDescriptorTable) -> Self {
        Self {
            table,
            blocks: RegisterBlockMap::new(),
            optional: BTreeSet::new(),
            clock: None,
            counter: CounterConfig::default(),
        }
    }

    /// Start bring-up from configuration.
    ///
    /// Applies the signal restriction, optional blocks, reference clock and
    /// counter settings. Register blocks still have to be provided.
    ///
    /// # Errors
    ///
    /// Returns [`DebugccError::Config`] for an unknown signal or block name.
    pub fn from_config(table: &MuxDescriptorTable, config: &DebugccConfig) -> DebugccResult<Self> {
        let table = if config.signals.is_empty() {
            table.clone()
        } else {
            table.restrict_to(&config.signals)?
        };

        let mut builder = Self::new(table)
            .counter(config.counter.clone())
            .reference_clock(Arc::new(FixedReferenceClock::new(
                config.reference_clock.name.clone(),
                config.reference_clock.rate_hz,
            )));
        for name in &config.optional_blocks {
            builder = builder.optional_block(name.parse()?);
        }
        Ok(builder)
    }

    /// Provide the live register handle for `block`.
    pub fn provide_register_block(mut self, block: BlockId, handle: BlockHandle) -> Self {
        if self.blocks.insert(block, handle).is_some() {
            warn!(%block, "Register block provided twice, keeping the latest");
        }
        self
    }

    /// Set the counting reference clock.
    pub fn reference_clock(mut self, clock: Arc<dyn ReferenceClock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set counter windows and polling.
    pub fn counter(mut self, config: CounterConfig) -> Self {
        self.counter = config;
        self
    }

    /// Allow `block` to be absent. Its signals fail with an unmapped-block error.
    pub fn optional_block(mut self, block: BlockId) -> Self {
        self.optional.insert(block);
        self
    }

    /// Finish bring-up.
    ///
    /// # Errors
    ///
    /// - [`DebugccError::BringUp`] if the reference clock, the global block,
    ///   or a referenced non-optional block is missing
    /// - [`DebugccError::Config`] for invalid counter settings, a zero
    ///   reference rate, or an optional global block
    pub fn build(self) -> DebugccResult<FrequencySampler> {
        let clock = self.clock.ok_or_else(|| DebugccError::BringUp {
            what: "reference clock not provided".into(),
            retryable: true,
        })?;
        if clock.rate_hz() == 0 {
            return Err(DebugccError::Config(format!(
                "reference clock {} has zero rate",
                clock.name()
            )));
        }

        if self.optional.contains(&BlockId::Gcc) {
            return Err(DebugccError::Config(
                "the global block hosts the counter and cannot be optional".into(),
            ));
        }
        if !self.blocks.contains(BlockId::Gcc) {
            return Err(DebugccError::BringUp {
                what: format!("register block {} not provided", BlockId::Gcc.dt_property()),
                retryable: false,
            });
        }

        for block in self.table.referenced_blocks() {
            if self.blocks.contains(block) {
                continue;
            }
            if self.optional.contains(&block) {
                warn!(%block, "Optional register block absent, its clocks are unavailable");
                continue;
            }
            return Err(DebugccError::BringUp {
                what: format!("register block {} not provided", block.dt_property()),
                retryable: false,
            });
        }

        let counter = ReferenceCounter::new(self.table.layout(), &self.counter)?;

        info!(
            signals = self.table.len(),
            blocks = self.blocks.len(),
            reference = clock.name(),
            reference_hz = clock.rate_hz(),
            "Frequency sampler ready"
        );
        debug!(mapped = ?self.blocks.mapped().collect::<Vec<_>>(), "Mapped register blocks");

        Ok(FrequencySampler::new(
            self.table,
            self.blocks,
            clock,
            counter,
            self.counter.window_ticks,
            self.counter.probe_window_ticks,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::MuxDescriptor;
    use crate::regmap::RegisterBlock;
    use crate::sm8150;

    #[derive(Debug)]
    struct Inert;

    impl RegisterBlock for Inert {
        fn read(&self, _offset: u32) -> DebugccResult<u32> {
            Ok(0)
        }

        fn write(&self, _offset: u32, _value: u32) -> DebugccResult<()> {
            Ok(())
        }
    }

    fn small_table() -> MuxDescriptorTable {
        let gcc = MuxDescriptor::new(
            "gcc_gp1_clk", 0xF0, 1, BlockId::Gcc, 0xF0, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004,
            Some(0x62008),
        );
        let npu = MuxDescriptor::new(
            "npu_cc_xo_clk", 0x180, 1, BlockId::NpuCc, 0x11, 0xFF, 0, 0x3, 0, 2, 0x4000, 0x3004,
            Some(0x3008),
        );
        MuxDescriptorTable::new(sm8150::LAYOUT, [gcc, npu]).unwrap()
    }

    fn clock() -> Arc<dyn ReferenceClock> {
        Arc::new(FixedReferenceClock::new("xo", 4_800_000))
    }

    #[test]
    fn test_missing_clock_is_retryable() {
        let err = SamplerBuilder::new(small_table())
            .provide_register_block(BlockId::Gcc, Arc::new(Inert))
            .build()
            .unwrap_err();
        assert!(err.is_retryable());
        assert!(err.is_startup_error());
    }

    #[test]
    fn test_missing_global_block() {
        let err = SamplerBuilder::new(small_table())
            .reference_clock(clock())
            .provide_register_block(BlockId::NpuCc, Arc::new(Inert))
            .build()
            .unwrap_err();
        assert!(matches!(err, DebugccError::BringUp { ref what, retryable: false } if what.contains("qcom,gcc")));
    }

    #[test]
    fn test_missing_referenced_block() {
        let err = SamplerBuilder::new(small_table())
            .reference_clock(clock())
            .provide_register_block(BlockId::Gcc, Arc::new(Inert))
            .build()
            .unwrap_err();
        assert!(matches!(err, DebugccError::BringUp { ref what, .. } if what.contains("qcom,npucc")));
    }

    #[test]
    fn test_optional_block_may_be_absent() {
        let sampler = SamplerBuilder::new(small_table())
            .reference_clock(clock())
            .provide_register_block(BlockId::Gcc, Arc::new(Inert))
            .optional_block(BlockId::NpuCc)
            .build()
            .unwrap();
        assert_eq!(sampler.mapped_blocks(), vec![BlockId::Gcc]);
        assert_eq!(sampler.list_signal_names(), vec!["gcc_gp1_clk", "npu_cc_xo_clk"]);
    }

    #[test]
    fn test_global_block_cannot_be_optional() {
        let err = SamplerBuilder::new(small_table())
            .reference_clock(clock())
            .provide_register_block(BlockId::Gcc, Arc::new(Inert))
            .optional_block(BlockId::Gcc)
            .optional_block(BlockId::NpuCc)
            .build()
            .unwrap_err();
        assert!(matches!(err, DebugccError::Config(_)));
    }

    #[test]
    fn test_from_config_restricts_and_marks_optional() {
        let config = DebugccConfig {
            signals: vec!["gcc_gp1_clk".into()],
            optional_blocks: vec!["qcom,npucc".into()],
            ..DebugccConfig::default()
        };
        let sampler = SamplerBuilder::from_config(&sm8150::table().unwrap(), &config)
            .unwrap()
            .provide_register_block(BlockId::Gcc, Arc::new(Inert))
            .build()
            .unwrap();
        assert_eq!(sampler.list_signal_names(), vec!["gcc_gp1_clk"]);

        let bad = DebugccConfig {
            optional_blocks: vec!["audiocc".into()],
            ..DebugccConfig::default()
        };
        assert!(SamplerBuilder::from_config(&small_table(), &bad).is_err());
    }

    #[test]
    fn test_invalid_counter_config() {
        let err = SamplerBuilder::new(small_table())
            .reference_clock(clock())
            .provide_register_block(BlockId::Gcc, Arc::new(Inert))
            .optional_block(BlockId::NpuCc)
            .counter(CounterConfig {
                window_ticks: 0,
                ..CounterConfig::default()
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, DebugccError::Config(_)));
    }
}
