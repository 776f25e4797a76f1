//! Sampler bring-up from configuration.

use anyhow::{Context, Result};
use debugcc_common::config::{BackendKind, DebugccConfig};
use debugcc_core::{
    sm8150, BlockHandle, BlockId, FrequencySampler, MuxDescriptorTable, SamplerBuilder,
    SimulatedSoc,
};
use tracing::{info, warn};

/// The SM8150 table, restricted to the configured signals.
pub fn descriptor_table(config: &DebugccConfig) -> Result<MuxDescriptorTable> {
    let table = sm8150::table().context("Built-in descriptor table is invalid")?;
    if config.signals.is_empty() {
        return Ok(table);
    }
    table
        .restrict_to(&config.signals)
        .context("Invalid `signals` list in config")
}

/// Map the configured register blocks and bring up a sampler.
pub fn build_sampler(config: &DebugccConfig) -> Result<FrequencySampler> {
    let table = sm8150::table().context("Built-in descriptor table is invalid")?;
    let mut builder =
        SamplerBuilder::from_config(&table, config).context("Invalid sampler configuration")?;

    for (block, handle) in open_blocks(config, &table)? {
        builder = builder.provide_register_block(block, handle);
    }

    builder.build().map_err(|e| {
        if e.is_retryable() {
            warn!(error = %e, "Bring-up deferred, a dependency is not ready yet");
        }
        anyhow::Error::new(e).context("Sampler bring-up failed")
    })
}

fn open_blocks(
    config: &DebugccConfig,
    table: &MuxDescriptorTable,
) -> Result<Vec<(BlockId, BlockHandle)>> {
    match config.backend.kind {
        BackendKind::Simulated => {
            let soc = SimulatedSoc::new(table.clone(), config.reference_clock.rate_hz);
            for (name, hz) in &config.backend.simulated_rates {
                soc.set_rate(name, *hz)
                    .with_context(|| format!("Invalid simulated rate for {name}"))?;
            }
            info!(
                running = config.backend.simulated_rates.len(),
                "Using simulated SoC"
            );
            Ok(soc.blocks())
        }
        BackendKind::DevMem => map_physical(config),
    }
}

#[cfg(target_os = "linux")]
fn map_physical(config: &DebugccConfig) -> Result<Vec<(BlockId, BlockHandle)>> {
    debugcc_core::map_blocks(&config.backend).with_context(|| {
        format!(
            "Failed to map register blocks through {}",
            config.backend.devmem_path.display()
        )
    })
}

#[cfg(not(target_os = "linux"))]
fn map_physical(_config: &DebugccConfig) -> Result<Vec<(BlockId, BlockHandle)>> {
    anyhow::bail!("The devmem backend is only available on Linux")
}
