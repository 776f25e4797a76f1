//! Shared helpers for acceptance tests.

#![allow(dead_code)] // Not every helper is used by every test module

use debugcc_common::config::DebugccConfig;
use debugcc_core::{sm8150, FrequencySampler, SamplerBuilder, SimulatedSoc};

/// Config used by the sweep tests, as an operator would write it.
pub const SIMULATED_CONFIG: &str = r#"
optional_blocks = ["npucc"]

[reference_clock]
name = "xo_clk_src"
rate_hz = 4800000

[counter]
window_ticks = 65536
probe_window_ticks = 4096
poll_limit = 1000
poll_interval = "0s"

[backend]
kind = "simulated"

[backend.simulated_rates]
gcc_gp1_clk = 100000000
gcc_ufs_phy_axi_clk = 300000000
cam_cc_ife_0_clk = 600000000
disp_cc_mdss_pclk0_clk = 148500000
gpu_cc_cx_gmu_clk = 200000000
video_cc_mvs0_core_clk = 720000000
l3_clk = 1209600000
pwrcl_clk = 1785600000
"#;

/// Parse [`SIMULATED_CONFIG`].
pub fn simulated_config() -> DebugccConfig {
    DebugccConfig::from_toml(SIMULATED_CONFIG).expect("acceptance config must parse")
}

/// Bring up a sampler over a simulated SoC seeded from `config`.
pub fn simulated_sampler(config: &DebugccConfig) -> (SimulatedSoc, FrequencySampler) {
    let table = sm8150::table().expect("built-in table is valid");
    let soc = SimulatedSoc::new(table.clone(), config.reference_clock.rate_hz);
    for (name, hz) in &config.backend.simulated_rates {
        soc.set_rate(name, *hz).expect("known clock");
    }

    let mut builder = SamplerBuilder::from_config(&table, config).expect("valid config");
    for (block, handle) in soc.blocks() {
        builder = builder.provide_register_block(block, handle);
    }
    (soc, builder.build().expect("bring-up"))
}

/// Hz represented by one count for a clock with `divider`.
pub fn resolution_hz(config: &DebugccConfig, divider: u64) -> u64 {
    config.reference_clock.rate_hz * divider / u64::from(config.counter.window_ticks) + 1
}
