//! End-to-end measurements against the simulated SM8150.

use debugcc_common::config::CounterConfig;
use debugcc_core::{sm8150, BlockId, FixedReferenceClock, FrequencySampler, SamplerBuilder, SimulatedSoc};
use std::sync::Arc;

const REFERENCE_HZ: u64 = 4_800_000;

fn bring_up(soc: &SimulatedSoc) -> FrequencySampler {
    let table = sm8150::table().unwrap();
    let mut builder = SamplerBuilder::new(table)
        .reference_clock(Arc::new(FixedReferenceClock::new("xo_clk_src", REFERENCE_HZ)))
        .counter(CounterConfig::default());
    for (block, handle) in soc.blocks() {
        builder = builder.provide_register_block(block, handle);
    }
    builder.build().unwrap()
}

/// One count is worth `reference * divider / window` Hz.
fn assert_close(name: &str, measured: u64, expected: u64, divider: u64) {
    let resolution = REFERENCE_HZ * divider / u64::from(CounterConfig::default().window_ticks) + 1;
    assert!(
        measured.abs_diff(expected) <= resolution,
        "{name}: measured {measured} Hz, expected {expected} Hz (resolution {resolution})"
    );
}

#[test]
fn test_measures_every_domain() {
    let soc = SimulatedSoc::new(sm8150::table().unwrap(), REFERENCE_HZ);
    let cases = [
        ("gcc_gp1_clk", 100_000_000, 1),
        ("measure_only_cdsp_clk", 1_209_600_000, 2),
        ("cam_cc_bps_clk", 200_000_000, 4),
        ("disp_cc_mdss_mdp_clk", 460_000_000, 4),
        ("gpu_cc_cxo_clk", 19_200_000, 2),
        ("npu_cc_npu_core_clk", 300_000_000, 2),
        ("video_cc_mvs0_core_clk", 720_000_000, 5),
        ("l3_clk", 1_209_600_000, 4),
        ("perfcl_clk", 2_841_600_000, 4),
        ("measure_only_mccc_clk", 1_804_800_000, 1),
    ];
    for (name, hz, _) in cases {
        soc.set_rate(name, hz).unwrap();
    }

    let sampler = bring_up(&soc);
    for (name, hz, divider) in cases {
        let sample = sampler.measure(name).unwrap();
        assert_eq!(sample.divider, divider, "{name}");
        assert_eq!(sample.sample_window_ticks, 0x10000);
        assert_close(name, sample.frequency_hz, hz, divider);
    }
}

#[test]
fn test_stopped_clock_reads_zero() {
    let soc = SimulatedSoc::new(sm8150::table().unwrap(), REFERENCE_HZ);
    soc.set_rate("gcc_gp1_clk", 100_000_000).unwrap();
    let sampler = bring_up(&soc);

    // Leaves a stale count in the counter
    assert!(sampler.measure("gcc_gp1_clk").unwrap().frequency_hz > 0);

    let sample = sampler.measure("gcc_gp2_clk").unwrap();
    assert_eq!(sample.frequency_hz, 0);
    assert_ne!(sample.raw_count, 0, "counter keeps its last value");
}

#[test]
fn test_closed_block_gate_restored() {
    let soc = SimulatedSoc::new(sm8150::table().unwrap(), REFERENCE_HZ);
    soc.set_rate("cam_cc_bps_clk", 200_000_000).unwrap();
    soc.poke(BlockId::CamCc, 0xD008, 0x8000_0000);
    let sampler = bring_up(&soc);

    let sample = sampler.measure("cam_cc_bps_clk").unwrap();
    assert_close("cam_cc_bps_clk", sample.frequency_hz, 200_000_000, 4);

    assert_eq!(soc.peek(BlockId::CamCc, 0xD008), 0x8000_0000);
    assert_eq!(soc.peek(BlockId::Gcc, sm8150::LAYOUT.cbcr_offset), 0);
    assert_eq!(soc.peek(BlockId::Gcc, sm8150::LAYOUT.reference_cbcr_offset), 0);
}

#[test]
fn test_stalled_counter_times_out() {
    let soc = SimulatedSoc::new(sm8150::table().unwrap(), REFERENCE_HZ);
    soc.set_counter_stalled(true);
    let table = sm8150::table().unwrap();
    let mut builder = SamplerBuilder::new(table)
        .reference_clock(Arc::new(FixedReferenceClock::new("xo_clk_src", REFERENCE_HZ)))
        .counter(CounterConfig {
            poll_limit: 100,
            ..CounterConfig::default()
        });
    for (block, handle) in soc.blocks() {
        builder = builder.provide_register_block(block, handle);
    }
    let sampler = builder.build().unwrap();

    let err = sampler.measure("gcc_gp1_clk").unwrap_err();
    assert!(err.to_string().contains("not ready after 100 polls"), "{err}");
}

#[test]
fn test_measure_all_covers_table() {
    let soc = SimulatedSoc::new(sm8150::table().unwrap(), REFERENCE_HZ);
    soc.set_rate("gcc_gp1_clk", 50_000_000).unwrap();
    let sampler = bring_up(&soc);

    let results = sampler.measure_all();
    assert_eq!(results.len(), sampler.list_signal_names().len());
    assert!(results.iter().all(|(_, r)| r.is_ok()));

    let running: Vec<_> = results
        .iter()
        .filter(|(_, r)| r.as_ref().is_ok_and(|s| s.frequency_hz > 0))
        .map(|(name, _)| *name)
        .collect();
    assert_eq!(running, vec!["gcc_gp1_clk"]);

    let stats = sampler.stats();
    assert_eq!(stats.completed, results.len() as u64);
    assert_eq!(stats.stopped, results.len() as u64 - 1);
    assert!(soc.write_count() > 0);
}
