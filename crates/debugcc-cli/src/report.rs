//! Text and JSON output.

use anyhow::Result;
use blkdev_rename::RenameReport;
use debugcc_common::error::DebugccResult;
use debugcc_common::metrics::StatsSnapshot;
use debugcc_core::{BlockId, MuxDescriptorTable, SampleResult};
use serde::Serialize;

#[derive(Serialize)]
struct SignalLine<'a> {
    name: &'a str,
    block: BlockId,
    divider: u64,
}

#[derive(Serialize)]
#[serde(untagged)]
enum SampleLine<'a> {
    Measured(&'a SampleResult),
    Failed { signal_name: &'a str, error: String },
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the clocks of `table`, optionally only those of `block`.
pub fn print_signals(table: &MuxDescriptorTable, block: Option<BlockId>, json: bool) -> Result<()> {
    let lines: Vec<_> = table
        .iter()
        .filter(|desc| block.map_or(true, |b| desc.block == b))
        .map(|desc| SignalLine {
            name: desc.name,
            block: desc.block,
            divider: desc.total_divider(),
        })
        .collect();

    if json {
        return print_json(&lines);
    }
    for line in &lines {
        println!("{:<48} {:<8} /{}", line.name, line.block, line.divider);
    }
    Ok(())
}

/// Print measurement results in the order given.
pub fn print_samples(results: &[(&str, DebugccResult<SampleResult>)], json: bool) -> Result<()> {
    if json {
        let lines: Vec<_> = results
            .iter()
            .map(|(name, result)| match result {
                Ok(sample) => SampleLine::Measured(sample),
                Err(e) => SampleLine::Failed {
                    signal_name: name,
                    error: e.to_string(),
                },
            })
            .collect();
        return print_json(&lines);
    }

    for (name, result) in results {
        match result {
            Ok(sample) => println!("{}", format_sample(sample)),
            Err(e) => println!("{name:<48} error: {e}"),
        }
    }
    Ok(())
}

fn format_sample(sample: &SampleResult) -> String {
    if sample.frequency_hz == 0 {
        return format!("{:<48} {:>16}", sample.signal_name, "off");
    }
    #[allow(clippy::cast_precision_loss)]
    let mhz = sample.frequency_hz as f64 / 1e6;
    format!(
        "{:<48} {:>16} Hz ({mhz:.3} MHz)",
        sample.signal_name, sample.frequency_hz
    )
}

/// Print sampler statistics after a sweep.
pub fn print_stats(stats: &StatsSnapshot, json: bool) -> Result<()> {
    if json {
        // Keep stdout a single JSON document
        eprintln!("{}", serde_json::to_string(stats)?);
        return Ok(());
    }
    println!(
        "\n{} measured ({} off), {} failed ({} timeouts, {} bus errors)",
        stats.completed,
        stats.stopped,
        stats.lookup_failures + stats.timeouts + stats.bus_errors,
        stats.timeouts,
        stats.bus_errors
    );
    Ok(())
}

/// Print the outcome of a rename pass.
pub fn print_rename(report: &RenameReport, json: bool) -> Result<()> {
    if json {
        return print_json(report);
    }
    let Some(node) = &report.node else {
        println!("no rename node in device tree");
        return Ok(());
    };
    let verb = if report.dry_run { "would rename" } else { "renamed" };
    for rename in &report.renamed {
        println!(
            "{verb} {} ({}:{}) -> {}",
            rename.device.name, rename.device.major, rename.device.minor, rename.new_name
        );
    }
    println!("{} device(s) from {}", report.renamed.len(), node.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(hz: u64) -> SampleResult {
        SampleResult {
            signal_name: "gcc_gp1_clk".into(),
            frequency_hz: hz,
            sample_window_ticks: 0x10000,
            raw_count: 1,
            divider: 1,
        }
    }

    #[test]
    fn test_format_sample() {
        assert!(format_sample(&sample(100_000_000)).ends_with("100000000 Hz (100.000 MHz)"));
        assert!(format_sample(&sample(0)).ends_with("off"));
    }

    #[test]
    fn test_sample_json_shapes() {
        let ok = sample(19_200_000);
        let err = debugcc_common::error::DebugccError::UnknownSignal("x".into());

        let measured = serde_json::to_value(SampleLine::Measured(&ok)).unwrap();
        assert_eq!(measured["frequency_hz"], 19_200_000);

        let failed = serde_json::to_value(SampleLine::Failed {
            signal_name: "x",
            error: err.to_string(),
        })
        .unwrap();
        assert_eq!(failed["signal_name"], "x");
        assert_eq!(failed["error"], "unknown signal: x");
    }
}
