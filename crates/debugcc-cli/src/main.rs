//! debugcc entry point.
//!
//! Measures internal SoC clocks through the debug mux and applies the
//! device-tree block-device renames.

mod backend;
mod report;

use anyhow::{bail, Context, Result};
use blkdev_rename::{rename_from_device_tree, SysfsRegistry};
use clap::{Parser, Subcommand};
use debugcc_common::config::{BackendKind, DebugccConfig};
use debugcc_core::BlockId;
use std::path::PathBuf;
use tracing::{info, warn};

/// debugcc command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "debugcc",
    about = "Measure internal SoC clock frequencies through the debug mux",
    version,
    long_about = None
)]
struct Args {
    /// Path to a configuration file (TOML).
    #[arg(long, short = 'c', value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Use the simulated SoC instead of physical registers.
    #[arg(long, short = 's', global = true)]
    simulated: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, short = 'l', default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// List measurable clocks.
    List {
        /// Only clocks of this block ("gcc", "camcc", ...).
        #[arg(long, short = 'b')]
        block: Option<String>,

        /// Print JSON.
        #[arg(long)]
        json: bool,
    },

    /// Measure clock frequencies.
    Measure {
        /// Clocks to measure.
        names: Vec<String>,

        /// Measure every clock in the table.
        #[arg(long, short = 'a', conflicts_with = "names")]
        all: bool,

        /// Print JSON.
        #[arg(long)]
        json: bool,
    },

    /// Apply the device-tree block-device renames.
    Rename {
        /// Resolve and report without renaming.
        #[arg(long, short = 'n')]
        dry_run: bool,

        /// Print JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration.
    Config,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting debugcc");

    let mut config = load_config(&args)?;
    if args.simulated {
        config.backend.kind = BackendKind::Simulated;
    }

    run(&args.command, &config)
}

fn run(command: &Command, config: &DebugccConfig) -> Result<()> {
    match command {
        Command::List { block, json } => {
            let table = backend::descriptor_table(config)?;
            let block = block
                .as_deref()
                .map(str::parse::<BlockId>)
                .transpose()
                .context("Invalid --block")?;
            report::print_signals(&table, block, *json)
        }
        Command::Measure { names, all, json } => {
            if names.is_empty() && !*all {
                bail!("No clocks given; pass clock names or --all");
            }

            let sampler = backend::build_sampler(config)?;
            let results = if *all {
                sampler.measure_all()
            } else {
                names
                    .iter()
                    .map(|name| (name.as_str(), sampler.measure(name)))
                    .collect()
            };
            report::print_samples(&results, *json)?;

            let failed = results.iter().filter(|(_, r)| r.is_err()).count();
            if *all {
                report::print_stats(&sampler.stats(), *json)?;
                if failed > 0 {
                    warn!(failed, "Some clocks could not be measured");
                }
            } else if failed > 0 {
                bail!("{failed} of {} measurements failed", results.len());
            }
            Ok(())
        }
        Command::Rename { dry_run, json } => {
            let rename = &config.rename;
            let mut registry =
                SysfsRegistry::new(&rename.sys_block_dir, &rename.dev_dir, &rename.link_dir);
            let outcome = rename_from_device_tree(rename, &mut registry, *dry_run)
                .context("Block-device rename failed")?;
            report::print_rename(&outcome, *json)
        }
        Command::Config => {
            print!("{}", config.to_toml().context("Failed to serialize config")?);
            Ok(())
        }
    }
}

/// Initialize logging with the specified log level.
fn init_logging(level: &str) {
    let filter = format!(
        "debugcc={level},debugcc_core={level},debugcc_common={level},blkdev_rename={level}"
    );

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .init();
}

/// Load configuration from file or use defaults.
///
/// Resolution priority (first existing file wins):
/// 1. Command-line `--config` argument
/// 2. `DEBUGCC_CONFIG_PATH` environment variable
/// 3. `/etc/debugcc/config.toml` (system path)
/// 4. `config/default.toml` (local development)
/// 5. Built-in defaults
fn load_config(args: &Args) -> Result<DebugccConfig> {
    if let Some(config_path) = &args.config {
        info!(?config_path, "Loading config from command-line argument");
        return DebugccConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {config_path:?}"));
    }

    if let Ok(env_path) = std::env::var("DEBUGCC_CONFIG_PATH") {
        let config_path = PathBuf::from(&env_path);
        if config_path.exists() {
            info!(?config_path, "Loading config from DEBUGCC_CONFIG_PATH");
            return DebugccConfig::from_file(&config_path).with_context(|| {
                format!("Failed to load config from DEBUGCC_CONFIG_PATH={env_path:?}")
            });
        }
        warn!(
            path = %env_path,
            "DEBUGCC_CONFIG_PATH set but file does not exist, checking other locations"
        );
    }

    for path in ["/etc/debugcc/config.toml", "config/default.toml"] {
        let config_path = PathBuf::from(path);
        if config_path.exists() {
            info!(?config_path, "Loading config");
            return DebugccConfig::from_file(&config_path)
                .with_context(|| format!("Failed to load config from {config_path:?}"));
        }
    }

    info!("No config file found, using built-in defaults");
    Ok(DebugccConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_measure_names() {
        let args = Args::parse_from(["debugcc", "measure", "gcc_gp1_clk", "l3_clk", "--json"]);
        assert_eq!(
            args.command,
            Command::Measure {
                names: vec!["gcc_gp1_clk".into(), "l3_clk".into()],
                all: false,
                json: true,
            }
        );
        assert!(!args.simulated);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_args_global_flags_after_subcommand() {
        let args = Args::parse_from(["debugcc", "measure", "--all", "-s", "-c", "test.toml"]);
        assert!(args.simulated);
        assert_eq!(args.config, Some(PathBuf::from("test.toml")));
        assert!(matches!(args.command, Command::Measure { all: true, .. }));
    }

    #[test]
    fn test_args_all_conflicts_with_names() {
        assert!(Args::try_parse_from(["debugcc", "measure", "--all", "gcc_gp1_clk"]).is_err());
    }

    #[test]
    fn test_args_rename_and_list() {
        let args = Args::parse_from(["debugcc", "rename", "--dry-run"]);
        assert_eq!(
            args.command,
            Command::Rename {
                dry_run: true,
                json: false
            }
        );

        let args = Args::parse_from(["debugcc", "list", "-b", "camcc"]);
        assert_eq!(
            args.command,
            Command::List {
                block: Some("camcc".into()),
                json: false
            }
        );
    }

    #[test]
    fn test_measure_requires_names_or_all() {
        let err = run(
            &Command::Measure {
                names: Vec::new(),
                all: false,
                json: false,
            },
            &DebugccConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("--all"));
    }

    #[test]
    fn test_measure_simulated_clock() {
        let mut config = DebugccConfig::default();
        config
            .backend
            .simulated_rates
            .insert("gcc_gp1_clk".into(), 100_000_000);
        run(
            &Command::Measure {
                names: vec!["gcc_gp1_clk".into()],
                all: false,
                json: true,
            },
            &config,
        )
        .unwrap();

        let err = run(
            &Command::Measure {
                names: vec!["no_such_clk".into()],
                all: false,
                json: false,
            },
            &config,
        )
        .unwrap_err();
        assert!(err.to_string().contains("1 of 1"));
    }
}
