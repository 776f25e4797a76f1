//! Configuration structures for the clock-debug tooling.
//!
//! Supports TOML deserialization with sensible defaults for
//! simulated development and explicit values for hardware deployment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugccConfig {
    /// Clock controllers that may be absent at bring-up (e.g. "npucc").
    /// Signals owned by them fail with an unmapped-block error instead.
    pub optional_blocks: Vec<String>,

    /// Restrict the descriptor table to these signals (empty = all).
    pub signals: Vec<String>,

    /// Counting reference clock.
    pub reference_clock: ReferenceClockConfig,

    /// Reference counter timing.
    pub counter: CounterConfig,

    /// Register access backend.
    pub backend: BackendConfig,

    /// Block-device rename pass.
    pub rename: RenameConfig,
}

impl Default for DebugccConfig {
    fn default() -> Self {
        Self {
            optional_blocks: Vec::new(),
            signals: Vec::new(),
            reference_clock: ReferenceClockConfig::default(),
            counter: CounterConfig::default(),
            backend: BackendConfig::default(),
            rename: RenameConfig::default(),
        }
    }
}

/// Reference clock configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceClockConfig {
    /// Clock name, used in logs and bring-up errors.
    pub name: String,

    /// Rate of the edges the counter sees, in Hz.
    /// SM8150 counts on the CXO/4 branch: 19.2 MHz / 4.
    pub rate_hz: u64,
}

impl Default for ReferenceClockConfig {
    fn default() -> Self {
        Self {
            name: String::from("xo_clk_src"),
            rate_hz: 4_800_000,
        }
    }
}

/// Reference counter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Full measurement window in reference ticks (~14 ms at 4.8 MHz).
    pub window_ticks: u32,

    /// Short probe window run first to detect a stopped clock (0 disables).
    pub probe_window_ticks: u32,

    /// Maximum status polls per counter phase before timing out.
    pub poll_limit: u32,

    /// Delay between status polls (0 = spin).
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            window_ticks: 0x10000,
            probe_window_ticks: 0x1000,
            poll_limit: 1_000_000,
            poll_interval: Duration::ZERO,
        }
    }
}

/// Register access backend kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// In-memory SoC model for testing.
    #[default]
    Simulated,
    /// Physical registers mapped through `/dev/mem`.
    DevMem,
}

/// Backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Backend kind.
    pub kind: BackendKind,

    /// Memory device used by the `devmem` backend.
    pub devmem_path: PathBuf,

    /// Physical register windows, one per clock controller.
    pub blocks: Vec<BlockWindow>,

    /// Clock rates in Hz the `simulated` backend reports, by signal name.
    /// Unlisted clocks are stopped.
    pub simulated_rates: BTreeMap<String, u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::Simulated,
            devmem_path: PathBuf::from("/dev/mem"),
            blocks: Vec::new(),
            simulated_rates: BTreeMap::new(),
        }
    }
}

/// Physical address window of one clock controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockWindow {
    /// Block name ("gcc", "camcc", ... or the "qcom,gcc" property form).
    pub block: String,
    /// Physical base address.
    pub base: u64,
    /// Window size in bytes.
    pub size: u64,
}

/// Block-device rename configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    /// Flattened device tree root.
    pub device_tree_root: PathBuf,

    /// Compatible string of the rename node.
    pub compatible: String,

    /// Sysfs block class directory.
    pub sys_block_dir: PathBuf,

    /// Device node directory.
    pub dev_dir: PathBuf,

    /// Directory receiving the renamed aliases.
    pub link_dir: PathBuf,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            device_tree_root: PathBuf::from("/proc/device-tree"),
            compatible: String::from("qcom,blkdev-rename"),
            sys_block_dir: PathBuf::from("/sys/class/block"),
            dev_dir: PathBuf::from("/dev"),
            link_dir: PathBuf::from("/dev/block/by-name"),
        }
    }
}

impl DebugccConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Serialize configuration to TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Serde helper module for `Duration` using humantime format.
mod humantime_serde {
    use serde::{self, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = humantime::format_duration(*duration).to_string();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        humantime::parse_duration(&s).map_err(serde::de::Error::custom)
    }
}
