//! Clock-controller register block identifiers.

use debugcc_common::error::{DebugccError, DebugccResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Clock-controller instances that own debug mux registers.
///
/// `Gcc` is the global block: it hosts the shared debug mux and the
/// reference counter. Every other block feeds into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockId {
    /// Global clock controller.
    Gcc,
    /// Camera clock controller.
    CamCc,
    /// Display clock controller.
    DispCc,
    /// GPU clock controller.
    GpuCc,
    /// NPU clock controller.
    NpuCc,
    /// Video clock controller.
    VideoCc,
    /// CPU clock controller (L3 and CPU clusters).
    CpuCc,
    /// Memory controller clock controller.
    McCc,
}

impl BlockId {
    /// Every block, in bring-up order.
    pub const ALL: [BlockId; 8] = [
        BlockId::Gcc,
        BlockId::DispCc,
        BlockId::VideoCc,
        BlockId::CamCc,
        BlockId::NpuCc,
        BlockId::GpuCc,
        BlockId::CpuCc,
        BlockId::McCc,
    ];

    /// Short name used in configuration files and logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Gcc => "gcc",
            Self::CamCc => "camcc",
            Self::DispCc => "dispcc",
            Self::GpuCc => "gpucc",
            Self::NpuCc => "npucc",
            Self::VideoCc => "videocc",
            Self::CpuCc => "cpucc",
            Self::McCc => "mccc",
        }
    }

    /// Device-tree phandle property naming this block's syscon.
    #[must_use]
    pub fn dt_property(self) -> &'static str {
        match self {
            Self::Gcc => "qcom,gcc",
            Self::CamCc => "qcom,camcc",
            Self::DispCc => "qcom,dispcc",
            Self::GpuCc => "qcom,gpucc",
            Self::NpuCc => "qcom,npucc",
            Self::VideoCc => "qcom,videocc",
            Self::CpuCc => "qcom,cpucc",
            Self::McCc => "qcom,mccc",
        }
    }

    /// Returns true for the global block.
    #[must_use]
    pub fn is_global(self) -> bool {
        self == Self::Gcc
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockId {
    type Err = DebugccError;

    /// Accepts the short name ("camcc") or the property form ("qcom,camcc").
    fn from_str(s: &str) -> DebugccResult<Self> {
        let short = s.strip_prefix("qcom,").unwrap_or(s);
        BlockId::ALL
            .into_iter()
            .find(|block| block.name().eq_ignore_ascii_case(short))
            .ok_or_else(|| DebugccError::Config(format!("unknown clock controller block: {s}")))
    }
}
