use thiserror::Error;

/// Error types covering table configuration, bring-up, and per-measurement failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DebugccError {
    /// Malformed descriptor table or configuration (duplicate name, bitfield overflow).
    #[error("configuration error: {0}")]
    Config(String),

    /// A register block or the reference clock could not be obtained during bring-up.
    #[error("bring-up failed: {what}{}", retry_hint(.retryable))]
    BringUp {
        /// Description of the missing or broken resource.
        what: String,
        /// Whether the whole startup may succeed if retried later.
        retryable: bool,
    },

    /// No descriptor with this signal name exists in the table.
    #[error("unknown signal: {0}")]
    UnknownSignal(String),

    /// The signal's owning register block was never mapped.
    #[error("register block {block} for signal {signal} is not mapped")]
    UnmappedBlock {
        /// Signal being measured.
        signal: String,
        /// Block that is missing.
        block: String,
    },

    /// The reference counter never reached the expected state.
    #[error("hardware timeout: {register} not ready after {polls} polls")]
    HardwareTimeout {
        /// Name of the register being polled.
        register: String,
        /// Number of polls performed.
        polls: u32,
    },

    /// A register access itself failed.
    #[error("bus error on {block} at offset {offset:#x}: {reason}")]
    BusError {
        /// Block the access targeted.
        block: String,
        /// Register offset within the block.
        offset: u32,
        /// Underlying failure.
        reason: String,
    },

    /// Invalid sampler phase transition attempted.
    #[error("invalid phase transition from {from} to {to}")]
    InvalidPhaseTransition {
        /// Source phase.
        from: String,
        /// Attempted target phase.
        to: String,
    },
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn retry_hint(retryable: &bool) -> &'static str {
    if *retryable {
        " (retry later)"
    } else {
        ""
    }
}

impl DebugccError {
    /// Returns true for errors raised while starting up (as opposed to per-call errors).
    #[must_use]
    pub fn is_startup_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::BringUp { .. })
    }

    /// Returns true if a startup failure may clear up on a later attempt.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::BringUp { retryable: true, .. })
    }
}

/// Convenience type alias for clock-debug operations.
pub type DebugccResult<T> = Result<T, DebugccError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bring_up_display() {
        let deferred = DebugccError::BringUp {
            what: "reference clock xo_clk_src".into(),
            retryable: true,
        };
        assert_eq!(
            deferred.to_string(),
            "bring-up failed: reference clock xo_clk_src (retry later)"
        );
        assert!(deferred.is_retryable());
        assert!(deferred.is_startup_error());

        let fatal = DebugccError::BringUp {
            what: "qcom,gcc".into(),
            retryable: false,
        };
        assert_eq!(fatal.to_string(), "bring-up failed: qcom,gcc");
        assert!(!fatal.is_retryable());
    }

    #[test]
    fn test_per_call_errors_are_not_startup_errors() {
        let err = DebugccError::UnknownSignal("nope".into());
        assert!(!err.is_startup_error());

        let err = DebugccError::BusError {
            block: "gcc".into(),
            offset: 0x62000,
            reason: "out of range".into(),
        };
        assert_eq!(
            err.to_string(),
            "bus error on gcc at offset 0x62000: out of range"
        );
    }
}
