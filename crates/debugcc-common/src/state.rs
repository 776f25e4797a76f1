//! Sampler phase state machine.
//!
//! One measurement walks the shared debug hardware through:
//! IDLE → SELECTING → GATING → COUNTING → IDLE
//!
//! Any phase may drop straight back to IDLE when a register access
//! fails, so a failed attempt never leaves the sampler mid-cycle.

use crate::error::{DebugccError, DebugccResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phases of a single measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SamplerPhase {
    /// No measurement in flight.
    #[default]
    Idle,
    /// Programming mux select and divider fields.
    Selecting,
    /// Enabling the branch and reference gates.
    Gating,
    /// Reference counter running.
    Counting,
}

impl fmt::Display for SamplerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::Selecting => write!(f, "SELECTING"),
            Self::Gating => write!(f, "GATING"),
            Self::Counting => write!(f, "COUNTING"),
        }
    }
}

impl SamplerPhase {
    /// Check if a transition to `target` is valid from the current phase.
    #[must_use]
    pub fn can_transition_to(&self, target: SamplerPhase) -> bool {
        use SamplerPhase::{Counting, Gating, Idle, Selecting};

        matches!(
            (self, target),
            (Idle, Selecting)
                | (Selecting, Gating)
                | (Gating, Counting)
                | (Counting, Idle)
                // Abort paths
                | (Selecting, Idle)
                | (Gating, Idle)
        )
    }

    /// Attempt to transition to `target`, returning error if invalid.
    pub fn transition_to(&mut self, target: SamplerPhase) -> DebugccResult<()> {
        if self.can_transition_to(target) {
            *self = target;
            Ok(())
        } else {
            Err(DebugccError::InvalidPhaseTransition {
                from: self.to_string(),
                to: target.to_string(),
            })
        }
    }

    /// Returns true while the shared hardware is owned by a measurement.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut phase = SamplerPhase::default();
        assert_eq!(phase, SamplerPhase::Idle);
        assert!(!phase.is_busy());

        phase.transition_to(SamplerPhase::Selecting).unwrap();
        phase.transition_to(SamplerPhase::Gating).unwrap();
        phase.transition_to(SamplerPhase::Counting).unwrap();
        assert!(phase.is_busy());
        phase.transition_to(SamplerPhase::Idle).unwrap();
        assert_eq!(phase, SamplerPhase::Idle);
    }

    #[test]
    fn test_abort_returns_to_idle() {
        let mut phase = SamplerPhase::Selecting;
        phase.transition_to(SamplerPhase::Idle).unwrap();

        let mut phase = SamplerPhase::Gating;
        phase.transition_to(SamplerPhase::Idle).unwrap();
    }

    #[test]
    fn test_invalid_transitions() {
        let mut phase = SamplerPhase::Idle;
        let err = phase.transition_to(SamplerPhase::Counting).unwrap_err();
        assert_eq!(
            err,
            DebugccError::InvalidPhaseTransition {
                from: "IDLE".into(),
                to: "COUNTING".into(),
            }
        );
        assert_eq!(phase, SamplerPhase::Idle);

        assert!(!SamplerPhase::Counting.can_transition_to(SamplerPhase::Selecting));
        assert!(!SamplerPhase::Selecting.can_transition_to(SamplerPhase::Counting));
    }

    #[test]
    fn test_display() {
        assert_eq!(SamplerPhase::Gating.to_string(), "GATING");
    }
}
