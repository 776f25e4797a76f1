//! Counting reference clock.

use debugcc_common::error::DebugccResult;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// The clock whose edges the reference counter counts.
///
/// It is enabled only while a measurement is in flight.
pub trait ReferenceClock: Send + Sync + fmt::Debug {
    /// Clock name for logs.
    fn name(&self) -> &str;

    /// Rate of the counted edges in Hz.
    fn rate_hz(&self) -> u64;

    /// Prepare and enable the clock.
    fn enable(&self) -> DebugccResult<()>;

    /// Disable and unprepare the clock.
    fn disable(&self);
}

/// Always-on reference clock of known rate.
#[derive(Debug)]
pub struct FixedReferenceClock {
    name: String,
    rate_hz: u64,
    enable_count: AtomicU32,
}

impl FixedReferenceClock {
    /// Create a fixed-rate clock.
    pub fn new(name: impl Into<String>, rate_hz: u64) -> Self {
        Self {
            name: name.into(),
            rate_hz,
            enable_count: AtomicU32::new(0),
        }
    }

    /// Current enable reference count.
    pub fn enable_count(&self) -> u32 {
        self.enable_count.load(Ordering::Acquire)
    }
}

impl ReferenceClock for FixedReferenceClock {
    fn name(&self) -> &str {
        &self.name
    }

    fn rate_hz(&self) -> u64 {
        self.rate_hz
    }

    fn enable(&self) -> DebugccResult<()> {
        self.enable_count.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }

    fn disable(&self) {
        // Unbalanced disables saturate at zero
        let _ = self
            .enable_count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_refcount() {
        let clock = FixedReferenceClock::new("xo_clk_src", 4_800_000);
        assert_eq!(clock.name(), "xo_clk_src");
        assert_eq!(clock.rate_hz(), 4_800_000);

        clock.enable().unwrap();
        clock.enable().unwrap();
        assert_eq!(clock.enable_count(), 2);
        clock.disable();
        clock.disable();
        clock.disable();
        assert_eq!(clock.enable_count(), 0);
    }
}
