//! Measurement statistics.
//!
//! Tracks how many measurements ran, how they failed, and how long
//! the hardware lock was held, so callers can spot a wedged counter.

use crate::error::DebugccError;
use serde::Serialize;
use std::time::Duration;

/// Running statistics over all `measure` calls of one sampler.
#[derive(Debug, Clone, Default)]
pub struct MeasurementStats {
    /// Successful measurements.
    completed: u64,
    /// Measurements that found the clock stopped (0 Hz).
    stopped: u64,
    /// Failures before any register access.
    lookup_failures: u64,
    /// Counter never became ready.
    timeouts: u64,
    /// Register access failures.
    bus_errors: u64,
    /// Minimum observed hold time in nanoseconds.
    min_ns: Option<u64>,
    /// Maximum observed hold time in nanoseconds.
    max_ns: u64,
    /// Sum of all hold times for mean calculation.
    sum_ns: u64,
}

impl MeasurementStats {
    /// Create empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful measurement and the time the hardware was held.
    pub fn record_success(&mut self, held: Duration, frequency_hz: u64) {
        let ns = u64::try_from(held.as_nanos()).unwrap_or(u64::MAX);
        self.completed += 1;
        if frequency_hz == 0 {
            self.stopped += 1;
        }
        self.min_ns = Some(self.min_ns.map_or(ns, |min| min.min(ns)));
        self.max_ns = self.max_ns.max(ns);
        self.sum_ns = self.sum_ns.saturating_add(ns);
    }

    /// Record a failed measurement.
    pub fn record_failure(&mut self, error: &DebugccError) {
        match error {
            DebugccError::UnknownSignal(_) | DebugccError::UnmappedBlock { .. } => {
                self.lookup_failures += 1;
            }
            DebugccError::HardwareTimeout { .. } => self.timeouts += 1,
            _ => self.bus_errors += 1,
        }
    }

    /// Number of successful measurements.
    #[must_use]
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Total number of failed measurements.
    #[must_use]
    pub fn failures(&self) -> u64 {
        self.lookup_failures + self.timeouts + self.bus_errors
    }

    /// Number of counter timeouts.
    #[must_use]
    pub fn timeouts(&self) -> u64 {
        self.timeouts
    }

    /// Mean hardware hold time of successful measurements.
    #[must_use]
    pub fn mean_hold(&self) -> Option<Duration> {
        if self.completed > 0 {
            Some(Duration::from_nanos(self.sum_ns / self.completed))
        } else {
            None
        }
    }

    /// Get a serializable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            completed: self.completed,
            stopped: self.stopped,
            lookup_failures: self.lookup_failures,
            timeouts: self.timeouts,
            bus_errors: self.bus_errors,
            min_hold_ns: self.min_ns,
            max_hold_ns: (self.completed > 0).then_some(self.max_ns),
            mean_hold_ns: self.mean_hold().map(|d| d.as_nanos() as u64),
        }
    }
}

/// Point-in-time copy of [`MeasurementStats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Successful measurements.
    pub completed: u64,
    /// Successful measurements that reported a stopped clock.
    pub stopped: u64,
    /// Unknown signal or unmapped block.
    pub lookup_failures: u64,
    /// Counter timeouts.
    pub timeouts: u64,
    /// Register access failures.
    pub bus_errors: u64,
    /// Minimum hold time.
    pub min_hold_ns: Option<u64>,
    /// Maximum hold time.
    pub max_hold_ns: Option<u64>,
    /// Mean hold time.
    pub mean_hold_ns: Option<u64>,
}
