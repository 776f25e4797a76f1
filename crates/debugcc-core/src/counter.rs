//! Reference counter protocol.
//!
//! The counter lives in the global block. A run is:
//! 1. write the window length with START clear, wait for DONE to clear
//! 2. write the window length with START set, wait for DONE to set
//! 3. take the edge count from the low 25 bits of the status register

use crate::descriptor::DebugMuxLayout;
use crate::regmap::RegisterBlock;
use debugcc_common::config::CounterConfig;
use debugcc_common::error::{DebugccError, DebugccResult};
use std::time::Duration;
use tracing::trace;

/// Control register: start counting.
pub const CTL_START: u32 = 1 << 20;
/// Control register: window length field.
pub const CTL_TICKS_MASK: u32 = CTL_START - 1;
/// Status register: measurement complete.
pub const STATUS_DONE: u32 = 1 << 25;
/// Status register: edge count field.
pub const STATUS_COUNT_MASK: u32 = STATUS_DONE - 1;

/// Drives the reference counter through one or more measurement windows.
#[derive(Debug, Clone)]
pub struct ReferenceCounter {
    ctl_offset: u32,
    status_offset: u32,
    poll_limit: u32,
    poll_interval: Duration,
}

impl ReferenceCounter {
    /// Create a counter driver for `layout`.
    ///
    /// # Errors
    ///
    /// Returns [`DebugccError::Config`] if a window does not fit the control
    /// register or the poll limit is zero.
    pub fn new(layout: &DebugMuxLayout, config: &CounterConfig) -> DebugccResult<Self> {
        if config.window_ticks == 0 || config.window_ticks > CTL_TICKS_MASK {
            return Err(DebugccError::Config(format!(
                "counter window {:#x} must be between 1 and {CTL_TICKS_MASK:#x} ticks",
                config.window_ticks
            )));
        }
        if config.probe_window_ticks > CTL_TICKS_MASK {
            return Err(DebugccError::Config(format!(
                "probe window {:#x} exceeds {CTL_TICKS_MASK:#x} ticks",
                config.probe_window_ticks
            )));
        }
        if config.poll_limit == 0 {
            return Err(DebugccError::Config("counter poll limit must be nonzero".into()));
        }

        Ok(Self {
            ctl_offset: layout.counter_ctl_offset,
            status_offset: layout.counter_status_offset,
            poll_limit: config.poll_limit,
            poll_interval: config.poll_interval,
        })
    }

    /// Count reference edges over `ticks` and return the raw count.
    ///
    /// # Errors
    ///
    /// Returns [`DebugccError::HardwareTimeout`] if the status register never
    /// reaches the expected state, or any register access error.
    pub fn run(&self, block: &dyn RegisterBlock, ticks: u32) -> DebugccResult<u32> {
        let ticks = ticks & CTL_TICKS_MASK;

        // Stop the counter and load the window
        block.write(self.ctl_offset, ticks)?;
        self.poll(block, "counter stop", |status| status & STATUS_DONE == 0)?;

        block.write(self.ctl_offset, CTL_START | ticks)?;
        let status = self.poll(block, "counter done", |status| status & STATUS_DONE != 0)?;

        let count = status & STATUS_COUNT_MASK;
        trace!(ticks, count, "Counter window complete");
        Ok(count)
    }

    fn poll<F>(&self, block: &dyn RegisterBlock, what: &str, ready: F) -> DebugccResult<u32>
    where
        F: Fn(u32) -> bool,
    {
        for _ in 0..self.poll_limit {
            let status = block.read(self.status_offset)?;
            if ready(status) {
                return Ok(status);
            }
            if self.poll_interval.is_zero() {
                std::hint::spin_loop();
            } else {
                std::thread::sleep(self.poll_interval);
            }
        }

        Err(DebugccError::HardwareTimeout {
            register: format!("{what} (status {:#x})", self.status_offset),
            polls: self.poll_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sm8150::LAYOUT;
    use std::sync::Mutex;

    /// Status register that reports DONE after a number of reads.
    #[derive(Debug)]
    struct SlowCounter {
        count: u32,
        done_after: u32,
        state: Mutex<(bool, u32, Vec<(u32, u32)>)>,
    }

    impl SlowCounter {
        fn new(count: u32, done_after: u32) -> Self {
            Self {
                count,
                done_after,
                state: Mutex::new((false, 0, Vec::new())),
            }
        }
    }

    impl RegisterBlock for SlowCounter {
        fn read(&self, offset: u32) -> DebugccResult<u32> {
            assert_eq!(offset, LAYOUT.counter_status_offset);
            let mut state = self.state.lock().unwrap();
            let (running, reads, _) = &mut *state;
            if !*running {
                return Ok(0);
            }
            *reads += 1;
            if *reads >= self.done_after {
                Ok(STATUS_DONE | self.count)
            } else {
                Ok(0)
            }
        }

        fn write(&self, offset: u32, value: u32) -> DebugccResult<()> {
            let mut state = self.state.lock().unwrap();
            state.0 = value & CTL_START != 0;
            state.1 = 0;
            state.2.push((offset, value));
            Ok(())
        }
    }

    fn config(poll_limit: u32) -> CounterConfig {
        CounterConfig {
            poll_limit,
            ..CounterConfig::default()
        }
    }

    #[test]
    fn test_run_sequence() {
        let counter = ReferenceCounter::new(&LAYOUT, &config(10)).unwrap();
        let block = SlowCounter::new(0x1234, 3);

        assert_eq!(counter.run(&block, 0x10000).unwrap(), 0x1234);

        let writes = block.state.lock().unwrap().2.clone();
        assert_eq!(
            writes,
            vec![
                (LAYOUT.counter_ctl_offset, 0x10000),
                (LAYOUT.counter_ctl_offset, CTL_START | 0x10000),
            ]
        );
    }

    #[test]
    fn test_timeout() {
        let counter = ReferenceCounter::new(&LAYOUT, &config(5)).unwrap();
        let block = SlowCounter::new(1, 100);

        let err = counter.run(&block, 0x1000).unwrap_err();
        assert!(matches!(err, DebugccError::HardwareTimeout { polls: 5, .. }));
    }

    #[test]
    fn test_invalid_windows_rejected() {
        let mut cfg = CounterConfig::default();
        cfg.window_ticks = 0;
        assert!(ReferenceCounter::new(&LAYOUT, &cfg).is_err());

        cfg.window_ticks = CTL_START;
        assert!(ReferenceCounter::new(&LAYOUT, &cfg).is_err());

        cfg.window_ticks = 0x10000;
        cfg.poll_limit = 0;
        assert!(ReferenceCounter::new(&LAYOUT, &cfg).is_err());
    }
}
