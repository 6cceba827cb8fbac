//! Drop timer - turns wall-clock time into gravity steps
//!
//! Gravity fires every [`NORMAL_DROP_MS`]. While a slow motion window is open
//! the interval doubles to [`SLOW_MOTION_DROP_MS`]; the window lasts
//! [`SLOW_MOTION_DURATION_MS`] and restarts on every new activation.

use crate::types::{NORMAL_DROP_MS, SLOW_MOTION_DROP_MS, SLOW_MOTION_DURATION_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropTimer {
    accumulated_ms: u32,
    slow_motion_remaining_ms: u32,
}

impl DropTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gravity interval.
    pub fn interval_ms(&self) -> u32 {
        if self.is_slow_motion() {
            SLOW_MOTION_DROP_MS
        } else {
            NORMAL_DROP_MS
        }
    }

    pub fn is_slow_motion(&self) -> bool {
        self.slow_motion_remaining_ms > 0
    }

    pub fn slow_motion_remaining_ms(&self) -> u32 {
        self.slow_motion_remaining_ms
    }

    /// Open (or restart) the slow motion window.
    pub fn start_slow_motion(&mut self) {
        self.slow_motion_remaining_ms = SLOW_MOTION_DURATION_MS;
    }

    /// Advance by `elapsed_ms` and return how many gravity steps are due.
    ///
    /// Time is consumed in slices that never straddle the end of the slow
    /// motion window, so the interval switches back at the right moment.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let mut remaining = elapsed_ms;
        let mut drops: u32 = 0;

        while remaining > 0 {
            let slice = if self.is_slow_motion() {
                remaining.min(self.slow_motion_remaining_ms)
            } else {
                remaining
            };
            remaining -= slice;

            let interval = u64::from(self.interval_ms());
            self.slow_motion_remaining_ms = self.slow_motion_remaining_ms.saturating_sub(slice);
            // Carried time plus a full u32 slice does not fit in u32.
            let total = u64::from(self.accumulated_ms) + u64::from(slice);
            drops = drops.saturating_add((total / interval) as u32);
            self.accumulated_ms = (total % interval) as u32;
        }

        drops
    }

    /// Back to normal speed with no time accumulated.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
