//! Ammo economy
//!
//! A timer accumulates frame time; once it is strictly past the interval the
//! next tick grants one round and resets the timer. At most one round per
//! tick no matter how large the delta.

use crate::tuning::AmmoTuning;

#[derive(Debug, Clone)]
pub struct AmmoRegenerator {
    amount: u32,
    max: u32,
    /// Milliseconds accumulated since the last grant
    timer: f64,
    interval: f64,
}

impl AmmoRegenerator {
    pub fn new(tuning: &AmmoTuning) -> Self {
        Self {
            amount: tuning.start.min(tuning.max),
            max: tuning.max,
            timer: 0.0,
            interval: tuning.interval_ms,
        }
    }

    /// Advance the refill timer. Returns true if a round was added.
    pub fn tick(&mut self, delta_ms: f64) -> bool {
        if self.timer > self.interval {
            self.timer = 0.0;
            if !self.is_full() {
                self.amount += 1;
                return true;
            }
            log::trace!("Ammo full ({}), refill skipped", self.max);
            false
        } else {
            self.timer += delta_ms.max(0.0);
            false
        }
    }

    /// Spend one round if any are left
    pub fn try_consume(&mut self) -> bool {
        if self.amount == 0 {
            return false;
        }
        self.amount -= 1;
        true
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn timer(&self) -> f64 {
        self.timer
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn is_full(&self) -> bool {
        self.amount >= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }
}
