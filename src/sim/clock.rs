//! Frame timing
//!
//! Turns the scheduler's timestamps into per-frame deltas.

use crate::tuning::ClockTuning;

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
    max_delta_ms: Option<f64>,
    frame_count: u64,
}

impl FrameClock {
    pub fn new(tuning: &ClockTuning) -> Self {
        Self {
            last_time: None,
            max_delta_ms: tuning.max_delta_ms,
            frame_count: 0,
        }
    }

    /// Milliseconds since the previous timestamp.
    ///
    /// The first frame measures 0. A timestamp earlier than the last one also
    /// measures 0.
    pub fn delta(&mut self, timestamp_ms: f64) -> f64 {
        let delta = match self.last_time {
            Some(last) => (timestamp_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_time = Some(timestamp_ms);
        self.frame_count += 1;

        match self.max_delta_ms {
            Some(cap) => delta.min(cap),
            None => delta,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.delta(123_456.0), 0.0);
        assert_eq!(clock.delta(123_472.5), 16.5);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_backwards_timestamp_is_zero() {
        let mut clock = FrameClock::default();
        clock.delta(100.0);
        assert_eq!(clock.delta(90.0), 0.0);
        assert_eq!(clock.delta(95.0), 5.0);
    }

    #[test]
    fn test_large_gap_accepted_without_cap() {
        let mut clock = FrameClock::default();
        clock.delta(0.0);
        assert_eq!(clock.delta(60_000.0), 60_000.0);
    }

    #[test]
    fn test_cap_limits_delta() {
        let mut clock = FrameClock::new(&ClockTuning {
            max_delta_ms: Some(100.0),
        });
        clock.delta(0.0);
        assert_eq!(clock.delta(5_000.0), 100.0);
        assert_eq!(clock.delta(5_010.0), 10.0);
    }
}
