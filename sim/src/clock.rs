use crate::relativity::dilated_delta;

/// The two parallel clocks: reference (stationary observer) time and craft proper time.
///
/// Invariants, for any sequence of ticks with `v` in `[0, 1)`:
/// - both accumulators start at 0 and never decrease
/// - `craft_time <= reference_time`
/// - while paused, nothing changes
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ClockState {
    pub reference_time: f64,
    pub craft_time: f64,
    pub paused: bool,
}

impl ClockState {
    /// Advance both clocks by one frame.
    ///
    /// This is the only place simulated time moves. A paused tick returns the state unchanged,
    /// pause flag included; the flag itself is owned by the caller. Negative deltas count as
    /// zero.
    #[must_use]
    pub fn tick(&self, reference_delta: f64, velocity_fraction: f64, paused: bool) -> ClockState {
        if paused {
            return *self;
        }

        let dt = reference_delta.max(0.0);
        ClockState {
            reference_time: self.reference_time + dt,
            craft_time: self.craft_time + dilated_delta(dt, velocity_fraction),
            ..*self
        }
    }

    /// `reference_time - craft_time`: how far the craft clock has fallen behind.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.reference_time - self.craft_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_unpaused() {
        let c = ClockState::default();
        assert_eq!(c.reference_time, 0.0);
        assert_eq!(c.craft_time, 0.0);
        assert!(!c.paused);
    }

    #[test]
    fn paused_ticks_are_idempotent() {
        let start = ClockState {
            reference_time: 12.5,
            craft_time: 10.0,
            paused: true,
        };
        let mut c = start;
        for _ in 0..1_000 {
            c = c.tick(1.0 / 60.0, 0.9, true);
        }
        assert_eq!(c, start);
    }

    #[test]
    fn paused_tick_leaves_a_running_clock_untouched() {
        let start = ClockState::default().tick(1.0, 0.5, false);
        assert_eq!(start.tick(1.0 / 60.0, 0.5, true), start);
        assert_eq!(
            ClockState::default().tick(1.0 / 60.0, 0.5, true),
            ClockState::default()
        );
    }

    #[test]
    fn at_rest_both_clocks_agree() {
        let mut c = ClockState::default();
        for _ in 0..60 {
            c = c.tick(0.5, 0.0, false);
        }
        assert_eq!(c.reference_time, 30.0);
        assert_eq!(c.craft_time, 30.0);
        assert_eq!(c.drift(), 0.0);
    }

    #[test]
    fn craft_clock_is_monotonic_and_never_ahead() {
        let mut c = ClockState::default();
        let mut prev = c;
        // Sweep speeds up and down across the clamped range, with some pauses mixed in.
        for i in 0..20_000u32 {
            let v = ((i % 10_000) as f64 / 10_000.0).min(0.9999);
            let paused = i % 997 == 0;
            c = c.tick(1.0 / 60.0, v, paused);
            assert!(c.craft_time >= prev.craft_time);
            assert!(c.reference_time >= prev.reference_time);
            assert!(c.craft_time <= c.reference_time);
            prev = c;
        }
        assert!(c.drift() > 0.0);
    }

    #[test]
    fn craft_clock_runs_at_inverse_gamma() {
        let c = ClockState::default().tick(1.0, 0.6, false);
        assert!((c.craft_time - 0.8).abs() < 1.0e-12);
    }

    #[test]
    fn unpausing_resumes_from_frozen_values() {
        let c = ClockState::default()
            .tick(1.0, 0.0, false)
            .tick(5.0, 0.0, true)
            .tick(1.0, 0.0, false);
        assert_eq!(c.reference_time, 2.0);
        assert!(!c.paused);
    }

    #[test]
    fn negative_delta_does_not_rewind() {
        let c = ClockState::default().tick(1.0, 0.0, false).tick(-5.0, 0.3, false);
        assert_eq!(c.reference_time, 1.0);
        assert_eq!(c.craft_time, 1.0);
    }
}
