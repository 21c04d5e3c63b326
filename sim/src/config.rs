/*!
Engine tunables.

Every number the simulation reads at runtime lives in [`SimConfig`]. Defaults come from
[`crate::constants`]; an embedding app overrides individual fields and hands the result to
[`crate::Simulation::with_config`], which validates it once up front.

Notes
- Distances are world units, time in seconds.
- Per-frame numbers (decay) are defined against `REFERENCE_FRAME_RATE`.
*/

use crate::constants::{
    EVENT_HORIZON_RADIUS, EXIT_DISTANCE_MAX, EXIT_DISTANCE_MIN, EXIT_HEIGHT_SPAN,
    IDLE_DECAY_PER_FRAME, MAX_FRAME_DT, REFERENCE_FRAME_RATE, WORLD_SPEED, WORMHOLE_DWELL,
    YAW_ROLL_RATE,
};
use std::time::Duration;

/// How idle (no thrust held) commanded speed decays.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DecayPolicy {
    /// Multiply by the decay factor once per step, whatever the step length.
    ///
    /// Idle deceleration depends on frame rate. This is the authored feel.
    #[default]
    PerFrame,
    /// Multiply by `factor^(dt * REFERENCE_FRAME_RATE)`.
    ///
    /// Identical to `PerFrame` at exactly 60 Hz, framerate independent otherwise.
    TimeScaled,
}

impl DecayPolicy {
    /// Decay multiplier for one step of `dt` seconds.
    #[inline]
    pub fn factor(self, per_frame: f32, dt: f32) -> f32 {
        match self {
            DecayPolicy::PerFrame => per_frame,
            DecayPolicy::TimeScaled => per_frame.powf(dt * REFERENCE_FRAME_RATE),
        }
    }
}

/// Flight-model tuning consumed by the integrator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlightTuning {
    pub world_speed: f32,
    pub yaw_roll_rate: f32,
    pub idle_decay: f32,
    pub decay_policy: DecayPolicy,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            world_speed: WORLD_SPEED,
            yaw_roll_rate: YAW_ROLL_RATE,
            idle_decay: IDLE_DECAY_PER_FRAME,
            decay_policy: DecayPolicy::default(),
        }
    }
}

/// Wormhole trigger and exit parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WormholeTuning {
    pub event_horizon_radius: f32,
    pub dwell: Duration,
    pub exit_distance_min: f32,
    pub exit_distance_max: f32,
    pub exit_height_span: f32,
}

impl Default for WormholeTuning {
    fn default() -> Self {
        Self {
            event_horizon_radius: EVENT_HORIZON_RADIUS,
            dwell: WORMHOLE_DWELL,
            exit_distance_min: EXIT_DISTANCE_MIN,
            exit_distance_max: EXIT_DISTANCE_MAX,
            exit_height_span: EXIT_HEIGHT_SPAN,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub flight: FlightTuning,
    pub wormhole: WormholeTuning,
    /// Frame deltas above this are clamped (seconds).
    pub max_frame_dt: f32,
    /// Seed for exit-position sampling. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            flight: FlightTuning::default(),
            wormhole: WormholeTuning::default(),
            max_frame_dt: MAX_FRAME_DT,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_decay_policy(mut self, policy: DecayPolicy) -> Self {
        self.flight.decay_policy = policy;
        self
    }

    /// Rejects tunables the engine cannot run with.
    ///
    /// Checks:
    /// - speeds, rates and radii are finite and positive
    /// - idle decay is in `(0, 1)`
    /// - dwell is non-zero
    /// - exit annulus is non-empty (`min < max`) and non-negative
    pub fn validate(&self) -> Result<(), &'static str> {
        let positive = |x: f32| x.is_finite() && x > 0.0;

        if !positive(self.flight.world_speed) {
            return Err("world_speed must be finite and positive");
        }
        if !positive(self.flight.yaw_roll_rate) {
            return Err("yaw_roll_rate must be finite and positive");
        }
        if !(self.flight.idle_decay > 0.0 && self.flight.idle_decay < 1.0) {
            return Err("idle_decay must be in (0, 1)");
        }
        if !positive(self.wormhole.event_horizon_radius) {
            return Err("event_horizon_radius must be finite and positive");
        }
        if self.wormhole.dwell.is_zero() {
            return Err("wormhole dwell must be non-zero");
        }
        let (lo, hi) = (
            self.wormhole.exit_distance_min,
            self.wormhole.exit_distance_max,
        );
        if !(lo.is_finite() && hi.is_finite() && lo >= 0.0 && lo < hi) {
            return Err("exit annulus must satisfy 0 <= min < max");
        }
        if !(self.wormhole.exit_height_span.is_finite() && self.wormhole.exit_height_span >= 0.0)
        {
            return Err("exit_height_span must be finite and non-negative");
        }
        if !positive(self.max_frame_dt) {
            return Err("max_frame_dt must be finite and positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_annulus_is_rejected() {
        let mut cfg = SimConfig::default();
        cfg.wormhole.exit_distance_min = 50.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn decay_outside_unit_interval_is_rejected() {
        let mut cfg = SimConfig::default();
        cfg.flight.idle_decay = 1.0;
        assert!(cfg.validate().is_err());
        cfg.flight.idle_decay = f32::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_dwell_is_rejected() {
        let mut cfg = SimConfig::default();
        cfg.wormhole.dwell = Duration::ZERO;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn time_scaled_decay_matches_per_frame_at_reference_rate() {
        let dt = 1.0 / REFERENCE_FRAME_RATE;
        let per_frame = DecayPolicy::PerFrame.factor(0.995, dt);
        let scaled = DecayPolicy::TimeScaled.factor(0.995, dt);
        assert!((per_frame - scaled).abs() < 1.0e-6);
    }

    #[test]
    fn time_scaled_decay_compounds_for_long_frames() {
        let f = DecayPolicy::TimeScaled.factor(0.995, 2.0 / REFERENCE_FRAME_RATE);
        assert!((f - 0.995 * 0.995).abs() < 1.0e-6);
        assert_eq!(DecayPolicy::PerFrame.factor(0.995, 2.0 / REFERENCE_FRAME_RATE), 0.995);
    }
}
