use crate::{
    config::FlightTuning,
    constants::{
        BASE_ACCELERATION, MAX_VELOCITY_FRACTION, REFERENCE_FRAME_RATE, REVERSE_SPEED_FACTOR,
        REVERSE_THRUST_FACTOR, SPEED_SNAP_EPSILON, VERTICAL_THRUST_FACTOR,
    },
    craft::{CraftState, Vec3},
    intent::{Intent, InputIntent},
    speed_mode::SpeedModeConfig,
};

/// Input for one integrator step.
#[derive(Clone, Copy, Debug)]
pub struct FlightStepParams<'a> {
    /// Frame delta in seconds. Negative values are treated as zero.
    pub elapsed: f32,
    pub intent: &'a InputIntent,
    pub mode: &'a SpeedModeConfig,
    pub tuning: &'a FlightTuning,
}

/// Advance the craft by one frame of player-controlled flight.
///
/// Behavior
/// - Yaw/roll intents turn the craft at `yaw_roll_rate`; there is no pitch axis.
/// - Forward thrust ramps the commanded speed toward the mode cap; reverse ramps twice as
///   fast toward `-0.5 * cap`; otherwise the commanded speed decays and snaps to exactly 0.
/// - The commanded speed is clamped to `[-0.5 * cap, cap]` every frame, so dropping to a
///   lower mode sheds excess speed immediately.
/// - Translation is along the nose; ascend/descend add an independent displacement along
///   the craft's up axis scaled by the mode cap.
/// - The reported velocity fraction is `min(|commanded|, MAX_VELOCITY_FRACTION)`.
///
/// Pure: returns the next state and never fails. Non-finite inputs are not expected; every
/// numeric result is clamped into its legal range.
pub fn step(params: FlightStepParams<'_>, current: &CraftState) -> CraftState {
    let FlightStepParams {
        elapsed,
        intent,
        mode,
        tuning,
    } = params;

    let dt = elapsed.max(0.0);
    let mut next = *current;

    // 1) Attitude.
    let turn = tuning.yaw_roll_rate * dt;
    next.orientation.y += intent.yaw_axis() * turn;
    next.orientation.z += intent.roll_axis() * turn;

    // 2) Commanded speed.
    let cap = mode.max_velocity_fraction;
    let reverse_cap = -cap * REVERSE_SPEED_FACTOR;
    let accel = mode.thrust_multiplier * BASE_ACCELERATION * dt * REFERENCE_FRAME_RATE;

    let mut target = current.target_speed_fraction;
    if intent.is_held(Intent::Forward) {
        target = (target + accel).min(cap);
    } else if intent.is_held(Intent::Backward) {
        target = (target - accel * REVERSE_THRUST_FACTOR).max(reverse_cap);
    } else {
        target *= tuning.decay_policy.factor(tuning.idle_decay, dt);
        if target.abs() < SPEED_SNAP_EPSILON {
            target = 0.0;
        }
    }
    target = target.clamp(reverse_cap, cap);

    // 3) Translation.
    let forward = next.orientation.forward();
    let mut velocity = forward * (target * tuning.world_speed);

    let vertical = intent.vertical_axis();
    if vertical != 0.0 {
        let climb_rate = cap * tuning.world_speed * VERTICAL_THRUST_FACTOR;
        velocity += next.orientation.up() * (vertical * climb_rate);
    }

    next.position = current.position + velocity * dt;
    next.velocity = velocity;
    next.target_speed_fraction = target;
    next.velocity_fraction = target.abs().min(MAX_VELOCITY_FRACTION);

    next
}

/// Zero-displacement step used while the craft is in wormhole transit.
///
/// Translation is suspended; the commanded speed is held as-is until the transit resolves.
pub fn hold(current: &CraftState) -> CraftState {
    CraftState {
        velocity: Vec3::zeros(),
        ..*current
    }
}
