use std::time::Duration;

/// World units travelled per second at a velocity fraction of 1.0.
///
/// The scene is heavily scaled down, so "light speed" is a game-feel number rather than
/// anything physical. Displacement per frame is `fraction * WORLD_SPEED * dt`.
pub const WORLD_SPEED: f32 = 1000.0;

/// Yaw and roll rate while the respective intent is held (radians per second).
pub const YAW_ROLL_RATE: f32 = 1.5;

/// Frame rate the thrust tuning was authored against.
///
/// Acceleration is expressed "per 60 Hz frame" and scaled by `dt * REFERENCE_FRAME_RATE`.
pub const REFERENCE_FRAME_RATE: f32 = 60.0;

/// Velocity-fraction gained per reference frame at a thrust multiplier of 1.0.
pub const BASE_ACCELERATION: f32 = 0.001;

/// Reverse thrust accelerates this many times faster than forward thrust.
pub const REVERSE_THRUST_FACTOR: f32 = 2.0;

/// Reverse cruise is capped at this share of the mode's forward maximum.
pub const REVERSE_SPEED_FACTOR: f32 = 0.5;

/// Vertical thrust rate as a share of the mode's maximum cruise speed.
pub const VERTICAL_THRUST_FACTOR: f32 = 0.3;

/// Multiplicative decay applied to the commanded speed when no thrust is held.
pub const IDLE_DECAY_PER_FRAME: f32 = 0.995;

/// Below this magnitude an idle commanded speed snaps to exactly zero.
pub const SPEED_SNAP_EPSILON: f32 = 1.0e-4;

/// Hard ceiling for the reported velocity fraction.
///
/// Everything downstream (Lorentz factor, clock) relies on `v < 1`.
pub const MAX_VELOCITY_FRACTION: f32 = 0.9999;

/// Radius (world units) around the singularity that triggers a wormhole transit.
pub const EVENT_HORIZON_RADIUS: f32 = 3.0;

/// How long a wormhole transit lasts before the craft is placed at the exit.
pub const WORMHOLE_DWELL: Duration = Duration::from_millis(1500);

/// Exit positions are sampled at a planar distance in `[EXIT_DISTANCE_MIN, EXIT_DISTANCE_MAX)`
/// from the reference center. 20..40 lands around the Earth/Mars orbits.
pub const EXIT_DISTANCE_MIN: f32 = 20.0;
pub const EXIT_DISTANCE_MAX: f32 = 40.0;

/// Total vertical span of the exit offset, centered on the orbital plane (+-5).
pub const EXIT_HEIGHT_SPAN: f32 = 10.0;

/// Cosmetic spin of the craft about its local Z axis while in transit (radians per second).
pub const TRANSIT_SPIN_RATE: f32 = 10.0;

/// Where the craft starts, and where `reset()` puts it back.
pub const CRAFT_SPAWN: [f32; 3] = [0.0, 5.0, 50.0];

/// Max frame delta (seconds) fed to the simulation.
///
/// A stalled frame (window drag, debugger) would otherwise produce one huge step.
pub const MAX_FRAME_DT: f32 = 0.25;

/// Camera field of view at rest (degrees).
pub const BASE_FOV_DEG: f32 = 75.0;

/// Extra field of view at the maximum velocity fraction (degrees).
pub const MAX_FOV_BOOST_DEG: f32 = 30.0;
