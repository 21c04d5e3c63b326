pub mod bitmask_flags;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod constants;
pub mod craft;
pub mod integrator;
pub mod intent;
pub mod relativity;
pub mod simulation;
pub mod speed_mode;
pub mod wormhole;

pub use catalog::{BodyKind, CELESTIAL_BODIES, CelestialBody, body_position, scaled_radius};
pub use clock::ClockState;
pub use config::{DecayPolicy, SimConfig};
pub use craft::{CraftState, Orientation, Quat, Vec3};
pub use intent::{InputIntent, Intent};
pub use relativity::{
    dilated_delta, field_of_view, format_time, format_velocity, lorentz_factor,
};
pub use simulation::{
    CameraMode, Simulation, SimulationSnapshot, SimulationState, StepOutcome, WormholeTransition,
};
pub use speed_mode::{SpeedMode, SpeedModeConfig};
pub use wormhole::{DwellTicket, WormholeState};
