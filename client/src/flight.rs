use crate::{FlightSet, input::LiveIntent};
use bevy::prelude::*;
use sim::{SimConfig, Simulation, SimulationSnapshot, WormholeTransition};

/// The engine, owned by the app. Stepped here, commanded from `input`.
#[derive(Resource)]
pub struct FlightSim(pub Simulation);

/// Snapshot taken right after this frame's step, for presentation systems.
#[derive(Resource, Deref)]
pub struct Snapshot(pub SimulationSnapshot);

pub(super) fn plugin(app: &mut App) {
    let simulation = Simulation::with_config(SimConfig::default()).unwrap_or_else(|err| {
        error!("Invalid simulation config ({err}), falling back to defaults");
        Simulation::new()
    });
    app.insert_resource(Snapshot(simulation.snapshot()));
    app.insert_resource(FlightSim(simulation));

    app.add_systems(Update, step_simulation.in_set(FlightSet::Step));
}

/// One engine step per rendered frame.
fn step_simulation(
    time: Res<Time>,
    live: Res<LiveIntent>,
    mut flight: ResMut<FlightSim>,
    mut snapshot: ResMut<Snapshot>,
) {
    let outcome = flight.0.step(time.delta_secs(), &live.0);

    match outcome.wormhole {
        Some(WormholeTransition::Triggered { exit }) => {
            info!(
                "Entered the event horizon, exit at ({:.1}, {:.1}, {:.1})",
                exit.x, exit.y, exit.z
            );
        }
        Some(WormholeTransition::Resolved { exit }) => {
            info!(
                "Wormhole transit complete at ({:.1}, {:.1}, {:.1})",
                exit.x, exit.y, exit.z
            );
        }
        None => {}
    }

    snapshot.0 = flight.0.snapshot();
}

/// Engine vector to render vector.
#[inline]
pub fn to_render(v: &nalgebra::Vector3<f32>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

/// Engine rotation to render rotation.
#[inline]
pub fn to_render_rotation(q: &nalgebra::UnitQuaternion<f32>) -> Quat {
    let c = q.quaternion().coords;
    Quat::from_xyzw(c.x, c.y, c.z, c.w)
}
