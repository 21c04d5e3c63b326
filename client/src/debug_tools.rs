//! Native dev builds only: perf overlay plus an engine state dump on F3.

use crate::flight::FlightSim;
use bevy::diagnostic::{EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use iyes_perf_ui::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        PerfUiPlugin,
    ));

    app.add_systems(Startup, (spawn_perf_ui, log_config));
    app.add_systems(Update, dump_state);
}

fn spawn_perf_ui(mut commands: Commands) {
    commands.spawn(PerfUiDefaultEntries::default());
}

fn log_config(flight: Res<FlightSim>) {
    debug!("Simulation config: {:?}", flight.0.config());
}

fn dump_state(keys: Res<ButtonInput<KeyCode>>, flight: Res<FlightSim>) {
    if keys.just_pressed(KeyCode::F3) {
        info!("{:#?}", flight.0.state());
        info!("Singularity at {:?}", flight.0.singularity_position());
    }
}
