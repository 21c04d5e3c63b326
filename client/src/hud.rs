use crate::{FlightSet, flight::Snapshot};
use bevy::prelude::*;
use sim::{
    SimulationSnapshot, body_position, format_time, format_velocity,
    relativity::{SPEED_OF_LIGHT, length_contraction, relativistic_mass},
};

#[derive(Component)]
struct HudText;

#[derive(Component)]
struct TransitBanner;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_hud);
    app.add_systems(
        Update,
        (update_readout, update_banner).in_set(FlightSet::Present),
    );
}

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        HudText,
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb_u8(0x22, 0xd3, 0xee)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));

    commands.spawn((
        TransitBanner,
        Text::new("WORMHOLE TRANSIT"),
        TextFont {
            font_size: 36.0,
            ..default()
        },
        TextColor(Color::srgb_u8(0xc0, 0x84, 0xfc)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(45.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        TextLayout::new_with_justify(Justify::Center),
        Visibility::Hidden,
    ));
}

fn readout(snap: &SimulationSnapshot) -> String {
    let v = snap.velocity_fraction as f64;
    let mode = snap.selected_mode.config();

    let mut out = format!(
        "Mode {}: {}\n\
         Velocity: {} ({:.0} km/s)\n\
         Lorentz factor: {:.4}\n\
         Mass ratio: {:.4}\n\
         Length ratio: {:.4}\n\
         Earth time: {}\n\
         Ship time:  {}\n\
         Camera: {:?}\n",
        snap.selected_mode.ordinal(),
        mode.name,
        format_velocity(v),
        v * SPEED_OF_LIGHT / 1000.0,
        snap.lorentz_factor,
        relativistic_mass(1.0, v),
        length_contraction(1.0, v),
        format_time(snap.reference_time),
        format_time(snap.craft_time),
        snap.camera_mode,
    );
    if snap.paused {
        out.push_str("PAUSED\n");
    }

    if let Some(body) = snap.selected_body {
        let distance = (body_position(body, snap.reference_time) - snap.position).norm();
        out.push_str(&format!("\n{} ({:?})\n", body.name, body.kind));
        out.push_str(&format!("Radius: {} km\n", body.radius_km));
        if body.distance_mkm > 0.0 {
            out.push_str(&format!("Distance: {} million km\n", body.distance_mkm));
        }
        if body.orbital_period_days > 0.0 {
            out.push_str(&format!("Period: {} days\n", body.orbital_period_days));
        }
        out.push_str(&format!("Temperature: {} K\n", body.temperature_k));
        out.push_str(&format!("Range: {distance:.1}\n"));
    }

    out
}

fn update_readout(snapshot: Res<Snapshot>, mut text: Single<&mut Text, With<HudText>>) {
    text.0 = readout(&snapshot);
}

fn update_banner(
    snapshot: Res<Snapshot>,
    mut banner: Single<&mut Visibility, With<TransitBanner>>,
) {
    **banner = if snapshot.wormhole_active {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim::{InputIntent, Intent, Simulation};

    #[test]
    fn readout_shows_mode_and_clocks() {
        let mut sim = Simulation::new();
        sim.set_speed_mode(4);
        sim.step(0.25, &InputIntent::default());
        let text = readout(&sim.snapshot());
        assert!(text.contains("Mode 4: Relativistic"));
        assert!(text.contains("Velocity: 0.0000% c (0 km/s)"));
        assert!(text.contains("Earth time: 00:00:00"));
        assert!(!text.contains("PAUSED"));
    }

    #[test]
    fn readout_converts_the_fraction_to_km_per_second() {
        let mut sim = Simulation::new();
        sim.set_speed_mode(4);
        let thrust = InputIntent::with_held(&[Intent::Forward]);
        for _ in 0..200 {
            sim.step(1.0 / 60.0, &thrust);
        }
        // Capped at 0.2 c.
        assert!(readout(&sim.snapshot()).contains("Velocity: 20.0000% c (59958 km/s)"));
    }

    #[test]
    fn readout_includes_selected_body() {
        let mut sim = Simulation::new();
        sim.select_body(Some("mars"));
        sim.toggle_pause();
        let text = readout(&sim.snapshot());
        assert!(text.contains("Mars (Planet)"));
        assert!(text.contains("Period: 687 days"));
        assert!(text.contains("PAUSED"));
    }
}
