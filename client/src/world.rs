use crate::{
    FlightSet,
    flight::{Snapshot, to_render},
};
use bevy::prelude::*;
use sim::{BodyKind, CELESTIAL_BODIES, CelestialBody, body_position, scaled_radius};
use std::f32::consts::FRAC_PI_2;

/// Rendered stand-in for a catalog entry.
#[derive(Component)]
pub struct Body(pub &'static CelestialBody);

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 80.0,
        ..default()
    });
    app.add_systems(Startup, spawn_bodies);
    app.add_systems(
        Update,
        (place_bodies, draw_orbits).in_set(FlightSet::Present),
    );
}

fn body_color(body: &CelestialBody) -> Color {
    match body.id {
        "sun" => Color::srgb_u8(0xfd, 0xb8, 0x13),
        "mercury" => Color::srgb_u8(0x8c, 0x78, 0x53),
        "venus" => Color::srgb_u8(0xff, 0xc6, 0x49),
        "earth" => Color::srgb_u8(0x6b, 0x93, 0xd6),
        "moon" => Color::srgb_u8(0xc0, 0xc0, 0xc0),
        "mars" => Color::srgb_u8(0xcd, 0x5c, 0x5c),
        "jupiter" => Color::srgb_u8(0xd8, 0xca, 0x9d),
        "saturn" => Color::srgb_u8(0xfa, 0xd5, 0xa5),
        "uranus" => Color::srgb_u8(0x4f, 0xd0, 0xe7),
        "neptune" => Color::srgb_u8(0x4b, 0x70, 0xdd),
        _ => Color::BLACK,
    }
}

fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for body in CELESTIAL_BODIES.iter() {
        let radius = scaled_radius(body.radius_km, body.kind);
        let position = to_render(&body_position(body, 0.0));
        let color = body_color(body);

        let material = match body.kind {
            BodyKind::Star => StandardMaterial {
                base_color: color,
                emissive: LinearRgba::from(color) * 4.0,
                unlit: true,
                ..default()
            },
            BodyKind::BlackHole => StandardMaterial {
                base_color: Color::BLACK,
                unlit: true,
                ..default()
            },
            BodyKind::Planet | BodyKind::Moon => StandardMaterial {
                base_color: color,
                perceptual_roughness: 0.8,
                metallic: 0.1,
                ..default()
            },
        };

        let mut entity = commands.spawn((
            Name::new(body.name),
            Body(body),
            Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(32, 18))),
            MeshMaterial3d(materials.add(material)),
            Transform::from_translation(position),
        ));

        match body.kind {
            BodyKind::Star => {
                entity.with_child(PointLight {
                    color,
                    intensity: 5.0e8,
                    range: 500.0,
                    shadows_enabled: false,
                    ..default()
                });
            }
            BodyKind::BlackHole => {
                // Accretion glow, slightly larger than the horizon sphere.
                entity.with_child((
                    Mesh3d(meshes.add(Sphere::new(radius * 1.5).mesh().uv(32, 18))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: Color::srgba(0.55, 0.2, 1.0, 0.25),
                        emissive: LinearRgba::rgb(0.6, 0.2, 1.2),
                        alpha_mode: AlphaMode::Blend,
                        unlit: true,
                        ..default()
                    })),
                ));
            }
            BodyKind::Planet | BodyKind::Moon => {}
        }

        debug!("Spawned {} (r = {radius:.2})", body.name);
    }
}

/// Moves every body to its orbital position at the current reference time.
fn place_bodies(snapshot: Res<Snapshot>, mut bodies: Query<(&Body, &mut Transform)>) {
    for (body, mut transform) in &mut bodies {
        transform.translation = to_render(&body_position(body.0, snapshot.reference_time));
    }
}

fn draw_orbits(mut gizmos: Gizmos) {
    let flat = Quat::from_rotation_x(FRAC_PI_2);
    for body in CELESTIAL_BODIES
        .iter()
        .filter(|b| b.kind == BodyKind::Planet)
    {
        let radius = to_render(&body_position(body, 0.0)).length();
        gizmos.circle(
            Isometry3d::new(Vec3::ZERO, flat),
            radius,
            Color::srgba(1.0, 1.0, 1.0, 0.08),
        );
    }
}
