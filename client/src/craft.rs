use crate::{
    FlightSet,
    flight::{Snapshot, to_render, to_render_rotation},
};
use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

#[derive(Component)]
pub struct Craft;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_craft);
    app.add_systems(Update, sync_craft.in_set(FlightSet::Present));
}

fn spawn_craft(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    snapshot: Res<Snapshot>,
) {
    let hull = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x64, 0x74, 0x8b),
        metallic: 0.8,
        perceptual_roughness: 0.2,
        ..default()
    });
    let wing = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x47, 0x55, 0x69),
        metallic: 0.7,
        perceptual_roughness: 0.3,
        ..default()
    });
    let glow = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x06, 0xb6, 0xd4),
        emissive: LinearRgba::rgb(0.1, 2.0, 2.5),
        unlit: true,
        ..default()
    });

    let wing_mesh = meshes.add(Cuboid::new(0.6, 0.05, 0.4));

    commands
        .spawn((
            Craft,
            Transform::from_translation(to_render(&snapshot.position)),
            Visibility::default(),
        ))
        .with_children(|parent| {
            // Cone tip along -Z, the engine's forward.
            parent.spawn((
                Mesh3d(meshes.add(Cone {
                    radius: 0.3,
                    height: 1.2,
                })),
                MeshMaterial3d(hull),
                Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            ));
            parent.spawn((
                Mesh3d(wing_mesh.clone()),
                MeshMaterial3d(wing.clone()),
                Transform::from_xyz(0.5, -0.2, 0.2)
                    .with_rotation(Quat::from_rotation_z(FRAC_PI_6)),
            ));
            parent.spawn((
                Mesh3d(wing_mesh),
                MeshMaterial3d(wing),
                Transform::from_xyz(-0.5, -0.2, 0.2)
                    .with_rotation(Quat::from_rotation_z(-FRAC_PI_6)),
            ));
            parent.spawn((
                Mesh3d(meshes.add(Sphere::new(0.15))),
                MeshMaterial3d(glow),
                Transform::from_xyz(0.0, 0.0, 0.6),
            ));
            parent.spawn((
                PointLight {
                    color: Color::srgb_u8(0x06, 0xb6, 0xd4),
                    intensity: 20_000.0,
                    range: 5.0,
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 0.7),
            ));
        });
}

/// Places the craft at the engine pose. During transit it spins in place about its nose.
fn sync_craft(snapshot: Res<Snapshot>, mut craft: Single<&mut Transform, With<Craft>>) {
    let attitude = to_render_rotation(&snapshot.orientation.to_rotation());
    craft.translation = to_render(&snapshot.position);
    craft.rotation = attitude * Quat::from_rotation_z(snapshot.transit_spin);
}
