use crate::{
    FlightSet,
    flight::{Snapshot, to_render, to_render_rotation},
};
use bevy::{camera::Exposure, prelude::*};
use sim::{CameraMode, constants::BASE_FOV_DEG, field_of_view};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera);
    app.add_systems(
        Update,
        (follow_craft, widen_fov).in_set(FlightSet::Present),
    );
}

/// Chase offset in the craft's local frame: above and behind.
const CAMERA_OFFSET_LOCAL: Vec3 = Vec3::new(0.0, 2.0, 8.0);
const FOLLOW_LERP: f32 = 0.1;
const FOV_EASE: f32 = 0.05;

fn add_camera(mut commands: Commands, snapshot: Res<Snapshot>) {
    let craft = to_render(&snapshot.position);
    commands.spawn((
        Exposure::BLENDER,
        bevy::core_pipeline::tonemapping::Tonemapping::AcesFitted,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: BASE_FOV_DEG.to_radians(),
            far: 2000.0,
            ..default()
        }),
        Transform::from_translation(craft + CAMERA_OFFSET_LOCAL).looking_at(craft, Vec3::Y),
    ));
}

/// Eases the camera toward the chase point and looks at the craft. Free mode leaves it alone.
fn follow_craft(snapshot: Res<Snapshot>, mut camera: Single<&mut Transform, With<Camera3d>>) {
    if snapshot.camera_mode != CameraMode::Follow {
        return;
    }

    let craft = to_render(&snapshot.position);
    let attitude = to_render_rotation(&snapshot.orientation.to_rotation());
    let target = craft + attitude * CAMERA_OFFSET_LOCAL;

    let next = camera.translation.lerp(target, FOLLOW_LERP);
    camera.translation = next;
    camera.look_at(craft, attitude * Vec3::Y);
}

/// Widens the field of view with speed.
fn widen_fov(snapshot: Res<Snapshot>, mut projection: Single<&mut Projection, With<Camera3d>>) {
    let target = field_of_view(BASE_FOV_DEG, snapshot.velocity_fraction).to_radians();
    if let Projection::Perspective(perspective) = &mut **projection {
        perspective.fov += (target - perspective.fov) * FOV_EASE;
    }
}
