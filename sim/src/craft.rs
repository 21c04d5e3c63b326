use crate::constants::CRAFT_SPAWN;
use nalgebra as na;

pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;

/// Craft attitude as Euler angles (radians), applied X then Y then Z.
///
/// There is no pitch control, so `x` stays at whatever it was spawned with (zero).
/// `y` is yaw about the craft's up axis, `z` is roll about its nose.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Orientation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Orientation {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotation matrix order `Rx * Ry * Rz`.
    pub fn to_rotation(self) -> Quat {
        let rx = Quat::from_axis_angle(&Vec3::x_axis(), self.x);
        let ry = Quat::from_axis_angle(&Vec3::y_axis(), self.y);
        let rz = Quat::from_axis_angle(&Vec3::z_axis(), self.z);
        rx * ry * rz
    }

    /// Local nose direction (`-Z`) in world space.
    #[inline]
    pub fn forward(self) -> Vec3 {
        self.to_rotation() * -Vec3::z()
    }

    /// Local up direction (`+Y`) in world space.
    #[inline]
    pub fn up(self) -> Vec3 {
        self.to_rotation() * Vec3::y()
    }
}

/// Kinematic state of the craft. Written only by the integrator (and wormhole resolution).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CraftState {
    pub position: Vec3,
    /// World velocity this frame (world units per second).
    pub velocity: Vec3,
    pub orientation: Orientation,
    /// Signed commanded speed as a fraction of `c`. Negative while reverse cruising.
    pub target_speed_fraction: f32,
    /// Reported speed `min(|target|, MAX_VELOCITY_FRACTION)`, in `[0, 0.9999]`.
    ///
    /// This, not the signed target, is what the relativity math and the clock consume.
    pub velocity_fraction: f32,
}

impl Default for CraftState {
    fn default() -> Self {
        Self::at(Vec3::from(CRAFT_SPAWN))
    }
}

impl CraftState {
    /// A craft at rest at `position`, facing `-Z`.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::zeros(),
            orientation: Orientation::default(),
            target_speed_fraction: 0.0,
            velocity_fraction: 0.0,
        }
    }

    /// Drops all speed while keeping position and attitude.
    pub fn halt(&mut self) {
        self.velocity = Vec3::zeros();
        self.target_speed_fraction = 0.0;
        self.velocity_fraction = 0.0;
    }
}
