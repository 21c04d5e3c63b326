//! Celestial body catalog and deterministic orbital placement.
//!
//! # Model
//! - Real distances (million km) and radii (km) are squashed logarithmically into scene units
//!   so the whole system fits in view: see [`scaled_distance`] and [`scaled_radius`].
//! - Orbits are circles in the XZ plane. A body with period `P` days completes one orbit every
//!   `10 * P` seconds of reference time, starting at `initial_angle`.
//! - Moons circle their parent at a fixed scene radius, ten times faster than their own
//!   period would suggest, so they visibly move.
//!
//! The engine only needs the singularity's position; everything else here feeds presentation.

use crate::craft::Vec3;
use std::f32::consts::{PI, TAU};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
    BlackHole,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub id: &'static str,
    pub name: &'static str,
    /// Physical radius (km).
    pub radius_km: f32,
    /// Distance from the reference center (million km). Zero for the central star.
    pub distance_mkm: f32,
    /// Orbital period (Earth days). Zero means the body does not orbit.
    pub orbital_period_days: f32,
    pub temperature_k: f32,
    pub kind: BodyKind,
    pub parent_id: Option<&'static str>,
    /// Orbital angle at reference time zero (radians).
    pub initial_angle: f32,
}

/// Scene radius of a moon's orbit around its parent.
pub const MOON_ORBIT_RADIUS: f32 = 1.2;

/// Moons sweep their orbit this many times faster than their period implies.
pub const MOON_ANGLE_MULTIPLIER: f32 = 10.0;

/// Reference seconds per orbital-period day.
pub const SECONDS_PER_PERIOD_DAY: f32 = 10.0;

#[allow(clippy::too_many_arguments)]
const fn body(
    id: &'static str,
    name: &'static str,
    radius_km: f32,
    distance_mkm: f32,
    orbital_period_days: f32,
    temperature_k: f32,
    kind: BodyKind,
    initial_angle: f32,
) -> CelestialBody {
    CelestialBody {
        id,
        name,
        radius_km,
        distance_mkm,
        orbital_period_days,
        temperature_k,
        kind,
        parent_id: None,
        initial_angle,
    }
}

pub const CELESTIAL_BODIES: [CelestialBody; 11] = [
    body("sun", "Sun", 696_340.0, 0.0, 0.0, 5778.0, BodyKind::Star, 0.0),
    body("mercury", "Mercury", 2439.7, 57.9, 88.0, 440.0, BodyKind::Planet, 0.8),
    body("venus", "Venus", 6051.8, 108.2, 225.0, 737.0, BodyKind::Planet, 2.4),
    body("earth", "Earth", 6371.0, 149.6, 365.25, 288.0, BodyKind::Planet, 0.0),
    CelestialBody {
        parent_id: Some("earth"),
        ..body("moon", "Moon", 1737.4, 149.6, 27.3, 250.0, BodyKind::Moon, 1.2)
    },
    body("mars", "Mars", 3389.5, 227.9, 687.0, 210.0, BodyKind::Planet, 3.8),
    body("jupiter", "Jupiter", 69_911.0, 778.5, 4333.0, 165.0, BodyKind::Planet, 4.5),
    body("saturn", "Saturn", 58_232.0, 1432.0, 10_759.0, 134.0, BodyKind::Planet, 5.2),
    body("uranus", "Uranus", 25_362.0, 2867.0, 30_687.0, 76.0, BodyKind::Planet, 1.8),
    body("neptune", "Neptune", 24_622.0, 4515.0, 60_190.0, 72.0, BodyKind::Planet, 5.9),
    body(
        "blackhole",
        "Cygnus X-1",
        22_000_000.0,
        100_000.0,
        0.0,
        0.0,
        BodyKind::BlackHole,
        PI,
    ),
];

/// Looks a body up by id.
pub fn find(id: &str) -> Option<&'static CelestialBody> {
    CELESTIAL_BODIES.iter().find(|b| b.id == id)
}

/// The designated wormhole body (the catalog's black hole).
pub fn singularity() -> &'static CelestialBody {
    // The catalog is a compile-time constant with exactly one black hole, last.
    &CELESTIAL_BODIES[CELESTIAL_BODIES.len() - 1]
}

/// Scene distance from the reference center for a real distance in million km.
///
/// `8 + 15 * log10(d)`: a fixed offset keeps inner planets clear of the star, the log spreads
/// them out while keeping the outer system reachable.
pub fn scaled_distance(distance_mkm: f32) -> f32 {
    if distance_mkm <= 0.0 {
        return 0.0;
    }
    8.0 + distance_mkm.log10() * 15.0
}

/// Scene radius for a body. Stars and moons get fixed sizes, planets a log scale with a floor.
pub fn scaled_radius(radius_km: f32, kind: BodyKind) -> f32 {
    match kind {
        BodyKind::Star => 3.0,
        BodyKind::Moon => 0.15,
        BodyKind::Planet | BodyKind::BlackHole => (radius_km.log10() * 0.4).max(0.2),
    }
}

/// Orbital angle (radians) of `body` at reference time `t` seconds.
pub fn orbital_angle(body: &CelestialBody, t: f64) -> f32 {
    if body.orbital_period_days <= 0.0 {
        return body.initial_angle;
    }
    let rate = TAU as f64 / (body.orbital_period_days * SECONDS_PER_PERIOD_DAY) as f64;
    // Reduce in f64 so long sessions do not lose precision in the angle.
    let swept = (t * rate).rem_euclid(TAU as f64) as f32;
    body.initial_angle + swept
}

/// World position of `body` at reference time `t` seconds.
pub fn body_position(body: &CelestialBody, t: f64) -> Vec3 {
    if let (BodyKind::Moon, Some(parent)) = (body.kind, body.parent_id.and_then(find)) {
        let center = body_position(parent, t);
        let angle = orbital_angle(body, t) * MOON_ANGLE_MULTIPLIER;
        return center
            + Vec3::new(
                angle.cos() * MOON_ORBIT_RADIUS,
                0.0,
                angle.sin() * MOON_ORBIT_RADIUS,
            );
    }

    let distance = scaled_distance(body.distance_mkm);
    if distance == 0.0 {
        return Vec3::zeros();
    }
    let angle = orbital_angle(body, t);
    Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance)
}
