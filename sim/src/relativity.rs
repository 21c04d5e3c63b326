//! Special-relativity helpers.
//!
//! All functions take the craft speed as a fraction of light speed (`v = |u| / c`).
//! Callers clamp `v` to `[0, MAX_VELOCITY_FRACTION]` before getting here, so the only
//! non-finite output is the documented `+inf` Lorentz factor at `v >= 1`.

use crate::constants::{MAX_FOV_BOOST_DEG, MAX_VELOCITY_FRACTION};

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Lorentz factor `gamma = 1 / sqrt(1 - v^2)`.
///
/// Returns `f64::INFINITY` for `v >= 1`. Never panics.
#[inline]
pub fn lorentz_factor(v: f64) -> f64 {
    if v >= 1.0 {
        return f64::INFINITY;
    }
    1.0 / (1.0 - v * v).sqrt()
}

/// Proper time elapsed on the craft while `reference_delta` passes on the reference clock.
///
/// `reference_delta * sqrt(1 - v^2)`, i.e. `reference_delta / gamma`.
#[inline]
pub fn dilated_delta(reference_delta: f64, v: f64) -> f64 {
    let v = v.clamp(0.0, 1.0);
    reference_delta * (1.0 - v * v).sqrt()
}

/// Relativistic mass `m = m0 * gamma`.
#[inline]
pub fn relativistic_mass(rest_mass: f64, v: f64) -> f64 {
    rest_mass * lorentz_factor(v)
}

/// Length contraction along the direction of travel, `L = L0 / gamma`.
#[inline]
pub fn length_contraction(proper_length: f64, v: f64) -> f64 {
    proper_length / lorentz_factor(v)
}

/// Camera field of view (degrees) for a given velocity fraction.
///
/// Widens linearly from `base_deg` at rest to `base_deg + MAX_FOV_BOOST_DEG` at the
/// velocity ceiling.
#[inline]
pub fn field_of_view(base_deg: f32, v: f32) -> f32 {
    let t = (v / MAX_VELOCITY_FRACTION).clamp(0.0, 1.0);
    base_deg + t * MAX_FOV_BOOST_DEG
}

/// Formats seconds as `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Formats a velocity fraction as a percentage of `c` with four decimals.
pub fn format_velocity(v: f64) -> String {
    format!("{:.4}% c", v * 100.0)
}
