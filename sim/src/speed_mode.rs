//! Discrete thrust/speed modes.
//!
//! Six ordinal levels, 1..=6. Both `max_velocity_fraction` and `thrust_multiplier` increase
//! strictly with the ordinal; the table below is the only place that encodes it.
//!
//! Out-of-range ordinals are clamped into range, never rejected.

/// A selectable speed mode. Discriminants are the player-facing ordinals.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpeedMode {
    #[default]
    Subsonic = 1,
    HighVelocity = 2,
    OrbitalEscape = 3,
    Relativistic = 4,
    UltraRelativistic = 5,
    LightSpeed = 6,
}

/// Immutable catalog entry for a [`SpeedMode`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpeedModeConfig {
    pub name: &'static str,
    /// Forward cruise cap as a fraction of `c`, in `(0, 1)`.
    pub max_velocity_fraction: f32,
    /// Scales the base per-frame acceleration.
    pub thrust_multiplier: f32,
    /// Shape parameter carried for presentation (gauges); the integrator accelerates linearly.
    pub acceleration_curve: f32,
}

const SPEED_MODES: [SpeedModeConfig; 6] = [
    SpeedModeConfig {
        name: "Subsonic",
        max_velocity_fraction: 0.001,
        thrust_multiplier: 1.0,
        acceleration_curve: 1.0,
    },
    SpeedModeConfig {
        name: "High Velocity",
        max_velocity_fraction: 0.01,
        thrust_multiplier: 2.0,
        acceleration_curve: 1.2,
    },
    SpeedModeConfig {
        name: "Orbital Escape",
        max_velocity_fraction: 0.05,
        thrust_multiplier: 5.0,
        acceleration_curve: 1.5,
    },
    SpeedModeConfig {
        name: "Relativistic",
        max_velocity_fraction: 0.2,
        thrust_multiplier: 15.0,
        acceleration_curve: 2.0,
    },
    SpeedModeConfig {
        name: "Ultra-Relativistic",
        max_velocity_fraction: 0.5,
        thrust_multiplier: 30.0,
        acceleration_curve: 2.5,
    },
    SpeedModeConfig {
        name: "Light Speed",
        max_velocity_fraction: 0.9999,
        thrust_multiplier: 50.0,
        acceleration_curve: 3.0,
    },
];

impl SpeedMode {
    pub const MIN_ORDINAL: u8 = 1;
    pub const MAX_ORDINAL: u8 = 6;

    pub const ALL: [SpeedMode; 6] = [
        SpeedMode::Subsonic,
        SpeedMode::HighVelocity,
        SpeedMode::OrbitalEscape,
        SpeedMode::Relativistic,
        SpeedMode::UltraRelativistic,
        SpeedMode::LightSpeed,
    ];

    /// Maps a player-facing ordinal to a mode, clamping into `1..=6`.
    pub fn from_ordinal(ordinal: u8) -> SpeedMode {
        let clamped = ordinal.clamp(Self::MIN_ORDINAL, Self::MAX_ORDINAL);
        if clamped != ordinal {
            log::warn!("Speed mode ordinal {ordinal} out of range, clamped to {clamped}");
        }
        Self::ALL[(clamped - Self::MIN_ORDINAL) as usize]
    }

    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn config(self) -> &'static SpeedModeConfig {
        &SPEED_MODES[(self.ordinal() - Self::MIN_ORDINAL) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_round_trip_through_the_table() {
        for (i, mode) in SpeedMode::ALL.iter().enumerate() {
            assert_eq!(mode.ordinal() as usize, i + 1);
            assert_eq!(SpeedMode::from_ordinal(mode.ordinal()), *mode);
        }
    }

    #[test]
    fn caps_and_multipliers_increase_strictly() {
        for pair in SpeedMode::ALL.windows(2) {
            let (a, b) = (pair[0].config(), pair[1].config());
            assert!(b.max_velocity_fraction > a.max_velocity_fraction);
            assert!(b.thrust_multiplier > a.thrust_multiplier);
        }
    }

    #[test]
    fn every_cap_is_a_proper_fraction() {
        for mode in SpeedMode::ALL {
            let cfg = mode.config();
            assert!(cfg.max_velocity_fraction > 0.0 && cfg.max_velocity_fraction < 1.0);
            assert!(cfg.thrust_multiplier > 0.0);
            assert!(cfg.acceleration_curve > 0.0);
        }
    }

    #[test]
    fn out_of_range_ordinals_clamp() {
        assert_eq!(SpeedMode::from_ordinal(0), SpeedMode::Subsonic);
        assert_eq!(SpeedMode::from_ordinal(7), SpeedMode::LightSpeed);
        assert_eq!(SpeedMode::from_ordinal(u8::MAX), SpeedMode::LightSpeed);
    }

    #[test]
    fn default_is_subsonic() {
        assert_eq!(SpeedMode::default(), SpeedMode::Subsonic);
        assert_eq!(SpeedMode::default().config().name, "Subsonic");
    }
}
