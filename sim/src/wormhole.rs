//! Proximity-triggered wormhole transit.
//!
//! # States
//! - `Idle`: proximity checks run every frame.
//! - `Transiting`: entered when the craft gets within the event horizon. Holds the exit
//!   position sampled at trigger time. Proximity checks are suppressed, so a craft that stays
//!   inside the horizon fires exactly once.
//!
//! # Dwell
//! The dwell is a scheduled completion rather than a fire-and-forget timer. Each trigger
//! issues a [`DwellTicket`] stamped with the current generation; [`Wormhole::cancel`] and
//! [`Wormhole::complete`] bump the generation. A completion presented with a ticket from an
//! older generation is ignored, so a dwell that outlives a reset can never teleport the
//! freshly reset craft.

use crate::{
    config::WormholeTuning,
    constants::TRANSIT_SPIN_RATE,
    craft::{CraftState, Vec3},
};
use rand::Rng;
use std::f32::consts::TAU;

/// Handle to one scheduled dwell completion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DwellTicket {
    generation: u64,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum WormholeState {
    #[default]
    Idle,
    Transiting {
        exit_position: Vec3,
        /// Seconds since the trigger.
        elapsed_since_trigger: f32,
        /// Cosmetic spin angle about the craft's local Z (radians).
        spin: f32,
        ticket: DwellTicket,
    },
}

impl WormholeState {
    #[inline]
    pub fn is_transiting(&self) -> bool {
        matches!(self, WormholeState::Transiting { .. })
    }

    pub fn exit_position(&self) -> Option<Vec3> {
        match self {
            WormholeState::Transiting { exit_position, .. } => Some(*exit_position),
            WormholeState::Idle => None,
        }
    }

    pub fn ticket(&self) -> Option<DwellTicket> {
        match self {
            WormholeState::Transiting { ticket, .. } => Some(*ticket),
            WormholeState::Idle => None,
        }
    }

    pub fn spin(&self) -> f32 {
        match self {
            WormholeState::Transiting { spin, .. } => *spin,
            WormholeState::Idle => 0.0,
        }
    }
}

/// Wormhole state plus the dwell generation counter.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Wormhole {
    state: WormholeState,
    generation: u64,
}

impl Wormhole {
    #[inline]
    pub fn state(&self) -> &WormholeState {
        &self.state
    }

    /// `Idle -> Transiting` if the craft is strictly inside the event horizon.
    ///
    /// Returns the sampled exit position when a transit starts. A no-op while already
    /// transiting.
    pub fn try_trigger<R: Rng>(
        &mut self,
        craft_position: Vec3,
        singularity_position: Vec3,
        tuning: &WormholeTuning,
        rng: &mut R,
    ) -> Option<Vec3> {
        if self.state.is_transiting() {
            return None;
        }
        if !within_event_horizon(
            craft_position,
            singularity_position,
            tuning.event_horizon_radius,
        ) {
            return None;
        }

        let exit_position = sample_exit(rng, tuning);
        self.state = WormholeState::Transiting {
            exit_position,
            elapsed_since_trigger: 0.0,
            spin: 0.0,
            ticket: DwellTicket {
                generation: self.generation,
            },
        };
        log::info!(
            "Wormhole triggered at distance {:.3}, exit scheduled at {:?}",
            (craft_position - singularity_position).norm(),
            exit_position
        );
        Some(exit_position)
    }

    /// Advance the dwell timer by `dt` seconds.
    ///
    /// Returns the ticket once the dwell has fully elapsed; the caller completes it with
    /// [`Wormhole::complete`].
    pub fn advance(&mut self, dt: f32, tuning: &WormholeTuning) -> Option<DwellTicket> {
        let WormholeState::Transiting {
            elapsed_since_trigger,
            spin,
            ticket,
            ..
        } = &mut self.state
        else {
            return None;
        };

        let dt = dt.max(0.0);
        *elapsed_since_trigger += dt;
        *spin = (*spin + TRANSIT_SPIN_RATE * dt).rem_euclid(TAU);

        (*elapsed_since_trigger >= tuning.dwell.as_secs_f32()).then_some(*ticket)
    }

    /// `Transiting -> Idle`: places the craft at the exit and zeroes its speed.
    ///
    /// Returns the exit position, or `None` (and changes nothing) if the ticket is stale or no
    /// transit is in flight.
    pub fn complete(&mut self, ticket: DwellTicket, craft: &mut CraftState) -> Option<Vec3> {
        if ticket.generation != self.generation {
            log::debug!(
                "Ignoring stale dwell completion (ticket generation {}, current {})",
                ticket.generation,
                self.generation
            );
            return None;
        }
        let WormholeState::Transiting { exit_position, .. } = self.state else {
            log::debug!("Ignoring dwell completion with no transit in flight");
            return None;
        };

        craft.position = exit_position;
        craft.halt();
        self.state = WormholeState::Idle;
        // A used ticket must not resolve the next transit.
        self.generation = self.generation.wrapping_add(1);
        log::info!("Wormhole transit complete, craft placed at {exit_position:?}");
        Some(exit_position)
    }

    /// Drops any in-flight transit and invalidates every ticket issued so far.
    pub fn cancel(&mut self) {
        if self.state.is_transiting() {
            log::info!("Cancelling in-flight wormhole transit");
        }
        self.state = WormholeState::Idle;
        self.generation = self.generation.wrapping_add(1);
    }
}

/// Strict containment: a craft exactly on the horizon does not trigger.
#[inline]
pub fn within_event_horizon(craft_position: Vec3, singularity_position: Vec3, radius: f32) -> bool {
    (craft_position - singularity_position).norm() < radius
}

/// Exit position in an annulus around the reference center.
///
/// Planar distance uniform in `[exit_distance_min, exit_distance_max)`, angle uniform in
/// `[0, 2pi)`, height uniform in `[-span/2, span/2)`.
pub fn sample_exit<R: Rng>(rng: &mut R, tuning: &WormholeTuning) -> Vec3 {
    let angle = rng.gen_range(0.0..TAU);
    let distance = rng.gen_range(tuning.exit_distance_min..tuning.exit_distance_max);
    let height = (rng.r#gen::<f32>() - 0.5) * tuning.exit_height_span;
    Vec3::new(angle.cos() * distance, height, angle.sin() * distance)
}
