use crate::{bitmask_flags::Flags, define_flag_bits, speed_mode::SpeedMode};

define_flag_bits!(
    /// A held control. The input collector sets and clears these from key state.
    Intent,
    u8,
    {
        Forward,
        Backward,
        YawLeft,
        YawRight,
        RollLeft,
        RollRight,
        Ascend,
        Descend,
    }
);

/// Live control state sampled once per frame.
///
/// The collector mutates it from key events between frames (last key state wins);
/// the simulation only reads it.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct InputIntent {
    pub held: Flags<u8>,
    /// Most recently selected speed mode, if the player picked one since the last frame.
    pub selected_mode: Option<SpeedMode>,
}

impl InputIntent {
    pub fn with_held(held: &[Intent]) -> Self {
        Self {
            held: held.iter().copied().collect(),
            selected_mode: None,
        }
    }

    #[inline]
    pub fn is_held(&self, intent: Intent) -> bool {
        self.held.contains(intent)
    }

    #[inline]
    pub fn set(&mut self, intent: Intent, held: bool) {
        self.held.set(intent, held);
    }

    /// Net yaw input: +1 left, -1 right, 0 when neither or both are held.
    pub fn yaw_axis(&self) -> f32 {
        axis(self.is_held(Intent::YawLeft), self.is_held(Intent::YawRight))
    }

    /// Net roll input: +1 left, -1 right, 0 when neither or both are held.
    pub fn roll_axis(&self) -> f32 {
        axis(self.is_held(Intent::RollLeft), self.is_held(Intent::RollRight))
    }

    /// Net vertical input: +1 ascend, -1 descend, 0 when neither or both are held.
    pub fn vertical_axis(&self) -> f32 {
        axis(self.is_held(Intent::Ascend), self.is_held(Intent::Descend))
    }

    /// Clears every held control, e.g. on focus loss or reset.
    pub fn release_all(&mut self) {
        self.held.clear();
        self.selected_mode = None;
    }
}

#[inline]
fn axis(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_axes_cancel() {
        let i = InputIntent::with_held(&[Intent::YawLeft, Intent::YawRight, Intent::Ascend]);
        assert_eq!(i.yaw_axis(), 0.0);
        assert_eq!(i.roll_axis(), 0.0);
        assert_eq!(i.vertical_axis(), 1.0);
    }

    #[test]
    fn set_tracks_key_state() {
        let mut i = InputIntent::default();
        i.set(Intent::RollRight, true);
        assert_eq!(i.roll_axis(), -1.0);
        i.set(Intent::RollRight, false);
        assert_eq!(i.roll_axis(), 0.0);
    }

    #[test]
    fn release_all_drops_held_and_selection() {
        let mut i = InputIntent::with_held(&[Intent::Forward, Intent::Descend]);
        i.selected_mode = Some(SpeedMode::LightSpeed);
        i.release_all();
        assert!(i.held.is_empty());
        assert_eq!(i.selected_mode, None);
    }
}
