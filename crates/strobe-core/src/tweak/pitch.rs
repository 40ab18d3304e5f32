//! Pitch domain: -60 to +60 semitones, 0.1 semitone resolution.

use super::{drag_by, find_number, format_number, nudge_down, nudge_up, DisplayValue, Tweak};
use crate::math::stepify;
use crate::snap::snap_value;

pub struct Pitch;

impl DisplayValue for Pitch {
    fn display(&self, value: f32) -> String {
        format_number(value)
    }
}

impl Tweak for Pitch {
    fn default_value(&self) -> f32 {
        0.0
    }

    fn constrain(&self, value: f32) -> f32 {
        value.clamp(-60.0, 60.0)
    }

    fn increment(&self, value: f32, precise: bool) -> f32 {
        self.constrain(self.stepify(nudge_up(value, 1, 10, precise)))
    }

    fn decrement(&self, value: f32, precise: bool) -> f32 {
        self.constrain(self.stepify(nudge_down(value, 1, 10, precise)))
    }

    fn drag(&self, value: f32, amount: i32, precise: bool) -> f32 {
        self.constrain(self.stepify(drag_by(value, amount / 5, 1, 10, precise)))
    }

    fn from_string(&self, text: &str) -> Option<f32> {
        find_number(text)
    }

    fn stepify(&self, value: f32) -> f32 {
        stepify(value, 0.1)
    }
}

/// Snap with pitch resolution applied afterwards. Used as the pitch
/// envelope's snap hook so snapped values land on displayable semitones.
pub fn snap(value: f32, step_size: f32, snap_amount: f32) -> f32 {
    stepify(snap_value(value, step_size, snap_amount), 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constrain_range() {
        assert_eq!(Pitch.constrain(-61.0), -60.0);
        assert_eq!(Pitch.constrain(61.0), 60.0);
        assert_eq!(Pitch.constrain(12.0), 12.0);
    }

    #[test]
    fn test_increment_steps() {
        assert!((Pitch.increment(0.0, false) - 1.0).abs() < 1e-6);
        assert!((Pitch.increment(0.0, true) - 0.1).abs() < 1e-6);
        assert!((Pitch.decrement(0.0, false) - -1.0).abs() < 1e-6);
    }

    #[test]
    fn test_display_is_plain_numeric() {
        assert_eq!(Pitch.display(12.0), "12");
        assert_eq!(Pitch.display(-0.5), "-0.5");
        assert_eq!(Pitch.from_string("+7 st"), Some(7.0));
    }

    #[test]
    fn test_snap_full_amount_quantizes_to_step() {
        assert_eq!(snap(4.3, 1.0, 1.0), 4.0);
        assert_eq!(snap(4.6, 1.0, 1.0), 5.0);
        // Zero amount still rounds to display resolution
        assert!((snap(4.33, 1.0, 0.0) - 4.3).abs() < 0.001);
    }
}
