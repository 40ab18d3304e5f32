//! Amplitude domain. Stored values are linear gain; editing happens in
//! decibel space with a legal range of -60 dB to +12 dB.

use super::{drag_by, find_number, nudge_down, nudge_up, DisplayValue, Tweak};
use crate::math::{convert, stepify};

/// Gains at or below this linear value step to exact silence.
const SILENCE_THRESHOLD: f32 = 0.00001;

pub struct Amp;

impl DisplayValue for Amp {
    fn display(&self, value: f32) -> String {
        if value <= 0.0 {
            "Silent".to_string()
        } else {
            format!("{:.1} dB", stepify(convert::linear_to_db(value), 0.1))
        }
    }
}

impl Tweak for Amp {
    fn default_value(&self) -> f32 {
        1.0
    }

    fn constrain(&self, value: f32) -> f32 {
        let db = convert::linear_to_db(value);

        if db < -60.0 {
            0.0
        } else if db > 12.0 {
            convert::db_to_linear(12.0)
        } else {
            value
        }
    }

    fn increment(&self, value: f32, precise: bool) -> f32 {
        if value <= 0.0 {
            return convert::db_to_linear(-60.0);
        }

        let db = nudge_up(convert::linear_to_db(value), 1, 10, precise);
        self.constrain(self.stepify(convert::db_to_linear(db)))
    }

    fn decrement(&self, value: f32, precise: bool) -> f32 {
        let db = nudge_down(convert::linear_to_db(value), 1, 10, precise);
        self.constrain(self.stepify(convert::db_to_linear(db)))
    }

    fn drag(&self, value: f32, amount: i32, precise: bool) -> f32 {
        // Dragging up from silence starts just below the floor
        let value = if value <= 0.0 {
            convert::db_to_linear(-61.0)
        } else {
            value
        };

        let db = drag_by(convert::linear_to_db(value), amount / 5, 1, 10, precise);
        self.constrain(self.stepify(convert::db_to_linear(db)))
    }

    fn from_string(&self, text: &str) -> Option<f32> {
        find_number(text).map(convert::db_to_linear)
    }

    fn stepify(&self, value: f32) -> f32 {
        if value <= SILENCE_THRESHOLD {
            0.0
        } else {
            convert::db_to_linear(stepify(convert::linear_to_db(value), 0.1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Amp.display(0.0), "Silent");
        assert_eq!(Amp.display(-0.5), "Silent");
        assert_eq!(Amp.display(1.0), "0.0 dB");
        assert_eq!(Amp.display(convert::db_to_linear(-6.0)), "-6.0 dB");
        assert_eq!(Amp.display(convert::db_to_linear(12.0)), "12.0 dB");
    }

    #[test]
    fn test_constrain_floor_is_silence() {
        assert_eq!(Amp.constrain(convert::db_to_linear(-70.0)), 0.0);
        assert_eq!(Amp.constrain(0.0), 0.0);

        let ceiling = Amp.constrain(convert::db_to_linear(20.0));
        assert!((convert::linear_to_db(ceiling) - 12.0).abs() < 0.001);

        // In-range values pass through untouched
        assert_eq!(Amp.constrain(1.0), 1.0);
    }

    #[test]
    fn test_stepify_snaps_to_tenth_db() {
        let v = Amp.stepify(convert::db_to_linear(-6.04));
        assert!((convert::linear_to_db(v) - -6.0).abs() < 0.001);

        assert_eq!(Amp.stepify(0.0), 0.0);
        assert_eq!(Amp.stepify(0.000001), 0.0);
    }

    #[test]
    fn test_increment_from_silence() {
        let v = Amp.increment(0.0, false);
        assert!((convert::linear_to_db(v) - -60.0).abs() < 0.001);
    }

    #[test]
    fn test_increment_decrement_step_one_db() {
        let up = Amp.increment(1.0, false);
        assert!((convert::linear_to_db(up) - 1.0).abs() < 0.01);

        let down = Amp.decrement(1.0, false);
        assert!((convert::linear_to_db(down) - -1.0).abs() < 0.01);

        let fine = Amp.increment(1.0, true);
        assert!((convert::linear_to_db(fine) - 0.1).abs() < 0.01);
    }

    #[test]
    fn test_from_string_parses_db() {
        let v = Amp.from_string("-6 dB").unwrap();
        assert!((convert::linear_to_db(v) - -6.0).abs() < 0.001);
        assert_eq!(Amp.from_string("loud"), None);
    }
}
