//! Playback speed domain. Values are multipliers of normal speed; editing
//! happens in log2 space so each step halves or doubles.

use super::{drag_by, find_number, format_number, nudge_down, nudge_up, DisplayValue, Tweak};
use crate::math::convert;

pub const FREEZE: f32 = 0.0;
pub const THIRTYSECOND: f32 = 0.03125;
pub const SIXTEENTH: f32 = 0.0625;
pub const EIGHTH: f32 = 0.125;
pub const QUARTER: f32 = 0.25;
pub const HALF: f32 = 0.5;
pub const NORMAL: f32 = 1.0;
pub const DOUBLE: f32 = 2.0;
pub const TRIPLE: f32 = 3.0;

/// Tolerance when re-detecting a named multiplier for display.
const MILESTONE_THRESHOLD: f32 = 0.001;

const MILESTONES: [(f32, &str); 8] = [
    (THIRTYSECOND, "1/32"),
    (SIXTEENTH, "1/16"),
    (EIGHTH, "1/8"),
    (QUARTER, "1/4"),
    (HALF, "1/2"),
    (NORMAL, "Normal"),
    (DOUBLE, "Double"),
    (TRIPLE, "Triple"),
];

fn milestone_hit(value: f32, milestone: f32) -> bool {
    value > milestone - MILESTONE_THRESHOLD && value < milestone + MILESTONE_THRESHOLD
}

pub struct Speed;

impl DisplayValue for Speed {
    fn display(&self, value: f32) -> String {
        if value <= FREEZE {
            return "Freeze".to_string();
        }

        for (milestone, name) in MILESTONES {
            if milestone_hit(value, milestone) {
                return name.to_string();
            }
        }

        format!("x{}", format_number(value))
    }
}

impl Tweak for Speed {
    fn default_value(&self) -> f32 {
        NORMAL
    }

    fn constrain(&self, value: f32) -> f32 {
        if value < convert::linear_to_speed(-8.0) {
            FREEZE
        } else if value > 32.0 {
            32.0
        } else {
            value
        }
    }

    fn increment(&self, value: f32, precise: bool) -> f32 {
        if value <= FREEZE {
            return convert::linear_to_speed(-8.0);
        }

        let linear = nudge_up(convert::speed_to_linear(value), 1, 10, precise);
        self.constrain(convert::linear_to_speed(linear))
    }

    fn decrement(&self, value: f32, precise: bool) -> f32 {
        let linear = nudge_down(convert::speed_to_linear(value), 1, 10, precise);
        self.constrain(convert::linear_to_speed(linear))
    }

    fn drag(&self, value: f32, amount: i32, precise: bool) -> f32 {
        let value = if value <= FREEZE {
            convert::linear_to_speed(-8.0)
        } else {
            value
        };

        let linear = drag_by(convert::speed_to_linear(value), amount / 5, 1, 10, precise);
        self.constrain(convert::linear_to_speed(linear))
    }

    fn from_string(&self, text: &str) -> Option<f32> {
        let uppercase = text.to_uppercase();

        if uppercase.contains("FREEZE") {
            return Some(FREEZE);
        }

        for (value, name) in [
            (THIRTYSECOND, "1/32"),
            (SIXTEENTH, "1/16"),
            (EIGHTH, "1/8"),
            (QUARTER, "1/4"),
            (HALF, "1/2"),
            (NORMAL, "NORMAL"),
            (DOUBLE, "DOUBLE"),
            (TRIPLE, "TRIPLE"),
        ] {
            if uppercase.contains(name) {
                return Some(value);
            }
        }

        find_number(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_named_multipliers() {
        assert_eq!(Speed.display(0.0), "Freeze");
        assert_eq!(Speed.display(-0.1), "Freeze");
        assert_eq!(Speed.display(0.03125), "1/32");
        assert_eq!(Speed.display(0.5), "1/2");
        assert_eq!(Speed.display(1.0), "Normal");
        assert_eq!(Speed.display(2.0), "Double");
        assert_eq!(Speed.display(3.0), "Triple");
        assert_eq!(Speed.display(1.5), "x1.5");

        // Within tolerance of a milestone still shows the name
        assert_eq!(Speed.display(1.0005), "Normal");
        assert_eq!(Speed.display(1.002), "x1.002");
    }

    #[test]
    fn test_from_string() {
        assert_eq!(Speed.from_string("freeze"), Some(FREEZE));
        assert_eq!(Speed.from_string("1/16"), Some(SIXTEENTH));
        assert_eq!(Speed.from_string("double"), Some(DOUBLE));
        assert_eq!(Speed.from_string("x1.5"), Some(1.5));
        assert_eq!(Speed.from_string("???"), None);
    }

    #[test]
    fn test_constrain_floor_and_ceiling() {
        // Below the log2 floor collapses to freeze
        assert_eq!(Speed.constrain(0.001), FREEZE);
        assert_eq!(Speed.constrain(64.0), 32.0);
        assert_eq!(Speed.constrain(1.0), 1.0);
    }

    #[test]
    fn test_increment_doubles() {
        assert!((Speed.increment(1.0, false) - 2.0).abs() < 1e-5);
        assert!((Speed.decrement(1.0, false) - 0.5).abs() < 1e-5);

        // From freeze, stepping up lands on the floor
        let from_freeze = Speed.increment(0.0, false);
        assert!((from_freeze - convert::linear_to_speed(-8.0)).abs() < 1e-7);
    }
}
