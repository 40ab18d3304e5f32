//! Pan domain: -1 (hard left) to +1 (hard right), 0 is center.

use super::{drag_by, find_positive_i32, format_number, DisplayValue, Tweak};
use crate::math::stepify;

pub struct Pan;

impl DisplayValue for Pan {
    fn display(&self, value: f32) -> String {
        if value < 0.0 {
            format!("{}% L", format_number(stepify((value * 100.0).abs(), 0.01)))
        } else if value > 0.0 {
            format!("{}% R", format_number(stepify(value * 100.0, 0.01)))
        } else {
            "Center".to_string()
        }
    }
}

impl Tweak for Pan {
    fn default_value(&self) -> f32 {
        0.0
    }

    fn constrain(&self, value: f32) -> f32 {
        value.clamp(-1.0, 1.0)
    }

    fn increment(&self, value: f32, _precise: bool) -> f32 {
        self.constrain(self.stepify(value + 0.01))
    }

    fn decrement(&self, value: f32, _precise: bool) -> f32 {
        self.constrain(self.stepify(value - 0.01))
    }

    fn drag(&self, value: f32, amount: i32, precise: bool) -> f32 {
        self.constrain(self.stepify(drag_by(value, amount, 500, 5000, precise)))
    }

    fn from_string(&self, text: &str) -> Option<f32> {
        let uppercase = text.to_uppercase();

        if uppercase.contains("CENTER") {
            return Some(0.0);
        }

        let negative = uppercase.contains('L') || uppercase.contains('-');
        let value = find_positive_i32(text)?;

        Some((value as f32 / 100.0) * if negative { -1.0 } else { 1.0 })
    }

    fn stepify(&self, value: f32) -> f32 {
        stepify(value, 0.01)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Pan.display(-0.5), "50% L");
        assert_eq!(Pan.display(0.5), "50% R");
        assert_eq!(Pan.display(1.0), "100% R");
        assert_eq!(Pan.display(0.0), "Center");
    }

    #[test]
    fn test_from_string() {
        assert_eq!(Pan.from_string("center"), Some(0.0));
        assert_eq!(Pan.from_string("50% L"), Some(-0.5));
        assert_eq!(Pan.from_string("50% R"), Some(0.5));
        assert_eq!(Pan.from_string("-25"), Some(-0.25));
        assert_eq!(Pan.from_string("hello"), None);
    }

    #[test]
    fn test_constrain() {
        assert_eq!(Pan.constrain(-1.5), -1.0);
        assert_eq!(Pan.constrain(1.5), 1.0);
        assert_eq!(Pan.constrain(0.25), 0.25);
    }

    #[test]
    fn test_increment_steps_one_percent() {
        assert!((Pan.increment(0.0, false) - 0.01).abs() < 1e-6);
        assert!((Pan.decrement(0.0, false) - -0.01).abs() < 1e-6);

        // Saturates at the edges
        assert_eq!(Pan.increment(1.0, false), 1.0);
        assert_eq!(Pan.decrement(-1.0, false), -1.0);
    }
}
