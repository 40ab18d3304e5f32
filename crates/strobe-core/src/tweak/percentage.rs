//! Percentage domains. `Percentage` stores `[0, 1]` shown as 0-100%;
//! `PercentageBipolar` stores `[0, 1]` shown as -100% to +100% around a
//! 0.5 center.

use super::{drag_by, find_number, format_number, nudge_down, nudge_up, DisplayValue, Tweak};
use crate::math::stepify;

pub struct Percentage;

impl DisplayValue for Percentage {
    fn display(&self, value: f32) -> String {
        format!("{}%", format_number(stepify(value * 100.0, 0.001)))
    }
}

impl Tweak for Percentage {
    fn default_value(&self) -> f32 {
        0.0
    }

    fn constrain(&self, value: f32) -> f32 {
        value.clamp(0.0, 1.0)
    }

    fn increment(&self, value: f32, precise: bool) -> f32 {
        self.constrain(self.stepify(nudge_up(value, 100, 1000, precise)))
    }

    fn decrement(&self, value: f32, precise: bool) -> f32 {
        self.constrain(self.stepify(nudge_down(value, 100, 1000, precise)))
    }

    fn drag(&self, value: f32, amount: i32, precise: bool) -> f32 {
        self.constrain(self.stepify(drag_by(value, amount / 5, 100, 1000, precise)))
    }

    fn from_string(&self, text: &str) -> Option<f32> {
        find_number(text).map(|v| v / 100.0)
    }

    fn stepify(&self, value: f32) -> f32 {
        stepify(value, 0.001)
    }
}

pub struct PercentageBipolar;

impl DisplayValue for PercentageBipolar {
    fn display(&self, value: f32) -> String {
        format!("{}%", format_number(stepify((value - 0.5) * 200.0, 0.001)))
    }
}

impl Tweak for PercentageBipolar {
    fn default_value(&self) -> f32 {
        0.0
    }

    fn constrain(&self, value: f32) -> f32 {
        value.clamp(0.0, 1.0)
    }

    fn increment(&self, value: f32, precise: bool) -> f32 {
        self.constrain(self.stepify(nudge_up(value, 200, 2000, precise)))
    }

    fn decrement(&self, value: f32, precise: bool) -> f32 {
        self.constrain(self.stepify(nudge_down(value, 200, 2000, precise)))
    }

    fn drag(&self, value: f32, amount: i32, precise: bool) -> f32 {
        self.constrain(self.stepify(drag_by(value, amount / 5, 200, 2000, precise)))
    }

    fn from_string(&self, text: &str) -> Option<f32> {
        find_number(text).map(|v| v / 100.0)
    }

    fn stepify(&self, value: f32) -> f32 {
        stepify(value, 0.0005)
    }
}
