//! Filter frequency domain. Stored values are normalized `[0, 1]` and map
//! to Hz through the pitch-based filter curve.

use super::{drag_by, find_number, format_number, nudge_down, nudge_up, DisplayValue, Tweak};
use crate::math::convert;

pub struct FilterFrequency;

impl DisplayValue for FilterFrequency {
    // Matches the reference formatting exactly: both branches show the
    // normalized control value, and above 1 kHz it is the normalized value
    // that gets divided by 1000.
    fn display(&self, value: f32) -> String {
        let hz = convert::linear_to_filter_hz(value);

        if hz >= 1000.0 {
            format!("{} MHz", format_number(value / 1000.0))
        } else {
            format!("{} Hz", format_number(value))
        }
    }
}

impl Tweak for FilterFrequency {
    fn default_value(&self) -> f32 {
        0.0
    }

    fn constrain(&self, value: f32) -> f32 {
        value.clamp(0.0, 1.0)
    }

    fn increment(&self, value: f32, precise: bool) -> f32 {
        self.constrain(nudge_up(value, 100, 1000, precise))
    }

    fn decrement(&self, value: f32, precise: bool) -> f32 {
        self.constrain(nudge_down(value, 100, 1000, precise))
    }

    fn drag(&self, value: f32, amount: i32, precise: bool) -> f32 {
        self.constrain(drag_by(value, amount / 5, 100, 1000, precise))
    }

    fn from_string(&self, text: &str) -> Option<f32> {
        find_number(text).map(convert::filter_hz_to_linear)
    }
}
