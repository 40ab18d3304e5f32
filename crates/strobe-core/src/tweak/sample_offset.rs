//! Sample offset domain: unconstrained integer frame counts.

use super::{find_number_i32, IntTweak};

pub struct SampleOffset;

impl IntTweak for SampleOffset {
    fn default_value(&self) -> i32 {
        0
    }

    fn display(&self, value: i32) -> String {
        format!("{}", value)
    }

    fn constrain(&self, value: i32) -> i32 {
        value
    }

    fn increment(&self, value: i32, _precise: bool) -> i32 {
        value + 1
    }

    fn decrement(&self, value: i32, _precise: bool) -> i32 {
        value - 1
    }

    fn drag(&self, value: i32, amount: i32, precise: bool) -> i32 {
        value + (amount / if precise { 50 } else { 1 })
    }

    fn from_string(&self, text: &str) -> Option<i32> {
        find_number_i32(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained() {
        assert_eq!(SampleOffset.constrain(-123456), -123456);
        assert_eq!(SampleOffset.increment(0, false), 1);
        assert_eq!(SampleOffset.decrement(0, true), -1);
    }

    #[test]
    fn test_drag_scales_when_precise() {
        assert_eq!(SampleOffset.drag(0, 100, false), 100);
        assert_eq!(SampleOffset.drag(0, 100, true), 2);
    }

    #[test]
    fn test_from_string() {
        assert_eq!(SampleOffset.from_string("-200 frames"), Some(-200));
        assert_eq!(SampleOffset.from_string("start"), None);
    }
}
