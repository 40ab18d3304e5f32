//! Non-linear value snapping.
//!
//! Blends a raw value toward the nearest multiple of a step size. The blend
//! is continuous: there is no hard jump at the snap boundary until
//! `snap_amount` reaches 1.

use crate::math::{inverse_lerp, lerp};

/// Epsilon folded into the upper boundary so a value sitting exactly on a
/// step still has a distinct cell above it.
const SNAP_EPSILON: f32 = 0.0001;

/// Pull `value` toward the nearest multiple of `step_size`.
///
/// `snap_amount <= 0` returns `value` unchanged. `snap_amount >= 1`
/// hard-quantizes to the nearest step. In between, the pull strengthens
/// as the fourth power of `snap_amount`, so high amounts approach hard
/// snapping much faster than linearly.
pub fn snap_value(value: f32, step_size: f32, snap_amount: f32) -> f32 {
    if snap_amount <= 0.0 {
        return value;
    }

    if snap_amount >= 1.0 {
        return (value / step_size).round() * step_size;
    }

    let up = ((value / step_size) + SNAP_EPSILON).ceil() * step_size;
    let down = (value / step_size).floor() * step_size;
    let x = inverse_lerp(down, up, value);
    let t = x * 2.0;
    let i = 1.0 + (snap_amount.powf(4.0) * 99.0);

    let curve = if t < 1.0 {
        1.0 - (0.5 * ((1.0 - t).powf(1.0 / i) + 1.0))
    } else {
        0.5 * ((t - 1.0).powf(1.0 / i) + 1.0)
    };

    lerp(down, up, curve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_amount_is_identity() {
        for v in [0.0, 0.37, 1.49, -2.6] {
            assert_eq!(snap_value(v, 1.0, 0.0), v);
            assert_eq!(snap_value(v, 0.5, -1.0), v);
        }
    }

    #[test]
    fn test_full_amount_hard_quantizes() {
        assert_eq!(snap_value(1.4, 1.0, 1.0), 1.0);
        assert_eq!(snap_value(1.6, 1.0, 1.0), 2.0);
        assert_eq!(snap_value(0.37, 0.25, 1.0), 0.25 * (0.37f32 / 0.25).round());
        assert_eq!(snap_value(-1.4, 1.0, 1.5), -1.0);
    }

    #[test]
    fn test_partial_amount_stays_in_cell() {
        // A partially snapped value never leaves the step cell around it
        for v in [0.1, 0.3, 0.5, 0.7, 0.9] {
            for amount in [0.25, 0.5, 0.75, 0.99] {
                let snapped = snap_value(v, 1.0, amount);
                assert!(
                    (0.0..=1.0 + SNAP_EPSILON).contains(&snapped),
                    "snap({}, 1.0, {}) left the cell: {}",
                    v,
                    amount,
                    snapped
                );
            }
        }
    }

    #[test]
    fn test_pull_strengthens_with_amount() {
        // 0.3 is below the midpoint, so it gets pulled toward 0
        let weak = snap_value(0.3, 1.0, 0.3);
        let strong = snap_value(0.3, 1.0, 0.9);
        assert!(strong < weak, "expected {} < {}", strong, weak);
        assert!(weak < 0.3);
    }
}
