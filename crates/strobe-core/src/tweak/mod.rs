//! Per-domain tweak policies.
//!
//! A tweak policy defines how a value domain behaves under interactive
//! control: clamping, keyboard increments, mouse drags, text parsing, and
//! display formatting. Each domain is a zero-sized type implementing
//! [`Tweak`] (or [`IntTweak`] for integer domains), looked up through
//! [`TweakDomain::tweaker`].
//!
//! Display and parsing allocate and are confined to non-render contexts;
//! constrain/increment/decrement/drag/stepify are allocation-free.

use serde::{Deserialize, Serialize};

pub mod amp;
pub mod filter_frequency;
pub mod pan;
pub mod percentage;
pub mod pitch;
pub mod sample_offset;
pub mod speed;

pub use amp::Amp;
pub use filter_frequency::FilterFrequency;
pub use pan::Pan;
pub use percentage::{Percentage, PercentageBipolar};
pub use pitch::Pitch;
pub use sample_offset::SampleOffset;
pub use speed::Speed;

/// Formats a domain value for display.
pub trait DisplayValue: Sync {
    fn display(&self, value: f32) -> String;
}

/// Full interactive behavior of a float value domain.
pub trait Tweak: DisplayValue {
    fn default_value(&self) -> f32;

    /// Clamp `value` into the domain's legal range.
    fn constrain(&self, value: f32) -> f32;

    /// One keyboard step up. `precise` selects the fine step.
    fn increment(&self, value: f32, precise: bool) -> f32;

    /// One keyboard step down.
    fn decrement(&self, value: f32, precise: bool) -> f32;

    /// Apply a mouse drag of `amount` ticks.
    fn drag(&self, value: f32, amount: i32, precise: bool) -> f32;

    /// Parse a user-typed string. `None` means "keep the previous value".
    fn from_string(&self, text: &str) -> Option<f32>;

    /// Round to the domain's display resolution.
    fn stepify(&self, value: f32) -> f32 {
        value
    }
}

/// Full interactive behavior of an integer value domain.
pub trait IntTweak: Sync {
    fn default_value(&self) -> i32;
    fn display(&self, value: i32) -> String;
    fn constrain(&self, value: i32) -> i32;
    fn increment(&self, value: i32, precise: bool) -> i32;
    fn decrement(&self, value: i32, precise: bool) -> i32;
    fn drag(&self, value: i32, amount: i32, precise: bool) -> i32;
    fn from_string(&self, text: &str) -> Option<i32>;
}

/// Tag identifying a value domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TweakDomain {
    Amp,
    Pan,
    Pitch,
    Speed,
    Percentage,
    PercentageBipolar,
    FilterFrequency,
    SampleOffset,
}

/// A domain's capability bundle.
///
/// A slider whose domain lacks any core interactive callback degrades to
/// `DisplayOnly`: the host shows the value but exposes no control.
#[derive(Clone, Copy)]
pub enum TweakerHandle {
    Full(&'static dyn Tweak),
    FullInt(&'static dyn IntTweak),
    DisplayOnly(&'static dyn DisplayValue),
}

impl TweakerHandle {
    /// Whether this bundle supports interactive editing.
    pub fn is_interactive(&self) -> bool {
        !matches!(self, TweakerHandle::DisplayOnly(_))
    }

    /// Format a float-domain value. Integer domains format the truncated
    /// value.
    pub fn display(&self, value: f32) -> String {
        match self {
            TweakerHandle::Full(t) => t.display(value),
            TweakerHandle::FullInt(t) => t.display(value as i32),
            TweakerHandle::DisplayOnly(d) => d.display(value),
        }
    }

    /// Round to display resolution; identity for non-interactive bundles.
    pub fn stepify(&self, value: f32) -> f32 {
        match self {
            TweakerHandle::Full(t) => t.stepify(value),
            _ => value,
        }
    }
}

impl TweakDomain {
    /// Look up the capability bundle for this domain.
    pub fn tweaker(self) -> TweakerHandle {
        match self {
            TweakDomain::Amp => TweakerHandle::Full(&Amp),
            TweakDomain::Pan => TweakerHandle::Full(&Pan),
            TweakDomain::Pitch => TweakerHandle::Full(&Pitch),
            TweakDomain::Speed => TweakerHandle::Full(&Speed),
            TweakDomain::Percentage => TweakerHandle::Full(&Percentage),
            TweakDomain::PercentageBipolar => TweakerHandle::Full(&PercentageBipolar),
            TweakDomain::FilterFrequency => TweakerHandle::Full(&FilterFrequency),
            TweakDomain::SampleOffset => TweakerHandle::FullInt(&SampleOffset),
        }
    }
}

/// Find the first number in `text`, honoring a preceding minus sign.
///
/// Returns `None` if `text` contains no parseable number, so callers keep
/// the previous value instead of applying a garbage parse.
pub fn find_number(text: &str) -> Option<f32> {
    let bytes = text.as_bytes();
    let start = bytes
        .iter()
        .position(|b| b.is_ascii_digit() || *b == b'.')?;

    let mut end = start;
    let mut seen_dot = false;

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    let magnitude: f32 = text[start..end].parse().ok()?;
    let negative = text[..start].trim_end().ends_with('-');

    Some(if negative { -magnitude } else { magnitude })
}

/// Integer variant of [`find_number`].
pub fn find_number_i32(text: &str) -> Option<i32> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(|b| b.is_ascii_digit())?;
    let end = start
        + bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();

    let magnitude: i32 = text[start..end].parse().ok()?;
    let negative = text[..start].trim_end().ends_with('-');

    Some(if negative { -magnitude } else { magnitude })
}

/// Find the first unsigned integer in `text`.
pub fn find_positive_i32(text: &str) -> Option<i32> {
    let bytes = text.as_bytes();
    let start = bytes.iter().position(|b| b.is_ascii_digit())?;
    let end = start
        + bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();

    text[start..end].parse().ok()
}

/// Shortest display form of a float ("50" rather than "50.0").
pub(crate) fn format_number(value: f32) -> String {
    if value == value.trunc() && value.abs() < 1e7 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Keyboard step up by `1/normal` (or `1/precise`).
#[inline]
pub(crate) fn nudge_up(value: f32, normal: i32, precise: i32, is_precise: bool) -> f32 {
    value + 1.0 / (if is_precise { precise } else { normal }) as f32
}

/// Keyboard step down by `1/normal` (or `1/precise`).
#[inline]
pub(crate) fn nudge_down(value: f32, normal: i32, precise: i32, is_precise: bool) -> f32 {
    value - 1.0 / (if is_precise { precise } else { normal }) as f32
}

/// Drag by `amount` ticks scaled by `1/normal` (or `1/precise`).
#[inline]
pub(crate) fn drag_by(value: f32, amount: i32, normal: i32, precise: i32, is_precise: bool) -> f32 {
    value + amount as f32 / (if is_precise { precise } else { normal }) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_number() {
        assert_eq!(find_number("12"), Some(12.0));
        assert_eq!(find_number("-12.5"), Some(-12.5));
        assert_eq!(find_number("-6.0 dB"), Some(-6.0));
        assert_eq!(find_number("x1.5"), Some(1.5));
        assert_eq!(find_number("- 3"), Some(-3.0));
        assert_eq!(find_number("no value here"), None);
        assert_eq!(find_number(""), None);
    }

    #[test]
    fn test_find_positive_ignores_sign() {
        assert_eq!(find_positive_i32("-50% L"), Some(50));
        assert_eq!(find_positive_i32("75"), Some(75));
        assert_eq!(find_positive_i32("Center"), None);
        assert_eq!(find_number_i32("-42 samples"), Some(-42));
    }

    #[test]
    fn test_format_number_trims_trailing_zeros() {
        assert_eq!(format_number(50.0), "50");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.125), "0.125");
    }

    #[test]
    fn test_every_domain_resolves() {
        for domain in [
            TweakDomain::Amp,
            TweakDomain::Pan,
            TweakDomain::Pitch,
            TweakDomain::Speed,
            TweakDomain::Percentage,
            TweakDomain::PercentageBipolar,
            TweakDomain::FilterFrequency,
            TweakDomain::SampleOffset,
        ] {
            assert!(domain.tweaker().is_interactive());
        }
    }
}
