//! Interpolation primitives and physical-unit conversions.
//!
//! Everything here is pure and allocation-free and may be called from the
//! render thread. Conversion constants are exact; callers that need
//! identical output across versions rely on them staying bit-for-bit
//! stable.

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f32, b: f32, x: f32) -> f32 {
    (x * (b - a)) + a
}

/// Inverse of [`lerp`]: where does `x` sit between `a` and `b`?
#[inline]
pub fn inverse_lerp(a: f32, b: f32, x: f32) -> f32 {
    (x - a) / (b - a)
}

/// Round `value` to the nearest multiple of `step`.
///
/// A `step` of zero returns `value` unchanged.
#[inline]
pub fn stepify(value: f32, step: f32) -> f32 {
    if step != 0.0 {
        (value / step + 0.5).floor() * step
    } else {
        value
    }
}

/// Floored modulo: result is always non-negative for positive `y`.
#[inline]
pub fn wrap(x: f32, y: f32) -> f32 {
    let r = x % y;
    if r < 0.0 {
        r + y
    } else {
        r
    }
}

/// Floored modulo over integer positions.
#[inline]
pub fn wrap_i64(x: i64, y: i64) -> i64 {
    let r = x % y;
    if r < 0 {
        r + y
    } else {
        r
    }
}

/// Apply `curve` to `value`'s normalized position within `[min, max]`.
#[inline]
pub fn transform_and_normalize<C: Fn(f32) -> f32>(curve: C, min: f32, max: f32, value: f32) -> f32 {
    curve(inverse_lerp(min, max, value))
}

/// Apply `curve` to `value` within `[min, max]`, staying in `[min, max]`.
#[inline]
pub fn transform<C: Fn(f32) -> f32>(curve: C, min: f32, max: f32, value: f32) -> f32 {
    lerp(min, max, transform_and_normalize(&curve, min, max, value))
}

/// Unit conversions between linear control values and musical domains.
pub mod convert {
    use super::{inverse_lerp, lerp};

    /// `ln(x) * LINEAR_TO_DB_FACTOR` is `20 * log10(x)`.
    const LINEAR_TO_DB_FACTOR: f32 = 8.685_889_638_065_036_5;
    /// `exp(d * DB_TO_LINEAR_FACTOR)` is `10^(d/20)`.
    const DB_TO_LINEAR_FACTOR: f32 = 0.115_129_254_649_702_28;

    /// Pitch endpoints of the filter frequency curve.
    const FILTER_CURVE_LO: f32 = -8.513;
    const FILTER_CURVE_HI: f32 = 135.076;

    /// Map a unipolar `[0, 1]` value to bipolar `[-1, 1]`.
    #[inline]
    pub fn uni_to_bi(uni: f32) -> f32 {
        (uni * 2.0) - 1.0
    }

    /// Semitone pitch to frequency in Hz. Pitch 0 is 8.1758 Hz (MIDI note 0).
    #[inline]
    pub fn pitch_to_frequency(pitch: f32) -> f32 {
        8.1758 * (pitch / 12.0).exp2()
    }

    /// Frequency in Hz to semitone pitch.
    #[inline]
    pub fn frequency_to_pitch(frequency: f32) -> f32 {
        12.0 * (frequency / 8.1758).log2()
    }

    /// Linear gain to decibels. `x` must be positive; callers special-case
    /// silence before converting.
    #[inline]
    pub fn linear_to_db(linear: f32) -> f32 {
        linear.ln() * LINEAR_TO_DB_FACTOR
    }

    /// Decibels to linear gain.
    #[inline]
    pub fn db_to_linear(db: f32) -> f32 {
        (db * DB_TO_LINEAR_FACTOR).exp()
    }

    /// Linear control value to playback speed multiplier: `0.5^(-x)`.
    #[inline]
    pub fn linear_to_speed(linear: f32) -> f32 {
        0.5f32.powf(-linear)
    }

    /// Playback speed multiplier to linear control value: `log2(s)`.
    /// `s` must be positive; callers special-case freeze before converting.
    #[inline]
    pub fn speed_to_linear(speed: f32) -> f32 {
        speed.log2()
    }

    /// Normalized `[0, 1]` filter control to frequency in Hz, via the
    /// pitch curve.
    #[inline]
    pub fn linear_to_filter_hz(linear: f32) -> f32 {
        pitch_to_frequency(lerp(FILTER_CURVE_LO, FILTER_CURVE_HI, linear))
    }

    /// Frequency in Hz back to the normalized filter control value.
    #[inline]
    pub fn filter_hz_to_linear(hz: f32) -> f32 {
        inverse_lerp(FILTER_CURVE_LO, FILTER_CURVE_HI, frequency_to_pitch(hz))
    }

    /// Semitone pitch to frequency factor: `2^(p/12)`.
    #[inline]
    pub fn p_to_ff(p: f32) -> f32 {
        (p / 12.0).exp2()
    }

    /// Frequency factor to semitone pitch.
    #[inline]
    pub fn ff_to_p(ff: f32) -> f32 {
        ff.log2() * 12.0
    }
}

/// Easing curves for gridline spacing and UI value shaping.
pub mod ease {
    /// Quadratic easing.
    pub mod quadratic {
        pub fn ease_in(x: f32) -> f32 {
            x * x
        }

        pub fn ease_out(x: f32) -> f32 {
            -(x * (x - 2.0))
        }

        pub fn in_out(x: f32) -> f32 {
            let x = x / 0.5;
            if x < 1.0 {
                return x * x * 0.5;
            }
            let x = x - 1.0;
            (x * (x - 2.0) - 1.0) * -0.5
        }

        pub fn out_in(x: f32) -> f32 {
            if x < 0.5 {
                let x = x / 0.5;
                -0.5 * (x * (x - 2.0))
            } else {
                2.0 * (x - 0.5).powi(2) + 0.5
            }
        }
    }

    /// Parametric easing.
    pub mod parametric {
        pub fn in_out(x: f32) -> f32 {
            let sqr = x * x;
            sqr / (2.0 * (sqr - x) + 1.0)
        }
    }
}

/// Window functions.
pub mod window {
    use std::f32::consts::PI;

    /// Tukey (tapered cosine) window. `r` is the taper ratio in `[0, 1]`.
    pub fn tukey(x: f32, r: f32) -> f32 {
        let p0 = r / 2.0;
        let p1 = 1.0 - (r / 2.0);

        if x < p0 {
            0.5 * (1.0 + (PI * (((2.0 * x) / r) - 1.0)).cos())
        } else if x < p1 {
            1.0
        } else {
            0.5 * (1.0 + (PI * (((2.0 * x) / r) - (2.0 / r) + 1.0)).cos())
        }
    }
}
