//! Parameter data model.
//!
//! Pure data contracts shared by the envelope evaluator and the tweak
//! policies: breakpoints, per-call envelope data views, slider and
//! envelope specs, and the tagged [`ParameterKind`] union. The standard
//! catalog at the bottom defines the stock parameters by their stable
//! UUIDs; generators reuse a UUID to let the host preserve user
//! modulation data when switching between them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::convert;
use crate::tweak::{self, DisplayValue, IntTweak, Tweak, TweakDomain, TweakerHandle};

/// A single control point of an envelope curve.
///
/// `x` is block-relative time in frames. `curve` is reserved for per-point
/// curvature and currently unused.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub x: i64,
    pub y: f32,
    pub curve: f32,
}

impl Breakpoint {
    pub fn new(x: i64, y: f32) -> Self {
        Self { x, y, curve: 0.0 }
    }
}

/// Check that breakpoints are sorted by strictly ascending `x`.
///
/// Evaluation assumes this ordering and does not re-check it per call;
/// hosts that mutate curves should validate at the edit boundary.
pub fn validate_breakpoints(points: &[Breakpoint]) -> Result<()> {
    for (index, pair) in points.windows(2).enumerate() {
        if pair[1].x < pair[0].x {
            return Err(Error::UnsortedBreakpoints { index: index + 1 });
        }
        if pair[1].x == pair[0].x {
            return Err(Error::DuplicateBreakpoint { index: index + 1 });
        }
    }

    Ok(())
}

/// Borrowed view of one envelope's data for the duration of a query.
///
/// `min`/`max` clamp every value the evaluator returns, independently of
/// the stored point values; a breakpoint's `y` may lie outside the range.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeData<'a> {
    pub points: &'a [Breakpoint],
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub options: &'a [u32],
}

impl<'a> EnvelopeData<'a> {
    pub fn new(points: &'a [Breakpoint], min: f32, max: f32, default: f32) -> Self {
        Self {
            points,
            min,
            max,
            default,
            options: &[],
        }
    }

    /// Clamp a value into this envelope's visible range.
    #[inline]
    pub fn clamp(&self, y: f32) -> f32 {
        y.clamp(self.min, self.max)
    }
}

/// Standard icons the host may show next to a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Icon {
    #[default]
    None,
    Amp,
    Pan,
    Pitch,
    SampleOffset,
    Speed,
    Loop,
    Reverse,
    PianoRoll,
}

/// Presentation flag bits.
pub mod flags {
    pub const ENVELOPE_ALWAYS_SHOW_BUTTON: u32 = 1 << 1;
    pub const ENVELOPE_DEFAULT_ACTIVE: u32 = 1 << 2;
    pub const ENVELOPE_DEFAULT_DISABLED: u32 = 1 << 3;
    pub const ENVELOPE_DEFAULT_ALWAYS_VISIBLE: u32 = 1 << 4;
    pub const ENVELOPE_NO_GRID_LABELS: u32 = 1 << 5;
    pub const ENVELOPE_ICON_ONLY: u32 = 1 << 6;
    pub const ENVELOPE_MOVES_DISPLAY: u32 = 1 << 7;
    pub const ENVELOPE_SNAP_TO_DEFAULT_ONLY: u32 = 1 << 8;

    pub const SLIDER_MOVES_DISPLAY: u32 = 1 << 1;
    pub const SLIDER_NON_GLOBAL: u32 = 1 << 2;

    pub const TOGGLE_SHOW_BUTTON: u32 = 1 << 1;
    pub const TOGGLE_SHOW_IN_CONTEXT_MENU: u32 = 1 << 2;
    pub const TOGGLE_MOVES_DISPLAY: u32 = 1 << 3;
}

/// A float slider: a capability bundle plus its default value.
#[derive(Clone, Copy)]
pub struct SliderSpec {
    pub default_value: f32,
    pub tweaker: TweakerHandle,
    pub icon: Icon,
    pub flags: u32,
}

impl SliderSpec {
    /// Fully interactive slider over `domain`.
    pub fn full(domain: TweakDomain, default_value: f32) -> Self {
        Self {
            default_value,
            tweaker: domain.tweaker(),
            icon: Icon::None,
            flags: 0,
        }
    }

    /// Slider that formats values but exposes no control.
    pub fn display_only(display: &'static dyn DisplayValue, default_value: f32) -> Self {
        Self {
            default_value,
            tweaker: TweakerHandle::DisplayOnly(display),
            icon: Icon::None,
            flags: 0,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }
}

/// An integer slider.
#[derive(Clone, Copy)]
pub struct IntSliderSpec {
    pub default_value: i32,
    pub tweaker: &'static dyn IntTweak,
    pub icon: Icon,
    pub flags: u32,
}

/// Step-size slider plus the default snap amount for an envelope editor.
#[derive(Clone, Copy)]
pub struct SnapSettings {
    pub step_size: SliderSpec,
    pub default_snap_amount: f32,
}

/// Everything the host needs to edit and evaluate one envelope parameter.
#[derive(Clone, Copy)]
pub struct EnvelopeSpec {
    pub default_value: f32,
    pub flags: u32,
    /// Formats the envelope's current value.
    pub display: TweakerHandle,
    /// Slider controlling the value at a selected breakpoint.
    pub value_slider: SliderSpec,
    /// Range minimum slider.
    pub min: SliderSpec,
    /// Range maximum slider.
    pub max: SliderSpec,
    pub snap: Option<SnapSettings>,
    /// Rounds values to the envelope's display resolution.
    pub stepify: Option<fn(f32) -> f32>,
    /// Blends toward step-quantized values; falls back to `stepify`.
    pub snap_value: Option<fn(f32, f32, f32) -> f32>,
    /// Recommended horizontal grid divisions by index.
    pub gridline: Option<fn(i32) -> f32>,
    /// Recommended step divisions by index and step size.
    pub stepline: Option<fn(i32, f32) -> f32>,
}

/// Option (drop-down) parameter.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    pub default_index: usize,
    pub options: Vec<&'static str>,
}

/// Toggle parameter.
#[derive(Debug, Clone, Copy)]
pub struct ToggleSpec {
    pub default_value: bool,
    pub icon: Icon,
    pub flags: u32,
}

/// Chord parameter. Editing happens entirely host-side, so this carries
/// presentation data only.
#[derive(Debug, Clone, Copy)]
pub struct ChordSpec {
    pub icon: Icon,
    pub flags: u32,
}

/// Tagged union over parameter kinds. Matched exhaustively everywhere.
#[derive(Clone)]
pub enum ParameterKind {
    Chord(ChordSpec),
    Envelope(EnvelopeSpec),
    Option(OptionSpec),
    Slider(SliderSpec),
    IntSlider(IntSliderSpec),
    Toggle(ToggleSpec),
}

/// Identity shared by every parameter kind.
#[derive(Debug, Clone, Copy)]
pub struct ParameterInfo {
    /// Stable addressing key; generators sharing a UUID share user
    /// modulation data.
    pub uuid: &'static str,
    pub name: &'static str,
    pub long_desc: Option<&'static str>,
    pub group_index: Option<usize>,
}

/// A parameter definition: identity plus kind-specific spec.
#[derive(Clone)]
pub struct Parameter {
    pub info: ParameterInfo,
    pub kind: ParameterKind,
}

/// Stable UUIDs of the standard parameters.
pub mod uuids {
    pub const CHORD_SCALE: &str = "860166f7-e839-448b-bd3b-a5bccbfe3ac1";
    pub const ENVELOPE_AMP: &str = "273e7c30-404b-4db6-ba97-20f33d49fe51";
    pub const ENVELOPE_FILTER_FREQUENCY: &str = "91181212-7072-41a9-9d11-3a265301a9a3";
    pub const ENVELOPE_FILTER_RESONANCE: &str = "4436fc1c-ae51-4580-b1fa-24b9c41425e3";
    pub const ENVELOPE_FORMANT: &str = "7b72dbef-e36d-4dce-958b-b0fa498ae41e";
    pub const ENVELOPE_MIX: &str = "6441d97c-37c9-4670-9049-d22fac68b023";
    pub const ENVELOPE_NOISE_AMOUNT: &str = "29d5ecb5-cb5d-4f19-afd3-835dd805682a";
    pub const ENVELOPE_NOISE_COLOR: &str = "30100123-7343-4386-9ed2-f913b9e1e571";
    pub const ENVELOPE_PAN: &str = "9c312a2c-a1b4-4a8d-ab68-07ea157c4574";
    pub const ENVELOPE_PITCH: &str = "ca2529db-e7bd-4019-9a07-22aee24526d1";
    pub const ENVELOPE_SPEED: &str = "02f68738-f54a-4f35-947b-c30e73896aa4";
    pub const OPTION_NOISE_MODE: &str = "e426cc55-306d-4561-99bc-003bb7707a93";
    pub const SLIDER_AMP: &str = "a6ae4ad0-2965-448c-ab04-ee378e0c4ab5";
    pub const SLIDER_NOISE_WIDTH: &str = "84e18fd3-03f1-49c2-a713-12e7e24dc03f";
    pub const SLIDER_PAN: &str = "b5bf03f3-17e2-4546-8cc2-e29790ea02a2";
    pub const SLIDER_PITCH: &str = "00859eeb-ce9e-43cd-9994-bff881a9d32d";
    pub const SLIDER_SAMPLE_OFFSET: &str = "88373752-7656-4d0e-8da2-a18c05af0106";
    pub const SLIDER_SPEED: &str = "04293c38-3a64-42b2-80f0-43a4f8190ba7";
    pub const TOGGLE_LOOP: &str = "dfa36d24-3c41-4a13-9b57-dc0116ef19f7";
    pub const TOGGLE_REVERSE: &str = "e7cacaf8-4afc-4e81-83de-50620fed4b13";
}

/// Standard parameter catalog.
pub mod catalog {
    use super::*;

    /// Step-size control for the pitch envelope editor: whole semitones
    /// by default, constrained to 0..60.
    pub struct PitchStepSize;

    impl DisplayValue for PitchStepSize {
        fn display(&self, value: f32) -> String {
            tweak::Pitch.display(value)
        }
    }

    impl Tweak for PitchStepSize {
        fn default_value(&self) -> f32 {
            1.0
        }

        fn constrain(&self, value: f32) -> f32 {
            value.clamp(0.0, 60.0)
        }

        fn increment(&self, value: f32, precise: bool) -> f32 {
            self.constrain(tweak::Pitch.increment(value, precise))
        }

        fn decrement(&self, value: f32, precise: bool) -> f32 {
            self.constrain(tweak::Pitch.decrement(value, precise))
        }

        fn drag(&self, value: f32, amount: i32, precise: bool) -> f32 {
            self.constrain(tweak::Pitch.drag(value, amount, precise))
        }

        fn from_string(&self, text: &str) -> Option<f32> {
            tweak::find_number(text)
        }
    }

    pub fn amp_slider() -> SliderSpec {
        SliderSpec::full(TweakDomain::Amp, 1.0)
            .with_icon(Icon::Amp)
            .with_flags(flags::SLIDER_MOVES_DISPLAY)
    }

    pub fn pan_slider() -> SliderSpec {
        SliderSpec::full(TweakDomain::Pan, 0.0).with_icon(Icon::Pan)
    }

    pub fn pitch_slider() -> SliderSpec {
        SliderSpec::full(TweakDomain::Pitch, 0.0)
            .with_icon(Icon::Pitch)
            .with_flags(flags::SLIDER_MOVES_DISPLAY)
    }

    pub fn speed_slider() -> SliderSpec {
        SliderSpec::full(TweakDomain::Speed, 1.0).with_flags(flags::SLIDER_MOVES_DISPLAY)
    }

    pub fn percentage_slider() -> SliderSpec {
        SliderSpec::full(TweakDomain::Percentage, 0.0)
    }

    pub fn percentage_bipolar_slider() -> SliderSpec {
        SliderSpec::full(TweakDomain::PercentageBipolar, 0.0)
    }

    pub fn filter_frequency_slider() -> SliderSpec {
        SliderSpec::full(TweakDomain::FilterFrequency, 0.0)
    }

    pub fn sample_offset_slider() -> IntSliderSpec {
        IntSliderSpec {
            default_value: 0,
            tweaker: &tweak::SampleOffset,
            icon: Icon::SampleOffset,
            flags: flags::SLIDER_MOVES_DISPLAY,
        }
    }

    fn speed_gridline(index: i32) -> f32 {
        convert::linear_to_speed(index as f32)
    }

    fn slider_parameter(uuid: &'static str, name: &'static str, spec: SliderSpec) -> Parameter {
        Parameter {
            info: ParameterInfo {
                uuid,
                name,
                long_desc: None,
                group_index: None,
            },
            kind: ParameterKind::Slider(spec),
        }
    }

    pub fn amp_slider_parameter() -> Parameter {
        slider_parameter(uuids::SLIDER_AMP, "Amp", amp_slider())
    }

    pub fn pan_slider_parameter() -> Parameter {
        slider_parameter(uuids::SLIDER_PAN, "Pan", pan_slider())
    }

    pub fn pitch_slider_parameter() -> Parameter {
        slider_parameter(uuids::SLIDER_PITCH, "Pitch", pitch_slider())
    }

    pub fn speed_slider_parameter() -> Parameter {
        slider_parameter(uuids::SLIDER_SPEED, "Speed", speed_slider())
    }

    pub fn sample_offset_slider_parameter() -> Parameter {
        Parameter {
            info: ParameterInfo {
                uuid: uuids::SLIDER_SAMPLE_OFFSET,
                name: "Sample Offset",
                long_desc: None,
                group_index: None,
            },
            kind: ParameterKind::IntSlider(sample_offset_slider()),
        }
    }

    pub fn amp_envelope() -> Parameter {
        Parameter {
            info: ParameterInfo {
                uuid: uuids::ENVELOPE_AMP,
                name: "Amp",
                long_desc: None,
                group_index: None,
            },
            kind: ParameterKind::Envelope(EnvelopeSpec {
                default_value: 1.0,
                flags: flags::ENVELOPE_MOVES_DISPLAY,
                display: TweakDomain::Amp.tweaker(),
                value_slider: amp_slider(),
                min: SliderSpec::display_only(&tweak::Amp, 0.0),
                max: SliderSpec::full(TweakDomain::Amp, 1.0),
                snap: None,
                stepify: Some(|v| tweak::Amp.stepify(v)),
                snap_value: None,
                gridline: Some(speed_gridline),
                stepline: None,
            }),
        }
    }

    pub fn pan_envelope() -> Parameter {
        Parameter {
            info: ParameterInfo {
                uuid: uuids::ENVELOPE_PAN,
                name: "Pan",
                long_desc: None,
                group_index: None,
            },
            kind: ParameterKind::Envelope(EnvelopeSpec {
                default_value: 0.0,
                flags: flags::ENVELOPE_SNAP_TO_DEFAULT_ONLY | flags::ENVELOPE_NO_GRID_LABELS,
                display: TweakDomain::Pan.tweaker(),
                value_slider: pan_slider(),
                min: SliderSpec::display_only(&tweak::Pan, -1.0),
                max: SliderSpec::display_only(&tweak::Pan, 1.0),
                snap: None,
                stepify: Some(|v| tweak::Pan.stepify(v)),
                snap_value: None,
                gridline: None,
                stepline: None,
            }),
        }
    }

    pub fn pitch_envelope() -> Parameter {
        Parameter {
            info: ParameterInfo {
                uuid: uuids::ENVELOPE_PITCH,
                name: "Pitch",
                long_desc: None,
                group_index: None,
            },
            kind: ParameterKind::Envelope(EnvelopeSpec {
                default_value: 0.0,
                flags: flags::ENVELOPE_MOVES_DISPLAY,
                display: TweakDomain::Pitch.tweaker(),
                value_slider: pitch_slider(),
                min: SliderSpec::full(TweakDomain::Pitch, -24.0),
                max: SliderSpec::full(TweakDomain::Pitch, 24.0),
                snap: Some(SnapSettings {
                    step_size: SliderSpec {
                        default_value: 1.0,
                        tweaker: TweakerHandle::Full(&PitchStepSize),
                        icon: Icon::None,
                        flags: 0,
                    },
                    default_snap_amount: 1.0,
                }),
                stepify: Some(|v| tweak::Pitch.stepify(v)),
                snap_value: Some(tweak::pitch::snap),
                gridline: Some(|index| (index * 12) as f32),
                stepline: Some(|index, step_size| step_size * index as f32),
            }),
        }
    }

    pub fn speed_envelope() -> Parameter {
        Parameter {
            info: ParameterInfo {
                uuid: uuids::ENVELOPE_SPEED,
                name: "Speed",
                long_desc: None,
                group_index: None,
            },
            kind: ParameterKind::Envelope(EnvelopeSpec {
                default_value: tweak::speed::NORMAL,
                flags: flags::ENVELOPE_MOVES_DISPLAY,
                display: TweakDomain::Speed.tweaker(),
                value_slider: speed_slider(),
                min: SliderSpec::full(TweakDomain::Speed, tweak::speed::FREEZE),
                max: SliderSpec::full(TweakDomain::Speed, 2.0),
                snap: None,
                stepify: None,
                snap_value: None,
                gridline: Some(speed_gridline),
                stepline: None,
            }),
        }
    }

    pub fn noise_amount_envelope() -> Parameter {
        Parameter {
            info: ParameterInfo {
                uuid: uuids::ENVELOPE_NOISE_AMOUNT,
                name: "Noise Amount",
                long_desc: None,
                group_index: None,
            },
            kind: ParameterKind::Envelope(EnvelopeSpec {
                default_value: 0.0,
                flags: 0,
                display: TweakDomain::Percentage.tweaker(),
                value_slider: percentage_slider(),
                min: SliderSpec::display_only(&tweak::Percentage, 0.0),
                max: SliderSpec::display_only(&tweak::Percentage, 1.0),
                snap: None,
                stepify: Some(|v| tweak::Percentage.stepify(v)),
                snap_value: None,
                gridline: None,
                stepline: None,
            }),
        }
    }

    pub fn noise_color_envelope() -> Parameter {
        Parameter {
            info: ParameterInfo {
                uuid: uuids::ENVELOPE_NOISE_COLOR,
                name: "Noise Color",
                long_desc: None,
                group_index: None,
            },
            kind: ParameterKind::Envelope(EnvelopeSpec {
                default_value: 0.5,
                flags: flags::ENVELOPE_NO_GRID_LABELS,
                display: TweakDomain::PercentageBipolar.tweaker(),
                value_slider: percentage_bipolar_slider(),
                min: SliderSpec::display_only(&tweak::PercentageBipolar, 0.0),
                max: SliderSpec::display_only(&tweak::PercentageBipolar, 1.0),
                snap: None,
                stepify: Some(|v| tweak::Percentage.stepify(v)),
                snap_value: None,
                gridline: None,
                stepline: None,
            }),
        }
    }

    pub fn filter_frequency_envelope() -> Parameter {
        Parameter {
            info: ParameterInfo {
                uuid: uuids::ENVELOPE_FILTER_FREQUENCY,
                name: "Frequency",
                long_desc: None,
                group_index: None,
            },
            kind: ParameterKind::Envelope(EnvelopeSpec {
                default_value: 0.52833,
                flags: 0,
                display: TweakDomain::FilterFrequency.tweaker(),
                value_slider: filter_frequency_slider(),
                min: SliderSpec::display_only(&tweak::FilterFrequency, 0.0),
                max: SliderSpec::display_only(&tweak::FilterFrequency, 1.0),
                snap: None,
                stepify: None,
                snap_value: None,
                gridline: None,
                stepline: None,
            }),
        }
    }

    pub fn resonance_envelope() -> Parameter {
        Parameter {
            info: ParameterInfo {
                uuid: uuids::ENVELOPE_FILTER_RESONANCE,
                name: "Resonance",
                long_desc: None,
                group_index: None,
            },
            kind: ParameterKind::Envelope(EnvelopeSpec {
                default_value: 0.0,
                flags: 0,
                display: TweakDomain::Percentage.tweaker(),
                value_slider: percentage_slider(),
                min: SliderSpec::display_only(&tweak::Percentage, 0.0),
                max: SliderSpec::display_only(&tweak::Percentage, 1.0),
                snap: None,
                stepify: Some(|v| tweak::Percentage.stepify(v)),
                snap_value: None,
                gridline: None,
                stepline: None,
            }),
        }
    }

    pub fn noise_width_slider() -> Parameter {
        Parameter {
            info: ParameterInfo {
                uuid: uuids::SLIDER_NOISE_WIDTH,
                name: "Noise Width",
                long_desc: None,
                group_index: None,
            },
            kind: ParameterKind::Slider(percentage_slider()),
        }
    }

    pub fn loop_toggle() -> Parameter {
        Parameter {
            info: ParameterInfo {
                uuid: uuids::TOGGLE_LOOP,
                name: "Loop",
                long_desc: None,
                group_index: None,
            },
            kind: ParameterKind::Toggle(ToggleSpec {
                default_value: false,
                icon: Icon::Loop,
                flags: flags::TOGGLE_SHOW_IN_CONTEXT_MENU
                    | flags::TOGGLE_SHOW_BUTTON
                    | flags::TOGGLE_MOVES_DISPLAY,
            }),
        }
    }

    pub fn reverse_toggle() -> Parameter {
        Parameter {
            info: ParameterInfo {
                uuid: uuids::TOGGLE_REVERSE,
                name: "Reverse",
                long_desc: None,
                group_index: None,
            },
            kind: ParameterKind::Toggle(ToggleSpec {
                default_value: false,
                icon: Icon::Reverse,
                flags: flags::TOGGLE_SHOW_IN_CONTEXT_MENU
                    | flags::TOGGLE_SHOW_BUTTON
                    | flags::TOGGLE_MOVES_DISPLAY,
            }),
        }
    }

    pub fn chord_scale() -> Parameter {
        Parameter {
            info: ParameterInfo {
                uuid: uuids::CHORD_SCALE,
                name: "Scale",
                long_desc: None,
                group_index: None,
            },
            kind: ParameterKind::Chord(ChordSpec {
                icon: Icon::PianoRoll,
                flags: 0,
            }),
        }
    }

    pub fn noise_mode_option() -> Parameter {
        Parameter {
            info: ParameterInfo {
                uuid: uuids::OPTION_NOISE_MODE,
                name: "Noise Mode",
                long_desc: None,
                group_index: None,
            },
            kind: ParameterKind::Option(OptionSpec {
                default_index: 0,
                options: vec!["Multiply", "Mix"],
            }),
        }
    }
}
