//! Core parameter model and value-domain math.
//!
//! # Primary API
//!
//! - [`math`]: curve interpolation, unit conversions, easing windows
//! - [`tweak`]: per-domain interactive behavior ([`TweakDomain`],
//!   [`TweakerHandle`])
//! - [`snap_value`]: magnetic grid snapping for envelope editors
//! - [`param`]: parameter definitions and the standard catalog
//!
//! # Example
//!
//! ```ignore
//! use strobe_core::tweak::TweakDomain;
//!
//! let amp = TweakDomain::Amp.tweaker();
//! assert_eq!(amp.display(1.0), "0.0 dB");
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod math;

pub mod tweak;
pub use tweak::{DisplayValue, IntTweak, Tweak, TweakDomain, TweakerHandle};

mod snap;
pub use snap::snap_value;

pub mod param;
pub use param::{
    validate_breakpoints, Breakpoint, EnvelopeData, EnvelopeSpec, Parameter, ParameterInfo,
    ParameterKind, SliderSpec,
};
