//! # Strobe - Modulation Parameter Engine
//!
//! Parameter model and modulation evaluation built from modular subsystems.
//!
//! ## Architecture
//!
//! Strobe is an umbrella crate that coordinates:
//! - **strobe-core** - Parameter model (tweak domains, curve math, snap,
//!   standard catalog)
//! - **strobe-automation** - Block position tracking and envelope
//!   evaluation
//! - **strobe-sampler** - Off-render-path collaborators (preprocessing
//!   worker, instance groups)
//!
//! ## Quick Start
//!
//! ```ignore
//! use strobe::{evaluate_batch, BlockPositions, Breakpoint, EnvelopeData};
//!
//! let points = [Breakpoint::new(0, 0.0), Breakpoint::new(100, 1.0)];
//! let data = EnvelopeData::new(&points, 0.0, 1.0, 0.0);
//!
//! let positions = BlockPositions::new(&host_positions, data_offset);
//! let mut out = [0.0f32; 64];
//! evaluate_batch(&data, &positions, &mut out);
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - Everything enabled
//! - `automation` - Position tracking and envelope evaluation
//! - `sampler` - Preprocessing and instance groups

/// Re-export of strobe-core for direct access
pub use strobe_core as core;

// Parameter model
pub use strobe_core::{
    math,
    param::{self, catalog},
    snap_value,
    tweak,
    validate_breakpoints,
    Breakpoint,
    DisplayValue,
    EnvelopeData,
    EnvelopeSpec,
    IntTweak,
    Parameter,
    ParameterInfo,
    ParameterKind,
    SliderSpec,
    Tweak,
    TweakDomain,
    TweakerHandle,
};

#[cfg(feature = "automation")]
pub use strobe_automation::{
    evaluate, evaluate_batch, BlockPositions, BlockTracker, EnvelopeParameter, SearchMode,
    BLOCK_SIZE,
};

#[cfg(feature = "sampler")]
pub use strobe_sampler::{
    analyze, AnalysisSlot, InstanceGroupRegistry, PreprocessCallbacks, PreprocessWorker,
    SampleAnalysis, SampleInfo, INSTANCE_GROUP_SIZE,
};

mod error;
pub use error::{Error, Result};
