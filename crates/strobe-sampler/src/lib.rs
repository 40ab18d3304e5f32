//! Off-render-path collaborators for Strobe generators.
//!
//! # Primary API
//!
//! - [`PreprocessWorker`] / [`AnalysisSlot`]: asynchronous sample
//!   analysis with cooperative abort and progress reporting
//! - [`InstanceGroupRegistry`]: shared data for synchronized playback
//!   instances
//!
//! # Example
//!
//! ```ignore
//! use strobe_sampler::{AnalysisSlot, PreprocessCallbacks, PreprocessWorker};
//!
//! let worker = PreprocessWorker::new(8);
//! let slot = Arc::new(AnalysisSlot::empty());
//! worker.submit(info, frames, Arc::clone(&slot), PreprocessCallbacks::noop());
//!
//! // Render side, later:
//! if let Some(analysis) = slot.load() { /* draw waveform */ }
//! ```

pub mod error;
pub use error::{Error, Result};

mod preprocess;
pub use preprocess::{
    analyze, AnalysisSlot, PreprocessCallbacks, PreprocessWorker, SampleAnalysis, SampleInfo,
};

mod group;
pub use group::{GroupId, InstanceGroupRegistry, INSTANCE_GROUP_SIZE};
