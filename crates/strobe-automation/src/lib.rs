//! Block position tracking and envelope evaluation for Strobe.
//!
//! Generators receive song positions one block at a time and read
//! modulation values out of host-owned envelope data.
//!
//! # Example
//!
//! ```ignore
//! use strobe_automation::{evaluate_batch, BlockPositions};
//! use strobe_core::param::{Breakpoint, EnvelopeData};
//!
//! let points = [Breakpoint::new(0, 0.0), Breakpoint::new(100, 1.0)];
//! let data = EnvelopeData::new(&points, 0.0, 1.0, 0.0);
//!
//! let positions = BlockPositions::new(&host_positions, data_offset);
//! let mut out = [0.0f32; 64];
//! evaluate_batch(&data, &positions, &mut out);
//! ```

mod block_positions;
pub use block_positions::{BlockPositions, BlockTracker, BLOCK_SIZE};

mod envelope;
pub use envelope::{evaluate, evaluate_batch, EnvelopeParameter, SearchMode};
