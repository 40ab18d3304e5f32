//! Envelope evaluation.
//!
//! Values between breakpoints are linearly interpolated, with each
//! endpoint clamped into the envelope's range before interpolation. A
//! scalar query returns the hint index of the segment it landed in, which
//! a subsequent forward query can resume from; [`evaluate_batch`] threads
//! that hint through a whole block and falls back to a binary search when
//! the host loops back to an earlier song position.

use strobe_core::math;
use strobe_core::param::{EnvelopeData, EnvelopeSpec, Parameter, ParameterInfo, ParameterKind};

use crate::block_positions::BlockPositions;

/// How to locate the active segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Binary search over the whole point list. Used for cold queries and
    /// after a loop-back.
    Binary,
    /// Linear scan from a hint index. Fastest when positions move forward.
    Forward,
}

/// Evaluate one position. Returns the value and the segment hint for the
/// next forward query.
///
/// `search_start` restricts the search to points at or after that index;
/// passing a hint from a later position than `position` yields the value
/// at the hinted segment rather than the true one, so callers reset the
/// hint to zero whenever positions move backward.
pub fn evaluate(
    data: &EnvelopeData,
    position: i64,
    search_start: usize,
    mode: SearchMode,
) -> (f32, usize) {
    let points = data.points;

    if points.is_empty() {
        return (data.clamp(data.default), 0);
    }

    if points.len() == 1 {
        return (data.clamp(points[0].y), 0);
    }

    // A hint from before the curve was shortened may point past the end
    let search_start = search_start.min(points.len());
    let range = &points[search_start..];
    let rel = match mode {
        SearchMode::Binary => range.partition_point(|p| p.x <= position),
        SearchMode::Forward => range
            .iter()
            .position(|p| p.x > position)
            .unwrap_or(range.len()),
    };

    if rel == 0 {
        match range.first() {
            // Position is at or before the start of the searched range
            Some(first) => return (data.clamp(first.y), 0),
            // Empty range; hold the final value
            None => return (data.clamp(points[points.len() - 1].y), points.len() - 2),
        }
    }

    let pos = search_start + rel;

    if pos == points.len() {
        // No points to the right; hold the final value
        return (data.clamp(points[pos - 1].y), pos - 2);
    }

    let p0 = points[pos - 1];
    let p1 = points[pos];

    if p1.x == p0.x {
        // Degenerate segment steps straight to the later point
        return (data.clamp(p1.y), pos - 1);
    }

    let r = (position - p0.x) as f64 / (p1.x - p0.x) as f64;
    let value = math::lerp(data.clamp(p0.y), data.clamp(p1.y), r as f32);

    (value, pos - 1)
}

/// Evaluate a whole block of positions into `out`.
///
/// Positions within a block normally move forward, so each query resumes
/// from the previous one's segment hint. A position earlier than its
/// predecessor (or than the previous block's final position) means the
/// host looped back, and that query re-searches from the start.
pub fn evaluate_batch(data: &EnvelopeData, positions: &BlockPositions, out: &mut [f32]) {
    let n = positions.count.min(out.len());
    let mut left = 0;
    let mut reset = false;
    let mut prev_pos = positions.prev_pos;

    for i in 0..n {
        let pos = positions.positions[i];

        if pos < prev_pos {
            reset = true;
        }

        let (value, hint) = if reset {
            reset = false;
            evaluate(data, pos, 0, SearchMode::Binary)
        } else {
            evaluate(data, pos, left, SearchMode::Forward)
        };

        out[i] = value;
        left = hint;
        prev_pos = pos;
    }
}

/// An envelope parameter definition bound to the evaluator.
///
/// Wraps the envelope kind of a [`Parameter`] and forwards the optional
/// editor hooks with their documented fallbacks.
#[derive(Clone)]
pub struct EnvelopeParameter {
    info: ParameterInfo,
    spec: EnvelopeSpec,
}

impl EnvelopeParameter {
    /// Returns `None` for non-envelope parameters.
    pub fn new(parameter: &Parameter) -> Option<Self> {
        match &parameter.kind {
            ParameterKind::Envelope(spec) => Some(Self {
                info: parameter.info,
                spec: *spec,
            }),
            _ => None,
        }
    }

    pub fn info(&self) -> &ParameterInfo {
        &self.info
    }

    pub fn spec(&self) -> &EnvelopeSpec {
        &self.spec
    }

    pub fn default_value(&self) -> f32 {
        self.spec.default_value
    }

    pub fn flags(&self) -> u32 {
        self.spec.flags
    }

    pub fn display(&self, value: f32) -> String {
        self.spec.display.display(value)
    }

    pub fn stepify(&self, value: f32) -> f32 {
        match self.spec.stepify {
            Some(f) => f(value),
            None => value,
        }
    }

    /// Snap toward the step grid; envelopes without a snap hook fall back
    /// to plain stepify.
    pub fn snap_value(&self, value: f32, step_size: f32, snap_amount: f32) -> f32 {
        match self.spec.snap_value {
            Some(f) => f(value, step_size, snap_amount),
            None => self.stepify(value),
        }
    }

    pub fn gridline(&self, index: i32) -> Option<f32> {
        self.spec.gridline.map(|f| f(index))
    }

    pub fn stepline(&self, index: i32, step_size: f32) -> Option<f32> {
        self.spec.stepline.map(|f| f(index, step_size))
    }

    /// Cold scalar query.
    pub fn evaluate(&self, data: &EnvelopeData, position: i64) -> f32 {
        evaluate(data, position, 0, SearchMode::Binary).0
    }

    /// Block query; see [`evaluate_batch`].
    pub fn evaluate_block(&self, data: &EnvelopeData, positions: &BlockPositions, out: &mut [f32]) {
        evaluate_batch(data, positions, out);
    }
}
