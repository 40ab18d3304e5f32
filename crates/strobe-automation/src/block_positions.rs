//! Block-relative position tracking.
//!
//! Hosts hand each processing block a vector of song positions plus a data
//! offset. [`BlockPositions`] stores the offset-adjusted positions and
//! remembers the last position of the previous block so the evaluator can
//! detect loop-backs.

/// Frames per processing block.
pub const BLOCK_SIZE: usize = 64;

/// Sentinel for "no position seen yet".
const NO_POSITION: i64 = i64::MAX;

/// Offset-adjusted positions for one processing block.
#[derive(Debug, Clone)]
pub struct BlockPositions {
    pub positions: [i64; BLOCK_SIZE],
    /// Last position of the previous block. `i64::MAX` before the first
    /// block, so the first comparison never reads as a loop-back.
    pub prev_pos: i64,
    pub data_offset: i64,
    pub count: usize,
}

impl Default for BlockPositions {
    fn default() -> Self {
        Self {
            positions: [NO_POSITION; BLOCK_SIZE],
            prev_pos: NO_POSITION,
            data_offset: 0,
            count: BLOCK_SIZE,
        }
    }
}

impl BlockPositions {
    /// Build from raw host positions, subtracting `data_offset` from each.
    pub fn new(positions: &[i64], data_offset: i64) -> Self {
        let mut out = Self::default();
        out.write(positions, data_offset);
        out
    }

    /// Load the next block. The previous block's final position is saved
    /// to `prev_pos` before it is overwritten.
    pub fn update(&mut self, positions: &[i64], data_offset: i64) {
        self.prev_pos = self.last();
        self.write(positions, data_offset);
    }

    fn write(&mut self, positions: &[i64], data_offset: i64) {
        let count = positions.len().min(BLOCK_SIZE);

        for (slot, pos) in self.positions.iter_mut().zip(&positions[..count]) {
            *slot = pos - data_offset;
        }

        self.count = count;
        self.data_offset = data_offset;
    }

    /// Final position of this block; the sentinel if the block is empty.
    pub fn last(&self) -> i64 {
        self.positions[self.count.saturating_sub(1)]
    }
}

/// Couples [`BlockPositions`] with the host's buffer serial so stale state
/// is dropped after a gap in processing.
#[derive(Debug, Default)]
pub struct BlockTracker {
    positions: BlockPositions,
    buffer_serial: u64,
}

impl BlockTracker {
    /// Start a new block. Returns `true` if at least one buffer passed
    /// without this unit processing, in which case position state was
    /// reset and the caller should clear its own render state too.
    pub fn begin_block(&mut self, buffer_serial: u64, positions: &[i64], data_offset: i64) -> bool {
        let skipped = buffer_serial > self.buffer_serial + 1;

        if skipped {
            self.positions = BlockPositions::default();
        }

        self.buffer_serial = buffer_serial;
        self.positions.update(positions, data_offset);

        skipped
    }

    pub fn positions(&self) -> &BlockPositions {
        &self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_block_has_no_prev_pos() {
        let mut positions = BlockPositions::default();
        positions.update(&[0, 1, 2, 3], 0);

        assert_eq!(positions.prev_pos, i64::MAX);
        assert_eq!(positions.count, 4);
        assert_eq!(positions.last(), 3);
    }

    #[test]
    fn test_update_saves_previous_last_position() {
        let mut positions = BlockPositions::default();
        positions.update(&[0, 1, 2, 3], 0);
        positions.update(&[4, 5, 6, 7], 0);

        assert_eq!(positions.prev_pos, 3);
        assert_eq!(positions.positions[0], 4);
    }

    #[test]
    fn test_data_offset_is_subtracted() {
        let positions = BlockPositions::new(&[100, 101, 102], 100);

        assert_eq!(&positions.positions[..3], &[0, 1, 2]);
        assert_eq!(positions.data_offset, 100);
    }

    #[test]
    fn test_tracker_resets_after_skipped_buffer() {
        let mut tracker = BlockTracker::default();

        assert!(!tracker.begin_block(1, &[0, 1], 0));
        assert!(!tracker.begin_block(2, &[2, 3], 0));
        assert_eq!(tracker.positions().prev_pos, 1);

        // Buffer 3 skipped, positions carried over from buffer 2 are stale
        assert!(tracker.begin_block(4, &[100, 101], 0));
        assert_eq!(tracker.positions().prev_pos, i64::MAX);
        assert_eq!(tracker.positions().positions[0], 100);
    }
}
