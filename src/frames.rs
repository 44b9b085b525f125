//! Assignment of the global frame sequence to workers.  Every worker
//! derives its own contiguous block from nothing but the total frame
//! count, the group size, and its rank, so no messages are needed to
//! agree on the split.

use config::ConfigError;
use std::ops::Range;

/// The contiguous block of global frame indices owned by one worker.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameRange {
    start: usize,
    count: usize,
}

impl FrameRange {
    /// The block owned by worker `rank` of `size` when `total_frames`
    /// are split evenly: `total_frames / size` frames starting at
    /// `rank * (total_frames / size)`.  Blocks ascend with rank, which
    /// is what lets a rank-ordered gather reassemble the movie without
    /// any index remapping.
    ///
    /// Fails when the frames do not split evenly.  Every worker runs
    /// this check on its own, locally-known inputs; a group where only
    /// one rank validated would strand the others at the barrier when
    /// that rank exits early.
    pub fn assign(total_frames: usize, size: usize, rank: usize) -> Result<FrameRange, ConfigError> {
        assert!(size > 0 && rank < size);
        if total_frames % size != 0 {
            return Err(ConfigError::UnevenSplit {
                frames: total_frames,
                workers: size,
            });
        }
        let count = total_frames / size;
        Ok(FrameRange {
            start: rank * count,
            count,
        })
    }

    /// First global frame index in the block.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of frames in the block.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The block as an iterable range of global frame indices.
    pub fn frames(&self) -> Range<usize> {
        self.start..self.start + self.count
    }
}
