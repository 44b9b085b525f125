//! Whole-run settings and the configuration errors that reject them.
//! Validation is symmetric: it depends only on values every worker
//! already holds, so every worker reaches the same verdict without
//! hearing from any other.

/// A run that has passed validation: frame width, total frame count,
/// and worker-group size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings {
    /// Frames are `width` by `width` pixels.
    pub width: usize,
    /// Total number of frames in the movie.
    pub frames: usize,
    /// Number of cooperating workers.
    pub workers: usize,
}

/// Everything that can be wrong with a run before any work starts.
/// All of these are fatal; none can occur once rendering has begun.
#[derive(Debug, Fail, PartialEq)]
pub enum ConfigError {
    /// The frame width is below the supported minimum.
    #[fail(display = "frame_width must be at least 10, got {}", width)]
    FrameTooNarrow {
        /// The rejected width.
        width: usize,
    },

    /// A movie needs at least one frame.
    #[fail(display = "num_frames must be at least 1")]
    NoFrames,

    /// A worker group needs at least one member.
    #[fail(display = "worker count must be at least 1")]
    NoWorkers,

    /// The frames cannot be split evenly across the workers.
    #[fail(
        display = "the number of frames ({}) is not a multiple of the worker count ({})",
        frames, workers
    )]
    UnevenSplit {
        /// Total frame count.
        frames: usize,
        /// Worker-group size.
        workers: usize,
    },
}

impl Settings {
    /// Validate a run.  The divisibility requirement is what keeps
    /// every worker's block the same size, which the gather relies on.
    pub fn new(width: usize, frames: usize, workers: usize) -> Result<Settings, ConfigError> {
        if width < 10 {
            return Err(ConfigError::FrameTooNarrow { width });
        }
        if frames < 1 {
            return Err(ConfigError::NoFrames);
        }
        if workers < 1 {
            return Err(ConfigError::NoWorkers);
        }
        if frames % workers != 0 {
            return Err(ConfigError::UnevenSplit { frames, workers });
        }
        Ok(Settings {
            width,
            frames,
            workers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_reference_run() {
        let s = Settings::new(10, 4, 2).unwrap();
        assert_eq!(s, Settings { width: 10, frames: 4, workers: 2 });
    }

    #[test]
    fn rejects_narrow_frames() {
        assert_eq!(
            Settings::new(9, 4, 2),
            Err(ConfigError::FrameTooNarrow { width: 9 })
        );
    }

    #[test]
    fn rejects_empty_movies_and_empty_groups() {
        assert_eq!(Settings::new(10, 0, 2), Err(ConfigError::NoFrames));
        assert_eq!(Settings::new(10, 4, 0), Err(ConfigError::NoWorkers));
    }

    #[test]
    fn rejects_uneven_splits() {
        assert_eq!(
            Settings::new(10, 5, 2),
            Err(ConfigError::UnevenSplit { frames: 5, workers: 2 })
        );
    }

    #[test]
    fn errors_render_one_line_diagnostics() {
        let msg = format!("{}", ConfigError::UnevenSplit { frames: 5, workers: 2 });
        assert_eq!(
            msg,
            "the number of frames (5) is not a multiple of the worker count (2)"
        );
        assert!(!msg.contains('\n'));
    }
}
