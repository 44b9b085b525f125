// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! One worker's whole contribution to the movie: claim a frame block,
//! rendezvous with the group, render, and feed the gather.

use collective::Collective;
use config::ConfigError;
use frames::FrameRange;
use render::render_range;
use std::time::{Duration, Instant};

/// What one worker walks away with after a run.
pub struct Harvest {
    /// The assembled movie, `Some` on the coordinator only.  Frames
    /// appear in ascending global order, each one row-major.
    pub movie: Option<Vec<u8>>,
    /// Wall time from just after the barrier until the gather
    /// returned, i.e. the compute phase without startup skew.
    pub elapsed: Duration,
}

/// Run one worker's share of the movie.
///
/// The frame-range assignment doubles as validation and runs before
/// the barrier: a worker must never enter a blocking collective while
/// a peer is exiting on an error, so every worker checks the split on
/// its own inputs first and they all fail together or none do.
pub fn collect_frames<C: Collective>(
    group: &C,
    width: usize,
    total_frames: usize,
) -> Result<Harvest, ConfigError> {
    let range = FrameRange::assign(total_frames, group.size(), group.rank())?;

    group.barrier();
    let start = Instant::now();

    let film = render_range(&range, width);
    let movie = group.gather(&film);

    Ok(Harvest {
        movie,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    extern crate crossbeam;

    use super::*;
    use collective::ThreadGroup;
    use frames::FrameRange;
    use render::render_range;

    fn run_group(size: usize, width: usize, frames: usize) -> Vec<Result<Harvest, ConfigError>> {
        let members = ThreadGroup::split(size);
        crossbeam::scope(|spawner| {
            let handles: Vec<_> = members
                .into_iter()
                .map(|member| spawner.spawn(move |_| collect_frames(&member, width, frames)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        })
        .unwrap()
    }

    #[test]
    fn coordinator_assembles_the_whole_movie() {
        let mut harvests = run_group(2, 10, 4);
        let coordinator = harvests.remove(0).unwrap();
        let movie = coordinator.movie.unwrap();
        assert_eq!(movie.len(), 4 * 10 * 10);
        for harvest in harvests {
            assert!(harvest.unwrap().movie.is_none());
        }
    }

    #[test]
    fn movie_is_identical_to_a_single_worker_render() {
        let solo = render_range(&FrameRange::assign(4, 1, 0).unwrap(), 10);

        let movie = run_group(2, 10, 4).remove(0).unwrap().movie.unwrap();
        assert_eq!(movie, solo);

        let movie = run_group(4, 10, 4).remove(0).unwrap().movie.unwrap();
        assert_eq!(movie, solo);
    }

    #[test]
    fn uneven_split_fails_on_every_rank_without_hanging() {
        // No rank may reach the barrier: if any did, it would wait
        // forever for the ranks that errored out.
        for result in run_group(2, 10, 5) {
            assert_eq!(
                result.err(),
                Some(ConfigError::UnevenSplit { frames: 5, workers: 2 })
            );
        }
    }
}
