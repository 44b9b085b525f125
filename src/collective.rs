// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The process-coordination seam: what the renderer needs from a
//! worker group, and a thread-backed group that provides it.
//!
//! The renderer only ever asks four things of its group: how big is
//! it, which member am I, wait for everyone, and hand all the local
//! buffers to rank 0 in rank order.  `Collective` captures exactly
//! that, so the same collection code runs unchanged whether the group
//! is the `ThreadGroup` here or some other rendezvous layer.

use crossbeam::channel;
use std::sync::{Arc, Barrier};

/// A fixed-size group of cooperating workers, seen from one member.
pub trait Collective {
    /// Number of workers in the group.
    fn size(&self) -> usize;

    /// This member's zero-based rank.
    fn rank(&self) -> usize;

    /// Whether this member is the coordinator (rank 0), the only one
    /// that receives the gathered result.
    fn is_coordinator(&self) -> bool {
        self.rank() == 0
    }

    /// Block until every member of the group has called `barrier`.
    fn barrier(&self);

    /// One-shot all-to-one gather.  Every member contributes a local
    /// buffer of the same length; the coordinator receives the
    /// concatenation ordered by ascending rank and gets `Some`, every
    /// other member gets `None` and never holds the full buffer.
    fn gather(&self, local: &[u8]) -> Option<Vec<u8>>;
}

/// A worker group backed by threads in one process.  Members share a
/// barrier and a channel to rank 0; nothing else is shared, so each
/// member behaves like the private-memory process it stands in for.
pub struct ThreadGroup {
    size: usize,
    rank: usize,
    fence: Arc<Barrier>,
    uplink: channel::Sender<(usize, Vec<u8>)>,
    inbox: Option<channel::Receiver<(usize, Vec<u8>)>>,
}

impl ThreadGroup {
    /// Create a group of `size` members, one handle per rank.  Each
    /// handle is moved into its own worker thread; only the rank 0
    /// handle carries the receiving end of the gather channel.
    pub fn split(size: usize) -> Vec<ThreadGroup> {
        assert!(size > 0);
        let fence = Arc::new(Barrier::new(size));
        let (uplink, inbox) = channel::unbounded();
        (0..size)
            .map(|rank| ThreadGroup {
                size,
                rank,
                fence: fence.clone(),
                uplink: uplink.clone(),
                inbox: if rank == 0 { Some(inbox.clone()) } else { None },
            })
            .collect()
    }
}

impl Collective for ThreadGroup {
    fn size(&self) -> usize {
        self.size
    }

    fn rank(&self) -> usize {
        self.rank
    }

    fn barrier(&self) {
        self.fence.wait();
    }

    fn gather(&self, local: &[u8]) -> Option<Vec<u8>> {
        match self.inbox {
            Some(ref inbox) => {
                let chunk = local.len();
                let mut whole = vec![0 as u8; chunk * self.size];
                whole[..chunk].copy_from_slice(local);
                for _ in 1..self.size {
                    let (rank, piece) = inbox
                        .recv()
                        .expect("a worker dropped out before the gather");
                    assert_eq!(piece.len(), chunk, "uneven gather contribution");
                    whole[rank * chunk..(rank + 1) * chunk].copy_from_slice(&piece);
                }
                Some(whole)
            }
            None => {
                self.uplink
                    .send((self.rank, local.to_vec()))
                    .expect("the coordinator dropped out before the gather");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate crossbeam;

    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn gather_orders_contributions_by_rank() {
        let members = ThreadGroup::split(3);
        let movies = crossbeam::scope(|spawner| {
            let handles: Vec<_> = members
                .into_iter()
                .map(|member| {
                    spawner.spawn(move |_| {
                        member.barrier();
                        // Deliver out of rank order on purpose: higher
                        // ranks finish "faster" than rank 1.
                        if member.rank() == 1 {
                            thread::sleep(Duration::from_millis(20));
                        }
                        member.gather(&[member.rank() as u8; 4])
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        })
        .unwrap();

        assert_eq!(
            movies[0],
            Some(vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2])
        );
        assert_eq!(movies[1], None);
        assert_eq!(movies[2], None);
    }

    #[test]
    fn singleton_group_gathers_itself() {
        let mut members = ThreadGroup::split(1);
        let member = members.pop().unwrap();
        assert!(member.is_coordinator());
        assert_eq!(member.gather(&[7, 8, 9]), Some(vec![7, 8, 9]));
    }

    #[test]
    fn ranks_are_assigned_in_order() {
        let members = ThreadGroup::split(4);
        for (i, member) in members.iter().enumerate() {
            assert_eq!(member.rank(), i);
            assert_eq!(member.size(), 4);
            assert_eq!(member.is_coordinator(), i == 0);
        }
    }
}
