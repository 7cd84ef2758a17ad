use std::ops::Range;
use std::thread;

use log::debug;

use crate::error::{IntroErr, Result};

/// A fixed-size fork-join worker team.
///
/// Generalizes an OpenMP-style parallel region: [`Team::run`] spawns one
/// thread per worker, hands each its zero-based id, and joins all of them
/// before returning. Scoped threads let the workers borrow the caller's
/// data directly.
#[derive(Debug, Clone, Copy)]
pub struct Team {
    size: usize,
}

impl Team {
    /// Creates a team of `size` workers.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "a team needs at least one worker");
        Self { size }
    }

    /// A team sized to the machine, like an unconfigured parallel region.
    pub fn for_machine() -> Self {
        let size = thread::available_parallelism()
            .map(usize::from)
            .unwrap_or(4);
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Runs `f(worker_id)` once per worker, concurrently, and waits for
    /// every worker to finish before returning (the implicit join barrier
    /// at the end of the region).
    ///
    /// # Errors
    /// Returns `IntroErr::WorkerPanic` if any worker panicked; the rest of
    /// the team is still joined first.
    pub fn run<F>(&self, f: F) -> Result<()>
    where
        F: Fn(usize) + Sync,
    {
        let f = &f;
        debug!(nworkers = self.size; "forking worker team");

        thread::scope(|s| {
            let handles: Vec<_> = (0..self.size).map(|id| s.spawn(move || f(id))).collect();

            let mut panicked = None;
            for (worker, handle) in handles.into_iter().enumerate() {
                if handle.join().is_err() && panicked.is_none() {
                    panicked = Some(worker);
                }
            }

            match panicked {
                Some(worker) => Err(IntroErr::WorkerPanic { worker }),
                None => Ok(()),
            }
        })
    }

    /// The contiguous block of `[0, len)` assigned to `worker` under the
    /// team's static partition.
    pub fn block(&self, len: usize, worker: usize) -> Range<usize> {
        block_partition(len, self.size, worker)
    }
}

/// Static block partition of `[0, len)` across `nworkers` workers:
/// exhaustive, non-overlapping, block sizes differ by at most one.
pub fn block_partition(len: usize, nworkers: usize, worker: usize) -> Range<usize> {
    let base = len / nworkers;
    let extra = len % nworkers;
    let lo = worker * base + worker.min(extra);
    let hi = lo + base + usize::from(worker < extra);
    lo..hi
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn every_worker_runs_exactly_once() {
        let team = Team::new(4);
        let hits: Vec<AtomicUsize> = (0..4).map(|_| AtomicUsize::new(0)).collect();

        team.run(|worker| {
            hits[worker].fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();

        for hit in &hits {
            assert_eq!(hit.load(Ordering::Relaxed), 1);
        }
    }

    #[test]
    fn run_reports_a_panicking_worker() {
        let team = Team::new(2);
        let err = team
            .run(|worker| {
                if worker == 1 {
                    panic!("worker 1 down");
                }
            })
            .unwrap_err();

        assert!(matches!(err, IntroErr::WorkerPanic { worker: 1 }));
    }

    #[test]
    fn partition_is_exhaustive_and_disjoint() {
        for len in [0, 1, 7, 10, 16, 100] {
            for nworkers in [1, 2, 3, 4, 8] {
                let mut covered = vec![0usize; len];
                for worker in 0..nworkers {
                    for i in block_partition(len, nworkers, worker) {
                        covered[i] += 1;
                    }
                }
                assert!(covered.iter().all(|&c| c == 1), "len={len} nworkers={nworkers}");
            }
        }
    }

    #[test]
    fn partition_blocks_differ_by_at_most_one() {
        for worker in 0..4 {
            let block = block_partition(10, 4, worker);
            assert!(block.len() == 2 || block.len() == 3);
        }
    }
}
