//! Element-wise vector addition by a worker team.
//!
//! Two variants are provided. [`add_redundant`] reproduces the classroom
//! original faithfully: the summation loop is issued once per worker with no
//! index partitioning, so every worker computes and stores every `C[i]` and
//! emits its own diagnostic line per index. The stores all carry the same
//! value, which keeps the final contents deterministic; atomics make the
//! concurrent stores well-defined. [`add_partitioned`] is the work-sharing
//! version the original evidently meant to write: each worker owns a disjoint
//! block of the output.

use std::mem;
use std::sync::atomic::{AtomicI64, Ordering};
use std::thread;

use log::debug;

use crate::error::{IntroErr, Result};
use crate::team::Team;

/// Builds the two input buffers: `A[i] = i` and `B[i] = n - i`.
///
/// The output buffer is produced by the add operation itself, zeroed.
pub fn init_vectors(n: usize) -> (Vec<i64>, Vec<i64>) {
    let a: Vec<i64> = (0..n as i64).collect();
    let b: Vec<i64> = (0..n as i64).map(|i| n as i64 - i).collect();
    (a, b)
}

/// Computes `C[i] = A[i] + B[i]` with every worker redundantly covering the
/// full index range, one diagnostic line per (worker, index) pair.
///
/// # Errors
/// `IntroErr::LengthMismatch` if the inputs disagree in length.
pub fn add_redundant(team: &Team, a: &[i64], b: &[i64]) -> Result<Vec<i64>> {
    check_lengths(a, b)?;
    let n = a.len();
    debug!(nworkers = team.size(), len = n; "redundant vector add");

    let c: Vec<AtomicI64> = (0..n).map(|_| AtomicI64::new(0)).collect();
    let c = &c;

    team.run(|worker| {
        for i in 0..n {
            c[i].store(a[i] + b[i], Ordering::Relaxed);
            println!("Thread {worker} calculating C[{i}] = A[{i}] + B[{i}]");
        }
    })?;

    Ok(c.iter().map(|slot| slot.load(Ordering::Relaxed)).collect())
}

/// Computes `C[i] = A[i] + B[i]` with the index range block-partitioned
/// across the team, each worker writing only its own disjoint chunk.
///
/// # Errors
/// `IntroErr::LengthMismatch` if the inputs disagree in length.
pub fn add_partitioned(team: &Team, a: &[i64], b: &[i64]) -> Result<Vec<i64>> {
    check_lengths(a, b)?;
    let n = a.len();
    debug!(nworkers = team.size(), len = n; "partitioned vector add");

    let mut c = vec![0i64; n];

    thread::scope(|s| {
        let mut rest: &mut [i64] = &mut c;
        let mut handles = Vec::with_capacity(team.size());

        for worker in 0..team.size() {
            let block = team.block(n, worker);
            let (chunk, tail) = mem::take(&mut rest).split_at_mut(block.len());
            rest = tail;

            let lo = block.start;
            handles.push(s.spawn(move || {
                for (k, slot) in chunk.iter_mut().enumerate() {
                    let i = lo + k;
                    *slot = a[i] + b[i];
                    println!("Thread {worker} calculating C[{i}] = A[{i}] + B[{i}]");
                }
            }));
        }

        for (worker, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() {
                return Err(IntroErr::WorkerPanic { worker });
            }
        }
        Ok(())
    })?;

    Ok(c)
}

fn check_lengths(a: &[i64], b: &[i64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(IntroErr::LengthMismatch {
            got: b.len(),
            expected: a.len(),
        });
    }
    Ok(())
}
