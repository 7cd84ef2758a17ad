//! Private/shared reduction through a critical region.

use std::ops::Range;

use log::debug;
use parking_lot::Mutex;

use crate::Result;
use crate::team::Team;

/// Sums `range` across the team.
///
/// The range is block-partitioned; each worker reduces its slice into a
/// private accumulator, reports it, then merges it into the shared total
/// inside the critical region. The total is read only after the join
/// barrier, so it never misses a merge.
///
/// # Errors
/// Returns `IntroErr::WorkerPanic` if a worker panicked.
pub fn critical_reduction(team: &Team, range: Range<i64>) -> Result<i64> {
    let start = range.start;
    let len = usize::try_from(range.end - range.start).unwrap_or(0);
    debug!(nworkers = team.size(), len = len; "critical reduction");

    let total = Mutex::new(0i64);

    team.run(|worker| {
        let mut local_sum = 0i64;
        for i in team.block(len, worker) {
            local_sum += start + i as i64;
        }
        println!("Thread {worker}, local_sum = {local_sum}");
        *total.lock() += local_sum;
    })?;

    Ok(total.into_inner())
}
