use anyhow::Result;
use log::info;

use parallelism_intro::Team;
use parallelism_intro::vector_add::{add_redundant, init_vectors};

const N: usize = 8;

fn main() -> Result<()> {
    env_logger::init();

    // One parallel region, default-sized team. The loop body is issued once
    // per worker over the full index range, as in the classroom original.
    let team = Team::for_machine();
    info!("adding vectors of length {N} with a team of {}", team.size());

    let (a, b) = init_vectors(N);
    let c = add_redundant(&team, &a, &b)?;
    debug_assert!(c.iter().all(|&value| value == N as i64));

    Ok(())
}
