use anyhow::Result;
use log::info;

use parallelism_intro::Team;
use parallelism_intro::reduction::critical_reduction;

const NWORKERS: usize = 4;

fn main() -> Result<()> {
    env_logger::init();

    let team = Team::new(NWORKERS);
    info!("reducing 0..10 with a team of {NWORKERS}");

    let total = critical_reduction(&team, 0..10)?;
    println!("total sum: {total}");

    Ok(())
}
