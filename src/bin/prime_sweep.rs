use anyhow::Result;
use log::info;

use parallelism_intro::prime::{SweepConfig, sweep, timestamp};

fn main() -> Result<()> {
    env_logger::init();

    println!("{}", timestamp());
    println!();
    println!("prime_sweep");
    println!("  Serial prime-counting baseline, naive trial division.");

    let configs = [
        SweepConfig::new(1, 131_072, 2)?,
        SweepConfig::new(5, 500_000, 10)?,
    ];

    for config in &configs {
        let records = sweep(config);
        info!("sweep finished after {} steps", records.len());
    }

    println!();
    println!("prime_sweep");
    println!("  Normal end of execution.");
    println!();
    println!("{}", timestamp());

    Ok(())
}
