//! Serial prime-counting baseline.
//!
//! `prime_number` is deliberately naive trial division with no square-root
//! cutoff and no sieve: the sweep exists as a serial baseline for timing
//! comparisons, and an optimized test would invalidate it.

use std::time::Instant;

use chrono::Local;
use log::debug;

use crate::error::{IntroErr, Result};

/// Counts the primes in `[2, n]` by trial division: `i` is prime iff no `j`
/// in `[2, i)` divides it evenly.
///
/// Known values: 1 → 0, 10 → 4, 100 → 25, 1_000 → 168, 10_000 → 1_229.
pub fn prime_number(n: u32) -> u32 {
    let mut total = 0;
    for i in 2..=n {
        let mut prime = true;
        for j in 2..i {
            if i % j == 0 {
                prime = false;
                break;
            }
        }
        total += u32::from(prime);
    }
    total
}

/// One timed step of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRecord {
    pub n: u32,
    pub primes: u32,
    pub seconds: f64,
}

/// Bounds for a geometric sweep: `n` starts at `n_lo` and is multiplied by
/// `n_factor` after each step while `n <= n_hi`.
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    n_lo: u32,
    n_hi: u32,
    n_factor: u32,
}

impl SweepConfig {
    /// # Errors
    /// `IntroErr::InvalidSweep` if a bound is zero or the factor is not
    /// greater than one.
    pub fn new(n_lo: u32, n_hi: u32, n_factor: u32) -> Result<Self> {
        if n_lo == 0 || n_hi == 0 {
            return Err(IntroErr::InvalidSweep {
                detail: "bounds must be positive",
            });
        }
        if n_factor < 2 {
            return Err(IntroErr::InvalidSweep {
                detail: "factor must be greater than one",
            });
        }
        Ok(Self { n_lo, n_hi, n_factor })
    }
}

/// Runs the sweep, printing one fixed-width line per step and returning the
/// records for inspection.
pub fn sweep(config: &SweepConfig) -> Vec<SweepRecord> {
    debug!(n_lo = config.n_lo, n_hi = config.n_hi, n_factor = config.n_factor; "starting sweep");

    println!();
    println!("  Counting the primes from 1 to N by trial division.");
    println!();
    println!("         N        Pi          Time");
    println!();

    let mut records = Vec::new();
    let mut n = config.n_lo;

    while n <= config.n_hi {
        let clock = Instant::now();
        let primes = prime_number(n);
        let seconds = clock.elapsed().as_secs_f64();

        println!("  {n:8}  {primes:8}  {seconds:14.6}");
        records.push(SweepRecord { n, primes, seconds });

        n *= config.n_factor;
    }

    records
}

/// The current local time as `31 May 2001 09:45:54 AM`.
pub fn timestamp() -> String {
    Local::now().format("%d %B %Y %I:%M:%S %p").to_string()
}
