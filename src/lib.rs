//! Small, independent demonstrations of shared-memory parallelism
//! primitives: a fork-join worker team, redundant and partitioned vector
//! addition, a private/shared reduction through a critical region, and a
//! serial prime-counting sweep used as a timing baseline.

pub mod error;
pub mod prime;
pub mod reduction;
pub mod team;
pub mod vector_add;

pub use error::{IntroErr, Result};
pub use team::Team;
