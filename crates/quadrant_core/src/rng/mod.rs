//! # Random Number Generation
//!
//! This module provides the random number generation facilities for the
//! estimation engine: the [`Xoshiro256StarStar`] generator and the
//! [`StreamSeeder`] that derives decorrelated per-worker seeds from a
//! single base seed.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every stream is fully determined by its seed
//! - **Independence**: each worker owns one generator; state is never shared
//! - **Ecosystem compatibility**: the generator implements the `rand_core`
//!   traits (`RngCore`, `SeedableRng`) so it composes with the `rand` crate
//!
//! ## Usage Example
//!
//! ```rust
//! use quadrant_core::rng::{StreamSeeder, Xoshiro256StarStar};
//! use rand::SeedableRng;
//!
//! let seeder = StreamSeeder::new(12345);
//! let mut rng = Xoshiro256StarStar::seed_from_u64(seeder.derive(0));
//!
//! let value = rng.next_double();
//! assert!((0.0..1.0).contains(&value));
//! ```

mod seed;
mod xoshiro;

// Public re-exports
pub use seed::{StreamSeeder, SEED_MULTIPLIER};
pub use xoshiro::Xoshiro256StarStar;
