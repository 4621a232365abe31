//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod parallel;
pub mod single;
