//! Command-line front ends for the gymcopy generators.
//!
//! Two binaries share this library: `audience-analyzer` and `hero-generator`.

pub mod commands;
pub mod logging;
pub mod output;
