//! CLI library components for the `jsv` validation error reporter.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod report;
