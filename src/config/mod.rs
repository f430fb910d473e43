//! Configuration module for tally
//!
//! Path resolution only; tally has no settings file.

pub mod paths;

pub use paths::TallyPaths;
