//! Interactive command loop
//!
//! Bridges stdin lines to the parser and the session books, and prints one
//! result block per command.

pub mod repl;

pub use repl::{execute, execute_at, Outcome, Repl};
