//! Command grammar parser
//!
//! Turns raw argument text into typed commands. Stateless throughout: the
//! parser knows nothing about the ledgers and every function is a pure
//! mapping from input text (plus the current date) to a value or a single
//! error kind.
//!
//! - `fields`: free-order prefix-tagged field scanning
//! - `primitives`: amount, limit, date, index, month, and file name validation
//! - `command`: keyword aliases and per-command assembly

pub mod command;
pub mod fields;
pub mod primitives;

pub use command::{canonical, parse_line, parse_line_at, Command};
pub use primitives::{today, DatePolicy};
