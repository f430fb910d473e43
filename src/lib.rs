//! tally - terminal-based expense and income tracker
//!
//! This library provides the core functionality for the tally application:
//! a single-user, in-memory ledger driven by prefix-tagged commands
//! (`add-expense a/12.50 c/food d/2025-10-10 n/lunch`), with per-category
//! budget tracking and JSON persistence between sessions.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the session data file
//! - `error`: Custom error types
//! - `models`: Core data models (categories, records, the ordered ledger)
//! - `parser`: The free-order prefix-tagged command grammar
//! - `services`: Business logic (the books, budget tracking, atomic modify)
//! - `display`: Text rendering for terminal output
//! - `storage`: JSON file persistence
//! - `export`: CSV export
//! - `cli`: The interactive read-loop
//!
//! # Example
//!
//! ```rust
//! use tally::parser::parse_line_at;
//! use tally::services::Books;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
//! let command = parse_line_at("add-expense a/12.50 c/food d/2025-10-10", today).unwrap();
//! let mut books = Books::new();
//! # let _ = (&command, &mut books);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;
pub mod services;
pub mod storage;

pub use error::{TallyError, TallyResult};
