//! Export module for tally
//!
//! Writes the session's records to spreadsheet-compatible CSV.

pub mod csv;

pub use csv::export_books_csv;
