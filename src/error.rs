//! Custom error types for tally
//!
//! One crate-wide error enum built with thiserror. Every validation failure
//! the parser or the ledger can report is its own variant with a distinct,
//! user-facing message, so callers can match on the exact failure kind.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for tally operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TallyError {
    /// A required field was absent, or a field marker was supplied with no value
    #[error("Missing field: {0}")]
    MissingField(String),

    /// The same field was supplied more than once
    #[error("Duplicate field: {0}")]
    DuplicateField(String),

    /// A field marker that this command does not know
    #[error("Unrecognized field: {0}")]
    UnrecognizedField(String),

    /// Non-whitespace text before the first field marker
    #[error("Unexpected text before the first field: {0}")]
    PreambleText(String),

    /// Non-whitespace text where no arguments were expected
    #[error("Unexpected trailing text: {0}")]
    TrailingText(String),

    /// The note field must come after every other field
    #[error("The note (n/) must be the last field")]
    DescriptionMisplaced,

    /// Text that does not parse as a number at all
    #[error("Not a number: {0}")]
    MalformedNumber(String),

    /// A number that parsed but is NaN or infinite
    #[error("Amount must be a finite number, got: {0}")]
    NonFiniteNumber(String),

    /// An amount of zero or less where a positive amount is required
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(String),

    /// A budget limit below zero
    #[error("Budget limit cannot be negative, got {0}")]
    NegativeLimit(String),

    /// Text that is not shaped like YYYY-MM-DD (or YYYY-MM for month filters)
    #[error("Dates must use the YYYY-MM-DD format, got: {0}")]
    MalformedDate(String),

    /// A well-shaped date that names no real calendar day
    #[error("No such calendar date: {0}")]
    InvalidCalendarDate(String),

    /// A date after the current day where future dates are not allowed
    #[error("Date cannot be in the future: {0}")]
    FutureDate(NaiveDate),

    /// Text that is not an integer index
    #[error("Not a valid index: {0}")]
    MalformedIndex(String),

    /// An index beyond what the platform can represent
    #[error("Index is too large: {0}")]
    IndexTooLarge(String),

    /// An index below 1
    #[error("Index must be at least 1, got: {0}")]
    IndexTooSmall(String),

    /// A delete or modify against a ledger with no records
    #[error("The list is empty")]
    EmptyList,

    /// An index outside the current list
    #[error("Index {index} is out of range (the list has {len} records)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A category name outside the closed set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// delete-budget on a category with no configured limit
    #[error("No budget is set for category: {0}")]
    NoBudgetSet(String),

    /// A command keyword outside the known set
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// An export file name with disallowed characters
    #[error("Invalid export file name: {0}")]
    InvalidFilename(String),

    /// Persistence failures
    #[error("Storage error: {0}")]
    Storage(String),

    /// CSV export failures
    #[error("Export error: {0}")]
    Export(String),
}

/// Result type alias for tally operations
pub type TallyResult<T> = Result<T, TallyError>;
