//! Core data models for tally
//!
//! This module contains the data structures of the ledger domain: record
//! categories, expense and income records, the ordered ledger container, and
//! the month-filter value.

pub mod category;
pub mod ledger;
pub mod month;
pub mod record;

pub use category::{ExpenseCategory, IncomeCategory};
pub use ledger::Ledger;
pub use month::YearMonth;
pub use record::{Expense, ExpensePatch, Income, IncomePatch, LedgerEntry};
