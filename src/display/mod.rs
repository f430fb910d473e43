//! Display formatting for terminal output
//!
//! Formats records, lists, budget statuses, and totals for the read-loop.
//! Pure string building; printing is the caller's job.

pub mod record;

pub use record::{
    format_amount, format_balance, format_budget_status, format_budget_table, format_expense_list,
    format_income_list, format_record, format_summary,
};
