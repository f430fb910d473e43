//! CSV Export functionality
//!
//! Exports both ledgers to CSV format: one row per record, expenses first,
//! each ledger newest-first (the same order the list commands show).

use std::io::Write;

use csv::Writer;

use crate::error::{TallyError, TallyResult};
use crate::services::Books;

/// Export every expense and income record to CSV
pub fn export_books_csv<W: Write>(books: &Books, writer: W) -> TallyResult<()> {
    let mut csv = Writer::from_writer(writer);

    csv.write_record(["Type", "Date", "Category", "Amount", "Note"])
        .map_err(|e| TallyError::Export(e.to_string()))?;

    for expense in books.expenses().entries() {
        let date = expense.date.to_string();
        let category = expense.category.to_string();
        let amount = format!("{:.2}", expense.amount);
        csv.write_record([
            "expense",
            date.as_str(),
            category.as_str(),
            amount.as_str(),
            expense.note.as_deref().unwrap_or(""),
        ])
        .map_err(|e| TallyError::Export(e.to_string()))?;
    }

    for income in books.incomes().entries() {
        let date = income.date.to_string();
        let category = income.category.to_string();
        let amount = format!("{:.2}", income.amount);
        csv.write_record([
            "income",
            date.as_str(),
            category.as_str(),
            amount.as_str(),
            income.note.as_deref().unwrap_or(""),
        ])
        .map_err(|e| TallyError::Export(e.to_string()))?;
    }

    csv.flush().map_err(|e| TallyError::Export(e.to_string()))
}
