//! The interactive read-loop
//!
//! Reads one command per line, parses it, applies it to the books, and prints
//! the rendered result. Command execution is a pure-ish function over
//! (books, command) so it can be tested without a terminal; the loop itself
//! only does I/O.
//!
//! Every error is printed and the loop continues; no command failure ends the
//! session. The books are saved once, on exit or end of input.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::display::{
    format_amount, format_balance, format_budget_status, format_budget_table, format_expense_list,
    format_income_list, format_record, format_summary,
};
use crate::error::{TallyError, TallyResult};
use crate::export::export_books_csv;
use crate::models::YearMonth;
use crate::parser::{self, Command};
use crate::services::Books;
use crate::storage;

/// What executing one command produced
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Text to show the user
    Message(String),
    /// The session is over
    Quit,
}

/// Apply one parsed command to the books, against the current local date.
pub fn execute(books: &mut Books, command: Command) -> TallyResult<Outcome> {
    execute_at(books, command, parser::today())
}

/// Apply one parsed command with an explicit "today" (used directly by tests).
pub fn execute_at(books: &mut Books, command: Command, today: NaiveDate) -> TallyResult<Outcome> {
    let message = match command {
        Command::AddExpense(expense) => {
            let line = format!("Recorded expense: {}", format_record(&expense));
            let status = books.add_expense(expense);
            match format_budget_status(&status) {
                Some(warning) => format!("{}\n{}", line, warning),
                None => line,
            }
        }
        Command::AddIncome(income) => {
            let line = format!("Recorded income: {}", format_record(&income));
            books.add_income(income);
            line
        }
        Command::DeleteExpense { index } => {
            let removed = books.delete_expense(index)?;
            format!("Deleted expense: {}", format_record(&removed))
        }
        Command::DeleteIncome { index } => {
            let removed = books.delete_income(index)?;
            format!("Deleted income: {}", format_record(&removed))
        }
        Command::ModifyExpense { index, patch } => {
            let (record, status) = books.modify_expense(index, &patch, today)?;
            let line = format!("Updated expense: {}", format_record(&record));
            match format_budget_status(&status) {
                Some(warning) => format!("{}\n{}", line, warning),
                None => line,
            }
        }
        Command::ModifyIncome { index, patch } => {
            let record = books.modify_income(index, &patch, today)?;
            format!("Updated income: {}", format_record(&record))
        }
        Command::ListExpenses { month } => {
            let entries = month_view(books.expenses(), month);
            format_expense_list(&entries, &heading("Expenses", month))
        }
        Command::ListIncomes { month } => {
            let entries = month_view(books.incomes(), month);
            format_income_list(&entries, &heading("Incomes", month))
        }
        Command::SetBudget { category, limit } => {
            books.set_budget(category, limit);
            format!("Budget for {} set to {}", category, format_amount(limit))
        }
        Command::DeleteBudget { category } => {
            let removed = books.delete_budget(category)?;
            format!(
                "Removed the {} budget for {}",
                format_amount(removed),
                category
            )
        }
        Command::ListBudgets => format_budget_table(books),
        Command::Summary => format_summary(books),
        Command::Balance => format_balance(books),
        Command::Export { filename } => {
            let file = File::create(&filename)
                .map_err(|e| TallyError::Export(format!("Failed to create {}: {}", filename, e)))?;
            export_books_csv(books, BufWriter::new(file))?;
            let count = books.expenses().len() + books.incomes().len();
            format!("Exported {} records to {}", count, filename)
        }
        Command::Help => help_text(),
        Command::Exit => return Ok(Outcome::Quit),
    };
    Ok(Outcome::Message(message))
}

fn month_view<T: crate::models::LedgerEntry>(
    ledger: &crate::models::Ledger<T>,
    month: Option<YearMonth>,
) -> Vec<&T> {
    match month {
        Some(month) => ledger.in_month(month),
        None => ledger.entries().iter().collect(),
    }
}

fn heading(kind: &str, month: Option<YearMonth>) -> String {
    match month {
        Some(month) => format!("{} for {}", kind, month),
        None => kind.to_string(),
    }
}

fn help_text() -> String {
    "Commands (fields may appear in any order):\n\
     \x20 add-expense (ae)    a/AMOUNT c/CATEGORY d/YYYY-MM-DD [n/NOTE]\n\
     \x20 add-income (ai)     a/AMOUNT c/CATEGORY d/YYYY-MM-DD [n/NOTE]\n\
     \x20 delete-expense (de) i/INDEX\n\
     \x20 delete-income (di)  i/INDEX\n\
     \x20 modify-expense (me) i/INDEX plus any of a/ c/ d/ n/\n\
     \x20 modify-income (mi)  i/INDEX plus any of a/ c/ d/ n/\n\
     \x20 list-expenses (le)  [m/YYYY-MM]\n\
     \x20 list-incomes (li)   [m/YYYY-MM]\n\
     \x20 set-budget (sb)     c/CATEGORY a/LIMIT\n\
     \x20 delete-budget (db)  c/CATEGORY\n\
     \x20 budgets (lb), summary (sum), balance (bal)\n\
     \x20 export              f/FILENAME\n\
     \x20 help (?), exit (bye, quit, q)\n"
        .to_string()
}

/// The interactive session: books, their file, and the loop
pub struct Repl {
    books: Books,
    books_file: PathBuf,
}

impl Repl {
    pub fn new(books: Books, books_file: PathBuf) -> Self {
        Self { books, books_file }
    }

    /// Read commands from stdin until `exit` or end of input, then save.
    pub fn run(&mut self) -> TallyResult<()> {
        println!("tally - type 'help' for commands, 'exit' to quit.");

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("> ");
            io::stdout()
                .flush()
                .map_err(|e| TallyError::Storage(format!("Failed to flush output: {}", e)))?;

            line.clear();
            let read = stdin
                .read_line(&mut line)
                .map_err(|e| TallyError::Storage(format!("Failed to read input: {}", e)))?;
            if read == 0 {
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match parser::parse_line(trimmed).and_then(|cmd| execute(&mut self.books, cmd)) {
                Ok(Outcome::Message(text)) => println!("{}", text.trim_end()),
                Ok(Outcome::Quit) => break,
                Err(err) => println!("Error: {}", err),
            }
        }

        storage::save(&self.books_file, &self.books)?;
        println!("Saved. Goodbye!");
        Ok(())
    }
}
