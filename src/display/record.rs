//! Record and report formatting
//!
//! Lists are rendered newest-first with the 1-based index the delete and
//! modify commands accept, so what the user sees is what the commands take.

use crate::models::{Expense, Income, LedgerEntry};
use crate::services::{Books, BudgetStatus};

/// Format a monetary amount with two decimals
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// One record without an index, for add/delete/modify confirmations
pub fn format_record<T: LedgerEntry>(entry: &T) -> String {
    let note = match entry.note() {
        Some(text) => format!("  ({})", text),
        None => String::new(),
    };
    format!(
        "{} {} {}{}",
        entry.date().format("%Y-%m-%d"),
        entry.category(),
        format_amount(entry.amount()),
        note
    )
}

fn format_row<T: LedgerEntry>(index: usize, entry: &T) -> String {
    let note = match entry.note() {
        Some(text) => format!("  ({})", text),
        None => String::new(),
    };
    format!(
        "{:>3}. {} {:14} {:>12}{}",
        index,
        entry.date().format("%Y-%m-%d"),
        entry.category().to_string(),
        format_amount(entry.amount()),
        note
    )
}

fn format_list<'a, T, I>(heading: &str, entries: I, total: f64) -> String
where
    T: LedgerEntry + 'a,
    I: ExactSizeIterator<Item = &'a T>,
{
    if entries.len() == 0 {
        return format!("{}: none found.\n", heading);
    }
    let mut output = format!("{}:\n", heading);
    for (i, entry) in entries.enumerate() {
        output.push_str(&format_row(i + 1, entry));
        output.push('\n');
    }
    output.push_str(&format!("Total: {}\n", format_amount(total)));
    output
}

/// Format an expense list (already newest-first)
pub fn format_expense_list(entries: &[&Expense], heading: &str) -> String {
    let total = entries.iter().map(|e| e.amount).sum();
    format_list(heading, entries.iter().copied(), total)
}

/// Format an income list (already newest-first)
pub fn format_income_list(entries: &[&Income], heading: &str) -> String {
    let total = entries.iter().map(|e| e.amount).sum();
    format_list(heading, entries.iter().copied(), total)
}

/// One status line after an expense insertion or modification
pub fn format_budget_status(status: &BudgetStatus) -> Option<String> {
    match status {
        BudgetStatus::Normal => None,
        BudgetStatus::NearLimit { spent, limit } => Some(format!(
            "Heads up: spending is at {} of a {} budget.",
            format_amount(*spent),
            format_amount(*limit)
        )),
        BudgetStatus::OverLimit { spent, limit } => Some(format!(
            "Over budget: spending is at {} against a {} budget.",
            format_amount(*spent),
            format_amount(*limit)
        )),
    }
}

/// Per-category totals for both ledgers
pub fn format_summary(books: &Books) -> String {
    let mut output = String::from("Spending by category:\n");
    let spending = books.expenses().totals_by_category();
    if spending.is_empty() {
        output.push_str("  (no expenses)\n");
    }
    for (category, total) in &spending {
        output.push_str(&format!(
            "  {:14} {:>12}\n",
            category.to_string(),
            format_amount(*total)
        ));
    }

    output.push_str("Income by category:\n");
    let income = books.incomes().totals_by_category();
    if income.is_empty() {
        output.push_str("  (no incomes)\n");
    }
    for (category, total) in &income {
        output.push_str(&format!(
            "  {:14} {:>12}\n",
            category.to_string(),
            format_amount(*total)
        ));
    }
    output
}

/// The configured budget table with current spend and status
pub fn format_budget_table(books: &Books) -> String {
    let limits = books.budgets().limits();
    if limits.is_empty() {
        return "No budgets configured.\n".to_string();
    }
    let mut output = format!(
        "{:14} {:>12} {:>12}  {}\n",
        "Category", "Limit", "Spent", "Status"
    );
    for (&category, &limit) in limits {
        let spent = books.expenses().category_total(category);
        let status = match books.budgets().classify(category, spent) {
            BudgetStatus::Normal => "ok",
            BudgetStatus::NearLimit { .. } => "near limit",
            BudgetStatus::OverLimit { .. } => "OVER",
        };
        output.push_str(&format!(
            "{:14} {:>12} {:>12}  {}\n",
            category.to_string(),
            format_amount(limit),
            format_amount(spent),
            status
        ));
    }
    output
}

/// Totals and balance across both ledgers
pub fn format_balance(books: &Books) -> String {
    format!(
        "Income:   {}\nExpenses: {}\nBalance:  {}\n",
        format_amount(books.income_total()),
        format_amount(books.expense_total()),
        format_amount(books.balance())
    )
}
