//! The session's books: both ledgers plus the budget table
//!
//! One `Books` value owns everything a session mutates. All mutation goes
//! through the methods here, and every returned view is read-only, so callers
//! cannot disturb ordering or totals from outside.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::budget::{BudgetBook, BudgetStatus};
use super::modify::replace_entry;
use crate::error::TallyResult;
use crate::models::{
    Expense, ExpenseCategory, ExpensePatch, Income, IncomePatch, Ledger, LedgerEntry,
};

/// All session state: expense ledger, income ledger, budget table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Books {
    expenses: Ledger<Expense>,
    incomes: Ledger<Income>,
    budgets: BudgetBook,
}

impl Books {
    pub fn new() -> Self {
        Self::default()
    }

    // --- record operations ---

    /// Insert an expense at its sorted position and report the budget status
    /// of its category, recomputed over the whole ledger.
    pub fn add_expense(&mut self, expense: Expense) -> BudgetStatus {
        let category = expense.category;
        self.expenses.insert(expense);
        self.budget_status(category)
    }

    /// Insert an income at its sorted position.
    pub fn add_income(&mut self, income: Income) {
        self.incomes.insert(income);
    }

    /// Delete the expense at the 1-based visible index, returning it.
    pub fn delete_expense(&mut self, index: usize) -> TallyResult<Expense> {
        self.expenses.delete(index)
    }

    /// Delete the income at the 1-based visible index, returning it.
    pub fn delete_income(&mut self, index: usize) -> TallyResult<Income> {
        self.incomes.delete(index)
    }

    /// Replace the expense at the visible index with a field-merged record.
    ///
    /// Only the fields the patch supplies change; the rest keep the old
    /// record's values. On any validation failure the ledger is left exactly
    /// as it was. Success also reports the (possibly new) category's budget
    /// status.
    pub fn modify_expense(
        &mut self,
        index: usize,
        patch: &ExpensePatch,
        today: NaiveDate,
    ) -> TallyResult<(Expense, BudgetStatus)> {
        let replaced = replace_entry(&mut self.expenses, index, |old| {
            let candidate = old.apply(patch);
            candidate.validate(today)?;
            Ok(candidate)
        })?;
        let status = self.budget_status(replaced.category);
        Ok((replaced, status))
    }

    /// Replace the income at the visible index with a field-merged record.
    pub fn modify_income(
        &mut self,
        index: usize,
        patch: &IncomePatch,
        today: NaiveDate,
    ) -> TallyResult<Income> {
        replace_entry(&mut self.incomes, index, |old| {
            let candidate = old.apply(patch);
            candidate.validate(today)?;
            Ok(candidate)
        })
    }

    // --- views and totals ---

    pub fn expenses(&self) -> &Ledger<Expense> {
        &self.expenses
    }

    pub fn incomes(&self) -> &Ledger<Income> {
        &self.incomes
    }

    pub fn expense_total(&self) -> f64 {
        self.expenses.total()
    }

    pub fn income_total(&self) -> f64 {
        self.incomes.total()
    }

    /// Income total minus expense total
    pub fn balance(&self) -> f64 {
        self.income_total() - self.expense_total()
    }

    // --- budgets ---

    pub fn set_budget(&mut self, category: ExpenseCategory, limit: f64) {
        self.budgets.set(category, limit);
    }

    pub fn delete_budget(&mut self, category: ExpenseCategory) -> TallyResult<f64> {
        self.budgets.remove(category)
    }

    pub fn budgets(&self) -> &BudgetBook {
        &self.budgets
    }

    /// Fresh classification of a category's whole-ledger spend
    pub fn budget_status(&self, category: ExpenseCategory) -> BudgetStatus {
        let spent = self.expenses.category_total(category);
        self.budgets.classify(category, spent)
    }

    /// Re-establish ledger ordering after deserialization
    pub fn normalize(&mut self) {
        self.expenses.normalize();
        self.incomes.normalize();
    }
}
