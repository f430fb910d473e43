//! Expense and income record models
//!
//! Records are created by the parser, handed to the ledger by value, and are
//! immutable once stored; a modification replaces the whole record. Both
//! kinds share the [`LedgerEntry`] trait so one ledger container serves both.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::{ExpenseCategory, IncomeCategory};
use crate::error::{TallyError, TallyResult};

/// Access to the fields every ledger record shares
pub trait LedgerEntry {
    /// The closed category set for this record kind
    type Category: Copy + Ord + std::fmt::Display;

    fn amount(&self) -> f64;
    fn category(&self) -> Self::Category;
    fn date(&self) -> NaiveDate;
    fn note(&self) -> Option<&str>;

    /// Check the record invariants: a finite, strictly positive amount and a
    /// date no later than `today`.
    fn validate(&self, today: NaiveDate) -> TallyResult<()> {
        let amount = self.amount();
        if !amount.is_finite() {
            return Err(TallyError::NonFiniteNumber(amount.to_string()));
        }
        if amount <= 0.0 {
            return Err(TallyError::NonPositiveAmount(amount.to_string()));
        }
        if self.date() > today {
            return Err(TallyError::FutureDate(self.date()));
        }
        Ok(())
    }
}

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: f64,
    pub category: ExpenseCategory,
    pub date: NaiveDate,

    /// Optional free text; opaque once captured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Expense {
    pub fn new(amount: f64, category: ExpenseCategory, date: NaiveDate) -> Self {
        Self {
            amount,
            category,
            date,
            note: None,
        }
    }

    pub fn with_note(
        amount: f64,
        category: ExpenseCategory,
        date: NaiveDate,
        note: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category,
            date,
            note: Some(note.into()),
        }
    }

    /// Overlay the supplied patch fields onto this record, keeping the old
    /// value for every omitted field.
    pub fn apply(&self, patch: &ExpensePatch) -> Expense {
        Expense {
            amount: patch.amount.unwrap_or(self.amount),
            category: patch.category.unwrap_or(self.category),
            date: patch.date.unwrap_or(self.date),
            note: patch.note.clone().or_else(|| self.note.clone()),
        }
    }
}

impl LedgerEntry for Expense {
    type Category = ExpenseCategory;

    fn amount(&self) -> f64 {
        self.amount
    }

    fn category(&self) -> ExpenseCategory {
        self.category
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

/// A single income record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub amount: f64,
    pub category: IncomeCategory,
    pub date: NaiveDate,

    /// Optional free text; opaque once captured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Income {
    pub fn new(amount: f64, category: IncomeCategory, date: NaiveDate) -> Self {
        Self {
            amount,
            category,
            date,
            note: None,
        }
    }

    pub fn with_note(
        amount: f64,
        category: IncomeCategory,
        date: NaiveDate,
        note: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category,
            date,
            note: Some(note.into()),
        }
    }

    /// Overlay the supplied patch fields onto this record, keeping the old
    /// value for every omitted field.
    pub fn apply(&self, patch: &IncomePatch) -> Income {
        Income {
            amount: patch.amount.unwrap_or(self.amount),
            category: patch.category.unwrap_or(self.category),
            date: patch.date.unwrap_or(self.date),
            note: patch.note.clone().or_else(|| self.note.clone()),
        }
    }
}

impl LedgerEntry for Income {
    type Category = IncomeCategory;

    fn amount(&self) -> f64 {
        self.amount
    }

    fn category(&self) -> IncomeCategory {
        self.category
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

/// Explicitly supplied replacement fields for modify-expense
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    pub amount: Option<f64>,
    pub category: Option<ExpenseCategory>,
    pub date: Option<NaiveDate>,
    pub note: Option<String>,
}

impl ExpensePatch {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.category.is_none() && self.date.is_none() && self.note.is_none()
    }
}

/// Explicitly supplied replacement fields for modify-income
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncomePatch {
    pub amount: Option<f64>,
    pub category: Option<IncomeCategory>,
    pub date: Option<NaiveDate>,
    pub note: Option<String>,
}

impl IncomePatch {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.category.is_none() && self.date.is_none() && self.note.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_accepts_ordinary_record() {
        let e = Expense::new(12.5, ExpenseCategory::Food, date(2025, 1, 10));
        assert!(e.validate(date(2025, 1, 10)).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        let today = date(2025, 1, 10);
        let zero = Expense::new(0.0, ExpenseCategory::Food, today);
        assert_eq!(
            zero.validate(today).unwrap_err(),
            TallyError::NonPositiveAmount("0".into())
        );
        let negative = Expense::new(-4.0, ExpenseCategory::Food, today);
        assert!(matches!(
            negative.validate(today).unwrap_err(),
            TallyError::NonPositiveAmount(_)
        ));
    }

    #[test]
    fn test_validate_rejects_future_date() {
        let e = Expense::new(5.0, ExpenseCategory::Food, date(2025, 1, 11));
        assert_eq!(
            e.validate(date(2025, 1, 10)).unwrap_err(),
            TallyError::FutureDate(date(2025, 1, 11))
        );
    }

    #[test]
    fn test_apply_keeps_omitted_fields() {
        let old = Expense::with_note(10.0, ExpenseCategory::Food, date(2025, 1, 10), "lunch");
        let patch = ExpensePatch {
            amount: Some(15.0),
            ..Default::default()
        };
        let new = old.apply(&patch);
        assert_eq!(new.amount, 15.0);
        assert_eq!(new.category, ExpenseCategory::Food);
        assert_eq!(new.date, old.date);
        assert_eq!(new.note.as_deref(), Some("lunch"));
    }

    #[test]
    fn test_apply_replaces_supplied_fields() {
        let old = Income::new(100.0, IncomeCategory::Salary, date(2025, 1, 10));
        let patch = IncomePatch {
            category: Some(IncomeCategory::Bonus),
            note: Some("year end".into()),
            ..Default::default()
        };
        let new = old.apply(&patch);
        assert_eq!(new.amount, 100.0);
        assert_eq!(new.category, IncomeCategory::Bonus);
        assert_eq!(new.note.as_deref(), Some("year end"));
    }
}
