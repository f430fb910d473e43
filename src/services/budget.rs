//! Budget tracking per expense category
//!
//! Holds the configured spending limits and classifies a category's
//! cumulative spend against its limit. Classification is recomputed from
//! scratch on every call; the tracker keeps no memory of earlier statuses, so
//! a category that is already over its limit reports over-limit again on
//! every further expense.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{TallyError, TallyResult};
use crate::models::ExpenseCategory;

/// Spend reaches "near the limit" at this fraction of the limit
const NEAR_LIMIT_RATIO: f64 = 0.9;

/// Three-way classification of a category's spend against its limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetStatus {
    /// No limit configured, or spend comfortably below it
    Normal,
    /// Spend at or above 90% of the limit, but still below it
    NearLimit { spent: f64, limit: f64 },
    /// Spend at or above the limit
    OverLimit { spent: f64, limit: f64 },
}

/// The configured category → limit table
///
/// An entry exists only for categories the user has set a budget for;
/// absence means "no limit".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetBook {
    limits: BTreeMap<ExpenseCategory, f64>,
}

impl BudgetBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit for a category, replacing any existing limit.
    ///
    /// The limit has already been validated as finite and non-negative by
    /// the parser.
    pub fn set(&mut self, category: ExpenseCategory, limit: f64) {
        self.limits.insert(category, limit);
    }

    /// The configured limit for a category, if any
    pub fn get(&self, category: ExpenseCategory) -> Option<f64> {
        self.limits.get(&category).copied()
    }

    /// Remove a category's limit, returning it.
    ///
    /// Removing a limit that was never set is an error, not a no-op.
    pub fn remove(&mut self, category: ExpenseCategory) -> TallyResult<f64> {
        self.limits
            .remove(&category)
            .ok_or_else(|| TallyError::NoBudgetSet(category.to_string()))
    }

    /// All configured limits, in category order
    pub fn limits(&self) -> &BTreeMap<ExpenseCategory, f64> {
        &self.limits
    }

    /// Classify a category's cumulative spend.
    ///
    /// The over-limit check comes first, so a zero limit puts any positive
    /// spend straight into over-limit.
    pub fn classify(&self, category: ExpenseCategory, spent: f64) -> BudgetStatus {
        match self.get(category) {
            None => BudgetStatus::Normal,
            Some(limit) if spent >= limit => BudgetStatus::OverLimit { spent, limit },
            Some(limit) if spent >= NEAR_LIMIT_RATIO * limit => {
                BudgetStatus::NearLimit { spent, limit }
            }
            Some(_) => BudgetStatus::Normal,
        }
    }
}
