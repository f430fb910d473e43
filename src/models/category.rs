//! Category enums for expense and income records
//!
//! Both sets are closed: a record can only carry one of the listed members.
//! Parsing is case-insensitive; the display form is the uppercase token used
//! in command input (e.g. `c/food` lists as `FOOD`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TallyError;

/// Category of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Housing,
    Utilities,
    Entertainment,
    Health,
    Shopping,
    Other,
}

impl ExpenseCategory {
    /// All members, in display order
    pub const ALL: [ExpenseCategory; 8] = [
        Self::Food,
        Self::Transport,
        Self::Housing,
        Self::Utilities,
        Self::Entertainment,
        Self::Health,
        Self::Shopping,
        Self::Other,
    ];
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Food => "FOOD",
            Self::Transport => "TRANSPORT",
            Self::Housing => "HOUSING",
            Self::Utilities => "UTILITIES",
            Self::Entertainment => "ENTERTAINMENT",
            Self::Health => "HEALTH",
            Self::Shopping => "SHOPPING",
            Self::Other => "OTHER",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ExpenseCategory {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FOOD" => Ok(Self::Food),
            "TRANSPORT" => Ok(Self::Transport),
            "HOUSING" => Ok(Self::Housing),
            "UTILITIES" => Ok(Self::Utilities),
            "ENTERTAINMENT" => Ok(Self::Entertainment),
            "HEALTH" => Ok(Self::Health),
            "SHOPPING" => Ok(Self::Shopping),
            "OTHER" => Ok(Self::Other),
            _ => Err(TallyError::UnknownCategory(s.trim().to_string())),
        }
    }
}

/// Category of an income record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeCategory {
    Salary,
    Bonus,
    Investment,
    Gift,
    Refund,
    Other,
}

impl IncomeCategory {
    /// All members, in display order
    pub const ALL: [IncomeCategory; 6] = [
        Self::Salary,
        Self::Bonus,
        Self::Investment,
        Self::Gift,
        Self::Refund,
        Self::Other,
    ];
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Salary => "SALARY",
            Self::Bonus => "BONUS",
            Self::Investment => "INVESTMENT",
            Self::Gift => "GIFT",
            Self::Refund => "REFUND",
            Self::Other => "OTHER",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for IncomeCategory {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SALARY" => Ok(Self::Salary),
            "BONUS" => Ok(Self::Bonus),
            "INVESTMENT" => Ok(Self::Investment),
            "GIFT" => Ok(Self::Gift),
            "REFUND" => Ok(Self::Refund),
            "OTHER" => Ok(Self::Other),
            _ => Err(TallyError::UnknownCategory(s.trim().to_string())),
        }
    }
}
