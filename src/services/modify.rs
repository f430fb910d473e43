//! Atomic replace-with-rollback for ledger records
//!
//! A modification is delete-old + insert-new, never in-place mutation. The
//! coordinator removes the record at the requested visible index, asks the
//! caller to build the replacement from it, and inserts the replacement at
//! its sorted position. If building the replacement fails, the original
//! record goes back to the exact position it was removed from, so the
//! ledger's order and totals are identical to their pre-call values, and the
//! builder's own error is what the caller sees.
//!
//! All steps run synchronously inside one call; no intermediate state is
//! observable from outside.

use crate::error::TallyResult;
use crate::models::{Ledger, LedgerEntry};

/// Replace the record at the 1-based visible `index` with one derived from
/// it, returning the inserted record.
pub fn replace_entry<T, F>(ledger: &mut Ledger<T>, index: usize, build: F) -> TallyResult<T>
where
    T: LedgerEntry + Clone,
    F: FnOnce(&T) -> TallyResult<T>,
{
    let (position, old) = ledger.take(index)?;
    match build(&old) {
        Ok(replacement) => {
            ledger.insert(replacement.clone());
            Ok(replacement)
        }
        Err(err) => {
            ledger.restore_at(position, old);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TallyError;
    use crate::models::{Expense, ExpenseCategory, ExpensePatch};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn three_record_ledger() -> Ledger<Expense> {
        let mut ledger = Ledger::new();
        ledger.insert(Expense::new(10.0, ExpenseCategory::Food, date(2025, 1, 1)));
        ledger.insert(Expense::new(20.0, ExpenseCategory::Transport, date(2025, 1, 5)));
        ledger.insert(Expense::new(30.0, ExpenseCategory::Food, date(2025, 1, 9)));
        ledger
    }

    #[test]
    fn test_successful_replace_resorts_by_date() {
        let mut ledger = three_record_ledger();
        // move the newest record (index 1) back to the oldest date
        let replaced = replace_entry(&mut ledger, 1, |old| {
            let patch = ExpensePatch {
                date: Some(date(2024, 12, 1)),
                ..Default::default()
            };
            Ok(old.apply(&patch))
        })
        .unwrap();

        assert_eq!(replaced.amount, 30.0);
        let amounts: Vec<f64> = ledger.entries().iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![20.0, 10.0, 30.0]);
    }

    #[test]
    fn test_failed_build_rolls_back_exactly() {
        let mut ledger = three_record_ledger();
        let before: Vec<Expense> = ledger.entries().to_vec();
        let totals_before = ledger.totals_by_category();

        let err = replace_entry(&mut ledger, 2, |_| {
            Err(TallyError::NonPositiveAmount("-5".into()))
        })
        .unwrap_err();

        // the builder's own failure kind comes through unwrapped
        assert_eq!(err, TallyError::NonPositiveAmount("-5".into()));
        assert_eq!(ledger.entries(), before.as_slice());
        assert_eq!(ledger.totals_by_category(), totals_before);
    }

    #[test]
    fn test_rollback_preserves_order_among_equal_dates() {
        let d = date(2025, 3, 3);
        let mut ledger = Ledger::new();
        ledger.insert(Expense::new(1.0, ExpenseCategory::Food, d));
        ledger.insert(Expense::new(2.0, ExpenseCategory::Food, d));
        ledger.insert(Expense::new(3.0, ExpenseCategory::Food, d));
        let before: Vec<Expense> = ledger.entries().to_vec();

        // removing the middle record and failing must not promote it to
        // newest-of-its-date on the way back
        let _ = replace_entry(&mut ledger, 2, |_| Err(TallyError::EmptyList)).unwrap_err();
        assert_eq!(ledger.entries(), before.as_slice());
    }

    #[test]
    fn test_invalid_index_errors() {
        let mut ledger: Ledger<Expense> = Ledger::new();
        let err = replace_entry(&mut ledger, 1, |old| Ok(old.clone())).unwrap_err();
        assert_eq!(err, TallyError::EmptyList);

        let mut ledger = three_record_ledger();
        let err = replace_entry(&mut ledger, 4, |old| Ok(old.clone())).unwrap_err();
        assert_eq!(err, TallyError::IndexOutOfRange { index: 4, len: 3 });
    }
}
