//! Ordered in-memory ledger container
//!
//! One `Ledger<T>` holds records of one kind, sorted newest-first: descending
//! by date, ties broken by reverse insertion order (the most recently
//! inserted record wins). Insertion places each record directly at its sorted
//! position, so the invariant holds at every observable moment.
//!
//! The 1-based index that delete and modify accept is a position in the
//! current ordering. It is never stored on a record; every call resolves it
//! against the list as it stands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::month::YearMonth;
use super::record::LedgerEntry;
use crate::error::{TallyError, TallyResult};

/// An ordered collection of one record kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger<T> {
    entries: Vec<T>,
}

impl<T> Default for Ledger<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: LedgerEntry> Ledger<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a record at its sorted position.
    ///
    /// A new record goes before every existing record whose date is not
    /// newer, which gives both the date-descending order and the
    /// newest-insertion-first tie break.
    pub fn insert(&mut self, entry: T) {
        let pos = self.entries.partition_point(|e| e.date() > entry.date());
        self.entries.insert(pos, entry);
    }

    /// Remove the record at the 1-based visible index and return it.
    pub fn delete(&mut self, index: usize) -> TallyResult<T> {
        self.take(index).map(|(_, entry)| entry)
    }

    /// Borrow the record at the 1-based visible index.
    pub fn get(&self, index: usize) -> TallyResult<&T> {
        self.check_index(index)?;
        Ok(&self.entries[index - 1])
    }

    /// Newest-first read-only view of the whole ledger.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Newest-first read-only view restricted to one calendar month.
    ///
    /// An empty ledger or a month with no records yields an empty vector.
    pub fn in_month(&self, month: YearMonth) -> Vec<&T> {
        self.entries
            .iter()
            .filter(|e| month.contains(e.date()))
            .collect()
    }

    /// Sum of all record amounts.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.amount()).sum()
    }

    /// Whole-ledger sum for one category.
    pub fn category_total(&self, category: T::Category) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.category() == category)
            .map(|e| e.amount())
            .sum()
    }

    /// Per-category sums, with an entry only for categories that have at
    /// least one record.
    pub fn totals_by_category(&self) -> BTreeMap<T::Category, f64> {
        let mut totals = BTreeMap::new();
        for entry in &self.entries {
            *totals.entry(entry.category()).or_insert(0.0) += entry.amount();
        }
        totals
    }

    /// Re-establish the ordering invariant after deserialization.
    ///
    /// The stable sort keeps the persisted order among equal dates, which is
    /// exactly the tie-break order the file recorded.
    pub fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.date().cmp(&a.date()));
    }

    /// Remove the record at the 1-based visible index, returning the 0-based
    /// position it occupied together with the record. The position lets the
    /// modify coordinator restore the record exactly where it was.
    pub(crate) fn take(&mut self, index: usize) -> TallyResult<(usize, T)> {
        self.check_index(index)?;
        Ok((index - 1, self.entries.remove(index - 1)))
    }

    /// Put a record back at an exact position. Rollback use only; the caller
    /// guarantees the position came from [`Ledger::take`] on the same ledger.
    pub(crate) fn restore_at(&mut self, pos: usize, entry: T) {
        self.entries.insert(pos, entry);
    }

    fn check_index(&self, index: usize) -> TallyResult<()> {
        if self.entries.is_empty() {
            return Err(TallyError::EmptyList);
        }
        if index < 1 || index > self.entries.len() {
            return Err(TallyError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }
}
