//! Service layer for tally
//!
//! Business logic on top of the data models: the budget tracker, the atomic
//! modify coordinator, and the session aggregate that owns all mutable state.

pub mod books;
pub mod budget;
pub mod modify;

pub use books::Books;
pub use budget::{BudgetBook, BudgetStatus};
pub use modify::replace_entry;
