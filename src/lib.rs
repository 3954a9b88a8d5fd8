//! Frequency normalization and monthly aggregation for budget data.
//!
//! This crate is the single shared implementation of the maths behind a
//! budget dashboard: it converts transactions and budgets recorded at
//! different recurrence frequencies into comparable monthly figures, groups
//! them by category, and computes budget-vs-actual variance. Every consumer
//! imports it rather than reimplementing the multiplier table locally, which
//! is how the defaults stay consistent across screens.
//!
//! The engine performs no I/O and holds no state. Callers fetch transaction,
//! budget and category records elsewhere, hand a consistent snapshot to
//! [`MonthlySummary::build`], and render the result. Malformed data never
//! raises an error; each data-quality condition resolves to a documented
//! default (unrecognised frequencies multiply by 1, unknown types are
//! excluded, missing categories coalesce to "Uncategorized", and a zero
//! budget yields a zero ratio).

pub mod aggregate;
pub mod category;
pub mod filter;
pub mod frequency;
pub mod record;
pub mod summary;
pub mod variance;

pub use aggregate::{CategoryTotal, UNCATEGORIZED};
pub use category::Category;
pub use frequency::{normalize, MultiplierError, Multipliers};
pub use record::{Budget, EntryType, RecordError, Transaction, Typed};
pub use summary::{BudgetProgress, MonthlySummary};
pub use variance::{BudgetStatus, Variance};
