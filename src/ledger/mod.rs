//! Ledger domain models, persistence-friendly types, and helpers.

pub mod expense;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use expense::{normalize_description, Expense};
pub use ledger::{AddOutcome, Ledger};
