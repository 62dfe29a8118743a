//! Historical case library.

mod filter;
mod fixtures;
mod model;

pub use filter::{CaseFilter, OutcomeFilter};
pub use fixtures::default_cases;
pub use model::{CaseOutcome, HistoricalCase, Sector};
