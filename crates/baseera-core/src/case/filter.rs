//! Case library filtering.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::model::{CaseOutcome, HistoricalCase};
use crate::error::BaseeraError;

/// Outcome chip selected above the case grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeFilter {
    #[default]
    All,
    Only(CaseOutcome),
}

impl OutcomeFilter {
    pub fn matches(self, outcome: CaseOutcome) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == outcome,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "الكل",
            Self::Only(outcome) => outcome.label(),
        }
    }
}

impl FromStr for OutcomeFilter {
    type Err = BaseeraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse::<CaseOutcome>()
            .map(Self::Only)
            .map_err(|_| BaseeraError::invalid_input(format!("unknown outcome filter '{s}'")))
    }
}

/// Search box text plus outcome chip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFilter {
    pub query: String,
    pub outcome: OutcomeFilter,
}

impl CaseFilter {
    pub fn new(query: impl Into<String>, outcome: OutcomeFilter) -> Self {
        Self {
            query: query.into(),
            outcome,
        }
    }

    /// Substring match on title or entity, combined with the outcome filter.
    /// An empty query matches every case.
    pub fn matches(&self, case: &HistoricalCase) -> bool {
        let matches_search =
            case.title.contains(self.query.as_str()) || case.entity.contains(self.query.as_str());
        matches_search && self.outcome.matches(case.outcome)
    }

    pub fn apply<'a>(&self, cases: &'a [HistoricalCase]) -> Vec<&'a HistoricalCase> {
        cases.iter().filter(|case| self.matches(case)).collect()
    }
}
