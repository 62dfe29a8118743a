//! Historical case model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CaseOutcome {
    Success,
    Failed,
    Mixed,
}

impl CaseOutcome {
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "نجاح",
            Self::Failed => "فشل",
            Self::Mixed => "نتائج مختلطة",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Sector {
    Government,
    SemiGov,
    Private,
}

impl Sector {
    pub fn label(self) -> &'static str {
        match self {
            Self::Government => "حكومي",
            Self::SemiGov => "شبه حكومي",
            Self::Private => "خاص",
        }
    }
}

/// A past decision and what came of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalCase {
    pub id: String,
    pub title: String,
    pub entity: String,
    pub year: u16,
    /// Similarity to the current document, in percent
    pub similarity: u8,
    pub outcome: CaseOutcome,
    pub key_lesson: String,
    pub category: String,
    pub sector: Sector,
    pub description: String,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub lessons_learned: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
