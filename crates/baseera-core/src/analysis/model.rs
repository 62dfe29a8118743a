//! Analysis records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Category of the decision document under analysis.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AnalysisCategory {
    Administrative,
    Financial,
    #[default]
    Policy,
    Hr,
    Communication,
}

impl AnalysisCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Administrative => "إداري",
            Self::Financial => "مالي",
            Self::Policy => "سياسات",
            Self::Hr => "موارد بشرية",
            Self::Communication => "تواصل",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AnalysisStatus {
    Completed,
    Pending,
    Archived,
    Review,
}

impl AnalysisStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "مكتمل",
            Self::Pending => "قيد الانتظار",
            Self::Archived => "مؤرشف",
            Self::Review => "قيد المراجعة",
        }
    }
}

/// Risk level of an analysis, a sensitive term, or a recommendation priority.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bands a 0-10 sub-score: up to 3 is low, up to 6 is medium, above is high.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => Self::Low,
            4..=6 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "منخفض",
            Self::Medium => "متوسط",
            Self::High => "عالي",
        }
    }
}

/// A completed (or pending) analysis of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub id: String,
    pub title: String,
    pub document_name: String,
    pub category: AnalysisCategory,
    pub date: NaiveDate,
    pub status: AnalysisStatus,
    pub risk_level: RiskLevel,
    /// Overall score, 0-100
    pub overall_score: u8,
    /// Sub-scores, 0-10
    pub legal_risk: u8,
    pub reputation_risk: u8,
    pub operational_risk: u8,
}

/// A term flagged in the document, with a safer wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitiveTerm {
    pub term: String,
    pub context: String,
    pub sensitivity: RiskLevel,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub text: String,
    pub priority: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_banding_edges() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(3), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(4), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(6), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(7), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(10), RiskLevel::High);
    }

    #[test]
    fn test_risk_ordering() {
        assert!(RiskLevel::High > RiskLevel::Medium);
        assert!(RiskLevel::Medium > RiskLevel::Low);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("hr".parse::<AnalysisCategory>().unwrap(), AnalysisCategory::Hr);
        assert!("marketing".parse::<AnalysisCategory>().is_err());
        assert_eq!(AnalysisCategory::default(), AnalysisCategory::Policy);
    }
}
