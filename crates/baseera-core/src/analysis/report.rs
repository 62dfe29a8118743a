//! Results view model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::model::{Analysis, Recommendation, RiskLevel, SensitiveTerm};
use crate::case::HistoricalCase;

/// Scorecard dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RiskDimension {
    Legal,
    Reputation,
    Operational,
}

impl RiskDimension {
    pub fn label(self) -> &'static str {
        match self {
            Self::Legal => "المخاطر القانونية",
            Self::Reputation => "مخاطر السمعة",
            Self::Operational => "المخاطر التشغيلية",
        }
    }
}

/// One scorecard entry with its banded level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskScore {
    pub dimension: RiskDimension,
    pub score: u8,
    pub level: RiskLevel,
}

impl RiskScore {
    pub fn new(dimension: RiskDimension, score: u8) -> Self {
        Self {
            dimension,
            score,
            level: RiskLevel::from_score(score),
        }
    }
}

/// Overall recommendation derived from the analysis risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Stop,
    ReviewRequired,
    Approve,
}

impl Verdict {
    pub fn from_risk(level: RiskLevel) -> Self {
        match level {
            RiskLevel::High => Self::Stop,
            RiskLevel::Medium => Self::ReviewRequired,
            RiskLevel::Low => Self::Approve,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Stop => "مخاطر عالية - توقف",
            Self::ReviewRequired => "مراجعة مطلوبة",
            Self::Approve => "موافق للتنفيذ",
        }
    }
}

/// Everything the results view shows for one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis: Analysis,
    /// The requested id was unknown and the default record was substituted.
    pub fallback: bool,
    pub scores: Vec<RiskScore>,
    pub verdict: Verdict,
    pub sensitive_terms: Vec<SensitiveTerm>,
    pub recommendations: Vec<Recommendation>,
    pub historical_cases: Vec<HistoricalCase>,
}

impl AnalysisReport {
    pub fn new(
        analysis: Analysis,
        fallback: bool,
        sensitive_terms: Vec<SensitiveTerm>,
        recommendations: Vec<Recommendation>,
        historical_cases: Vec<HistoricalCase>,
    ) -> Self {
        let scores = vec![
            RiskScore::new(RiskDimension::Legal, analysis.legal_risk),
            RiskScore::new(RiskDimension::Reputation, analysis.reputation_risk),
            RiskScore::new(RiskDimension::Operational, analysis.operational_risk),
        ];
        let verdict = Verdict::from_risk(analysis.risk_level);
        Self {
            analysis,
            fallback,
            scores,
            verdict,
            sensitive_terms,
            recommendations,
            historical_cases,
        }
    }
}

/// Buttons on the results view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResultAction {
    Download,
    Approve,
    Archive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    Success,
    Info,
}

/// Transient message shown after a result action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub description: String,
}

impl ResultAction {
    pub fn toast(self) -> Toast {
        let (level, title, description) = match self {
            Self::Download => (
                ToastLevel::Success,
                "جاري تحميل التقرير...",
                "سيتم تحميل الملف خلال لحظات",
            ),
            Self::Approve => (
                ToastLevel::Success,
                "تم اعتماد القرار بنجاح",
                "سيتم إرسال إشعار للجهات المعنية",
            ),
            Self::Archive => (
                ToastLevel::Info,
                "تم أرشفة التحليل",
                "يمكنك الوصول إليه من قسم الأرشيف",
            ),
        };
        Toast {
            level,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::default_analyses;

    #[test]
    fn test_verdict_follows_risk_level() {
        assert_eq!(Verdict::from_risk(RiskLevel::High), Verdict::Stop);
        assert_eq!(Verdict::from_risk(RiskLevel::Medium), Verdict::ReviewRequired);
        assert_eq!(Verdict::from_risk(RiskLevel::Low), Verdict::Approve);
    }

    #[test]
    fn test_report_scores_are_banded() {
        let analysis = default_analyses().remove(0);
        let report = AnalysisReport::new(analysis, false, vec![], vec![], vec![]);

        assert_eq!(report.scores.len(), 3);
        assert_eq!(report.scores[0].dimension, RiskDimension::Legal);
        assert_eq!(report.scores[0].level, RiskLevel::from_score(report.scores[0].score));
        assert_eq!(report.verdict, Verdict::ReviewRequired);
    }

    #[test]
    fn test_action_toasts() {
        assert_eq!(ResultAction::Download.toast().level, ToastLevel::Success);
        assert_eq!(ResultAction::Approve.toast().level, ToastLevel::Success);
        assert_eq!(ResultAction::Archive.toast().level, ToastLevel::Info);
        assert!("approve".parse::<ResultAction>().is_ok());
    }
}
