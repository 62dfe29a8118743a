//! Read-only fixture catalog behind the dashboard, list, case and results views.

use serde::{Deserialize, Serialize};

use crate::analysis::{
    Analysis, AnalysisReport, DEFAULT_ANALYSIS_ID, Recommendation, SensitiveTerm,
    default_analyses, default_recommendations, default_sensitive_terms,
};
use crate::case::{CaseFilter, HistoricalCase, default_cases};
use crate::config::UnknownAnalysisPolicy;
use crate::error::{BaseeraError, Result};
use crate::stats::{DashboardStats, Report, default_reports, default_stats};

/// Number of analyses shown in the dashboard's recent list.
pub const RECENT_ANALYSES: usize = 5;

/// Number of similar cases attached to a results view.
pub const SIMILAR_CASES: usize = 2;

/// Data for the dashboard view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub recent_analyses: Vec<Analysis>,
    pub reports: Vec<Report>,
}

/// The fixture records, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    analyses: Vec<Analysis>,
    cases: Vec<HistoricalCase>,
    sensitive_terms: Vec<SensitiveTerm>,
    recommendations: Vec<Recommendation>,
    stats: DashboardStats,
    reports: Vec<Report>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Catalog {
    pub fn with_defaults() -> Self {
        Self {
            analyses: default_analyses(),
            cases: default_cases(),
            sensitive_terms: default_sensitive_terms(),
            recommendations: default_recommendations(),
            stats: default_stats(),
            reports: default_reports(),
        }
    }

    pub fn analyses(&self) -> &[Analysis] {
        &self.analyses
    }

    pub fn cases(&self) -> &[HistoricalCase] {
        &self.cases
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn analysis(&self, id: &str) -> Option<&Analysis> {
        self.analyses.iter().find(|a| a.id == id)
    }

    /// Builds the results view for `id`.
    ///
    /// Unknown ids either fall back to the default record (flagged on the
    /// report) or fail with `NotFound`, depending on `policy`.
    pub fn analysis_report(&self, id: &str, policy: UnknownAnalysisPolicy) -> Result<AnalysisReport> {
        let (analysis, fallback) = match (self.analysis(id), policy) {
            (Some(found), _) => (found, false),
            (None, UnknownAnalysisPolicy::Fallback) => {
                let default = self
                    .analysis(DEFAULT_ANALYSIS_ID)
                    .or_else(|| self.analyses.first())
                    .ok_or_else(|| BaseeraError::not_found("analysis", id))?;
                tracing::debug!("[Catalog] Unknown analysis {}, showing {}", id, default.id);
                (default, true)
            }
            (None, UnknownAnalysisPolicy::NotFound) => {
                return Err(BaseeraError::not_found("analysis", id));
            }
        };

        Ok(AnalysisReport::new(
            analysis.clone(),
            fallback,
            self.sensitive_terms.clone(),
            self.recommendations.clone(),
            self.cases.iter().take(SIMILAR_CASES).cloned().collect(),
        ))
    }

    pub fn filter_cases(&self, filter: &CaseFilter) -> Vec<&HistoricalCase> {
        filter.apply(&self.cases)
    }

    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary {
            stats: self.stats.clone(),
            recent_analyses: self.analyses.iter().take(RECENT_ANALYSES).cloned().collect(),
            reports: self.reports.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_analysis_report() {
        let catalog = Catalog::with_defaults();
        let report = catalog
            .analysis_report("ana_002", UnknownAnalysisPolicy::Fallback)
            .unwrap();
        assert_eq!(report.analysis.id, "ana_002");
        assert!(!report.fallback);
        assert_eq!(report.historical_cases.len(), SIMILAR_CASES);
        assert!(!report.sensitive_terms.is_empty());
    }

    #[test]
    fn test_unknown_analysis_falls_back() {
        let catalog = Catalog::with_defaults();
        let report = catalog
            .analysis_report("ana_999", UnknownAnalysisPolicy::Fallback)
            .unwrap();
        assert_eq!(report.analysis.id, DEFAULT_ANALYSIS_ID);
        assert!(report.fallback);
    }

    #[test]
    fn test_unknown_analysis_not_found_policy() {
        let catalog = Catalog::with_defaults();
        let err = catalog
            .analysis_report("ana_999", UnknownAnalysisPolicy::NotFound)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_dashboard_shows_five_recent() {
        let catalog = Catalog::with_defaults();
        let summary = catalog.dashboard();
        assert_eq!(summary.recent_analyses.len(), RECENT_ANALYSES);
        assert_eq!(summary.recent_analyses[0].id, catalog.analyses()[0].id);
        assert_eq!(summary.stats.total_analyses, 1247);
    }
}
