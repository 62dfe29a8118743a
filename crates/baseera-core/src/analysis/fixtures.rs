//! Sample analyses shown across the dashboard, the list view and results.

use chrono::NaiveDate;

use super::model::{
    Analysis, AnalysisCategory, AnalysisStatus, Recommendation, RiskLevel, SensitiveTerm,
};

/// The analysis the wizard hands off to, and the fallback record for unknown ids.
pub const DEFAULT_ANALYSIS_ID: &str = "ana_001";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn analysis(
    id: &str,
    title: &str,
    document_name: &str,
    category: AnalysisCategory,
    date: NaiveDate,
    status: AnalysisStatus,
    risk_level: RiskLevel,
    scores: (u8, u8, u8, u8),
) -> Analysis {
    let (overall_score, legal_risk, reputation_risk, operational_risk) = scores;
    Analysis {
        id: id.to_string(),
        title: title.to_string(),
        document_name: document_name.to_string(),
        category,
        date,
        status,
        risk_level,
        overall_score,
        legal_risk,
        reputation_risk,
        operational_risk,
    }
}

/// Returns the fixture analyses, most recent first.
pub fn default_analyses() -> Vec<Analysis> {
    vec![
        analysis(
            "ana_001",
            "قرار تعديل سياسة العمل عن بُعد",
            "قرار_تعديل_سياسة_العمل_عن_بعد.pdf",
            AnalysisCategory::Policy,
            date(2024, 1, 15),
            AnalysisStatus::Completed,
            RiskLevel::Medium,
            (58, 4, 7, 5),
        ),
        analysis(
            "ana_002",
            "اتفاقية الشراكة الاستراتيجية",
            "اتفاقية_الشراكة_الاستراتيجية.docx",
            AnalysisCategory::Administrative,
            date(2024, 1, 12),
            AnalysisStatus::Review,
            RiskLevel::High,
            (81, 8, 7, 6),
        ),
        analysis(
            "ana_003",
            "تعميم تحديث بدلات الموظفين",
            "تعميم_البدلات.pdf",
            AnalysisCategory::Hr,
            date(2024, 1, 10),
            AnalysisStatus::Completed,
            RiskLevel::Low,
            (24, 2, 3, 2),
        ),
        analysis(
            "ana_004",
            "ميزانية المشاريع التشغيلية 2024",
            "ميزانية_2024.xlsx",
            AnalysisCategory::Financial,
            date(2024, 1, 8),
            AnalysisStatus::Pending,
            RiskLevel::Medium,
            (47, 5, 3, 6),
        ),
        analysis(
            "ana_005",
            "بيان صحفي حول الخدمات الإلكترونية",
            "بيان_صحفي.txt",
            AnalysisCategory::Communication,
            date(2024, 1, 5),
            AnalysisStatus::Completed,
            RiskLevel::Low,
            (18, 1, 3, 1),
        ),
        analysis(
            "ana_006",
            "لائحة المشتريات الداخلية",
            "لائحة_المشتريات.pdf",
            AnalysisCategory::Administrative,
            date(2023, 12, 28),
            AnalysisStatus::Archived,
            RiskLevel::High,
            (76, 9, 5, 7),
        ),
    ]
}

pub fn default_sensitive_terms() -> Vec<SensitiveTerm> {
    vec![
        SensitiveTerm {
            term: "إلزامي فوراً".to_string(),
            context: "يصبح العمل من المقر إلزامياً فوراً لجميع الموظفين".to_string(),
            sensitivity: RiskLevel::High,
            suggestion: "يُطبق تدريجياً خلال فترة انتقالية محددة".to_string(),
        },
        SensitiveTerm {
            term: "دون استثناء".to_string(),
            context: "تسري هذه السياسة على جميع الإدارات دون استثناء".to_string(),
            sensitivity: RiskLevel::Medium,
            suggestion: "مع مراعاة الحالات الخاصة المعتمدة".to_string(),
        },
        SensitiveTerm {
            term: "إجراءات تأديبية".to_string(),
            context: "وسيتعرض المخالفون لإجراءات تأديبية".to_string(),
            sensitivity: RiskLevel::Medium,
            suggestion: "وتتم معالجة المخالفات وفق اللوائح المعتمدة".to_string(),
        },
        SensitiveTerm {
            term: "تقليص".to_string(),
            context: "بهدف تقليص التكاليف التشغيلية".to_string(),
            sensitivity: RiskLevel::Low,
            suggestion: "بهدف رفع كفاءة الإنفاق التشغيلي".to_string(),
        },
    ]
}

pub fn default_recommendations() -> Vec<Recommendation> {
    let recommendation = |id: &str, text: &str, priority| Recommendation {
        id: id.to_string(),
        text: text.to_string(),
        priority,
    };

    vec![
        recommendation(
            "rec_001",
            "إضافة فترة انتقالية لا تقل عن 30 يوماً قبل التطبيق",
            RiskLevel::High,
        ),
        recommendation(
            "rec_002",
            "إعداد خطة تواصل داخلي توضح أسباب القرار",
            RiskLevel::High,
        ),
        recommendation(
            "rec_003",
            "مراجعة الصياغة القانونية للبنود المتعلقة بالمخالفات",
            RiskLevel::Medium,
        ),
        recommendation(
            "rec_004",
            "تحديد آلية للاستثناءات والحالات الخاصة",
            RiskLevel::Low,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_analysis_ids_are_unique() {
        let analyses = default_analyses();
        let ids: HashSet<&str> = analyses.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), analyses.len());
        assert!(ids.contains(DEFAULT_ANALYSIS_ID));
    }

    #[test]
    fn test_default_analysis_is_first() {
        assert_eq!(default_analyses()[0].id, DEFAULT_ANALYSIS_ID);
    }

    #[test]
    fn test_scores_are_in_range() {
        for analysis in default_analyses() {
            assert!(analysis.overall_score <= 100);
            for score in [
                analysis.legal_risk,
                analysis.reputation_risk,
                analysis.operational_risk,
            ] {
                assert!(score <= 10, "{} has sub-score {}", analysis.id, score);
            }
        }
    }

    #[test]
    fn test_most_recent_first() {
        let analyses = default_analyses();
        assert!(analyses.windows(2).all(|pair| pair[0].date >= pair[1].date));
    }
}
