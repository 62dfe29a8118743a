//! Dashboard statistics and generated reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Share of analyses per risk level, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub low: u8,
    pub medium: u8,
    pub high: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub month: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_analyses: u32,
    pub high_risk_caught: u32,
    /// Seconds
    pub avg_processing_time: u32,
    /// Percent
    pub accuracy_rate: f32,
    pub risk_distribution: RiskDistribution,
    pub monthly_analyses: u32,
    pub trends: Vec<MonthlyCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReportKind {
    Summary,
    Detailed,
    Comparative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReportStatus {
    Ready,
    Generating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub kind: ReportKind,
    /// Human-readable size, e.g. "2.4 MB"
    pub size: String,
    pub status: ReportStatus,
}

pub fn default_stats() -> DashboardStats {
    let trends = [
        ("يناير", 42),
        ("فبراير", 38),
        ("مارس", 55),
        ("أبريل", 47),
        ("مايو", 62),
        ("يونيو", 58),
    ]
    .into_iter()
    .map(|(month, count)| MonthlyCount {
        month: month.to_string(),
        count,
    })
    .collect();

    DashboardStats {
        total_analyses: 1247,
        high_risk_caught: 89,
        avg_processing_time: 12,
        accuracy_rate: 94.7,
        risk_distribution: RiskDistribution {
            low: 67,
            medium: 24,
            high: 9,
        },
        monthly_analyses: 47,
        trends,
    }
}

pub fn default_reports() -> Vec<Report> {
    let report = |id: &str, name: &str, (y, m, d): (i32, u32, u32), kind, size: &str| Report {
        id: id.to_string(),
        name: name.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        kind,
        size: size.to_string(),
        status: ReportStatus::Ready,
    };

    vec![
        report(
            "rep_001",
            "تقرير الربع الأول 2024",
            (2024, 4, 1),
            ReportKind::Detailed,
            "2.4 MB",
        ),
        report(
            "rep_002",
            "ملخص شهر مارس 2024",
            (2024, 3, 31),
            ReportKind::Summary,
            "856 KB",
        ),
        report(
            "rep_003",
            "تقرير مقارنة السياسات",
            (2024, 3, 15),
            ReportKind::Comparative,
            "1.8 MB",
        ),
        report(
            "rep_004",
            "تقرير الربع الرابع 2023",
            (2024, 1, 5),
            ReportKind::Detailed,
            "3.1 MB",
        ),
        report(
            "rep_005",
            "تحليل المخاطر السنوي",
            (2024, 1, 1),
            ReportKind::Comparative,
            "4.2 MB",
        ),
    ]
}
