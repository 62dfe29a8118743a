//! Terminal rendering of views and messages.
//!
//! Every function returns the text to print so the REPL decides where it goes.

use std::fmt::Write;

use colored::{ColoredString, Colorize};

use baseera_application::ProcessingEvent;
use baseera_core::DashboardSummary;
use baseera_core::analysis::{
    Analysis, AnalysisReport, AnalysisWizard, ProcessingStage, RiskLevel, Toast, ToastLevel,
    Verdict, WizardStep,
};
use baseera_core::case::{CaseFilter, HistoricalCase};
use baseera_core::notification::Notification;
use baseera_core::route::{PlaceholderSection, Route, breadcrumbs, nav_items};
use baseera_core::user::User;

use crate::commands::COMMAND_NAMES;

fn risk(level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::Low => level.label().green(),
        RiskLevel::Medium => level.label().yellow(),
        RiskLevel::High => level.label().red(),
    }
}

fn title(text: &str) -> ColoredString {
    text.bright_magenta().bold()
}

pub fn banner() -> String {
    format!(
        "{}\n{}\n",
        "=== بصيرة | BASEERA ===".bright_magenta().bold(),
        "رؤية قبل القرار. Type 'help' for commands.".bright_black()
    )
}

pub fn login_view() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title("مرحباً بك في منصة تحليل القرارات الذكية"));
    let _ = writeln!(out, "  {}", "Type 'login' to sign in.".bright_black());
    out
}

/// Header, breadcrumbs and sidebar around a protected view.
pub fn shell(user: &User, unread: usize, location: &Route, sidebar_collapsed: bool) -> String {
    let mut out = String::new();

    let badge = if unread > 0 {
        format!(" [{unread}]").red().bold().to_string()
    } else {
        String::new()
    };
    let _ = writeln!(
        out,
        "{} {}{}",
        format!("({})", user.initials()).bright_cyan(),
        user.name.bold(),
        badge
    );

    let trail: Vec<String> = breadcrumbs(&location.path())
        .into_iter()
        .map(|crumb| {
            if crumb.is_current {
                crumb.label.bold().to_string()
            } else {
                crumb.label.bright_black().to_string()
            }
        })
        .collect();
    if !trail.is_empty() {
        let _ = writeln!(out, "{}", trail.join(" / "));
    }

    let items = nav_items();
    if sidebar_collapsed {
        let active = items
            .iter()
            .find(|item| item.is_active(location))
            .map_or("", |item| item.label);
        let _ = writeln!(out, "{} {}", "[≡]".bright_black(), active.bright_black());
    } else {
        for item in items {
            if item.is_active(location) {
                let _ = writeln!(out, "  {} {}", "▸".bright_cyan(), item.label.bright_cyan().bold());
            } else {
                let _ = writeln!(out, "    {}", item.label);
            }
        }
    }
    out
}

pub fn footer() -> String {
    "© 2024 بصيرة - جميع الحقوق محفوظة · v1.0.0-beta"
        .bright_black()
        .to_string()
}

pub fn dashboard(summary: &DashboardSummary) -> String {
    let stats = &summary.stats;
    let mut out = String::new();
    let _ = writeln!(out, "{}", title("لوحة التحكم"));
    let _ = writeln!(
        out,
        "  total {}  high-risk caught {}  avg {}s  accuracy {:.1}%  this month {}",
        stats.total_analyses.to_string().bold(),
        stats.high_risk_caught.to_string().red(),
        stats.avg_processing_time,
        stats.accuracy_rate,
        stats.monthly_analyses
    );
    let dist = &stats.risk_distribution;
    let _ = writeln!(
        out,
        "  risk: {} {}%  {} {}%  {} {}%",
        risk(RiskLevel::Low),
        dist.low,
        risk(RiskLevel::Medium),
        dist.medium,
        risk(RiskLevel::High),
        dist.high
    );
    let trend: Vec<String> = stats
        .trends
        .iter()
        .map(|month| format!("{} {}", month.month, month.count))
        .collect();
    let _ = writeln!(out, "  {}", trend.join(" · ").bright_black());

    let _ = writeln!(out, "{}", "آخر التحليلات".bold());
    for analysis in &summary.recent_analyses {
        let _ = writeln!(out, "{}", analysis_row(analysis));
    }

    let _ = writeln!(out, "{}", "التقارير".bold());
    for report in &summary.reports {
        let _ = writeln!(
            out,
            "  {} {} ({}, {}, {})",
            report.id.bright_black(),
            report.name,
            report.kind,
            report.size,
            report.status
        );
    }
    out
}

fn analysis_row(analysis: &Analysis) -> String {
    format!(
        "  {} {} [{}] {} {} {}",
        analysis.id.bright_black(),
        analysis.title,
        analysis.category.label(),
        analysis.date,
        risk(analysis.risk_level),
        analysis.status.label().bright_black()
    )
}

pub fn analyses(list: &[Analysis]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title("التحليلات السابقة"));
    for analysis in list {
        let _ = writeln!(out, "{}", analysis_row(analysis));
    }
    let _ = writeln!(out, "  {}", "Open one with 'go /analysis/<id>'.".bright_black());
    out
}

pub fn wizard(wizard: &AnalysisWizard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title("تحليل جديد"));

    let steps: Vec<String> = [WizardStep::Uploading, WizardStep::Configuring, WizardStep::Processing]
        .into_iter()
        .map(|step| {
            if step == wizard.step() {
                step.label().bright_cyan().bold().to_string()
            } else if step < wizard.step() {
                step.label().green().to_string()
            } else {
                step.label().bright_black().to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "  {}", steps.join(" → "));

    match wizard.step() {
        WizardStep::Uploading => match wizard.document() {
            Some(document) => {
                let _ = writeln!(out, "  {} {}", "✓".green(), document);
                let _ = writeln!(out, "  {}", "'next' to continue, 'remove' to detach.".bright_black());
            }
            None => {
                let _ = writeln!(out, "  {}", "'upload [name]' to attach a document.".bright_black());
            }
        },
        WizardStep::Configuring => {
            let settings = wizard.settings();
            let _ = writeln!(out, "  category     {} ({})", settings.category.label(), settings.category);
            let _ = writeln!(out, "  sensitivity  {} ({})", settings.sensitivity.label(), settings.sensitivity);
            let _ = writeln!(out, "  audience     {} ({})", settings.audience.label(), settings.audience);
            let _ = writeln!(
                out,
                "  historical   {}",
                if settings.include_historical { "on" } else { "off" }
            );
            let _ = writeln!(out, "  {}", "'set <field> <value>' to change, 'start' to analyze.".bright_black());
        }
        WizardStep::Processing | WizardStep::Done => {
            let progress = wizard.progress();
            for stage in ProcessingStage::ALL {
                let marker = if progress.completed.contains(&stage) {
                    "✓".green()
                } else if progress.current == Some(stage) {
                    "…".yellow()
                } else {
                    "·".bright_black()
                };
                let _ = writeln!(out, "  {} {}", marker, stage.label());
            }
            let _ = writeln!(out, "  {}%", progress.percent());
        }
    }
    out
}

pub fn processing_event(event: &ProcessingEvent) -> String {
    match event {
        ProcessingEvent::StageStarted { stage } => {
            format!("  {} {}", "…".yellow(), stage.label())
        }
        ProcessingEvent::StageCompleted { stage, percent } => {
            format!("  {} {} {}", "✓".green(), stage.label(), format!("{percent}%").bright_black())
        }
        ProcessingEvent::Finished { analysis_id } => {
            format!("  {} {}", "→".bright_cyan(), analysis_id.bright_cyan())
        }
    }
}

pub fn report(report: &AnalysisReport) -> String {
    let analysis = &report.analysis;
    let mut out = String::new();
    let _ = writeln!(out, "{}", title(&analysis.title));
    if report.fallback {
        let _ = writeln!(out, "  {}", "No record for the requested id; showing the default analysis.".yellow());
    }
    let _ = writeln!(
        out,
        "  {} · {} · {}",
        analysis.document_name,
        analysis.category.label(),
        analysis.date
    );

    let verdict = match report.verdict {
        Verdict::Stop => report.verdict.label().red().bold(),
        Verdict::ReviewRequired => report.verdict.label().yellow().bold(),
        Verdict::Approve => report.verdict.label().green().bold(),
    };
    let _ = writeln!(
        out,
        "  {} {}/10 {}  {}",
        "overall".bold(),
        analysis.overall_score,
        risk(analysis.risk_level),
        verdict
    );
    for score in &report.scores {
        let _ = writeln!(
            out,
            "    {} {:>2}/10 {}",
            score.dimension.label(),
            score.score,
            risk(score.level)
        );
    }

    let _ = writeln!(out, "{}", "المصطلحات الحساسة".bold());
    for term in &report.sensitive_terms {
        let _ = writeln!(out, "  {} {} → {}", risk(term.sensitivity), term.term, term.suggestion.green());
        let _ = writeln!(out, "    {}", term.context.bright_black());
    }

    let _ = writeln!(out, "{}", "التوصيات".bold());
    for recommendation in &report.recommendations {
        let _ = writeln!(out, "  {} {}", risk(recommendation.priority), recommendation.text);
    }

    if !report.historical_cases.is_empty() {
        let _ = writeln!(out, "{}", "حالات مشابهة".bold());
        for case in &report.historical_cases {
            let _ = writeln!(out, "{}", case_row(case));
        }
    }
    let _ = writeln!(out, "  {}", "'action <download|approve|archive>'".bright_black());
    out
}

fn case_row(case: &HistoricalCase) -> String {
    format!(
        "  {} {} | {} {} | {}% {}",
        case.id.bright_black(),
        case.title,
        case.entity,
        case.year,
        case.similarity,
        case.outcome.label()
    )
}

pub fn cases(list: &[&HistoricalCase], filter: &CaseFilter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title("مكتبة الحالات"));
    let query = if filter.query.is_empty() { "-" } else { filter.query.as_str() };
    let _ = writeln!(
        out,
        "  {}",
        format!("search: {query}  outcome: {}  ({} found)", filter.outcome.label(), list.len()).bright_black()
    );
    if list.is_empty() {
        let _ = writeln!(out, "  {}", "لا توجد نتائج".yellow());
    }
    for case in list {
        let _ = writeln!(out, "{}", case_row(case));
        let _ = writeln!(out, "    {}", case.key_lesson.bright_black());
    }
    out
}

pub fn placeholder(section: PlaceholderSection, summary: &DashboardSummary) -> String {
    let name = match section {
        PlaceholderSection::Reports => "التقارير",
        PlaceholderSection::Settings => "الإعدادات",
        PlaceholderSection::Developers => "للمطورين",
    };
    format!(
        "{}\n{}",
        format!("{name}: coming soon, showing the dashboard.").bright_black(),
        dashboard(summary)
    )
}

pub fn not_found(path: &str) -> String {
    format!(
        "{}\n  {}\n  {}\n",
        "404".red().bold(),
        format!("No page at '{path}'.").yellow(),
        "'go /' to return home.".bright_black()
    )
}

/// Notifications shown in the header dropdown.
pub const NOTIFICATION_PREVIEW: usize = 5;

pub fn notifications(list: &[Notification], unread: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", title("الإشعارات"), format!("({unread} unread)").bright_black());
    for notification in list.iter().take(NOTIFICATION_PREVIEW) {
        let marker = if notification.is_unread() { "●".bright_cyan() } else { " ".normal() };
        let _ = writeln!(
            out,
            "{} {} [{}] {} {}",
            marker,
            notification.id.bright_black(),
            notification.category.label(),
            notification.title.bold(),
            notification.occurred_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
        );
        let _ = writeln!(out, "    {}", notification.message);
    }
    if list.len() > NOTIFICATION_PREVIEW {
        let _ = writeln!(
            out,
            "  {}",
            format!("+{} older", list.len() - NOTIFICATION_PREVIEW).bright_black()
        );
    }
    out
}

pub fn user(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", user.name.bold(), format!("<{}>", user.email).bright_black());
    let _ = writeln!(out, "  {} · {}", user.role, user.department);
    let permissions: Vec<&str> = user.permissions.iter().map(String::as_str).collect();
    let _ = writeln!(out, "  {}", permissions.join(", ").bright_black());
    out
}

pub fn toast(toast: &Toast) -> String {
    let title = match toast.level {
        ToastLevel::Success => toast.title.green().bold(),
        ToastLevel::Info => toast.title.bright_cyan().bold(),
    };
    format!("{}\n  {}\n", title, toast.description.bright_black())
}

pub fn help() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Commands:".bold());
    let usage = [
        ("login", "sign in as the demo user"),
        ("logout", "end the session"),
        ("go <path>", "open a page, e.g. /cases or /analysis/ana_002"),
        ("whoami", "show the signed-in user"),
        ("notifications", "list notifications"),
        ("read <id>", "mark a notification as read"),
        ("sidebar", "collapse or expand the sidebar"),
        ("upload [name]", "attach a document to a new analysis"),
        ("remove", "detach the document"),
        ("next", "continue to the next wizard step"),
        ("set <field> <value>", "category, sensitivity, audience or historical"),
        ("start", "run the analysis"),
        ("cases [text] [--outcome x]", "search the case library"),
        ("action <name>", "download, approve or archive a result"),
        ("help", "show this list"),
        ("quit", "leave"),
    ];
    for (command, description) in usage {
        let _ = writeln!(out, "  {} {}",
            format!("{command:<28}").bright_cyan(),
            description.bright_black());
    }
    out
}
