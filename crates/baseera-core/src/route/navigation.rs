//! Breadcrumbs and sidebar entries for the authenticated shell.

use serde::{Deserialize, Serialize};

use super::model::Route;

fn segment_label(segment: &str) -> Option<&'static str> {
    let label = match segment {
        "dashboard" => "لوحة التحكم",
        "analysis" => "التحليل",
        "new" => "جديد",
        "analyses" => "التحليلات السابقة",
        "cases" => "مكتبة الحالات",
        "reports" => "التقارير",
        "settings" => "الإعدادات",
        "developers" => "للمطورين",
        _ => return None,
    };
    Some(label)
}

/// One entry of the header's breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    /// Cumulative path up to and including this segment
    pub path: String,
    /// The last crumb is plain text, the others link to `path`
    pub is_current: bool,
}

/// Builds the breadcrumb trail for `path`, one crumb per segment.
pub fn breadcrumbs(path: &str) -> Vec<Breadcrumb> {
    let route = Route::parse(path);
    let canonical = route.path();
    let segments: Vec<&str> = canonical.split('/').filter(|s| !s.is_empty()).collect();

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| Breadcrumb {
            label: segment_label(segment)
                .map(str::to_string)
                .unwrap_or_else(|| segment.to_string()),
            path: format!("/{}", segments[..=index].join("/")),
            is_current: index + 1 == segments.len(),
        })
        .collect()
}

/// A sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
}

impl NavItem {
    /// Highlight rule: exact match, or prefix match for everything but the
    /// dashboard.
    pub fn is_active(&self, current: &Route) -> bool {
        let item_path = self.route.path();
        let current_path = current.path();
        current_path == item_path
            || (self.route != Route::Dashboard && current_path.starts_with(&item_path))
    }
}

/// The sidebar entries, in display order.
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            route: Route::Dashboard,
            label: "لوحة التحكم",
        },
        NavItem {
            route: Route::NewAnalysis,
            label: "تحليل جديد",
        },
        NavItem {
            route: Route::Analyses,
            label: "التحليلات السابقة",
        },
        NavItem {
            route: Route::Cases,
            label: "مكتبة الحالات",
        },
        NavItem {
            route: Route::Reports,
            label: "التقارير",
        },
        NavItem {
            route: Route::Settings,
            label: "الإعدادات",
        },
        NavItem {
            route: Route::Developers,
            label: "للمطورين",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadcrumbs_for_new_analysis() {
        let crumbs = breadcrumbs("/analysis/new");
        assert_eq!(crumbs.len(), 2);
        assert_eq!(crumbs[0].label, "التحليل");
        assert_eq!(crumbs[0].path, "/analysis");
        assert!(!crumbs[0].is_current);
        assert_eq!(crumbs[1].label, "جديد");
        assert_eq!(crumbs[1].path, "/analysis/new");
        assert!(crumbs[1].is_current);
    }

    #[test]
    fn test_unknown_segment_echoes_itself() {
        let crumbs = breadcrumbs("/analysis/ana_004");
        assert_eq!(crumbs[1].label, "ana_004");
    }

    #[test]
    fn test_root_has_no_breadcrumbs() {
        assert!(breadcrumbs("/").is_empty());
    }

    #[test]
    fn test_nav_items_order() {
        let paths: Vec<String> = nav_items().iter().map(|item| item.route.path()).collect();
        assert_eq!(
            paths,
            [
                "/dashboard",
                "/analysis/new",
                "/analyses",
                "/cases",
                "/reports",
                "/settings",
                "/developers"
            ]
        );
    }

    #[test]
    fn test_active_highlighting() {
        let items = nav_items();
        let dashboard = &items[0];
        let cases = &items[3];

        assert!(dashboard.is_active(&Route::Dashboard));
        assert!(!dashboard.is_active(&Route::Cases));
        assert!(cases.is_active(&Route::Cases));
        assert!(!cases.is_active(&Route::Dashboard));
    }
}
