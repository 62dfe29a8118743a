//! Route table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every destination the application knows about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Route {
    /// `/`
    Root,
    /// `/dashboard`
    Dashboard,
    /// `/analysis/new`
    NewAnalysis,
    /// `/analysis/:id`
    Analysis { id: String },
    /// `/analyses`
    Analyses,
    /// `/cases`
    Cases,
    /// `/reports`
    Reports,
    /// `/settings`
    Settings,
    /// `/developers`
    Developers,
    /// Anything else
    NotFound { path: String },
}

/// Strips hash-routing prefix, query string and fragment, and returns the
/// non-empty path segments.
fn segments(path: &str) -> Vec<&str> {
    let path = path.trim();
    let path = path.strip_prefix('#').unwrap_or(path);
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

impl Route {
    /// Maps a path onto the route table. Never fails: unmatched paths become
    /// [`Route::NotFound`].
    pub fn parse(path: &str) -> Self {
        match segments(path).as_slice() {
            [] => Self::Root,
            ["dashboard"] => Self::Dashboard,
            ["analysis", "new"] => Self::NewAnalysis,
            ["analysis", id] => Self::Analysis { id: id.to_string() },
            ["analyses"] => Self::Analyses,
            ["cases"] => Self::Cases,
            ["reports"] => Self::Reports,
            ["settings"] => Self::Settings,
            ["developers"] => Self::Developers,
            other => Self::NotFound {
                path: format!("/{}", other.join("/")),
            },
        }
    }

    /// Canonical path of the route.
    pub fn path(&self) -> String {
        match self {
            Self::Root => "/".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::NewAnalysis => "/analysis/new".to_string(),
            Self::Analysis { id } => format!("/analysis/{id}"),
            Self::Analyses => "/analyses".to_string(),
            Self::Cases => "/cases".to_string(),
            Self::Reports => "/reports".to_string(),
            Self::Settings => "/settings".to_string(),
            Self::Developers => "/developers".to_string(),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Whether the route is only rendered for an authenticated session.
    pub fn requires_auth(&self) -> bool {
        match self {
            Self::Root | Self::NotFound { .. } => false,
            Self::Dashboard
            | Self::NewAnalysis
            | Self::Analysis { .. }
            | Self::Analyses
            | Self::Cases
            | Self::Reports
            | Self::Settings
            | Self::Developers => true,
        }
    }
}

impl FromStr for Route {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Sections that do not have their own view yet and reuse the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderSection {
    Reports,
    Settings,
    Developers,
}

/// What ends up on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum View {
    Login,
    Dashboard,
    NewAnalysis,
    AnalysisResults { id: String },
    Analyses,
    Cases,
    /// Renders the dashboard under another section's route
    Placeholder { section: PlaceholderSection },
    NotFound { path: String },
}

/// Frame a view renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// No chrome (login and not-found)
    Bare,
    /// Sidebar, header and footer around the view
    Shell,
}

/// Outcome of resolving one route against the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resolution {
    Render { view: View, layout: Layout },
    Redirect { to: Route },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_table() {
        assert_eq!(Route::parse("/"), Route::Root);
        assert_eq!(Route::parse(""), Route::Root);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/analysis/new"), Route::NewAnalysis);
        assert_eq!(
            Route::parse("/analysis/ana_002"),
            Route::Analysis {
                id: "ana_002".to_string()
            }
        );
        assert_eq!(Route::parse("/analyses"), Route::Analyses);
        assert_eq!(Route::parse("/cases"), Route::Cases);
        assert_eq!(Route::parse("/reports"), Route::Reports);
        assert_eq!(Route::parse("/settings"), Route::Settings);
        assert_eq!(Route::parse("/developers"), Route::Developers);
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(Route::parse("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::parse("#/cases"), Route::Cases);
        assert_eq!(Route::parse("/cases?q=x"), Route::Cases);
        assert_eq!(Route::parse("dashboard"), Route::Dashboard);
    }

    #[test]
    fn test_parse_unknown_paths() {
        assert_eq!(
            Route::parse("/nope"),
            Route::NotFound {
                path: "/nope".to_string()
            }
        );
        assert!(matches!(
            Route::parse("/analysis/ana_001/extra"),
            Route::NotFound { .. }
        ));
        // `/analysis` alone has no id
        assert!(matches!(Route::parse("/analysis"), Route::NotFound { .. }));
    }

    #[test]
    fn test_path_round_trip() {
        for path in [
            "/",
            "/dashboard",
            "/analysis/new",
            "/analysis/ana_003",
            "/analyses",
            "/cases",
            "/reports",
            "/settings",
            "/developers",
        ] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }

    #[test]
    fn test_requires_auth() {
        assert!(!Route::Root.requires_auth());
        assert!(!Route::parse("/missing").requires_auth());
        assert!(Route::Dashboard.requires_auth());
        assert!(Route::parse("/analysis/x").requires_auth());
    }
}
