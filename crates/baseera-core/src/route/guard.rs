//! Authorization guard.
//!
//! Protected routes redirect anonymous sessions to `/`, which renders the
//! login view. `/` itself redirects authenticated sessions to the dashboard,
//! so it is never a terminal state once logged in.

use serde::{Deserialize, Serialize};

use super::model::{Layout, PlaceholderSection, Resolution, Route, View};
use crate::session::Session;

/// Upper bound on redirects followed by [`navigate`]. The route table needs
/// at most one.
pub const MAX_REDIRECTS: usize = 4;

/// Resolves one route against the session without following redirects.
pub fn resolve(route: &Route, session: &Session) -> Resolution {
    let authenticated = session.is_authenticated();

    if route.requires_auth() && !authenticated {
        return Resolution::Redirect { to: Route::Root };
    }

    let shell = |view| Resolution::Render {
        view,
        layout: Layout::Shell,
    };

    match route {
        Route::Root if authenticated => Resolution::Redirect {
            to: Route::Dashboard,
        },
        Route::Root => Resolution::Render {
            view: View::Login,
            layout: Layout::Bare,
        },
        Route::Dashboard => shell(View::Dashboard),
        Route::NewAnalysis => shell(View::NewAnalysis),
        Route::Analysis { id } => shell(View::AnalysisResults { id: id.clone() }),
        Route::Analyses => shell(View::Analyses),
        Route::Cases => shell(View::Cases),
        Route::Reports => shell(View::Placeholder {
            section: PlaceholderSection::Reports,
        }),
        Route::Settings => shell(View::Placeholder {
            section: PlaceholderSection::Settings,
        }),
        Route::Developers => shell(View::Placeholder {
            section: PlaceholderSection::Developers,
        }),
        Route::NotFound { path } => Resolution::Render {
            view: View::NotFound { path: path.clone() },
            layout: Layout::Bare,
        },
    }
}

/// Result of navigating to a path: the view that rendered and how we got there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub requested: Route,
    /// Routes passed through on the way, in order
    pub redirects: Vec<Route>,
    /// Route whose view rendered
    pub location: Route,
    pub view: View,
    pub layout: Layout,
}

impl Navigation {
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

/// Parses `path` and follows redirects until a view renders.
pub fn navigate(path: &str, session: &Session) -> Navigation {
    let requested = Route::parse(path);
    let mut location = requested.clone();
    let mut redirects = Vec::new();

    loop {
        match resolve(&location, session) {
            Resolution::Render { view, layout } => {
                return Navigation {
                    requested,
                    redirects,
                    location,
                    view,
                    layout,
                };
            }
            Resolution::Redirect { to } if redirects.len() < MAX_REDIRECTS => {
                tracing::debug!("[Router] {} -> {}", location, to);
                redirects.push(to.clone());
                location = to;
            }
            Resolution::Redirect { to } => {
                tracing::warn!("[Router] Redirect limit reached at {} -> {}", location, to);
                return Navigation {
                    requested,
                    redirects,
                    view: View::NotFound {
                        path: location.path(),
                    },
                    location,
                    layout: Layout::Bare,
                };
            }
        }
    }
}
