//! Navigation surface: route table, authorization guard and layout chrome.
//!
//! - `model`: Routes, views and resolutions
//! - `guard`: Resolves a route against the session
//! - `navigation`: Breadcrumbs and sidebar items

mod guard;
mod model;
mod navigation;

pub use guard::{MAX_REDIRECTS, Navigation, navigate, resolve};
pub use model::{Layout, PlaceholderSection, Resolution, Route, View};
pub use navigation::{Breadcrumb, NavItem, breadcrumbs, nav_items};
