//! Navigation - Routes of the Portfolio
//!
//! Each route is one page; the nav bar lists them in `Route::all()` order.

use serde::{Deserialize, Serialize};

/// Pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Landing page with hero and quick intro
    #[default]
    Home,
    About,
    Education,
    Projects,
    Skills,
    Contact,
}

impl Route {
    /// URL-style path of the page
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Education => "/education",
            Route::Projects => "/projects",
            Route::Skills => "/skills",
            Route::Contact => "/contact",
        }
    }

    /// Get the translation key for the nav label
    pub fn title_key(&self) -> &'static str {
        match self {
            Route::Home => "nav-home",
            Route::About => "nav-about",
            Route::Education => "nav-education",
            Route::Projects => "nav-projects",
            Route::Skills => "nav-skills",
            Route::Contact => "nav-contact",
        }
    }

    /// Get all routes in nav order
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::About,
            Route::Education,
            Route::Projects,
            Route::Skills,
            Route::Contact,
        ]
    }

    /// Resolve a path, ignoring a trailing slash
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let wanted = if trimmed.is_empty() { "/" } else { trimmed };
        Self::all().iter().copied().find(|route| route.path() == wanted)
    }
}
