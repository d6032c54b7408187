//! AppEntities - Global Entity Handles
//!
//! Shared handles every view reaches through the GPUI global: the locale
//! store, the router entity and the loaded settings.

use std::rc::Rc;

use gpui::{App, AppContext, Entity, Global};
use tracing::info;

use crate::app::navigation::Route;
use crate::locale::LocaleStore;
use crate::settings::PortfolioSettings;
use crate::state::RouterState;

/// Collection of all global handles
#[derive(Clone)]
pub struct AppEntities {
    /// The one locale store of the application
    pub locale: LocaleStore,
    /// Active page
    pub router: Entity<RouterState>,
    /// Settings loaded at startup
    pub settings: Rc<PortfolioSettings>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities
    pub fn init(locale: LocaleStore, settings: PortfolioSettings, cx: &mut App) -> Self {
        let start_page = settings.start_page;
        Self {
            locale,
            router: cx.new(|_| RouterState::new(start_page)),
            settings: Rc::new(settings),
        }
    }

    /// Switch the active page
    pub fn navigate(&self, route: Route, cx: &mut App) {
        self.router.update(cx, |router, cx| {
            if router.navigate(route) {
                info!(path = route.path(), "Navigated");
                cx.notify();
            }
        });
    }

    /// Return to the previous page, if any
    pub fn go_back(&self, cx: &mut App) {
        self.router.update(cx, |router, cx| {
            if let Some(route) = router.back() {
                info!(path = route.path(), "Navigated back");
                cx.notify();
            }
        });
    }

    /// Toggle the locale and redraw every window.
    ///
    /// Observers are updated synchronously inside `toggle`, so the redraw
    /// already sees the new locale everywhere.
    pub fn toggle_locale(&self, cx: &mut App) {
        self.locale.toggle();
        cx.refresh_windows();
    }
}
