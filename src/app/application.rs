//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions, actions, px,
};
use tracing::error;

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::i18n::t;
use crate::locale::LocaleStore;
use crate::settings::PortfolioSettings;

actions!(portfolio, [Quit, GoBack]);

/// Run the portfolio application
pub fn run_app(locale: LocaleStore, settings: PortfolioSettings) {
    Application::new().run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.on_action(|_: &GoBack, cx: &mut App| {
            if let Some(entities) = cx.try_global::<AppEntities>().cloned() {
                entities.go_back(cx);
            }
        });
        cx.bind_keys([
            KeyBinding::new("alt-left", GoBack, None),
            KeyBinding::new("secondary-q", Quit, None),
        ]);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let size = gpui::size(px(settings.window_width), px(settings.window_height));
        let title = t(locale.current(), "app-title");

        // Initialize global entities
        let entities = AppEntities::init(locale, settings, cx);
        cx.set_global(entities.clone());

        // Create main window
        let bounds = Bounds::centered(None, size, cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(title)),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        }) {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
