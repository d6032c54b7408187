//! Navbar Component
//!
//! Top bar with the owner name, page links, language toggle and CV button.
//! It is the only place the locale is changed.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use tracing::{info, warn};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::i18n::{Locale, t};
use crate::state::LocaleAwarePage;
use crate::theme::colors::PortfolioColors;

/// Navbar component
pub struct Navbar {
    entities: AppEntities,
    locale: LocaleAwarePage,
}

impl Navbar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe router changes for the active link
        cx.observe(&entities.router, |_this, _, cx| cx.notify())
            .detach();

        let mut locale = LocaleAwarePage::named("navbar");
        locale.mount(&entities.locale);

        Self { entities, locale }
    }

    fn render_nav_item(&self, route: Route, locale: Locale, active: Route) -> impl IntoElement {
        let is_active = route == active;
        let entities = self.entities.clone();

        let text_color = if is_active {
            PortfolioColors::text_active()
        } else {
            PortfolioColors::text_secondary()
        };

        div()
            .id(route.path())
            .px_3()
            .py_1()
            .text_color(text_color)
            .text_size(px(14.0))
            .cursor_pointer()
            .when(is_active, |this| {
                this.font_weight(gpui::FontWeight::SEMIBOLD)
                    .border_b_2()
                    .border_color(PortfolioColors::border_focus())
            })
            .hover(|s| s.text_color(PortfolioColors::text_primary()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.navigate(route, cx);
            })
            .child(t(locale, route.title_key()))
    }

    fn download_cv(&self, cx: &mut Context<Self>) {
        match &self.entities.settings.cv_path {
            Some(path) if path.exists() => {
                info!(path = ?path, "Opening CV");
                cx.open_url(&format!("file://{}", path.display()));
            }
            Some(path) => warn!(path = ?path, "Configured CV file does not exist"),
            None => warn!("No CV configured, set cv_path in settings.toml"),
        }
    }
}

impl Render for Navbar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let Some(locale) = self.locale.locale() else {
            return div().into_any_element();
        };
        let active = self.entities.router.read(cx).active();

        div()
            .h(px(64.0))
            .w_full()
            .bg(PortfolioColors::navbar_bg())
            .border_b_1()
            .border_color(PortfolioColors::border())
            .flex()
            .items_center()
            .justify_between()
            .px_6()
            // Left side: owner name, back to home
            .child(
                div()
                    .id("brand")
                    .text_color(PortfolioColors::text_primary())
                    .text_size(px(20.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .cursor_pointer()
                    .on_click({
                        let entities = self.entities.clone();
                        move |_event: &ClickEvent, _window, cx| entities.navigate(Route::Home, cx)
                    })
                    .child(t(locale, "app-owner")),
            )
            // Center: page links
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .children(
                        Route::all()
                            .iter()
                            .map(|route| self.render_nav_item(*route, locale, active)),
                    ),
            )
            // Right side: language toggle and CV
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        Button::outline("lang-toggle", locale.toggle_label())
                            .size(ButtonSize::Small)
                            .on_click({
                                let entities = self.entities.clone();
                                move |_event: &ClickEvent, _window, cx| entities.toggle_locale(cx)
                            }),
                    )
                    .child(
                        Button::primary("download-cv", t(locale, "nav-download-cv"))
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.download_cv(cx);
                            })),
                    ),
            )
            .into_any_element()
    }
}
