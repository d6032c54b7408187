//! Home Page
//!
//! Hero with name and description, a quick intro, and links to the other pages.

use gpui::{
    ClickEvent, Context, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::card::Card;
use crate::content::HOME;
use crate::domain::profile::OWNER_NAME;
use crate::features::{page_container, suppressed};
use crate::state::LocaleAwarePage;
use crate::theme::colors::PortfolioColors;
use crate::theme::typography::Typography;

/// Home page component
pub struct HomePage {
    entities: AppEntities,
    locale: LocaleAwarePage,
}

impl HomePage {
    pub fn new(entities: AppEntities, _cx: &mut Context<Self>) -> Self {
        let mut locale = LocaleAwarePage::new(Route::Home);
        locale.mount(&entities.locale);
        Self { entities, locale }
    }

    fn nav_button(&self, id: &'static str, label: &'static str, route: Route, primary: bool) -> Button {
        let entities = self.entities.clone();
        let button = if primary {
            Button::primary(id, label)
        } else {
            Button::outline(id, label)
        };
        button
            .size(ButtonSize::Large)
            .on_click(move |_event: &ClickEvent, _window, cx| entities.navigate(route, cx))
    }
}

impl Render for HomePage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let Some(text) = self.locale.render(&HOME) else {
            return suppressed();
        };

        page_container("home-page")
            // Hero
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_6()
                    .max_w(px(820.0))
                    .pt_12()
                    .child(
                        div()
                            .text_color(PortfolioColors::text_secondary())
                            .text_size(px(Typography::TEXT_2XL))
                            .child(text.greeting),
                    )
                    .child(
                        div()
                            .text_color(PortfolioColors::text_primary())
                            .text_size(px(Typography::TEXT_HERO))
                            .font_weight(gpui::FontWeight::BOLD)
                            .child(OWNER_NAME),
                    )
                    .child(
                        div()
                            .text_color(PortfolioColors::text_secondary())
                            .text_size(px(Typography::TEXT_LG))
                            .text_center()
                            .child(text.description),
                    )
                    .child(
                        div()
                            .flex()
                            .gap_4()
                            .child(self.nav_button("hero-contact", text.contact, Route::Contact, true))
                            .child(self.nav_button(
                                "hero-projects",
                                text.view_projects,
                                Route::Projects,
                                false,
                            )),
                    ),
            )
            // Quick intro
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_6()
                    .child(
                        div()
                            .text_color(PortfolioColors::text_primary())
                            .text_size(px(Typography::TEXT_2XL))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(text.intro_title),
                    )
                    .child(
                        div()
                            .text_color(PortfolioColors::text_muted())
                            .child(text.intro_subtitle),
                    )
                    .child(div().flex().gap_6().children(text.intro_cards.iter().map(
                        |(title, description)| {
                            Card::new().title(*title).child(
                                div()
                                    .text_color(PortfolioColors::text_secondary())
                                    .text_size(px(Typography::TEXT_SM))
                                    .child(*description),
                            )
                        },
                    ))),
            )
            // Call to action
            .child(
                Card::new().child(
                    div()
                        .flex()
                        .flex_col()
                        .items_center()
                        .gap_4()
                        .child(
                            div()
                                .text_color(PortfolioColors::text_primary())
                                .text_size(px(Typography::TEXT_XL))
                                .font_weight(gpui::FontWeight::SEMIBOLD)
                                .child(text.cta_title),
                        )
                        .child(
                            div()
                                .text_color(PortfolioColors::text_secondary())
                                .child(text.cta_subtitle),
                        )
                        .child(
                            div()
                                .flex()
                                .gap_3()
                                .child(self.nav_button("cta-about", text.cta_about, Route::About, true))
                                .child(self.nav_button(
                                    "cta-projects",
                                    text.cta_projects,
                                    Route::Projects,
                                    false,
                                ))
                                .child(self.nav_button(
                                    "cta-skills",
                                    text.cta_skills,
                                    Route::Skills,
                                    false,
                                )),
                        ),
                ),
            )
            .into_any_element()
    }
}
