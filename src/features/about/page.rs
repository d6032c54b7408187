//! About Page

use gpui::{Context, IntoElement, ParentElement, Render, Rgba, Styled, Window, div, prelude::*, px};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::card::Card;
use crate::content::{ABOUT, AboutText};
use crate::domain::SkillLevel;
use crate::domain::profile::{self, LOCATION, PROGRAMME};
use crate::features::{page_container, page_header, suppressed};
use crate::state::LocaleAwarePage;
use crate::theme::colors::PortfolioColors;
use crate::theme::typography::Typography;

/// About page component
pub struct AboutPage {
    locale: LocaleAwarePage,
    age: u32,
}

impl AboutPage {
    pub fn new(entities: AppEntities, _cx: &mut Context<Self>) -> Self {
        let mut locale = LocaleAwarePage::new(Route::About);
        locale.mount(&entities.locale);
        Self {
            locale,
            age: profile::current_age(),
        }
    }

    fn render_fact(label: &'static str, value: impl Into<gpui::SharedString>) -> impl IntoElement {
        div()
            .flex()
            .justify_between()
            .gap_4()
            .child(div().text_color(PortfolioColors::text_muted()).child(label))
            .child(div().text_color(PortfolioColors::text_primary()).child(value.into()))
    }

    fn render_tags(title: &'static str, tags: &'static [&'static str], color: Rgba) -> impl IntoElement {
        Card::new().title(title).child(
            div()
                .flex()
                .flex_wrap()
                .gap_2()
                .children(tags.iter().map(move |tag| Badge::new(*tag).color(color))),
        )
    }

    fn render_quick_facts(&self, text: &'static AboutText) -> impl IntoElement {
        Card::new()
            .title(text.quick_facts)
            .child(Self::render_fact(text.age, format!("{} {}", self.age, text.years)))
            .child(Self::render_fact(text.location, LOCATION))
            .child(Self::render_fact(text.education, PROGRAMME))
            .child(Self::render_fact(text.languages, text.spoken_languages))
            .child(
                div()
                    .pt_2()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(div().text_color(PortfolioColors::text_muted()).child(text.current_status))
                    .child(
                        div()
                            .text_color(PortfolioColors::level(SkillLevel::Expert))
                            .child(text.looking_for),
                    ),
            )
    }
}

impl Render for AboutPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let Some(text) = self.locale.render(&ABOUT) else {
            return suppressed();
        };

        page_container("about-page")
            .child(page_header(text.title, text.subtitle))
            .child(
                div()
                    .flex()
                    .gap_8()
                    .max_w(px(1100.0))
                    // Story
                    .child(
                        div().flex_1().child(
                            Card::new()
                                .title(text.story_title)
                                .child(
                                    div()
                                        .text_color(PortfolioColors::text_primary())
                                        .text_size(px(Typography::TEXT_XL))
                                        .child(text.intro),
                                )
                                .children(text.story.iter().map(|paragraph| {
                                    div()
                                        .text_color(PortfolioColors::text_secondary())
                                        .text_size(px(Typography::TEXT_BASE))
                                        .child(*paragraph)
                                })),
                        ),
                    )
                    .child(div().w(px(340.0)).child(self.render_quick_facts(text))),
            )
            .child(
                div()
                    .flex()
                    .gap_6()
                    .max_w(px(1100.0))
                    .child(Self::render_tags(text.passions, text.passion_tags, PortfolioColors::text_active()))
                    .child(Self::render_tags(text.values, text.value_tags, PortfolioColors::accent_blue()))
                    .child(Self::render_tags(text.hobbies, text.hobby_tags, PortfolioColors::accent_cyan())),
            )
            .into_any_element()
    }
}
