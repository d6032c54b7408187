//! Skills Page

use gpui::{Context, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*, px};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::card::Card;
use crate::components::primitives::rating::Rating;
use crate::content::{SKILLS, SkillsText};
use crate::domain::{SKILL_GROUPS, Skill, SkillLevel};
use crate::features::{page_container, page_header, suppressed};
use crate::state::LocaleAwarePage;
use crate::theme::colors::PortfolioColors;

/// Skills page component
pub struct SkillsPage {
    locale: LocaleAwarePage,
}

impl SkillsPage {
    pub fn new(entities: AppEntities, _cx: &mut Context<Self>) -> Self {
        let mut locale = LocaleAwarePage::new(Route::Skills);
        locale.mount(&entities.locale);
        Self { locale }
    }

    fn render_skill(skill: &Skill, text: &'static SkillsText) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .flex()
                    .justify_between()
                    .items_center()
                    .child(
                        div()
                            .text_color(PortfolioColors::text_secondary())
                            .child(skill.name),
                    )
                    .child(Rating::new(skill.level)),
            )
            .child(
                div().flex().justify_end().child(
                    Badge::new(text.level(skill.level)).color(PortfolioColors::level(skill.level)),
                ),
            )
    }

    fn render_legend(text: &'static SkillsText) -> impl IntoElement {
        Card::new().title(text.legend).child(
            div()
                .flex()
                .flex_wrap()
                .justify_center()
                .gap_6()
                .children(SkillLevel::ALL.into_iter().map(|level| {
                    div()
                        .flex()
                        .items_center()
                        .gap_2()
                        .child(Rating::new(level))
                        .child(
                            div()
                                .text_color(PortfolioColors::level(level))
                                .text_size(px(13.0))
                                .child(text.level(level)),
                        )
                })),
        )
    }
}

impl Render for SkillsPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let Some(text) = self.locale.render(&SKILLS) else {
            return suppressed();
        };

        page_container("skills-page")
            .child(page_header(text.title, text.subtitle))
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .justify_center()
                    .gap_8()
                    .max_w(px(1200.0))
                    .children(SKILL_GROUPS.iter().map(|(area, skills)| {
                        div().w(px(360.0)).child(
                            Card::new()
                                .title(text.area(*area))
                                .children(skills.iter().map(|skill| Self::render_skill(skill, text))),
                        )
                    })),
            )
            .child(Self::render_legend(text))
            .into_any_element()
    }
}
