//! Education Page

use gpui::{Context, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*, px};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::card::Card;
use crate::content::{EDUCATION, EducationText, Programme};
use crate::features::{page_container, page_header, suppressed};
use crate::state::LocaleAwarePage;
use crate::theme::colors::PortfolioColors;
use crate::theme::typography::Typography;

/// Education page component
pub struct EducationPage {
    locale: LocaleAwarePage,
}

impl EducationPage {
    pub fn new(entities: AppEntities, _cx: &mut Context<Self>) -> Self {
        let mut locale = LocaleAwarePage::new(Route::Education);
        locale.mount(&entities.locale);
        Self { locale }
    }

    fn render_list(title: &'static str, items: &'static [&'static str]) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_color(PortfolioColors::text_primary())
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(title),
            )
            .children(items.iter().map(|item| {
                div()
                    .text_color(PortfolioColors::text_secondary())
                    .text_size(px(Typography::TEXT_SM))
                    .child(format!("• {item}"))
            }))
    }

    fn render_programme(
        heading: &'static str,
        programme: &'static Programme,
        current_badge: Option<&'static str>,
        text: &'static EducationText,
    ) -> impl IntoElement {
        Card::new()
            .title(heading)
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .text_color(PortfolioColors::text_primary())
                            .text_size(px(Typography::TEXT_XL))
                            .font_weight(gpui::FontWeight::BOLD)
                            .child(programme.degree),
                    )
                    .when_some(current_badge, |this, badge| {
                        this.child(Badge::new(badge).color(PortfolioColors::text_active()))
                    }),
            )
            .child(
                div()
                    .flex()
                    .gap_4()
                    .text_color(PortfolioColors::text_muted())
                    .text_size(px(Typography::TEXT_SM))
                    .child(programme.school)
                    .child(programme.period)
                    .child(programme.status),
            )
            .child(
                div()
                    .flex()
                    .gap_8()
                    .child(Self::render_list(text.key_subjects, programme.subjects))
                    .when(!programme.projects.is_empty(), |this| {
                        this.child(Self::render_list(text.projects, programme.projects))
                    })
                    .child(Self::render_list(text.achievements, programme.achievements)),
            )
    }
}

impl Render for EducationPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let Some(text) = self.locale.render(&EDUCATION) else {
            return suppressed();
        };

        page_container("education-page")
            .child(page_header(text.title, text.subtitle))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_8()
                    .max_w(px(1000.0))
                    .child(Self::render_programme(
                        text.current_education,
                        &text.current,
                        Some(text.current_badge),
                        text,
                    ))
                    .child(Self::render_programme(
                        text.previous_education,
                        &text.previous,
                        None,
                        text,
                    ))
                    .child(
                        Card::new().title(text.certifications_title).child(
                            div().flex().gap_6().children(text.certifications.iter().map(|cert| {
                                div()
                                    .flex()
                                    .flex_col()
                                    .gap_1()
                                    .child(
                                        div()
                                            .text_color(PortfolioColors::text_primary())
                                            .font_weight(gpui::FontWeight::SEMIBOLD)
                                            .child(cert.name),
                                    )
                                    .child(Badge::new(cert.status))
                                    .child(
                                        div()
                                            .text_color(PortfolioColors::text_muted())
                                            .text_size(px(Typography::TEXT_XS))
                                            .child(cert.date),
                                    )
                            })),
                        ),
                    ),
            )
            .into_any_element()
    }
}
