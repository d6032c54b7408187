//! Features - One Module per Page
//!
//! Every page owns a `LocaleAwarePage`, mounted in its constructor and
//! released when the page entity is dropped.

pub mod about;
pub mod contact;
pub mod education;
pub mod home;
pub mod projects;
pub mod skills;

use gpui::{Div, ElementId, IntoElement, ParentElement, Stateful, Styled, div, prelude::*, px};

use crate::theme::colors::PortfolioColors;
use crate::theme::typography::Typography;

/// Scrollable, centered column every page renders into
pub(crate) fn page_container(id: impl Into<ElementId>) -> Stateful<Div> {
    div()
        .id(id)
        .size_full()
        .overflow_y_scroll()
        .flex()
        .flex_col()
        .items_center()
        .py_12()
        .px_8()
        .gap_12()
}

/// Centered title and subtitle at the top of a page
pub(crate) fn page_header(title: &'static str, subtitle: &'static str) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .items_center()
        .gap_4()
        .max_w(px(720.0))
        .child(
            div()
                .text_color(PortfolioColors::text_primary())
                .text_size(px(Typography::TEXT_4XL))
                .font_weight(gpui::FontWeight::BOLD)
                .child(title),
        )
        .child(
            div()
                .text_color(PortfolioColors::text_secondary())
                .text_size(px(Typography::TEXT_LG))
                .text_center()
                .child(subtitle),
        )
}

/// Rendered in place of a page that has not confirmed its locale
pub(crate) fn suppressed() -> gpui::AnyElement {
    div().into_any_element()
}
