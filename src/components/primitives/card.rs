//! Card Component

use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};

use crate::theme::colors::PortfolioColors;

/// Translucent panel with an optional title
#[derive(IntoElement, Default)]
pub struct Card {
    title: Option<SharedString>,
    children: Vec<AnyElement>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_3()
            .p_6()
            .rounded_lg()
            .bg(PortfolioColors::card_bg())
            .border_1()
            .border_color(PortfolioColors::border())
            .when_some(self.title, |this, title| {
                this.child(
                    div()
                        .text_color(PortfolioColors::text_primary())
                        .text_size(px(18.0))
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .child(title),
                )
            })
            .children(self.children)
    }
}
