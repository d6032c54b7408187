//! Badge Component

use gpui::{App, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, Window, div, px};

use crate::theme::colors::PortfolioColors;

/// A small rounded label (technology tag, category, skill level)
#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
    color: Rgba,
}

impl Badge {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            color: PortfolioColors::text_secondary(),
        }
    }

    /// Tint text and border with `color`
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut border = self.color;
        border.a = 0.35;
        let mut fill = self.color;
        fill.a = 0.12;

        div()
            .px_2()
            .py(px(2.0))
            .rounded_full()
            .border_1()
            .border_color(border)
            .bg(fill)
            .text_color(self.color)
            .text_size(px(12.0))
            .child(self.label)
    }
}
