//! Button Component

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::PortfolioColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled purple call to action
    #[default]
    Primary,
    /// Bordered, transparent fill
    Outline,
    /// Text only until hovered
    Ghost,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    selected: bool,
    full_width: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            selected: false,
            full_width: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Render as the chosen entry of a group (active filter, current page)
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create an outline button
    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let variant = if self.selected {
            ButtonVariant::Primary
        } else {
            self.variant
        };

        let (bg_color, text_color, border_color, hover_bg) = match variant {
            ButtonVariant::Primary => (
                PortfolioColors::accent(),
                PortfolioColors::text_primary(),
                PortfolioColors::accent(),
                PortfolioColors::accent_hover(),
            ),
            ButtonVariant::Outline => (
                gpui::rgba(0x00000000),
                PortfolioColors::text_secondary(),
                PortfolioColors::border_focus(),
                PortfolioColors::ghost_hover(),
            ),
            ButtonVariant::Ghost => (
                gpui::rgba(0x00000000),
                PortfolioColors::text_secondary(),
                gpui::rgba(0x00000000),
                PortfolioColors::ghost_hover(),
            ),
        };

        let (padding_x, padding_y, font_size) = match self.size {
            ButtonSize::Small => (px(10.0), px(4.0), px(13.0)),
            ButtonSize::Medium => (px(16.0), px(8.0), px(14.0)),
            ButtonSize::Large => (px(28.0), px(12.0), px(16.0)),
        };

        let mut element = div()
            .id(self.id)
            .flex()
            .justify_center()
            .px(padding_x)
            .py(padding_y)
            .bg(bg_color)
            .border_1()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(font_size)
            .rounded_md()
            .cursor_pointer()
            .hover(move |s| s.bg(hover_bg))
            .child(self.label);

        if self.full_width {
            element = element.w_full();
        }
        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
