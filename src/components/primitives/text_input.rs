//! TextInput Component
//!
//! Minimal keyboard-driven input: printable keys append, backspace deletes,
//! escape clears. Emits `TextInputEvent::Change` after every edit.

use gpui::{
    App, Context, ElementId, Entity, EventEmitter, FocusHandle, Focusable, InteractiveElement,
    IntoElement, KeyDownEvent, ParentElement, Render, SharedString, StatefulInteractiveElement,
    Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::PortfolioColors;

/// Events emitted by `TextInput`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputEvent {
    Change,
}

/// A text input component
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    multiline: bool,
    focus_handle: FocusHandle,
}

impl EventEmitter<TextInputEvent> for TextInput {}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            multiline: false,
            focus_handle: cx.focus_handle(),
        }
    }

    /// Replace the value without emitting a change
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Accept Enter as a newline
    pub fn set_multiline(&mut self, multiline: bool) {
        self.multiline = multiline;
    }

    fn handle_input(&mut self, text: &str, cx: &mut Context<Self>) {
        self.value.push_str(text);
        cx.emit(TextInputEvent::Change);
        cx.notify();
    }

    fn handle_backspace(&mut self, cx: &mut Context<Self>) {
        if self.value.pop().is_some() {
            cx.emit(TextInputEvent::Change);
            cx.notify();
        }
    }

    fn handle_clear(&mut self, cx: &mut Context<Self>) {
        if !self.value.is_empty() {
            self.value.clear();
            cx.emit(TextInputEvent::Change);
            cx.notify();
        }
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform {
            return;
        }

        match keystroke.key.as_str() {
            "backspace" => self.handle_backspace(cx),
            "escape" => self.handle_clear(cx),
            "enter" if self.multiline => self.handle_input("\n", cx),
            "enter" | "tab" => {}
            _ => {
                if let Some(text) = keystroke.key_char.as_deref() {
                    self.handle_input(text, cx);
                }
            }
        }
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            PortfolioColors::border_focus()
        } else {
            PortfolioColors::border()
        };

        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else if is_focused {
            SharedString::from(format!("{}|", self.value))
        } else {
            SharedString::from(self.value.clone())
        };

        let text_color = if self.value.is_empty() {
            PortfolioColors::input_placeholder()
        } else {
            PortfolioColors::text_primary()
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .on_click(cx.listener(|this, _, window, _cx| {
                window.focus(&this.focus_handle);
            }))
            .px_3()
            .py_2()
            .bg(PortfolioColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(200.0))
            .when(self.multiline, |this| this.min_h(px(120.0)))
            .cursor_text()
            .child(display_text)
    }
}

/// Create a text input entity
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_placeholder(placeholder);
        input
    })
}
