//! Contact Page
//!
//! Contact details, profile links and the internship proposal form. The form
//! is collected locally only; sending clears it.

use gpui::{
    ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Subscription, Styled, Window,
    div, prelude::*, px,
};
use tracing::info;

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::card::Card;
use crate::components::primitives::text_input::{TextInput, TextInputEvent};
use crate::content::{CONTACT, ContactText};
use crate::domain::profile::{EMAIL, GITHUB_URL, LINKEDIN_URL, LOCATION};
use crate::domain::{ContactField, ContactForm};
use crate::features::{page_container, page_header, suppressed};
use crate::state::LocaleAwarePage;
use crate::theme::colors::PortfolioColors;
use crate::theme::typography::Typography;

/// Contact page component
pub struct ContactPage {
    locale: LocaleAwarePage,
    form: ContactForm,
    inputs: Vec<(ContactField, Entity<TextInput>)>,
    _subscriptions: Vec<Subscription>,
}

impl ContactPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let mut locale = LocaleAwarePage::new(Route::Contact);
        locale.mount(&entities.locale);

        let mut inputs = Vec::new();
        let mut subscriptions = Vec::new();
        for (i, field) in ContactField::ALL.into_iter().enumerate() {
            let input = cx.new(|cx| {
                let mut input = TextInput::new(("contact-field", i), cx);
                input.set_multiline(field.is_multiline());
                input
            });
            subscriptions.push(cx.subscribe(&input, move |this, input, event, cx| {
                if matches!(event, TextInputEvent::Change) {
                    let value = input.read(cx).value().to_string();
                    *this.form.value_mut(field) = value;
                }
            }));
            inputs.push((field, input));
        }

        Self {
            locale,
            form: ContactForm::default(),
            inputs,
            _subscriptions: subscriptions,
        }
    }

    fn send(&mut self, cx: &mut Context<Self>) {
        info!(
            company = %self.form.company,
            position = %self.form.position,
            message_len = self.form.message.len(),
            "Contact proposal collected"
        );
        self.form.clear();
        for (_, input) in &self.inputs {
            input.update(cx, |input, cx| {
                input.set_value("");
                cx.notify();
            });
        }
        cx.notify();
    }

    fn render_info_row(label: &'static str, value: &'static str) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_color(PortfolioColors::text_muted())
                    .text_size(px(Typography::TEXT_SM))
                    .child(label),
            )
            .child(div().text_color(PortfolioColors::text_primary()).child(value))
    }

    fn render_sidebar(text: &'static ContactText) -> impl IntoElement {
        div()
            .w(px(380.0))
            .flex()
            .flex_col()
            .gap_6()
            .child(
                Card::new()
                    .title(text.contact_info)
                    .child(Self::render_info_row(text.email, EMAIL))
                    .child(Self::render_info_row(text.location, LOCATION))
                    .child(Self::render_info_row(text.status, text.status_value))
                    .child(Self::render_info_row(text.availability, text.availability_value)),
            )
            .child(
                Card::new()
                    .title(text.social_links)
                    .child(div().text_color(PortfolioColors::text_secondary()).child(text.social_desc))
                    .child(
                        div()
                            .flex()
                            .gap_3()
                            .child(
                                Button::outline("link-github", "GitHub")
                                    .size(ButtonSize::Small)
                                    .on_click(|_event: &ClickEvent, _window, cx| cx.open_url(GITHUB_URL)),
                            )
                            .child(
                                Button::outline("link-linkedin", "LinkedIn")
                                    .size(ButtonSize::Small)
                                    .on_click(|_event: &ClickEvent, _window, cx| cx.open_url(LINKEDIN_URL)),
                            ),
                    ),
            )
    }

    fn render_form(&self, text: &'static ContactText, cx: &mut Context<Self>) -> impl IntoElement {
        // Placeholders follow the locale
        for (field, input) in &self.inputs {
            let placeholder = text.field_placeholder(*field);
            input.update(cx, |input, _cx| input.set_placeholder(placeholder));
        }

        div().flex_1().child(
            Card::new()
                .title(text.send_message)
                .child(div().text_color(PortfolioColors::text_muted()).child(text.response_time))
                .children(self.inputs.iter().map(|(field, input)| {
                    div()
                        .flex()
                        .flex_col()
                        .gap_1()
                        .child(
                            div()
                                .text_color(PortfolioColors::text_secondary())
                                .text_size(px(Typography::TEXT_SM))
                                .child(text.field_label(*field)),
                        )
                        .child(input.clone())
                }))
                .child(
                    Button::primary("send-proposal", text.send)
                        .full_width()
                        .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| this.send(cx))),
                ),
        )
    }
}

impl Render for ContactPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let Some(text) = self.locale.render(&CONTACT) else {
            return suppressed();
        };

        page_container("contact-page")
            .child(page_header(text.title, text.subtitle))
            .child(
                div()
                    .flex()
                    .gap_8()
                    .max_w(px(1100.0))
                    .child(Self::render_sidebar(text))
                    .child(self.render_form(text, cx)),
            )
            .into_any_element()
    }
}
