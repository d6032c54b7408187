//! Projects Page
//!
//! Search box, category filter buttons and the visible project cards. An
//! empty result shows an explanation with a reset button.

use gpui::{
    ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Subscription, Styled, Window,
    div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::card::Card;
use crate::components::primitives::text_input::{TextInput, TextInputEvent, text_input};
use crate::content::{PROJECTS, ProjectsText};
use crate::domain::{CategoryFilter, ProjectCategory, ProjectRecord};
use crate::features::projects::controller::ProjectsController;
use crate::features::{page_container, page_header, suppressed};
use crate::i18n::Locale;
use crate::state::LocaleAwarePage;
use crate::theme::colors::PortfolioColors;
use crate::theme::typography::Typography;

/// Projects page component
pub struct ProjectsPage {
    locale: LocaleAwarePage,
    controller: ProjectsController,
    search: Entity<TextInput>,
    _subscriptions: Vec<Subscription>,
}

impl ProjectsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let mut locale = LocaleAwarePage::new(Route::Projects);
        let initial = locale.mount(&entities.locale);

        let search = text_input(
            "project-search",
            PROJECTS.get(initial).search_placeholder,
            cx,
        );

        let mut subscriptions = Vec::new();
        subscriptions.push(cx.subscribe(&search, |this, input, event, cx| {
            if matches!(event, TextInputEvent::Change) {
                let query = input.read(cx).value().to_string();
                this.controller.search_changed(&query);
                cx.notify();
            }
        }));

        Self {
            locale,
            controller: ProjectsController::new(),
            search,
            _subscriptions: subscriptions,
        }
    }

    fn reset_filters(&mut self, cx: &mut Context<Self>) {
        self.controller.reset();
        self.search.update(cx, |input, cx| {
            input.set_value("");
            cx.notify();
        });
        cx.notify();
    }

    fn render_filters(&self, text: &'static ProjectsText, cx: &mut Context<Self>) -> impl IntoElement {
        let active = self.controller.state().filter().category;

        div()
            .flex()
            .gap_3()
            .children(CategoryFilter::ALL.into_iter().enumerate().map(|(i, filter)| {
                Button::outline(("category-filter", i), text.filter_label(filter))
                    .size(ButtonSize::Small)
                    .selected(filter == active)
                    .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        this.controller.select_category(filter);
                        cx.notify();
                    }))
            }))
    }

    fn render_project(
        project: &'static ProjectRecord,
        locale: Locale,
        text: &'static ProjectsText,
    ) -> impl IntoElement {
        let badge_color = match project.category {
            ProjectCategory::School => PortfolioColors::accent_blue(),
            ProjectCategory::Personal => PortfolioColors::text_active(),
        };
        let source_url = project.source_url;
        let demo_url = project.demo_url;

        div().w(px(340.0)).child(
            Card::new()
                .child(
                    div()
                        .flex()
                        .justify_between()
                        .items_start()
                        .gap_2()
                        .child(
                            div()
                                .text_color(PortfolioColors::text_primary())
                                .text_size(px(Typography::TEXT_LG))
                                .font_weight(gpui::FontWeight::SEMIBOLD)
                                .child(project.title(locale)),
                        )
                        .child(Badge::new(text.badge(project.category)).color(badge_color)),
                )
                .child(
                    div()
                        .text_color(PortfolioColors::text_secondary())
                        .text_size(px(Typography::TEXT_SM))
                        .child(project.description(locale)),
                )
                .child(
                    div()
                        .flex()
                        .flex_wrap()
                        .gap_2()
                        .children(project.technologies.iter().map(|tech| Badge::new(*tech))),
                )
                .child(
                    div()
                        .flex()
                        .gap_2()
                        .child(
                            Button::outline(("project-code", project.id as usize), text.code)
                                .size(ButtonSize::Small)
                                .on_click(move |_event: &ClickEvent, _window, cx| {
                                    cx.open_url(source_url)
                                }),
                        )
                        .when(project.has_demo(), |this| {
                            this.child(
                                Button::primary(("project-demo", project.id as usize), text.demo)
                                    .size(ButtonSize::Small)
                                    .on_click(move |_event: &ClickEvent, _window, cx| {
                                        cx.open_url(demo_url)
                                    }),
                            )
                        }),
                ),
        )
    }

    fn render_empty(&self, text: &'static ProjectsText, cx: &mut Context<Self>) -> impl IntoElement {
        Card::new().child(
            div()
                .flex()
                .flex_col()
                .items_center()
                .gap_3()
                .px_12()
                .child(
                    div()
                        .text_color(PortfolioColors::text_primary())
                        .text_size(px(Typography::TEXT_XL))
                        .child(text.no_results),
                )
                .child(
                    div()
                        .text_color(PortfolioColors::text_muted())
                        .child(text.no_results_desc),
                )
                .child(
                    Button::primary("reset-filters", text.reset_filters).on_click(cx.listener(
                        |this, _event: &ClickEvent, _window, cx| this.reset_filters(cx),
                    )),
                ),
        )
    }
}

impl Render for ProjectsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (Some(locale), Some(text)) = (self.locale.locale(), self.locale.render(&PROJECTS)) else {
            return suppressed();
        };

        // The placeholder follows the locale
        self.search.update(cx, |input, _cx| input.set_placeholder(text.search_placeholder));

        let projects = self.controller.visible(locale);
        let results = if projects.is_empty() {
            self.render_empty(text, cx).into_any_element()
        } else {
            div()
                .flex()
                .flex_wrap()
                .justify_center()
                .gap_6()
                .max_w(px(1100.0))
                .children(
                    projects
                        .into_iter()
                        .map(|project| Self::render_project(project, locale, text)),
                )
                .into_any_element()
        };

        page_container("projects-page")
            .child(page_header(text.title, text.subtitle))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_4()
                    .child(div().w(px(420.0)).child(self.search.clone()))
                    .child(self.render_filters(text, cx)),
            )
            .child(results)
            .child(
                div()
                    .text_color(PortfolioColors::text_muted())
                    .text_size(px(Typography::TEXT_SM))
                    .child(text.more_coming),
            )
            .into_any_element()
    }
}
