//! Workspace - Main Shell with Navbar and Active Page
//!
//! Only the active page exists as an entity. Navigating replaces it, and
//! dropping the old page releases its locale subscription.

use gpui::{
    AnyView, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*,
};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::layout::background::StarField;
use crate::components::layout::navbar::Navbar;
use crate::features::about::page::AboutPage;
use crate::features::contact::page::ContactPage;
use crate::features::education::page::EducationPage;
use crate::features::home::page::HomePage;
use crate::features::projects::page::ProjectsPage;
use crate::features::skills::page::SkillsPage;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    navbar: Entity<Navbar>,
    page: (Route, AnyView),
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let navbar = cx.new(|cx| Navbar::new(entities.clone(), cx));

        let route = entities.router.read(cx).active();
        let page = (route, Self::create_page(route, &entities, cx));

        // Swap the page when the router changes
        cx.observe(&entities.router, |this, router, cx| {
            let route = router.read(cx).active();
            if route != this.page.0 {
                let view = Self::create_page(route, &this.entities, cx);
                this.page = (route, view);
                cx.notify();
            }
        })
        .detach();

        Self {
            entities,
            navbar,
            page,
        }
    }

    /// Build a fresh page view for the given route
    fn create_page(route: Route, entities: &AppEntities, cx: &mut Context<Self>) -> AnyView {
        debug!(path = route.path(), "Creating page view");
        let entities = entities.clone();
        match route {
            Route::Home => cx.new(|cx| HomePage::new(entities, cx)).into(),
            Route::About => cx.new(|cx| AboutPage::new(entities, cx)).into(),
            Route::Education => cx.new(|cx| EducationPage::new(entities, cx)).into(),
            Route::Projects => cx.new(|cx| ProjectsPage::new(entities, cx)).into(),
            Route::Skills => cx.new(|cx| SkillsPage::new(entities, cx)).into(),
            Route::Contact => cx.new(|cx| ContactPage::new(entities, cx)).into(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .relative()
            .child(StarField)
            .child(
                div()
                    .absolute()
                    .inset_0()
                    .flex()
                    .flex_col()
                    .child(self.navbar.clone())
                    .child(
                        // Content
                        div()
                            .flex_1()
                            .overflow_hidden()
                            .child(self.page.1.clone()),
                    ),
            )
    }
}
