//! Projects Controller
//!
//! Applies filter actions from the projects page to its `ProjectsState`.

use tracing::debug;

use crate::domain::{CATALOG, CategoryFilter, ProjectRecord};
use crate::i18n::Locale;
use crate::state::ProjectsState;

/// Projects page controller
#[derive(Debug)]
pub struct ProjectsController {
    state: ProjectsState,
}

impl Default for ProjectsController {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectsController {
    /// Create a controller over the built-in catalog
    pub fn new() -> Self {
        Self {
            state: ProjectsState::new(&CATALOG),
        }
    }

    pub fn state(&self) -> &ProjectsState {
        &self.state
    }

    /// A category button was clicked
    pub fn select_category(&mut self, category: CategoryFilter) {
        debug!(category = ?category, "Category selected");
        self.state.set_category(category);
    }

    /// The search input changed
    pub fn search_changed(&mut self, query: &str) {
        self.state.set_search(query);
    }

    /// The reset button was clicked
    pub fn reset(&mut self) {
        debug!("Filters reset");
        self.state.reset();
    }

    /// Projects to show in `locale`
    pub fn visible(&mut self, locale: Locale) -> Vec<&'static ProjectRecord> {
        self.state.visible(locale).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectCategory;

    #[test]
    fn test_actions_drive_visible_projects() {
        let mut controller = ProjectsController::new();
        controller.select_category(CategoryFilter::Only(ProjectCategory::School));
        controller.search_changed("TERRAFORM");
        let ids: Vec<u32> = controller.visible(Locale::En).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);

        controller.reset();
        assert!(controller.state().filter().is_default());
        assert_eq!(controller.visible(Locale::Fr).len(), CATALOG.len());
    }
}
