//! ProjectsState - Filter State and Visible Projects

use tracing::debug;

use crate::domain::{CategoryFilter, FilterState, ProjectRecord, visible};
use crate::i18n::Locale;

/// State for the projects page.
///
/// The visible list is recomputed only when the filter or the locale
/// differs from the last computation.
#[derive(Debug)]
pub struct ProjectsState {
    catalog: &'static [ProjectRecord],
    filter: FilterState,
    cache: Option<(Locale, Vec<&'static ProjectRecord>)>,
    recomputations: u64,
}

impl ProjectsState {
    pub fn new(catalog: &'static [ProjectRecord]) -> Self {
        Self {
            catalog,
            filter: FilterState::default(),
            cache: None,
            recomputations: 0,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        if self.filter.category != category {
            self.filter.category = category;
            self.cache = None;
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.filter.search != search {
            self.filter.search = search;
            self.cache = None;
        }
    }

    /// Append typed text to the query
    pub fn push_search(&mut self, text: &str) {
        if !text.is_empty() {
            self.filter.search.push_str(text);
            self.cache = None;
        }
    }

    /// Remove the last character of the query
    pub fn pop_search(&mut self) {
        if self.filter.search.pop().is_some() {
            self.cache = None;
        }
    }

    /// Back to (All, "")
    pub fn reset(&mut self) {
        if !self.filter.is_default() {
            self.filter.reset();
            self.cache = None;
        }
    }

    /// Projects passing the filter in `locale`, in catalog order
    pub fn visible(&mut self, locale: Locale) -> &[&'static ProjectRecord] {
        let stale = !matches!(&self.cache, Some((cached, _)) if *cached == locale);
        if stale {
            let projects = visible(self.catalog, &self.filter, locale);
            self.recomputations += 1;
            debug!(
                locale = %locale,
                category = ?self.filter.category,
                search = %self.filter.search,
                count = projects.len(),
                "Recomputed visible projects"
            );
            self.cache = Some((locale, projects));
        }

        match &self.cache {
            Some((_, projects)) => projects,
            None => &[],
        }
    }

    /// Number of times the visible list was computed
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CATALOG, ProjectCategory};

    fn ids(state: &mut ProjectsState, locale: Locale) -> Vec<u32> {
        state.visible(locale).iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_visible_is_memoized_per_locale() {
        let mut state = ProjectsState::new(&CATALOG);
        assert_eq!(ids(&mut state, Locale::Fr), vec![1, 2, 3, 4, 5, 6]);
        state.visible(Locale::Fr);
        assert_eq!(state.recomputations(), 1);

        state.visible(Locale::En);
        assert_eq!(state.recomputations(), 2);
    }

    #[test]
    fn test_filter_changes_invalidate() {
        let mut state = ProjectsState::new(&CATALOG);
        state.visible(Locale::En);

        state.set_category(CategoryFilter::Only(ProjectCategory::Personal));
        assert_eq!(ids(&mut state, Locale::En), vec![3, 5]);

        // Same value again keeps the cache
        state.set_category(CategoryFilter::Only(ProjectCategory::Personal));
        state.visible(Locale::En);
        assert_eq!(state.recomputations(), 2);
    }

    #[test]
    fn test_typing_and_reset() {
        let mut state = ProjectsState::new(&CATALOG);
        state.push_search("vmwa");
        state.push_search("r");
        assert_eq!(ids(&mut state, Locale::Fr), vec![6]);

        state.pop_search();
        assert_eq!(state.filter().search, "vmwa");

        state.set_search("nothing matches this");
        assert!(state.visible(Locale::En).is_empty());

        state.reset();
        assert!(state.filter().is_default());
        assert_eq!(state.visible(Locale::En).len(), state.catalog_len());
    }
}
