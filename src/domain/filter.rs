//! Project Filter - category + free-text projection of the catalog

use crate::domain::project::{ProjectCategory, ProjectRecord};
use crate::helpers::contains_folded;
use crate::i18n::Locale;

/// Category selector: everything, or one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Selectors in button order
    pub const ALL: [CategoryFilter; 3] = [
        CategoryFilter::All,
        CategoryFilter::Only(ProjectCategory::School),
        CategoryFilter::Only(ProjectCategory::Personal),
    ];

    pub fn matches(self, category: ProjectCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// The (category, search text) pair driving the projects view
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub search: String,
}

impl FilterState {
    pub fn new(category: CategoryFilter, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    /// Back to (All, "")
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether this is the unfiltered state
    pub fn is_default(&self) -> bool {
        self.category == CategoryFilter::All && self.search.is_empty()
    }
}

/// Records kept by `filter`, in catalog order.
///
/// A record is kept when its category passes and, for a non-empty query,
/// the query occurs case-insensitively in the locale's title, the locale's
/// description, or any technology tag.
pub fn visible<'a>(
    catalog: &'a [ProjectRecord],
    filter: &FilterState,
    locale: Locale,
) -> Vec<&'a ProjectRecord> {
    let query = filter.search.to_lowercase();

    catalog
        .iter()
        .filter(|project| filter.category.matches(project.category))
        .filter(|project| {
            query.is_empty()
                || contains_folded(project.title(locale), &query)
                || contains_folded(project.description(locale), &query)
                || project
                    .technologies
                    .iter()
                    .any(|tech| contains_folded(tech, &query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::CATALOG;

    fn ids(projects: &[&ProjectRecord]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_filter_returns_full_catalog_in_order() {
        for locale in Locale::ALL {
            let all = visible(&CATALOG, &FilterState::default(), locale);
            assert_eq!(ids(&all), vec![1, 2, 3, 4, 5, 6]);
        }
    }

    #[test]
    fn test_category_filter_keeps_order() {
        let school = FilterState::new(CategoryFilter::Only(ProjectCategory::School), "");
        assert_eq!(ids(&visible(&CATALOG, &school, Locale::Fr)), vec![1, 2, 4, 6]);

        let personal = FilterState::new(CategoryFilter::Only(ProjectCategory::Personal), "");
        assert_eq!(ids(&visible(&CATALOG, &personal, Locale::En)), vec![3, 5]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_tags() {
        let filter = FilterState::new(CategoryFilter::All, "dOcKeR");
        assert_eq!(ids(&visible(&CATALOG, &filter, Locale::En)), vec![1, 3, 5]);
    }

    #[test]
    fn test_search_uses_locale_text() {
        let filter = FilterState::new(CategoryFilter::All, "réseau");
        assert_eq!(ids(&visible(&CATALOG, &filter, Locale::Fr)), vec![2]);
        assert!(visible(&CATALOG, &filter, Locale::En).is_empty());

        let filter = FilterState::new(CategoryFilter::All, "enterprise");
        assert_eq!(ids(&visible(&CATALOG, &filter, Locale::En)), vec![2]);
        assert!(visible(&CATALOG, &filter, Locale::Fr).is_empty());
    }

    #[test]
    fn test_category_and_search_combine() {
        let filter = FilterState::new(CategoryFilter::Only(ProjectCategory::School), "linux");
        assert_eq!(ids(&visible(&CATALOG, &filter, Locale::En)), vec![4]);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut filter = FilterState::new(CategoryFilter::Only(ProjectCategory::Personal), "zzz");
        assert!(visible(&CATALOG, &filter, Locale::Fr).is_empty());
        filter.reset();
        assert!(filter.is_default());
        assert_eq!(visible(&CATALOG, &filter, Locale::Fr).len(), CATALOG.len());
    }
}
