use portfolio_gui::content::PROJECTS;
use portfolio_gui::domain::{
    CATALOG, CategoryFilter, FilterState, ProjectCategory, ProjectRecord, visible,
};
use portfolio_gui::i18n::Locale;
use portfolio_gui::state::ProjectsState;

fn ids(projects: &[&ProjectRecord]) -> Vec<u32> {
    projects.iter().map(|p| p.id).collect()
}

#[test]
fn test_default_filter_is_identity() {
    let all: Vec<u32> = CATALOG.iter().map(|p| p.id).collect();
    for locale in Locale::ALL {
        assert_eq!(ids(&visible(&CATALOG, &FilterState::default(), locale)), all);
    }
}

#[test]
fn test_category_returns_exact_subset_in_order() {
    for category in ProjectCategory::ALL {
        let filter = FilterState::new(CategoryFilter::Only(category), "");
        let expected: Vec<u32> = CATALOG
            .iter()
            .filter(|p| p.category == category)
            .map(|p| p.id)
            .collect();

        for locale in Locale::ALL {
            assert_eq!(ids(&visible(&CATALOG, &filter, locale)), expected);
        }
    }
}

#[test]
fn test_search_matches_only_the_active_locale_text() {
    let filter = FilterState::new(CategoryFilter::All, "haute disponibilité");
    assert_eq!(ids(&visible(&CATALOG, &filter, Locale::Fr)), vec![4]);
    assert!(visible(&CATALOG, &filter, Locale::En).is_empty());
}

#[test]
fn test_empty_result_then_reset() {
    let mut state = ProjectsState::new(&CATALOG);
    state.set_category(CategoryFilter::Only(ProjectCategory::School));
    state.set_search("quantum blockchain");

    for locale in Locale::ALL {
        assert!(state.visible(locale).is_empty());
        // The empty state has its own explanation and reset label
        let text = PROJECTS.get(locale);
        assert!(!text.no_results.is_empty());
        assert!(!text.reset_filters.is_empty());
    }

    state.reset();
    assert_eq!(ids(state.visible(Locale::En)), ids(&CATALOG.iter().collect::<Vec<_>>()));
}

#[test]
fn test_locale_change_recomputes_visible_set() {
    let mut state = ProjectsState::new(&CATALOG);
    state.set_search("réseau");

    assert_eq!(ids(state.visible(Locale::Fr)), vec![2]);
    assert!(state.visible(Locale::En).is_empty());
    assert_eq!(state.recomputations(), 2);
}
