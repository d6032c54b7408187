//! Projects page text

use crate::domain::{CategoryFilter, ProjectCategory};
use crate::i18n::Bilingual;

#[derive(Debug)]
pub struct ProjectsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub all: &'static str,
    pub school: &'static str,
    pub personal: &'static str,
    pub school_badge: &'static str,
    pub personal_badge: &'static str,
    pub code: &'static str,
    pub demo: &'static str,
    pub more_coming: &'static str,
    pub search_placeholder: &'static str,
    pub no_results: &'static str,
    pub no_results_desc: &'static str,
    pub reset_filters: &'static str,
}

impl ProjectsText {
    /// Label of a filter button
    pub fn filter_label(&self, filter: CategoryFilter) -> &'static str {
        match filter {
            CategoryFilter::All => self.all,
            CategoryFilter::Only(ProjectCategory::School) => self.school,
            CategoryFilter::Only(ProjectCategory::Personal) => self.personal,
        }
    }

    /// Badge shown on a project card
    pub fn badge(&self, category: ProjectCategory) -> &'static str {
        match category {
            ProjectCategory::School => self.school_badge,
            ProjectCategory::Personal => self.personal_badge,
        }
    }
}

pub static PROJECTS: Bilingual<ProjectsText> = Bilingual::new(
    ProjectsText {
        title: "Mes Projets",
        subtitle: "Une sélection de mes projets scolaires et personnels les plus intéressants.",
        all: "Tous",
        school: "Projets scolaires",
        personal: "Projets personnels",
        school_badge: "Scolaire",
        personal_badge: "Personnel",
        code: "Code",
        demo: "Démo",
        more_coming: "Plus de projets à venir...",
        search_placeholder: "Rechercher un projet...",
        no_results: "Aucun projet trouvé",
        no_results_desc: "Essayez de modifier vos filtres ou votre recherche",
        reset_filters: "Réinitialiser les filtres",
    },
    ProjectsText {
        title: "My Projects",
        subtitle: "A selection of my most interesting school and personal projects.",
        all: "All",
        school: "School Projects",
        personal: "Personal Projects",
        school_badge: "School",
        personal_badge: "Personal",
        code: "Code",
        demo: "Demo",
        more_coming: "More projects coming...",
        search_placeholder: "Search projects...",
        no_results: "No projects found",
        no_results_desc: "Try adjusting your filters or search terms",
        reset_filters: "Reset filters",
    },
);
