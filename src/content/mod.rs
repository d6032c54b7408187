//! Content - per-page text in both locales
//!
//! Every table is a `Bilingual` pair so a page picks its whole text block
//! with the locale it observed, never mixing languages within one frame.

mod about;
mod contact;
mod education;
mod home;
mod projects;
mod skills;

pub use about::*;
pub use contact::*;
pub use education::*;
pub use home::*;
pub use projects::*;
pub use skills::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryFilter, ProjectCategory};
    use crate::i18n::Locale;

    #[test]
    fn test_tables_differ_per_locale() {
        assert_ne!(HOME.fr.greeting, HOME.en.greeting);
        assert_ne!(ABOUT.fr.story_title, ABOUT.en.story_title);
        assert_ne!(EDUCATION.fr.title, EDUCATION.en.title);
        assert_ne!(CONTACT.fr.send, CONTACT.en.send);
    }

    #[test]
    fn test_project_labels() {
        let en = PROJECTS.get(Locale::En);
        assert_eq!(en.filter_label(CategoryFilter::All), "All");
        assert_eq!(en.badge(ProjectCategory::Personal), "Personal");
        assert_eq!(
            PROJECTS.get(Locale::Fr).filter_label(CategoryFilter::Only(ProjectCategory::School)),
            "Projets scolaires"
        );
    }

    #[test]
    fn test_education_certifications_align() {
        assert_eq!(EDUCATION.fr.certifications.len(), EDUCATION.en.certifications.len());
        assert_eq!(EDUCATION.en.certifications[1].name, "Cisco CCNA");
    }
}
