//! i18n - Internationalization Module
//!
//! Defines the two display locales, the typed per-page translation table
//! (`Bilingual`), and a key lookup for strings shared across pages.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// French
    #[default]
    Fr,
    /// English
    En,
}

impl Locale {
    /// Every supported locale, in display order
    pub const ALL: [Locale; 2] = [Locale::Fr, Locale::En];

    /// Two-letter code stored in the preference slot
    pub fn code(self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    /// Parse an exact locale code. Anything else is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// The other member of the two-locale set
    pub fn complement(self) -> Self {
        match self {
            Locale::Fr => Locale::En,
            Locale::En => Locale::Fr,
        }
    }

    /// Label of the toggle button: the code of the locale it switches to
    pub fn toggle_label(self) -> &'static str {
        match self.complement() {
            Locale::Fr => "FR",
            Locale::En => "EN",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A value available in both locales.
///
/// Page translation tables are `static Bilingual<PageText>` items; single
/// strings (project titles, badges) use `Bilingual<&'static str>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual<T> {
    pub fr: T,
    pub en: T,
}

impl<T> Bilingual<T> {
    pub const fn new(fr: T, en: T) -> Self {
        Self { fr, en }
    }

    /// Look up the value for a locale
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::Fr => &self.fr,
            Locale::En => &self.en,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (fr, en))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Corentin Bedo - Portfolio", "Corentin Bedo - Portfolio"));
    map.insert("app-owner", ("Corentin Bedo", "Corentin Bedo"));

    // Navigation
    map.insert("nav-home", ("Accueil", "Home"));
    map.insert("nav-about", ("À propos", "About"));
    map.insert("nav-education", ("Formation", "Education"));
    map.insert("nav-projects", ("Projets", "Projects"));
    map.insert("nav-skills", ("Compétences", "Skills"));
    map.insert("nav-contact", ("Contact", "Contact"));
    map.insert("nav-download-cv", ("Télécharger CV", "Download CV"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a shared key. Unknown keys come back unchanged.
pub fn t(locale: Locale, key: &str) -> &str {
    match translations().get(key) {
        Some(&(fr, _)) if locale == Locale::Fr => fr,
        Some(&(_, en)) => en,
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_exactly() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code("EN"), None);
        assert_eq!(Locale::from_code(" fr"), None);
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_complement_is_an_involution() {
        for locale in Locale::ALL {
            assert_ne!(locale.complement(), locale);
            assert_eq!(locale.complement().complement(), locale);
        }
    }

    #[test]
    fn test_toggle_label_names_the_other_locale() {
        assert_eq!(Locale::Fr.toggle_label(), "EN");
        assert_eq!(Locale::En.toggle_label(), "FR");
    }

    #[test]
    fn test_serde_uses_codes() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            locale: Locale,
        }

        let text = toml::to_string(&Wrapper { locale: Locale::En }).expect("serialize");
        assert_eq!(text.trim(), "locale = \"en\"");
        let parsed: Wrapper = toml::from_str("locale = \"fr\"").expect("deserialize");
        assert_eq!(parsed.locale, Locale::Fr);
    }

    #[test]
    fn test_t_falls_back_to_key() {
        assert_eq!(t(Locale::Fr, "nav-about"), "À propos");
        assert_eq!(t(Locale::En, "nav-about"), "About");
        assert_eq!(t(Locale::En, "missing-key"), "missing-key");
    }
}
