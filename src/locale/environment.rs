//! Environment language signal.

use tracing::debug;

/// Environment variable overriding the OS language
pub const LANG_OVERRIDE_VAR: &str = "PORTFOLIO_LANG";

/// Read-only source of the user's preferred language tag.
pub trait LanguageSource {
    /// Preferred language tag such as `"en-US"`, or `None` when the
    /// environment reports nothing.
    fn preferred_language(&self) -> Option<String>;
}

/// The operating system's user locale, optionally overridden by
/// `PORTFOLIO_LANG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLanguage;

impl LanguageSource for SystemLanguage {
    fn preferred_language(&self) -> Option<String> {
        if let Ok(value) = std::env::var(LANG_OVERRIDE_VAR) {
            if !value.trim().is_empty() {
                debug!(value = %value, "Using language override");
                return Some(value);
            }
        }

        let raw = locale_config::Locale::user_default().to_string();
        first_language_tag(&raw)
    }
}

/// A fixed language tag, or none at all.
#[derive(Debug, Clone, Default)]
pub struct FixedLanguage(pub Option<String>);

impl FixedLanguage {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Some(tag.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl LanguageSource for FixedLanguage {
    fn preferred_language(&self) -> Option<String> {
        self.0.clone()
    }
}

/// First usable tag of a `locale_config` rendering.
///
/// The rendering is a comma separated list whose entries may carry a
/// category prefix (`"messages=fr-FR"`).
pub fn first_language_tag(raw: &str) -> Option<String> {
    raw.split(',')
        .map(|entry| entry.rsplit_once('=').map_or(entry, |(_, tag)| tag).trim())
        .find(|tag| !tag.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_language_tag() {
        assert_eq!(first_language_tag("en-US").as_deref(), Some("en-US"));
        assert_eq!(first_language_tag("fr-FR,en-GB").as_deref(), Some("fr-FR"));
        assert_eq!(
            first_language_tag("messages=en-US,time=fr-FR").as_deref(),
            Some("en-US")
        );
        assert_eq!(first_language_tag(""), None);
        assert_eq!(first_language_tag(" , "), None);
    }

    #[test]
    fn test_fixed_language() {
        assert_eq!(FixedLanguage::new("en-US").preferred_language().as_deref(), Some("en-US"));
        assert_eq!(FixedLanguage::none().preferred_language(), None);
    }
}
