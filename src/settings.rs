//! Settings - Application Configuration
//!
//! Loaded from `settings.toml` in the platform config directory. A missing or
//! empty file yields defaults; the file is never written by the application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::app::navigation::Route;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Locale;
use crate::locale::{LOCALE_SLOT, LocalePolicy};

fn get_settings_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    Ok(config_dir.join("settings.toml"))
}

/// User-editable settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioSettings {
    /// Name of the slot holding the locale preference
    pub storage_key: String,
    /// Locale used when nothing else decides
    pub fallback_locale: Locale,
    /// Record an inferred locale before the user has chosen one
    pub persist_inferred: bool,
    /// Initial window width in logical pixels
    pub window_width: f32,
    /// Initial window height in logical pixels
    pub window_height: f32,
    /// Page shown at startup
    pub start_page: Route,
    /// CV document opened by the "Download CV" button
    pub cv_path: Option<PathBuf>,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            storage_key: LOCALE_SLOT.to_string(),
            fallback_locale: Locale::Fr,
            persist_inferred: true,
            window_width: 1280.0,
            window_height: 860.0,
            start_page: Route::Home,
            cv_path: None,
        }
    }
}

impl PortfolioSettings {
    /// Load settings from the config directory
    pub fn try_load() -> Result<Self> {
        let path = get_settings_path()?;
        Self::load_from(&path)
    }

    /// Load settings from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = ?path, "No settings file, using defaults");
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(path)?;

        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })?;

        Ok(settings.sanitized())
    }

    /// Replace unusable values with their defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.storage_key.trim().is_empty() {
            self.storage_key = defaults.storage_key;
        }
        if !(self.window_width.is_finite() && self.window_width >= 320.0) {
            self.window_width = defaults.window_width;
        }
        if !(self.window_height.is_finite() && self.window_height >= 240.0) {
            self.window_height = defaults.window_height;
        }
        self
    }

    /// Locale resolution policy derived from these settings
    pub fn locale_policy(&self) -> LocalePolicy {
        LocalePolicy {
            storage_key: self.storage_key.clone(),
            fallback: self.fallback_locale,
            persist_inferred: self.persist_inferred,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_empty_files_use_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        assert_eq!(
            PortfolioSettings::load_from(&path).expect("missing"),
            PortfolioSettings::default()
        );

        std::fs::write(&path, "  \n").expect("write");
        assert_eq!(
            PortfolioSettings::load_from(&path).expect("empty"),
            PortfolioSettings::default()
        );
    }

    #[test]
    fn test_partial_file_overrides_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "fallback_locale = \"en\"\npersist_inferred = false\nstorage_key = \"lang\"\n",
        )
        .expect("write");

        let settings = PortfolioSettings::load_from(&path).expect("load");
        let policy = settings.locale_policy();
        assert_eq!(policy.fallback, Locale::En);
        assert!(!policy.persist_inferred);
        assert_eq!(policy.storage_key, "lang");
        assert_eq!(settings.window_width, 1280.0);
        assert_eq!(settings.cv_path, None);
        assert_eq!(settings.start_page, Route::Home);
    }

    #[test]
    fn test_unusable_values_are_replaced() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "storage_key = \"  \"\nwindow_width = 10.0\n").expect("write");

        let settings = PortfolioSettings::load_from(&path).expect("load");
        assert_eq!(settings.storage_key, LOCALE_SLOT);
        assert_eq!(settings.window_width, 1280.0);
    }

    #[test]
    fn test_start_page_by_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "start_page = \"projects\"\n").expect("write");

        let settings = PortfolioSettings::load_from(&path).expect("load");
        assert_eq!(settings.start_page, Route::Projects);
    }

    #[test]
    fn test_invalid_locale_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "fallback_locale = \"de\"\n").expect("write");

        assert!(PortfolioSettings::load_from(&path).is_err());
    }
}
