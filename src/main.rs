//! Portfolio - Main Entry Point
//!
//! Bilingual personal portfolio for the desktop.

use anyhow::Context;
use portfolio_gui::app::application::run_app;
use portfolio_gui::locale::{LocaleStore, MemoryStorage, SystemLanguage, TomlFileStorage};
use portfolio_gui::logging::init_tracing;
use portfolio_gui::settings::PortfolioSettings;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let _log_guard = init_tracing();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting portfolio...");

    let settings = PortfolioSettings::try_load().context("failed to load settings.toml")?;
    let policy = settings.locale_policy();

    // Without a config directory the preference lasts for this session only
    let locale = match TomlFileStorage::in_config_dir() {
        Ok(storage) => {
            info!(path = ?storage.path(), "Using preference file");
            LocaleStore::with_policy(storage, SystemLanguage, policy)
        }
        Err(e) => {
            warn!(error = %e, "Config directory unavailable, preferences will not persist");
            LocaleStore::with_policy(MemoryStorage::new(), SystemLanguage, policy)
        }
    };

    // Run the GPUI application
    run_app(locale, settings);
    Ok(())
}
