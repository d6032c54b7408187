mod fixtures;
pub use fixtures::*;

// Re-export commonly used types for tests
pub use portfolio_gui::app::navigation::Route;
pub use portfolio_gui::i18n::{Bilingual, Locale};
pub use portfolio_gui::locale::{
    FixedLanguage, LOCALE_SLOT, LocalePolicy, LocaleStore, MemoryStorage, PreferenceStorage,
    TomlFileStorage,
};
pub use portfolio_gui::state::{LocaleAwarePage, PagePhase};
