use portfolio_gui::error::{Error, Result};
use portfolio_gui::locale::{FixedLanguage, LocaleStore, MemoryStorage, PreferenceStorage};
use portfolio_gui::state::LocaleAwarePage;
use portfolio_gui::app::navigation::Route;

/// Storage whose every operation fails, like a blocked preference file.
pub struct UnavailableStorage;

impl PreferenceStorage for UnavailableStorage {
    fn load(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::StorageUnavailable {
            message: "blocked".to_string(),
        })
    }

    fn save(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::StorageUnavailable {
            message: "blocked".to_string(),
        })
    }
}

/// A store over shared in-memory slots. Returns the slots too so the test
/// can inspect what was written.
pub fn memory_store(language: Option<&str>) -> (LocaleStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    let language = match language {
        Some(tag) => FixedLanguage::new(tag),
        None => FixedLanguage::none(),
    };
    (LocaleStore::new(storage.clone(), language), storage)
}

/// One mounted page per route.
pub fn mount_all_pages(store: &LocaleStore) -> Vec<LocaleAwarePage> {
    Route::all()
        .iter()
        .map(|route| {
            let mut page = LocaleAwarePage::new(*route);
            page.mount(store);
            page
        })
        .collect()
}
