//! LocaleStore - the single current display locale.
//!
//! One store exists per application. Handles are cheap clones sharing the
//! same value, storage and observers. Everything runs on the UI thread:
//! `broadcast` finishes notifying every observer before it returns.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::i18n::Locale;
use crate::locale::environment::LanguageSource;
use crate::locale::storage::{LOCALE_SLOT, PreferenceStorage};
use crate::locale::subscription::{LocaleSubscription, Registry};

/// How the store resolves and records the locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalePolicy {
    /// Slot holding the preference
    pub storage_key: String,
    /// Used when neither storage nor the environment decides
    pub fallback: Locale,
    /// Record an inferred locale as if the user had chosen it
    pub persist_inferred: bool,
}

impl Default for LocalePolicy {
    fn default() -> Self {
        Self {
            storage_key: LOCALE_SLOT.to_string(),
            fallback: Locale::Fr,
            persist_inferred: true,
        }
    }
}

/// Where the initial locale came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleOrigin {
    Persisted,
    Inferred,
}

/// Shared handle to the current locale
#[derive(Clone)]
pub struct LocaleStore {
    current: Rc<Cell<Option<Locale>>>,
    observers: Rc<RefCell<Registry>>,
    storage: Rc<dyn PreferenceStorage>,
    language: Rc<dyn LanguageSource>,
    policy: Rc<LocalePolicy>,
}

impl LocaleStore {
    /// Create a store with the default policy
    pub fn new(
        storage: impl PreferenceStorage + 'static,
        language: impl LanguageSource + 'static,
    ) -> Self {
        Self::with_policy(storage, language, LocalePolicy::default())
    }

    /// Create a store with an explicit policy
    pub fn with_policy(
        storage: impl PreferenceStorage + 'static,
        language: impl LanguageSource + 'static,
        policy: LocalePolicy,
    ) -> Self {
        Self {
            current: Rc::new(Cell::new(None)),
            observers: Rc::new(RefCell::new(Registry::default())),
            storage: Rc::new(storage),
            language: Rc::new(language),
            policy: Rc::new(policy),
        }
    }

    pub fn policy(&self) -> &LocalePolicy {
        &self.policy
    }

    // ==================== Resolution ====================

    /// Current locale, resolved on first use.
    ///
    /// The first call reads the persisted slot, else infers from the
    /// environment (recording the result when the policy says so). Later
    /// calls return the cached value, updated by every broadcast.
    pub fn current(&self) -> Locale {
        if let Some(locale) = self.current.get() {
            return locale;
        }
        let (locale, origin) = self.resolve_initial();
        info!(locale = %locale, origin = ?origin, "Locale initialized");
        self.current.set(Some(locale));
        locale
    }

    /// Whether `current` has been resolved yet
    pub fn is_initialized(&self) -> bool {
        self.current.get().is_some()
    }

    fn resolve_initial(&self) -> (Locale, LocaleOrigin) {
        if let Some(locale) = self.read_persisted() {
            return (locale, LocaleOrigin::Persisted);
        }

        let inferred = self.infer_default();
        if self.policy.persist_inferred {
            if let Err(e) = self.persist(inferred) {
                warn!(error = %e, locale = %inferred, "Failed to record inferred locale");
            }
        }
        (inferred, LocaleOrigin::Inferred)
    }

    /// Stored locale, if the slot holds a valid code.
    ///
    /// Missing slots, unreadable storage and foreign values are all `None`.
    pub fn read_persisted(&self) -> Option<Locale> {
        match self.storage.load(&self.policy.storage_key) {
            Ok(Some(value)) => {
                let locale = Locale::from_code(&value);
                if locale.is_none() {
                    debug!(value = %value, "Ignoring unrecognized stored locale");
                }
                locale
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Preference storage unavailable, treating as empty");
                None
            }
        }
    }

    /// Locale whose code prefixes the environment's language tag.
    ///
    /// Falls back to the policy locale when the environment reports nothing
    /// or an unsupported language.
    pub fn infer_default(&self) -> Locale {
        let Some(tag) = self.language.preferred_language() else {
            debug!(fallback = %self.policy.fallback, "No environment language");
            return self.policy.fallback;
        };
        let tag = tag.trim().to_lowercase();

        Locale::ALL
            .into_iter()
            .find(|locale| tag.starts_with(locale.code()))
            .unwrap_or(self.policy.fallback)
    }

    // ==================== Updates ====================

    /// Write the locale to the slot. Writing the stored value again is a no-op.
    pub fn persist(&self, locale: Locale) -> Result<()> {
        let key = &self.policy.storage_key;
        if let Ok(Some(existing)) = self.storage.load(key) {
            if existing == locale.code() {
                debug!(locale = %locale, "Preference already stored");
                return Ok(());
            }
        }
        self.storage.save(key, locale.code())
    }

    /// Make `locale` current and notify every live observer before returning.
    pub fn broadcast(&self, locale: Locale) {
        self.current.set(Some(locale));
        let targets = self.observers.borrow_mut().snapshot();
        debug!(locale = %locale, observers = targets.len(), "Broadcasting locale");

        for (active, callback) in targets {
            if active.get() {
                callback(locale);
            }
        }
    }

    /// Switch to the other locale: persist (best effort), then broadcast.
    pub fn toggle(&self) -> Locale {
        let next = self.current().complement();
        if let Err(e) = self.persist(next) {
            warn!(error = %e, locale = %next, "Failed to persist locale, continuing");
        }
        self.broadcast(next);
        info!(locale = %next, "Locale toggled");
        next
    }

    // ==================== Observers ====================

    /// Register a callback for every future broadcast.
    pub fn subscribe(&self, callback: impl Fn(Locale) + 'static) -> LocaleSubscription {
        Registry::add(&self.observers, callback)
    }

    /// Number of live observers
    pub fn subscriber_count(&self) -> usize {
        self.observers.borrow().len()
    }
}

impl fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("current", &self.current.get())
            .field("subscribers", &self.subscriber_count())
            .field("policy", &self.policy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::locale::environment::FixedLanguage;
    use crate::locale::storage::MemoryStorage;

    struct BrokenStorage;

    impl PreferenceStorage for BrokenStorage {
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

    fn store_with(storage: &MemoryStorage, tag: Option<&str>) -> LocaleStore {
        LocaleStore::new(storage.clone(), FixedLanguage(tag.map(str::to_string)))
    }

    #[test]
    fn test_infer_default() {
        let storage = MemoryStorage::new();
        assert_eq!(store_with(&storage, Some("en-US")).infer_default(), Locale::En);
        assert_eq!(store_with(&storage, Some("fr-FR")).infer_default(), Locale::Fr);
        assert_eq!(store_with(&storage, Some("EN_gb")).infer_default(), Locale::En);
        assert_eq!(store_with(&storage, Some("de-DE")).infer_default(), Locale::Fr);
        assert_eq!(store_with(&storage, Some("")).infer_default(), Locale::Fr);
        assert_eq!(store_with(&storage, None).infer_default(), Locale::Fr);
    }

    #[test]
    fn test_infer_default_honours_fallback() {
        let policy = LocalePolicy {
            fallback: Locale::En,
            ..LocalePolicy::default()
        };
        let store = LocaleStore::with_policy(MemoryStorage::new(), FixedLanguage::none(), policy);
        assert_eq!(store.infer_default(), Locale::En);
    }

    #[test]
    fn test_read_persisted_rejects_foreign_values() {
        for value in ["de", "EN", "", "fr ", "{\"lang\":\"fr\"}"] {
            let storage = MemoryStorage::with_slot(LOCALE_SLOT, value);
            assert_eq!(store_with(&storage, None).read_persisted(), None, "{value:?}");
        }
        let storage = MemoryStorage::with_slot(LOCALE_SLOT, "en");
        assert_eq!(store_with(&storage, None).read_persisted(), Some(Locale::En));
    }

    #[test]
    fn test_current_prefers_persisted_over_environment() {
        let storage = MemoryStorage::with_slot(LOCALE_SLOT, "en");
        let store = store_with(&storage, Some("fr-FR"));
        assert_eq!(store.current(), Locale::En);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_current_records_inferred_locale() {
        let storage = MemoryStorage::new();
        let store = store_with(&storage, Some("en-US"));
        assert!(!store.is_initialized());
        assert_eq!(store.current(), Locale::En);
        assert!(store.is_initialized());
        assert_eq!(storage.load(LOCALE_SLOT).expect("load").as_deref(), Some("en"));
    }

    #[test]
    fn test_current_keeps_inferred_locale_ephemeral_when_configured() {
        let storage = MemoryStorage::new();
        let policy = LocalePolicy {
            persist_inferred: false,
            ..LocalePolicy::default()
        };
        let store = LocaleStore::with_policy(storage.clone(), FixedLanguage::new("en-US"), policy);
        assert_eq!(store.current(), Locale::En);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_current_is_resolved_once() {
        let storage = MemoryStorage::new();
        let store = store_with(&storage, Some("en"));
        assert_eq!(store.current(), Locale::En);
        storage.save(LOCALE_SLOT, "fr").expect("save");
        assert_eq!(store.current(), Locale::En);
    }

    #[test]
    fn test_persist_is_idempotent() {
        let storage = MemoryStorage::new();
        let store = store_with(&storage, None);
        store.persist(Locale::En).expect("first");
        store.persist(Locale::En).expect("second");
        assert_eq!(storage.write_count(), 1);
        assert_eq!(store.read_persisted(), Some(Locale::En));
    }

    #[test]
    fn test_toggle_persists_and_notifies_synchronously() {
        let storage = MemoryStorage::with_slot(LOCALE_SLOT, "fr");
        let store = store_with(&storage, None);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _subscription = store.subscribe(move |locale| sink.borrow_mut().push(locale));

        assert_eq!(store.toggle(), Locale::En);
        assert_eq!(*seen.borrow(), vec![Locale::En]);
        assert_eq!(store.read_persisted(), Some(Locale::En));

        assert_eq!(store.toggle(), Locale::Fr);
        assert_eq!(*seen.borrow(), vec![Locale::En, Locale::Fr]);
        assert_eq!(store.read_persisted(), Some(Locale::Fr));
    }

    #[test]
    fn test_toggle_broadcasts_even_when_storage_is_broken() {
        let store = LocaleStore::new(BrokenStorage, FixedLanguage::new("en-US"));
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        let _subscription = store.subscribe(move |locale| sink.set(Some(locale)));

        assert_eq!(store.current(), Locale::En);
        assert_eq!(store.read_persisted(), None);
        assert_eq!(store.toggle(), Locale::Fr);
        assert_eq!(seen.get(), Some(Locale::Fr));
        assert_eq!(store.current(), Locale::Fr);
    }

    #[test]
    fn test_dropped_subscription_is_not_notified() {
        let store = store_with(&MemoryStorage::new(), None);
        let hits = Rc::new(Cell::new(0));
        let sink = Rc::clone(&hits);
        let subscription = store.subscribe(move |_| sink.set(sink.get() + 1));
        assert_eq!(store.subscriber_count(), 1);

        store.broadcast(Locale::En);
        subscription.unsubscribe();
        store.broadcast(Locale::Fr);

        assert_eq!(hits.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_unsubscribe_during_broadcast_skips_later_callback() {
        let store = store_with(&MemoryStorage::new(), None);
        let second_hits = Rc::new(Cell::new(0));
        let victim: Rc<RefCell<Option<LocaleSubscription>>> = Rc::new(RefCell::new(None));

        let slot = Rc::clone(&victim);
        let _first = store.subscribe(move |_| {
            slot.borrow_mut().take();
        });
        let sink = Rc::clone(&second_hits);
        *victim.borrow_mut() = Some(store.subscribe(move |_| sink.set(sink.get() + 1)));

        store.broadcast(Locale::En);
        assert_eq!(second_hits.get(), 0);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_subscribe_during_broadcast_is_safe() {
        let store = store_with(&MemoryStorage::new(), None);
        let late: Rc<RefCell<Vec<LocaleSubscription>>> = Rc::new(RefCell::new(Vec::new()));

        let handle = store.clone();
        let keep = Rc::clone(&late);
        let _first = store.subscribe(move |_| {
            keep.borrow_mut().push(handle.subscribe(|_| {}));
        });

        store.broadcast(Locale::En);
        assert_eq!(store.subscriber_count(), 2);
    }

    #[test]
    fn test_subscription_outliving_store_drops_cleanly() {
        let store = store_with(&MemoryStorage::new(), None);
        let subscription = store.subscribe(|_| {});
        drop(store);
        drop(subscription);
    }
}
