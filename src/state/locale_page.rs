//! LocaleAwarePage - per-page view of the shared locale
//!
//! A page is `Unmounted` until `mount` resolves the locale from the store and
//! subscribes to broadcasts. While unmounted nothing is rendered, so a page
//! never flashes content in a locale it has not confirmed.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::app::navigation::Route;
use crate::i18n::{Bilingual, Locale};
use crate::locale::{LocaleStore, LocaleSubscription};

/// Lifecycle phase of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagePhase {
    #[default]
    Unmounted,
    Hydrating,
    Ready,
}

#[derive(Debug, Default)]
struct Observed {
    locale: Cell<Option<Locale>>,
    notifications: Cell<u32>,
}

/// Locale state owned by one page (or the navigation bar)
#[derive(Debug)]
pub struct LocaleAwarePage {
    name: &'static str,
    phase: PagePhase,
    observed: Rc<Observed>,
    subscription: Option<LocaleSubscription>,
}

impl LocaleAwarePage {
    /// State for the page behind `route`
    pub fn new(route: Route) -> Self {
        Self::named(route.path())
    }

    /// State for a component that is not a routed page
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            phase: PagePhase::Unmounted,
            observed: Rc::new(Observed::default()),
            subscription: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn phase(&self) -> PagePhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == PagePhase::Ready
    }

    /// Hydrate from the store and start listening. Mounting twice is a no-op.
    pub fn mount(&mut self, store: &LocaleStore) -> Locale {
        if let (PagePhase::Ready, Some(locale)) = (self.phase, self.observed.locale.get()) {
            return locale;
        }

        self.phase = PagePhase::Hydrating;
        let locale = store.current();
        self.observed.locale.set(Some(locale));

        // The callback only holds a weak handle, so a notification that
        // outlives this page has nothing to write to.
        let observed = Rc::downgrade(&self.observed);
        let name = self.name;
        self.subscription = Some(store.subscribe(move |next| {
            let Some(observed) = observed.upgrade() else {
                return;
            };
            observed.locale.set(Some(next));
            observed.notifications.set(observed.notifications.get() + 1);
            debug!(page = name, locale = %next, "Page observed locale change");
        }));

        self.phase = PagePhase::Ready;
        debug!(page = self.name, locale = %locale, "Page mounted");
        locale
    }

    /// Stop listening. The last observed locale is kept but no longer rendered.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            debug!(page = self.name, "Page unmounted");
        }
        self.phase = PagePhase::Unmounted;
    }

    /// Locale to render with; `None` unless mounted
    pub fn locale(&self) -> Option<Locale> {
        if self.is_ready() {
            self.observed.locale.get()
        } else {
            None
        }
    }

    /// Last locale this page observed, mounted or not
    pub fn last_observed(&self) -> Option<Locale> {
        self.observed.locale.get()
    }

    /// Broadcasts received since construction
    pub fn notifications(&self) -> u32 {
        self.observed.notifications.get()
    }

    /// Pick this page's text block. Suppressed (`None`) unless mounted.
    pub fn render<'t, T>(&self, table: &'t Bilingual<T>) -> Option<&'t T> {
        self.locale().map(|locale| table.get(locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{FixedLanguage, MemoryStorage};

    static GREETING: Bilingual<&str> = Bilingual::new("Bonjour", "Hello");

    fn store() -> LocaleStore {
        LocaleStore::new(MemoryStorage::new(), FixedLanguage::new("en-GB"))
    }

    #[test]
    fn test_nothing_renders_before_mount() {
        let page = LocaleAwarePage::new(Route::Home);
        assert_eq!(page.phase(), PagePhase::Unmounted);
        assert_eq!(page.render(&GREETING), None);
    }

    #[test]
    fn test_mount_hydrates_and_subscribes() {
        let store = store();
        let mut page = LocaleAwarePage::new(Route::About);

        assert_eq!(page.mount(&store), Locale::En);
        assert!(page.is_ready());
        assert_eq!(page.render(&GREETING), Some(&"Hello"));
        assert_eq!(store.subscriber_count(), 1);

        // Remounting keeps a single subscription
        page.mount(&store);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_broadcast_updates_rendered_locale() {
        let store = store();
        let mut page = LocaleAwarePage::new(Route::Skills);
        page.mount(&store);

        store.toggle();
        assert_eq!(page.locale(), Some(Locale::Fr));
        assert_eq!(page.render(&GREETING), Some(&"Bonjour"));
        assert_eq!(page.notifications(), 1);
    }

    #[test]
    fn test_unmount_ignores_later_broadcasts() {
        let store = store();
        let mut page = LocaleAwarePage::new(Route::Contact);
        page.mount(&store);
        page.unmount();

        assert_eq!(store.subscriber_count(), 0);
        store.broadcast(Locale::Fr);
        assert_eq!(page.last_observed(), Some(Locale::En));
        assert_eq!(page.notifications(), 0);
        assert_eq!(page.render(&GREETING), None);
    }

    #[test]
    fn test_dropping_a_page_unsubscribes() {
        let store = store();
        {
            let mut page = LocaleAwarePage::new(Route::Projects);
            page.mount(&store);
            assert_eq!(store.subscriber_count(), 1);
        }
        assert_eq!(store.subscriber_count(), 0);
        store.toggle();
    }
}
