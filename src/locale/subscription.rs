//! Typed observer list for locale changes.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::i18n::Locale;

type Callback = Rc<dyn Fn(Locale)>;

struct Entry {
    id: u64,
    active: Rc<Cell<bool>>,
    callback: Callback,
}

/// Observers registered on one store.
#[derive(Default)]
pub(crate) struct Registry {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Registry {
    pub(crate) fn add(
        registry: &Rc<RefCell<Registry>>,
        callback: impl Fn(Locale) + 'static,
    ) -> LocaleSubscription {
        let active = Rc::new(Cell::new(true));
        let mut inner = registry.borrow_mut();
        inner.prune();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(Entry {
            id,
            active: Rc::clone(&active),
            callback: Rc::new(callback),
        });

        LocaleSubscription {
            id,
            active,
            registry: Rc::downgrade(registry),
        }
    }

    /// Live callbacks at this instant, each paired with its liveness flag.
    ///
    /// Dispatch runs over the snapshot with the registry released, so
    /// callbacks may subscribe, unsubscribe or broadcast again.
    pub(crate) fn snapshot(&mut self) -> Vec<(Rc<Cell<bool>>, Callback)> {
        self.prune();
        self.entries
            .iter()
            .map(|entry| (Rc::clone(&entry.active), Rc::clone(&entry.callback)))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.iter().filter(|entry| entry.active.get()).count()
    }

    fn remove(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    fn prune(&mut self) {
        self.entries.retain(|entry| entry.active.get());
    }
}

/// Disposer returned by `LocaleStore::subscribe`.
///
/// The callback stays registered exactly as long as this guard lives.
/// Dropping it (or calling `unsubscribe`) deregisters; the flag is cleared
/// first, so a broadcast already in flight skips the callback too.
#[must_use = "dropping a LocaleSubscription unsubscribes immediately"]
pub struct LocaleSubscription {
    id: u64,
    active: Rc<Cell<bool>>,
    registry: Weak<RefCell<Registry>>,
}

impl LocaleSubscription {
    /// Explicitly end the subscription
    pub fn unsubscribe(self) {}

    /// Whether the callback can still be invoked
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for LocaleSubscription {
    fn drop(&mut self) {
        self.active.set(false);
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // If the registry is borrowed right now the inactive entry is pruned
        // on the next snapshot instead.
        if let Ok(mut registry) = registry.try_borrow_mut() {
            registry.remove(self.id);
        }
    }
}

impl fmt::Debug for LocaleSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleSubscription")
            .field("id", &self.id)
            .field("active", &self.active.get())
            .finish()
    }
}
