mod common;

use common::*;

static TITLE: Bilingual<&str> = Bilingual::new("Mes Projets", "My Projects");

#[test]
fn test_toggle_reaches_every_mounted_page() {
    let (store, _storage) = memory_store(Some("fr-FR"));
    let pages = mount_all_pages(&store);
    let navbar = {
        let mut navbar = LocaleAwarePage::named("navbar");
        navbar.mount(&store);
        navbar
    };

    for _ in 0..3 {
        let before: Vec<Locale> = pages.iter().filter_map(|p| p.locale()).collect();
        let next = store.toggle();

        for (page, previous) in pages.iter().zip(before) {
            assert_eq!(page.locale(), Some(previous.complement()));
            assert_eq!(page.locale(), Some(next));
        }
        assert_eq!(navbar.locale(), Some(next));
        assert_eq!(store.read_persisted(), Some(next));
    }
}

#[test]
fn test_page_mounted_after_toggle_agrees() {
    let (store, _storage) = memory_store(Some("fr-FR"));
    let mut home = LocaleAwarePage::new(Route::Home);
    home.mount(&store);
    store.toggle();

    let mut projects = LocaleAwarePage::new(Route::Projects);
    assert_eq!(projects.mount(&store), Locale::En);
    assert_eq!(projects.render(&TITLE), Some(&"My Projects"));
}

#[test]
fn test_persist_twice_is_one_write() -> anyhow::Result<()> {
    let (store, storage) = memory_store(None);
    store.persist(Locale::En)?;
    store.persist(Locale::En)?;

    assert_eq!(store.read_persisted(), Some(Locale::En));
    assert_eq!(storage.write_count(), 1);
    Ok(())
}

#[test]
fn test_toggle_notifies_each_page_once() {
    let (store, _storage) = memory_store(None);
    let pages = mount_all_pages(&store);
    store.toggle();

    assert!(pages.iter().all(|page| page.notifications() == 1));
}

#[test]
fn test_infer_default_from_environment() {
    let cases = [
        (Some("en-US"), Locale::En),
        (Some("fr-FR"), Locale::Fr),
        (Some("EN"), Locale::En),
        (Some("de-DE"), Locale::Fr),
        (Some(""), Locale::Fr),
        (None, Locale::Fr),
    ];

    for (tag, expected) in cases {
        let (store, _storage) = memory_store(tag);
        assert_eq!(store.infer_default(), expected, "tag {tag:?}");
    }
}

#[test]
fn test_inferred_locale_is_recorded_for_later_pages() {
    let (store, storage) = memory_store(Some("en-US"));
    let mut page = LocaleAwarePage::new(Route::About);
    page.mount(&store);

    assert_eq!(storage.load(LOCALE_SLOT).ok().flatten().as_deref(), Some("en"));
}

#[test]
fn test_corrupted_slot_falls_back_to_inference() {
    let storage = MemoryStorage::with_slot(LOCALE_SLOT, "klingon");
    let store = LocaleStore::new(storage, FixedLanguage::new("en-GB"));

    assert_eq!(store.read_persisted(), None);
    assert_eq!(store.current(), Locale::En);
}

#[test]
fn test_unavailable_storage_still_synchronizes() {
    let store = LocaleStore::new(UnavailableStorage, FixedLanguage::none());
    let pages = mount_all_pages(&store);

    assert_eq!(store.toggle(), Locale::En);
    assert!(pages.iter().all(|page| page.locale() == Some(Locale::En)));
    assert_eq!(store.read_persisted(), None);
}

#[test]
fn test_unmounted_page_keeps_last_state() {
    let (store, _storage) = memory_store(Some("fr-FR"));
    let mut pages = mount_all_pages(&store);
    let mut contact = pages.pop().expect("contact page");
    contact.unmount();

    store.toggle();
    store.broadcast(Locale::Fr);
    store.broadcast(Locale::En);

    assert_eq!(contact.phase(), PagePhase::Unmounted);
    assert_eq!(contact.last_observed(), Some(Locale::Fr));
    assert_eq!(contact.notifications(), 0);
    assert_eq!(contact.render(&TITLE), None);
    assert!(pages.iter().all(|page| page.locale() == Some(Locale::En)));
}

#[test]
fn test_dropped_pages_leave_no_subscribers() {
    let (store, _storage) = memory_store(None);
    {
        let _pages = mount_all_pages(&store);
        assert_eq!(store.subscriber_count(), Route::all().len());
    }
    assert_eq!(store.subscriber_count(), 0);
    store.toggle();
}

#[test]
fn test_preference_survives_restart() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("preferences.toml");

    let first = LocaleStore::new(TomlFileStorage::new(&path), FixedLanguage::new("fr-FR"));
    assert_eq!(first.current(), Locale::Fr);
    first.toggle();

    // Environment now says French, but the stored choice wins
    let second = LocaleStore::new(TomlFileStorage::new(&path), FixedLanguage::new("fr-FR"));
    assert_eq!(second.current(), Locale::En);
    Ok(())
}

#[test]
fn test_corrupt_preferences_file_recovers_on_toggle() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "portfolio-language = \"fr")?;

    let first = LocaleStore::new(TomlFileStorage::new(&path), FixedLanguage::new("en-US"));
    assert_eq!(first.current(), Locale::En);
    assert_eq!(first.toggle(), Locale::Fr);
    assert_eq!(first.read_persisted(), Some(Locale::Fr));

    let second = LocaleStore::new(TomlFileStorage::new(&path), FixedLanguage::new("en-US"));
    assert_eq!(second.current(), Locale::Fr);
    Ok(())
}

#[test]
fn test_non_string_stored_value_is_absent() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "portfolio-language = 42\n")?;

    let store = LocaleStore::new(TomlFileStorage::new(&path), FixedLanguage::new("en-US"));
    assert_eq!(store.read_persisted(), None);
    assert_eq!(store.current(), Locale::En);
    Ok(())
}

#[test]
fn test_ephemeral_inference_policy() {
    let storage = MemoryStorage::new();
    let policy = LocalePolicy {
        persist_inferred: false,
        ..LocalePolicy::default()
    };
    let store = LocaleStore::with_policy(storage.clone(), FixedLanguage::new("en-US"), policy);

    let mut page = LocaleAwarePage::new(Route::Skills);
    assert_eq!(page.mount(&store), Locale::En);
    assert_eq!(storage.write_count(), 0);

    store.toggle();
    assert_eq!(store.read_persisted(), Some(Locale::Fr));
}
