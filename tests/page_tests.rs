use folio::page::scroll::DEFAULT_SECTIONS;
use folio::page::{
    FilePreferenceStore, MemoryPreferenceStore, PageState, PreferenceStore, Region, ScrollSpy,
    THEME_KEY, Theme,
};

fn page_layout() -> ScrollSpy {
    // Hero occupies 0..600, then each section is 800px tall.
    let regions = DEFAULT_SECTIONS
        .iter()
        .enumerate()
        .map(|(i, label)| Region::new(*label, 600.0 + 800.0 * i as f64, 800.0))
        .collect();
    ScrollSpy::new(regions)
}

// ── Theme preference ────────────────────────────────────────────

#[test]
fn saved_theme_wins_over_system_preference() {
    let store = MemoryPreferenceStore::new();
    store.set(THEME_KEY, "light");
    assert!(!PageState::load(&store, true).dark_mode);

    store.set(THEME_KEY, "dark");
    assert!(PageState::load(&store, false).dark_mode);
}

#[test]
fn system_preference_used_without_saved_theme() {
    let store = MemoryPreferenceStore::new();
    assert!(PageState::load(&store, true).dark_mode);
    assert!(!PageState::load(&store, false).dark_mode);
}

#[test]
fn empty_saved_theme_falls_back_to_system() {
    let store = MemoryPreferenceStore::new();
    store.set(THEME_KEY, "");
    assert!(PageState::load(&store, true).dark_mode);
    assert!(!PageState::load(&store, false).dark_mode);
}

#[test]
fn toggle_persists_theme() {
    let store = MemoryPreferenceStore::new();
    let mut page = PageState::load(&store, false);
    assert_eq!(page.active_section, "home");

    page.toggle_dark_mode(&store);
    assert_eq!(page.theme(), Theme::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

    page.toggle_dark_mode(&store);
    assert_eq!(page.theme(), Theme::Light);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let store = FilePreferenceStore::open(&path).unwrap();
    assert_eq!(store.get(THEME_KEY), None);
    let mut page = PageState::load(&store, false);
    page.toggle_dark_mode(&store);

    let reopened = FilePreferenceStore::open(&path).unwrap();
    assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("dark"));
    assert!(PageState::load(&reopened, false).dark_mode);
}

#[test]
fn file_store_rejects_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(FilePreferenceStore::open(&path).is_err());
}

// ── Scroll spy ──────────────────────────────────────────────────

#[test]
fn anchor_picks_containing_region() {
    let spy = page_layout();

    // Anchor sits 100px below the top of the viewport.
    assert_eq!(spy.active_at(0.0), None);
    assert_eq!(spy.active_at(499.0), None);
    assert_eq!(spy.active_at(500.0), Some("about"));
    assert_eq!(spy.active_at(1299.0), Some("about"));
    assert_eq!(spy.active_at(1300.0), Some("services"));
    assert_eq!(spy.active_at(3000.0), Some("contact"));
    assert_eq!(spy.active_at(3700.0), None);
}

#[test]
fn overlapping_regions_prefer_the_first() {
    let spy = ScrollSpy::new(vec![
        Region::new("about", 0.0, 1000.0),
        Region::new("services", 500.0, 1000.0),
    ]);
    assert_eq!(spy.active_at(600.0), Some("about"));
}

#[test]
fn page_keeps_last_section_between_regions() {
    let spy = page_layout();
    let store = MemoryPreferenceStore::new();
    let mut page = PageState::load(&store, false);

    page.on_scroll(0.0, &spy);
    assert_eq!(page.active_section, "home");

    page.on_scroll(1400.0, &spy);
    assert_eq!(page.active_section, "services");

    page.on_scroll(10_000.0, &spy);
    assert_eq!(page.active_section, "services");
}
