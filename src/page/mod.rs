//! Page-level UI state owned by the composition root and handed to
//! presentational components as read-only values.

pub mod preferences;
pub mod scroll;

pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use scroll::{Region, ScrollSpy};

pub const THEME_KEY: &str = "theme";
pub const INITIAL_SECTION: &str = "home";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub dark_mode: bool,
    pub active_section: String,
}

impl PageState {
    /// A saved theme wins over the system preference.
    pub fn load(store: &dyn PreferenceStore, system_prefers_dark: bool) -> Self {
        let dark_mode = match store.get(THEME_KEY) {
            Some(theme) if !theme.is_empty() => theme == Theme::Dark.as_str(),
            _ => system_prefers_dark,
        };

        Self {
            dark_mode,
            active_section: INITIAL_SECTION.to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode { Theme::Dark } else { Theme::Light }
    }

    pub fn toggle_dark_mode(&mut self, store: &dyn PreferenceStore) {
        self.dark_mode = !self.dark_mode;
        store.set(THEME_KEY, self.theme().as_str());
    }

    /// Keeps the previous section when the anchor falls between regions.
    pub fn on_scroll(&mut self, scroll_y: f64, spy: &ScrollSpy) {
        if let Some(label) = spy.active_at(scroll_y) {
            if label != self.active_section {
                self.active_section = label.to_string();
            }
        }
    }
}
