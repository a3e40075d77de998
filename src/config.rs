use crate::core::storage::KeyValueStore;

pub const THEME_KEY: &str = "theme";

/// Persisted light/dark preference. Stored under the `theme` key as the
/// plain strings `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn load(store: &dyn KeyValueStore) -> Option<Self> {
        match store.get(THEME_KEY).as_deref() {
            Some("light") => Some(ThemeMode::Light),
            Some("dark") => Some(ThemeMode::Dark),
            Some(other) => {
                log::warn!("ignoring unknown stored theme {other:?}");
                None
            }
            None => None,
        }
    }

    pub fn save(self, store: &dyn KeyValueStore) {
        store.set(THEME_KEY, self.as_str());
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn theme(self) -> cosmic::Theme {
        match self {
            ThemeMode::Light => cosmic::Theme::light(),
            ThemeMode::Dark => cosmic::Theme::dark(),
        }
    }
}

/// Theme applied at startup: stored preference first, then the host
/// system preference.
pub fn startup_theme(store: &dyn KeyValueStore) -> cosmic::Theme {
    match ThemeMode::load(store) {
        Some(mode) => {
            log::info!("using stored {} theme", mode.as_str());
            mode.theme()
        }
        None => cosmic::theme::system_preference(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    #[test]
    fn round_trips_through_storage() {
        let store = MemoryStore::new();
        assert_eq!(ThemeMode::load(&store), None);
        ThemeMode::Dark.save(&store);
        assert_eq!(ThemeMode::load(&store), Some(ThemeMode::Dark));
        ThemeMode::Light.save(&store);
        assert_eq!(ThemeMode::load(&store), Some(ThemeMode::Light));
    }

    #[test]
    fn unknown_stored_value_is_ignored() {
        let store = MemoryStore::seeded(THEME_KEY, "solarized");
        assert_eq!(ThemeMode::load(&store), None);
    }

    #[test]
    fn toggle_alternates() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }
}
