use crate::domain::model::Theme;
use crate::domain::ports::Storage;
use crate::utils::error::{Result, SiteError};
use std::collections::BTreeMap;
use std::io::ErrorKind;

pub const PREFERENCES_FILE: &str = "preferences.json";
pub const THEME_KEY: &str = "theme";

/// Picks the starting theme: an explicit stored choice wins over the system hint.
pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    match stored {
        Some("dark") => Theme::Dark,
        Some(_) => Theme::Light,
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// The one persisted key-value flag, kept in a small JSON object.
pub struct ThemeStore<S: Storage> {
    storage: S,
}

impl<S: Storage> ThemeStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    async fn read_all(&self) -> BTreeMap<String, String> {
        match self.storage.read_file(PREFERENCES_FILE).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable preferences file: {}", e);
                BTreeMap::new()
            }),
            Err(SiteError::IoError(e)) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Could not read preferences file: {}", e);
                BTreeMap::new()
            }
        }
    }

    pub async fn stored(&self) -> Option<String> {
        self.read_all().await.remove(THEME_KEY)
    }

    pub async fn initial_theme(&self, system_prefers_dark: bool) -> Theme {
        let stored = self.stored().await;
        let theme = resolve_initial(stored.as_deref(), system_prefers_dark);
        tracing::debug!(?stored, %theme, "Resolved initial theme");
        theme
    }

    pub async fn save(&self, theme: Theme) -> Result<()> {
        let mut prefs = self.read_all().await;
        prefs.insert(THEME_KEY.to_string(), theme.as_str().to_string());
        let data = serde_json::to_vec_pretty(&prefs)?;
        self.storage.write_file(PREFERENCES_FILE, &data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalStorage;
    use tempfile::TempDir;

    #[test]
    fn test_stored_preference_wins() {
        assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
        assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
    }

    #[test]
    fn test_system_preference_applies_without_stored_value() {
        assert_eq!(resolve_initial(None, true), Theme::Dark);
        assert_eq!(resolve_initial(None, false), Theme::Light);
    }

    #[test]
    fn test_unrecognized_stored_value_is_light() {
        assert_eq!(resolve_initial(Some("sepia"), true), Theme::Light);
    }

    #[tokio::test]
    async fn test_unreadable_preferences_fall_back_to_system_hint() {
        let temp_dir = TempDir::new().unwrap();
        // a directory where the preferences file should be fails with a non-NotFound error
        std::fs::create_dir(temp_dir.path().join(PREFERENCES_FILE)).unwrap();
        let store = ThemeStore::new(LocalStorage::new(temp_dir.path()));

        assert_eq!(store.stored().await, None);
        assert_eq!(store.initial_theme(true).await, Theme::Dark);
        assert!(store.save(Theme::Light).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_preferences_file_is_no_choice() {
        let temp_dir = TempDir::new().unwrap();
        let store = ThemeStore::new(LocalStorage::new(temp_dir.path().join("state")));

        assert_eq!(store.stored().await, None);
        store.save(Theme::Dark).await.unwrap();
        assert_eq!(store.stored().await.as_deref(), Some("dark"));
    }
}
