//! Preference store backed by a JSON file
//!
//! Provides a `PreferenceStore` that reads and writes [`Preferences`] in an
//! XDG-compliant config directory.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name inside the store directory
const PREFERENCES_FILE: &str = "preferences.json";

/// Color scheme of the UI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Parses "dark" / "light", ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Scalar preferences that survive restarts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Number of items added to the cart
    #[serde(default)]
    pub cart_count: u32,
    /// Selected color scheme
    #[serde(default)]
    pub theme: Theme,
}

/// Reads and writes preferences on disk
///
/// Stores `preferences.json` in `~/.config/gamestore/` on Linux, or the
/// platform equivalent.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    /// Directory holding the preferences file
    dir: PathBuf,
}

impl PreferenceStore {
    /// Creates a store in the XDG-compliant config directory
    ///
    /// Returns `None` if the directory cannot be determined (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "gamestore")?;
        Some(Self {
            dir: project_dirs.config_dir().to_path_buf(),
        })
    }

    /// Creates a store in a custom directory
    ///
    /// Useful for testing or when a specific location is needed.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self) -> PathBuf {
        self.dir.join(PREFERENCES_FILE)
    }

    /// Loads preferences, falling back to defaults
    ///
    /// A missing file is normal on first start; a corrupt one is logged and ignored.
    pub fn load(&self) -> Preferences {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => {
                debug!(path = %path.display(), "no saved preferences");
                return Preferences::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "ignoring unreadable preferences");
            Preferences::default()
        })
    }

    /// Writes preferences, creating the directory if needed
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err` if directory creation or file writing fails
    pub fn save(&self, prefs: &Preferences) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let json = serde_json::to_string_pretty(prefs)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(self.path(), json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (PreferenceStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = PreferenceStore::with_dir(temp_dir.path().to_path_buf());
        (store, temp_dir)
    }

    #[test]
    fn test_load_defaults_when_missing() {
        let (store, _temp_dir) = create_test_store();

        let prefs = store.load();

        assert_eq!(prefs.cart_count, 0);
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn test_save_then_load() {
        let (store, _temp_dir) = create_test_store();
        let prefs = Preferences {
            cart_count: 3,
            theme: Theme::Light,
        };

        store.save(&prefs).expect("Save should succeed");

        assert_eq!(store.load(), prefs);
    }

    #[test]
    fn test_saved_file_is_readable_json() {
        let (store, temp_dir) = create_test_store();
        store
            .save(&Preferences {
                cart_count: 7,
                theme: Theme::Light,
            })
            .expect("Save should succeed");

        let content = fs::read_to_string(temp_dir.path().join("preferences.json"))
            .expect("Should read file");
        assert!(content.contains("\"cart_count\": 7"));
        assert!(content.contains("\"light\""));
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let (store, temp_dir) = create_test_store();
        fs::write(temp_dir.path().join("preferences.json"), "{ not json").unwrap();

        assert_eq!(store.load(), Preferences::default());
    }

    #[test]
    fn test_partial_file_fills_missing_fields() {
        let (store, temp_dir) = create_test_store();
        fs::write(temp_dir.path().join("preferences.json"), r#"{"cart_count": 2}"#).unwrap();

        let prefs = store.load();

        assert_eq!(prefs.cart_count, 2);
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn test_save_creates_directory_if_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested = temp_dir.path().join("nested").join("config");
        let store = PreferenceStore::with_dir(nested.clone());

        store
            .save(&Preferences::default())
            .expect("Save should succeed");

        assert!(nested.join("preferences.json").exists());
    }

    #[test]
    fn test_new_uses_project_directory() {
        if let Some(store) = PreferenceStore::new() {
            assert!(store.dir().to_string_lossy().contains("gamestore"));
        }
        // Passes if new() returns None (e.g., no home directory in CI)
    }

    #[test]
    fn test_theme_toggle_and_parse() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::parse("LIGHT"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
    }
}
