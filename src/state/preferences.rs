//! User preferences persistence.
//!
//! Preferences live in a small INI file:
//!
//! ```ini
//! [General]
//! hide_on_startup = true
//! ```
//!
//! Keys and sections this module does not know about are kept as-is and
//! written back on save.

use ini::Ini;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ToolpickError};

/// Section holding the recognized settings.
pub const GENERAL_SECTION: &str = "General";

/// Key for the "don't show this app on startup" setting.
pub const HIDE_ON_STARTUP: &str = "hide_on_startup";

/// File name inside the per-user config directory.
pub const PREFERENCES_FILE: &str = "user_settings.ini";

/// Saved user preferences.
#[derive(Debug, Clone)]
pub struct Preferences {
    ini: Ini,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { ini: Ini::new() }
    }
}

impl Preferences {
    /// Default preferences file: `<config_dir>/toolpick/user_settings.ini`.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "toolpick")
            .map(|dirs| dirs.config_dir().join(PREFERENCES_FILE))
    }

    /// Load preferences from disk, or defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `PreferencesError` if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No preferences at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ToolpickError::PreferencesError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::parse(&content, path)
    }

    /// Parse INI content.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        let ini = Ini::load_from_str(content).map_err(|e| ToolpickError::PreferencesError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

        let prefs = Self { ini };
        for key in prefs.invalid_settings() {
            tracing::warn!(
                "Ignoring non-boolean value for {} in {}",
                key,
                source_path.display()
            );
        }
        Ok(prefs)
    }

    /// Save preferences to disk, overwriting the file.
    ///
    /// Uses the write-to-temp-then-rename pattern to prevent corruption.
    pub fn save(&self, path: &Path) -> Result<()> {
        let to_error = |e: std::io::Error| ToolpickError::PreferencesError {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(to_error)?;
        }

        let temp_path = path.with_extension("ini.tmp");
        self.ini.write_to_file(&temp_path).map_err(to_error)?;
        fs::rename(&temp_path, path).map_err(to_error)?;

        tracing::debug!("Saved preferences to {}", path.display());
        Ok(())
    }

    /// Whether the interactive app should exit immediately on startup.
    pub fn hide_on_startup(&self) -> bool {
        self.get_bool(GENERAL_SECTION, HIDE_ON_STARTUP)
            .unwrap_or(false)
    }

    pub fn set_hide_on_startup(&mut self, hide: bool) {
        self.set(GENERAL_SECTION, HIDE_ON_STARTUP, if hide { "true" } else { "false" });
    }

    /// Raw string value of a key.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.ini.get_from(Some(section), key)
    }

    /// Set a raw string value.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    /// Boolean value of a key, or `None` if absent or not a boolean.
    pub fn get_bool(&self, section: &str, key: &str) -> Option<bool> {
        self.get(section, key).and_then(parse_bool)
    }

    /// Recognized settings whose stored value is unusable, as `section.key`.
    pub fn invalid_settings(&self) -> Vec<String> {
        [(GENERAL_SECTION, HIDE_ON_STARTUP)]
            .into_iter()
            .filter(|(section, key)| {
                self.get(section, key)
                    .is_some_and(|raw| parse_bool(raw).is_none())
            })
            .map(|(section, key)| format!("{}.{}", section, key))
            .collect()
    }
}

/// Accepts the spellings INI files commonly use for booleans.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn preferences_default() {
        let prefs = Preferences::default();
        assert!(!prefs.hide_on_startup());
    }

    #[test]
    fn preferences_save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user_settings.ini");

        let mut prefs = Preferences::default();
        prefs.set_hide_on_startup(true);
        prefs.save(&path).unwrap();

        let loaded = Preferences::load(&path).unwrap();
        assert!(loaded.hide_on_startup());

        let mut prefs = loaded;
        prefs.set_hide_on_startup(false);
        prefs.save(&path).unwrap();
        assert!(!Preferences::load(&path).unwrap().hide_on_startup());
    }

    #[test]
    fn preferences_load_nonexistent_returns_default() {
        let temp = TempDir::new().unwrap();
        let prefs = Preferences::load(&temp.path().join("missing.ini")).unwrap();
        assert!(!prefs.hide_on_startup());
    }

    #[test]
    fn accepts_python_style_booleans() {
        let prefs =
            Preferences::parse("[General]\nhide_on_startup = True\n", Path::new("x")).unwrap();
        assert!(prefs.hide_on_startup());

        let prefs = Preferences::parse("[General]\nhide_on_startup = 0\n", Path::new("x")).unwrap();
        assert!(!prefs.hide_on_startup());
    }

    #[test]
    fn non_boolean_value_falls_back_to_default() {
        let prefs =
            Preferences::parse("[General]\nhide_on_startup = maybe\n", Path::new("x")).unwrap();
        assert!(!prefs.hide_on_startup());
        assert_eq!(prefs.get_bool(GENERAL_SECTION, HIDE_ON_STARTUP), None);
        assert_eq!(prefs.invalid_settings(), ["General.hide_on_startup"]);
    }

    #[test]
    fn valid_or_missing_values_are_not_invalid() {
        assert!(Preferences::default().invalid_settings().is_empty());

        let prefs =
            Preferences::parse("[General]\nhide_on_startup = yes\n", Path::new("x")).unwrap();
        assert!(prefs.invalid_settings().is_empty());
    }

    #[test]
    fn saving_a_new_value_clears_invalid_setting() {
        let mut prefs =
            Preferences::parse("[General]\nhide_on_startup = maybe\n", Path::new("x")).unwrap();
        prefs.set_hide_on_startup(true);
        assert!(prefs.invalid_settings().is_empty());
        assert!(prefs.hide_on_startup());
    }

    #[test]
    fn save_preserves_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user_settings.ini");
        fs::write(&path, "[General]\ntheme = dark\n\n[Window]\nwidth = 1280\n").unwrap();

        let mut prefs = Preferences::load(&path).unwrap();
        prefs.set_hide_on_startup(true);
        prefs.save(&path).unwrap();

        let loaded = Preferences::load(&path).unwrap();
        assert!(loaded.hide_on_startup());
        assert_eq!(loaded.get("General", "theme"), Some("dark"));
        assert_eq!(loaded.get("Window", "width"), Some("1280"));
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("user_settings.ini");

        Preferences::default().save(&path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("ini.tmp").exists());
    }

    #[test]
    fn save_to_unwritable_location_reports_preferences_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        fs::write(&blocker, "").unwrap();

        let err = Preferences::default()
            .save(&blocker.join("user_settings.ini"))
            .unwrap_err();
        assert!(matches!(err, ToolpickError::PreferencesError { .. }));
    }

    #[test]
    fn default_path_ends_with_file_name() {
        if let Some(path) = Preferences::default_path() {
            assert!(path.ends_with(PREFERENCES_FILE));
        }
    }
}
