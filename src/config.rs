//! Catalog configuration.
//!
//! Defaults are persisted to a per-user config file. Environment variables
//! override any stored values so deployments can point at their own driver
//! directories.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::error::CatalogResult;

const DRIVER_PATH_ENV: &str = "DATACLEANER_DRIVER_PATH";
const PREFERENCES_ENV: &str = "DATACLEANER_PREFERENCES";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Classpath directories searched for driver classes
    #[serde(default)]
    pub driver_paths: Vec<PathBuf>,
    /// User preferences file; defaults to `preferences.json` next to the config
    #[serde(default)]
    pub preferences_path: Option<PathBuf>,
}

pub(crate) fn user_directory() -> PathBuf {
    if cfg!(windows) {
        let appdata = std::env::var_os("APPDATA")
            .unwrap_or_else(|| std::env::var_os("USERPROFILE").unwrap_or_default());
        let mut path = PathBuf::from(appdata);
        path.push("DataCleaner");
        path
    } else {
        let home = std::env::var_os("HOME").unwrap_or_default();
        let mut path = PathBuf::from(home);
        path.push(".datacleaner");
        path
    }
}

fn config_path() -> PathBuf {
    user_directory().join("config.json")
}

fn load_from_file(path: &Path) -> Option<CatalogConfig> {
    let raw = fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw).ok()
}

impl CatalogConfig {
    fn apply_overrides(&mut self, driver_path: Option<OsString>, preferences: Option<OsString>) {
        if let Some(value) = driver_path.filter(|v| !v.is_empty()) {
            self.driver_paths = std::env::split_paths(&value)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
        }
        if let Some(value) = preferences.filter(|v| !v.is_empty()) {
            self.preferences_path = Some(PathBuf::from(value));
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var_os(DRIVER_PATH_ENV),
            std::env::var_os(PREFERENCES_ENV),
        );
    }

    pub fn load() -> Self {
        let path = config_path();
        let mut config = load_from_file(&path).unwrap_or_default();
        config.apply_env_overrides();
        config
    }

    /// Preferences file to open, falling back to the per-user default
    pub fn effective_preferences_path(&self) -> PathBuf {
        self.preferences_path
            .clone()
            .unwrap_or_else(|| user_directory().join("preferences.json"))
    }

    pub fn save_to_file(&self) -> CatalogResult<()> {
        self.save_to(&config_path())
    }

    fn save_to(&self, path: &Path) -> CatalogResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = serde_json::to_string_pretty(self)?;
        fs::write(path, payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_path_override_replaces_configured_paths() {
        let mut config = CatalogConfig {
            driver_paths: vec![PathBuf::from("/from/file")],
            preferences_path: None,
        };
        let joined = std::env::join_paths(["/opt/jdbc", "/usr/share/java"]).expect("join");

        config.apply_overrides(Some(joined), None);

        assert_eq!(
            config.driver_paths,
            vec![PathBuf::from("/opt/jdbc"), PathBuf::from("/usr/share/java")]
        );
        assert_eq!(config.preferences_path, None);
    }

    #[test]
    fn empty_preferences_override_is_ignored() {
        let mut config = CatalogConfig::default();
        config.apply_overrides(None, Some(OsString::new()));
        assert_eq!(config.preferences_path, None);

        config.apply_overrides(None, Some(OsString::from("/tmp/prefs.json")));
        assert_eq!(config.effective_preferences_path(), PathBuf::from("/tmp/prefs.json"));
    }

    #[test]
    fn empty_driver_path_override_keeps_configured_paths() {
        let mut config = CatalogConfig {
            driver_paths: vec![PathBuf::from("/from/file")],
            preferences_path: None,
        };

        config.apply_overrides(Some(OsString::new()), Some(OsString::new()));

        assert_eq!(config.driver_paths, vec![PathBuf::from("/from/file")]);
        assert_eq!(config.preferences_path, None);
    }

    #[test]
    fn saved_config_survives_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.json");
        let config = CatalogConfig {
            driver_paths: vec![PathBuf::from("/opt/jdbc")],
            preferences_path: Some(PathBuf::from("/tmp/prefs.json")),
        };

        config.save_to(&path).expect("should save");

        assert_eq!(load_from_file(&path), Some(config));
    }

    #[test]
    fn partial_config_file_uses_defaults() {
        let config: CatalogConfig =
            serde_json::from_str(r#"{"driver_paths":["/opt/jdbc"]}"#).expect("should parse");

        assert_eq!(config.driver_paths, vec![PathBuf::from("/opt/jdbc")]);
        assert!(config.preferences_path.is_none());
    }
}
