//! Preferences Store
//!
//! JSON file holding the user's driver overrides.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::error::CatalogResult;
use crate::catalog::types::UserDriverOverride;
use crate::preferences::UserPreferences;

/// On-disk layout of the preferences file
#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default)]
    database_drivers: Vec<UserDriverOverride>,
}

/// User preferences backed by an optional JSON file
pub struct PreferencesStore {
    path: Option<PathBuf>,
    drivers: RwLock<Vec<UserDriverOverride>>,
}

impl PreferencesStore {
    /// Creates a store that is never persisted
    pub fn in_memory() -> Self {
        Self {
            path: None,
            drivers: RwLock::new(Vec::new()),
        }
    }

    /// Opens the store at `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> CatalogResult<Self> {
        let path = path.into();
        let file = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str::<PreferencesFile>(&raw)?,
            Err(e) if e.kind() == ErrorKind::NotFound => PreferencesFile::default(),
            Err(e) => return Err(e.into()),
        };

        debug!(
            path = %path.display(),
            drivers = file.database_drivers.len(),
            "loaded user preferences"
        );

        Ok(Self {
            path: Some(path),
            drivers: RwLock::new(file.database_drivers),
        })
    }

    /// File backing the store, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Adds an override, replacing any existing one for the same driver class
    pub fn set_driver_override(&self, driver: UserDriverOverride) {
        let mut drivers = self.drivers.write();
        match drivers
            .iter_mut()
            .find(|d| d.driver_class_name == driver.driver_class_name)
        {
            Some(existing) => *existing = driver,
            None => drivers.push(driver),
        }
    }

    /// Removes the override for `driver_class`. Returns false if there was none.
    pub fn remove_driver_override(&self, driver_class: &str) -> bool {
        let mut drivers = self.drivers.write();
        let before = drivers.len();
        drivers.retain(|d| d.driver_class_name != driver_class);
        drivers.len() != before
    }

    /// Writes the store to its file. In-memory stores are left untouched.
    pub fn save(&self) -> CatalogResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = PreferencesFile {
            database_drivers: self.drivers.read().clone(),
        };
        let payload = serde_json::to_string_pretty(&file)?;
        fs::write(path, payload)?;
        Ok(())
    }
}

impl UserPreferences for PreferencesStore {
    fn database_drivers(&self) -> Vec<UserDriverOverride> {
        self.drivers.read().clone()
    }
}

impl Default for PreferencesStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
