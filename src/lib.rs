// Driver Catalog - database drivers and datastore types known to the product
// Core library

pub mod catalog;
pub mod commands;
pub mod config;
pub mod observability;
pub mod preferences;

use std::sync::Arc;
use tokio::sync::Mutex;

use catalog::{ClasspathResolver, DatabaseDriverCatalog, DriverResolver};
use config::CatalogConfig;
use preferences::{PreferencesStore, UserPreferences};

pub type SharedState = Arc<Mutex<AppState>>;
pub struct AppState {
    pub catalog: Arc<DatabaseDriverCatalog>,
    pub preferences: Arc<PreferencesStore>,
    pub config: CatalogConfig,
}

impl AppState {
    pub fn new() -> Self {
        let config = CatalogConfig::load();

        let preferences = match PreferencesStore::open(config.effective_preferences_path()) {
            Ok(store) => {
                tracing::info!(path = ?store.path(), "Loaded user preferences");
                store
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %config.effective_preferences_path().display(),
                    "Failed to load user preferences, starting empty"
                );
                PreferencesStore::in_memory()
            }
        };
        let resolver = ClasspathResolver::new(config.driver_paths.clone());

        Self::with_parts(config, Arc::new(preferences), Arc::new(resolver))
    }

    /// Wires the catalog to the given preferences and resolver
    pub fn with_parts(
        config: CatalogConfig,
        preferences: Arc<PreferencesStore>,
        resolver: Arc<dyn DriverResolver>,
    ) -> Self {
        let user_preferences: Arc<dyn UserPreferences> = preferences.clone();
        let catalog = Arc::new(DatabaseDriverCatalog::new(Some(user_preferences), resolver));

        Self {
            catalog,
            preferences,
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the process-wide state with logging enabled
pub fn init() -> SharedState {
    observability::init_tracing();
    Arc::new(Mutex::new(AppState::new()))
}
