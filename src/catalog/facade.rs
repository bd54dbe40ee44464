//! Database Driver Catalog
//!
//! Query surface over the built-in drivers and their installation state.

use std::sync::Arc;

use tracing::instrument;

use crate::catalog::composer;
use crate::catalog::probe::{self, DriverResolver};
use crate::catalog::registry;
use crate::catalog::types::{DatastoreDescriptor, DriverDescriptor, DriverState};
use crate::preferences::UserPreferences;

/// Catalog of database drivers and their current installation status.
///
/// Holds no state besides its collaborators, so every query reflects the
/// user preferences as they are at call time.
pub struct DatabaseDriverCatalog {
    preferences: Option<Arc<dyn UserPreferences>>,
    resolver: Arc<dyn DriverResolver>,
}

impl DatabaseDriverCatalog {
    pub fn new(
        preferences: Option<Arc<dyn UserPreferences>>,
        resolver: Arc<dyn DriverResolver>,
    ) -> Self {
        Self {
            preferences,
            resolver,
        }
    }

    /// All built-in drivers, sorted by display name
    pub fn database_drivers(&self) -> &'static [DriverDescriptor] {
        registry::builtin_drivers()
    }

    /// Built-in drivers that are installed and working, in registry order
    pub fn installed_working_drivers(&self) -> Vec<&'static DriverDescriptor> {
        registry::builtin_drivers()
            .iter()
            .filter(|d| self.state(d).is_working())
            .collect()
    }

    pub fn state(&self, driver: &DriverDescriptor) -> DriverState {
        probe::probe_state(driver, self.preferences.as_deref(), self.resolver.as_ref())
    }

    /// True if `database_name` is a known driver that is installed and working
    pub fn is_installed(&self, database_name: &str) -> bool {
        registry::driver_by_name(Some(database_name))
            .map(|d| self.state(d).is_working())
            .unwrap_or(false)
    }

    /// Returns the descriptors of datastore types available to the user.
    #[instrument(skip(self))]
    pub fn available_datastore_descriptors(&self) -> Vec<DatastoreDescriptor> {
        let installed = self.installed_working_drivers();
        let descriptors = composer::compose(composer::manual_descriptors(), &installed);
        tracing::debug!(
            installed = installed.len(),
            descriptors = descriptors.len(),
            "composed datastore descriptors"
        );
        descriptors
    }

    pub fn driver_by_name(database_name: Option<&str>) -> Option<&'static DriverDescriptor> {
        registry::driver_by_name(database_name)
    }

    pub fn driver_by_class(driver_class: Option<&str>) -> Option<&'static DriverDescriptor> {
        registry::driver_by_class(driver_class)
    }

    pub fn icon_image_path(driver: Option<&DriverDescriptor>) -> &str {
        registry::icon_image_path(driver)
    }
}
