//! Driver catalog commands.

use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

use crate::catalog::{
    CatalogError, DatabaseDriverCatalog, DatastoreDescriptor, DriverDescriptor, DriverState,
};
use crate::SharedState;

/// A driver as shown in the driver management screen
#[derive(Debug, Clone, Serialize)]
pub struct DriverInfo {
    pub name: String,
    pub driver_class: String,
    pub icon: String,
    pub state: DriverState,
    pub download_urls: Vec<String>,
    pub url_templates: Vec<String>,
}

impl DriverInfo {
    fn new(driver: &DriverDescriptor, state: DriverState) -> Self {
        Self {
            name: driver.display_name().to_string(),
            driver_class: driver.driver_class_name().to_string(),
            icon: DatabaseDriverCatalog::icon_image_path(Some(driver)).to_string(),
            state,
            download_urls: driver.download_urls().to_vec(),
            url_templates: driver.url_templates().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DriverListResponse {
    pub success: bool,
    pub drivers: Vec<DriverInfo>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DriverStateResponse {
    pub success: bool,
    pub state: Option<DriverState>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DatastoreListResponse {
    pub success: bool,
    pub datastores: Vec<DatastoreDescriptor>,
    pub error: Option<String>,
}

async fn catalog_of(state: &SharedState) -> Arc<DatabaseDriverCatalog> {
    let state = state.lock().await;
    Arc::clone(&state.catalog)
}

/// Lists every known driver with its current state
#[instrument(skip(state))]
pub async fn list_database_drivers(state: &SharedState) -> Result<DriverListResponse, String> {
    let catalog = catalog_of(state).await;
    let drivers = catalog
        .database_drivers()
        .iter()
        .map(|d| DriverInfo::new(d, catalog.state(d)))
        .collect();

    Ok(DriverListResponse {
        success: true,
        drivers,
        error: None,
    })
}

/// Lists the drivers that are installed and working
#[instrument(skip(state))]
pub async fn list_installed_drivers(state: &SharedState) -> Result<DriverListResponse, String> {
    let catalog = catalog_of(state).await;
    let drivers = catalog
        .installed_working_drivers()
        .into_iter()
        .map(|d| DriverInfo::new(d, DriverState::InstalledWorking))
        .collect();

    Ok(DriverListResponse {
        success: true,
        drivers,
        error: None,
    })
}

/// Returns the state of the driver named `database_name`
#[instrument(skip(state))]
pub async fn get_driver_state(
    state: &SharedState,
    database_name: String,
) -> Result<DriverStateResponse, String> {
    let catalog = catalog_of(state).await;

    match DatabaseDriverCatalog::driver_by_name(Some(database_name.trim())) {
        Some(driver) => Ok(DriverStateResponse {
            success: true,
            state: Some(catalog.state(driver)),
            error: None,
        }),
        None => Ok(DriverStateResponse {
            success: false,
            state: None,
            error: Some(CatalogError::driver_not_found(database_name).to_string()),
        }),
    }
}

/// Lists the datastore types the user can create
#[instrument(skip(state))]
pub async fn list_datastore_descriptors(
    state: &SharedState,
) -> Result<DatastoreListResponse, String> {
    let catalog = catalog_of(state).await;

    Ok(DatastoreListResponse {
        success: true,
        datastores: catalog.available_datastore_descriptors(),
        error: None,
    })
}
