//! User driver override commands.

use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

use crate::catalog::{DriverState, UserDriverOverride};
use crate::preferences::{PreferencesStore, UserPreferences};
use crate::SharedState;

#[derive(Debug, Serialize)]
pub struct PreferencesResponse {
    pub success: bool,
    pub overrides: Option<Vec<UserDriverOverride>>,
    pub error: Option<String>,
}

impl PreferencesResponse {
    fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            overrides: None,
            error: Some(error.into()),
        }
    }

    fn saved(store: &PreferencesStore) -> Self {
        match store.save() {
            Ok(()) => Self {
                success: true,
                overrides: Some(store.database_drivers()),
                error: None,
            },
            Err(e) => Self::failed(format!("Save failed: {}", e)),
        }
    }
}

fn normalize_driver_class(driver_class: &str) -> Result<String, String> {
    let trimmed = driver_class.trim();
    if trimmed.is_empty() {
        return Err("Driver class is required".to_string());
    }
    Ok(trimmed.to_string())
}

async fn preferences_of(state: &SharedState) -> Arc<PreferencesStore> {
    let state = state.lock().await;
    Arc::clone(&state.preferences)
}

/// Records the user's verdict on a driver class and persists it
#[instrument(skip(state))]
pub async fn set_driver_override(
    state: &SharedState,
    driver_class: String,
    driver_state: DriverState,
) -> Result<PreferencesResponse, String> {
    let driver_class = match normalize_driver_class(&driver_class) {
        Ok(class) => class,
        Err(e) => return Ok(PreferencesResponse::failed(e)),
    };

    let store = preferences_of(state).await;
    store.set_driver_override(UserDriverOverride::new(driver_class, driver_state));
    Ok(PreferencesResponse::saved(&store))
}

/// Drops the user's override so the driver is probed again
#[instrument(skip(state))]
pub async fn remove_driver_override(
    state: &SharedState,
    driver_class: String,
) -> Result<PreferencesResponse, String> {
    let driver_class = match normalize_driver_class(&driver_class) {
        Ok(class) => class,
        Err(e) => return Ok(PreferencesResponse::failed(e)),
    };

    let store = preferences_of(state).await;
    if !store.remove_driver_override(&driver_class) {
        return Ok(PreferencesResponse::failed(format!(
            "No override for driver class: {}",
            driver_class
        )));
    }
    Ok(PreferencesResponse::saved(&store))
}
