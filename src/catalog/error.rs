//! Catalog error types

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised by the persistence side of the catalog.
///
/// Lookups and state probing never fail; they map every outcome onto an
/// `Option` or a `DriverState`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown database driver: {name}")]
    DriverNotFound { name: String },
}

impl CatalogError {
    pub fn driver_not_found(name: impl Into<String>) -> Self {
        Self::DriverNotFound { name: name.into() }
    }
}
