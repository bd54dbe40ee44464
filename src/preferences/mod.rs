//! User Preferences
//!
//! Source of the drivers a user has registered or overridden by hand.

pub mod store;

pub use store::PreferencesStore;

use crate::catalog::types::UserDriverOverride;

/// Provides the user's driver overrides.
///
/// Implementations return a snapshot; the catalog reads it again on every
/// query so changes show up without rebuilding the catalog.
pub trait UserPreferences: Send + Sync {
    fn database_drivers(&self) -> Vec<UserDriverOverride>;
}
