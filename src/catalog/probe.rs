//! Driver State Probe
//!
//! Decides whether a driver is usable. User overrides win; otherwise the
//! driver class is looked up through a [`DriverResolver`].

use std::collections::{HashMap, HashSet};
use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::types::{DriverDescriptor, DriverState};
use crate::preferences::UserPreferences;

/// Why a driver class could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Driver class not found: {class_name}")]
    NotFound { class_name: String },

    #[error("Driver class {class_name} could not be loaded: {reason}")]
    Failed { class_name: String, reason: String },
}

impl ResolveError {
    pub fn not_found(class_name: impl Into<String>) -> Self {
        Self::NotFound {
            class_name: class_name.into(),
        }
    }

    pub fn failed(class_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failed {
            class_name: class_name.into(),
            reason: reason.into(),
        }
    }
}

/// Looks up driver classes in the runtime without initializing them
pub trait DriverResolver: Send + Sync {
    fn resolve(&self, driver_class: &str) -> Result<(), ResolveError>;
}

/// Resolves classes against exploded classpath directories.
///
/// `org.h2.Driver` resolves when some root contains `org/h2/Driver.class`.
#[derive(Debug, Clone, Default)]
pub struct ClasspathResolver {
    roots: Vec<PathBuf>,
}

impl ClasspathResolver {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    fn relative_path(driver_class: &str) -> PathBuf {
        let mut path: PathBuf = driver_class.split('.').collect();
        path.set_extension("class");
        path
    }
}

impl DriverResolver for ClasspathResolver {
    fn resolve(&self, driver_class: &str) -> Result<(), ResolveError> {
        if driver_class.is_empty() {
            return Err(ResolveError::not_found(driver_class));
        }

        let relative = Self::relative_path(driver_class);
        for root in &self.roots {
            let candidate = root.join(&relative);
            match candidate.metadata() {
                Ok(meta) if meta.is_file() => return Ok(()),
                Ok(_) => {
                    return Err(ResolveError::failed(
                        driver_class,
                        format!("{} is not a regular file", candidate.display()),
                    ))
                }
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(ResolveError::failed(
                        driver_class,
                        format!("{}: {}", candidate.display(), e),
                    ))
                }
            }
        }

        Err(ResolveError::not_found(driver_class))
    }
}

/// In-memory resolver with a fixed set of available and broken classes
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    available: HashSet<String>,
    broken: HashMap<String, String>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_available(mut self, driver_class: impl Into<String>) -> Self {
        self.available.insert(driver_class.into());
        self
    }

    /// Marks a class as present but failing to load
    pub fn with_broken(mut self, driver_class: impl Into<String>, reason: impl Into<String>) -> Self {
        self.broken.insert(driver_class.into(), reason.into());
        self
    }
}

impl DriverResolver for StaticResolver {
    fn resolve(&self, driver_class: &str) -> Result<(), ResolveError> {
        if let Some(reason) = self.broken.get(driver_class) {
            return Err(ResolveError::failed(driver_class, reason.clone()));
        }
        if self.available.contains(driver_class) {
            Ok(())
        } else {
            Err(ResolveError::not_found(driver_class))
        }
    }
}

/// Determines the installation state of `driver`
pub fn probe_state(
    driver: &DriverDescriptor,
    preferences: Option<&dyn UserPreferences>,
    resolver: &dyn DriverResolver,
) -> DriverState {
    let driver_class = driver.driver_class_name();

    if let Some(preferences) = preferences {
        if let Some(user_driver) = preferences
            .database_drivers()
            .into_iter()
            .find(|d| d.driver_class_name == driver_class)
        {
            debug!(driver_class, state = ?user_driver.state, "using user driver override");
            return user_driver.state;
        }
    }

    match resolver.resolve(driver_class) {
        Ok(()) => DriverState::InstalledWorking,
        Err(ResolveError::NotFound { .. }) => DriverState::NotInstalled,
        Err(err) => {
            warn!(driver_class, error = %err, "Unexpected error occurred while resolving driver class");
            DriverState::InstalledNotWorking
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::UserDriverOverride;
    use crate::preferences::PreferencesStore;
    use std::fs;

    fn h2() -> DriverDescriptor {
        DriverDescriptor::new("H2", None, "org.h2.Driver", &[], &["jdbc:h2:<path/to/database>"])
    }

    #[test]
    fn override_wins_over_resolver() {
        let prefs = PreferencesStore::in_memory();
        prefs.set_driver_override(UserDriverOverride::new(
            "org.h2.Driver",
            DriverState::InstalledNotWorking,
        ));
        let resolver = StaticResolver::new().with_available("org.h2.Driver");

        assert_eq!(
            probe_state(&h2(), Some(&prefs), &resolver),
            DriverState::InstalledNotWorking
        );
    }

    #[test]
    fn override_can_install_unresolvable_driver() {
        let prefs = PreferencesStore::in_memory();
        prefs.set_driver_override(UserDriverOverride::new("org.h2.Driver", DriverState::InstalledWorking));

        assert_eq!(
            probe_state(&h2(), Some(&prefs), &StaticResolver::new()),
            DriverState::InstalledWorking
        );
    }

    #[test]
    fn resolver_outcomes_map_to_states() {
        let available = StaticResolver::new().with_available("org.h2.Driver");
        let broken = StaticResolver::new().with_broken("org.h2.Driver", "linkage error");

        assert_eq!(probe_state(&h2(), None, &available), DriverState::InstalledWorking);
        assert_eq!(probe_state(&h2(), None, &StaticResolver::new()), DriverState::NotInstalled);
        assert_eq!(probe_state(&h2(), None, &broken), DriverState::InstalledNotWorking);
    }

    #[test]
    fn classpath_resolver_finds_class_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let package = dir.path().join("org").join("h2");
        fs::create_dir_all(&package).expect("mkdir");
        fs::write(package.join("Driver.class"), [0xCA, 0xFE, 0xBA, 0xBE]).expect("write");

        let resolver = ClasspathResolver::new(vec![PathBuf::from("/nonexistent"), dir.path().to_path_buf()]);

        assert_eq!(resolver.resolve("org.h2.Driver"), Ok(()));
        assert!(matches!(
            resolver.resolve("org.sqlite.JDBC"),
            Err(ResolveError::NotFound { .. })
        ));
    }

    #[test]
    fn classpath_resolver_rejects_directory_in_place_of_class() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("org").join("h2").join("Driver.class")).expect("mkdir");

        let resolver = ClasspathResolver::new(vec![dir.path().to_path_buf()]);

        assert!(matches!(
            resolver.resolve("org.h2.Driver"),
            Err(ResolveError::Failed { .. })
        ));
    }

    #[test]
    fn empty_class_name_is_not_found() {
        let resolver = ClasspathResolver::default();
        assert_eq!(resolver.resolve(""), Err(ResolveError::not_found("")));
    }
}
