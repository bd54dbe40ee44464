// Database Driver Catalog
// Known database drivers, their installation state and the datastore types built on them

pub mod composer;
pub mod error;
pub mod facade;
pub mod probe;
pub mod registry;
pub mod types;

pub use error::{CatalogError, CatalogResult};
pub use facade::DatabaseDriverCatalog;
pub use probe::{ClasspathResolver, DriverResolver, ResolveError, StaticResolver};
pub use registry::*;
pub use types::*;
