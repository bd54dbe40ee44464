//! Catalog data types
//!
//! Driver descriptors describe a database driver independently of whether it
//! can currently be used. Datastore descriptors describe the kinds of data
//! sources offered to the user.

use std::cmp::Ordering;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Installation status of a database driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriverState {
    InstalledWorking,
    InstalledNotWorking,
    NotInstalled,
}

impl DriverState {
    pub fn is_working(self) -> bool {
        self == DriverState::InstalledWorking
    }
}

/// Metadata about one known database driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverDescriptor {
    display_name: String,
    icon_path: Option<String>,
    driver_class_name: String,
    download_urls: Vec<String>,
    url_templates: Vec<String>,
}

impl DriverDescriptor {
    pub fn new(
        display_name: impl Into<String>,
        icon_path: Option<&str>,
        driver_class_name: impl Into<String>,
        download_urls: &[&str],
        url_templates: &[&str],
    ) -> Self {
        Self {
            display_name: display_name.into(),
            icon_path: icon_path.map(str::to_string),
            driver_class_name: driver_class_name.into(),
            download_urls: download_urls.iter().map(|s| s.to_string()).collect(),
            url_templates: url_templates.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn icon_path(&self) -> Option<&str> {
        self.icon_path.as_deref()
    }

    pub fn driver_class_name(&self) -> &str {
        &self.driver_class_name
    }

    /// URLs of the driver archive(s). Empty when the driver is bundled or
    /// has to be supplied by the user.
    pub fn download_urls(&self) -> &[String] {
        &self.download_urls
    }

    /// Connection string templates with `<placeholder>` markers
    pub fn url_templates(&self) -> &[String] {
        &self.url_templates
    }

    /// The first connection string template
    pub fn default_url_template(&self) -> Option<&str> {
        self.url_templates.first().map(String::as_str)
    }

    /// Orders descriptors by display name, ignoring case.
    pub fn cmp_display_name(&self, other: &Self) -> Ordering {
        let lhs = self.display_name.chars().flat_map(char::to_lowercase);
        let rhs = other.display_name.chars().flat_map(char::to_lowercase);
        lhs.cmp(rhs)
    }
}

/// Which datastore implementation backs a datastore descriptor.
///
/// The catalog treats this as an opaque tag; binding it to a concrete
/// datastore is up to the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatastoreKind {
    Csv,
    Excel,
    Access,
    Sas,
    Dbase,
    FixedWidth,
    Xml,
    Json,
    Salesforce,
    SugarCrm,
    MongoDb,
    CouchDb,
    ElasticSearch,
    Cassandra,
    HBase,
    Jdbc,
    Composite,
}

/// A user-facing datastore type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatastoreDescriptor {
    pub name: String,
    pub description: String,
    pub kind: DatastoreKind,
    pub categories: Vec<String>,
}

impl DatastoreDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: DatastoreKind) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            categories: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }
}

/// A driver the user has registered or marked explicitly.
///
/// Overrides take precedence over probing the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDriverOverride {
    pub driver_class_name: String,
    pub state: DriverState,
    /// Driver archives supplied by the user
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

impl UserDriverOverride {
    pub fn new(driver_class_name: impl Into<String>, state: DriverState) -> Self {
        Self {
            driver_class_name: driver_class_name.into(),
            state,
            files: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_ordering_ignores_case() {
        let lower = DriverDescriptor::new("apache", None, "a.A", &[], &["x"]);
        let upper = DriverDescriptor::new("Beta", None, "b.B", &[], &["x"]);

        assert_eq!(lower.cmp_display_name(&upper), Ordering::Less);
        assert_eq!(upper.cmp_display_name(&lower), Ordering::Greater);
    }

    #[test]
    fn driver_state_uses_screaming_case_on_the_wire() {
        let json = serde_json::to_string(&DriverState::InstalledNotWorking).expect("serialize");
        assert_eq!(json, "\"INSTALLED_NOT_WORKING\"");

        let state: DriverState = serde_json::from_str("\"NOT_INSTALLED\"").expect("deserialize");
        assert_eq!(state, DriverState::NotInstalled);
    }

    #[test]
    fn override_without_files_deserializes() {
        let json = r#"{"driver_class_name":"org.h2.Driver","state":"INSTALLED_WORKING"}"#;
        let driver: UserDriverOverride = serde_json::from_str(json).expect("should parse");

        assert_eq!(driver.driver_class_name, "org.h2.Driver");
        assert!(driver.files.is_empty());
    }
}
