//! Datastore Catalog Composer
//!
//! Builds the ordered list of datastore types offered to the user:
//! 1. file and NoSQL datastores that are always available
//! 2. featured databases, present only when their driver works
//! 3. every other working driver, then "Other database" and "Composite datastore"

use std::collections::HashSet;

use crate::catalog::registry::{
    DATABASE_NAME_HIVE, DATABASE_NAME_MICROSOFT_SQL_SERVER_JTDS, DATABASE_NAME_MYSQL,
    DATABASE_NAME_ORACLE, DATABASE_NAME_POSTGRESQL,
};
use crate::catalog::types::{DatastoreDescriptor, DatastoreKind, DriverDescriptor};

pub const CATEGORY_DATABASE: &str = "Database";
pub const CATEGORY_CLOUD_SERVICE: &str = "Cloud service";

pub const OTHER_DATABASE_NAME: &str = "Other database";
pub const COMPOSITE_DATASTORE_NAME: &str = "Composite datastore";

/// Databases that get a dedicated entry when their driver works
const FEATURED_DATABASES: [(&str, &str); 5] = [
    (DATABASE_NAME_HIVE, "Connect to an Apache Hive database"),
    (DATABASE_NAME_MYSQL, "Connect to a MySQL database"),
    (DATABASE_NAME_POSTGRESQL, "Connect to a PostgreSQL database"),
    (DATABASE_NAME_ORACLE, "Connect to a Oracle database"),
    (
        DATABASE_NAME_MICROSOFT_SQL_SERVER_JTDS,
        "Connect to a Microsoft SQL Server database",
    ),
];

/// Datastores that do not depend on a database driver
pub fn manual_descriptors() -> Vec<DatastoreDescriptor> {
    use DatastoreKind::*;

    vec![
        DatastoreDescriptor::new(
            "CSV file",
            "Comma-separated values (CSV) file (or file with other separators)",
            Csv,
        ),
        DatastoreDescriptor::new(
            "Excel spreadsheet",
            "Microsoft Excel spreadsheet. Either .xls (97-2003) or .xlsx (2007+) format.",
            Excel,
        ),
        DatastoreDescriptor::new("Access database", "Microsoft Access database file (.mdb).", Access),
        DatastoreDescriptor::new("SAS library", "A directory of SAS library files (.sas7bdat).", Sas),
        DatastoreDescriptor::new("DBase database", "DBase database file (.dbf)", Dbase),
        DatastoreDescriptor::new(
            "Fixed width file",
            "Text file with fixed width values. Each value spans a fixed amount of text characters.",
            FixedWidth,
        ),
        DatastoreDescriptor::new("XML file", "Extensible Markup Language file (.xml)", Xml),
        DatastoreDescriptor::new("JSON file", "JavaScript Object NOtation file (.json).", Json),
        DatastoreDescriptor::new("Salesforce.com", "Connect to a Salesforce.com account", Salesforce)
            .with_category(CATEGORY_CLOUD_SERVICE),
        DatastoreDescriptor::new("SugarCRM", "Connect to a SugarCRM system", SugarCrm)
            .with_category(CATEGORY_CLOUD_SERVICE),
        DatastoreDescriptor::new("MongoDB database", "Connect to a MongoDB database", MongoDb)
            .with_category(CATEGORY_DATABASE),
        DatastoreDescriptor::new("CouchDB database", "Connect to an Apache CouchDB database", CouchDb)
            .with_category(CATEGORY_DATABASE),
        DatastoreDescriptor::new("ElasticSearch index", "Connect to an ElasticSearch index", ElasticSearch)
            .with_category(CATEGORY_DATABASE),
        DatastoreDescriptor::new("Cassandra database", "Connect to an Apache Cassandra database", Cassandra)
            .with_category(CATEGORY_DATABASE),
        DatastoreDescriptor::new("HBase database", "Connect to an Apache HBase database", HBase)
            .with_category(CATEGORY_DATABASE),
    ]
}

/// Composes the full datastore list from the manual entries and the drivers
/// currently installed and working.
///
/// `installed` must be in registry order. Manual entries are kept as given;
/// later entries whose name is already taken are skipped.
pub fn compose(
    manual: Vec<DatastoreDescriptor>,
    installed: &[&DriverDescriptor],
) -> Vec<DatastoreDescriptor> {
    let mut taken: HashSet<String> = manual.iter().map(|d| d.name.clone()).collect();
    let mut descriptors = manual;

    let is_installed = |name: &str| installed.iter().any(|d| d.display_name() == name);

    // names emitted by the featured section; only these suppress later entries
    let mut featured: HashSet<&str> = HashSet::new();
    for (name, description) in FEATURED_DATABASES {
        if is_installed(name) && taken.insert(name.to_string()) {
            descriptors.push(
                DatastoreDescriptor::new(name, description, DatastoreKind::Jdbc)
                    .with_category(CATEGORY_DATABASE),
            );
            featured.insert(name);
        }
    }

    for driver in installed {
        let name = driver.display_name();
        if featured.contains(name) || !taken.insert(name.to_string()) {
            continue;
        }
        descriptors.push(DatastoreDescriptor::new(
            name,
            format!("Connect to {}", name),
            DatastoreKind::Jdbc,
        ));
    }

    if taken.insert(OTHER_DATABASE_NAME.to_string()) {
        descriptors.push(DatastoreDescriptor::new(
            OTHER_DATABASE_NAME,
            "Connect to other database",
            DatastoreKind::Jdbc,
        ));
    }

    if taken.insert(COMPOSITE_DATASTORE_NAME.to_string()) {
        descriptors.push(DatastoreDescriptor::new(
            COMPOSITE_DATASTORE_NAME,
            "Create composite datastore",
            DatastoreKind::Composite,
        ));
    }

    descriptors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::registry::{driver_by_name, DATABASE_NAME_CUBRID, DATABASE_NAME_H2};

    fn installed(names: &[&str]) -> Vec<&'static DriverDescriptor> {
        names
            .iter()
            .map(|n| driver_by_name(Some(*n)).expect("known driver"))
            .collect()
    }

    fn names(descriptors: &[DatastoreDescriptor]) -> Vec<&str> {
        descriptors.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn manual_entries_are_fixed() {
        let manual = manual_descriptors();
        assert_eq!(manual.len(), 15);
        assert_eq!(manual[0].name, "CSV file");
        assert_eq!(manual[14].name, "HBase database");
        assert_eq!(manual[8].categories, vec![CATEGORY_CLOUD_SERVICE]);
        assert!(manual[7].categories.is_empty());
    }

    #[test]
    fn featured_order_follows_the_fixed_list() {
        let drivers = installed(&[DATABASE_NAME_HIVE, DATABASE_NAME_MYSQL, DATABASE_NAME_ORACLE]);
        let composed = compose(Vec::new(), &drivers);

        assert_eq!(
            names(&composed),
            vec![
                DATABASE_NAME_HIVE,
                DATABASE_NAME_MYSQL,
                DATABASE_NAME_ORACLE,
                OTHER_DATABASE_NAME,
                COMPOSITE_DATASTORE_NAME,
            ]
        );
        assert!(composed[..3]
            .iter()
            .all(|d| d.kind == DatastoreKind::Jdbc && d.categories == vec![CATEGORY_DATABASE]));
    }

    #[test]
    fn remaining_drivers_follow_featured_ones() {
        let drivers = installed(&[DATABASE_NAME_CUBRID, DATABASE_NAME_H2, DATABASE_NAME_MYSQL]);
        let composed = compose(Vec::new(), &drivers);

        assert_eq!(
            names(&composed),
            vec![
                DATABASE_NAME_MYSQL,
                DATABASE_NAME_CUBRID,
                DATABASE_NAME_H2,
                OTHER_DATABASE_NAME,
                COMPOSITE_DATASTORE_NAME,
            ]
        );
        assert_eq!(composed[2].description, "Connect to H2");
        assert!(composed[2].categories.is_empty());
    }

    #[test]
    fn manual_entry_wins_name_collision() {
        let manual = vec![DatastoreDescriptor::new(
            DATABASE_NAME_MYSQL,
            "Hand-configured MySQL",
            DatastoreKind::Csv,
        )];
        let composed = compose(manual, &installed(&[DATABASE_NAME_MYSQL]));

        assert_eq!(
            names(&composed),
            vec![DATABASE_NAME_MYSQL, OTHER_DATABASE_NAME, COMPOSITE_DATASTORE_NAME]
        );
        assert_eq!(composed[0].description, "Hand-configured MySQL");
    }

    #[test]
    fn synthetic_entries_always_close_the_list() {
        let composed = compose(Vec::new(), &[]);

        assert_eq!(names(&composed), vec![OTHER_DATABASE_NAME, COMPOSITE_DATASTORE_NAME]);
        assert_eq!(composed[1].kind, DatastoreKind::Composite);
        assert_eq!(composed[0].description, "Connect to other database");
    }
}
