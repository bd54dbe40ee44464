//! Built-in Driver Registry
//!
//! The fixed table of database drivers the product knows about. The table is
//! built once per process, sorted by display name and never mutated.

use once_cell::sync::Lazy;

use crate::catalog::types::DriverDescriptor;

pub const DATABASE_NAME_JDBC_ODBC_BRIDGE: &str = "JDBC-ODBC bridge";
pub const DATABASE_NAME_TERADATA: &str = "Teradata";
pub const DATABASE_NAME_H2: &str = "H2";
pub const DATABASE_NAME_HSQLDB_HYPER_SQL: &str = "Hsqldb/HyperSQL";
pub const DATABASE_NAME_ORACLE: &str = "Oracle";
pub const DATABASE_NAME_APACHE_DERBY_EMBEDDED: &str = "Apache Derby (embedded)";
pub const DATABASE_NAME_APACHE_DERBY_CLIENT: &str = "Apache Derby (client)";
pub const DATABASE_NAME_SQLITE: &str = "SQLite";
pub const DATABASE_NAME_SYBASE: &str = "Sybase";
pub const DATABASE_NAME_MICROSOFT_SQL_SERVER_JTDS: &str = "Microsoft SQL Server";
pub const DATABASE_NAME_MICROSOFT_SQL_SERVER_OFFICIAL: &str = "Microsoft SQL Server (official)";
pub const DATABASE_NAME_POSTGRESQL: &str = "PostgreSQL";
pub const DATABASE_NAME_SAP_DB: &str = "SAP DB";
pub const DATABASE_NAME_FIREBIRD: &str = "Firebird";
pub const DATABASE_NAME_INGRES: &str = "Ingres";
pub const DATABASE_NAME_DB2: &str = "DB2";
pub const DATABASE_NAME_MYSQL: &str = "MySQL";
pub const DATABASE_NAME_PENTAHO_DATA_INTEGRATION: &str = "Pentaho Data Integration";
pub const DATABASE_NAME_LUCIDDB: &str = "LucidDB";
pub const DATABASE_NAME_PERVASIVE: &str = "Pervasive";
pub const DATABASE_NAME_CUBRID: &str = "Cubrid";
pub const DATABASE_NAME_HIVE: &str = "Apache Hive";

/// Icon used when a driver has none of its own
pub const DEFAULT_ICON_PATH: &str = "images/model/datastore.png";

static BUILTIN_DRIVERS: Lazy<Vec<DriverDescriptor>> = Lazy::new(build_table);

/// Collects table rows before the final sort
struct TableBuilder {
    drivers: Vec<DriverDescriptor>,
}

impl TableBuilder {
    fn new() -> Self {
        Self {
            drivers: Vec::with_capacity(24),
        }
    }

    fn add(&mut self, name: &str, icon: &str, class: &str, download_urls: &[&str], templates: &[&str]) {
        self.drivers
            .push(DriverDescriptor::new(name, Some(icon), class, download_urls, templates));
    }

    /// Shorthand for drivers with at most one download URL
    fn add_single(
        &mut self,
        name: &str,
        icon: &str,
        class: &str,
        download_url: Option<&str>,
        templates: &[&str],
    ) {
        let urls: Vec<&str> = download_url.into_iter().collect();
        self.add(name, icon, class, &urls, templates);
    }

    fn finish(mut self) -> Vec<DriverDescriptor> {
        self.drivers.sort_by(DriverDescriptor::cmp_display_name);
        self.drivers
    }
}

fn build_table() -> Vec<DriverDescriptor> {
    let mut t = TableBuilder::new();

    // defaultFetchSize is Integer.MIN_VALUE, which makes Connector/J stream rows
    t.add_single(
        DATABASE_NAME_MYSQL,
        "images/datastore-types/databases/mysql.png",
        "com.mysql.jdbc.Driver",
        Some("http://repo1.maven.org/maven2/mysql/mysql-connector-java/5.1.18/mysql-connector-java-5.1.18.jar"),
        &[
            "jdbc:mysql://<hostname>:3306/<database>?defaultFetchSize=-2147483648&largeRowSizeThreshold=1024",
            "jdbc:mysql://<hostname>:<port>/<database>?defaultFetchSize=-2147483648&largeRowSizeThreshold=1024",
        ],
    );
    t.add_single(
        DATABASE_NAME_DB2,
        "images/datastore-types/databases/db2.png",
        "com.ibm.db2.jcc.DB2Driver",
        None,
        &[
            "jdbc:db2://<hostname>:<port>/<database>",
            "jdbc:db2j:net://<hostname>:<port>/<database>",
        ],
    );
    t.add_single(
        DATABASE_NAME_INGRES,
        "images/datastore-types/databases/ingres.png",
        "com.ingres.jdbc.IngresDriver",
        Some("http://repo1.maven.org/maven2/com/ingres/jdbc/iijdbc/9.3-3.8.2/iijdbc-9.3-3.8.2.jar"),
        &["jdbc:ingres://<hostname>:II7/<database>"],
    );
    // jaybird needs the j2ee spec jar as well
    t.add(
        DATABASE_NAME_FIREBIRD,
        "images/datastore-types/databases/firebird.png",
        "org.firebirdsql.jdbc.FBDriver",
        &[
            "http://repo1.maven.org/maven2/org/firebirdsql/jdbc/jaybird/2.1.6/jaybird-2.1.6.jar",
            "http://repo1.maven.org/maven2/geronimo-spec/geronimo-spec-j2ee/1.4-rc4/geronimo-spec-j2ee-1.4-rc4.jar",
        ],
        &["jdbc:firebirdsql:<hostname>:<path/to/database>.fdb"],
    );
    t.add_single(
        DATABASE_NAME_SAP_DB,
        "images/datastore-types/databases/sapdb.png",
        "com.sap.dbtech.jdbc.DriverSapDB",
        None,
        &["jdbc:sapdb://<hostname>/<database>"],
    );
    t.add_single(
        DATABASE_NAME_POSTGRESQL,
        "images/datastore-types/databases/postgresql.png",
        "org.postgresql.Driver",
        Some("http://repo1.maven.org/maven2/postgresql/postgresql/9.3-1102-jdbc4/postgresql-9.3-1102-jdbc4.jar"),
        &["jdbc:postgresql://<hostname>:5432/<database>"],
    );
    t.add_single(
        DATABASE_NAME_MICROSOFT_SQL_SERVER_JTDS,
        "images/datastore-types/databases/microsoft.png",
        "net.sourceforge.jtds.jdbc.Driver",
        Some("http://repo1.maven.org/maven2/net/sourceforge/jtds/jtds/1.3.1/jtds-1.3.1.jar"),
        &[
            "jdbc:jtds:sqlserver://<hostname>/<database>;useUnicode=true;characterEncoding=UTF-8",
            "jdbc:jtds:sqlserver://<hostname>:<port>/<database>;instance=<instance>;useUnicode=true;characterEncoding=UTF-8",
        ],
    );
    t.add_single(
        DATABASE_NAME_SYBASE,
        "images/datastore-types/databases/sybase.png",
        "net.sourceforge.jtds.jdbc.Driver",
        Some("http://repo1.maven.org/maven2/net/sourceforge/jtds/jtds/1.2.4/jtds-1.2.4.jar"),
        &["jdbc:jtds:sybase://<hostname>/<database>"],
    );
    t.add_single(
        DATABASE_NAME_SQLITE,
        "images/datastore-types/databases/sqlite.png",
        "org.sqlite.JDBC",
        Some("http://repo1.maven.org/maven2/org/xerial/sqlite-jdbc/3.7.2/sqlite-jdbc-3.7.2.jar"),
        &["jdbc:sqlite:<path/to/database>.db"],
    );
    t.add_single(
        DATABASE_NAME_APACHE_DERBY_CLIENT,
        "images/datastore-types/databases/derby.png",
        "org.apache.derby.jdbc.ClientDriver",
        Some("http://repo1.maven.org/maven2/org/apache/derby/derbyclient/10.8.2.2/derbyclient-10.8.2.2.jar"),
        &["jdbc:derby://<hostname>:1527/<path/to/database>"],
    );
    t.add_single(
        DATABASE_NAME_APACHE_DERBY_EMBEDDED,
        "images/datastore-types/databases/derby.png",
        "org.apache.derby.jdbc.EmbeddedDriver",
        Some("http://repo1.maven.org/maven2/org/apache/derby/derby/10.8.2.2/derby-10.8.2.2.jar"),
        &["jdbc:derby:<database>"],
    );
    t.add_single(
        DATABASE_NAME_ORACLE,
        "images/datastore-types/databases/oracle.png",
        "oracle.jdbc.OracleDriver",
        None,
        &[
            "jdbc:oracle:thin:@<hostname>:1521:<sid>",
            "jdbc:oracle:thin:@<hostname>:<port>:<sid>",
            "jdbc:oracle:thin:@<hostname>:<port>/<service>:<server>/<instance>",
        ],
    );
    t.add_single(
        DATABASE_NAME_MICROSOFT_SQL_SERVER_OFFICIAL,
        "images/datastore-types/databases/microsoft.png",
        "com.microsoft.sqlserver.jdbc.SQLServerDriver",
        None,
        &[
            "jdbc:sqlserver://<hostname>:3341;databaseName=<database>",
            "jdbc:sqlserver://<hostname>:<port>;databaseName=<database>;integratedSecurity=true",
        ],
    );
    t.add_single(
        DATABASE_NAME_HSQLDB_HYPER_SQL,
        "images/datastore-types/databases/hsqldb.png",
        "org.hsqldb.jdbcDriver",
        Some("http://repo1.maven.org/maven2/hsqldb/hsqldb/1.8.0.10/hsqldb-1.8.0.10.jar"),
        &[
            "jdbc:hsqldb:hsql://<hostname>:9001/<database>",
            "jdbc:hsqldb:file:<path/to/database>",
        ],
    );
    t.add_single(
        DATABASE_NAME_H2,
        "images/datastore-types/databases/h2.png",
        "org.h2.Driver",
        Some("http://repo1.maven.org/maven2/com/h2database/h2/1.3.162/h2-1.3.162.jar"),
        &["jdbc:h2:<path/to/database>"],
    );
    t.add_single(
        DATABASE_NAME_TERADATA,
        "images/datastore-types/databases/teradata.png",
        "com.teradata.jdbc.TeraDriver",
        None,
        &[
            "jdbc:teradata:<hostname>",
            "jdbc:teradata:<hostname>/database=<database>",
        ],
    );
    t.add_single(
        DATABASE_NAME_PERVASIVE,
        "images/datastore-types/databases/pervasive.png",
        "com.pervasive.jdbc.v2.Driver",
        None,
        &["jdbc:pervasive://<hostname>:1583/<datasource>"],
    );
    t.add_single(
        DATABASE_NAME_CUBRID,
        "images/datastore-types/databases/cubrid.png",
        "cubrid.jdbc.driver.CUBRIDDriver",
        Some("http://clojars.org/repo/cubrid/cubrid-jdbc/8.4.1.0564/cubrid-jdbc-8.4.1.0564.jar"),
        &["jdbc:cubrid:<hostname>:30000:<database>:::"],
    );
    t.add_single(
        DATABASE_NAME_LUCIDDB,
        "images/datastore-types/databases/luciddb.png",
        "org.luciddb.jdbc.LucidDbClientDriver",
        Some("http://repository.pentaho.org/artifactory/third-party/luciddb/LucidDbClient-minimal/0.9.4/LucidDbClient-minimal-0.9.4.jar"),
        &["jdbc:luciddb:http://<hostname>"],
    );
    t.add_single(
        DATABASE_NAME_PENTAHO_DATA_INTEGRATION,
        "images/datastore-types/databases/kettle.png",
        "org.pentaho.di.jdbc.KettleDriver",
        None,
        &["jdbc:kettle:file://<filename>"],
    );
    t.add_single(
        DATABASE_NAME_JDBC_ODBC_BRIDGE,
        "images/datastore-types/databases/odbc.png",
        "sun.jdbc.odbc.JdbcOdbcDriver",
        None,
        &["jdbc:odbc:<data-source-name>"],
    );
    t.add_single(
        DATABASE_NAME_HIVE,
        "images/datastore-types/databases/hive.png",
        "org.apache.hive.jdbc.HiveDriver",
        Some("http://repo1.maven.org/maven2/org/apache/hive/hive-jdbc/1.2.1/hive-jdbc-1.2.1.jar"),
        &["jdbc:hive://<hostname>:10000/<database>"],
    );

    t.finish()
}

/// All built-in drivers, sorted by display name
pub fn builtin_drivers() -> &'static [DriverDescriptor] {
    BUILTIN_DRIVERS.as_slice()
}

/// Finds a built-in driver by its display name
pub fn driver_by_name(display_name: Option<&str>) -> Option<&'static DriverDescriptor> {
    let display_name = display_name?;
    builtin_drivers()
        .iter()
        .find(|d| d.display_name() == display_name)
}

/// Finds a built-in driver by its driver class.
///
/// Sybase and the jTDS SQL Server driver share a class; the first in sorted
/// order wins.
pub fn driver_by_class(driver_class: Option<&str>) -> Option<&'static DriverDescriptor> {
    let driver_class = driver_class?;
    builtin_drivers()
        .iter()
        .find(|d| d.driver_class_name() == driver_class)
}

/// Returns the driver's icon, falling back to the generic datastore icon
pub fn icon_image_path(driver: Option<&DriverDescriptor>) -> &str {
    driver
        .and_then(DriverDescriptor::icon_path)
        .unwrap_or(DEFAULT_ICON_PATH)
}
