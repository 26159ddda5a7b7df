use std::{collections::HashMap, path::Path};

use hetulink_core::err::{Context, Result};
use hetulink_logging::debug;

use hetulink_connectors_base::interface::Connection;

use crate::{JdbcDriverArgs, JdbcDriverError};

/// The mechanism hosting the JDBC driver, typically an embedded JVM.
pub trait JdbcBridge {
    type TConnection: Connection;

    /// Loads the driver class from the supplied jar
    fn load_driver(&self, driver_class: &str, jar_path: &Path) -> Result<()>;

    /// Opens a physical connection to the supplied URL
    fn connect(
        &self,
        jdbc_url: &str,
        properties: &HashMap<String, String>,
    ) -> Result<Self::TConnection>;
}

/// Loads the driver and opens a connection through the bridge.
///
/// Failing to load the driver class is reported as [`JdbcDriverError::DriverLoad`].
pub fn open_connection<TBridge: JdbcBridge>(
    bridge: &TBridge,
    args: &JdbcDriverArgs,
) -> Result<TBridge::TConnection> {
    bridge
        .load_driver(&args.driver_class, &args.jar_path)
        .map_err(|source| JdbcDriverError::DriverLoad {
            driver_class: args.driver_class.clone(),
            jar_path: args.jar_path.clone(),
            source,
        })?;

    debug!("Opening JDBC connection to {}", args.jdbc_url);

    bridge
        .connect(&args.jdbc_url, &args.properties)
        .with_context(|| format!("Failed to connect to {}", args.jdbc_url))
}
