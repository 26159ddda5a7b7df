use std::{
    fmt::{self, Display},
    path::PathBuf,
};

use hetulink_core::err::Error;

/// Fatal errors raised while preparing or loading a JDBC driver.
///
/// These are returned wrapped in the core `Error`, use `downcast_ref`
/// to tell them apart.
#[derive(Debug)]
pub enum JdbcDriverError {
    /// The connection configuration is incomplete or malformed
    Configuration(String),
    /// The resolved driver jar does not exist
    JarNotFound(PathBuf),
    /// The bridge could not load the driver class from the jar
    DriverLoad {
        driver_class: String,
        jar_path: PathBuf,
        source: Error,
    },
}

impl Display for JdbcDriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JdbcDriverError::Configuration(msg) => write!(f, "{}", msg),
            JdbcDriverError::JarNotFound(path) => {
                write!(f, "JAR file not found: {}", path.display())
            }
            JdbcDriverError::DriverLoad {
                driver_class,
                jar_path,
                source,
            } => write!(
                f,
                "Failed to load JDBC driver class '{}' from {}: {}",
                driver_class,
                jar_path.display(),
                source
            ),
        }
    }
}

impl std::error::Error for JdbcDriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JdbcDriverError::DriverLoad { source, .. } => Some(&**source),
            _ => None,
        }
    }
}

impl JdbcDriverError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, JdbcDriverError::Configuration(_))
    }

    pub fn is_jar_not_found(&self) -> bool {
        matches!(self, JdbcDriverError::JarNotFound(_))
    }

    pub fn is_driver_load(&self) -> bool {
        matches!(self, JdbcDriverError::DriverLoad { .. })
    }
}
