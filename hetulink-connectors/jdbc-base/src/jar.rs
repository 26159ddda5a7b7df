use std::{env, path::PathBuf};

use hetulink_core::err::Result;
use hetulink_logging::debug;

use crate::JdbcDriverError;

/// Resolves the path of the JDBC driver jar.
///
/// The explicitly configured path wins, otherwise the jar location is read
/// from the `env_var` environment variable. The resolved path must exist.
pub fn resolve_jar_path(configured: Option<&str>, env_var: &str) -> Result<PathBuf> {
    let path = configured
        .map(|p| p.to_string())
        .filter(|p| !p.trim().is_empty())
        .or_else(|| default_jar_path(env_var))
        .ok_or_else(|| {
            JdbcDriverError::Configuration(format!(
                "JDBC driver JAR path not specified. Please set jar_path in the connection \
                 parameters or the {} environment variable.",
                env_var
            ))
        })?;

    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(JdbcDriverError::JarNotFound(path).into());
    }

    debug!("Using JDBC driver jar {}", path.display());
    Ok(path)
}

/// Gets the jar location provided by the environment, if any
fn default_jar_path(env_var: &str) -> Option<String> {
    env::var(env_var).ok().filter(|p| !p.trim().is_empty())
}
