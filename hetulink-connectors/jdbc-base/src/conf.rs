use std::{collections::HashMap, path::PathBuf};

use hetulink_core::err::Result;
use serde::{Deserialize, Serialize};

use crate::resolve_jar_path;

/// JDBC connection config
pub trait JdbcConnectionConfig {
    /// Gets the JDBC connection URL
    fn get_jdbc_url(&self) -> String;

    /// Gets the connection props
    fn get_jdbc_props(&self) -> HashMap<String, String>;

    /// Gets the java class name of the JDBC driver
    fn get_driver_class(&self) -> String;

    /// Gets the explicitly configured path of the driver jar
    fn get_jar_path(&self) -> Option<String>;

    /// Gets the environment variable holding the default driver jar location
    fn get_jar_env_var(&self) -> String;
}

/// Everything the bridge needs to load the JDBC driver and open a connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JdbcDriverArgs {
    /// Fully qualified java class name of the driver
    pub driver_class: String,
    /// The JDBC connection URL
    pub jdbc_url: String,
    /// Connection properties passed alongside the URL
    pub properties: HashMap<String, String>,
    /// Jar containing the driver class
    pub jar_path: PathBuf,
}

impl JdbcDriverArgs {
    /// Assembles the driver args from the supplied config, resolving the
    /// driver jar on the local filesystem
    pub fn from_config<TConfig: JdbcConnectionConfig>(conf: &TConfig) -> Result<Self> {
        let jar_path = resolve_jar_path(conf.get_jar_path().as_deref(), &conf.get_jar_env_var())?;

        Ok(Self {
            driver_class: conf.get_driver_class(),
            jdbc_url: conf.get_jdbc_url(),
            properties: conf.get_jdbc_props(),
            jar_path,
        })
    }
}
