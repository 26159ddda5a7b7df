use std::{cell::RefCell, collections::HashMap, fs::File, path::Path};

use hetulink_connectors_base::test::MockConnection;
use hetulink_connectors_jdbc_base::JdbcBridge;
use hetulink_connectors_jdbc_hetuengine::HetuEngineConnectionParameters;
use hetulink_core::err::{bail, Result};
use tempfile::TempDir;

/// A bridge standing in for the JVM, records each call it receives
#[derive(Default)]
pub struct RecordingBridge {
    pub load_error: Option<String>,
    pub connect_error: Option<String>,
    pub connection: RefCell<Option<MockConnection>>,
    pub loaded: RefCell<Vec<(String, String)>>,
    pub connected: RefCell<Vec<(String, HashMap<String, String>)>>,
}

impl RecordingBridge {
    #[allow(dead_code)]
    pub fn with_connection(con: MockConnection) -> Self {
        Self {
            connection: RefCell::new(Some(con)),
            ..Default::default()
        }
    }
}

impl JdbcBridge for RecordingBridge {
    type TConnection = MockConnection;

    fn load_driver(&self, driver_class: &str, jar_path: &Path) -> Result<()> {
        self.loaded
            .borrow_mut()
            .push((driver_class.to_string(), jar_path.display().to_string()));

        if let Some(err) = self.load_error.as_ref() {
            bail!("{}", err)
        }

        Ok(())
    }

    fn connect(
        &self,
        jdbc_url: &str,
        properties: &HashMap<String, String>,
    ) -> Result<Self::TConnection> {
        self.connected
            .borrow_mut()
            .push((jdbc_url.to_string(), properties.clone()));

        if let Some(err) = self.connect_error.as_ref() {
            bail!("{}", err)
        }

        Ok(self.connection.borrow_mut().take().unwrap_or_default())
    }
}

/// Creates an empty driver jar in a fresh temp dir
pub fn driver_jar() -> (TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hetu-jdbc.jar");
    File::create(&path).unwrap();

    (dir, path.to_str().unwrap().to_string())
}

pub fn params() -> HetuEngineConnectionParameters {
    hetulink_logging::init_for_tests();

    HetuEngineConnectionParameters::new(
        vec!["hetu1.example.com".into(), "hetu2.example.com".into()],
        29860,
        "analyst",
        "s3cret",
    )
    .with_catalog("hive")
    .with_schema("sales")
}
