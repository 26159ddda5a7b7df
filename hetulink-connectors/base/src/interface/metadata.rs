use hetulink_core::data::DataType;
use serde::{Deserialize, Serialize};

use super::Connection;

/// A column as reported to the host application
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub data_type: DataType,
    pub nullable: bool,
    pub comment: Option<String>,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }
}

/// Introspects the schemas, tables and columns of a data source.
///
/// Introspection is best-effort: implementations log failures and return
/// empty results rather than raising, so callers cannot distinguish an
/// empty schema from a failed lookup.
pub trait MetadataInspector {
    /// Lists the schemas in the current catalog
    fn list_schemas<C: Connection>(con: &mut C) -> Vec<String>;

    /// Lists the tables in the supplied schema, or the default schema
    fn list_tables<C: Connection>(con: &mut C, schema: Option<&str>) -> Vec<String>;

    /// Lists the views in the supplied schema, or across all schemas
    fn list_views<C: Connection>(con: &mut C, schema: Option<&str>) -> Vec<String>;

    /// Describes the columns of the supplied table
    fn describe_columns<C: Connection>(
        con: &mut C,
        table: &str,
        schema: Option<&str>,
    ) -> Vec<ColumnDescriptor>;

    /// Checks whether the table exists in the schema
    fn table_exists<C: Connection>(con: &mut C, table: &str, schema: Option<&str>) -> bool {
        Self::list_tables(con, schema).iter().any(|t| t == table)
    }

    /// Checks the connection is still usable
    fn liveness_check<C: Connection>(con: &mut C) -> bool;
}
