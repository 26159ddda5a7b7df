use hetulink_core::{
    data::ResultRow,
    err::{Error, Result},
};
use hetulink_logging::{debug, error, warn, MaxLogLength};

use hetulink_connectors_base::interface::{
    ColumnDescriptor, Connection, Cursor, MetadataInspector, ScopedCursor,
};

use crate::resolve_type;

const SHOW_SCHEMAS: &str = "SHOW SCHEMAS";
const LIVENESS_QUERY: &str = "SELECT 1";
const MAX_LOGGED_ERROR_LENGTH: usize = 1000;

/// Introspects HetuEngine catalogs using its SHOW / DESCRIBE statements
pub struct HetuEngineJdbcMetadata;

impl MetadataInspector for HetuEngineJdbcMetadata {
    fn list_schemas<C: Connection>(con: &mut C) -> Vec<String> {
        query_names(con, SHOW_SCHEMAS).unwrap_or_else(|err| {
            log_failure("schema names", &err);
            vec![]
        })
    }

    fn list_tables<C: Connection>(con: &mut C, schema: Option<&str>) -> Vec<String> {
        query_names(con, &show_tables_sql(schema)).unwrap_or_else(|err| {
            log_failure("table names", &err);
            vec![]
        })
    }

    fn list_views<C: Connection>(con: &mut C, schema: Option<&str>) -> Vec<String> {
        query_names(con, &list_views_sql(schema)).unwrap_or_else(|err| {
            log_failure("view names", &err);
            vec![]
        })
    }

    fn describe_columns<C: Connection>(
        con: &mut C,
        table: &str,
        schema: Option<&str>,
    ) -> Vec<ColumnDescriptor> {
        let rows = match con.execute(&describe_sql(table, schema)) {
            Ok(rows) => rows,
            Err(err) => {
                log_failure("columns", &err);
                return vec![];
            }
        };

        rows.iter().filter_map(parse_column).collect()
    }

    fn liveness_check<C: Connection>(con: &mut C) -> bool {
        let res = ScopedCursor::open(con).and_then(|mut cursor| cursor.execute(LIVENESS_QUERY));

        match res {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    "Liveness check failed: {}",
                    MaxLogLength::new(Some(MAX_LOGGED_ERROR_LENGTH), &err)
                );
                false
            }
        }
    }
}

pub(crate) fn show_tables_sql(schema: Option<&str>) -> String {
    match schema {
        Some(schema) => format!("SHOW TABLES FROM {}", schema),
        None => "SHOW TABLES".into(),
    }
}

pub(crate) fn list_views_sql(schema: Option<&str>) -> String {
    let mut sql =
        "SELECT table_name FROM information_schema.tables WHERE table_type = 'VIEW'".to_string();

    if let Some(schema) = schema {
        sql.push_str(&format!(
            " AND table_schema = '{}'",
            schema.replace('\'', "''")
        ));
    }

    sql
}

pub(crate) fn describe_sql(table: &str, schema: Option<&str>) -> String {
    match schema {
        Some(schema) => format!("DESCRIBE {}.{}", schema, table),
        None => format!("DESCRIBE {}", table),
    }
}

/// Runs the statement and collects the first column of each row
fn query_names<C: Connection>(con: &mut C, sql: &str) -> Result<Vec<String>> {
    debug!("Executing metadata query: {}", sql);
    let rows = con.execute(sql)?;

    Ok(rows
        .iter()
        .filter_map(|row| {
            let name = row.first().and_then(|c| c.as_utf8_string()).cloned();
            if name.is_none() {
                warn!("Skipping row without a name in first column: {:?}", row);
            }
            name
        })
        .collect())
}

/// Parses a row returned by DESCRIBE: Column, Type, Extra, Comment
fn parse_column(row: &ResultRow) -> Option<ColumnDescriptor> {
    let name = match row.first().and_then(|c| c.as_utf8_string()) {
        Some(name) => name,
        None => {
            warn!("Ignoring column without a name: {:?}", row);
            return None;
        }
    };

    let data_type = resolve_type(
        row.get(1)
            .and_then(|c| c.as_utf8_string())
            .map(|s| s.as_str())
            .unwrap_or(""),
    );
    let comment = row
        .get(3)
        .and_then(|c| c.as_utf8_string())
        .filter(|c| !c.is_empty())
        .cloned();

    Some(ColumnDescriptor::new(name.clone(), data_type).with_comment(comment))
}

fn log_failure(what: &str, err: &Error) {
    error!(
        "Error getting {}: {}",
        what,
        MaxLogLength::new(Some(MAX_LOGGED_ERROR_LENGTH), err)
    );
}
