use hetulink_core::data::DataType;

// Checked in order against the start of the type name, DATETIME must precede DATE
const TYPE_PREFIXES: &[(&str, DataType)] = &[
    ("TIMESTAMP", DataType::Timestamp),
    ("DATETIME", DataType::Timestamp),
    ("DECIMAL", DataType::Decimal),
    ("NUMERIC", DataType::Decimal),
    ("DOUBLE", DataType::Float),
    ("FLOAT", DataType::Float),
    ("BIGINT", DataType::BigInt),
    ("INTEGER", DataType::Integer),
    ("BOOLEAN", DataType::Boolean),
    ("VARCHAR", DataType::Varchar),
    ("DATE", DataType::Date),
];

/// Maps a type name reported by HetuEngine to a host column type.
///
/// Matching is case-insensitive and ignores any type parameters, eg
/// `decimal(10,2)` or `timestamp(3) with time zone`. Anything unrecognised,
/// including an empty string, maps to `Varchar`.
pub fn resolve_type(raw: &str) -> DataType {
    let upper = raw.trim().to_ascii_uppercase();
    let base = upper
        .split(|c: char| c == '(' || c.is_whitespace())
        .next()
        .unwrap_or("");

    match base {
        "VARCHAR" | "CHAR" | "STRING" => DataType::Varchar,
        "TINYINT" | "SMALLINT" | "INT" | "INTEGER" => DataType::Integer,
        "BIGINT" => DataType::BigInt,
        "BOOLEAN" | "BOOL" => DataType::Boolean,
        "REAL" | "FLOAT" | "DOUBLE" => DataType::Float,
        "DECIMAL" | "NUMERIC" | "DEC" => DataType::Decimal,
        "DATE" => DataType::Date,
        "TIMESTAMP" => DataType::Timestamp,
        _ => TYPE_PREFIXES
            .iter()
            .find(|(prefix, _)| base.starts_with(prefix))
            .map(|(_, r#type)| *r#type)
            .unwrap_or(DataType::Varchar),
    }
}
