use enum_as_inner::EnumAsInner;
use serde::{Deserialize, Serialize};

/// A single cell returned by the JDBC bridge
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, EnumAsInner)]
pub enum DataValue {
    Null,
    Utf8String(String),
    Boolean(bool),
    Int64(i64),
    Float64(f64),
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::Utf8String(s.to_string())
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::Utf8String(s)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Boolean(b)
    }
}

impl From<i64> for DataValue {
    fn from(i: i64) -> Self {
        DataValue::Int64(i)
    }
}

/// A row of values, in column order
pub type ResultRow = Vec<DataValue>;
