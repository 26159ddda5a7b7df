use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// The column types exposed to the host application.
///
/// Engine-specific type names are folded into this set, anything which
/// does not fit is surfaced as `Varchar`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum DataType {
    Varchar,
    Integer,
    BigInt,
    Boolean,
    /// Covers REAL, FLOAT and DOUBLE
    Float,
    Decimal,
    Date,
    Timestamp,
}

impl Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Varchar => "VARCHAR",
            DataType::Integer => "INTEGER",
            DataType::BigInt => "BIGINT",
            DataType::Boolean => "BOOLEAN",
            DataType::Float => "FLOAT",
            DataType::Decimal => "DECIMAL",
            DataType::Date => "DATE",
            DataType::Timestamp => "TIMESTAMP",
        };

        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_display() {
        assert_eq!(DataType::BigInt.to_string(), "BIGINT");
        assert_eq!(DataType::Float.to_string(), "FLOAT");
        assert_eq!(DataType::Varchar.to_string(), "VARCHAR");
    }
}
