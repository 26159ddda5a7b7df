use chrono::NaiveDateTime;

use crate::{DEFAULT_CATALOG, DEFAULT_SCHEMA};

/// Renders a datetime as a HetuEngine literal of the target type.
/// Returns `None` for types without a datetime literal.
pub fn convert_dttm(target_type: &str, dttm: &NaiveDateTime) -> Option<String> {
    match target_type.trim().to_ascii_uppercase().as_str() {
        "TIMESTAMP" | "DATETIME" => Some(format!(
            "TIMESTAMP '{}'",
            dttm.format("%Y-%m-%d %H:%M:%S")
        )),
        "DATE" => Some(format!("DATE '{}'", dttm.format("%Y-%m-%d"))),
        "TIME" => Some(format!("TIME '{}'", dttm.format("%H:%M:%S"))),
        _ => None,
    }
}

/// Expression converting an epoch in seconds held in `{col}` to a timestamp
pub fn epoch_to_dttm() -> &'static str {
    "from_unixtime({col})"
}

pub fn default_catalog() -> &'static str {
    DEFAULT_CATALOG
}

pub fn default_schema() -> &'static str {
    DEFAULT_SCHEMA
}

/// Granularities a time column can be truncated to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeGrain {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
    WeekStartingSunday,
    WeekEndingSaturday,
}

impl TimeGrain {
    pub const ALL: [TimeGrain; 10] = [
        TimeGrain::Second,
        TimeGrain::Minute,
        TimeGrain::Hour,
        TimeGrain::Day,
        TimeGrain::Week,
        TimeGrain::Month,
        TimeGrain::Quarter,
        TimeGrain::Year,
        TimeGrain::WeekStartingSunday,
        TimeGrain::WeekEndingSaturday,
    ];

    /// The ISO 8601 duration used by the host to identify the grain
    pub fn iso_duration(&self) -> &'static str {
        match self {
            TimeGrain::Second => "PT1S",
            TimeGrain::Minute => "PT1M",
            TimeGrain::Hour => "PT1H",
            TimeGrain::Day => "P1D",
            TimeGrain::Week => "P1W",
            TimeGrain::Month => "P1M",
            TimeGrain::Quarter => "P3M",
            TimeGrain::Year => "P1Y",
            TimeGrain::WeekStartingSunday => "1969-12-28T00:00:00Z/P1W",
            TimeGrain::WeekEndingSaturday => "P1W/1970-01-03T00:00:00Z",
        }
    }

    pub fn from_iso_duration(duration: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|g| g.iso_duration() == duration)
            .copied()
    }

    /// The truncation expression template, `{col}` stands for the column
    pub fn expression(&self) -> &'static str {
        match self {
            TimeGrain::Second => "date_trunc('second', CAST({col} AS TIMESTAMP))",
            TimeGrain::Minute => "date_trunc('minute', CAST({col} AS TIMESTAMP))",
            TimeGrain::Hour => "date_trunc('hour', CAST({col} AS TIMESTAMP))",
            TimeGrain::Day => "date_trunc('day', CAST({col} AS TIMESTAMP))",
            TimeGrain::Week => "date_trunc('week', CAST({col} AS TIMESTAMP))",
            TimeGrain::Month => "date_trunc('month', CAST({col} AS TIMESTAMP))",
            TimeGrain::Quarter => "date_trunc('quarter', CAST({col} AS TIMESTAMP))",
            TimeGrain::Year => "date_trunc('year', CAST({col} AS TIMESTAMP))",
            TimeGrain::WeekStartingSunday => {
                "date_trunc('week', CAST({col} AS TIMESTAMP) + interval '1' day) - interval '1' day"
            }
            TimeGrain::WeekEndingSaturday => {
                "date_trunc('week', CAST({col} AS TIMESTAMP) + interval '1' day) + interval '5' day"
            }
        }
    }
}

/// Builds the expression truncating `col` to the grain, or `col` itself
/// when no grain applies
pub fn time_grain_expression(grain: Option<TimeGrain>, col: &str) -> String {
    match grain {
        Some(grain) => grain.expression().replace("{col}", col),
        None => col.to_string(),
    }
}
