use std::fmt::{self, Display};

use hetulink_core::config::{scalar_to_string, Value};

const REQUIRED_PARAMETERS: [&str; 3] = ["host", "port", "username"];

/// A problem found with user supplied connection parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// A required parameter is absent or empty
    Missing(String),
    /// The port is not a number, holds the offending value
    InvalidPort(String),
}

impl Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::Missing(param) => write!(f, "Missing required parameter: {}", param),
            ParameterError::InvalidPort(_) => write!(f, "Port must be a valid number"),
        }
    }
}

impl std::error::Error for ParameterError {}

/// Validates the connection parameters entered by a user before any
/// connection is attempted. Returns every problem found.
pub fn validate_parameters(params: &Value) -> Vec<ParameterError> {
    let mut errors = vec![];

    for param in REQUIRED_PARAMETERS {
        if params.get(param).map(is_empty_value).unwrap_or(true) {
            errors.push(ParameterError::Missing(param.to_string()));
        }
    }

    if let Some(port) = params.get("port").filter(|p| !is_empty_value(p)) {
        let valid = scalar_to_string(port)
            .map(|p| p.chars().all(|c| c.is_ascii_digit()))
            .unwrap_or(false);

        if !valid {
            errors.push(ParameterError::InvalidPort(
                scalar_to_string(port).unwrap_or_else(|| format!("{:?}", port)),
            ));
        }
    }

    errors
}

fn is_empty_value(val: &Value) -> bool {
    match val {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|n| n == 0.0).unwrap_or(false),
        Value::String(s) => s.is_empty(),
        Value::Sequence(s) => s.is_empty(),
        Value::Mapping(m) => m.is_empty(),
        Value::Tagged(t) => is_empty_value(&t.value),
    }
}
