use hetulink_core::err::Error;
use hetulink_logging::debug;

use crate::ENGINE_NAME;

/// A known failure signature and the message shown for it
struct ErrorRule {
    name: &'static str,
    message: fn(&str) -> Option<String>,
}

// Evaluated in order, the first matching rule wins.
// The SQLException rule is broad so the driver and JVM rules come first.
const ERROR_RULES: &[ErrorRule] = &[
    ErrorRule {
        name: "driver-not-found",
        message: driver_not_found,
    },
    ErrorRule {
        name: "jvm-not-found",
        message: jvm_not_found,
    },
    ErrorRule {
        name: "sql-exception",
        message: sql_exception,
    },
    ErrorRule {
        name: "connection-refused",
        message: connection_refused,
    },
    ErrorRule {
        name: "service-discovery",
        message: service_discovery,
    },
];

/// Turns raw driver or JVM error text into a message fit for users
pub fn extract_error_message(err: &str) -> String {
    ERROR_RULES
        .iter()
        .find_map(|rule| {
            let msg = (rule.message)(err)?;
            debug!("Classified connection error as {}", rule.name);
            Some(msg)
        })
        .unwrap_or_else(|| generic_error_message(err))
}

/// As [`extract_error_message`], matching against the whole chain of the error
pub fn extract_error_message_from(err: &Error) -> String {
    extract_error_message(&format!("{:#}", err))
}

fn generic_error_message(err: &str) -> String {
    format!("{} error: {}", ENGINE_NAME, err)
}

fn driver_not_found(err: &str) -> Option<String> {
    err.contains("java.lang.ClassNotFoundException").then(|| {
        "JDBC driver not found. Please ensure the HetuEngine JDBC driver \
         JAR file is properly configured in the jar_path parameter."
            .to_string()
    })
}

fn jvm_not_found(err: &str) -> Option<String> {
    err.contains("JVMNotFoundException").then(|| {
        "Java Virtual Machine not found. Please ensure JAVA_HOME is set \
         and Java is properly installed."
            .to_string()
    })
}

/// Surfaces the message embedded after the exception name, up to the end of its line
fn sql_exception(err: &str) -> Option<String> {
    const MARKER: &str = "java.sql.SQLException:";

    let start = err.find(MARKER)? + MARKER.len();
    let detail = err[start..].trim_start();
    let detail = detail
        .split('\n')
        .next()
        .unwrap_or("")
        .trim_end_matches('\r');

    if detail.is_empty() {
        return None;
    }

    Some(format!("Database error: {}", detail))
}

fn connection_refused(err: &str) -> Option<String> {
    err.contains("Connection refused").then(|| {
        "Unable to connect to HetuEngine server. Please check the host, \
         port, and network connectivity."
            .to_string()
    })
}

fn service_discovery(err: &str) -> Option<String> {
    (err.contains("serviceDiscoveryMode") || err.contains("404")).then(|| {
        "Connection failed. Please ensure serviceDiscoveryMode=hsbroker \
         and tenant parameters are properly configured."
            .to_string()
    })
}
