use std::collections::HashMap;

use itertools::Itertools;

use crate::HetuEngineConnectArgs;

/// Builds the Trino JDBC url for a HetuEngine cluster.
///
/// `host` may hold several comma separated hosts, each of which is given
/// the same `port`. TLS is switched on in the url while certificate
/// verification is controlled through the connection properties,
/// see [`build_jdbc_props`].
pub fn build_jdbc_url(
    host: &str,
    port: u16,
    catalog: &str,
    schema: &str,
    connect_args: &HetuEngineConnectArgs,
) -> String {
    let hosts = host
        .split(',')
        .map(|h| h.trim())
        .filter(|h| !h.is_empty())
        .map(|h| format!("{}:{}", h, port))
        .join(",");

    let mut url = format!(
        "jdbc:trino://{}/{}/{}?serviceDiscoveryMode={}&tenant={}",
        hosts, catalog, schema, connect_args.service_discovery_mode, connect_args.tenant
    );

    if connect_args.ssl_enabled() {
        url.push_str("&SSL=true");
    }

    url
}

/// Builds the connection properties passed to the driver alongside the url
pub fn build_jdbc_props(
    username: &str,
    password: &str,
    connect_args: &HetuEngineConnectArgs,
) -> HashMap<String, String> {
    let mut props = HashMap::new();
    props.insert("user".to_string(), username.to_string());

    if !password.is_empty() {
        props.insert("password".to_string(), password.to_string());
    }

    if connect_args.ssl_verification_disabled() {
        props.insert("SSLVerification".to_string(), "false".to_string());
    }

    props
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args() -> HetuEngineConnectArgs {
        HetuEngineConnectArgs::default()
    }

    #[test]
    fn test_build_jdbc_url_basic() {
        let url = build_jdbc_url("localhost", 29860, "hive", "default", &args());

        assert_eq!(
            url,
            "jdbc:trino://localhost:29860/hive/default?serviceDiscoveryMode=hsbroker&tenant=default"
        );
    }

    #[test]
    fn test_build_jdbc_url_with_multiple_hosts() {
        let url = build_jdbc_url("host1,host2,host3", 29860, "hive", "default", &args());

        assert_eq!(
            url,
            "jdbc:trino://host1:29860,host2:29860,host3:29860/hive/default?serviceDiscoveryMode=hsbroker&tenant=default"
        );
    }

    #[test]
    fn test_build_jdbc_url_skips_blank_hosts() {
        let url = build_jdbc_url("host1, ,host2 ", 29860, "hive", "default", &args());

        assert!(url.starts_with("jdbc:trino://host1:29860,host2:29860/"));
    }

    #[test]
    fn test_build_jdbc_url_applies_port_uniformly() {
        let url = build_jdbc_url("host1:1234", 29860, "hive", "default", &args());

        assert!(url.starts_with("jdbc:trino://host1:1234:29860/"));
    }

    #[test]
    fn test_build_jdbc_url_with_custom_service_discovery() {
        let args = HetuEngineConnectArgs {
            service_discovery_mode: "custom".into(),
            ..args()
        };

        let url = build_jdbc_url("localhost", 29860, "hive", "default", &args);

        assert!(url.contains("serviceDiscoveryMode=custom"));
        assert!(!url.contains("hsbroker"));
    }

    #[test]
    fn test_build_jdbc_url_with_custom_tenant() {
        let args = HetuEngineConnectArgs {
            tenant: "custom_tenant".into(),
            ..args()
        };

        let url = build_jdbc_url("localhost", 29860, "hive", "default", &args);

        assert!(url.ends_with("&tenant=custom_tenant"));
    }

    #[test]
    fn test_build_jdbc_url_with_ssl() {
        let args = HetuEngineConnectArgs {
            ssl: Some("true".into()),
            ..args()
        };

        let url = build_jdbc_url("localhost", 29860, "hive", "default", &args);

        assert!(url.ends_with("&SSL=true"));
    }

    #[test]
    fn test_build_jdbc_url_with_ssl_no_verification() {
        let args = HetuEngineConnectArgs {
            ssl: Some("true".into()),
            ssl_verification: Some("false".into()),
            ..args()
        };

        let url = build_jdbc_url("localhost", 29860, "hive", "default", &args);
        let props = build_jdbc_props("u", "p", &args);

        assert!(url.contains("SSL=true"));
        assert!(!url.contains("SSLVerification"));
        assert_eq!(props["SSLVerification"], "false");
    }

    #[test]
    fn test_build_jdbc_props() {
        let props = build_jdbc_props("testuser", "testpass", &args());

        assert_eq!(
            props,
            [
                ("user".to_string(), "testuser".to_string()),
                ("password".to_string(), "testpass".to_string()),
            ]
            .into_iter()
            .collect::<HashMap<_, _>>()
        );
    }

    #[test]
    fn test_build_jdbc_props_without_password() {
        let props = build_jdbc_props("testuser", "", &args());

        assert_eq!(props.len(), 1);
        assert_eq!(props["user"], "testuser");
    }
}
