//! Listen endpoints: the `listen` mapping of an xconnect section.

use crate::model::ConnectionEnd;
use crate::resolve::{Resolve, find_in_map};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named endpoint the service accepts traffic on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListenEntry {
    /// Application protocol, e.g. `grpc` or `http`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub protocol: String,

    /// Hostname or address the endpoint binds to.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,

    /// Port number. Absent means "not set", never zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Connection string; overrides host and port when present.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// Tri-state TLS flag: unset, enabled, or disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,

    /// Whether this endpoint is turned off.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,

    /// Any other keys, preserved verbatim.
    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl ConnectionEnd for ListenEntry {
    /// URL when set, else `"{host}:{port}"` with the port defaulting to 0,
    /// else empty when no host is known either.
    fn network_id(&self) -> String {
        if !self.url.is_empty() {
            return self.url.clone();
        }
        if !self.host.is_empty() {
            return format!("{}:{}", self.host, self.port.unwrap_or(0));
        }
        String::new()
    }
}

impl Resolve for ListenEntry {
    fn find(&self, keys: &[&str]) -> Option<Value> {
        let (first, rest) = keys.split_first()?;
        let found = match *first {
            "protocol" => Value::from(self.protocol.clone()),
            "host" => Value::from(self.host.clone()),
            "port" => Value::Int(i64::from(self.port?)),
            "url" => Value::from(self.url.clone()),
            "secure" => Value::Bool(self.secure?),
            "disabled" => Value::Bool(self.disabled),
            _ => return find_in_map(keys, &self.extra),
        };
        if rest.is_empty() { Some(found) } else { None }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn url_overrides_host_and_port() {
        let entry = ListenEntry {
            url: "jdbc:postgresql://db:5432/app".to_string(),
            host: "ignored".to_string(),
            port: Some(9999),
            ..ListenEntry::default()
        };
        assert_eq!(entry.network_id(), "jdbc:postgresql://db:5432/app");
    }

    #[test]
    fn port_defaults_to_zero() {
        let entry = ListenEntry {
            host: "svc.internal".to_string(),
            ..ListenEntry::default()
        };
        assert_eq!(entry.network_id(), "svc.internal:0");
    }

    #[test]
    fn no_host_and_no_url_yields_no_identity() {
        let entry = ListenEntry {
            port: Some(8080),
            ..ListenEntry::default()
        };
        assert_eq!(entry.network_id(), "");
    }

    #[test]
    fn unset_optionals_are_not_found() {
        let entry = ListenEntry::default();
        assert!(entry.find_value("port").is_err());
        assert!(entry.find_value("secure").is_err());
        // disabled has a real default, not an absence
        assert!(!entry.find_bool("disabled").expect("disabled"));
    }

    #[test]
    fn extension_fields_resolve() {
        let entry: ListenEntry =
            serde_yaml::from_str("protocol: grpc\nextra1: extra1\nnested1:\n  sub1: sub1\n")
                .expect("decode");
        assert_eq!(entry.find_string("extra1").expect("extra1"), "extra1");
        assert_eq!(entry.find_string("nested1/sub1").expect("nested"), "sub1");
    }

    proptest! {
        #[test]
        fn network_id_formats_host_and_port(host in "[a-z][a-z0-9.-]{0,20}", port in proptest::option::of(any::<u16>())) {
            let entry = ListenEntry {
                host: host.clone(),
                port,
                ..ListenEntry::default()
            };
            let expected = format!("{}:{}", host, port.unwrap_or(0));
            prop_assert_eq!(entry.network_id(), expected);
        }
    }
}
