//! Connect endpoints: the `connect` mapping of an xconnect section.

use crate::model::ConnectionEnd;
use crate::model::gcp::GcpEntry;
use crate::resolve::{Resolve, find_in_map};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named endpoint the service makes outbound connections to.
///
/// In addition to the network fields shared with [`ListenEntry`]
/// (`crate::model::ListenEntry`), a connect entry may describe a virtual,
/// non-network resource via `kind` and `resource`, or a managed Google Cloud
/// service via the nested `gcp` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectEntry {
    /// Application protocol, e.g. `grpc` or `jdbc`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub protocol: String,

    /// Tri-state TLS flag: unset, enabled, or disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,

    /// Hostname or address of the remote endpoint.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,

    /// Port number. Absent means "not set", never zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Connection string; overrides host and port when present.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// Whether this endpoint is turned off.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,

    /// Kind of the remote resource, for targets without a network identity.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// Identifies the virtual listen side of a non-network resource.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,

    /// Managed Google Cloud service this endpoint connects to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcp: Option<GcpEntry>,

    /// Any other keys, preserved verbatim.
    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl ConnectEntry {
    /// Network identity, or `"{kind}:{resource}"` for virtual resources.
    #[must_use]
    pub fn resource_id(&self) -> String {
        let id = self.network_id();
        if !id.is_empty() {
            return id;
        }
        format!("{}:{}", self.kind, self.resource)
    }
}

impl ConnectionEnd for ConnectEntry {
    /// URL when set, else `"{host}:{port}"` with the port defaulting to 0,
    /// else empty — url empty, host empty, we don't know.
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

impl Resolve for ConnectEntry {
    fn find(&self, keys: &[&str]) -> Option<Value> {
        let (first, rest) = keys.split_first()?;
        let found = match *first {
            "protocol" => Value::from(self.protocol.clone()),
            "secure" => Value::Bool(self.secure?),
            "host" => Value::from(self.host.clone()),
            "port" => Value::Int(i64::from(self.port?)),
            "url" => Value::from(self.url.clone()),
            "disabled" => Value::Bool(self.disabled),
            "kind" => Value::from(self.kind.clone()),
            "resource" => Value::from(self.resource.clone()),
            _ => return find_in_map(keys, &self.extra),
        };
        if rest.is_empty() { Some(found) } else { None }
    }
}

// =============================================================================
// TESTS
// =============================================================================
