//! Service metadata: the `meta` element of an xconnect section.

use crate::resolve::{Resolve, find_in_map};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata describing the service a document belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaProperties {
    /// Logical service name; also names the cluster in the topology graph.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Service version.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,

    /// Operational owner of the service.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub opex: String,

    /// Free-form labels or tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,

    /// Kind of service.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// Any other keys, preserved verbatim.
    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl Resolve for MetaProperties {
    fn find(&self, keys: &[&str]) -> Option<Value> {
        let (first, rest) = keys.split_first()?;
        let found = match *first {
            "name" => Value::from(self.name.clone()),
            "version" => Value::from(self.version.clone()),
            "opex" => Value::from(self.opex.clone()),
            "kind" => Value::from(self.kind.clone()),
            "labels" => Value::Sequence(self.labels.iter().cloned().map(Value::from).collect()),
            _ => return find_in_map(keys, &self.extra),
        };
        // named fields are terminal; they cannot be descended into
        if rest.is_empty() { Some(found) } else { None }
    }
}

// =============================================================================
// TESTS
// =============================================================================
