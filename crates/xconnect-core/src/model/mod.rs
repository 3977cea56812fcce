//! # Document Model
//!
//! The typed record shapes for xconnect descriptors:
//!
//! - [`Document`] — the root of one loaded file
//! - [`XConnect`] — the `xconnect` section: meta, listen and connect mappings
//! - [`MetaProperties`], [`ListenEntry`], [`ConnectEntry`] — the entries
//!
//! Every shape decodes losslessly: keys matching named fields populate those
//! fields, every other key is preserved verbatim in the entity's extension
//! map. Re-encoding reproduces all non-default named fields plus all
//! extension entries; key order may differ.

mod connect;
mod gcp;
mod listen;
mod meta;

pub use connect::ConnectEntry;
pub use gcp::{GcpDataStoreEntry, GcpEntry, GcpMemoryStoreEntry, GcpPubSubEntry};
pub use listen::ListenEntry;
pub use meta::MetaProperties;

use crate::error::XConnectError;
use crate::resolve::{Resolve, find_in_map};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Either end of a connection, identified by its canonical network string.
pub trait ConnectionEnd {
    /// Canonical identity: URL, or `"{host}:{port}"`, or empty when the
    /// entry has no network identity at all.
    fn network_id(&self) -> String;
}

// =============================================================================
// XCONNECT SECTION
// =============================================================================

/// The `xconnect` data section of a document.
///
/// Listen and Connect are independent namespaces; endpoint names are unique
/// within each mapping (enforced by the mapping itself).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XConnect {
    /// Service metadata.
    #[serde(default)]
    pub meta: MetaProperties,

    /// Endpoints this service accepts traffic on, by logical name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub listen: BTreeMap<String, ListenEntry>,

    /// Endpoints this service connects out to, by logical name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub connect: BTreeMap<String, ConnectEntry>,

    /// Any other keys, preserved verbatim.
    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl XConnect {
    /// The Pub/Sub entry of the named connect endpoint.
    pub fn pubsub(&self, id: &str) -> Result<&GcpPubSubEntry, XConnectError> {
        self.gcp(id)?
            .pubsub
            .as_ref()
            .ok_or_else(|| XConnectError::NotFound(format!("connect/{id}/gcp/pubsub")))
    }

    /// The Memorystore entry of the named connect endpoint.
    pub fn memory_store(&self, id: &str) -> Result<&GcpMemoryStoreEntry, XConnectError> {
        self.gcp(id)?
            .memorystore
            .as_ref()
            .ok_or_else(|| XConnectError::NotFound(format!("connect/{id}/gcp/memorystore")))
    }

    /// The Datastore entry of the named connect endpoint.
    pub fn datastore(&self, id: &str) -> Result<&GcpDataStoreEntry, XConnectError> {
        self.gcp(id)?
            .datastore
            .as_ref()
            .ok_or_else(|| XConnectError::NotFound(format!("connect/{id}/gcp/datastore")))
    }

    fn gcp(&self, id: &str) -> Result<&GcpEntry, XConnectError> {
        let entry = self
            .connect
            .get(id)
            .ok_or_else(|| XConnectError::NotFound(format!("connect/{id}")))?;
        entry
            .gcp
            .as_ref()
            .ok_or_else(|| XConnectError::NotFound(format!("connect/{id}/gcp")))
    }
}

impl Resolve for XConnect {
    fn find(&self, keys: &[&str]) -> Option<Value> {
        let (first, rest) = keys.split_first()?;
        match *first {
            "meta" => self.meta.find(rest),
            // a collection addressed without selecting a member is invalid,
            // and a missing member never falls through to extension lookup
            "listen" => {
                let (name, remainder) = rest.split_first()?;
                self.listen.get(*name)?.find(remainder)
            }
            "connect" => {
                let (name, remainder) = rest.split_first()?;
                self.connect.get(*name)?.find(remainder)
            }
            _ => find_in_map(keys, &self.extra),
        }
    }
}

// =============================================================================
// DOCUMENT ROOT
// =============================================================================

/// The root element of one loaded YAML or JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The xconnect data section.
    pub xconnect: XConnect,

    /// Any other top-level keys, preserved verbatim.
    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl Resolve for Document {
    fn find(&self, keys: &[&str]) -> Option<Value> {
        let (first, rest) = keys.split_first()?;
        match *first {
            "xconnect" => self.xconnect.find(rest),
            _ => find_in_map(keys, &self.extra),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
