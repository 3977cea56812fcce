//! Google Cloud Platform service entries nested inside connect endpoints.

use serde::{Deserialize, Serialize};

/// Managed Google Cloud services a connect endpoint may address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GcpEntry {
    /// Pub/Sub topic or subscription.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubsub: Option<GcpPubSubEntry>,

    /// Memorystore instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memorystore: Option<GcpMemoryStoreEntry>,

    /// Datastore namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datastore: Option<GcpDataStoreEntry>,
}

/// A Pub/Sub entry: either side of a topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GcpPubSubEntry {
    /// Subscription the service pulls from.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subscription: String,

    /// Topic the service publishes to.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub topic: String,
}

/// A Memorystore (keyed cache) entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GcpMemoryStoreEntry {
    /// Cache instance identifier.
    #[serde(rename = "instance-id", default, skip_serializing_if = "String::is_empty")]
    pub instance_id: String,
}

/// A Datastore (namespaced store) entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GcpDataStoreEntry {
    /// Namespace of the store.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
}

// =============================================================================
// TESTS
// =============================================================================
