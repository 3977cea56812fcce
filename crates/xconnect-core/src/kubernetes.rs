//! # Kubernetes ConfigMap Wrapper
//!
//! An xconnect document may arrive embedded in a Kubernetes ConfigMap:
//!
//! ```yaml
//! apiVersion: v1
//! kind: ConfigMap
//! metadata:
//!   name: accountservice
//!   namespace: prod
//! data:
//!   application.yml: |
//!     # comment lines are allowed
//!     xconnect:
//!       meta:
//!         name: accountservice
//! ```
//!
//! The value at `data["application.yml"]` is a string holding a second YAML
//! document; that embedded document must carry a top-level `xconnect` key.

use crate::error::XConnectError;
use crate::model::Document;
use crate::value::Value;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

/// The `data` key holding the embedded application configuration.
pub const APPLICATION_YML: &str = "application.yml";

/// A Kubernetes ConfigMap carrying an embedded xconnect document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMap {
    /// API version, usually `v1`.
    #[serde(default)]
    pub api_version: String,

    /// Resource kind, usually `ConfigMap`.
    #[serde(default)]
    pub kind: String,

    /// ConfigMap data entries. Required; a wrapper without data cannot hold
    /// a document.
    pub data: BTreeMap<String, Value>,

    /// Object metadata.
    #[serde(default)]
    pub metadata: ConfigMapMetadata,
}

/// The subset of ConfigMap metadata this crate cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigMapMetadata {
    /// Object name.
    #[serde(default)]
    pub name: String,

    /// Object namespace.
    #[serde(default)]
    pub namespace: String,
}

impl ConfigMap {
    /// Decode a ConfigMap from raw YAML bytes.
    pub fn from_slice(content: &[u8]) -> Result<Self, XConnectError> {
        let wrapper: Self = serde_yaml::from_slice(content)?;
        Ok(wrapper)
    }

    /// Extract the embedded xconnect document.
    ///
    /// Fails with [`XConnectError::MissingKey`] when `data` has no
    /// `application.yml` entry or the embedded document has no top-level
    /// `xconnect` key, and with [`XConnectError::Decode`] when the
    /// `application.yml` value is not a string.
    pub fn extract(&self) -> Result<Document, XConnectError> {
        let raw = self
            .data
            .get(APPLICATION_YML)
            .ok_or_else(|| XConnectError::MissingKey(APPLICATION_YML.to_string()))?;
        let text = raw.as_str().ok_or_else(|| {
            XConnectError::Decode(format!(
                "value of [{APPLICATION_YML}] is not a string, found {}",
                raw.type_name()
            ))
        })?;

        let embedded: serde_yaml::Value = serde_yaml::from_str(text)?;
        if embedded.as_mapping().is_none() {
            return Err(XConnectError::Decode(
                "embedded document is not a mapping".to_string(),
            ));
        }
        if embedded.get("xconnect").is_none() {
            return Err(XConnectError::MissingKey("xconnect".to_string()));
        }

        debug!(
            name = %self.metadata.name,
            namespace = %self.metadata.namespace,
            "extracting embedded xconnect document"
        );
        let document: Document = serde_yaml::from_value(embedded)?;
        Ok(document)
    }
}

// =============================================================================
// TESTS
// =============================================================================
