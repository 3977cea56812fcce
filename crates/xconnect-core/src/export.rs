//! # Configuration Emitters
//!
//! Renders a decoded [`Document`] back out as JSON or YAML. Both emitters
//! reproduce all non-default named fields plus all extension entries; key
//! order may differ from the source.

use crate::error::XConnectError;
use crate::model::Document;

/// Serialize a document as pretty-printed JSON.
pub fn to_json_string(document: &Document) -> Result<String, XConnectError> {
    let rendered = serde_json::to_string_pretty(document)?;
    Ok(rendered)
}

/// Serialize a document as YAML.
pub fn to_yaml_string(document: &Document) -> Result<String, XConnectError> {
    let rendered = serde_yaml::to_string(document)?;
    Ok(rendered)
}

// =============================================================================
// TESTS
// =============================================================================
