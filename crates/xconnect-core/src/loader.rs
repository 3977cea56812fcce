//! # Document Loader
//!
//! Decodes raw bytes into a [`Document`] from three sources that all produce
//! the same shape:
//!
//! 1. a direct document (`xconnect:` at top level), YAML or JSON — the YAML
//!    parser accepts both,
//! 2. a Kubernetes ConfigMap wrapper (see [`crate::kubernetes`]),
//! 3. the `XCONNECT` environment variable, which overrides the file path
//!    argument whenever it holds content.

use crate::error::XConnectError;
use crate::model::Document;
use std::path::Path;
use tracing::debug;

/// Environment variable that, when non-empty, overrides the input file.
pub const ENV_OVERRIDE: &str = "XCONNECT";

/// Decode a direct document from raw bytes.
pub fn from_slice(content: &[u8]) -> Result<Document, XConnectError> {
    let document: Document = serde_yaml::from_slice(content)?;
    Ok(document)
}

/// Decode a direct document from a string.
pub fn from_str(content: &str) -> Result<Document, XConnectError> {
    from_slice(content.as_bytes())
}

/// Read and decode a direct document from a file.
pub fn from_file(path: &Path) -> Result<Document, XConnectError> {
    debug!(path = %path.display(), "reading document");
    let content = std::fs::read(path)
        .map_err(|e| XConnectError::Io(format!("cannot read [{}]: {e}", path.display())))?;
    from_slice(&content)
}

/// Raw document bytes: the environment override when set, else the file.
pub fn read_source(path: &Path) -> Result<Vec<u8>, XConnectError> {
    if let Ok(content) = std::env::var(ENV_OVERRIDE) {
        if !content.trim().is_empty() {
            debug!("using {ENV_OVERRIDE} environment override");
            return Ok(content.into_bytes());
        }
    }
    std::fs::read(path)
        .map_err(|e| XConnectError::Io(format!("cannot read [{}]: {e}", path.display())))
}

/// Load a document, honoring the environment override.
pub fn load(path: &Path) -> Result<Document, XConnectError> {
    from_slice(&read_source(path)?)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::Resolve;
    use std::io::Write;

    #[test]
    fn yaml_document_loads() {
        let doc = from_str("xconnect:\n  meta:\n    name: svc\n").expect("load yaml");
        assert_eq!(doc.xconnect.meta.name, "svc");
    }

    #[test]
    fn json_document_loads_through_the_same_path() {
        let doc = from_str(r#"{"xconnect": {"meta": {"name": "svc"}}}"#).expect("load json");
        assert_eq!(doc.xconnect.meta.name, "svc");
    }

    #[test]
    fn document_without_xconnect_section_fails() {
        let result = from_str("other: config\n");
        assert!(matches!(result, Err(XConnectError::Decode(_))));
    }

    #[test]
    fn file_loads_and_missing_file_is_io_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"xconnect:\n  listen:\n    api:\n      port: 9000\n")
            .expect("write");
        let doc = from_file(file.path()).expect("load file");
        assert_eq!(
            doc.find_i64("xconnect/listen/api/port").expect("port"),
            9000
        );

        let missing = from_file(Path::new("/no/such/file.yaml"));
        assert!(matches!(missing, Err(XConnectError::Io(_))));
    }

    #[test]
    fn environment_variable_overrides_the_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"xconnect:\n  meta:\n    name: from-file\n")
            .expect("write");

        // set_var is unsafe in edition 2024; this test is the only writer
        unsafe { std::env::set_var(ENV_OVERRIDE, "xconnect:\n  meta:\n    name: from-env\n") };
        let doc = load(file.path()).expect("load");
        unsafe { std::env::remove_var(ENV_OVERRIDE) };

        assert_eq!(doc.xconnect.meta.name, "from-env");

        let doc = load(file.path()).expect("load without override");
        assert_eq!(doc.xconnect.meta.name, "from-file");
    }
}
