//! # CLI Command Implementations

use std::path::{Path, PathBuf};
use tracing::{info, warn};
use xconnect_core::{ConfigMap, Document, TopologyBuilder, XConnect, XConnectError, dot, export, loader};

// =============================================================================
// EMIT COMMAND
// =============================================================================

/// Load one descriptor and deliver its normalized form.
pub async fn cmd_emit(
    input: &Path,
    k8s: bool,
    format: &str,
    target: Option<&str>,
) -> Result<(), XConnectError> {
    let document = load_input(input, k8s)?;
    let rendered = render_document(&document, format)?;

    match target {
        None => {
            println!("{rendered}");
            Ok(())
        }
        Some(target) => deliver(target, format, rendered).await,
    }
}

/// Read the input source (environment override, then file) and decode it,
/// unwrapping the Kubernetes ConfigMap layer when requested.
pub fn load_input(input: &Path, k8s: bool) -> Result<Document, XConnectError> {
    let content = loader::read_source(input)?;
    if k8s {
        info!(path = %input.display(), "parsing Kubernetes ConfigMap");
        ConfigMap::from_slice(&content)?.extract()
    } else {
        info!(path = %input.display(), "parsing xconnect document");
        loader::from_slice(&content)
    }
}

/// Serialize a document in the requested output format.
pub fn render_document(document: &Document, format: &str) -> Result<String, XConnectError> {
    match format {
        "json" => export::to_json_string(document),
        "yaml" => export::to_yaml_string(document),
        other => Err(XConnectError::Decode(format!(
            "unsupported format [{other}], use json or yaml"
        ))),
    }
}

/// Deliver rendered output to a file:// or http(s):// target.
async fn deliver(target: &str, format: &str, body: String) -> Result<(), XConnectError> {
    if let Some(path) = target.strip_prefix("file://") {
        info!(path, "writing configuration");
        std::fs::write(path, body)
            .map_err(|e| XConnectError::Io(format!("cannot write [{path}]: {e}")))?;
        return Ok(());
    }
    if target.starts_with("http://") || target.starts_with("https://") {
        info!(url = target, "posting configuration");
        let content_type = match format {
            "yaml" => "application/yaml",
            _ => "application/json",
        };
        let response = reqwest::Client::new()
            .post(target)
            .header("content-type", content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| XConnectError::Network(format!("cannot POST to [{target}]: {e}")))?;
        if !response.status().is_success() {
            return Err(XConnectError::Network(format!(
                "POST [{target}] returned {}",
                response.status()
            )));
        }
        return Ok(());
    }
    Err(XConnectError::Io(format!(
        "unsupported target [{target}], use file:// or http(s)://"
    )))
}

// =============================================================================
// GRAPH COMMAND
// =============================================================================

/// Walk a directory of descriptors and print their topology as DOT.
pub fn cmd_graph(root: &Path) -> Result<(), XConnectError> {
    print!("{}", render_graph(root)?);
    Ok(())
}

/// Build the DOT rendering for every descriptor under `root`.
///
/// A descriptor that fails to load is logged and skipped; the batch
/// continues.
pub fn render_graph(root: &Path) -> Result<String, XConnectError> {
    let mut files = Vec::new();
    collect_descriptor_files(root, &mut files)?;
    files.sort();

    let mut configs: Vec<XConnect> = Vec::new();
    for file in &files {
        match loader::from_file(file) {
            Ok(document) => configs.push(document.xconnect),
            Err(e) => warn!(path = %file.display(), "skipping descriptor: {e}"),
        }
    }
    info!(loaded = configs.len(), scanned = files.len(), "building topology");

    Ok(dot::render(&TopologyBuilder::build(&configs)))
}

fn collect_descriptor_files(root: &Path, files: &mut Vec<PathBuf>) -> Result<(), XConnectError> {
    let entries = std::fs::read_dir(root)
        .map_err(|e| XConnectError::Io(format!("cannot read directory [{}]: {e}", root.display())))?;
    for entry in entries {
        let entry = entry.map_err(|e| XConnectError::Io(e.to_string()))?;
        let path = entry.path();
        if path.is_dir() {
            collect_descriptor_files(&path, files)?;
        } else if matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml" | "yml")
        ) {
            files.push(path);
        }
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn render_document_rejects_unknown_formats() {
        let document = loader::from_str("xconnect:\n  meta:\n    name: svc\n").expect("decode");
        assert!(render_document(&document, "json").is_ok());
        assert!(render_document(&document, "yaml").is_ok());
        assert!(render_document(&document, "toml").is_err());
    }

    #[test]
    fn load_input_unwraps_configmaps() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(
            b"data:\n  application.yml: |\n    xconnect:\n      meta:\n        name: wrapped\n",
        )
        .expect("write");
        let document = load_input(file.path(), true).expect("load");
        assert_eq!(document.xconnect.meta.name, "wrapped");
    }

    #[test]
    fn graph_walks_directories_and_skips_broken_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::create_dir(dir.path().join("nested")).expect("mkdir");
        std::fs::write(
            dir.path().join("a.yaml"),
            "xconnect:\n  meta:\n    name: accountservice\n  listen:\n    api:\n      host: svc.internal\n      port: 9000\n",
        )
        .expect("write a");
        std::fs::write(
            dir.path().join("nested/b.yml"),
            "xconnect:\n  meta:\n    name: webshop\n  connect:\n    upstream:\n      host: svc.internal\n      port: 9000\n",
        )
        .expect("write b");
        std::fs::write(dir.path().join("broken.yaml"), ": not yaml :\n").expect("write broken");
        std::fs::write(dir.path().join("ignored.txt"), "not a descriptor").expect("write txt");

        let dot = render_graph(dir.path()).expect("render");
        assert!(dot.contains("subgraph cluster_accountservice {"));
        assert!(dot.contains("n_webshop_upstream -> n_accountservice_api"));
    }

    #[tokio::test]
    async fn emit_writes_to_file_targets() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("svc.yaml");
        std::fs::write(&input, "xconnect:\n  meta:\n    name: svc\n").expect("write input");
        let output = dir.path().join("out.json");
        let target = format!("file://{}", output.display());

        cmd_emit(&input, false, "json", Some(&target))
            .await
            .expect("emit");

        let written = std::fs::read_to_string(&output).expect("read output");
        let document = loader::from_str(&written).expect("decode output");
        assert_eq!(document.xconnect.meta.name, "svc");
    }

    #[tokio::test]
    async fn unsupported_target_scheme_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("svc.yaml");
        std::fs::write(&input, "xconnect:\n  meta:\n    name: svc\n").expect("write input");

        let result = cmd_emit(&input, false, "json", Some("ftp://nope")).await;
        assert!(matches!(result, Err(XConnectError::Io(_))));
    }
}
