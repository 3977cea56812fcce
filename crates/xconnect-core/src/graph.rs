//! # Topology Graph Builder
//!
//! Builds a directed endpoint graph from a batch of xconnect sections: one
//! cluster per service, one node per listen/connect endpoint, and an edge
//! from every connect endpoint to the listen endpoint with the matching
//! network identity.
//!
//! The build is two-pass by necessity: connect targets may reference listen
//! entries defined in a document that has not been processed yet, so every
//! document is registered before any edge is drawn. All registries live on
//! the builder, never in process-global state.

use crate::model::{ConnectionEnd, XConnect};
use crate::value::Value;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

// =============================================================================
// TOPOLOGY TYPES
// =============================================================================

/// The complete endpoint topology of a batch of documents.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Topology {
    /// One cluster per document, named by its Meta name.
    pub clusters: Vec<Cluster>,

    /// Standalone nodes synthesized for virtual resources no service
    /// listens on.
    pub resources: Vec<Node>,

    /// Directed edges from connect endpoints to their targets.
    pub edges: Vec<Edge>,

    /// Non-fatal problems encountered while linking.
    pub diagnostics: Vec<String>,
}

/// A visual grouping of one service's endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct Cluster {
    /// Service name from the document's metadata.
    pub name: String,

    /// Background color override from the `ui-bgcolor` extension key.
    pub bgcolor: Option<String>,

    /// Endpoint nodes belonging to this service.
    pub nodes: Vec<Node>,
}

/// A single endpoint node.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Graph-wide identifier, `"{service}/{endpoint}"` for endpoints or the
    /// resource identity for synthesized resource nodes.
    pub id: String,

    /// Display label, the logical endpoint name.
    pub label: String,

    /// What the node represents.
    pub kind: NodeKind,

    /// Fill color override from the `ui-fillcolor` extension key.
    pub fillcolor: Option<String>,
}

/// The role of a node in the topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A listen endpoint.
    Listen,
    /// A connect endpoint.
    Connect,
    /// A synthesized virtual-resource target.
    Resource,
}

/// A directed edge between two nodes, by node id.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    /// Source node id (a connect endpoint).
    pub from: String,

    /// Target node id (a listen endpoint or a resource node).
    pub to: String,
}

// =============================================================================
// BUILDER
// =============================================================================

/// Accumulates clusters, nodes, and the network-identity registry across a
/// single batch run.
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    clusters: Vec<Cluster>,
    resources: Vec<Node>,
    edges: Vec<Edge>,
    diagnostics: Vec<String>,
    node_by_identity: BTreeMap<String, String>,
}

impl TopologyBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a topology from a batch of xconnect sections.
    ///
    /// Registers every document before linking any of them; single-pass
    /// processing would miss forward references across documents.
    #[must_use]
    pub fn build(configs: &[XConnect]) -> Topology {
        let mut builder = Self::new();
        for config in configs {
            builder.add(config);
        }
        for config in configs {
            builder.link(config);
        }
        builder.finish()
    }

    /// Pass 1: register one cluster for this document, one node per
    /// endpoint, and every listen endpoint's network identity.
    pub fn add(&mut self, config: &XConnect) {
        let service = config.meta.name.clone();
        let mut cluster = Cluster {
            name: service.clone(),
            bgcolor: color_override(&config.meta.extra, "ui-bgcolor"),
            nodes: Vec::new(),
        };

        for (name, entry) in &config.listen {
            let id = format!("{service}/{name}");
            let identity = entry.network_id();
            if !identity.is_empty() {
                self.node_by_identity.insert(identity, id.clone());
            }
            cluster.nodes.push(Node {
                id,
                label: name.clone(),
                kind: NodeKind::Listen,
                fillcolor: color_override(&entry.extra, "ui-fillcolor"),
            });
        }

        for name in config.connect.keys() {
            cluster.nodes.push(Node {
                id: format!("{service}/{name}"),
                label: name.clone(),
                kind: NodeKind::Connect,
                fillcolor: None,
            });
        }

        self.clusters.push(cluster);
    }

    /// Pass 2: draw an edge from every connect endpoint to the node with the
    /// matching network identity, synthesizing a resource node when the
    /// target is a virtual resource with a `kind`.
    pub fn link(&mut self, config: &XConnect) {
        let service = &config.meta.name;
        for (name, entry) in &config.connect {
            let from = format!("{service}/{name}");
            let to = match self.node_by_identity.get(&entry.network_id()) {
                Some(id) => id.clone(),
                None if entry.kind.is_empty() => {
                    warn!(
                        service = %service,
                        endpoint = %name,
                        identity = %entry.network_id(),
                        "no listen entry found"
                    );
                    self.diagnostics
                        .push(format!("no listen entry found: [{}]", entry.network_id()));
                    continue;
                }
                None => {
                    let id = entry.resource_id();
                    if !self.node_by_identity.contains_key(&id) {
                        self.resources.push(Node {
                            id: id.clone(),
                            label: id.clone(),
                            kind: NodeKind::Resource,
                            fillcolor: None,
                        });
                        self.node_by_identity.insert(id.clone(), id.clone());
                    }
                    id
                }
            };
            self.edges.push(Edge { from, to });
        }
    }

    /// Consume the builder into the finished topology.
    #[must_use]
    pub fn finish(self) -> Topology {
        Topology {
            clusters: self.clusters,
            resources: self.resources,
            edges: self.edges,
            diagnostics: self.diagnostics,
        }
    }
}

fn color_override(extra: &BTreeMap<String, Value>, key: &str) -> Option<String> {
    extra.get(key).and_then(|v| v.as_str().map(str::to_string))
}

// =============================================================================
// TESTS
// =============================================================================
