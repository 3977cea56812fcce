//! # xconnect-core
//!
//! The document model, path resolver, and topology builder for xconnect
//! service descriptors - THE LOGIC.
//!
//! An xconnect document declares, per service, what network endpoints it
//! listens on and what endpoints it connects to. This crate decodes such
//! documents (YAML or JSON, plain or wrapped in a Kubernetes ConfigMap),
//! resolves slash-delimited paths into them — named fields and free-form
//! extension data alike — and derives two outputs: a normalized JSON/YAML
//! configuration and a directed endpoint graph for visualization.
//!
//! ## Architectural Constraints
//!
//! - Pure and synchronous: no async, no network; the only I/O is whole-file
//!   reads in the loader
//! - Deterministic: `BTreeMap` everywhere, no `HashMap`
//! - Recoverable: resolver misses are typed failures (`NotFound`,
//!   `TypeMismatch`), never a crash

// =============================================================================
// MODULES
// =============================================================================

pub mod dot;
pub mod error;
pub mod export;
pub mod graph;
pub mod kubernetes;
pub mod loader;
pub mod model;
pub mod resolve;
pub mod value;

// =============================================================================
// RE-EXPORTS: Document Model
// =============================================================================

pub use model::{
    ConnectEntry, ConnectionEnd, Document, GcpDataStoreEntry, GcpEntry, GcpMemoryStoreEntry,
    GcpPubSubEntry, ListenEntry, MetaProperties, XConnect,
};

// =============================================================================
// RE-EXPORTS: Resolver & Values
// =============================================================================

pub use error::XConnectError;
pub use resolve::Resolve;
pub use value::Value;

// =============================================================================
// RE-EXPORTS: Topology
// =============================================================================

pub use graph::{Cluster, Edge, Node, NodeKind, Topology, TopologyBuilder};
pub use kubernetes::ConfigMap;
