//! # xconnect - THE BINARY
//!
//! Command-line tool on top of `xconnect-core`:
//!
//! ```bash
//! # normalize one descriptor
//! xconnect emit --input service.yaml --format json
//!
//! # extract from a Kubernetes ConfigMap and POST the result
//! xconnect emit --input configmap.yaml --k8s --target https://registry/configs
//!
//! # render the topology of a directory of descriptors
//! xconnect graph --root ./deploy | dot -Tpng > topology.png
//! ```

pub mod cli;
