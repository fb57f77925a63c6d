//! Read-only manifest data sources for Kubernetes custom resources.
//!
//! # Overview
//!
//! Each data source accepts a configuration that mirrors one custom resource, validates it against a
//! static schema, and renders the resource as a YAML manifest with `apiVersion` and `kind` filled in.
//! Nothing here talks to a cluster: a rendered manifest is a pure function of its configuration.
//!
//! The main modules are:
//!
//! - [`core`](crate::core) with the schema model, validators and the generic data source
//! - [`confidentialcontainers_org`] with the `confidentialcontainers.org` resources
//! - [`Provider`] with the registry of every data source
//!
//! # Rendering a manifest
//! ```
//! use crd_manifests::Provider;
//! use serde_json::json;
//!
//! let provider = Provider::new();
//! let state = provider
//!     .read_data_source(
//!         "k8s_confidentialcontainers_org_cc_runtime_v1beta1_manifest",
//!         json!({
//!             "metadata": {"name": "example"},
//!             "spec": {
//!                 "runtime_name": "kata",
//!                 "config": {"install_type": "bundle", "payload_image": "quay.io/example:v1"},
//!             },
//!         }),
//!     )
//!     .into_result()?;
//! assert!(state["yaml"].as_str().unwrap().starts_with("apiVersion: confidentialcontainers.org/v1beta1\n"));
//! # Ok::<(), crd_manifests::Error>(())
//! ```
//!
//! Typed access goes through the models directly:
//!
//! ```
//! use crd_manifests::confidentialcontainers_org::v1beta1::CcRuntimeManifest;
//! use serde_json::json;
//!
//! let runtime = CcRuntimeManifest::render(&json!({
//!     "metadata": {"name": "example"},
//!     "spec": {
//!         "runtime_name": "enclave-cc",
//!         "config": {"install_type": "osnative", "payload_image": "quay.io/example:v1"},
//!     },
//! }))?;
//! assert_eq!(runtime.kind, "CcRuntime");
//! # Ok::<(), crd_manifests::Error>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod confidentialcontainers_org;

mod provider;
pub use provider::Provider;

pub use crate::core::{DataSource, Error, Manifest, ManifestSpec, Resource, Result};
/// Re-exports from [`crd_manifests_core`](crd_manifests_core)
#[doc(inline)]
pub use crd_manifests_core as core;
