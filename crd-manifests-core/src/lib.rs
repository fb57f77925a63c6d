//! Crate with the types and traits shared by every manifest data source
//!
//! A manifest data source takes a configuration tree that mirrors a custom resource,
//! validates it against a static [`Schema`](schema::Schema), decodes it into a typed model and
//! renders it as a YAML manifest with `apiVersion` and `kind` injected.
//!
//! This crate carries no custom resource definitions itself.
//! The same information here is always re-exported from `crd_manifests` under `crd_manifests::core`.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod data_source;
pub use data_source::{DataSource, ManifestDataSource, ManifestSpec, ReadRequest, ReadResponse};

pub mod diagnostics;
pub use diagnostics::{AttributePath, Diagnostic, Diagnostics};

pub mod gvk;
pub use gvk::GroupVersionKind;

pub mod k8s;

pub mod metadata;

pub mod object;
pub use object::Manifest;

mod resource;
pub use resource::Resource;

pub mod schema;
pub use schema::{Attribute, AttributeType, Presence, Schema};

pub mod validator;
pub use validator::Validator;

mod error;
pub use error::Error;

/// Convenient alias for `Result<T, Error>`
pub type Result<T, E = Error> = std::result::Result<T, E>;
