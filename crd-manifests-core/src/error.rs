use thiserror::Error;

use crate::diagnostics::Diagnostics;

/// Possible errors when rendering manifests
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration did not satisfy the schema
    ///
    /// Carries every diagnostic found while binding, not just the first one.
    #[error("invalid configuration:\n{0}")]
    InvalidConfig(Diagnostics),

    /// A bound configuration could not be decoded into the typed model
    #[error("unable to decode configuration: {0}")]
    DecodeConfig(#[source] serde_json::Error),

    /// The typed model could not be converted back into a value tree
    #[error("unable to encode manifest: {0}")]
    EncodeManifest(#[source] serde_json::Error),

    /// The typed model could not be serialized to YAML
    #[error("unable to generate YAML: {0}")]
    SerializeYaml(#[source] serde_yaml::Error),

    /// A YAML document could not be parsed back into a manifest
    #[error("unable to parse YAML: {0}")]
    ParseYaml(#[source] serde_yaml::Error),

    /// No data source is registered under the requested type name
    #[error("unknown data source: {0}")]
    UnknownDataSource(String),
}
