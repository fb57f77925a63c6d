use serde_json::Value;
use tracing::debug;

use crate::{
    confidentialcontainers_org::v1beta1::CcRuntimeManifest,
    core::{DataSource, Diagnostics, Error, ManifestDataSource, ManifestSpec, ReadRequest, ReadResponse, Result, Schema},
};

/// A provider: a named set of data sources
///
/// Data sources are looked up by their full type name, which is the provider name followed by the
/// data source suffix, e.g. `k8s_confidentialcontainers_org_cc_runtime_v1beta1_manifest`.
pub struct Provider {
    name: String,
    data_sources: Vec<Box<dyn DataSource>>,
}

impl Provider {
    /// Name used when none is configured
    pub const DEFAULT_NAME: &'static str = "k8s";

    /// Create a provider named [`Provider::DEFAULT_NAME`] with every known data source
    pub fn new() -> Self {
        Self::with_name(Self::DEFAULT_NAME)
    }

    /// Create a provider with a custom name and every known data source
    pub fn with_name(name: impl Into<String>) -> Self {
        Self::empty(name).with_data_source(CcRuntimeManifest::new())
    }

    /// Create a provider without any data sources
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_sources: vec![],
        }
    }

    /// Register a data source
    #[must_use]
    pub fn with_data_source(mut self, data_source: impl DataSource + 'static) -> Self {
        self.data_sources.push(Box::new(data_source));
        self
    }

    /// Register the manifest data source for the spec type `S`
    #[must_use]
    pub fn with_manifest<S: ManifestSpec>(self) -> Self {
        self.with_data_source(ManifestDataSource::<S>::new())
    }

    /// The provider name, used as type name prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type names of every registered data source
    pub fn data_sources(&self) -> impl Iterator<Item = String> + '_ {
        self.data_sources.iter().map(|ds| ds.type_name(&self.name))
    }

    /// Look up a data source by type name
    pub fn data_source(&self, type_name: &str) -> Option<&dyn DataSource> {
        self.data_sources
            .iter()
            .find(|ds| ds.type_name(&self.name) == type_name)
            .map(|ds| &**ds)
    }

    /// The schema of a data source
    pub fn schema(&self, type_name: &str) -> Result<&Schema> {
        self.data_source(type_name)
            .map(|ds| ds.schema())
            .ok_or_else(|| Error::UnknownDataSource(type_name.to_string()))
    }

    /// Validate a configuration, then read the data source if it is valid
    pub fn read_data_source(&self, type_name: &str, config: Value) -> ReadResponse {
        let Some(data_source) = self.data_source(type_name) else {
            let mut diagnostics = Diagnostics::default();
            diagnostics.add_error(
                "Unknown data source",
                format!("The provider {} does not support data source {type_name:?}.", self.name),
            );
            return ReadResponse {
                state: None,
                diagnostics,
            };
        };

        let validation = data_source.validate(&config);
        if validation.has_error() {
            debug!(type_name, errors = validation.len(), "configuration rejected");
            return ReadResponse {
                state: None,
                diagnostics: validation,
            };
        }

        data_source.read(ReadRequest::new(config))
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CC_RUNTIME: &str = "k8s_confidentialcontainers_org_cc_runtime_v1beta1_manifest";

    #[test]
    fn lists_data_sources_under_provider_name() {
        let provider = Provider::new();
        assert_eq!(provider.data_sources().collect::<Vec<_>>(), vec![CC_RUNTIME]);

        let renamed = Provider::with_name("kubernetes");
        assert_eq!(renamed.name(), "kubernetes");
        assert!(renamed.data_source(CC_RUNTIME).is_none());
        assert!(renamed
            .data_source("kubernetes_confidentialcontainers_org_cc_runtime_v1beta1_manifest")
            .is_some());
    }

    #[test]
    fn unknown_data_sources() {
        let provider = Provider::new();
        assert!(matches!(provider.schema("k8s_nope"), Err(Error::UnknownDataSource(n)) if n == "k8s_nope"));

        let resp = provider.read_data_source("k8s_nope", json!({}));
        assert!(resp.state.is_none());
        assert_eq!(resp.diagnostics.iter().next().unwrap().summary, "Unknown data source");
    }

    #[test]
    fn empty_provider_has_nothing() {
        let provider = Provider::empty("k8s");
        assert_eq!(provider.data_sources().count(), 0);
        let provider = provider.with_manifest::<crate::confidentialcontainers_org::v1beta1::CcRuntimeSpec>();
        assert!(provider.schema(CC_RUNTIME).is_ok());
    }

    #[test]
    fn validation_runs_before_read() {
        let resp = Provider::new().read_data_source(
            CC_RUNTIME,
            json!({
                "metadata": {"name": "example"},
                "spec": {"runtime_name": "runc", "config": {"install_type": "bundle", "payload_image": "x"}},
            }),
        );
        assert!(resp.state.is_none());
        let diag = resp.diagnostics.iter().next().unwrap();
        assert_eq!(diag.summary, "Invalid Attribute Value Match");
        assert_eq!(diag.path.as_ref().unwrap().to_string(), "spec.runtime_name");
    }
}
