//! Read-only data sources that render manifests
//!
//! A data source receives a configuration tree keyed by configuration attribute names
//! (`null` meaning unset), checks it against its [`Schema`] and hands back the resulting state:
//! the same tree with the computed attributes filled in.
use std::{fmt, marker::PhantomData};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{
    diagnostics::Diagnostics, metadata::ObjectMeta, object::Manifest, resource::Resource, schema::Schema,
    Error, Result,
};

/// Computed attribute holding the object name
pub const ID_ATTRIBUTE: &str = "id";
/// Computed attribute holding the rendered manifest
pub const YAML_ATTRIBUTE: &str = "yaml";

/// Input of [`DataSource::read`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadRequest {
    /// Resolved configuration, keyed by configuration names
    pub config: Value,
}

impl ReadRequest {
    /// Wrap a resolved configuration
    pub fn new(config: Value) -> Self {
        Self { config }
    }
}

/// Output of [`DataSource::read`]
///
/// Either `state` is set and `diagnostics` holds no error, or `state` is `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadResponse {
    /// New state with computed attributes filled in
    pub state: Option<Value>,
    /// Everything worth reporting about the read
    pub diagnostics: Diagnostics,
}

impl ReadResponse {
    fn failed(diagnostics: Diagnostics) -> Self {
        Self {
            state: None,
            diagnostics,
        }
    }

    /// Whether any error diagnostic was produced
    pub fn has_error(&self) -> bool {
        self.diagnostics.has_error()
    }

    /// The new state, or every diagnostic as an [`Error::InvalidConfig`]
    pub fn into_result(self) -> Result<Value> {
        match self.state {
            Some(state) if !self.diagnostics.has_error() => Ok(state),
            _ => Err(Error::InvalidConfig(self.diagnostics)),
        }
    }
}

/// A read-only data source
pub trait DataSource: Send + Sync {
    /// Full type name under a provider, e.g. `k8s_confidentialcontainers_org_cc_runtime_v1beta1_manifest`
    fn type_name(&self, provider: &str) -> String;

    /// Accepted configuration
    fn schema(&self) -> &Schema;

    /// Check a configuration against the schema without reading
    fn validate(&self, config: &Value) -> Diagnostics {
        self.schema().validate(config)
    }

    /// Compute the new state from a configuration
    fn read(&self, request: ReadRequest) -> ReadResponse;
}

/// The spec type of a custom resource that can be rendered as a manifest
pub trait ManifestSpec: Resource + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Accepted configuration, including `metadata`, `spec` and the computed attributes
    fn schema() -> &'static Schema;

    /// Data source name without the provider prefix
    fn type_name_suffix() -> String {
        Self::gvk().manifest_type_name()
    }
}

/// The bound configuration before type information is injected
#[derive(Deserialize)]
struct ManifestConfig<S> {
    metadata: ObjectMeta,
    spec: S,
}

/// Data source that renders manifests of the custom resource with spec `S`
pub struct ManifestDataSource<S> {
    _spec: PhantomData<fn() -> S>,
}

impl<S> ManifestDataSource<S> {
    /// Create the data source
    pub fn new() -> Self {
        Self { _spec: PhantomData }
    }
}

impl<S> Default for ManifestDataSource<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Resource> fmt::Debug for ManifestDataSource<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManifestDataSource")
            .field("gvk", &S::gvk())
            .finish()
    }
}

impl<S: ManifestSpec> ManifestDataSource<S> {
    /// Decode a bound configuration and inject `apiVersion` and `kind`
    pub fn decode(bound: Value) -> Result<Manifest<S>> {
        let ManifestConfig { metadata, spec } =
            serde_json::from_value::<ManifestConfig<S>>(bound).map_err(Error::DecodeConfig)?;
        Ok(Manifest::new(metadata, spec))
    }

    /// Validate a configuration and render its manifest
    pub fn render(config: &Value) -> Result<Manifest<S>> {
        let bound = S::schema().bind(config).map_err(Error::InvalidConfig)?;
        Self::decode(bound)
    }

    /// Validate a configuration and render its manifest as YAML
    ///
    /// Only the fields set in the configuration are written, whatever the typed model defaults to.
    pub fn render_yaml(config: &Value) -> Result<String> {
        let bound = S::schema().bind(config).map_err(Error::InvalidConfig)?;
        Self::decode(bound.clone())?.to_yaml_within(&bound)
    }
}

impl<S: ManifestSpec> DataSource for ManifestDataSource<S> {
    fn type_name(&self, provider: &str) -> String {
        format!("{provider}_{}", S::type_name_suffix())
    }

    fn schema(&self) -> &Schema {
        S::schema()
    }

    fn read(&self, request: ReadRequest) -> ReadResponse {
        debug!(gvk = %S::gvk(), "Read data source");
        let ReadRequest { config } = request;

        let yaml = match Self::render_yaml(&config) {
            Ok(yaml) => yaml,
            Err(Error::InvalidConfig(diags)) => return ReadResponse::failed(diags),
            Err(err) => return ReadResponse::failed(diagnose(err)),
        };

        // binding succeeded, so the configuration is an object
        let mut state = config.as_object().cloned().unwrap_or_default();
        let id = config.pointer("/metadata/name").cloned().unwrap_or(Value::Null);
        state.insert(ID_ATTRIBUTE.to_string(), id);
        state.insert(YAML_ATTRIBUTE.to_string(), Value::String(yaml));
        ReadResponse {
            state: Some(Value::Object(state)),
            diagnostics: Diagnostics::default(),
        }
    }
}

fn diagnose(err: Error) -> Diagnostics {
    let summary = match &err {
        Error::DecodeConfig(_) => "Unable to decode configuration",
        Error::EncodeManifest(_) | Error::SerializeYaml(_) => "Unable to generate YAML",
        _ => "Unable to read data source",
    };
    let mut diags = Diagnostics::default();
    diags.add_error(summary, err.to_string());
    diags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Attribute;
    use crate::{k8s, validator::Validator};
    use assert_json_diff::assert_json_include;
    use serde_json::json;
    use std::sync::LazyLock;

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct GadgetSpec {
        mode: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        replicas: Option<i64>,
    }

    impl Resource for GadgetSpec {
        const GROUP: &'static str = "gadgets.example.com";
        const KIND: &'static str = "Gadget";
        const VERSION: &'static str = "v1";
    }

    static GADGET_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
        Schema::new("Gadgets", vec![
            Attribute::computed_string("id"),
            Attribute::computed_string("yaml"),
            Attribute::object("metadata", "metadata", k8s::cluster_metadata()).required(),
            Attribute::object("spec", "spec", vec![
                Attribute::string("mode", "mode")
                    .required()
                    .validator(Validator::one_of(&["fast", "slow"])),
                Attribute::int64("replicas", "replicas"),
            ])
            .required(),
        ])
    });

    impl ManifestSpec for GadgetSpec {
        fn schema() -> &'static Schema {
            &GADGET_SCHEMA
        }
    }

    /// Declares `mode` as a number while the model wants a string
    #[derive(Serialize, Deserialize, Debug)]
    struct BrokenSpec {
        mode: String,
    }

    impl Resource for BrokenSpec {
        const GROUP: &'static str = "gadgets.example.com";
        const KIND: &'static str = "Broken";
        const VERSION: &'static str = "v1";
    }

    static BROKEN_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
        Schema::new("Broken", vec![
            Attribute::object("metadata", "metadata", k8s::cluster_metadata()).required(),
            Attribute::object("spec", "spec", vec![Attribute::int64("mode", "mode")]).required(),
        ])
    });

    impl ManifestSpec for BrokenSpec {
        fn schema() -> &'static Schema {
            &BROKEN_SCHEMA
        }
    }

    fn read(config: Value) -> ReadResponse {
        ManifestDataSource::<GadgetSpec>::new().read(ReadRequest::new(config))
    }

    #[test]
    fn type_name_is_derived_from_gvk() {
        let ds = ManifestDataSource::<GadgetSpec>::new();
        assert_eq!(ds.type_name("k8s"), "k8s_gadgets_example_com_gadget_v1_manifest");
    }

    #[test]
    fn read_fills_computed_attributes() {
        let resp = read(json!({
            "id": null,
            "yaml": null,
            "metadata": {"name": "g", "labels": null},
            "spec": {"mode": "fast", "replicas": null},
        }));
        assert!(!resp.has_error());
        let state = resp.state.unwrap();
        assert_eq!(state["id"], "g");
        assert_eq!(
            state["yaml"],
            "apiVersion: gadgets.example.com/v1\nkind: Gadget\nmetadata:\n  name: g\nspec:\n  mode: fast\n"
        );
        // the configured values are kept as they were
        assert_json_include!(actual: state, expected: json!({"metadata": {"name": "g", "labels": null}}));
    }

    #[test]
    fn invalid_config_produces_no_state() {
        let resp = read(json!({"metadata": {"name": "g"}, "spec": {"mode": "maybe"}}));
        assert!(resp.state.is_none());
        let summaries = resp.diagnostics.iter().map(|d| d.summary.as_str()).collect::<Vec<_>>();
        assert_eq!(summaries, vec!["Invalid Attribute Value Match"]);

        let err = read(json!({"spec": {"mode": "fast"}})).into_result().unwrap_err();
        assert!(err.to_string().contains("metadata: Missing required argument"));
    }

    #[test]
    fn decode_failures_become_diagnostics() {
        let ds = ManifestDataSource::<BrokenSpec>::new();
        let resp = ds.read(ReadRequest::new(json!({"metadata": {"name": "b"}, "spec": {"mode": 1}})));
        assert!(resp.state.is_none());
        let diag = resp.diagnostics.iter().next().unwrap();
        assert_eq!(diag.summary, "Unable to decode configuration");
        assert!(diag.path.is_none());
    }

    #[test]
    fn validate_checks_schema_only() {
        let ds = ManifestDataSource::<BrokenSpec>::new();
        assert!(ds
            .validate(&json!({"metadata": {"name": "b"}, "spec": {"mode": 1}}))
            .is_empty());
        assert!(ds.validate(&json!({"metadata": {"name": "b"}})).has_error());
    }

    #[test]
    fn render_returns_typed_manifest() {
        let m = ManifestDataSource::<GadgetSpec>::render(&json!({
            "metadata": {"name": "g"},
            "spec": {"mode": "slow", "replicas": 2},
        }))
        .unwrap();
        assert!(m.has_expected_types());
        assert_eq!(m.spec.replicas, Some(2));
    }
}
