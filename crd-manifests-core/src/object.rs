//! The generic manifest wrapper.
use crate::{
    metadata::{ObjectMeta, TypeMeta},
    resource::Resource,
    Error, Result,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// A complete Kubernetes manifest for a custom resource with spec `S`
///
/// Field order is the emitted key order: `apiVersion`, `kind`, `metadata`, `spec`.
/// Fields inside `metadata` and `spec` are emitted in lexicographic order and
/// unset optional fields are left out entirely.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Manifest<S> {
    /// The API group and version, fixed per kind
    pub api_version: String,
    /// The kind, fixed per kind
    pub kind: String,
    /// Standard object metadata
    pub metadata: ObjectMeta,
    /// The custom resource spec
    pub spec: S,
}

impl<S: Resource> Manifest<S> {
    /// Create a manifest with the type information of `S` injected
    pub fn new(metadata: ObjectMeta, spec: S) -> Self {
        let TypeMeta { api_version, kind } = S::type_meta();
        Self {
            api_version,
            kind,
            metadata,
            spec,
        }
    }

    /// Create a manifest with only a name set in the metadata
    pub fn named(name: &str, spec: S) -> Self {
        Self::new(
            ObjectMeta {
                name: Some(name.to_string()),
                ..ObjectMeta::default()
            },
            spec,
        )
    }

    /// Whether `apiVersion` and `kind` match the static type information of `S`
    pub fn has_expected_types(&self) -> bool {
        self.types() == S::type_meta()
    }
}

impl<S> Manifest<S> {
    /// The injected type information
    pub fn types(&self) -> TypeMeta {
        TypeMeta {
            api_version: self.api_version.clone(),
            kind: self.kind.clone(),
        }
    }

    /// The object name, if set
    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }
}

impl<S: Serialize> Manifest<S> {
    /// Serialize the manifest as a YAML document
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(Error::SerializeYaml)
    }

    /// Serialize the manifest as a YAML document, writing only the fields set in `fields`
    ///
    /// `fields` is the manifest-keyed tree the manifest was decoded from. Some `k8s-openapi`
    /// models hold optional reference names as plain strings, so an unset `name` would otherwise
    /// come back out as `name: ''`. `apiVersion` and `kind` are always written.
    pub fn to_yaml_within(&self, fields: &Value) -> Result<String> {
        let mut value = serde_json::to_value(self).map_err(Error::EncodeManifest)?;
        if let (Value::Object(map), Value::Object(fields)) = (&mut value, fields) {
            for (key, field) in map.iter_mut() {
                if let Some(set) = fields.get(key) {
                    retain_set(field, set);
                }
            }
        }
        serde_yaml::to_string(&value).map_err(Error::SerializeYaml)
    }
}

/// Drop every key of `value` that is absent from `set`, recursing into objects and lists
fn retain_set(value: &mut Value, set: &Value) {
    match (value, set) {
        (Value::Object(map), Value::Object(set)) => map.retain(|key, field| match set.get(key) {
            Some(set) => {
                retain_set(field, set);
                true
            }
            None => false,
        }),
        (Value::Array(items), Value::Array(set)) => {
            for (item, set) in items.iter_mut().zip(set) {
                retain_set(item, set);
            }
        }
        _ => {}
    }
}

impl<S: DeserializeOwned> Manifest<S> {
    /// Parse a manifest back from a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::ParseYaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct WidgetSpec {
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        replicas: i64,
    }

    impl Resource for WidgetSpec {
        const GROUP: &'static str = "example.com";
        const KIND: &'static str = "Widget";
        const VERSION: &'static str = "v1";
    }

    #[test]
    fn type_information_is_injected() {
        let m = Manifest::named("w", WidgetSpec { color: None, replicas: 2 });
        assert_eq!(m.api_version, "example.com/v1");
        assert_eq!(m.kind, "Widget");
        assert_eq!(m.name(), Some("w"));
        assert!(m.has_expected_types());
    }

    #[test]
    fn yaml_key_order_and_omission() {
        let m = Manifest::named("w", WidgetSpec { color: None, replicas: 2 });
        let yaml = m.to_yaml().unwrap();
        assert_eq!(
            yaml,
            "apiVersion: example.com/v1\nkind: Widget\nmetadata:\n  name: w\nspec:\n  replicas: 2\n"
        );
    }

    #[test]
    fn yaml_round_trip_is_stable() {
        let mut labels = BTreeMap::new();
        labels.insert("app".to_string(), "widget".to_string());
        let m = Manifest::new(
            ObjectMeta {
                name: Some("w".into()),
                labels: Some(labels),
                ..ObjectMeta::default()
            },
            WidgetSpec {
                color: Some("blue".into()),
                replicas: 3,
            },
        );
        let first = m.to_yaml().unwrap();
        let parsed: Manifest<WidgetSpec> = Manifest::from_yaml(&first).unwrap();
        assert_eq!(parsed, m);
        assert_eq!(parsed.to_yaml().unwrap(), first);
    }

    #[test]
    fn foreign_types_are_detected() {
        let yaml = "apiVersion: example.com/v2\nkind: Widget\nmetadata:\n  name: w\nspec:\n  replicas: 1\n";
        let parsed: Manifest<WidgetSpec> = Manifest::from_yaml(yaml).unwrap();
        assert!(!parsed.has_expected_types());
    }

    /// Mirrors k8s-openapi reference types, whose optional `name` is a plain string
    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    struct Reference {
        #[serde(default)]
        name: String,
    }

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct MountSpec {
        mounts: Vec<Reference>,
        secret_ref: Reference,
    }

    impl Resource for MountSpec {
        const GROUP: &'static str = "example.com";
        const KIND: &'static str = "Mount";
        const VERSION: &'static str = "v1";
    }

    #[test]
    fn unset_fields_stay_out_of_yaml() {
        let fields = serde_json::json!({
            "metadata": {"name": "m"},
            "spec": {"mounts": [{"name": "a"}, {}], "secretRef": {}},
        });
        let m = Manifest::named("m", serde_json::from_value::<MountSpec>(fields["spec"].clone()).unwrap());
        assert!(m.to_yaml().unwrap().contains("name: ''"));
        assert_eq!(
            m.to_yaml_within(&fields).unwrap(),
            "apiVersion: example.com/v1\nkind: Mount\nmetadata:\n  name: m\nspec:\n  mounts:\n  - name: a\n  - {}\n  secretRef: {}\n"
        );
    }

    #[test]
    fn explicit_empty_names_are_kept() {
        let fields = serde_json::json!({"metadata": {"name": "m"}, "spec": {"mounts": [], "secretRef": {"name": ""}}});
        let m = Manifest::named("m", serde_json::from_value::<MountSpec>(fields["spec"].clone()).unwrap());
        assert!(m.to_yaml_within(&fields).unwrap().ends_with("spec:\n  mounts: []\n  secretRef:\n    name: ''\n"));
    }

    #[test]
    fn parse_errors_are_wrapped() {
        let err = Manifest::<WidgetSpec>::from_yaml("kind: [").unwrap_err();
        assert!(matches!(err, Error::ParseYaml(_)));
    }
}
