//! Binding a configuration tree against a schema
use serde_json::{Map, Value};
use tracing::trace;

use super::{Attribute, AttributeType, Presence};
use crate::diagnostics::{AttributePath, Diagnostics};

pub(super) fn bind(attributes: &[Attribute], config: &Value) -> Result<Value, Diagnostics> {
    let mut binder = Binder::default();
    let bound = binder.object(attributes, config, &AttributePath::default());
    trace!(diagnostics = binder.diags.len(), "bound configuration");
    if binder.diags.has_error() {
        return Err(binder.diags);
    }
    Ok(Value::Object(bound.unwrap_or_default()))
}

#[derive(Default)]
struct Binder {
    diags: Diagnostics,
}

impl Binder {
    fn object(&mut self, attributes: &[Attribute], value: &Value, path: &AttributePath) -> Option<Map<String, Value>> {
        let Some(fields) = value.as_object() else {
            self.type_error(path, "object");
            return None;
        };

        for key in fields.keys() {
            if !attributes.iter().any(|a| a.name == key.as_str()) {
                self.diags.add_attribute_error(
                    path.attribute(key),
                    "Unsupported argument",
                    format!("An argument named {key:?} is not expected here."),
                );
            }
        }

        let mut bound = Map::new();
        for attr in attributes {
            let attr_path = path.attribute(attr.name);
            let value = fields.get(attr.name).filter(|v| !v.is_null());
            match (attr.presence, value) {
                (Presence::Computed, Some(_)) => self.diags.add_attribute_error(
                    attr_path,
                    "Invalid Configuration for Read-Only Attribute",
                    format!(
                        "Cannot set value for this attribute as the provider has marked it as read-only. Remove the configuration line setting the value for {:?}.",
                        attr.name
                    ),
                ),
                (Presence::Computed, None) => {}
                (Presence::Required, None) => self.diags.add_attribute_error(
                    attr_path,
                    "Missing required argument",
                    format!("The argument {:?} is required, but no definition was found.", attr.name),
                ),
                (Presence::Optional, None) => {}
                (_, Some(value)) => {
                    if let Some(v) = self.value(attr, value, &attr_path) {
                        bound.insert(attr.wire_name.to_string(), v);
                    }
                }
            }
        }
        Some(bound)
    }

    fn value(&mut self, attr: &Attribute, value: &Value, path: &AttributePath) -> Option<Value> {
        let bound = match &attr.kind {
            AttributeType::String => value.is_string().then(|| value.clone()),
            AttributeType::Bool => value.is_boolean().then(|| value.clone()),
            AttributeType::Int64 => value.as_i64().map(Value::from),
            AttributeType::Map => self.string_map(value, path),
            AttributeType::List => self.string_list(value, path),
            AttributeType::Object(attrs) => return self.object(attrs, value, path).map(Value::Object),
            AttributeType::ObjectList(attrs) => return self.object_list(attrs, value, path),
        };
        match bound {
            Some(v) => {
                for validator in &attr.validators {
                    validator.validate(path, &v, &mut self.diags);
                }
                Some(v)
            }
            None => {
                self.type_error(path, attr.kind.type_name());
                None
            }
        }
    }

    fn string_map(&mut self, value: &Value, path: &AttributePath) -> Option<Value> {
        let map = value.as_object()?;
        // element errors are reported per key, the map itself is still well-formed
        for (key, v) in map {
            if !v.is_string() {
                self.type_error(&path.key(key), "string");
            }
        }
        Some(value.clone())
    }

    fn string_list(&mut self, value: &Value, path: &AttributePath) -> Option<Value> {
        let items = value.as_array()?;
        for (i, v) in items.iter().enumerate() {
            if !v.is_string() {
                self.type_error(&path.index(i), "string");
            }
        }
        Some(value.clone())
    }

    fn object_list(&mut self, attrs: &[Attribute], value: &Value, path: &AttributePath) -> Option<Value> {
        let Some(items) = value.as_array() else {
            self.type_error(path, "list of object");
            return None;
        };
        let bound = items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| self.object(attrs, item, &path.index(i)).map(Value::Object))
            .collect::<Vec<_>>();
        Some(Value::Array(bound))
    }

    fn type_error(&mut self, path: &AttributePath, expected: &str) {
        self.diags.add_attribute_error(
            path.clone(),
            "Incorrect attribute value type",
            format!("Inappropriate value for attribute \"{path}\": {expected} required."),
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        schema::{Attribute, Schema},
        validator::Validator,
    };
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new("widgets", vec![
            Attribute::computed_string("id"),
            Attribute::computed_string("yaml"),
            Attribute::object("metadata", "metadata", vec![
                Attribute::string("name", "name")
                    .required()
                    .validator(Validator::length_at_least(1)),
                Attribute::map("labels", "labels").validator(Validator::Labels),
            ])
            .required(),
            Attribute::object("spec", "spec", vec![
                Attribute::string("mode", "mode").validator(Validator::one_of(&["fast", "slow"])),
                Attribute::bool("debug", "debug"),
                Attribute::list("args", "args"),
                Attribute::string("pull_secret", "ImagePullSecret"),
                Attribute::object_list("ports", "ports", vec![
                    Attribute::string("name", "name").required(),
                    Attribute::int64("container_port", "containerPort"),
                ]),
            ]),
        ])
    }

    fn errors(config: serde_json::Value) -> Vec<(String, String)> {
        schema()
            .bind(&config)
            .unwrap_err()
            .iter()
            .map(|d| (d.path.clone().unwrap_or_default().to_string(), d.summary.clone()))
            .collect()
    }

    #[test]
    fn translates_names_and_drops_nulls() {
        let bound = schema()
            .bind(&json!({
                "id": null,
                "metadata": {"name": "w", "labels": null},
                "spec": {
                    "mode": "fast",
                    "debug": false,
                    "args": ["a", "b"],
                    "pull_secret": "regcred",
                    "ports": [{"name": "http", "container_port": 8080}],
                },
            }))
            .unwrap();
        assert_json_eq!(
            bound,
            json!({
                "metadata": {"name": "w"},
                "spec": {
                    "mode": "fast",
                    "debug": false,
                    "args": ["a", "b"],
                    "ImagePullSecret": "regcred",
                    "ports": [{"name": "http", "containerPort": 8080}],
                },
            })
        );
    }

    #[test]
    fn missing_required_attributes() {
        assert_eq!(errors(json!({})), vec![(
            "metadata".to_string(),
            "Missing required argument".to_string()
        )]);
        assert_eq!(
            errors(json!({"metadata": {}, "spec": {"ports": [{"container_port": 1}]}})),
            vec![
                ("metadata.name".to_string(), "Missing required argument".to_string()),
                ("spec.ports[0].name".to_string(), "Missing required argument".to_string()),
            ]
        );
    }

    #[test]
    fn computed_attributes_cannot_be_configured() {
        assert_eq!(errors(json!({"metadata": {"name": "w"}, "yaml": "x"})), vec![(
            "yaml".to_string(),
            "Invalid Configuration for Read-Only Attribute".to_string()
        )]);
    }

    #[test]
    fn unknown_attributes_are_rejected() {
        assert_eq!(
            errors(json!({"metadata": {"name": "w", "namespace": "default"}})),
            vec![("metadata.namespace".to_string(), "Unsupported argument".to_string())]
        );
        // manifest keys are not configuration names
        assert_eq!(
            errors(json!({"metadata": {"name": "w"}, "spec": {"ImagePullSecret": "x"}})),
            vec![("spec.ImagePullSecret".to_string(), "Unsupported argument".to_string())]
        );
    }

    #[test]
    fn type_mismatches() {
        let errs = errors(json!({
            "metadata": {"name": 1, "labels": {"a": 2}},
            "spec": {
                "debug": "yes",
                "args": ["ok", 3],
                "ports": {"name": "x"},
                "mode": ["fast"],
            },
        }));
        let summaries = errs.iter().map(|(p, _)| p.as_str()).collect::<Vec<_>>();
        assert_eq!(summaries, vec![
            "metadata.name",
            "metadata.labels[\"a\"]",
            "spec.mode",
            "spec.debug",
            "spec.args[1]",
            "spec.ports",
        ]);
        assert!(errs.iter().all(|(_, s)| s == "Incorrect attribute value type"));
    }

    #[test]
    fn integers_must_be_whole() {
        let errs = errors(json!({
            "metadata": {"name": "w"},
            "spec": {"ports": [{"name": "a", "container_port": 1.5}]},
        }));
        assert_eq!(errs, vec![(
            "spec.ports[0].container_port".to_string(),
            "Incorrect attribute value type".to_string()
        )]);
    }

    #[test]
    fn validators_run_after_type_checks() {
        let errs = errors(json!({
            "metadata": {"name": "", "labels": {"bad key": "v"}},
            "spec": {"mode": "medium"},
        }));
        assert_eq!(errs, vec![
            ("metadata.name".to_string(), "Invalid Attribute Value Length".to_string()),
            ("metadata.labels[\"bad key\"]".to_string(), "Invalid Label Key".to_string()),
            ("spec.mode".to_string(), "Invalid Attribute Value Match".to_string()),
        ]);
    }

    #[test]
    fn validate_is_bind_without_output() {
        let s = schema();
        assert!(s.validate(&json!({"metadata": {"name": "w"}})).is_empty());
        assert!(s.validate(&json!("not an object")).has_error());
    }
}
