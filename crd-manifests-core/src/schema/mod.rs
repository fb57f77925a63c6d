//! Static schemas for manifest data sources
//!
//! A [`Schema`] is a tree of [`Attribute`]s. Every attribute carries two names:
//! the configuration name callers use (`snake_case`) and the manifest key it is written to
//! (the CRD's JSON name, usually `camelCase`). Binding a configuration against the schema
//! validates it and translates it into the manifest key space in one pass, see [`Schema::bind`].
use serde::Serialize;
use serde_json::Value;

use crate::{diagnostics::Diagnostics, validator::Validator};

mod bind;

/// Whether an attribute must, may, or must not be configured
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    /// Must be set by the caller
    Required,
    /// May be set by the caller
    Optional,
    /// Set by the data source, never by the caller
    Computed,
}

/// The value type of an attribute
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// A string
    String,
    /// A boolean
    Bool,
    /// A 64-bit signed integer
    Int64,
    /// A map of strings to strings
    Map,
    /// An ordered list of strings
    List,
    /// A single nested object
    Object(Vec<Attribute>),
    /// An ordered list of nested objects
    ObjectList(Vec<Attribute>),
}

impl AttributeType {
    /// Attributes of a nested object type
    pub fn nested(&self) -> Option<&[Attribute]> {
        match self {
            Self::Object(attrs) | Self::ObjectList(attrs) => Some(attrs),
            _ => None,
        }
    }

    /// Short type name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Int64 => "number",
            Self::Map => "map of string",
            Self::List => "list of string",
            Self::Object(_) => "object",
            Self::ObjectList(_) => "list of object",
        }
    }
}

/// A single attribute of a schema
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Attribute {
    /// Configuration name
    pub name: &'static str,
    /// Key written to the manifest
    pub wire_name: &'static str,
    /// Human readable documentation
    pub description: &'static str,
    /// Whether the attribute is required, optional or computed
    pub presence: Presence,
    /// Value type, including nested attributes
    #[serde(rename = "type")]
    pub kind: AttributeType,
    /// Constraints checked after the type check
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl Attribute {
    fn new(name: &'static str, wire_name: &'static str, kind: AttributeType) -> Self {
        Self {
            name,
            wire_name,
            description: "",
            presence: Presence::Optional,
            kind,
            validators: vec![],
        }
    }

    /// An optional string attribute
    pub fn string(name: &'static str, wire_name: &'static str) -> Self {
        Self::new(name, wire_name, AttributeType::String)
    }

    /// An optional boolean attribute
    pub fn bool(name: &'static str, wire_name: &'static str) -> Self {
        Self::new(name, wire_name, AttributeType::Bool)
    }

    /// An optional 64-bit integer attribute
    pub fn int64(name: &'static str, wire_name: &'static str) -> Self {
        Self::new(name, wire_name, AttributeType::Int64)
    }

    /// An optional integer attribute that the model stores as an `i32`
    pub fn int32(name: &'static str, wire_name: &'static str) -> Self {
        Self::int64(name, wire_name).validator(Validator::Int32)
    }

    /// An optional map of strings
    pub fn map(name: &'static str, wire_name: &'static str) -> Self {
        Self::new(name, wire_name, AttributeType::Map)
    }

    /// An optional list of strings
    pub fn list(name: &'static str, wire_name: &'static str) -> Self {
        Self::new(name, wire_name, AttributeType::List)
    }

    /// An optional single nested object
    pub fn object(name: &'static str, wire_name: &'static str, attributes: Vec<Attribute>) -> Self {
        Self::new(name, wire_name, AttributeType::Object(attributes))
    }

    /// An optional list of nested objects
    pub fn object_list(name: &'static str, wire_name: &'static str, attributes: Vec<Attribute>) -> Self {
        Self::new(name, wire_name, AttributeType::ObjectList(attributes))
    }

    /// A computed string that only the data source sets; it is never written to the manifest
    pub fn computed_string(name: &'static str) -> Self {
        Self {
            presence: Presence::Computed,
            ..Self::new(name, "", AttributeType::String)
        }
    }

    /// Mark the attribute as required
    #[must_use]
    pub fn required(mut self) -> Self {
        self.presence = Presence::Required;
        self
    }

    /// Set the documentation
    #[must_use]
    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Add a validator
    #[must_use]
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Whether callers must set this attribute
    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }

    /// Whether only the data source sets this attribute
    pub fn is_computed(&self) -> bool {
        self.presence == Presence::Computed
    }
}

/// The full schema of a data source
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Schema {
    /// Human readable documentation of the data source
    pub description: &'static str,
    /// Top level attributes
    pub attributes: Vec<Attribute>,
}

impl Schema {
    /// Create a schema from its top level attributes
    pub fn new(description: &'static str, attributes: Vec<Attribute>) -> Self {
        Self {
            description,
            attributes,
        }
    }

    /// Look up a top level attribute by configuration name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Look up a nested attribute by its configuration path, e.g. `["spec", "config", "install_type"]`
    pub fn lookup(&self, path: &[&str]) -> Option<&Attribute> {
        let (first, rest) = path.split_first()?;
        let mut current = self.attribute(first)?;
        for name in rest {
            current = current.kind.nested()?.iter().find(|a| a.name == *name)?;
        }
        Some(current)
    }

    /// Total number of attributes in the tree, nested ones included
    pub fn len(&self) -> usize {
        fn count(attrs: &[Attribute]) -> usize {
            attrs.iter().map(|a| 1 + a.kind.nested().map_or(0, count)).sum()
        }
        count(&self.attributes)
    }

    /// Whether the schema declares no attributes
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Validate a configuration without translating it
    pub fn validate(&self, config: &Value) -> Diagnostics {
        match self.bind(config) {
            Ok(_) => Diagnostics::default(),
            Err(diags) => diags,
        }
    }

    /// Validate a configuration and translate it into manifest keys
    ///
    /// Unset (`null`) attributes and computed attributes are dropped. Every problem is collected
    /// before returning, so the error carries all diagnostics rather than just the first.
    pub fn bind(&self, config: &Value) -> Result<Value, Diagnostics> {
        bind::bind(&self.attributes, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new("widgets", vec![
            Attribute::computed_string("id"),
            Attribute::object("metadata", "metadata", vec![
                Attribute::string("name", "name").required(),
                Attribute::map("labels", "labels"),
            ])
            .required(),
            Attribute::object("spec", "spec", vec![Attribute::object_list(
                "ports",
                "ports",
                vec![Attribute::int64("container_port", "containerPort")],
            )]),
        ])
    }

    #[test]
    fn lookup_walks_nested_attributes() {
        let s = schema();
        assert_eq!(s.lookup(&["metadata", "name"]).unwrap().wire_name, "name");
        assert_eq!(
            s.lookup(&["spec", "ports", "container_port"]).unwrap().wire_name,
            "containerPort"
        );
        assert!(s.lookup(&["spec", "nope"]).is_none());
        assert!(s.lookup(&["id", "nested"]).is_none());
        assert!(s.lookup(&[]).is_none());
    }

    #[test]
    fn len_counts_nested_attributes() {
        assert_eq!(schema().len(), 7);
        assert!(!schema().is_empty());
    }

    #[test]
    fn builder_flags() {
        let s = schema();
        assert!(s.attribute("id").unwrap().is_computed());
        assert!(s.attribute("metadata").unwrap().is_required());
        assert_eq!(s.attribute("spec").unwrap().presence, Presence::Optional);
    }

    #[test]
    fn serializes_for_documentation() {
        let json = serde_json::to_value(schema()).unwrap();
        assert_eq!(json["attributes"][0]["presence"], "computed");
        assert_eq!(json["attributes"][1]["type"]["object"][0]["name"], "name");
        assert_eq!(json["attributes"][1]["type"]["object"][1]["type"], "map");
        assert!(json["attributes"][0].get("validators").is_none());
    }
}
