use crate::{schema::Attribute, validator::Validator};

/// `metadata` attributes of a cluster scoped object
pub fn cluster_metadata() -> Vec<Attribute> {
    vec![
        Attribute::string("name", "name")
            .required()
            .description("Unique identifier for this object. For more information see https://kubernetes.io/docs/concepts/overview/working-with-objects/names/#names")
            .validator(Validator::length_at_least(1))
            .validator(Validator::DnsSubdomain),
        Attribute::map("labels", "labels")
            .description("Keys and values that can be used to organize and categorize objects. For more information see https://kubernetes.io/docs/concepts/overview/working-with-objects/labels/")
            .validator(Validator::Labels),
        Attribute::map("annotations", "annotations")
            .description("Unstructured key value map stored with a resource that may be set by external tools to store and retrieve arbitrary metadata. For more information see https://kubernetes.io/docs/concepts/overview/working-with-objects/annotations/")
            .validator(Validator::Annotations),
    ]
}

/// Attributes of a `LocalObjectReference`
pub fn local_object_reference() -> Vec<Attribute> {
    vec![Attribute::string("name", "name").description(
        "Name of the referent. This field is effectively required, but due to backwards compatibility is allowed to be empty. More info: https://kubernetes.io/docs/concepts/overview/working-with-objects/names/#names",
    )]
}

/// Attributes of a `LabelSelector`
pub fn label_selector() -> Vec<Attribute> {
    vec![
        Attribute::object_list("match_expressions", "matchExpressions", vec![
            Attribute::string("key", "key")
                .required()
                .description("key is the label key that the selector applies to."),
            Attribute::string("operator", "operator")
                .required()
                .description("operator represents a key's relationship to a set of values. Valid operators are In, NotIn, Exists and DoesNotExist."),
            Attribute::list("values", "values")
                .description("values is an array of string values. If the operator is In or NotIn, the values array must be non-empty. If the operator is Exists or DoesNotExist, the values array must be empty."),
        ])
        .description("matchExpressions is a list of label selector requirements. The requirements are ANDed."),
        Attribute::map("match_labels", "matchLabels")
            .description("matchLabels is a map of {key,value} pairs. A single {key,value} in the matchLabels map is equivalent to an element of matchExpressions, whose key field is 'key', the operator is 'In', and the values array contains only 'value'. The requirements are ANDed."),
    ]
}

/// Attributes of an `ObjectMeta` embedded in a template, where every field is optional
pub(super) fn template_metadata() -> Vec<Attribute> {
    vec![
        Attribute::map("annotations", "annotations").description(
            "Annotations is an unstructured key value map stored with a resource that may be set by external tools to store and retrieve arbitrary metadata.",
        ),
        Attribute::map("labels", "labels").description(
            "Map of string keys and values that can be used to organize and categorize (scope and select) objects.",
        ),
        Attribute::string("name", "name").description("Name must be unique within a namespace."),
        Attribute::string("namespace", "namespace")
            .description("Namespace defines the space within which each name must be unique."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use serde_json::json;

    #[test]
    fn cluster_metadata_requires_a_valid_name() {
        let schema = Schema::new("m", cluster_metadata());
        assert!(schema.validate(&json!({"name": "example"})).is_empty());
        assert!(schema.validate(&json!({})).has_error());
        assert!(schema.validate(&json!({"name": "Not Valid"})).has_error());
        assert!(schema.validate(&json!({"name": "x", "namespace": "default"})).has_error());
    }
}
