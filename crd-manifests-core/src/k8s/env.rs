use crate::schema::Attribute;

/// Attributes of an `EnvVar`
pub fn env_var() -> Vec<Attribute> {
    vec![
        Attribute::string("name", "name")
            .required()
            .description("Name of the environment variable. Must be a C_IDENTIFIER."),
        Attribute::string("value", "value")
            .description("Variable references $(VAR_NAME) are expanded using the previously defined environment variables in the container and any service environment variables. If a variable cannot be resolved, the reference in the input string will be unchanged. Double $$ are reduced to a single $, which allows for escaping the $(VAR_NAME) syntax. Defaults to ''."),
        Attribute::object("value_from", "valueFrom", env_var_source())
            .description("Source for the environment variable's value. Cannot be used if value is not empty."),
    ]
}

fn env_var_source() -> Vec<Attribute> {
    vec![
        Attribute::object("config_map_key_ref", "configMapKeyRef", key_selector("ConfigMap"))
            .description("Selects a key of a ConfigMap."),
        Attribute::object("field_ref", "fieldRef", object_field_selector())
            .description("Selects a field of the pod: supports metadata.name, metadata.namespace, metadata.labels['<KEY>'], metadata.annotations['<KEY>'], spec.nodeName, spec.serviceAccountName, status.hostIP, status.podIP, status.podIPs."),
        Attribute::object("resource_field_ref", "resourceFieldRef", resource_field_selector())
            .description("Selects a resource of the container: only resources limits and requests (limits.cpu, limits.memory, limits.ephemeral-storage, requests.cpu, requests.memory and requests.ephemeral-storage) are currently supported."),
        Attribute::object("secret_key_ref", "secretKeyRef", key_selector("Secret"))
            .description("Selects a key of a secret in the pod's namespace"),
    ]
}

fn key_selector(kind: &'static str) -> Vec<Attribute> {
    let (key, optional) = match kind {
        "Secret" => (
            "The key of the secret to select from. Must be a valid secret key.",
            "Specify whether the Secret or its key must be defined",
        ),
        _ => ("The key to select.", "Specify whether the ConfigMap or its key must be defined"),
    };
    vec![
        Attribute::string("key", "key").required().description(key),
        Attribute::string("name", "name").description(
            "Name of the referent. This field is effectively required, but due to backwards compatibility is allowed to be empty. More info: https://kubernetes.io/docs/concepts/overview/working-with-objects/names/#names",
        ),
        Attribute::bool("optional", "optional").description(optional),
    ]
}

/// Attributes of an `ObjectFieldSelector`
pub(super) fn object_field_selector() -> Vec<Attribute> {
    vec![
        Attribute::string("api_version", "apiVersion")
            .description("Version of the schema the FieldPath is written in terms of, defaults to 'v1'."),
        Attribute::string("field_path", "fieldPath")
            .required()
            .description("Path of the field to select in the specified API version."),
    ]
}

/// Attributes of a `ResourceFieldSelector`
pub(super) fn resource_field_selector() -> Vec<Attribute> {
    vec![
        Attribute::string("container_name", "containerName")
            .description("Container name: required for volumes, optional for env vars"),
        Attribute::string("divisor", "divisor")
            .description("Specifies the output format of the exposed resources, defaults to '1'"),
        Attribute::string("resource", "resource")
            .required()
            .description("Required: resource to select"),
    ]
}
