//! Metadata structs shared by every manifest.
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};

/// Type information that is flattened into every kubernetes object
#[derive(Deserialize, Serialize, Clone, Default, Debug, Eq, PartialEq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    /// The version of the API
    pub api_version: String,

    /// The name of the API
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_meta_uses_kubernetes_keys() {
        let tm = TypeMeta {
            api_version: "confidentialcontainers.org/v1beta1".into(),
            kind: "CcRuntime".into(),
        };
        let json = serde_json::to_value(&tm).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"apiVersion": "confidentialcontainers.org/v1beta1", "kind": "CcRuntime"})
        );
    }
}
