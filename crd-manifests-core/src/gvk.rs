//! Type information for custom resources.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Core information about an API Resource.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupVersionKind {
    /// API group
    pub group: String,
    /// Version
    pub version: String,
    /// Kind
    pub kind: String,
}

impl GroupVersionKind {
    /// Construct from explicit group, version, and kind
    pub fn gvk(group_: &str, version_: &str, kind_: &str) -> Self {
        let version = version_.to_string();
        let group = group_.to_string();
        let kind = kind_.to_string();

        Self { group, version, kind }
    }

    /// Generate the apiVersion string used in a kind's yaml
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    /// The data source name for manifests of this kind, without the provider prefix
    ///
    /// `confidentialcontainers.org/v1beta1 CcRuntime` becomes
    /// `confidentialcontainers_org_cc_runtime_v1beta1_manifest`.
    pub fn manifest_type_name(&self) -> String {
        let mut parts = Vec::with_capacity(4);
        if !self.group.is_empty() {
            parts.push(self.group.replace(['.', '-'], "_"));
        }
        parts.push(snake_case(&self.kind));
        parts.push(self.version.clone());
        parts.push("manifest".to_string());
        parts.join("_")
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.api_version(), self.kind)
    }
}

// Acronym runs stay together: `KBSConfig` -> `kbs_config`
fn snake_case(camel: &str) -> String {
    let chars = camel.chars().collect::<Vec<_>>();
    let mut out = String::with_capacity(camel.len() + 4);
    for (i, c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() || (prev.is_ascii_uppercase() && next_lower) {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}
