//! Schema fragments for Kubernetes API types embedded in custom resources
//!
//! Custom resources routinely embed core API types such as volumes, environment variables and
//! label selectors. The fragments here describe those types once; every data source reuses them.
//! The matching typed models come straight from `k8s-openapi`, re-exported below.

/// Re-export versioned modules under the client-go like names
#[rustfmt::skip]
pub use k8s_openapi::{
    api::core::v1 as corev1,
    apimachinery::pkg::apis::meta::v1 as metav1,
};

mod env;
pub use env::env_var;

mod meta;
pub use meta::{cluster_metadata, label_selector, local_object_reference};

mod volume;
pub use volume::{volume, volume_mount};
