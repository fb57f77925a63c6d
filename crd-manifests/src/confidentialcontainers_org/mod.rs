//! Custom resources of the `confidentialcontainers.org` API group
pub mod v1beta1;
