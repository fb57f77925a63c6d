//! `confidentialcontainers.org/v1beta1`
pub mod cc_runtime;
pub use cc_runtime::{
    CcInstallConfig, CcRuntime, CcRuntimeManifest, CcRuntimeSpec, InstallHook, InstallType, RuntimeClass,
    RuntimeName,
};
