//! The `CcRuntime` custom resource of the confidential containers operator
use std::{collections::BTreeMap, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::core::{
    k8s::{self, corev1, metav1},
    Attribute, ManifestDataSource, ManifestSpec, Manifest, Resource, Schema, Validator,
};

/// A complete `CcRuntime` manifest
pub type CcRuntime = Manifest<CcRuntimeSpec>;

/// Data source rendering `CcRuntime` manifests
pub type CcRuntimeManifest = ManifestDataSource<CcRuntimeSpec>;

/// CcRuntimeSpec defines the desired state of CcRuntime
///
/// Fields are declared in the order their manifest keys sort, which is the order they are emitted in.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CcRuntimeSpec {
    /// Worker nodes to deploy the runtime on, all worker nodes when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc_node_selector: Option<metav1::LabelSelector>,
    /// How the runtime is installed
    pub config: CcInstallConfig,
    /// Which runtime is installed
    pub runtime_name: RuntimeName,
}

impl Resource for CcRuntimeSpec {
    const GROUP: &'static str = "confidentialcontainers.org";
    const KIND: &'static str = "CcRuntime";
    const VERSION: &'static str = "v1beta1";
}

impl ManifestSpec for CcRuntimeSpec {
    fn schema() -> &'static Schema {
        &SCHEMA
    }
}

/// The runtime installed by a `CcRuntime`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuntimeName {
    /// Kata Containers
    #[serde(rename = "kata")]
    Kata,
    /// Enclave CC, for SGX enclaves
    #[serde(rename = "enclave-cc")]
    EnclaveCc,
}

/// The deployment type of a `CcRuntime`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InstallType {
    /// Artifacts are shipped in the payload image
    Bundle,
    /// Artifacts come from the node's operating system
    Osnative,
}

/// CcInstallConfig describes how the runtime is installed on the worker nodes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CcInstallConfig {
    /// Registry secret used to pull the container images
    #[serde(rename = "ImagePullSecret", default, skip_serializing_if = "Option::is_none")]
    pub image_pull_secret: Option<corev1::LocalObjectReference>,
    /// Command run to clean up the worker nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanup_cmd: Option<Vec<String>>,
    /// Run the runtime in debug mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    /// RuntimeClass aliased by the default `kata` RuntimeClass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_runtime_class_name: Option<String>,
    /// Environment variables of the installer daemonset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<Vec<corev1::EnvVar>>,
    /// Command run to install the runtime on the worker nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_cmd: Option<Vec<String>>,
    /// Label the installer adds to nodes once it is done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_done_label: Option<BTreeMap<String, String>>,
    /// Deployment type
    pub install_type: InstallType,
    /// Volume mounts of the installer pods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installer_volume_mounts: Option<Vec<corev1::VolumeMount>>,
    /// Volumes of the installer pods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installer_volumes: Option<Vec<corev1::Volume>>,
    /// Image carrying every runtime artifact: binaries, kernel, initrd and configuration
    pub payload_image: String,
    /// Daemonset run after uninstallation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_uninstall: Option<InstallHook>,
    /// Daemonset run before installation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_install: Option<InstallHook>,
    /// RuntimeClasses to create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime_classes: Option<Vec<RuntimeClass>>,
    /// Command run to uninstall the runtime from the worker nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uninstall_cmd: Option<Vec<String>>,
    /// Label the uninstaller adds to nodes once it is done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uninstall_done_label: Option<BTreeMap<String, String>>,
}

/// A daemonset run before installation or after uninstallation
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstallHook {
    /// Environment variables of the daemonset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<Vec<corev1::EnvVar>>,
    /// Pull spec of the daemonset image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Volume mounts of the daemonset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_mounts: Option<Vec<corev1::VolumeMount>>,
    /// Volumes of the daemonset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<corev1::Volume>>,
}

/// A RuntimeClass created for the installed runtime
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RuntimeClass {
    /// Name of the RuntimeClass
    pub name: String,
    /// Image pull type used by the RuntimeClass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulltype: Option<String>,
    /// Snapshotter used by the RuntimeClass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshotter: Option<String>,
}

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(
        "CcRuntime is the Schema for the ccruntimes API",
        vec![
            Attribute::computed_string("id").description("The name of the rendered object."),
            Attribute::object("metadata", "metadata", k8s::cluster_metadata())
                .required()
                .description("Data that helps uniquely identify this object. For more information see https://github.com/kubernetes/community/blob/master/contributors/devel/sig-architecture/api-conventions.md#metadata"),
            Attribute::object("spec", "spec", spec())
                .required()
                .description("CcRuntimeSpec defines the desired state of CcRuntime"),
            Attribute::computed_string("yaml").description("The generated manifest in YAML format."),
        ],
    )
});

fn spec() -> Vec<Attribute> {
    vec![
        Attribute::object("cc_node_selector", "ccNodeSelector", k8s::label_selector()).description(
            "CcNodeSelector is used to select the worker nodes to deploy the runtime if not specified, all the worker nodes are selected",
        ),
        Attribute::object("config", "config", install_config())
            .required()
            .description("CcInstallConfig is a placeholder struct"),
        Attribute::string("runtime_name", "runtimeName")
            .required()
            .description("CcRuntimeName is the name of the runtime to install")
            .validator(Validator::one_of(&["kata", "enclave-cc"])),
    ]
}

fn install_config() -> Vec<Attribute> {
    vec![
        Attribute::object("image_pull_secret", "ImagePullSecret", k8s::local_object_reference())
            .description("This specifies the registry secret to pull of the container images"),
        Attribute::list("cleanup_cmd", "cleanupCmd")
            .description("This specifies the command for cleanup on the worker nodes"),
        Attribute::bool("debug", "debug").description(
            "This specifies whether the CcRuntime (kata or enclave-cc) will be running on debug mode",
        ),
        Attribute::string("default_runtime_class_name", "defaultRuntimeClassName").description(
            "This specifies the RuntimeClass to be used as the default one If not set, the default 'kata' runtime class will NOT be created. Otherwise, the default 'kata' runtime class will be created as as 'alias' for the value set here",
        ),
        Attribute::object_list("environment_variables", "environmentVariables", k8s::env_var())
            .description("This specifies the environment variables required by the daemon set"),
        Attribute::list("install_cmd", "installCmd")
            .description("This specifies the command for installation of the runtime on the worker nodes"),
        Attribute::map("install_done_label", "installDoneLabel").description(
            "This specifies the label that the install daemonset adds to nodes when the installation is done",
        ),
        Attribute::string("install_type", "installType")
            .required()
            .description("This specifies the deployment type")
            .validator(Validator::one_of(&["bundle", "osnative"])),
        Attribute::object_list("installer_volume_mounts", "installerVolumeMounts", k8s::volume_mount())
            .description("This specifies volume mounts required for the installer pods"),
        Attribute::object_list("installer_volumes", "installerVolumes", k8s::volume())
            .description("This specifies volumes required for the installer pods"),
        Attribute::string("payload_image", "payloadImage").required().description(
            "This specifies the location of the container image with all artifacts (Cc runtime binaries, initrd, kernel, config etc)",
        ),
        Attribute::object("post_uninstall", "postUninstall", install_hook("postuninstall"))
            .description("This specifies the configuration for the post-uninstall daemonset"),
        Attribute::object("pre_install", "preInstall", install_hook("preinstall"))
            .description("This specifies the configuration for the pre-install daemonset"),
        Attribute::object_list("runtime_classes", "runtimeClasses", runtime_class())
            .description("This specifies the RuntimeClasses that needs to be created"),
        Attribute::list("uninstall_cmd", "uninstallCmd")
            .description("This specifies the command for uninstallation of the runtime on the worker nodes"),
        Attribute::map("uninstall_done_label", "uninstallDoneLabel").description(
            "This specifies the label that the uninstall daemonset adds to nodes when the uninstallation is done",
        ),
    ]
}

fn install_hook(daemonset: &'static str) -> Vec<Attribute> {
    let (env, image, mounts, volumes) = match daemonset {
        "preinstall" => (
            "This specifies the env variables for the pre-install daemon set",
            "This specifies the pull spec for the preinstall daemonset image",
            "This specifies volumeMounts required for the preinstall daemonset",
            "This specifies volumes required for the preinstall daemonset",
        ),
        _ => (
            "This specifies the env variables for the post-uninstall daemon set",
            "This specifies the pull spec for the postuninstall daemonset image",
            "This specifies volumeMounts required for the postuninstall daemonset",
            "This specifies volumes required for the postuninstall daemonset",
        ),
    };
    vec![
        Attribute::object_list("environment_variables", "environmentVariables", k8s::env_var()).description(env),
        Attribute::string("image", "image").description(image),
        Attribute::object_list("volume_mounts", "volumeMounts", k8s::volume_mount()).description(mounts),
        Attribute::object_list("volumes", "volumes", k8s::volume()).description(volumes),
    ]
}

fn runtime_class() -> Vec<Attribute> {
    vec![
        Attribute::string("name", "name")
            .required()
            .description("Name of the runtime class"),
        Attribute::string("pulltype", "pulltype").description("Pulltype to be used by the runtime class"),
        Attribute::string("snapshotter", "snapshotter")
            .description("Snapshotter to be used by the runtime class"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DataSource, Presence};
    use serde_json::json;

    fn wire_names(attrs: &[Attribute]) -> Vec<&'static str> {
        attrs.iter().map(|a| a.wire_name).collect()
    }

    #[test]
    fn type_name_suffix() {
        assert_eq!(
            CcRuntimeSpec::type_name_suffix(),
            "confidentialcontainers_org_cc_runtime_v1beta1_manifest"
        );
        assert_eq!(
            CcRuntimeManifest::new().type_name("k8s"),
            "k8s_confidentialcontainers_org_cc_runtime_v1beta1_manifest"
        );
    }

    #[test]
    fn required_attributes() {
        let schema = CcRuntimeSpec::schema();
        for path in [
            &["metadata"][..],
            &["metadata", "name"],
            &["spec"],
            &["spec", "runtime_name"],
            &["spec", "config"],
            &["spec", "config", "install_type"],
            &["spec", "config", "payload_image"],
            &["spec", "config", "runtime_classes", "name"],
            &["spec", "config", "installer_volumes", "name"],
            &["spec", "config", "installer_volume_mounts", "mount_path"],
            &["spec", "config", "pre_install", "environment_variables", "name"],
        ] {
            assert!(schema.lookup(path).unwrap().is_required(), "{path:?}");
        }
        assert_eq!(schema.attribute("id").unwrap().presence, Presence::Computed);
        assert_eq!(schema.attribute("yaml").unwrap().presence, Presence::Computed);
        assert!(!schema.lookup(&["spec", "cc_node_selector"]).unwrap().is_required());
    }

    #[test]
    fn schema_keys_follow_emitted_order() {
        let schema = CcRuntimeSpec::schema();
        let config = schema.lookup(&["spec", "config"]).unwrap().kind.nested().unwrap();
        let keys = wire_names(config);
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
        assert_eq!(keys[0], "ImagePullSecret");
    }

    #[test]
    fn model_emits_keys_in_schema_order() {
        let full = json!({
            "ImagePullSecret": {"name": "regcred"},
            "cleanupCmd": ["/opt/cleanup.sh"],
            "debug": true,
            "defaultRuntimeClassName": "kata-qemu",
            "environmentVariables": [{"name": "NODE", "value": "x"}],
            "installCmd": ["/opt/install.sh"],
            "installDoneLabel": {"katacontainers.io/kata-runtime": "true"},
            "installType": "bundle",
            "installerVolumeMounts": [{"mountPath": "/etc/containerd/", "name": "containerd-conf"}],
            "installerVolumes": [{"name": "containerd-conf", "hostPath": {"path": "/etc/containerd/"}}],
            "payloadImage": "quay.io/example:v1",
            "postUninstall": {"image": "quay.io/post:v1"},
            "preInstall": {"image": "quay.io/pre:v1"},
            "runtimeClasses": [{"name": "kata-qemu", "snapshotter": "nydus"}],
            "uninstallCmd": ["/opt/uninstall.sh"],
            "uninstallDoneLabel": {"katacontainers.io/kata-runtime": "cleanup"},
        });
        let config: CcInstallConfig = serde_json::from_value(full).unwrap();
        let yaml = serde_yaml::to_value(&config).unwrap();
        let emitted = yaml
            .as_mapping()
            .unwrap()
            .keys()
            .map(|k| k.as_str().unwrap().to_string())
            .collect::<Vec<_>>();
        let schema = CcRuntimeSpec::schema();
        let declared = wire_names(schema.lookup(&["spec", "config"]).unwrap().kind.nested().unwrap());
        assert_eq!(emitted, declared);
    }

    #[test]
    fn enums_use_manifest_spelling() {
        assert_eq!(serde_json::to_value(RuntimeName::EnclaveCc).unwrap(), "enclave-cc");
        assert_eq!(serde_json::to_value(InstallType::Osnative).unwrap(), "osnative");
        assert!(serde_json::from_value::<RuntimeName>(json!("runc")).is_err());
    }
}
