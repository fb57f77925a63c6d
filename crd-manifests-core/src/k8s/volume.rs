use super::{
    env::{object_field_selector, resource_field_selector},
    meta::{label_selector, local_object_reference, template_metadata},
};
use crate::schema::Attribute;

const FS_TYPE: &str = "fsType is the filesystem type of the volume that you want to mount. Tip: Ensure that the filesystem type is supported by the host operating system. Examples: 'ext4', 'xfs', 'ntfs'. Implicitly inferred to be 'ext4' if unspecified.";
const READ_ONLY: &str = "readOnly here will force the ReadOnly setting in VolumeMounts. Defaults to false.";
const SECRET_REF: &str = "secretRef is a reference to the secret object containing sensitive information to pass to the plugin scripts. This may be empty if no secret object is specified.";
const DEFAULT_MODE: &str = "defaultMode is optional: mode bits used to set permissions on created files by default. Must be an octal value between 0000 and 0777 or a decimal value between 0 and 511. Defaults to 0644. Directories within the path are not affected by this setting.";
const PARTITION: &str = "partition is the partition in the volume that you want to mount. If omitted, the default is to mount by volume name. Examples: For volume /dev/sda1, you specify the partition as '1'.";

fn fs_type() -> Attribute {
    Attribute::string("fs_type", "fsType").description(FS_TYPE)
}

fn read_only() -> Attribute {
    Attribute::bool("read_only", "readOnly").description(READ_ONLY)
}

fn secret_ref() -> Attribute {
    Attribute::object("secret_ref", "secretRef", local_object_reference()).description(SECRET_REF)
}

fn default_mode() -> Attribute {
    Attribute::int32("default_mode", "defaultMode").description(DEFAULT_MODE)
}

/// Attributes of a `VolumeMount`
pub fn volume_mount() -> Vec<Attribute> {
    vec![
        Attribute::string("mount_path", "mountPath")
            .required()
            .description("Path within the container at which the volume should be mounted. Must not contain ':'."),
        Attribute::string("mount_propagation", "mountPropagation")
            .description("mountPropagation determines how mounts are propagated from the host to container and the other way around. When not set, MountPropagationNone is used. This field is beta in 1.10. When RecursiveReadOnly is set to IfPossible or to Enabled, MountPropagation must be None or unspecified (which defaults to None)."),
        Attribute::string("name", "name")
            .required()
            .description("This must match the Name of a Volume."),
        Attribute::bool("read_only", "readOnly")
            .description("Mounted read-only if true, read-write otherwise (false or unspecified). Defaults to false."),
        Attribute::string("recursive_read_only", "recursiveReadOnly")
            .description("RecursiveReadOnly specifies whether read-only mounts should be handled recursively. If ReadOnly is false, this field has no meaning and must be unspecified. Valid values are Disabled, IfPossible and Enabled."),
        Attribute::string("sub_path", "subPath")
            .description("Path within the volume from which the container's volume should be mounted. Defaults to '' (volume's root)."),
        Attribute::string("sub_path_expr", "subPathExpr")
            .description("Expanded path within the volume from which the container's volume should be mounted. Behaves similarly to SubPath but environment variable references $(VAR_NAME) are expanded using the container's environment. Defaults to '' (volume's root). SubPathExpr and SubPath are mutually exclusive."),
    ]
}

/// Attributes of a `Volume`, with every volume source
pub fn volume() -> Vec<Attribute> {
    vec![
        Attribute::object("aws_elastic_block_store", "awsElasticBlockStore", vec![
            fs_type(),
            Attribute::int32("partition", "partition").description(PARTITION),
            Attribute::bool("read_only", "readOnly")
                .description("readOnly value true will force the readOnly setting in VolumeMounts."),
            Attribute::string("volume_id", "volumeID")
                .required()
                .description("volumeID is unique ID of the persistent disk resource in AWS (Amazon EBS volume)."),
        ])
        .description("awsElasticBlockStore represents an AWS Disk resource that is attached to a kubelet's host machine and then exposed to the pod. Deprecated: AWSElasticBlockStore is deprecated."),
        Attribute::object("azure_disk", "azureDisk", vec![
            Attribute::string("caching_mode", "cachingMode")
                .description("cachingMode is the Host Caching mode: None, Read Only, Read Write."),
            Attribute::string("disk_name", "diskName")
                .required()
                .description("diskName is the Name of the data disk in the blob storage"),
            Attribute::string("disk_uri", "diskURI")
                .required()
                .description("diskURI is the URI of data disk in the blob storage"),
            fs_type(),
            Attribute::string("kind", "kind")
                .description("kind expected values are Shared: multiple blob disks per storage account, Dedicated: single blob disk per storage account, Managed: azure managed data disk (only in managed availability set). defaults to shared"),
            read_only(),
        ])
        .description("azureDisk represents an Azure Data Disk mount on the host and bind mount to the pod. Deprecated: AzureDisk is deprecated."),
        Attribute::object("azure_file", "azureFile", vec![
            read_only(),
            Attribute::string("secret_name", "secretName")
                .required()
                .description("secretName is the name of secret that contains Azure Storage Account Name and Key"),
            Attribute::string("share_name", "shareName")
                .required()
                .description("shareName is the azure share Name"),
        ])
        .description("azureFile represents an Azure File Service mount on the host and bind mount to the pod. Deprecated: AzureFile is deprecated."),
        Attribute::object("cephfs", "cephfs", vec![
            Attribute::list("monitors", "monitors")
                .required()
                .description("monitors is Required: Monitors is a collection of Ceph monitors"),
            Attribute::string("path", "path")
                .description("path is Optional: Used as the mounted root, rather than the full Ceph tree, default is /"),
            read_only(),
            Attribute::string("secret_file", "secretFile")
                .description("secretFile is Optional: SecretFile is the path to key ring for User, default is /etc/ceph/user.secret"),
            secret_ref(),
            Attribute::string("user", "user")
                .description("user is optional: User is the rados user name, default is admin"),
        ])
        .description("cephFS represents a Ceph FS mount on the host that shares a pod's lifetime. Deprecated: CephFS is deprecated and the in-tree cephfs type is no longer supported."),
        Attribute::object("cinder", "cinder", vec![
            fs_type(),
            read_only(),
            secret_ref(),
            Attribute::string("volume_id", "volumeID")
                .required()
                .description("volumeID used to identify the volume in cinder."),
        ])
        .description("cinder represents a cinder volume attached and mounted on kubelets host machine. Deprecated: Cinder is deprecated."),
        Attribute::object("config_map", "configMap", vec![
            default_mode(),
            Attribute::object_list("items", "items", key_to_path())
                .description("items if unspecified, each key-value pair in the Data field of the referenced ConfigMap will be projected into the volume as a file whose name is the key and content is the value. If specified, the listed keys will be projected into the specified paths, and unlisted keys will not be present."),
            Attribute::string("name", "name").description("Name of the referent."),
            Attribute::bool("optional", "optional")
                .description("optional specify whether the ConfigMap or its keys must be defined"),
        ])
        .description("configMap represents a configMap that should populate this volume"),
        Attribute::object("csi", "csi", vec![
            Attribute::string("driver", "driver")
                .required()
                .description("driver is the name of the CSI driver that handles this volume. Consult with your admin for the correct name as registered in the cluster."),
            Attribute::string("fs_type", "fsType")
                .description("fsType to mount. Ex. 'ext4', 'xfs', 'ntfs'. If not provided, the empty value is passed to the associated CSI driver which will determine the default filesystem to apply."),
            Attribute::object("node_publish_secret_ref", "nodePublishSecretRef", local_object_reference())
                .description("nodePublishSecretRef is a reference to the secret object containing sensitive information to pass to the CSI driver to complete the CSI NodePublishVolume and NodeUnpublishVolume calls."),
            Attribute::bool("read_only", "readOnly")
                .description("readOnly specifies a read-only configuration for the volume. Defaults to false (read/write)."),
            Attribute::map("volume_attributes", "volumeAttributes")
                .description("volumeAttributes stores driver-specific properties that are passed to the CSI driver. Consult your driver's documentation for supported values."),
        ])
        .description("csi (Container Storage Interface) represents ephemeral storage that is handled by certain external CSI drivers."),
        Attribute::object("downward_api", "downwardAPI", vec![
            default_mode(),
            Attribute::object_list("items", "items", downward_api_volume_file())
                .description("Items is a list of downward API volume file"),
        ])
        .description("downwardAPI represents downward API about the pod that should populate this volume"),
        Attribute::object("empty_dir", "emptyDir", vec![
            Attribute::string("medium", "medium")
                .description("medium represents what type of storage medium should back this directory. The default is '' which means to use the node's default medium. Must be an empty string (default) or Memory."),
            Attribute::string("size_limit", "sizeLimit")
                .description("sizeLimit is the total amount of local storage required for this EmptyDir volume. The size limit is also applicable for memory medium. The default is nil which means that the limit is undefined."),
        ])
        .description("emptyDir represents a temporary directory that shares a pod's lifetime."),
        Attribute::object("ephemeral", "ephemeral", vec![Attribute::object(
            "volume_claim_template",
            "volumeClaimTemplate",
            vec![
                Attribute::object("metadata", "metadata", template_metadata())
                    .description("May contain labels and annotations that will be copied into the PVC when creating it. No other fields are allowed and will be rejected during validation."),
                Attribute::object("spec", "spec", persistent_volume_claim_spec())
                    .required()
                    .description("The specification for the PersistentVolumeClaim. The entire content is copied unchanged into the PVC that gets created from this template. The same fields as in a PersistentVolumeClaim are also valid here."),
            ],
        )
        .description("Will be used to create a stand-alone PVC to provision the volume. The pod in which this EphemeralVolumeSource is embedded will be the owner of the PVC, i.e. the PVC will be deleted together with the pod.")])
        .description("ephemeral represents a volume that is handled by a cluster storage driver. The volume's lifecycle is tied to the pod that defines it - it will be created before the pod starts, and deleted when the pod is removed."),
        Attribute::object("fc", "fc", vec![
            fs_type(),
            Attribute::int32("lun", "lun").description("lun is Optional: FC target lun number"),
            read_only(),
            Attribute::list("target_ww_ns", "targetWWNs")
                .description("targetWWNs is Optional: FC target worldwide names (WWNs)"),
            Attribute::list("wwids", "wwids").description(
                "wwids Optional: FC volume world wide identifiers (wwids) Either wwids or combination of targetWWNs and lun must be set, but not both simultaneously.",
            ),
        ])
        .description("fc represents a Fibre Channel resource that is attached to a kubelet's host machine and then exposed to the pod."),
        Attribute::object("flex_volume", "flexVolume", vec![
            Attribute::string("driver", "driver")
                .required()
                .description("driver is the name of the driver to use for this volume."),
            fs_type(),
            Attribute::map("options", "options")
                .description("options is Optional: this field holds extra command options if any."),
            read_only(),
            secret_ref(),
        ])
        .description("flexVolume represents a generic volume resource that is provisioned/attached using an exec based plugin. Deprecated: FlexVolume is deprecated."),
        Attribute::object("flocker", "flocker", vec![
            Attribute::string("dataset_name", "datasetName").description(
                "datasetName is Name of the dataset stored as metadata -> name on the dataset for Flocker should be considered as deprecated",
            ),
            Attribute::string("dataset_uuid", "datasetUUID")
                .description("datasetUUID is the UUID of the dataset. This is unique identifier of a Flocker dataset"),
        ])
        .description("flocker represents a Flocker volume attached to a kubelet's host machine. This depends on the Flocker control service being running. Deprecated: Flocker is deprecated and the in-tree flocker type is no longer supported."),
        Attribute::object("gce_persistent_disk", "gcePersistentDisk", vec![
            fs_type(),
            Attribute::int32("partition", "partition").description(PARTITION),
            Attribute::string("pd_name", "pdName")
                .required()
                .description("pdName is unique name of the PD resource in GCE. Used to identify the disk in GCE."),
            Attribute::bool("read_only", "readOnly").description(READ_ONLY),
        ])
        .description("gcePersistentDisk represents a GCE Disk resource that is attached to a kubelet's host machine and then exposed to the pod. Deprecated: GCEPersistentDisk is deprecated."),
        Attribute::object("git_repo", "gitRepo", vec![
            Attribute::string("directory", "directory")
                .description("directory is the target directory name. Must not contain or start with '..'. If '.' is supplied, the volume directory will be the git repository."),
            Attribute::string("repository", "repository")
                .required()
                .description("repository is the URL"),
            Attribute::string("revision", "revision")
                .description("revision is the commit hash for the specified revision."),
        ])
        .description("gitRepo represents a git repository at a particular revision. Deprecated: GitRepo is deprecated. To provision a container with a git repo, mount an EmptyDir into an InitContainer that clones the repo using git, then mount the EmptyDir into the Pod's container."),
        Attribute::object("glusterfs", "glusterfs", vec![
            Attribute::string("endpoints", "endpoints")
                .required()
                .description("endpoints is the endpoint name that details Glusterfs topology."),
            Attribute::string("path", "path")
                .required()
                .description("path is the Glusterfs volume path."),
            Attribute::bool("read_only", "readOnly").description(
                "readOnly here will force the Glusterfs volume to be mounted with read-only permissions. Defaults to false.",
            ),
        ])
        .description("glusterfs represents a Glusterfs mount on the host that shares a pod's lifetime. Deprecated: Glusterfs is deprecated and the in-tree glusterfs type is no longer supported."),
        Attribute::object("host_path", "hostPath", vec![
            Attribute::string("path", "path")
                .required()
                .description("path of the directory on the host. If the path is a symlink, it will follow the link to the real path."),
            Attribute::string("type", "type")
                .description("type for HostPath Volume Defaults to ''"),
        ])
        .description("hostPath represents a pre-existing file or directory on the host machine that is directly exposed to the container. This is generally used for system agents or other privileged things that are allowed to see the host machine."),
        Attribute::object("image", "image", vec![
            Attribute::string("pull_policy", "pullPolicy")
                .description("Policy for pulling OCI objects. Possible values are: Always, Never, IfNotPresent. Defaults to Always if :latest tag is specified, or IfNotPresent otherwise."),
            Attribute::string("reference", "reference")
                .description("Required: Image or artifact reference to be used. Behaves in the same way as pod.spec.containers[*].image."),
        ])
        .description("image represents an OCI object (a container image or artifact) pulled and mounted on the kubelet's host machine."),
        Attribute::object("iscsi", "iscsi", vec![
            Attribute::bool("chap_auth_discovery", "chapAuthDiscovery")
                .description("chapAuthDiscovery defines whether support iSCSI Discovery CHAP authentication"),
            Attribute::bool("chap_auth_session", "chapAuthSession")
                .description("chapAuthSession defines whether support iSCSI Session CHAP authentication"),
            fs_type(),
            Attribute::string("initiator_name", "initiatorName").description(
                "initiatorName is the custom iSCSI Initiator Name. If initiatorName is specified with iscsiInterface simultaneously, new iSCSI interface <target portal>:<volume name> will be created for the connection.",
            ),
            Attribute::string("iqn", "iqn")
                .required()
                .description("iqn is the target iSCSI Qualified Name."),
            Attribute::string("iscsi_interface", "iscsiInterface").description(
                "iscsiInterface is the interface Name that uses an iSCSI transport. Defaults to 'default' (tcp).",
            ),
            Attribute::int32("lun", "lun")
                .required()
                .description("lun represents iSCSI Target Lun number."),
            Attribute::list("portals", "portals").description(
                "portals is the iSCSI Target Portal List. The portal is either an IP or ip_addr:port if the port is other than default (typically TCP ports 860 and 3260).",
            ),
            Attribute::bool("read_only", "readOnly")
                .description("readOnly here will force the ReadOnly setting in VolumeMounts. Defaults to false."),
            Attribute::object("secret_ref", "secretRef", local_object_reference())
                .description("secretRef is the CHAP Secret for iSCSI target and initiator authentication"),
            Attribute::string("target_portal", "targetPortal").required().description(
                "targetPortal is iSCSI Target Portal. The Portal is either an IP or ip_addr:port if the port is other than default (typically TCP ports 860 and 3260).",
            ),
        ])
        .description("iscsi represents an ISCSI Disk resource that is attached to a kubelet's host machine and then exposed to the pod."),
        Attribute::string("name", "name")
            .required()
            .description("name of the volume. Must be a DNS_LABEL and unique within the pod."),
        Attribute::object("nfs", "nfs", vec![
            Attribute::string("path", "path")
                .required()
                .description("path that is exported by the NFS server."),
            Attribute::bool("read_only", "readOnly").description(
                "readOnly here will force the NFS export to be mounted with read-only permissions. Defaults to false.",
            ),
            Attribute::string("server", "server")
                .required()
                .description("server is the hostname or IP address of the NFS server."),
        ])
        .description("nfs represents an NFS mount on the host that shares a pod's lifetime"),
        Attribute::object("persistent_volume_claim", "persistentVolumeClaim", vec![
            Attribute::string("claim_name", "claimName").required().description(
                "claimName is the name of a PersistentVolumeClaim in the same namespace as the pod using this volume.",
            ),
            Attribute::bool("read_only", "readOnly")
                .description("readOnly Will force the ReadOnly setting in VolumeMounts. Default false."),
        ])
        .description("persistentVolumeClaimVolumeSource represents a reference to a PersistentVolumeClaim in the same namespace."),
        Attribute::object("photon_persistent_disk", "photonPersistentDisk", vec![
            fs_type(),
            Attribute::string("pd_id", "pdID")
                .required()
                .description("pdID is the ID that identifies Photon Controller persistent disk"),
        ])
        .description("photonPersistentDisk represents a PhotonController persistent disk attached and mounted on kubelets host machine. Deprecated: PhotonPersistentDisk is deprecated and the in-tree photonPersistentDisk type is no longer supported."),
        Attribute::object("portworx_volume", "portworxVolume", vec![
            fs_type(),
            read_only(),
            Attribute::string("volume_id", "volumeID")
                .required()
                .description("volumeID uniquely identifies a Portworx volume"),
        ])
        .description("portworxVolume represents a portworx volume attached and mounted on kubelets host machine. Deprecated: PortworxVolume is deprecated."),
        Attribute::object("projected", "projected", vec![
            default_mode(),
            Attribute::object_list("sources", "sources", volume_projection())
                .description("sources is the list of volume projections. Each entry in this list handles one source."),
        ])
        .description("projected items for all in one resources secrets, configmaps, and downward API"),
        Attribute::object("quobyte", "quobyte", vec![
            Attribute::string("group", "group").description("group to map volume access to Default is no group"),
            Attribute::bool("read_only", "readOnly").description(
                "readOnly here will force the Quobyte volume to be mounted with read-only permissions. Defaults to false.",
            ),
            Attribute::string("registry", "registry").required().description(
                "registry represents a single or multiple Quobyte Registry services specified as a string as host:port pair (multiple entries are separated with commas) which acts as the central registry for volumes",
            ),
            Attribute::string("tenant", "tenant").description(
                "tenant owning the given Quobyte volume in the Backend Used with dynamically provisioned Quobyte volumes, value is set by the plugin",
            ),
            Attribute::string("user", "user")
                .description("user to map volume access to Defaults to serivceaccount user"),
            Attribute::string("volume", "volume")
                .required()
                .description("volume is a string that references an already created Quobyte volume by name."),
        ])
        .description("quobyte represents a Quobyte mount on the host that shares a pod's lifetime. Deprecated: Quobyte is deprecated and the in-tree quobyte type is no longer supported."),
        Attribute::object("rbd", "rbd", vec![
            fs_type(),
            Attribute::string("image", "image")
                .required()
                .description("image is the rados image name."),
            Attribute::string("keyring", "keyring").description(
                "keyring is the path to key ring for RBDUser. Default is /etc/ceph/keyring.",
            ),
            Attribute::list("monitors", "monitors")
                .required()
                .description("monitors is a collection of Ceph monitors."),
            Attribute::string("pool", "pool")
                .description("pool is the rados pool name. Default is rbd."),
            read_only(),
            Attribute::object("secret_ref", "secretRef", local_object_reference()).description(
                "secretRef is name of the authentication secret for RBDUser. If provided overrides keyring. Default is nil.",
            ),
            Attribute::string("user", "user")
                .description("user is the rados user name. Default is admin."),
        ])
        .description("rbd represents a Rados Block Device mount on the host that shares a pod's lifetime. Deprecated: RBD is deprecated and the in-tree rbd type is no longer supported."),
        Attribute::object("scale_io", "scaleIO", vec![
            Attribute::string("fs_type", "fsType").description(
                "fsType is the filesystem type to mount. Must be a filesystem type supported by the host operating system. Ex. 'ext4', 'xfs', 'ntfs'. Default is 'xfs'.",
            ),
            Attribute::string("gateway", "gateway")
                .required()
                .description("gateway is the host address of the ScaleIO API Gateway."),
            Attribute::string("protection_domain", "protectionDomain").description(
                "protectionDomain is the name of the ScaleIO Protection Domain for the configured storage.",
            ),
            read_only(),
            Attribute::object("secret_ref", "secretRef", local_object_reference())
                .required()
                .description("secretRef references to the secret for ScaleIO user and other sensitive information. If this is not provided, Login operation will fail."),
            Attribute::bool("ssl_enabled", "sslEnabled").description(
                "sslEnabled Flag enable/disable SSL communication with Gateway, default false",
            ),
            Attribute::string("storage_mode", "storageMode").description(
                "storageMode indicates whether the storage for a volume should be ThickProvisioned or ThinProvisioned. Default is ThinProvisioned.",
            ),
            Attribute::string("storage_pool", "storagePool").description(
                "storagePool is the ScaleIO Storage Pool associated with the protection domain.",
            ),
            Attribute::string("system", "system")
                .required()
                .description("system is the name of the storage system as configured in ScaleIO."),
            Attribute::string("volume_name", "volumeName").description(
                "volumeName is the name of a volume already created in the ScaleIO system that is associated with this volume source.",
            ),
        ])
        .description("scaleIO represents a ScaleIO persistent volume attached and mounted on Kubernetes nodes. Deprecated: ScaleIO is deprecated and the in-tree scaleIO type is no longer supported."),
        Attribute::object("secret", "secret", vec![
            default_mode(),
            Attribute::object_list("items", "items", key_to_path()).description(
                "items If unspecified, each key-value pair in the Data field of the referenced Secret will be projected into the volume as a file whose name is the key and content is the value. If specified, the listed keys will be projected into the specified paths, and unlisted keys will not be present.",
            ),
            Attribute::bool("optional", "optional")
                .description("optional field specify whether the Secret or its keys must be defined"),
            Attribute::string("secret_name", "secretName").description(
                "secretName is the name of the secret in the pod's namespace to use. More info: https://kubernetes.io/docs/concepts/storage/volumes#secret",
            ),
        ])
        .description("secret represents a secret that should populate this volume. More info: https://kubernetes.io/docs/concepts/storage/volumes#secret"),
        Attribute::object("storageos", "storageos", vec![
            fs_type(),
            read_only(),
            Attribute::object("secret_ref", "secretRef", local_object_reference()).description(
                "secretRef specifies the secret to use for obtaining the StorageOS API credentials. If not specified, default values will be attempted.",
            ),
            Attribute::string("volume_name", "volumeName").description(
                "volumeName is the human-readable name of the StorageOS volume. Volume names are only unique within a namespace.",
            ),
            Attribute::string("volume_namespace", "volumeNamespace").description(
                "volumeNamespace specifies the scope of the volume within StorageOS. If no namespace is specified then the Pod's namespace will be used.",
            ),
        ])
        .description("storageOS represents a StorageOS volume attached and mounted on Kubernetes nodes. Deprecated: StorageOS is deprecated and the in-tree storageos type is no longer supported."),
        Attribute::object("vsphere_volume", "vsphereVolume", vec![
            fs_type(),
            Attribute::string("storage_policy_id", "storagePolicyID").description(
                "storagePolicyID is the storage Policy Based Management (SPBM) profile ID associated with the StoragePolicyName.",
            ),
            Attribute::string("storage_policy_name", "storagePolicyName")
                .description("storagePolicyName is the storage Policy Based Management (SPBM) profile name."),
            Attribute::string("volume_path", "volumePath")
                .required()
                .description("volumePath is the path that identifies vSphere volume vmdk"),
        ])
        .description("vsphereVolume represents a vSphere volume attached and mounted on kubelets host machine. Deprecated: VsphereVolume is deprecated."),
    ]
}

fn key_to_path() -> Vec<Attribute> {
    vec![
        Attribute::string("key", "key")
            .required()
            .description("key is the key to project."),
        Attribute::int32("mode", "mode").description(
            "mode is Optional: mode bits used to set permissions on this file. Must be an octal value between 0000 and 0777 or a decimal value between 0 and 511. If not specified, the volume defaultMode will be used.",
        ),
        Attribute::string("path", "path").required().description(
            "path is the relative path of the file to map the key to. May not be an absolute path. May not contain the path element '..'. May not start with the string '..'.",
        ),
    ]
}

fn downward_api_volume_file() -> Vec<Attribute> {
    vec![
        Attribute::object("field_ref", "fieldRef", object_field_selector()).description(
            "Required: Selects a field of the pod: only annotations, labels, name, namespace and uid are supported.",
        ),
        Attribute::int32("mode", "mode").description(
            "Optional: mode bits used to set permissions on this file, must be an octal value between 0000 and 0777 or a decimal value between 0 and 511. If not specified, the volume defaultMode will be used.",
        ),
        Attribute::string("path", "path").required().description(
            "Required: Path is the relative path name of the file to be created. Must not be absolute or contain the '..' path. Must be utf-8 encoded. The first item of the relative path must not start with '..'",
        ),
        Attribute::object("resource_field_ref", "resourceFieldRef", resource_field_selector()).description(
            "Selects a resource of the container: only resources limits and requests (limits.cpu, limits.memory, requests.cpu and requests.memory) are currently supported.",
        ),
    ]
}

fn volume_projection() -> Vec<Attribute> {
    vec![
        Attribute::object("cluster_trust_bundle", "clusterTrustBundle", vec![
            Attribute::object("label_selector", "labelSelector", label_selector()).description(
                "Select all ClusterTrustBundles that match this label selector. Only has effect if signerName is set. Mutually-exclusive with name.",
            ),
            Attribute::string("name", "name").description(
                "Select a single ClusterTrustBundle by object name. Mutually-exclusive with signerName and labelSelector.",
            ),
            Attribute::bool("optional", "optional").description(
                "If true, don't block pod startup if the referenced ClusterTrustBundle(s) aren't available. If using name, then the named ClusterTrustBundle is allowed not to exist.",
            ),
            Attribute::string("path", "path")
                .required()
                .description("Relative path from the volume root to write the bundle."),
            Attribute::string("signer_name", "signerName").description(
                "Select all ClusterTrustBundles that match this signer name. Mutually-exclusive with name. The contents of all selected ClusterTrustBundles will be unified and deduplicated.",
            ),
        ])
        .description("ClusterTrustBundle allows a pod to access the '.spec.trustBundle' field of ClusterTrustBundle objects in an auto-updating file."),
        Attribute::object("config_map", "configMap", vec![
            Attribute::object_list("items", "items", key_to_path()).description(
                "items if unspecified, each key-value pair in the Data field of the referenced ConfigMap will be projected into the volume as a file whose name is the key and content is the value.",
            ),
            Attribute::string("name", "name").description("Name of the referent."),
            Attribute::bool("optional", "optional")
                .description("optional specify whether the ConfigMap or its keys must be defined"),
        ])
        .description("configMap information about the configMap data to project"),
        Attribute::object("downward_api", "downwardAPI", vec![Attribute::object_list(
            "items",
            "items",
            downward_api_volume_file(),
        )
        .description("Items is a list of DownwardAPIVolume file")])
        .description("downwardAPI information about the downwardAPI data to project"),
        Attribute::object("secret", "secret", vec![
            Attribute::object_list("items", "items", key_to_path()).description(
                "items if unspecified, each key-value pair in the Data field of the referenced Secret will be projected into the volume as a file whose name is the key and content is the value.",
            ),
            Attribute::string("name", "name").description("Name of the referent."),
            Attribute::bool("optional", "optional")
                .description("optional field specify whether the Secret or its key must be defined"),
        ])
        .description("secret information about the secret data to project"),
        Attribute::object("service_account_token", "serviceAccountToken", vec![
            Attribute::string("audience", "audience").description(
                "audience is the intended audience of the token. A recipient of a token must identify itself with an identifier specified in the audience of the token, and otherwise should reject the token. The audience defaults to the identifier of the apiserver.",
            ),
            Attribute::int64("expiration_seconds", "expirationSeconds").description(
                "expirationSeconds is the requested duration of validity of the service account token. The kubelet will start trying to rotate the token if the token is older than 80 percent of its time to live or if the token is older than 24 hours. Defaults to 1 hour and must be at least 10 minutes.",
            ),
            Attribute::string("path", "path").required().description(
                "path is the path relative to the mount point of the file to project the token into.",
            ),
        ])
        .description("serviceAccountToken is information about the serviceAccountToken data to project"),
    ]
}

fn persistent_volume_claim_spec() -> Vec<Attribute> {
    vec![
        Attribute::list("access_modes", "accessModes").description(
            "accessModes contains the desired access modes the volume should have. More info: https://kubernetes.io/docs/concepts/storage/persistent-volumes#access-modes-1",
        ),
        Attribute::object("data_source", "dataSource", vec![
            Attribute::string("api_group", "apiGroup").description(
                "APIGroup is the group for the resource being referenced. If APIGroup is not specified, the specified Kind must be in the core API group.",
            ),
            Attribute::string("kind", "kind")
                .required()
                .description("Kind is the type of resource being referenced"),
            Attribute::string("name", "name")
                .required()
                .description("Name is the name of resource being referenced"),
        ])
        .description("dataSource field can be used to specify either an existing VolumeSnapshot object (snapshot.storage.k8s.io/VolumeSnapshot), an existing PVC (PersistentVolumeClaim) or an existing custom resource that implements data population."),
        Attribute::object("data_source_ref", "dataSourceRef", vec![
            Attribute::string("api_group", "apiGroup").description(
                "APIGroup is the group for the resource being referenced. If APIGroup is not specified, the specified Kind must be in the core API group.",
            ),
            Attribute::string("kind", "kind")
                .required()
                .description("Kind is the type of resource being referenced"),
            Attribute::string("name", "name")
                .required()
                .description("Name is the name of resource being referenced"),
            Attribute::string("namespace", "namespace").description(
                "Namespace is the namespace of resource being referenced. A ReferenceGrant object is required in the referent namespace to allow that namespace's owner to accept the reference.",
            ),
        ])
        .description("dataSourceRef specifies the object from which to populate the volume with data, if a non-empty volume is desired. This may be any object from a non-empty API group (non core object) or a PersistentVolumeClaim object."),
        Attribute::object("resources", "resources", vec![
            Attribute::map("limits", "limits").description(
                "Limits describes the maximum amount of compute resources allowed. More info: https://kubernetes.io/docs/concepts/configuration/manage-resources-containers/",
            ),
            Attribute::map("requests", "requests").description(
                "Requests describes the minimum amount of compute resources required. If Requests is omitted for a container, it defaults to Limits if that is explicitly specified, otherwise to an implementation-defined value.",
            ),
        ])
        .description("resources represents the minimum resources the volume should have. More info: https://kubernetes.io/docs/concepts/storage/persistent-volumes#resources"),
        Attribute::object("selector", "selector", label_selector())
            .description("selector is a label query over volumes to consider for binding."),
        Attribute::string("storage_class_name", "storageClassName").description(
            "storageClassName is the name of the StorageClass required by the claim. More info: https://kubernetes.io/docs/concepts/storage/persistent-volumes#class-1",
        ),
        Attribute::string("volume_attributes_class_name", "volumeAttributesClassName").description(
            "volumeAttributesClassName may be used to set the VolumeAttributesClass used by this claim. If specified, the CSI driver will create or update the volume with the attributes defined in the corresponding VolumeAttributesClass.",
        ),
        Attribute::string("volume_mode", "volumeMode").description(
            "volumeMode defines what type of volume is required by the claim. Value of Filesystem is implied when not included in claim spec.",
        ),
        Attribute::string("volume_name", "volumeName")
            .description("volumeName is the binding reference to the PersistentVolume backing this claim."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeType, Schema};

    fn names(attrs: &[Attribute]) -> Vec<&'static str> {
        attrs.iter().map(|a| a.wire_name).collect()
    }

    #[test]
    fn volume_sources_are_sorted_by_manifest_key() {
        // manifest keys come out of k8s-openapi in lexicographic order, keep the schema in step
        for attrs in [volume(), volume_mount(), volume_projection(), persistent_volume_claim_spec()] {
            let keys = names(&attrs);
            let mut sorted = keys.clone();
            sorted.sort_unstable();
            assert_eq!(keys, sorted);
        }
    }

    #[test]
    fn every_volume_source_is_declared() {
        let schema = Schema::new("v", volume());
        let sources = schema
            .attributes
            .iter()
            .filter(|a| matches!(a.kind, AttributeType::Object(_)))
            .count();
        assert_eq!(sources, 30);
        assert!(schema.attribute("name").unwrap().is_required());
    }

    #[test]
    fn required_core_fields() {
        let schema = Schema::new("v", volume());
        for path in [
            &["host_path", "path"][..],
            &["config_map", "items", "key"],
            &["ephemeral", "volume_claim_template", "spec"],
            &["iscsi", "lun"],
            &["scale_io", "secret_ref"],
            &["projected", "sources", "service_account_token", "path"],
        ] {
            assert!(schema.lookup(path).unwrap().is_required(), "{path:?}");
        }
        assert!(!schema.lookup(&["secret", "secret_name"]).unwrap().is_required());
    }

    #[test]
    fn out_of_range_modes_point_at_the_attribute() {
        let schema = Schema::new("v", volume());
        let diags = schema.validate(&serde_json::json!({
            "name": "cfg",
            "config_map": {"default_mode": 4_294_967_296_i64, "items": [{"key": "k", "mode": 420, "path": "p"}]},
            "iscsi": {"iqn": "iqn", "lun": -2_147_483_649_i64, "target_portal": "10.0.0.1"},
        }));
        let paths = diags.iter().map(|d| d.path.clone().unwrap().to_string()).collect::<Vec<_>>();
        assert_eq!(paths, vec!["config_map.default_mode", "iscsi.lun"]);
        assert!(diags.iter().all(|d| d.summary == "Invalid Attribute Value"));
    }
}
