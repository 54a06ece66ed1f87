/*!

The IBM Cloud VPC provider for `kubetest2-tf`. It turns the `--vpc-*` command line options into the
variables of the VPC Terraform module and writes them to `vpc.auto.tfvars.json`.

!*/

use deployer::{write_tfvars, FlagSet, FlagValues, Provider, ProviderResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use std::path::{Path, PathBuf};

/// The provider name, which is also the stem of the tfvars file.
pub const NAME: &str = "vpc";

/// The resource group used when `--vpc-resource-group` is not given.
pub const DEFAULT_RESOURCE_GROUP: &str = "Default";

/// The command line options of the VPC provider.
pub mod flag {
    pub const VPC_NAME: &str = "vpc-name";
    pub const SUBNET: &str = "vpc-subnet";
    pub const API_KEY: &str = "vpc-api-key";
    pub const SSH_KEY: &str = "vpc-ssh-key";
    pub const DNS: &str = "vpc-dns";
    pub const DNS_ZONE: &str = "vpc-dns-zone";
    pub const REGION: &str = "vpc-region";
    pub const ZONE: &str = "vpc-zone";
    pub const RESOURCE_GROUP: &str = "vpc-resource-group";
    pub const NODE_IMAGE_NAME: &str = "vpc-node-image-name";
    pub const NODE_PROFILE: &str = "vpc-node-profile";
    pub const KUBE_VERSION: &str = "vpc-kube-version";
    pub const CONTAINER_VERSION: &str = "vpc-cont-version";
}

/// The variables of the VPC Terraform module. The serialized names are the variable names the
/// module declares and must not change.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TfVars {
    #[serde(rename = "VPCName")]
    pub vpc_name: String,

    #[serde(rename = "SubnetName")]
    pub subnet_name: String,

    /// IBM Cloud API key. Never logged.
    #[serde(rename = "Apikey")]
    pub api_key: String,

    #[serde(rename = "SSHKey")]
    pub ssh_key: String,

    #[serde(rename = "DNSName")]
    pub dns_name: String,

    #[serde(rename = "DNSZone")]
    pub dns_zone: String,

    #[serde(rename = "Region")]
    pub region: String,

    #[serde(rename = "Zone")]
    pub zone: String,

    #[serde(rename = "ResourceGroup")]
    pub resource_group: String,

    #[serde(rename = "NodeImageName")]
    pub node_image_name: String,

    #[serde(rename = "NodeProfile")]
    pub node_profile: String,

    #[serde(rename = "KubeVersion")]
    pub kube_version: String,

    #[serde(rename = "ContVersion")]
    pub container_version: String,
}

impl Default for TfVars {
    fn default() -> Self {
        Self::from_flags(&FlagValues::new())
    }
}

impl TfVars {
    /// Build the variables from parsed flag values. A flag that has no entry in `values` takes the
    /// same default it is registered with.
    pub fn from_flags(values: &FlagValues) -> Self {
        let value = |name: &str, default: &str| {
            if values.contains(name) {
                values.get(name).to_owned()
            } else {
                default.to_owned()
            }
        };
        Self {
            vpc_name: value(flag::VPC_NAME, ""),
            subnet_name: value(flag::SUBNET, ""),
            api_key: value(flag::API_KEY, ""),
            ssh_key: value(flag::SSH_KEY, ""),
            dns_name: value(flag::DNS, ""),
            dns_zone: value(flag::DNS_ZONE, ""),
            region: value(flag::REGION, ""),
            zone: value(flag::ZONE, ""),
            resource_group: value(flag::RESOURCE_GROUP, DEFAULT_RESOURCE_GROUP),
            node_image_name: value(flag::NODE_IMAGE_NAME, ""),
            node_profile: value(flag::NODE_PROFILE, ""),
            kube_version: value(flag::KUBE_VERSION, ""),
            container_version: value(flag::CONTAINER_VERSION, ""),
        }
    }
}

impl Debug for TfVars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let api_key = if self.api_key.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("TfVars")
            .field("vpc_name", &self.vpc_name)
            .field("subnet_name", &self.subnet_name)
            .field("api_key", &api_key)
            .field("ssh_key", &self.ssh_key)
            .field("dns_name", &self.dns_name)
            .field("dns_zone", &self.dns_zone)
            .field("region", &self.region)
            .field("zone", &self.zone)
            .field("resource_group", &self.resource_group)
            .field("node_image_name", &self.node_image_name)
            .field("node_profile", &self.node_profile)
            .field("kube_version", &self.kube_version)
            .field("container_version", &self.container_version)
            .finish()
    }
}

/// Provisions Kubernetes test clusters on IBM Cloud VPC virtual server instances.
#[derive(Clone, Debug, Default)]
pub struct VpcProvider {
    tfvars: TfVars,
}

impl VpcProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tfvars(&self) -> &TfVars {
        &self.tfvars
    }
}

impl From<TfVars> for VpcProvider {
    fn from(tfvars: TfVars) -> Self {
        Self { tfvars }
    }
}

impl Provider for VpcProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    fn bind_flags(&self, flags: &mut FlagSet) {
        flags
            .string(flag::VPC_NAME, "", "IBM Cloud VPC name")
            .string(flag::SUBNET, "", "IBM Cloud VPC subnet")
            .string(
                flag::API_KEY,
                "",
                "IBM Cloud API key used for accessing the APIs",
            )
            .string(flag::SSH_KEY, "", "VPC SSH key used to authenticate to the VSIs")
            .string(flag::DNS, "", "IBM Cloud DNS name")
            .string(flag::DNS_ZONE, "", "IBM Cloud DNS zone name")
            .string(flag::REGION, "", "IBM Cloud VPC region name")
            .string(flag::ZONE, "", "IBM Cloud VPC zone name")
            .string(
                flag::RESOURCE_GROUP,
                DEFAULT_RESOURCE_GROUP,
                "IBM Cloud resource group name (command: ibmcloud resource groups)",
            )
            .string(
                flag::NODE_IMAGE_NAME,
                "",
                "Node image name (command: ibmcloud is images)",
            )
            .string(
                flag::NODE_PROFILE,
                "",
                "Node instance profile (command: ibmcloud is instance-profiles)",
            )
            .string(
                flag::KUBE_VERSION,
                "",
                "Kubernetes version to install on the nodes",
            )
            .string(
                flag::CONTAINER_VERSION,
                "",
                "containerd version to install on the nodes",
            );
    }

    fn load_flags(&mut self, values: &FlagValues) {
        self.tfvars = TfVars::from_flags(values);
        debug!("Loaded '{}' tfvars: {:?}", NAME, self.tfvars);
    }

    fn dump_config(&self, dir: &Path) -> ProviderResult<PathBuf> {
        write_tfvars(dir, NAME, &self.tfvars)
    }
}
