//! The cluster resource and the attributes only clusters use.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ocm_model::{object_type, resource_type, List};

use crate::{
    Aws, BillingModel, CloudProvider, CloudRegion, ClusterConfigurationMode, ClusterHealthState,
    ClusterNodes, ClusterState, Dns, Flavour, ListeningMethod, MachinePool, Network, Product,
    Proxy, Subscription, Value, Version,
};

resource_type! {
    /// An OpenShift cluster.
    pub struct Cluster / ClusterBuilder : "cluster", kind "Cluster" {
        3 => api / get_api : ClusterApi = "api";
        4 => aws / get_aws : Aws = "aws";
        5 => additional_trust_bundle / get_additional_trust_bundle : String = "additional_trust_bundle";
        6 => billing_model / get_billing_model : BillingModel = "billing_model";
        7 => cloud_provider / get_cloud_provider : CloudProvider = "cloud_provider";
        8 => console / get_console : ClusterConsole = "console";
        9 => creation_timestamp / get_creation_timestamp : DateTime<Utc> = "creation_timestamp";
        10 => disable_user_workload_monitoring / get_disable_user_workload_monitoring : bool = "disable_user_workload_monitoring";
        11 => dns / get_dns : Dns = "dns";
        12 => domain_prefix / get_domain_prefix : String = "domain_prefix";
        13 => etcd_encryption / get_etcd_encryption : bool = "etcd_encryption";
        14 => expiration_timestamp / get_expiration_timestamp : DateTime<Utc> = "expiration_timestamp";
        15 => external_id / get_external_id : String = "external_id";
        16 => fips / get_fips : bool = "fips";
        17 => flavour / get_flavour : Flavour = "flavour";
        18 => health_state / get_health_state : ClusterHealthState = "health_state";
        19 => hypershift / get_hypershift : Hypershift = "hypershift";
        20 => infra_id / get_infra_id : String = "infra_id";
        21 => load_balancer_quota / get_load_balancer_quota : i32 = "load_balancer_quota";
        22 => machine_pools / get_machine_pools : List<MachinePool> = "machine_pools";
        23 => managed / get_managed : bool = "managed";
        24 => multi_arch_enabled / get_multi_arch_enabled : bool = "multi_arch_enabled";
        25 => multi_az / get_multi_az : bool = "multi_az";
        26 => name / get_name : String = "name";
        27 => network / get_network : Network = "network";
        /// How long node drains may take before pods are evicted forcefully.
        28 => node_drain_grace_period / get_node_drain_grace_period : Value = "node_drain_grace_period";
        29 => nodes / get_nodes : ClusterNodes = "nodes";
        30 => openshift_version / get_openshift_version : String = "openshift_version";
        31 => product / get_product : Product = "product";
        /// User defined properties, opaque to the service.
        32 => properties / get_properties : BTreeMap<String, String> = "properties";
        33 => proxy / get_proxy : Proxy = "proxy";
        34 => region / get_region : CloudRegion = "region";
        35 => state / get_state : ClusterState = "state";
        36 => status / get_status : ClusterStatus = "status";
        37 => storage_quota / get_storage_quota : Value = "storage_quota";
        38 => subscription / get_subscription : Subscription = "subscription";
        39 => version / get_version : Version = "version";
    }
}

object_type! {
    /// API endpoint of a cluster.
    pub struct ClusterApi / ClusterApiBuilder : "cluster_api" {
        0 => listening / get_listening : ListeningMethod = "listening";
        1 => url / get_url : String = "url";
    }
}

object_type! {
    pub struct ClusterConsole / ClusterConsoleBuilder : "cluster_console" {
        0 => url / get_url : String = "url";
    }
}

object_type! {
    /// Detailed status of a cluster.
    pub struct ClusterStatus / ClusterStatusBuilder : "cluster_status" {
        0 => configuration_mode / get_configuration_mode : ClusterConfigurationMode = "configuration_mode";
        1 => description / get_description : String = "description";
        2 => dns_ready / get_dns_ready : bool = "dns_ready";
        3 => limited_support_reason_count / get_limited_support_reason_count : i32 = "limited_support_reason_count";
        4 => oidc_ready / get_oidc_ready : bool = "oidc_ready";
        5 => provision_error_code / get_provision_error_code : String = "provision_error_code";
        6 => provision_error_message / get_provision_error_message : String = "provision_error_message";
        7 => state / get_state : ClusterState = "state";
    }
}

object_type! {
    /// Hosted control plane settings.
    pub struct Hypershift / HypershiftBuilder : "hypershift" {
        0 => enabled / get_enabled : bool = "enabled";
        1 => hcp_namespace / get_hcp_namespace : String = "hcp_namespace";
        2 => management_cluster / get_management_cluster : String = "management_cluster";
    }
}

impl Cluster {
    /// Whether the cluster uses AWS STS instead of long lived credentials.
    pub fn is_sts(&self) -> bool {
        self.aws().get_sts().is_some_and(|sts| !sts.role_arn().is_empty())
    }

    pub fn is_hypershift(&self) -> bool {
        self.hypershift().enabled()
    }

    pub fn is_private(&self) -> bool {
        self.api().listening() == &ListeningMethod::Internal
    }

    /// Whether the cluster has finished installing and is serving.
    pub fn is_ready(&self) -> bool {
        self.state() == &ClusterState::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocm_model::codec;

    #[test]
    fn derived_flags() {
        let cluster: Cluster = codec::from_str(
            r#"{"kind":"Cluster","id":"c1","state":"ready","api":{"listening":"internal"},"hypershift":{"enabled":true},"aws":{"sts":{"role_arn":"arn:aws:iam::1:role/x"}}}"#,
        )
        .unwrap();
        assert!(cluster.is_ready());
        assert!(cluster.is_private());
        assert!(cluster.is_hypershift());
        assert!(cluster.is_sts());

        let bare = Cluster::default();
        assert!(!bare.is_ready());
        assert!(!bare.is_private());
        assert!(!bare.is_sts());
    }

    #[test]
    fn status_keeps_unknown_configuration_mode() {
        let status: ClusterStatus =
            codec::from_str(r#"{"configuration_mode":"locked","dns_ready":true}"#).unwrap();
        assert!(!status.configuration_mode().is_recognized());
        assert_eq!(
            codec::to_string(&status).unwrap(),
            r#"{"configuration_mode":"locked","dns_ready":true}"#
        );
    }
}
