//! Networking attributes of a cluster.

use ocm_model::object_type;

object_type! {
    /// Network settings of a cluster.
    pub struct Network / NetworkBuilder : "network" {
        0 => host_prefix / get_host_prefix : i32 = "host_prefix";
        1 => machine_cidr / get_machine_cidr : String = "machine_cidr";
        2 => pod_cidr / get_pod_cidr : String = "pod_cidr";
        3 => service_cidr / get_service_cidr : String = "service_cidr";
        /// Network plugin, for example `OVNKubernetes`.
        4 => network_type / get_network_type : String = "type";
    }
}

object_type! {
    pub struct Dns / DnsBuilder : "dns" {
        0 => base_domain / get_base_domain : String = "base_domain";
    }
}

object_type! {
    /// Cluster wide proxy.
    pub struct Proxy / ProxyBuilder : "proxy" {
        0 => http_proxy / get_http_proxy : String = "http_proxy";
        1 => https_proxy / get_https_proxy : String = "https_proxy";
        2 => no_proxy / get_no_proxy : String = "no_proxy";
    }
}
