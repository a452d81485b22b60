//! Compute capacity: node counts, machine pools and machine types.

use std::collections::BTreeMap;

use ocm_model::{object_type, resource_type};

use crate::CloudProvider;

object_type! {
    /// A quantity with its unit, for example `{"value": 16, "unit": "GiB"}`.
    pub struct Value / ValueBuilder : "value" {
        0 => unit / get_unit : String = "unit";
        1 => value / get_value : f64 = "value";
    }
}

object_type! {
    pub struct MachinePoolAutoscaling / MachinePoolAutoscalingBuilder : "machine_pool_autoscaling" {
        0 => max_replicas / get_max_replicas : i32 = "max_replicas";
        1 => min_replicas / get_min_replicas : i32 = "min_replicas";
    }
}

object_type! {
    /// Node counts and machine types of a cluster.
    pub struct ClusterNodes / ClusterNodesBuilder : "cluster_nodes" {
        0 => autoscale_compute / get_autoscale_compute : MachinePoolAutoscaling = "autoscale_compute";
        1 => availability_zones / get_availability_zones : Vec<String> = "availability_zones";
        2 => compute / get_compute : i32 = "compute";
        3 => compute_labels / get_compute_labels : BTreeMap<String, String> = "compute_labels";
        4 => compute_machine_type / get_compute_machine_type : MachineType = "compute_machine_type";
        5 => infra / get_infra : i32 = "infra";
        6 => infra_machine_type / get_infra_machine_type : MachineType = "infra_machine_type";
        7 => master / get_master : i32 = "master";
        8 => master_machine_type / get_master_machine_type : MachineType = "master_machine_type";
    }
}

resource_type! {
    /// Instance type offered by a cloud provider.
    pub struct MachineType / MachineTypeBuilder : "machine_type", kind "MachineType" {
        3 => architecture / get_architecture : String = "architecture";
        4 => category / get_category : String = "category";
        5 => ccs_only / get_ccs_only : bool = "ccs_only";
        6 => cloud_provider / get_cloud_provider : CloudProvider = "cloud_provider";
        7 => cpu / get_cpu : Value = "cpu";
        8 => generic_name / get_generic_name : String = "generic_name";
        9 => memory / get_memory : Value = "memory";
        10 => name / get_name : String = "name";
        11 => size / get_size : String = "size";
    }
}

resource_type! {
    /// Group of nodes sharing an instance type.
    pub struct MachinePool / MachinePoolBuilder : "machine_pool", kind "MachinePool" {
        3 => autoscaling / get_autoscaling : MachinePoolAutoscaling = "autoscaling";
        4 => availability_zones / get_availability_zones : Vec<String> = "availability_zones";
        5 => instance_type / get_instance_type : String = "instance_type";
        6 => labels / get_labels : BTreeMap<String, String> = "labels";
        7 => replicas / get_replicas : i32 = "replicas";
        8 => subnets / get_subnets : Vec<String> = "subnets";
    }
}

impl ClusterNodes {
    /// Total node count across control plane, infra and compute.
    pub fn total(&self) -> i64 {
        i64::from(self.master()) + i64::from(self.infra()) + i64::from(self.compute())
    }
}

impl MachinePool {
    pub fn is_autoscaled(&self) -> bool {
        self.get_autoscaling().is_some()
    }
}
