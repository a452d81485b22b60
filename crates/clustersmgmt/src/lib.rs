//! Clusters management model types.
//!
//! Every type here is generated with the `ocm-model` macros, so they share
//! presence tracking, builders and the JSON codecs in [`ocm_model::codec`].
//!
//! ```
//! use ocm_clustersmgmt::{Cluster, CloudRegion, Product};
//! use ocm_model::codec;
//!
//! let cluster = Cluster::builder()
//!     .name("mycluster")
//!     .product(Product::builder().id("rosa"))
//!     .region(CloudRegion::builder().id("us-east-1"))
//!     .multi_az(false)
//!     .build()
//!     .unwrap();
//! assert_eq!(
//!     codec::to_string(&cluster).unwrap(),
//!     r#"{"kind":"Cluster","multi_az":false,"name":"mycluster","product":{"kind":"Product","id":"rosa"},"region":{"kind":"CloudRegion","id":"us-east-1"}}"#
//! );
//! ```

mod aws;
mod catalog;
mod cloud;
mod cluster;
mod enums;
mod network;
mod nodes;

pub use aws::{
    Aws, AwsBuilder, InstanceIamRoles, InstanceIamRolesBuilder, OidcConfig, OidcConfigBuilder,
    OperatorIamRole, OperatorIamRoleBuilder, Sts, StsBuilder,
};
pub use catalog::{
    Flavour, FlavourBuilder, Product, ProductBuilder, Subscription, SubscriptionBuilder, Version,
    VersionBuilder,
};
pub use cloud::{CloudProvider, CloudProviderBuilder, CloudRegion, CloudRegionBuilder};
pub use cluster::{
    Cluster, ClusterApi, ClusterApiBuilder, ClusterBuilder, ClusterConsole, ClusterConsoleBuilder,
    ClusterStatus, ClusterStatusBuilder, Hypershift, HypershiftBuilder,
};
pub use enums::{
    BillingModel, ClusterConfigurationMode, ClusterHealthState, ClusterState, ListeningMethod,
};
pub use network::{Dns, DnsBuilder, Network, NetworkBuilder, Proxy, ProxyBuilder};
pub use nodes::{
    ClusterNodes, ClusterNodesBuilder, MachinePool, MachinePoolAutoscaling,
    MachinePoolAutoscalingBuilder, MachinePoolBuilder, MachineType, MachineTypeBuilder, Value,
    ValueBuilder,
};
