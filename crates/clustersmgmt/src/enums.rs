//! Enumerated attribute types.

use ocm_model::wire_enum;

wire_enum! {
    /// Overall state of a cluster.
    pub enum ClusterState: "cluster_state" {
        Error = "error",
        Hibernating = "hibernating",
        Installing = "installing",
        Pending = "pending",
        PoweringDown = "powering_down",
        Ready = "ready",
        Resuming = "resuming",
        Uninstalling = "uninstalling",
        Unknown = "unknown",
        Validating = "validating",
        Waiting = "waiting",
    }
}

wire_enum! {
    /// Health of a cluster as reported by monitoring.
    pub enum ClusterHealthState: "cluster_health_state" {
        Healthy = "healthy",
        Unhealthy = "unhealthy",
        Unknown = "unknown",
    }
}

wire_enum! {
    /// How the cluster is billed.
    pub enum BillingModel: "billing_model" {
        Marketplace = "marketplace",
        MarketplaceAws = "marketplace-aws",
        MarketplaceAzure = "marketplace-azure",
        MarketplaceGcp = "marketplace-gcp",
        MarketplaceRhm = "marketplace-rhm",
        Standard = "standard",
    }
}

wire_enum! {
    /// Whether an endpoint is reachable from outside the cluster network.
    pub enum ListeningMethod: "listening_method" {
        External = "external",
        Internal = "internal",
    }
}

wire_enum! {
    pub enum ClusterConfigurationMode: "cluster_configuration_mode" {
        Full = "full",
        ReadOnly = "read_only",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocm_model::WireEnum;

    #[test]
    fn wire_values_with_separators() {
        assert_eq!(BillingModel::MarketplaceAws.as_str(), "marketplace-aws");
        assert_eq!(ClusterState::from("powering_down"), ClusterState::PoweringDown);
        assert_eq!(
            ClusterConfigurationMode::from("read_only"),
            ClusterConfigurationMode::ReadOnly
        );
    }

    #[test]
    fn every_declared_value_maps_back() {
        for value in ClusterState::WIRE_VALUES {
            let state = ClusterState::from(*value);
            assert!(state.is_recognized(), "{value}");
            assert_eq!(state.as_str(), *value);
        }
        assert_eq!(ClusterHealthState::WIRE_VALUES.len(), 3);
    }

    #[test]
    fn unknown_states_are_kept() {
        let state: ClusterState = "archived".parse().unwrap();
        assert_eq!(state, ClusterState::Unrecognized("archived".into()));
        assert_eq!(state.to_string(), "archived");
    }
}
