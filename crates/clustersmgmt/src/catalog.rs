//! Catalog resources referenced by clusters: versions, products, flavours
//! and subscriptions.

use chrono::{DateTime, Utc};
use ocm_model::resource_type;

use crate::Network;

resource_type! {
    /// An OpenShift version that clusters can be installed with.
    pub struct Version / VersionBuilder : "version", kind "Version" {
        3 => available_upgrades / get_available_upgrades : Vec<String> = "available_upgrades";
        4 => channel_group / get_channel_group : String = "channel_group";
        /// Whether this is the version used when none is requested.
        5 => is_default / get_default : bool = "default";
        6 => enabled / get_enabled : bool = "enabled";
        7 => end_of_life_timestamp / get_end_of_life_timestamp : DateTime<Utc> = "end_of_life_timestamp";
        8 => hosted_control_plane_enabled / get_hosted_control_plane_enabled : bool = "hosted_control_plane_enabled";
        9 => raw_id / get_raw_id : String = "raw_id";
        10 => release_image / get_release_image : String = "release_image";
        11 => rosa_enabled / get_rosa_enabled : bool = "rosa_enabled";
    }
}

resource_type! {
    pub struct Product / ProductBuilder : "product", kind "Product" {
        3 => name / get_name : String = "name";
    }
}

resource_type! {
    /// Set of defaults applied to clusters created from it.
    pub struct Flavour / FlavourBuilder : "flavour", kind "Flavour" {
        3 => name / get_name : String = "name";
        4 => network / get_network : Network = "network";
    }
}

resource_type! {
    /// Subscription tracking the entitlement of a cluster. Clusters only
    /// carry a link to it.
    pub struct Subscription / SubscriptionBuilder : "subscription", kind "Subscription" {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use ocm_model::codec;

    #[test]
    fn version_round_trip() {
        let eol = Utc.with_ymd_and_hms(2025, 6, 27, 0, 0, 0).unwrap();
        let version = Version::builder()
            .id("openshift-v4.14.8")
            .raw_id("4.14.8")
            .channel_group("stable")
            .is_default(true)
            .end_of_life_timestamp(eol)
            .available_upgrades(vec!["4.14.9".to_string(), "4.15.0".to_string()])
            .build()
            .unwrap();
        let text = codec::to_string(&version).unwrap();
        assert_eq!(
            text,
            r#"{"kind":"Version","id":"openshift-v4.14.8","available_upgrades":["4.14.9","4.15.0"],"channel_group":"stable","default":true,"end_of_life_timestamp":"2025-06-27T00:00:00Z","raw_id":"4.14.8"}"#
        );
        let back: Version = codec::from_str(&text).unwrap();
        assert_eq!(back, version);
        assert_eq!(back.get_default(), Some(true));
        assert_eq!(back.end_of_life_timestamp(), eol);
    }

    #[test]
    fn subscription_link() {
        let sub: Subscription =
            codec::from_str(r#"{"kind":"SubscriptionLink","id":"1a2b","href":"/api/accounts_mgmt/v1/subscriptions/1a2b"}"#)
                .unwrap();
        assert!(sub.is_link());
        assert_eq!(sub.id(), "1a2b");
        assert!(!sub.is_empty());
    }
}
