//! Cloud providers and their regions.

use ocm_model::{resource_type, List};

resource_type! {
    pub struct CloudProvider / CloudProviderBuilder : "cloud_provider", kind "CloudProvider" {
        3 => display_name / get_display_name : String = "display_name";
        4 => name / get_name : String = "name";
        5 => regions / get_regions : List<CloudRegion> = "regions";
    }
}

resource_type! {
    /// Region of a cloud provider.
    pub struct CloudRegion / CloudRegionBuilder : "cloud_region", kind "CloudRegion" {
        3 => ccs_only / get_ccs_only : bool = "ccs_only";
        4 => cloud_provider / get_cloud_provider : CloudProvider = "cloud_provider";
        5 => display_name / get_display_name : String = "display_name";
        6 => enabled / get_enabled : bool = "enabled";
        7 => govcloud / get_govcloud : bool = "govcloud";
        /// KMS location, only reported by GCP regions.
        8 => kms_location_id / get_kms_location_id : String = "kms_location_id";
        9 => name / get_name : String = "name";
        10 => supports_hypershift / get_supports_hypershift : bool = "supports_hypershift";
        11 => supports_multi_az / get_supports_multi_az : bool = "supports_multi_az";
    }
}

impl CloudProvider {
    /// Regions that are enabled, in the order the server listed them.
    pub fn enabled_regions(&self) -> impl Iterator<Item = &CloudRegion> {
        self.regions().iter().filter(|region| region.enabled())
    }
}
