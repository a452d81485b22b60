//! AWS specific settings, including the STS roles used by ROSA clusters.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ocm_model::{object_type, resource_type};

object_type! {
    /// AWS settings of a cluster.
    pub struct Aws / AwsBuilder : "aws" {
        0 => access_key_id / get_access_key_id : String = "access_key_id";
        1 => account_id / get_account_id : String = "account_id";
        2 => additional_compute_security_group_ids / get_additional_compute_security_group_ids : Vec<String> = "additional_compute_security_group_ids";
        3 => billing_account_id / get_billing_account_id : String = "billing_account_id";
        /// `optional` or `required`.
        4 => ec2_metadata_http_tokens / get_ec2_metadata_http_tokens : String = "ec2_metadata_http_tokens";
        5 => private_hosted_zone_id / get_private_hosted_zone_id : String = "private_hosted_zone_id";
        6 => private_hosted_zone_role_arn / get_private_hosted_zone_role_arn : String = "private_hosted_zone_role_arn";
        7 => private_link / get_private_link : bool = "private_link";
        8 => secret_access_key / get_secret_access_key : String = "secret_access_key";
        9 => subnet_ids / get_subnet_ids : Vec<String> = "subnet_ids";
        10 => sts / get_sts : Sts = "sts";
        11 => tags / get_tags : BTreeMap<String, String> = "tags";
    }
}

object_type! {
    /// Security token service settings.
    pub struct Sts / StsBuilder : "sts" {
        /// Whether operator roles and the OIDC provider are created by the
        /// service instead of the user.
        0 => auto_mode / get_auto_mode : bool = "auto_mode";
        1 => enabled / get_enabled : bool = "enabled";
        2 => external_id / get_external_id : String = "external_id";
        3 => instance_iam_roles / get_instance_iam_roles : InstanceIamRoles = "instance_iam_roles";
        4 => oidc_config / get_oidc_config : OidcConfig = "oidc_config";
        5 => oidc_endpoint_url / get_oidc_endpoint_url : String = "oidc_endpoint_url";
        6 => operator_iam_roles / get_operator_iam_roles : Vec<OperatorIamRole> = "operator_iam_roles";
        7 => operator_role_prefix / get_operator_role_prefix : String = "operator_role_prefix";
        8 => permission_boundary / get_permission_boundary : String = "permission_boundary";
        9 => role_arn / get_role_arn : String = "role_arn";
        10 => support_role_arn / get_support_role_arn : String = "support_role_arn";
    }
}

object_type! {
    pub struct InstanceIamRoles / InstanceIamRolesBuilder : "instance_iam_roles" {
        0 => master_role_arn / get_master_role_arn : String = "master_role_arn";
        1 => worker_role_arn / get_worker_role_arn : String = "worker_role_arn";
    }
}

object_type! {
    /// Role assumed by a cluster operator through its service account.
    pub struct OperatorIamRole / OperatorIamRoleBuilder : "operator_iam_role" {
        0 => name / get_name : String = "name";
        1 => namespace / get_namespace : String = "namespace";
        2 => role_arn / get_role_arn : String = "role_arn";
        3 => service_account / get_service_account : String = "service_account";
    }
}

resource_type! {
    /// OIDC configuration, possibly shared by several clusters.
    pub struct OidcConfig / OidcConfigBuilder : "oidc_config", kind "OidcConfig" {
        3 => creation_timestamp / get_creation_timestamp : DateTime<Utc> = "creation_timestamp";
        4 => installer_role_arn / get_installer_role_arn : String = "installer_role_arn";
        5 => issuer_url / get_issuer_url : String = "issuer_url";
        6 => managed / get_managed : bool = "managed";
        7 => organization_id / get_organization_id : String = "organization_id";
        8 => reusable / get_reusable : bool = "reusable";
        9 => secret_arn / get_secret_arn : String = "secret_arn";
    }
}

impl Sts {
    /// Looks up the operator role bound to `namespace`/`name`.
    pub fn operator_role(&self, namespace: &str, name: &str) -> Option<&OperatorIamRole> {
        self.operator_iam_roles()
            .iter()
            .find(|role| role.namespace() == namespace && role.name() == name)
    }
}
