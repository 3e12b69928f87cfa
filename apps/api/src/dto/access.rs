use ledgerline_application::{AccessContext, AccessResolver, GateDecision};
use ledgerline_domain::{Role, RoleGrants, WILDCARD_GRANT};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Role option offered by user-management forms.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-option-response.ts"
)]
pub struct RoleOptionResponse {
    pub role: String,
    pub display_name: String,
}

impl From<Role> for RoleOptionResponse {
    fn from(value: Role) -> Self {
        Self {
            role: value.as_str().to_owned(),
            display_name: value.display_name().to_owned(),
        }
    }
}

/// Role catalog entry with its default grants.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-catalog-entry-response.ts"
)]
pub struct RoleCatalogEntryResponse {
    pub role: String,
    pub display_name: String,
    pub assignable: bool,
    pub permissions: Vec<String>,
}

impl RoleCatalogEntryResponse {
    pub fn new(role: Role, grants: RoleGrants) -> Self {
        let permissions = match grants {
            RoleGrants::All => vec![WILDCARD_GRANT.to_owned()],
            RoleGrants::Listed(permissions) => permissions
                .iter()
                .map(|permission| permission.as_str().to_owned())
                .collect(),
        };

        Self {
            role: role.as_str().to_owned(),
            display_name: role.display_name().to_owned(),
            assignable: role.is_assignable(),
            permissions,
        }
    }
}

/// Effective access of the calling user.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-summary-response.ts"
)]
pub struct AccessSummaryResponse {
    pub tenant_id: String,
    pub subject: Option<String>,
    pub role: Option<String>,
    pub permissions: Vec<String>,
    pub accessible_areas: Vec<String>,
    pub elevated_areas: Vec<String>,
}

impl AccessSummaryResponse {
    pub fn resolve(resolver: &AccessResolver, context: &AccessContext) -> Self {
        Self {
            tenant_id: context.tenant_id().to_string(),
            subject: context.subject().map(str::to_owned),
            role: context.role().map(|role| role.as_str().to_owned()),
            permissions: resolver
                .effective_permissions(context)
                .iter()
                .map(|permission| permission.as_str().to_owned())
                .collect(),
            accessible_areas: resolver
                .accessible_areas(context)
                .iter()
                .map(|area| area.as_str().to_owned())
                .collect(),
            elevated_areas: resolver
                .elevated_areas(context)
                .iter()
                .map(|area| area.as_str().to_owned())
                .collect(),
        }
    }
}

/// Incoming payload for a single permission check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/check-permission-request.ts"
)]
pub struct CheckPermissionRequest {
    pub permission: String,
}

/// Result of a single permission check.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/check-permission-response.ts"
)]
pub struct CheckPermissionResponse {
    pub permission: String,
    pub allowed: bool,
}

/// Incoming payload describing a permission gate.
///
/// At most one of `permission`, `any_of` and `all_of` may be set; none
/// means the gate is always open.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/evaluate-gate-request.ts"
)]
pub struct EvaluateGateRequest {
    #[serde(default)]
    pub permission: Option<String>,
    #[serde(default)]
    pub any_of: Option<Vec<String>>,
    #[serde(default)]
    pub all_of: Option<Vec<String>>,
    #[serde(default)]
    pub always_allow_elevated: Option<String>,
    #[serde(default)]
    pub fallback: bool,
}

/// Result of evaluating a permission gate.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/gate-decision-response.ts"
)]
pub struct GateDecisionResponse {
    pub decision: String,
    pub allowed: bool,
}

impl From<GateDecision> for GateDecisionResponse {
    fn from(value: GateDecision) -> Self {
        Self {
            decision: value.as_str().to_owned(),
            allowed: value.is_allowed(),
        }
    }
}

/// Incoming payload for a role assignment pre-check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/validate-role-assignment-request.ts"
)]
pub struct ValidateRoleAssignmentRequest {
    pub target_role: String,
}
