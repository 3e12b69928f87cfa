use serde::Serialize;
use ts_rs::TS;

mod access;

pub use access::{
    AccessSummaryResponse, CheckPermissionRequest, CheckPermissionResponse, EvaluateGateRequest,
    GateDecisionResponse, RoleCatalogEntryResponse, RoleOptionResponse,
    ValidateRoleAssignmentRequest,
};

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}
