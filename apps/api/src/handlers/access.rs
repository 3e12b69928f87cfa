use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use ledgerline_application::AccessContext;
use ledgerline_domain::Role;

use crate::dto::{
    AccessSummaryResponse, CheckPermissionRequest, CheckPermissionResponse, EvaluateGateRequest,
    GateDecisionResponse, RoleCatalogEntryResponse, RoleOptionResponse,
    ValidateRoleAssignmentRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod gate;


pub async fn list_roles_handler(
    State(state): State<AppState>,
    Extension(_context): Extension<AccessContext>,
) -> Json<Vec<RoleCatalogEntryResponse>> {
    let grant_table = state.access_resolver.grant_table();
    let roles = Role::all()
        .iter()
        .map(|role| RoleCatalogEntryResponse::new(*role, grant_table.grants_for(*role)))
        .collect();

    Json(roles)
}

pub async fn access_summary_handler(
    State(state): State<AppState>,
    Extension(context): Extension<AccessContext>,
) -> Json<AccessSummaryResponse> {
    Json(AccessSummaryResponse::resolve(
        &state.access_resolver,
        &context,
    ))
}

pub async fn check_permission_handler(
    State(state): State<AppState>,
    Extension(context): Extension<AccessContext>,
    Json(payload): Json<CheckPermissionRequest>,
) -> Json<CheckPermissionResponse> {
    let allowed = state
        .access_resolver
        .has_permission_tag(&context, payload.permission.trim());

    Json(CheckPermissionResponse {
        permission: payload.permission,
        allowed,
    })
}

pub async fn evaluate_gate_handler(
    State(state): State<AppState>,
    Extension(context): Extension<AccessContext>,
    Json(payload): Json<EvaluateGateRequest>,
) -> ApiResult<Json<GateDecisionResponse>> {
    let gate = gate::permission_gate_from_request(&payload)?;
    let decision = gate.evaluate(&state.access_resolver, &context);

    Ok(Json(GateDecisionResponse::from(decision)))
}

pub async fn assignable_roles_handler(
    State(state): State<AppState>,
    Extension(context): Extension<AccessContext>,
) -> Json<Vec<RoleOptionResponse>> {
    let roles = state
        .access_resolver
        .available_roles_for_assignment(&context)
        .into_iter()
        .map(RoleOptionResponse::from)
        .collect();

    Json(roles)
}

pub async fn validate_role_assignment_handler(
    State(state): State<AppState>,
    Extension(context): Extension<AccessContext>,
    Json(payload): Json<ValidateRoleAssignmentRequest>,
) -> ApiResult<StatusCode> {
    let target = Role::from_transport(payload.target_role.trim())?;
    state
        .access_resolver
        .ensure_can_assign_role(&context, target)?;

    Ok(StatusCode::NO_CONTENT)
}
