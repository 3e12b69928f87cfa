use std::str::FromStr;

use ledgerline_application::{GateRequirement, PermissionGate};
use ledgerline_core::AppError;
use ledgerline_domain::{FeatureArea, Permission};
use tracing::warn;

use crate::dto::EvaluateGateRequest;

/// Builds a gate from a client description.
///
/// Unknown permission tags can never be held: they are dropped from
/// `any_of` and make `permission` or `all_of` unsatisfiable. An unknown
/// area grants no elevation.
pub(super) fn permission_gate_from_request(
    payload: &EvaluateGateRequest,
) -> Result<PermissionGate, AppError> {
    let requirement = match (&payload.permission, &payload.any_of, &payload.all_of) {
        (None, None, None) => GateRequirement::Always,
        (Some(tag), None, None) => match Permission::from_transport(tag.trim()) {
            Ok(permission) => GateRequirement::Permission(permission),
            Err(_) => unsatisfiable(),
        },
        (None, Some(tags), None) => GateRequirement::AnyOf(known_permissions(tags)),
        (None, None, Some(tags)) => {
            let permissions = known_permissions(tags);
            if permissions.len() == tags.len() {
                GateRequirement::AllOf(permissions)
            } else {
                unsatisfiable()
            }
        }
        _ => {
            return Err(AppError::Validation(
                "only one of 'permission', 'any_of' and 'all_of' may be set".to_owned(),
            ));
        }
    };

    let mut gate = PermissionGate::new(requirement);

    if let Some(area) = &payload.always_allow_elevated {
        match FeatureArea::from_str(area.trim()) {
            Ok(area) => gate = gate.always_allow_elevated(area),
            Err(_) => warn!(area = area.as_str(), "ignoring unknown gate area"),
        }
    }

    if payload.fallback {
        gate = gate.with_fallback();
    }

    Ok(gate)
}

fn known_permissions(tags: &[String]) -> Vec<Permission> {
    tags.iter()
        .filter_map(|tag| Permission::from_transport(tag.trim()).ok())
        .collect()
}

fn unsatisfiable() -> GateRequirement {
    GateRequirement::AnyOf(Vec::new())
}
