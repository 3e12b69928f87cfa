use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use ledgerline_application::AccessContext;
use ledgerline_core::{AppError, NonEmptyString, TenantId};
use ledgerline_domain::Permission;

use crate::error::ApiResult;
use crate::state::AppState;

pub const TENANT_ID_HEADER: &str = "x-tenant-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";
pub const USER_PERMISSIONS_HEADER: &str = "x-user-permissions";
pub const USER_SUBJECT_HEADER: &str = "x-user-subject";

/// Permission a route guard demands, attached to a router with
/// `axum::Extension`.
#[derive(Debug, Clone, Copy)]
pub struct RequiredPermission(pub Permission);

/// Builds the caller context from gateway headers and stores it in the
/// request extensions.
pub async fn require_access_context(mut request: Request, next: Next) -> ApiResult<Response> {
    let context = access_context_from_headers(request.headers())?;
    request.extensions_mut().insert(context);
    Ok(next.run(request).await)
}

/// Rejects the request unless the caller holds the route's permission.
pub async fn require_permission(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let Some(RequiredPermission(permission)) =
        request.extensions().get::<RequiredPermission>().copied()
    else {
        return Err(AppError::Internal("route guard is missing its permission".to_owned()).into());
    };

    let context = request
        .extensions()
        .get::<AccessContext>()
        .ok_or_else(|| AppError::Unauthorized("access context required".to_owned()))?;

    state.access_resolver.require_permission(context, permission)?;

    Ok(next.run(request).await)
}

pub(crate) fn access_context_from_headers(headers: &HeaderMap) -> Result<AccessContext, AppError> {
    let tenant_id = TenantId::parse(required_header(headers, TENANT_ID_HEADER)?)?;
    let role_tag = required_header(headers, USER_ROLE_HEADER)?;
    let override_tags = optional_header(headers, USER_PERMISSIONS_HEADER).unwrap_or_default();

    let mut context = AccessContext::from_tags(tenant_id, role_tag, override_tags.split(','));
    if let Some(subject) = optional_header(headers, USER_SUBJECT_HEADER) {
        context = context.with_subject(NonEmptyString::new(subject)?);
    }

    Ok(context)
}

fn required_header<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, AppError> {
    optional_header(headers, name)
        .ok_or_else(|| AppError::Unauthorized(format!("missing '{name}' header")))
}

fn optional_header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
