use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use ledgerline_core::AppError;
use ledgerline_domain::Permission;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::{
    RequiredPermission, TENANT_ID_HEADER, USER_PERMISSIONS_HEADER, USER_ROLE_HEADER,
    USER_SUBJECT_HEADER,
};
use crate::state::AppState;
use crate::{handlers, middleware};

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    // Server-side re-check of role assignments, behind the user-management guard.
    let user_management_routes = Router::new()
        .route(
            "/api/access/role-assignments/validate",
            post(handlers::access::validate_role_assignment_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_permission,
        ))
        .layer(axum::Extension(RequiredPermission(Permission::ReadUser)));

    let protected_routes = Router::new()
        .route("/api/access/roles", get(handlers::access::list_roles_handler))
        .route("/api/access/me", get(handlers::access::access_summary_handler))
        .route(
            "/api/access/check",
            post(handlers::access::check_permission_handler),
        )
        .route(
            "/api/access/gate",
            post(handlers::access::evaluate_gate_handler),
        )
        .route(
            "/api/access/assignable-roles",
            get(handlers::access::assignable_roles_handler),
        )
        .merge(user_management_routes)
        .route_layer(from_fn(middleware::require_access_context));

    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            CONTENT_TYPE,
            HeaderName::from_static(TENANT_ID_HEADER),
            HeaderName::from_static(USER_ROLE_HEADER),
            HeaderName::from_static(USER_PERMISSIONS_HEADER),
            HeaderName::from_static(USER_SUBJECT_HEADER),
        ]);

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
