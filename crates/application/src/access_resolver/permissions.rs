use ledgerline_core::{AppError, AppResult};
use ledgerline_domain::Permission;
use tracing::debug;

use super::*;

impl AccessResolver {
    /// Returns whether the caller holds the permission named by a transport
    /// tag. Unknown tags are never held.
    #[must_use]
    pub fn has_permission_tag(&self, context: &AccessContext, tag: &str) -> bool {
        Permission::from_transport(tag)
            .is_ok_and(|permission| self.has_permission(context, permission))
    }

    /// Returns whether the caller holds at least one of the permissions.
    #[must_use]
    pub fn has_any_permission(&self, context: &AccessContext, permissions: &[Permission]) -> bool {
        permissions
            .iter()
            .any(|permission| self.has_permission(context, *permission))
    }

    /// Returns whether the caller holds every one of the permissions.
    #[must_use]
    pub fn has_all_permissions(&self, context: &AccessContext, permissions: &[Permission]) -> bool {
        permissions
            .iter()
            .all(|permission| self.has_permission(context, *permission))
    }

    /// Ensures the caller holds the permission.
    pub fn require_permission(
        &self,
        context: &AccessContext,
        permission: Permission,
    ) -> AppResult<()> {
        if self.has_permission(context, permission) {
            return Ok(());
        }

        debug!(
            tenant_id = %context.tenant_id(),
            subject = context.subject(),
            permission = permission.as_str(),
            "permission denied"
        );

        Err(AppError::Forbidden(format!(
            "missing permission '{}' in tenant '{}'",
            permission.as_str(),
            context.tenant_id()
        )))
    }
}
