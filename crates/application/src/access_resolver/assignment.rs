use ledgerline_core::{AppError, AppResult};
use ledgerline_domain::{Permission, Role};

use super::*;

impl AccessResolver {
    /// Returns whether the caller's role weighs at least as much as `role`.
    #[must_use]
    pub fn is_role_at_least(&self, context: &AccessContext, role: Role) -> bool {
        context.role_weight() >= role.weight()
    }

    /// Returns the roles the caller may hand out, in ascending weight order.
    ///
    /// Only assignable roles at or below the caller's own weight are
    /// offered. A caller without a recognized role gets nothing.
    #[must_use]
    pub fn available_roles_for_assignment(&self, context: &AccessContext) -> Vec<Role> {
        let ceiling = context.role_weight();
        Role::all()
            .iter()
            .copied()
            .filter(|role| role.is_assignable() && role.weight() <= ceiling)
            .collect()
    }

    /// Ensures the caller may assign `target` to another user.
    pub fn ensure_can_assign_role(&self, context: &AccessContext, target: Role) -> AppResult<()> {
        self.require_permission(context, Permission::AssignRole)?;

        if !self.available_roles_for_assignment(context).contains(&target) {
            debug!(
                tenant_id = %context.tenant_id(),
                subject = context.subject(),
                target = target.as_str(),
                "role assignment rejected"
            );

            return Err(AppError::Forbidden(format!(
                "role '{}' cannot be assigned from the current role in tenant '{}'",
                target.as_str(),
                context.tenant_id()
            )));
        }

        Ok(())
    }
}
