use std::sync::Arc;

use ledgerline_domain::Permission;
use tracing::debug;

use crate::{AccessContext, GrantTable};

mod areas;
mod assignment;
mod permissions;

#[cfg(test)]
mod tests;

/// Tenant-scoped access decisions over the static grant table.
///
/// Every decision is a pure function of the supplied context, so the
/// resolver can be shared freely between request tasks.
#[derive(Debug, Clone)]
pub struct AccessResolver {
    grant_table: Arc<GrantTable>,
}

impl AccessResolver {
    /// Creates a resolver over a grant table.
    #[must_use]
    pub fn new(grant_table: Arc<GrantTable>) -> Self {
        Self { grant_table }
    }

    /// Creates a resolver over the built-in role tiers.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Arc::new(GrantTable::standard()))
    }

    /// Returns the grant table backing this resolver.
    #[must_use]
    pub fn grant_table(&self) -> &GrantTable {
        self.grant_table.as_ref()
    }

    /// Returns whether the caller holds the permission.
    ///
    /// Role grants (including the wildcard) are checked first, then the
    /// caller's explicit overrides.
    #[must_use]
    pub fn has_permission(&self, context: &AccessContext, permission: Permission) -> bool {
        let granted_by_role = context
            .role()
            .is_some_and(|role| self.grant_table.grants_for(role).contains(permission));
        if granted_by_role {
            return true;
        }

        if context.permission_overrides().contains(&permission) {
            debug!(
                tenant_id = %context.tenant_id(),
                subject = context.subject(),
                permission = permission.as_str(),
                "permission granted by override"
            );
            return true;
        }

        false
    }

    /// Returns role grants and overrides together, in catalog order.
    #[must_use]
    pub fn effective_permissions(&self, context: &AccessContext) -> Vec<Permission> {
        Permission::all()
            .iter()
            .copied()
            .filter(|permission| self.has_permission(context, *permission))
            .collect()
    }
}

impl Default for AccessResolver {
    fn default() -> Self {
        Self::standard()
    }
}
