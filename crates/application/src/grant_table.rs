use std::collections::HashMap;

use ledgerline_domain::{Permission, Role, RoleGrants};

/// Read-only role to grant mapping, built once at startup.
#[derive(Debug, Clone)]
pub struct GrantTable {
    grants: HashMap<Role, RoleGrants>,
}

impl GrantTable {
    /// Builds the table from the built-in role tiers.
    #[must_use]
    pub fn standard() -> Self {
        let grants = Role::all()
            .iter()
            .map(|role| (*role, role.default_grants()))
            .collect();

        Self { grants }
    }

    /// Returns the grants of a role.
    #[must_use]
    pub fn grants_for(&self, role: Role) -> RoleGrants {
        self.grants
            .get(&role)
            .copied()
            .unwrap_or(RoleGrants::Listed(&[]))
    }

    /// Returns the concrete permissions of a role, with the wildcard
    /// expanded, in catalog order.
    #[must_use]
    pub fn effective_permissions(&self, role: Role) -> Vec<Permission> {
        let grants = self.grants_for(role);
        Permission::all()
            .iter()
            .copied()
            .filter(|permission| grants.contains(*permission))
            .collect()
    }
}

impl Default for GrantTable {
    fn default() -> Self {
        Self::standard()
    }
}
