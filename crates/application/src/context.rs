use ledgerline_core::{NonEmptyString, TenantId};
use ledgerline_domain::{Permission, Role, RoleWeight};
use tracing::warn;

/// Per-request view of the caller consumed by access decisions.
///
/// Contexts are built fresh for every request so that a role change takes
/// effect on the next call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessContext {
    tenant_id: TenantId,
    subject: Option<NonEmptyString>,
    role: Option<Role>,
    permission_overrides: Vec<Permission>,
}

impl AccessContext {
    /// Creates a context for a recognized role, or `None` for an
    /// unrecognized one.
    #[must_use]
    pub fn new(tenant_id: TenantId, role: Option<Role>) -> Self {
        Self {
            tenant_id,
            subject: None,
            role,
            permission_overrides: Vec::new(),
        }
    }

    /// Builds a context from untrusted session tags.
    ///
    /// Unknown role tags map to no role and unknown override tags are
    /// dropped, so a corrupted session can only lose access.
    #[must_use]
    pub fn from_tags<'a>(
        tenant_id: TenantId,
        role_tag: &str,
        override_tags: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let role = match Role::from_transport(role_tag.trim()) {
            Ok(role) => Some(role),
            Err(_) => {
                warn!(%tenant_id, role_tag, "unrecognized role tag, treating as no role");
                None
            }
        };

        let mut permission_overrides = Vec::new();
        for tag in override_tags {
            let tag = tag.trim();
            if tag.is_empty() {
                continue;
            }

            match Permission::from_transport(tag) {
                Ok(permission) => {
                    if !permission_overrides.contains(&permission) {
                        permission_overrides.push(permission);
                    }
                }
                Err(_) => warn!(%tenant_id, tag, "dropping unrecognized permission override"),
            }
        }

        Self {
            tenant_id,
            subject: None,
            role,
            permission_overrides,
        }
    }

    /// Attaches the subject used for log correlation.
    #[must_use]
    pub fn with_subject(mut self, subject: NonEmptyString) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Replaces the explicit per-user permission overrides.
    #[must_use]
    pub fn with_permission_overrides(
        mut self,
        overrides: impl IntoIterator<Item = Permission>,
    ) -> Self {
        self.permission_overrides = Vec::new();
        for permission in overrides {
            if !self.permission_overrides.contains(&permission) {
                self.permission_overrides.push(permission);
            }
        }
        self
    }

    /// Returns the tenant the caller acts in.
    #[must_use]
    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    /// Returns the caller subject, if known.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_ref().map(NonEmptyString::as_str)
    }

    /// Returns the recognized role, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Returns the weight of the caller's role, zero when unrecognized.
    #[must_use]
    pub fn role_weight(&self) -> RoleWeight {
        self.role.map_or(RoleWeight::NONE, |role| role.weight())
    }

    /// Returns explicit per-user permission overrides.
    #[must_use]
    pub fn permission_overrides(&self) -> &[Permission] {
        self.permission_overrides.as_slice()
    }
}
