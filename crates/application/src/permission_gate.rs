use ledgerline_domain::{FeatureArea, Permission};

use crate::{AccessContext, AccessResolver};

/// What a gate requires before protected content is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateRequirement {
    /// No permission is required.
    Always,
    /// A single permission is required.
    Permission(Permission),
    /// At least one of the permissions is required.
    AnyOf(Vec<Permission>),
    /// Every one of the permissions is required.
    AllOf(Vec<Permission>),
}

/// Outcome of evaluating a gate for one caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Show the protected content.
    Render,
    /// Denied; show the configured fallback.
    Fallback,
    /// Denied; show nothing.
    Hidden,
}

impl GateDecision {
    /// Returns whether protected content may be shown.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Render)
    }

    /// Returns the stable transport value for this decision.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Render => "render",
            Self::Fallback => "fallback",
            Self::Hidden => "hidden",
        }
    }
}

/// Render predicate guarding a block of protected content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGate {
    requirement: GateRequirement,
    elevated_area: Option<FeatureArea>,
    has_fallback: bool,
}

impl PermissionGate {
    /// Creates a gate over a requirement.
    #[must_use]
    pub fn new(requirement: GateRequirement) -> Self {
        Self {
            requirement,
            elevated_area: None,
            has_fallback: false,
        }
    }

    /// Creates a gate requiring a single permission.
    #[must_use]
    pub fn require(permission: Permission) -> Self {
        Self::new(GateRequirement::Permission(permission))
    }

    /// Lets the area's elevated roles through regardless of permissions.
    #[must_use]
    pub fn always_allow_elevated(mut self, area: FeatureArea) -> Self {
        self.elevated_area = Some(area);
        self
    }

    /// Shows fallback content instead of nothing when denied.
    #[must_use]
    pub fn with_fallback(mut self) -> Self {
        self.has_fallback = true;
        self
    }

    /// Decides whether protected content is shown for the caller.
    #[must_use]
    pub fn evaluate(&self, resolver: &AccessResolver, context: &AccessContext) -> GateDecision {
        let elevated = self
            .elevated_area
            .is_some_and(|area| resolver.is_elevated_for(context, area));

        let satisfied = elevated
            || match &self.requirement {
                GateRequirement::Always => true,
                GateRequirement::Permission(permission) => {
                    resolver.has_permission(context, *permission)
                }
                GateRequirement::AnyOf(permissions) => {
                    resolver.has_any_permission(context, permissions)
                }
                GateRequirement::AllOf(permissions) => {
                    resolver.has_all_permissions(context, permissions)
                }
            };

        if satisfied {
            GateDecision::Render
        } else if self.has_fallback {
            GateDecision::Fallback
        } else {
            GateDecision::Hidden
        }
    }
}
