use std::fmt::{Display, Formatter};
use std::str::FromStr;

use ledgerline_core::AppError;
use serde::{Deserialize, Serialize};

/// Relative privilege of a role. Higher is more privileged.
///
/// Weights exist only for comparison and never leave the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoleWeight(u8);

impl RoleWeight {
    /// Weight of an absent or unrecognized role.
    pub const NONE: Self = Self(0);
}

/// Organizational position of a user inside a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Operator of the whole platform.
    PlatformAdmin,
    /// Cross-tenant support administrator.
    SuperAdmin,
    /// Owner-level administrator of one tenant.
    TenantAdmin,
    /// Administrator of an accounting firm inside a tenant.
    FirmAdmin,
    /// Chief financial officer.
    Cfo,
    /// Bookkeeping and reconciliation user.
    Accountant,
    /// General staff member.
    Staff,
    /// Legacy firm staff tag, display only.
    FirmStaff,
    /// Legacy read-only tag, display only.
    Viewer,
}

impl Role {
    /// Returns every role in ascending weight order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::Viewer,
            Role::Staff,
            Role::FirmStaff,
            Role::Accountant,
            Role::Cfo,
            Role::FirmAdmin,
            Role::TenantAdmin,
            Role::SuperAdmin,
            Role::PlatformAdmin,
        ];

        ALL
    }

    /// Returns the stable transport value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlatformAdmin => "platform_admin",
            Self::SuperAdmin => "super_admin",
            Self::TenantAdmin => "tenant_admin",
            Self::FirmAdmin => "firm_admin",
            Self::Cfo => "cfo",
            Self::Accountant => "accountant",
            Self::Staff => "staff",
            Self::FirmStaff => "firm_staff",
            Self::Viewer => "viewer",
        }
    }

    /// Returns the label shown in role-selection controls.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PlatformAdmin => "Platform Admin",
            Self::SuperAdmin => "Super Admin",
            Self::TenantAdmin => "Tenant Admin",
            Self::FirmAdmin => "Firm Admin",
            Self::Cfo => "CFO",
            Self::Accountant => "Accountant",
            Self::Staff => "Staff",
            Self::FirmStaff => "Firm Staff",
            Self::Viewer => "Viewer",
        }
    }

    /// Returns the privilege weight of this role.
    #[must_use]
    pub fn weight(&self) -> RoleWeight {
        RoleWeight(match self {
            Self::PlatformAdmin => 100,
            Self::SuperAdmin => 90,
            Self::TenantAdmin => 80,
            Self::FirmAdmin => 70,
            Self::Cfo => 60,
            Self::Accountant => 50,
            Self::FirmStaff => 40,
            Self::Staff => 30,
            Self::Viewer => 10,
        })
    }

    /// Returns whether the role can be granted through user management.
    ///
    /// Platform-level roles are provisioned out of band and the legacy tags
    /// are not valid backend roles.
    #[must_use]
    pub fn is_assignable(&self) -> bool {
        !matches!(
            self,
            Self::PlatformAdmin | Self::SuperAdmin | Self::FirmStaff | Self::Viewer
        )
    }

    /// Parses a transport value into a role.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown role value '{value}'")))
    }
}
