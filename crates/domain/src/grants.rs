use crate::{Permission, Role};

/// Transport value of the wildcard grant.
pub const WILDCARD_GRANT: &str = "*";

/// Default permissions attached to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleGrants {
    /// Wildcard: every permission, including ones added later.
    All,
    /// Exactly the listed permissions.
    Listed(&'static [Permission]),
}

impl RoleGrants {
    /// Returns whether the grants include the permission.
    #[must_use]
    pub fn contains(&self, permission: Permission) -> bool {
        match self {
            Self::All => true,
            Self::Listed(permissions) => permissions.contains(&permission),
        }
    }

    /// Returns whether this is the wildcard grant.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::All)
    }
}

// Tiers are cumulative: each one repeats the tier below it.

const VIEWER_TIER: &[Permission] = &[
    Permission::ReadInvoice,
    Permission::ReadInventory,
    Permission::ReadVendor,
    Permission::ViewReports,
];

const STAFF_TIER: &[Permission] = &[
    Permission::ReadInvoice,
    Permission::ReadInventory,
    Permission::ReadVendor,
    Permission::ViewReports,
    Permission::CreateInvoice,
    Permission::UpdateInvoice,
    Permission::ReadBankAccount,
    Permission::ProcessDocument,
];

const ACCOUNTANT_TIER: &[Permission] = &[
    Permission::ReadInvoice,
    Permission::ReadInventory,
    Permission::ReadVendor,
    Permission::ViewReports,
    Permission::CreateInvoice,
    Permission::UpdateInvoice,
    Permission::ReadBankAccount,
    Permission::ProcessDocument,
    Permission::SendInvoice,
    Permission::ReconcileTransaction,
    Permission::ManageInventory,
    Permission::AutoCategorize,
    Permission::ExportReports,
    Permission::ReadUser,
];

const CFO_TIER: &[Permission] = &[
    Permission::ReadInvoice,
    Permission::ReadInventory,
    Permission::ReadVendor,
    Permission::ViewReports,
    Permission::CreateInvoice,
    Permission::UpdateInvoice,
    Permission::ReadBankAccount,
    Permission::ProcessDocument,
    Permission::SendInvoice,
    Permission::ReconcileTransaction,
    Permission::ManageInventory,
    Permission::AutoCategorize,
    Permission::ExportReports,
    Permission::ReadUser,
    Permission::ApproveInvoice,
    Permission::DeleteInvoice,
    Permission::ConnectBankAccount,
    Permission::GenerateForecast,
    Permission::ViewFraudAlerts,
    Permission::VerifyVendor,
];

const FIRM_ADMIN_TIER: &[Permission] = &[
    Permission::ReadInvoice,
    Permission::ReadInventory,
    Permission::ReadVendor,
    Permission::ViewReports,
    Permission::CreateInvoice,
    Permission::UpdateInvoice,
    Permission::ReadBankAccount,
    Permission::ProcessDocument,
    Permission::SendInvoice,
    Permission::ReconcileTransaction,
    Permission::ManageInventory,
    Permission::AutoCategorize,
    Permission::ExportReports,
    Permission::ReadUser,
    Permission::ApproveInvoice,
    Permission::DeleteInvoice,
    Permission::ConnectBankAccount,
    Permission::GenerateForecast,
    Permission::ViewFraudAlerts,
    Permission::VerifyVendor,
    Permission::CreateUser,
    Permission::UpdateUser,
    Permission::AssignRole,
];

const TENANT_ADMIN_TIER: &[Permission] = &[
    Permission::ReadInvoice,
    Permission::ReadInventory,
    Permission::ReadVendor,
    Permission::ViewReports,
    Permission::CreateInvoice,
    Permission::UpdateInvoice,
    Permission::ReadBankAccount,
    Permission::ProcessDocument,
    Permission::SendInvoice,
    Permission::ReconcileTransaction,
    Permission::ManageInventory,
    Permission::AutoCategorize,
    Permission::ExportReports,
    Permission::ReadUser,
    Permission::ApproveInvoice,
    Permission::DeleteInvoice,
    Permission::ConnectBankAccount,
    Permission::GenerateForecast,
    Permission::ViewFraudAlerts,
    Permission::VerifyVendor,
    Permission::CreateUser,
    Permission::UpdateUser,
    Permission::AssignRole,
    Permission::DeleteUser,
    Permission::ManageTenantSettings,
    Permission::ManageBilling,
    Permission::ViewAuditLog,
];

impl Role {
    /// Returns the default grants of this role.
    #[must_use]
    pub fn default_grants(&self) -> RoleGrants {
        match self {
            Self::PlatformAdmin => RoleGrants::All,
            Self::SuperAdmin | Self::TenantAdmin => RoleGrants::Listed(TENANT_ADMIN_TIER),
            Self::FirmAdmin => RoleGrants::Listed(FIRM_ADMIN_TIER),
            Self::Cfo => RoleGrants::Listed(CFO_TIER),
            Self::Accountant => RoleGrants::Listed(ACCOUNTANT_TIER),
            Self::Staff | Self::FirmStaff => RoleGrants::Listed(STAFF_TIER),
            Self::Viewer => RoleGrants::Listed(VIEWER_TIER),
        }
    }
}
