use std::str::FromStr;

use ledgerline_core::AppError;
use serde::{Deserialize, Serialize};

use crate::FeatureArea;

/// Atomic capabilities gating dashboard features and actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    /// Allows listing and opening invoices.
    ReadInvoice,
    /// Allows drafting new invoices.
    CreateInvoice,
    /// Allows editing draft invoices.
    UpdateInvoice,
    /// Allows voiding invoices.
    DeleteInvoice,
    /// Allows approving invoices for payment.
    ApproveInvoice,
    /// Allows sending invoices to customers.
    SendInvoice,
    /// Allows viewing connected bank accounts and balances.
    ReadBankAccount,
    /// Allows linking a new bank account.
    ConnectBankAccount,
    /// Allows matching bank transactions against ledger entries.
    ReconcileTransaction,
    /// Allows viewing stock levels.
    ReadInventory,
    /// Allows adjusting stock and items.
    ManageInventory,
    /// Allows submitting documents for OCR processing.
    ProcessDocument,
    /// Allows AI categorization of transactions.
    AutoCategorize,
    /// Allows generating cash-flow forecasts.
    GenerateForecast,
    /// Allows viewing fraud alerts.
    ViewFraudAlerts,
    /// Allows viewing vendors.
    ReadVendor,
    /// Allows running vendor verification.
    VerifyVendor,
    /// Allows viewing financial reports.
    ViewReports,
    /// Allows exporting financial reports.
    ExportReports,
    /// Allows listing tenant users.
    ReadUser,
    /// Allows inviting users into the tenant.
    CreateUser,
    /// Allows editing tenant users.
    UpdateUser,
    /// Allows removing tenant users.
    DeleteUser,
    /// Allows changing another user's role.
    AssignRole,
    /// Allows editing tenant settings.
    ManageTenantSettings,
    /// Allows managing subscription and billing.
    ManageBilling,
    /// Allows reading the tenant audit log.
    ViewAuditLog,
    /// Allows operating on tenants across the platform.
    ManageTenants,
}

impl Permission {
    /// Returns the stable transport value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadInvoice => "READ_INVOICE",
            Self::CreateInvoice => "CREATE_INVOICE",
            Self::UpdateInvoice => "UPDATE_INVOICE",
            Self::DeleteInvoice => "DELETE_INVOICE",
            Self::ApproveInvoice => "APPROVE_INVOICE",
            Self::SendInvoice => "SEND_INVOICE",
            Self::ReadBankAccount => "READ_BANK_ACCOUNT",
            Self::ConnectBankAccount => "CONNECT_BANK_ACCOUNT",
            Self::ReconcileTransaction => "RECONCILE_TRANSACTION",
            Self::ReadInventory => "READ_INVENTORY",
            Self::ManageInventory => "MANAGE_INVENTORY",
            Self::ProcessDocument => "PROCESS_DOCUMENT",
            Self::AutoCategorize => "AUTO_CATEGORIZE",
            Self::GenerateForecast => "GENERATE_FORECAST",
            Self::ViewFraudAlerts => "VIEW_FRAUD_ALERTS",
            Self::ReadVendor => "READ_VENDOR",
            Self::VerifyVendor => "VERIFY_VENDOR",
            Self::ViewReports => "VIEW_REPORTS",
            Self::ExportReports => "EXPORT_REPORTS",
            Self::ReadUser => "READ_USER",
            Self::CreateUser => "CREATE_USER",
            Self::UpdateUser => "UPDATE_USER",
            Self::DeleteUser => "DELETE_USER",
            Self::AssignRole => "ASSIGN_ROLE",
            Self::ManageTenantSettings => "MANAGE_TENANT_SETTINGS",
            Self::ManageBilling => "MANAGE_BILLING",
            Self::ViewAuditLog => "VIEW_AUDIT_LOG",
            Self::ManageTenants => "MANAGE_TENANTS",
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::ReadInvoice,
            Permission::CreateInvoice,
            Permission::UpdateInvoice,
            Permission::DeleteInvoice,
            Permission::ApproveInvoice,
            Permission::SendInvoice,
            Permission::ReadBankAccount,
            Permission::ConnectBankAccount,
            Permission::ReconcileTransaction,
            Permission::ReadInventory,
            Permission::ManageInventory,
            Permission::ProcessDocument,
            Permission::AutoCategorize,
            Permission::GenerateForecast,
            Permission::ViewFraudAlerts,
            Permission::ReadVendor,
            Permission::VerifyVendor,
            Permission::ViewReports,
            Permission::ExportReports,
            Permission::ReadUser,
            Permission::CreateUser,
            Permission::UpdateUser,
            Permission::DeleteUser,
            Permission::AssignRole,
            Permission::ManageTenantSettings,
            Permission::ManageBilling,
            Permission::ViewAuditLog,
            Permission::ManageTenants,
        ];

        ALL
    }

    /// Returns the feature area this permission belongs to.
    #[must_use]
    pub fn feature_area(&self) -> FeatureArea {
        match self {
            Self::ReadInvoice
            | Self::CreateInvoice
            | Self::UpdateInvoice
            | Self::DeleteInvoice
            | Self::ApproveInvoice
            | Self::SendInvoice => FeatureArea::Invoicing,
            Self::ReadBankAccount | Self::ConnectBankAccount | Self::ReconcileTransaction => {
                FeatureArea::Banking
            }
            Self::ReadInventory | Self::ManageInventory => FeatureArea::Inventory,
            Self::ProcessDocument
            | Self::AutoCategorize
            | Self::GenerateForecast
            | Self::ViewFraudAlerts => FeatureArea::AiProcessing,
            Self::ReadVendor | Self::VerifyVendor => FeatureArea::Vendors,
            Self::ViewReports | Self::ExportReports => FeatureArea::Reports,
            Self::ReadUser
            | Self::CreateUser
            | Self::UpdateUser
            | Self::DeleteUser
            | Self::AssignRole => FeatureArea::UserManagement,
            Self::ManageTenantSettings | Self::ManageBilling | Self::ViewAuditLog => {
                FeatureArea::TenantSettings
            }
            Self::ManageTenants => FeatureArea::Platform,
        }
    }

    /// Parses a transport value into a permission.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|permission| permission.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown permission value '{value}'")))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Permission;
    use crate::FeatureArea;

    #[test]
    fn permission_roundtrip_storage_value() {
        let permission = Permission::AutoCategorize;
        let restored = Permission::from_str(permission.as_str());
        assert!(matches!(restored, Ok(Permission::AutoCategorize)));
    }

    #[test]
    fn unknown_permission_is_rejected() {
        assert!(Permission::from_str("NOT_A_REAL_PERMISSION").is_err());
        assert!(Permission::from_str("read_invoice").is_err());
        assert!(Permission::from_str("*").is_err());
    }

    #[test]
    fn serde_uses_transport_values() {
        let encoded = serde_json::to_string(&Permission::ViewFraudAlerts).unwrap_or_default();
        assert_eq!(encoded, "\"VIEW_FRAUD_ALERTS\"");

        let decoded: Result<Permission, _> = serde_json::from_str("\"GENERATE_FORECAST\"");
        assert!(matches!(decoded, Ok(Permission::GenerateForecast)));
    }

    #[test]
    fn transport_values_are_unique() {
        let mut values: Vec<&str> = Permission::all().iter().map(Permission::as_str).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), Permission::all().len());
    }

    #[test]
    fn platform_area_only_holds_tenant_management() {
        let platform: Vec<Permission> = Permission::all()
            .iter()
            .copied()
            .filter(|permission| permission.feature_area() == FeatureArea::Platform)
            .collect();
        assert_eq!(platform, vec![Permission::ManageTenants]);
    }
}
