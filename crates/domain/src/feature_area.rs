use std::str::FromStr;

use ledgerline_core::AppError;
use serde::{Deserialize, Serialize};

use crate::{Permission, Role};

/// Top-level dashboard areas that navigation and gates are keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureArea {
    /// Invoices and receivables.
    Invoicing,
    /// Bank accounts and reconciliation.
    Banking,
    /// Stock and items.
    Inventory,
    /// Document OCR, categorization, forecasting and fraud alerts.
    AiProcessing,
    /// Vendor records and verification.
    Vendors,
    /// Financial reporting.
    Reports,
    /// Tenant user administration.
    UserManagement,
    /// Tenant configuration, billing and audit.
    TenantSettings,
    /// Cross-tenant platform operations.
    Platform,
}

impl FeatureArea {
    /// Returns all feature areas in navigation order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[FeatureArea] = &[
            FeatureArea::Invoicing,
            FeatureArea::Banking,
            FeatureArea::Inventory,
            FeatureArea::AiProcessing,
            FeatureArea::Vendors,
            FeatureArea::Reports,
            FeatureArea::UserManagement,
            FeatureArea::TenantSettings,
            FeatureArea::Platform,
        ];

        ALL
    }

    /// Returns the stable transport value for this area.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invoicing => "invoicing",
            Self::Banking => "banking",
            Self::Inventory => "inventory",
            Self::AiProcessing => "ai_processing",
            Self::Vendors => "vendors",
            Self::Reports => "reports",
            Self::UserManagement => "user_management",
            Self::TenantSettings => "tenant_settings",
            Self::Platform => "platform",
        }
    }

    /// Returns roles that are always allowed into this area when a gate
    /// asks for the elevated short-circuit.
    ///
    /// Roles above tenant admin are elevated wherever tenant admin is.
    #[must_use]
    pub fn elevated_roles(&self) -> &'static [Role] {
        const FINANCE: &[Role] = &[
            Role::PlatformAdmin,
            Role::SuperAdmin,
            Role::TenantAdmin,
            Role::Cfo,
        ];
        const TENANT: &[Role] = &[Role::PlatformAdmin, Role::SuperAdmin, Role::TenantAdmin];
        const NOBODY: &[Role] = &[];

        match self {
            Self::Invoicing
            | Self::Banking
            | Self::AiProcessing
            | Self::Vendors
            | Self::Reports => FINANCE,
            Self::Inventory | Self::UserManagement | Self::TenantSettings => TENANT,
            Self::Platform => NOBODY,
        }
    }

    /// Returns the permissions that open this area.
    ///
    /// Holding any one of them is enough (logical OR).
    #[must_use]
    pub fn required_permissions(&self) -> Vec<Permission> {
        Permission::all()
            .iter()
            .copied()
            .filter(|permission| permission.feature_area() == *self)
            .collect()
    }
}

impl FromStr for FeatureArea {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|area| area.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown feature area '{value}'")))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::FeatureArea;
    use crate::{Permission, Role};

    #[test]
    fn every_area_requires_at_least_one_permission() {
        for area in FeatureArea::all() {
            assert!(
                !area.required_permissions().is_empty(),
                "{} has no permissions",
                area.as_str()
            );
        }
    }

    #[test]
    fn tenant_admin_and_cfo_are_elevated_for_invoicing() {
        let roles = FeatureArea::Invoicing.elevated_roles();
        assert!(roles.contains(&Role::TenantAdmin));
        assert!(roles.contains(&Role::Cfo));
        assert!(!roles.contains(&Role::Accountant));
    }

    #[test]
    fn roles_above_tenant_admin_are_elevated_wherever_it_is() {
        for area in FeatureArea::all() {
            let roles = area.elevated_roles();
            if !roles.contains(&Role::TenantAdmin) {
                continue;
            }

            for role in Role::all() {
                if role.weight() >= Role::TenantAdmin.weight() {
                    assert!(
                        roles.contains(role),
                        "{} is not elevated on {}",
                        role.as_str(),
                        area.as_str()
                    );
                }
            }
        }
    }

    #[test]
    fn platform_has_no_elevated_roles() {
        assert!(FeatureArea::Platform.elevated_roles().is_empty());
    }

    #[test]
    fn reports_area_lists_report_permissions() {
        assert_eq!(
            FeatureArea::Reports.required_permissions(),
            vec![Permission::ViewReports, Permission::ExportReports]
        );
    }

    #[test]
    fn area_parses_transport_value() {
        assert!(matches!(
            FeatureArea::from_str("ai_processing"),
            Ok(FeatureArea::AiProcessing)
        ));
        assert!(FeatureArea::from_str("web3").is_err());
    }
}
