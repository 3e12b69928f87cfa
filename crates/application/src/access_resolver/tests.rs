use ledgerline_core::{AppError, TenantId};
use ledgerline_domain::{FeatureArea, Permission, Role, RoleGrants};
use proptest::prelude::*;
use proptest::sample::select;

use super::AccessResolver;
use crate::AccessContext;

fn context_for(role: Role) -> AccessContext {
    AccessContext::new(TenantId::new(), Some(role))
}

fn unknown_role_context() -> AccessContext {
    AccessContext::from_tags(TenantId::new(), "corrupted", std::iter::empty())
}

fn any_role() -> impl Strategy<Value = Role> {
    select(Role::all().to_vec())
}

fn any_permission() -> impl Strategy<Value = Permission> {
    select(Permission::all().to_vec())
}

#[test]
fn tenant_admin_reads_invoices() {
    let resolver = AccessResolver::standard();
    assert!(resolver.has_permission(&context_for(Role::TenantAdmin), Permission::ReadInvoice));
}

#[test]
fn staff_override_grants_auto_categorize() {
    let resolver = AccessResolver::standard();
    let plain = context_for(Role::Staff);
    let with_override = plain
        .clone()
        .with_permission_overrides([Permission::AutoCategorize]);

    assert!(!resolver.has_permission(&plain, Permission::AutoCategorize));
    assert!(resolver.has_permission(&with_override, Permission::AutoCategorize));
}

#[test]
fn cfo_cannot_assign_tenant_admin() {
    let resolver = AccessResolver::standard();
    let roles = resolver.available_roles_for_assignment(&context_for(Role::Cfo));

    assert_eq!(roles, vec![Role::Staff, Role::Accountant, Role::Cfo]);
    assert!(!roles.contains(&Role::TenantAdmin));
}

#[test]
fn tenant_admin_assignable_roles_are_ordered() {
    let resolver = AccessResolver::standard();
    assert_eq!(
        resolver.available_roles_for_assignment(&context_for(Role::TenantAdmin)),
        vec![
            Role::Staff,
            Role::Accountant,
            Role::Cfo,
            Role::FirmAdmin,
            Role::TenantAdmin,
        ]
    );
}

#[test]
fn platform_admin_never_offers_platform_roles() {
    let resolver = AccessResolver::standard();
    let roles = resolver.available_roles_for_assignment(&context_for(Role::PlatformAdmin));

    assert!(!roles.contains(&Role::PlatformAdmin));
    assert!(!roles.contains(&Role::SuperAdmin));
    assert_eq!(roles.len(), 5);
}

#[test]
fn unknown_role_gets_no_assignable_roles() {
    let resolver = AccessResolver::standard();
    assert!(
        resolver
            .available_roles_for_assignment(&unknown_role_context())
            .is_empty()
    );
}

#[test]
fn unknown_role_holds_only_overrides() {
    let resolver = AccessResolver::standard();
    let context = unknown_role_context().with_permission_overrides([Permission::ReadVendor]);

    assert_eq!(
        resolver.effective_permissions(&context),
        vec![Permission::ReadVendor]
    );
    assert!(!resolver.is_role_at_least(&context, Role::Viewer));
}

#[test]
fn role_comparison_follows_weights() {
    let resolver = AccessResolver::standard();
    assert!(resolver.is_role_at_least(&context_for(Role::Accountant), Role::Staff));
    assert!(!resolver.is_role_at_least(&context_for(Role::Staff), Role::Accountant));
    assert!(resolver.is_role_at_least(&context_for(Role::Cfo), Role::Cfo));
}

#[test]
fn permission_tag_lookup_fails_closed() {
    let resolver = AccessResolver::standard();
    let context = context_for(Role::Accountant);

    assert!(resolver.has_permission_tag(&context, "RECONCILE_TRANSACTION"));
    assert!(!resolver.has_permission_tag(&context, "NOT_A_REAL_PERMISSION"));
    assert!(!resolver.has_permission_tag(&context, "*"));
}

#[test]
fn any_and_all_handle_empty_lists() {
    let resolver = AccessResolver::standard();
    let context = context_for(Role::Viewer);

    assert!(!resolver.has_any_permission(&context, &[]));
    assert!(resolver.has_all_permissions(&context, &[]));
}

#[test]
fn all_permissions_requires_every_entry() {
    let resolver = AccessResolver::standard();
    let context = context_for(Role::Accountant);

    assert!(resolver.has_all_permissions(
        &context,
        &[Permission::ReadInvoice, Permission::SendInvoice]
    ));
    assert!(!resolver.has_all_permissions(
        &context,
        &[Permission::ReadInvoice, Permission::ApproveInvoice]
    ));
    assert!(resolver.has_any_permission(
        &context,
        &[Permission::ApproveInvoice, Permission::SendInvoice]
    ));
}

#[test]
fn require_permission_returns_forbidden() {
    let resolver = AccessResolver::standard();
    let result = resolver.require_permission(&context_for(Role::Staff), Permission::ManageBilling);
    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

#[test]
fn ensure_can_assign_role_blocks_escalation() {
    let resolver = AccessResolver::standard();
    let firm_admin = context_for(Role::FirmAdmin);

    assert!(resolver.ensure_can_assign_role(&firm_admin, Role::Cfo).is_ok());
    assert!(matches!(
        resolver.ensure_can_assign_role(&firm_admin, Role::TenantAdmin),
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        resolver.ensure_can_assign_role(&firm_admin, Role::Viewer),
        Err(AppError::Forbidden(_))
    ));
}

#[test]
fn ensure_can_assign_role_requires_assign_permission() {
    let resolver = AccessResolver::standard();
    let accountant = context_for(Role::Accountant);

    assert!(matches!(
        resolver.ensure_can_assign_role(&accountant, Role::Staff),
        Err(AppError::Forbidden(_))
    ));

    let delegated = accountant.with_permission_overrides([Permission::AssignRole]);
    assert!(resolver.ensure_can_assign_role(&delegated, Role::Staff).is_ok());
}

#[test]
fn cfo_is_elevated_for_finance_areas_only() {
    let resolver = AccessResolver::standard();
    let context = context_for(Role::Cfo);

    assert!(resolver.is_elevated_for(&context, FeatureArea::Invoicing));
    assert!(resolver.is_elevated_for(&context, FeatureArea::AiProcessing));
    assert!(!resolver.is_elevated_for(&context, FeatureArea::UserManagement));
    assert!(!resolver.is_elevated_for(&unknown_role_context(), FeatureArea::Invoicing));
}

#[test]
fn super_admin_is_elevated_wherever_tenant_admin_is() {
    let resolver = AccessResolver::standard();
    let tenant_admin = context_for(Role::TenantAdmin);
    let super_admin = context_for(Role::SuperAdmin);

    for area in FeatureArea::all() {
        if resolver.is_elevated_for(&tenant_admin, *area) {
            assert!(resolver.is_elevated_for(&super_admin, *area));
        }
    }
    assert_eq!(
        resolver.elevated_areas(&super_admin),
        resolver.elevated_areas(&tenant_admin)
    );
    assert!(!resolver.is_elevated_for(&super_admin, FeatureArea::Platform));
}

#[test]
fn accessible_areas_for_viewer() {
    let resolver = AccessResolver::standard();
    assert_eq!(
        resolver.accessible_areas(&context_for(Role::Viewer)),
        vec![
            FeatureArea::Invoicing,
            FeatureArea::Inventory,
            FeatureArea::Vendors,
            FeatureArea::Reports,
        ]
    );
}

#[test]
fn accessible_areas_include_platform_only_for_wildcard() {
    let resolver = AccessResolver::standard();
    assert!(
        resolver
            .accessible_areas(&context_for(Role::PlatformAdmin))
            .contains(&FeatureArea::Platform)
    );
    assert!(
        !resolver
            .accessible_areas(&context_for(Role::SuperAdmin))
            .contains(&FeatureArea::Platform)
    );
}

proptest! {
    #[test]
    fn higher_roles_hold_lower_tier_permissions(
        higher in any_role(),
        lower in any_role(),
        permission in any_permission()
    ) {
        prop_assume!(higher.weight() >= lower.weight());
        let resolver = AccessResolver::standard();
        if resolver.has_permission(&context_for(lower), permission) {
            prop_assert!(resolver.has_permission(&context_for(higher), permission));
        }
    }

    #[test]
    fn unknown_tags_are_denied_for_every_role(role in any_role(), tag in "[a-z_]{1,24}") {
        let resolver = AccessResolver::standard();
        prop_assert!(!resolver.has_permission_tag(&context_for(role), tag.as_str()));
    }

    #[test]
    fn wildcard_roles_hold_everything(role in any_role(), permission in any_permission()) {
        let resolver = AccessResolver::standard();
        if matches!(resolver.grant_table().grants_for(role), RoleGrants::All) {
            prop_assert!(resolver.has_permission(&context_for(role), permission));
        }
    }

    #[test]
    fn assignable_roles_never_escalate(role in any_role()) {
        let resolver = AccessResolver::standard();
        let context = context_for(role);
        for assignable in resolver.available_roles_for_assignment(&context) {
            prop_assert!(assignable.weight() <= role.weight());
            prop_assert!(!matches!(
                assignable,
                Role::PlatformAdmin | Role::SuperAdmin | Role::FirmStaff | Role::Viewer
            ));
        }
    }

    #[test]
    fn overrides_take_precedence(role in any_role(), permission in any_permission()) {
        let resolver = AccessResolver::standard();
        let context = context_for(role).with_permission_overrides([permission]);
        prop_assert!(resolver.has_permission(&context, permission));
    }

    #[test]
    fn decisions_are_repeatable(role in any_role(), permission in any_permission()) {
        let resolver = AccessResolver::standard();
        let context = context_for(role);
        let first = resolver.has_permission(&context, permission);
        for _ in 0..8 {
            prop_assert_eq!(resolver.has_permission(&context, permission), first);
        }
    }
}
