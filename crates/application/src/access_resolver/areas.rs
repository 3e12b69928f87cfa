use ledgerline_domain::FeatureArea;

use super::*;

impl AccessResolver {
    /// Returns whether the caller's role is always allowed into the area.
    #[must_use]
    pub fn is_elevated_for(&self, context: &AccessContext, area: FeatureArea) -> bool {
        context
            .role()
            .is_some_and(|role| area.elevated_roles().contains(&role))
    }

    /// Returns the areas a caller may navigate to.
    ///
    /// An area is accessible when the caller holds at least one of its
    /// permissions (logical OR) or is elevated for it.
    #[must_use]
    pub fn accessible_areas(&self, context: &AccessContext) -> Vec<FeatureArea> {
        let mut areas = Vec::new();
        for area in FeatureArea::all() {
            let has_access = self.is_elevated_for(context, *area)
                || self.has_any_permission(context, &area.required_permissions());
            if has_access {
                areas.push(*area);
            }
        }

        areas
    }

    /// Returns the areas where the caller's role is elevated.
    #[must_use]
    pub fn elevated_areas(&self, context: &AccessContext) -> Vec<FeatureArea> {
        FeatureArea::all()
            .iter()
            .copied()
            .filter(|area| self.is_elevated_for(context, *area))
            .collect()
    }
}
