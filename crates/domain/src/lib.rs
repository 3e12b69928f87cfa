//! Domain vocabulary for tenant access control.

#![forbid(unsafe_code)]

mod feature_area;
mod grants;
mod permission;
mod role;

pub use feature_area::FeatureArea;
pub use grants::{RoleGrants, WILDCARD_GRANT};
pub use permission::Permission;
pub use role::{Role, RoleWeight};
