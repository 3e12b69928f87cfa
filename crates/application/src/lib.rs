//! Access resolution services.

#![forbid(unsafe_code)]

mod access_resolver;
mod context;
mod grant_table;
mod permission_gate;

pub use access_resolver::AccessResolver;
pub use context::AccessContext;
pub use grant_table::GrantTable;
pub use permission_gate::{GateDecision, GateRequirement, PermissionGate};
