//! Session permission checks for menus, routes and actions.

pub mod context;
pub mod gate;

pub use context::{provide_session_permissions, use_permissions, SessionPermissions};
pub use gate::{PermissionGate, RequirePermission, RequireRead};
