//! Top navigation bar with permission-gated dropdown menus.
//!
//! The pure core (`menu_tree`, `coordinator`, `position`, `render` and the
//! dismisser model in `outside_click`) has no DOM dependencies beyond type
//! conversions and is unit tested natively. `context` wraps the coordinator
//! in a signal; the remaining modules are the Leptos components.

pub mod context;
pub mod coordinator;
pub mod menu_config;
pub mod menu_tree;
pub mod outside_click;
pub mod position;
pub mod render;

mod desktop;
mod mobile;
mod navbar;
mod profile_menu;

pub use context::{use_nav_menu, NavMenuContext};
pub use navbar::Navbar;
