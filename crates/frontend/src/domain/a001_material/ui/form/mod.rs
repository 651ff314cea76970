//! Create/edit dialog for materials.
//!
//! - view_model.rs: form state, validation and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::MaterialFormDialog;
pub use view_model::MaterialFormViewModel;
