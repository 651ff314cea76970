pub mod aggregate;
pub mod form;

pub use aggregate::{Material, MaterialId, MaterialStats, Unit};
pub use form::{MaterialForm, MaterialPayload};
