//! Shared DTOs between the warehouse admin frontend and its REST backend.

pub mod domain;
pub mod shared;
pub mod system;
