//! Components - Reusable UI Components
//!
//! Pure UI components; only the navbar touches shared state.

pub mod layout;
pub mod primitives;
