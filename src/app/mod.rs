//! Application Layer
//!
//! Routes are always available; app initialization, global entities and the
//! workspace need the `gui` feature.

pub mod navigation;

#[cfg(feature = "gui")]
pub mod application;
#[cfg(feature = "gui")]
pub mod entities;
#[cfg(feature = "gui")]
pub mod workspace;
