//! Layout Components
//!
//! Navigation bar and page background.

pub mod background;
pub mod navbar;
