//! Primitive Components
//!
//! Basic building blocks like buttons, inputs, etc.

pub mod badge;
pub mod button;
pub mod card;
pub mod rating;
pub mod text_input;
