//! Theme - Colors and Text Sizes

pub mod colors;
pub mod typography;
