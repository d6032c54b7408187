//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and describe the portfolio itself.

pub mod contact;
pub mod filter;
pub mod profile;
pub mod project;
pub mod skill;

pub use contact::{ContactField, ContactForm};
pub use filter::{CategoryFilter, FilterState, visible};
pub use project::{CATALOG, ProjectCategory, ProjectRecord};
pub use skill::{SKILL_GROUPS, Skill, SkillArea, SkillLevel};
