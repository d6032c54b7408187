//! Colors - Space Theme Palette

use gpui::{Rgba, rgb, rgba};

use crate::domain::SkillLevel;

/// Portfolio color palette - All colors are accessed via associated functions
pub struct PortfolioColors;

impl PortfolioColors {
    // Backgrounds
    /// Deep space window background
    pub fn background() -> Rgba { rgb(0x0b1020) }
    /// Navigation bar background
    pub fn navbar_bg() -> Rgba { rgba(0x0f172ae6) }
    /// Card background
    pub fn card_bg() -> Rgba { rgba(0x1e293b80) }
    /// Input background
    pub fn input_bg() -> Rgba { rgba(0x0f172acc) }

    // Accents
    /// Primary accent - Purple
    pub fn accent() -> Rgba { rgb(0x9333ea) }
    /// Accent on hover
    pub fn accent_hover() -> Rgba { rgb(0x7e22ce) }
    /// Secondary accent - Blue
    pub fn accent_blue() -> Rgba { rgb(0x2563eb) }
    /// Tertiary accent - Cyan
    pub fn accent_cyan() -> Rgba { rgb(0x0891b2) }

    // Text colors
    /// Headings
    pub fn text_primary() -> Rgba { rgb(0xffffff) }
    /// Body text
    pub fn text_secondary() -> Rgba { rgb(0xe9d5ff) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0xa78bfa) }
    /// Active navigation entry
    pub fn text_active() -> Rgba { rgb(0xd8b4fe) }

    // Borders
    /// Default border
    pub fn border() -> Rgba { rgba(0xa855f733) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0xa855f7) }

    // Stars
    pub fn star_on() -> Rgba { rgb(0xfacc15) }
    pub fn star_off() -> Rgba { rgb(0x4b5563) }

    // Button colors
    /// Ghost button hover background
    pub fn ghost_hover() -> Rgba { rgba(0x9333ea4d) }
    /// Placeholder text
    pub fn input_placeholder() -> Rgba { rgb(0x7c6f9b) }
}

impl PortfolioColors {
    /// Badge color for a skill level
    pub fn level(level: SkillLevel) -> Rgba {
        match level {
            SkillLevel::Beginner => rgb(0xf87171),
            SkillLevel::Intermediate => rgb(0xfacc15),
            SkillLevel::Advanced => rgb(0x60a5fa),
            SkillLevel::Expert => rgb(0x4ade80),
        }
    }
}
