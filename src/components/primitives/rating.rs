//! Rating Component - star row for skill levels

use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px};

use crate::domain::SkillLevel;
use crate::theme::colors::PortfolioColors;

#[derive(IntoElement)]
pub struct Rating {
    level: SkillLevel,
}

impl Rating {
    pub fn new(level: SkillLevel) -> Self {
        Self { level }
    }
}

impl RenderOnce for Rating {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let filled = self.level.stars();
        div()
            .flex()
            .gap_1()
            .text_size(px(14.0))
            .children((0..SkillLevel::MAX_STARS).map(|i| {
                let color = if i < filled {
                    PortfolioColors::star_on()
                } else {
                    PortfolioColors::star_off()
                };
                div().text_color(color).child("★")
            }))
    }
}
