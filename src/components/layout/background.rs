//! Background Component - static star field behind every page

use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px, relative};

use crate::theme::colors::PortfolioColors;

const STAR_COUNT: u32 = 120;

/// Position (0..1, 0..1), size and opacity of star `index`.
///
/// Derived from a multiplicative hash so the field is identical on every frame.
fn star(index: u32) -> (f32, f32, f32, f32) {
    let mut h = index.wrapping_mul(0x9e37_79b9).rotate_left(13) ^ 0x85eb_ca6b;
    let mut next = || {
        h ^= h >> 15;
        h = h.wrapping_mul(0x2c1b_3c6d);
        h ^= h >> 12;
        (h & 0xffff) as f32 / 65535.0
    };
    let x = next();
    let y = next();
    let size = 1.0 + next() * 2.0;
    let alpha = 0.3 + next() * 0.7;
    (x, y, size, alpha)
}

#[derive(IntoElement, Default)]
pub struct StarField;

impl RenderOnce for StarField {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .absolute()
            .inset_0()
            .size_full()
            .bg(PortfolioColors::background())
            .children((0..STAR_COUNT).map(|i| {
                let (x, y, size, alpha) = star(i);
                let mut color = PortfolioColors::text_primary();
                color.a = alpha;
                div()
                    .absolute()
                    .left(relative(x))
                    .top(relative(y))
                    .size(px(size))
                    .rounded_full()
                    .bg(color)
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_stay_in_bounds() {
        for i in 0..STAR_COUNT {
            let (x, y, size, alpha) = star(i);
            assert!((0.0..=1.0).contains(&x));
            assert!((0.0..=1.0).contains(&y));
            assert!((1.0..=3.0).contains(&size));
            assert!((0.3..=1.0).contains(&alpha));
        }
        assert_eq!(star(7), star(7));
    }
}
