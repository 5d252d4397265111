//! Reveal animation for the verdict card.

use ratatui::layout::Rect;

use daypredict_engine::ui::{RevealEffect, ease_out_cubic};

/// Scale `base` around its centre according to the reveal progress.
#[must_use]
pub fn apply_reveal(effect: &RevealEffect, base: Rect) -> Rect {
    let t = ease_out_cubic(effect.progress());
    let scale = 0.6 + 0.4 * t;
    scale_rect(base, scale)
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}
