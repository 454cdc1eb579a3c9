//! Colors and decoration shared by several scenes.

use crate::{
    foundation::color::Rgba8,
    scene::node::{Paint, Shadow},
};

pub(crate) const WARM_TOP: Rgba8 = Rgba8::rgb(0xE8, 0xA6, 0x98);
pub(crate) const WARM_BOTTOM: Rgba8 = Rgba8::rgb(0x9F, 0xA6, 0xE0);
pub(crate) const SKY_TOP: Rgba8 = Rgba8::rgb(0xBB, 0xE0, 0xFF);
pub(crate) const SKY_BOTTOM: Rgba8 = Rgba8::rgb(0xE0, 0xEF, 0xFF);

pub(crate) const INK: Rgba8 = Rgba8::BLACK;
pub(crate) const BODY_TEXT: Rgba8 = Rgba8::rgb(0x33, 0x33, 0x33);
pub(crate) const MUTED_TEXT: Rgba8 = Rgba8::rgb(0x66, 0x66, 0x66);
pub(crate) const HAIRLINE: Rgba8 = Rgba8::rgb(0xE5, 0xE5, 0xE5);

/// Radius large enough to turn any box used here into a pill.
pub(crate) const PILL_RADIUS: f64 = 999.0;

pub(crate) fn warm_backdrop() -> Paint {
    Paint::diagonal(WARM_TOP, WARM_BOTTOM)
}

pub(crate) fn sky_backdrop() -> Paint {
    Paint::diagonal(SKY_TOP, SKY_BOTTOM)
}

/// `0 <offset_y>px <blur>px rgba(0,0,0,<alpha>)`.
pub(crate) fn soft_shadow(offset_y: f64, blur: f64, alpha: f64) -> Shadow {
    Shadow {
        offset_y,
        blur,
        color: Rgba8::BLACK.fade(alpha),
    }
}
