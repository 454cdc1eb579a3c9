use crate::{
    animation::spring::{SpringConfig, spring},
    foundation::{color::Rgba8, core::Fps},
    scene::node::{Container, Edges, Justify, Layout, Paint, TextNode, VisualNode},
    scenes::{clock, palette, scene_root},
    timeline::table::SceneId,
};

const PILL_SPRING: SpringConfig = SpringConfig::new(15.0, 100.0);

/// The cursor flips visibility every this many frames.
pub const CURSOR_BLINK_FRAMES: u64 = 8;

/// Typing pill at one local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypingState {
    /// Text typed so far.
    pub text: &'static str,
    /// Whether the `|` cursor is drawn.
    pub cursor_visible: bool,
    /// Pill scale (spring from 0).
    pub pill_scale: f64,
}

/// Sample the typing pill.
pub fn sample(frame: u64, fps: Fps) -> TypingState {
    let text = match frame {
        0..5 => "",
        5..15 => "G",
        _ => "G P",
    };
    TypingState {
        text,
        cursor_visible: (frame / CURSOR_BLINK_FRAMES) % 2 == 0,
        pill_scale: spring(clock(frame), fps, PILL_SPRING),
    }
}

impl TypingState {
    /// Build the scene tree.
    pub fn to_node(&self) -> VisualNode {
        let glyphs = |content: &str| TextNode::new(content, 24.0, 500, palette::INK);
        let cursor = VisualNode::text(
            "cursor",
            glyphs("|").margin(Edges {
                left: 2.0,
                ..Edges::default()
            }),
        )
        .opacity(if self.cursor_visible { 1.0 } else { 0.0 });

        let pill = VisualNode::container(
            "pill",
            Container::new(Layout::Row)
                .justify(Justify::Center)
                .padding(Edges::symmetric(16.0, 48.0))
                .min_width(280.0)
                .background(Paint::solid(Rgba8::WHITE))
                .corner_radius(palette::PILL_RADIUS)
                .shadow(palette::soft_shadow(4.0, 20.0, 0.1))
                .children(vec![VisualNode::text("typed", glyphs(self.text)), cursor]),
        )
        .scale(self.pill_scale);

        scene_root(SceneId::TypingPill, palette::warm_backdrop(), pill)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/typing.rs"]
mod tests;
