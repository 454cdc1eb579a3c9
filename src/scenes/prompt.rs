use crate::{
    animation::spring::{SpringConfig, spring},
    foundation::{color::Rgba8, core::Fps},
    scene::node::{Container, Edges, Layout, Length, Paint, Shape, Stroke, TextNode, VisualNode},
    scenes::{char_prefix, clock, palette, scene_root},
    timeline::table::SceneId,
};

const FADE_SPRING: SpringConfig = SpringConfig::new(20.0, 100.0);

/// Prompt typed into the input bar.
pub const PROMPT_TEXT: &str = "Our smartest, fastest model yet";
/// Reveal speed of [`PROMPT_TEXT`].
pub const CHARS_PER_FRAME: usize = 2;
/// Number of bars in the voice waveform.
pub const BAR_COUNT: usize = 4;

/// Prompt input bar at one local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PromptState {
    /// Characters of [`PROMPT_TEXT`] shown.
    pub visible_chars: usize,
    /// Input bar opacity (spring).
    pub opacity: f64,
    /// Waveform bar heights in pixels.
    pub bar_heights: [f64; BAR_COUNT],
}

/// Height of waveform bar `index` at `frame`: `8 + 6 sin(0.5 f + 1.5 i)`.
pub fn bar_height(frame: u64, index: usize) -> f64 {
    8.0 + (clock(frame) * 0.5 + index as f64 * 1.5).sin() * 6.0
}

/// Sample the prompt input.
pub fn sample(frame: u64, fps: Fps) -> PromptState {
    let len = PROMPT_TEXT.chars().count();
    let typed = usize::try_from(frame)
        .unwrap_or(usize::MAX)
        .saturating_mul(CHARS_PER_FRAME);
    PromptState {
        visible_chars: typed.min(len),
        opacity: spring(clock(frame), fps, FADE_SPRING),
        bar_heights: std::array::from_fn(|i| bar_height(frame, i)),
    }
}

impl PromptState {
    /// Revealed prefix of [`PROMPT_TEXT`].
    pub fn visible_text(&self) -> &'static str {
        char_prefix(PROMPT_TEXT, self.visible_chars)
    }

    /// Build the scene tree.
    pub fn to_node(&self) -> VisualNode {
        let bars = self
            .bar_heights
            .iter()
            .enumerate()
            .map(|(i, &height)| {
                VisualNode::shape(
                    format!("bar_{i}"),
                    Shape::Rect {
                        width: 3.0,
                        height,
                        corner_radius: 2.0,
                    },
                    Some(Paint::solid(palette::MUTED_TEXT)),
                )
            })
            .collect();

        let input = VisualNode::container(
            "input",
            Container::new(Layout::Row)
                .gap(12.0)
                .padding(Edges::symmetric(14.0, 20.0))
                .width(Length::Percent(85.0))
                .max_width(340.0)
                .corner_radius(palette::PILL_RADIUS)
                .border(Stroke {
                    color: palette::HAIRLINE,
                    width: 1.0,
                    round: false,
                })
                .children(vec![
                    VisualNode::text("plus", TextNode::new("+", 22.0, 300, palette::INK)),
                    VisualNode::text(
                        "prompt",
                        TextNode::new(self.visible_text(), 15.0, 400, palette::INK),
                    ),
                    VisualNode::container(
                        "waveform",
                        Container::new(Layout::Row).gap(2.0).children(bars),
                    ),
                ]),
        )
        .opacity(self.opacity);

        scene_root(SceneId::PromptInput, Paint::solid(Rgba8::WHITE), input)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/prompt.rs"]
mod tests;
