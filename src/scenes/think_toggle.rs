use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpolateOpts, interpolate},
        spring::{SpringConfig, spring},
    },
    foundation::{color::Rgba8, core::Fps, error::FramelineResult},
    scene::node::{
        Container, Justify, Layout, Length, Paint, Shape, TextAlign, TextNode, VisualNode,
    },
    scenes::{clock, palette, scene_root},
    timeline::table::SceneId,
};

const HEADLINE_SPRING: SpringConfig = SpringConfig::new(20.0, 120.0);
const KNOB_SPRING: SpringConfig = SpringConfig::new(15.0, 180.0);
const TOGGLE_FADE_SPRING: SpringConfig = SpringConfig::new(20.0, 100.0);

/// First local frame of [`ThinkPhase::Faster`].
pub const FASTER_FROM: u64 = 25;
/// First local frame of [`ThinkPhase::Toggle`].
pub const TOGGLE_FROM: u64 = 45;

const DEEPER_GRADIENT: Paint = Paint::diagonal(
    Rgba8::rgb(0x8B, 0x5C, 0xF6),
    Rgba8::rgb(0xA8, 0x55, 0xF7),
);
const FASTER_GRADIENT: Paint = Paint::diagonal(
    Rgba8::rgb(0xEF, 0x44, 0x44),
    Rgba8::rgb(0xEC, 0x48, 0x99),
);

const KNOB_TRAVEL: f64 = 28.0;
const KNOB_INSET: f64 = 3.0;

/// Choreography phase of the headline scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThinkPhase {
    /// "Think deeper".
    Deeper,
    /// "Think faster".
    Faster,
    /// "Think faster" with the toggle visible.
    Toggle,
}

impl ThinkPhase {
    /// Phase at a local frame.
    pub fn at(frame: u64) -> Self {
        if frame < FASTER_FROM {
            Self::Deeper
        } else if frame < TOGGLE_FROM {
            Self::Faster
        } else {
            Self::Toggle
        }
    }

    /// Gradient-filled headline word.
    pub fn word(self) -> &'static str {
        match self {
            Self::Deeper => "deeper",
            Self::Faster | Self::Toggle => "faster",
        }
    }

    fn word_fill(self) -> Paint {
        match self {
            Self::Deeper => DEEPER_GRADIENT,
            Self::Faster | Self::Toggle => FASTER_GRADIENT,
        }
    }
}

/// Headline and toggle at one local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThinkToggleState {
    /// Current phase.
    pub phase: ThinkPhase,
    /// Headline opacity (spring).
    pub headline_opacity: f64,
    /// Entrance offset in pixels, easing from 30 down to 0.
    pub headline_offset_y: f64,
    /// Knob position, 0 (left) to 1 (right). Zero before the toggle phase.
    pub toggle_progress: f64,
    /// Toggle fade-in. Zero before the toggle phase.
    pub toggle_opacity: f64,
    /// Exit zoom applied to the whole stage.
    pub zoom: f64,
}

/// Sample the headline scene.
pub fn sample(frame: u64, fps: Fps) -> FramelineResult<ThinkToggleState> {
    let f = clock(frame);
    let phase = ThinkPhase::at(frame);
    let toggle_clock = f - clock(TOGGLE_FROM);
    let (toggle_progress, toggle_opacity) = match phase {
        ThinkPhase::Toggle => (
            spring(toggle_clock, fps, KNOB_SPRING),
            spring(toggle_clock, fps, TOGGLE_FADE_SPRING),
        ),
        ThinkPhase::Deeper | ThinkPhase::Faster => (0.0, 0.0),
    };

    Ok(ThinkToggleState {
        phase,
        headline_opacity: spring(f, fps, HEADLINE_SPRING),
        headline_offset_y: interpolate(
            f,
            &[0.0, 15.0],
            &[30.0, 0.0],
            InterpolateOpts::clamp_right().ease(Ease::OutCubic),
        )?,
        toggle_progress,
        toggle_opacity,
        zoom: interpolate(
            f,
            &[50.0, 60.0],
            &[1.0, 0.85],
            InterpolateOpts::clamp().ease(Ease::InOutCubic),
        )?,
    })
}

impl ThinkToggleState {
    /// Horizontal knob offset inside the track, in pixels.
    pub fn knob_x(&self) -> f64 {
        KNOB_INSET + self.toggle_progress * KNOB_TRAVEL
    }

    /// Build the scene tree.
    pub fn to_node(&self) -> VisualNode {
        let headline = VisualNode::container(
            "headline",
            Container::new(Layout::Row).justify(Justify::Center).children(vec![
                VisualNode::text(
                    "think",
                    TextNode::new("Think ", 36.0, 600, palette::INK).align(TextAlign::Center),
                ),
                VisualNode::text(
                    "word",
                    TextNode::new(self.phase.word(), 36.0, 600, palette::INK)
                        .fill(self.phase.word_fill())
                        .align(TextAlign::Center),
                ),
            ]),
        )
        .opacity(self.headline_opacity)
        .translate(0.0, self.headline_offset_y);

        let mut stage = vec![headline];
        if self.phase == ThinkPhase::Toggle {
            let knob = VisualNode::shape(
                "knob",
                Shape::Circle { diameter: 26.0 },
                Some(Paint::solid(palette::INK)),
            )
            .translate(self.knob_x(), KNOB_INSET);
            stage.push(
                VisualNode::container(
                    "toggle",
                    Container::new(Layout::Absolute)
                        .width(Length::Px(60.0))
                        .height(32.0)
                        .background(Paint::solid(palette::HAIRLINE))
                        .corner_radius(palette::PILL_RADIUS)
                        .children(vec![knob]),
                )
                .opacity(self.toggle_opacity),
            );
        }

        let content = VisualNode::container(
            "stage",
            Container::new(Layout::Column)
                .justify(Justify::Center)
                .gap(30.0)
                .children(stage),
        )
        .scale(self.zoom);

        scene_root(SceneId::ThinkToggle, Paint::solid(Rgba8::WHITE), content)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/think_toggle.rs"]
mod tests;
