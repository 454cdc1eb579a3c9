use crate::{
    animation::spring::{SpringConfig, spring},
    foundation::{color::Rgba8, core::Fps},
    scene::node::{Container, Edges, Layout, Paint, Shape, Stroke, TextNode, VisualNode},
    scenes::{clock, palette, scene_root},
    timeline::table::SceneId,
};

const BUTTON_SPRING: SpringConfig = SpringConfig::new(10.0, 150.0);
const ARROW_PATH: &str = "M7 17L17 7M17 7H7M17 7V17";

/// Angular speed of the float, in radians per frame.
pub const FLOAT_RATE: f64 = 0.08;
/// Float amplitude in pixels.
pub const FLOAT_AMPLITUDE: f64 = 4.0;

/// Call-to-action button at one local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CtaState {
    /// Entrance scale (spring).
    pub button_scale: f64,
    /// Undamped float, `sin(0.08 f) * 4`, before scaling.
    pub float_y: f64,
}

/// Sample the call to action.
pub fn sample(frame: u64, fps: Fps) -> CtaState {
    let f = clock(frame);
    CtaState {
        button_scale: spring(f, fps, BUTTON_SPRING),
        float_y: (f * FLOAT_RATE).sin() * FLOAT_AMPLITUDE,
    }
}

impl CtaState {
    /// Build the scene tree.
    ///
    /// The float is applied inside the scaled frame, so the emitted translation is
    /// `float_y * button_scale`.
    pub fn to_node(&self) -> VisualNode {
        let arrow = VisualNode::shape(
            "arrow",
            Shape::Path {
                d: ARROW_PATH.to_owned(),
                view_box: 24.0,
                size: 18.0,
            },
            None,
        )
        .stroke(Stroke {
            color: palette::INK,
            width: 2.5,
            round: true,
        });

        let button = VisualNode::container(
            "button",
            Container::new(Layout::Row)
                .gap(10.0)
                .padding(Edges::symmetric(14.0, 28.0))
                .background(Paint::solid(Rgba8::WHITE))
                .corner_radius(palette::PILL_RADIUS)
                .shadow(palette::soft_shadow(4.0, 20.0, 0.15))
                .children(vec![
                    VisualNode::text(
                        "label",
                        TextNode::new("Available now", 16.0, 600, palette::INK),
                    ),
                    arrow,
                ]),
        )
        .scale(self.button_scale)
        .translate(0.0, self.float_y * self.button_scale);

        scene_root(SceneId::CallToAction, palette::warm_backdrop(), button)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/cta.rs"]
mod tests;
