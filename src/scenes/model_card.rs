use std::ops::Range;

use crate::{
    animation::spring::{SpringConfig, spring},
    foundation::{color::Rgba8, core::Fps},
    scene::node::{
        Container, Edges, Justify, Layout, Length, Paint, Shape, Stroke, TextNode, VisualNode,
    },
    scenes::{clock, palette, scene_root},
    timeline::table::SceneId,
};

const CARD_SPRING: SpringConfig = SpringConfig::new(12.0, 150.0);

/// Local frames during which the card is pressed.
pub const TAP_WINDOW: Range<u64> = 15..20;
/// Scale multiplier while pressed.
pub const TAP_SCALE: f64 = 0.97;

const CHECK_PATH: &str = "M5 12l5 5L20 7";

/// Model-selection card at one local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelCardState {
    /// Entrance spring value.
    pub card_spring: f64,
    /// `TAP_SCALE` inside [`TAP_WINDOW`], exactly `1.0` outside.
    pub tap_multiplier: f64,
}

/// Sample the model-selection card.
pub fn sample(frame: u64, fps: Fps) -> ModelCardState {
    ModelCardState {
        card_spring: spring(clock(frame), fps, CARD_SPRING),
        tap_multiplier: if TAP_WINDOW.contains(&frame) {
            TAP_SCALE
        } else {
            1.0
        },
    }
}

impl ModelCardState {
    /// Final card scale.
    pub fn card_scale(&self) -> f64 {
        self.card_spring * self.tap_multiplier
    }

    /// Build the scene tree.
    pub fn to_node(&self) -> VisualNode {
        let labels = VisualNode::container(
            "labels",
            Container::new(Layout::Column).children(vec![
                VisualNode::text("title", TextNode::new("GPT-5", 20.0, 600, palette::INK)),
                VisualNode::text(
                    "subtitle",
                    TextNode::new("Flagship model", 14.0, 400, palette::MUTED_TEXT).margin(
                        Edges {
                            top: 4.0,
                            ..Edges::default()
                        },
                    ),
                ),
            ]),
        );

        let check = VisualNode::shape(
            "check",
            Shape::Path {
                d: CHECK_PATH.to_owned(),
                view_box: 24.0,
                size: 16.0,
            },
            None,
        )
        .stroke(Stroke {
            color: Rgba8::WHITE,
            width: 3.0,
            round: true,
        });
        let badge = VisualNode::container(
            "badge",
            Container::new(Layout::Stack)
                .width(Length::Px(28.0))
                .height(28.0)
                .corner_radius(14.0)
                .background(Paint::solid(palette::INK))
                .children(vec![check]),
        );

        let card = VisualNode::container(
            "card",
            Container::new(Layout::Row)
                .justify(Justify::SpaceBetween)
                .padding(Edges::symmetric(20.0, 28.0))
                .min_width(280.0)
                .background(Paint::solid(Rgba8::WHITE))
                .corner_radius(16.0)
                .shadow(palette::soft_shadow(4.0, 20.0, 0.1))
                .children(vec![labels, badge]),
        )
        .scale(self.card_scale());

        scene_root(SceneId::ModelSelection, palette::warm_backdrop(), card)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/model_card.rs"]
mod tests;
