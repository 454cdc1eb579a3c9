use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpolateOpts, interpolate},
        spring::{SpringConfig, spring},
    },
    foundation::{core::Fps, error::FramelineResult},
    scene::node::{Container, Edges, Layout, Length, TextNode, VisualNode},
    scenes::{char_prefix, clock, palette, scene_root},
    timeline::table::SceneId,
};

const FADE_SPRING: SpringConfig = SpringConfig::new(20.0, 100.0);

/// Reveal speed across the whole answer.
pub const CHARS_PER_FRAME: usize = 4;

/// Typographic role of a streamed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Paragraph text.
    Body,
    /// Section heading.
    Header,
    /// Bulleted line (the bullet glyph is part of the text).
    Bullet,
}

/// One streamed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamItem {
    /// Typographic role.
    pub kind: ItemKind,
    /// Full text.
    pub text: &'static str,
}

/// The answer, in reveal order.
pub const ITEMS: [StreamItem; 7] = [
    StreamItem {
        kind: ItemKind::Body,
        text: "Below is a concise summary of the key insights from your uploaded documents:",
    },
    StreamItem {
        kind: ItemKind::Header,
        text: "Bottom line",
    },
    StreamItem {
        kind: ItemKind::Body,
        text: "Overall momentum remains strong across all business units, with Q4 showing 23% YoY growth.",
    },
    StreamItem {
        kind: ItemKind::Header,
        text: "Highlights",
    },
    StreamItem {
        kind: ItemKind::Bullet,
        text: "\u{2022} Go-to-market strategy exceeded targets by 15%",
    },
    StreamItem {
        kind: ItemKind::Bullet,
        text: "\u{2022} Customer retention rate improved to 94%",
    },
    StreamItem {
        kind: ItemKind::Bullet,
        text: "\u{2022} New product launches drove $2.3M in revenue",
    },
];

/// Split a shared character `budget` over consecutive items of the given lengths.
///
/// Item `k` gets `clamp(budget - sum(lengths[..k]), 0, lengths[k])`, so an item only starts
/// once every earlier item is complete.
pub fn reveal_counts(budget: usize, lengths: &[usize]) -> Vec<usize> {
    let mut offset = 0usize;
    lengths
        .iter()
        .map(|&len| {
            let visible = budget.saturating_sub(offset).min(len);
            offset = offset.saturating_add(len);
            visible
        })
        .collect()
}

/// Total characters across [`ITEMS`].
pub fn total_chars() -> usize {
    ITEMS.iter().map(|item| item.text.chars().count()).sum()
}

/// Streaming answer at one local frame.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamingState {
    /// Characters revealed so far, `min(4 f, total_chars())`.
    pub revealed: usize,
    /// Visible characters per item, aligned with [`ITEMS`].
    pub visible: Vec<usize>,
    /// Group fade-in (spring).
    pub opacity: f64,
    /// Upward scroll in pixels, from 0 to -60.
    pub scroll_y: f64,
}

/// Sample the streaming answer.
pub fn sample(frame: u64, fps: Fps) -> FramelineResult<StreamingState> {
    let f = clock(frame);
    let lengths: Vec<usize> = ITEMS.iter().map(|item| item.text.chars().count()).collect();
    let budget = usize::try_from(frame)
        .unwrap_or(usize::MAX)
        .saturating_mul(CHARS_PER_FRAME);
    let visible = reveal_counts(budget, &lengths);

    Ok(StreamingState {
        revealed: visible.iter().sum(),
        visible,
        opacity: spring(f, fps, FADE_SPRING),
        scroll_y: interpolate(
            f,
            &[30.0, 80.0],
            &[0.0, -60.0],
            InterpolateOpts::clamp().ease(Ease::OutQuad),
        )?,
    })
}

impl StreamingState {
    /// Visible prefix of item `index`.
    pub fn visible_text(&self, index: usize) -> &'static str {
        match (ITEMS.get(index), self.visible.get(index)) {
            (Some(item), Some(&n)) => char_prefix(item.text, n),
            _ => "",
        }
    }

    /// Build the scene tree. Items with nothing revealed are omitted.
    pub fn to_node(&self) -> VisualNode {
        let lines = ITEMS
            .iter()
            .enumerate()
            .filter(|(i, _)| self.visible.get(*i).copied().unwrap_or(0) > 0)
            .map(|(i, item)| {
                let text = self.visible_text(i);
                let node = match item.kind {
                    ItemKind::Header => TextNode::new(text, 18.0, 700, palette::INK).margin(Edges {
                        top: if i > 0 { 16.0 } else { 0.0 },
                        bottom: 8.0,
                        ..Edges::default()
                    }),
                    ItemKind::Body | ItemKind::Bullet => {
                        TextNode::new(text, 14.0, 400, palette::BODY_TEXT)
                            .line_height(1.6)
                            .margin(Edges {
                                bottom: 12.0,
                                ..Edges::default()
                            })
                    }
                };
                VisualNode::text(format!("item_{i}"), node)
            })
            .collect();

        let column = VisualNode::container(
            "answer",
            Container::new(Layout::Column)
                .width(Length::Percent(85.0))
                .max_width(340.0)
                .children(lines),
        )
        .opacity(self.opacity)
        .translate(0.0, self.scroll_y);

        scene_root(SceneId::StreamingText, palette::sky_backdrop(), column)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/streaming.rs"]
mod tests;
