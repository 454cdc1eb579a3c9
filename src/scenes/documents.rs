use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpolateOpts, interpolate},
        spring::{SpringConfig, spring},
    },
    foundation::{color::Rgba8, core::Fps, error::FramelineResult},
    scene::node::{Container, Edges, Layout, Length, Paint, TextNode, VisualNode},
    scenes::{clock, palette, scene_root},
    timeline::table::SceneId,
};

const CARD_SPRING: SpringConfig = SpringConfig::new(15.0, 120.0);

/// Frames between consecutive card entrances.
pub const STAGGER_FRAMES: u64 = 3;
/// Distance a card rises during its entrance, in pixels.
pub const ENTRANCE_RISE: f64 = 30.0;

/// A document shown as a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Document {
    /// Emoji icon.
    pub icon: &'static str,
    /// Accent color behind the icon.
    pub accent: Rgba8,
    /// File name.
    pub name: &'static str,
}

/// Cards in display order.
pub const DOCUMENTS: [Document; 3] = [
    Document {
        icon: "\u{1F4C4}",
        accent: Rgba8::rgb(0xF4, 0x72, 0xB6),
        name: "sales_deck.pdf",
    },
    Document {
        icon: "\u{1F4CA}",
        accent: Rgba8::rgb(0x4A, 0xDE, 0x80),
        name: "annual_report.xlsx",
    },
    Document {
        icon: "\u{1F4DD}",
        accent: Rgba8::rgb(0x60, 0xA5, 0xFA),
        name: "consult_notes.doc",
    },
];

/// One card's entrance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardState {
    /// Remaining rise in pixels: `(1 - spring) * 30`.
    pub offset_y: f64,
    /// Linear fade over the card's first 8 frames.
    pub opacity: f64,
}

/// Document cards at one local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DocumentsState {
    /// Per-card entrance, aligned with [`DOCUMENTS`].
    pub cards: [CardState; 3],
    /// Collective slide-up exit, from 0 to -400.
    pub exit_offset_y: f64,
}

/// Sample the document cards.
pub fn sample(frame: u64, fps: Fps) -> FramelineResult<DocumentsState> {
    let f = clock(frame);
    let [first, second, third]: [FramelineResult<CardState>; 3] =
        std::array::from_fn(|i| card_at(f - clock(STAGGER_FRAMES * i as u64), fps));

    Ok(DocumentsState {
        cards: [first?, second?, third?],
        exit_offset_y: interpolate(
            f,
            &[20.0, 30.0],
            &[0.0, -400.0],
            InterpolateOpts::clamp().ease(Ease::InCubic),
        )?,
    })
}

fn card_at(local: f64, fps: Fps) -> FramelineResult<CardState> {
    Ok(CardState {
        offset_y: (1.0 - spring(local, fps, CARD_SPRING)) * ENTRANCE_RISE,
        opacity: interpolate(local, &[0.0, 8.0], &[0.0, 1.0], InterpolateOpts::clamp())?,
    })
}

impl DocumentsState {
    /// Build the scene tree.
    pub fn to_node(&self) -> VisualNode {
        let cards = DOCUMENTS
            .iter()
            .zip(self.cards.iter())
            .enumerate()
            .map(|(i, (doc, state))| card_node(i, doc, state))
            .collect();

        let list = VisualNode::container(
            "cards",
            Container::new(Layout::Column)
                .gap(12.0)
                .width(Length::Percent(85.0))
                .max_width(320.0)
                .children(cards),
        )
        .translate(0.0, self.exit_offset_y);

        scene_root(SceneId::DocumentCards, palette::sky_backdrop(), list)
    }
}

fn card_node(index: usize, doc: &Document, state: &CardState) -> VisualNode {
    let icon = VisualNode::container(
        "icon",
        Container::new(Layout::Stack)
            .width(Length::Px(40.0))
            .height(40.0)
            .corner_radius(8.0)
            .background(Paint::solid(doc.accent.with_alpha(0x30)))
            .children(vec![VisualNode::text(
                "glyph",
                TextNode::new(doc.icon, 20.0, 400, palette::INK),
            )]),
    );
    let labels = VisualNode::container(
        "labels",
        Container::new(Layout::Column).children(vec![
            VisualNode::text("name", TextNode::new(doc.name, 14.0, 600, palette::INK)),
            VisualNode::text(
                "status",
                TextNode::new("Analyzing...", 12.0, 400, palette::MUTED_TEXT).margin(Edges {
                    top: 2.0,
                    ..Edges::default()
                }),
            ),
        ]),
    );

    VisualNode::container(
        format!("card_{index}"),
        Container::new(Layout::Row)
            .gap(14.0)
            .padding(Edges::symmetric(16.0, 20.0))
            .background(Paint::solid(Rgba8::WHITE))
            .corner_radius(12.0)
            .shadow(palette::soft_shadow(4.0, 12.0, 0.08))
            .children(vec![icon, labels]),
    )
    .opacity(state.opacity)
    .translate(0.0, state.offset_y)
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/documents.rs"]
mod tests;
