//! Per-scene animators.
//!
//! Every scene module exposes `sample(local_frame, fps)` returning a plain state struct and a
//! `to_node()` on that state that builds the scene's visual tree. Both are pure.

/// Scene 7: "Available now" button.
pub mod cta;
/// Scene 5: staggered document cards.
pub mod documents;
/// Scene 2: model-selection card with a tap pulse.
pub mod model_card;
pub(crate) mod palette;
/// Scene 3: prompt input with a voice waveform.
pub mod prompt;
/// Scene 6: streamed answer text.
pub mod streaming;
/// Scene 4: "Think deeper" / "Think faster" with a toggle.
pub mod think_toggle;
/// Scene 1: typing pill.
pub mod typing;

use crate::{
    foundation::{core::Fps, error::FramelineResult},
    scene::node::{Container, Layout, Paint, VisualNode},
    timeline::table::SceneId,
};

impl SceneId {
    /// Run this scene's animator at `local_frame` and return its visual tree.
    pub fn animate(self, local_frame: u64, fps: Fps) -> FramelineResult<VisualNode> {
        let content = match self {
            Self::TypingPill => typing::sample(local_frame, fps).to_node(),
            Self::ModelSelection => model_card::sample(local_frame, fps).to_node(),
            Self::PromptInput => prompt::sample(local_frame, fps).to_node(),
            Self::ThinkToggle => think_toggle::sample(local_frame, fps)?.to_node(),
            Self::DocumentCards => documents::sample(local_frame, fps)?.to_node(),
            Self::StreamingText => streaming::sample(local_frame, fps)?.to_node(),
            Self::CallToAction => cta::sample(local_frame, fps).to_node(),
        };
        Ok(content)
    }
}

/// Scene root: full-canvas backdrop with `content` stacked and centered on top.
pub(crate) fn scene_root(id: SceneId, backdrop: Paint, content: VisualNode) -> VisualNode {
    VisualNode::container(
        id.as_str(),
        Container::new(Layout::Stack).children(vec![VisualNode::backdrop(backdrop), content]),
    )
}

/// The first `n` chars of `s` (whole string when shorter).
pub(crate) fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Local frame as the animation clock value.
pub(crate) fn clock(frame: u64) -> f64 {
    frame as f64
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/mod.rs"]
mod tests;
