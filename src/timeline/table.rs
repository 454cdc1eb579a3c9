use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::foundation::{
    core::{FrameIndex, FrameRange},
    error::{FramelineError, FramelineResult},
};

/// The seven scenes of the composition, in playback order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SceneId {
    /// Pill with "G P" being typed.
    TypingPill,
    /// Model-selection card with a tap pulse.
    ModelSelection,
    /// Prompt input with streaming text and a voice waveform.
    PromptInput,
    /// "Think deeper" / "Think faster" headline and toggle.
    ThinkToggle,
    /// Staggered document cards.
    DocumentCards,
    /// Streaming answer text.
    StreamingText,
    /// Closing call-to-action button.
    CallToAction,
}

impl SceneId {
    /// Every scene, in playback order.
    pub const ALL: [SceneId; 7] = [
        SceneId::TypingPill,
        SceneId::ModelSelection,
        SceneId::PromptInput,
        SceneId::ThinkToggle,
        SceneId::DocumentCards,
        SceneId::StreamingText,
        SceneId::CallToAction,
    ];

    /// Stable snake_case name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TypingPill => "typing_pill",
            Self::ModelSelection => "model_selection",
            Self::PromptInput => "prompt_input",
            Self::ThinkToggle => "think_toggle",
            Self::DocumentCards => "document_cards",
            Self::StreamingText => "streaming_text",
            Self::CallToAction => "call_to_action",
        }
    }
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the scene timing table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneSpec {
    /// Which animator plays in this window.
    pub id: SceneId,
    /// Absolute start frame.
    pub start: u64,
    /// Window length in frames (`> 0`).
    pub duration: u64,
}

impl SceneSpec {
    /// Build a table row.
    pub const fn new(id: SceneId, start: u64, duration: u64) -> Self {
        Self {
            id,
            start,
            duration,
        }
    }

    /// Global half-open window `[start, start + duration)`.
    pub fn range(self) -> FrameRange {
        FrameRange::with_len(self.start, self.duration)
    }

    /// Exclusive end frame.
    pub fn end(self) -> u64 {
        self.start.saturating_add(self.duration)
    }
}

/// A scene active at some global frame, with its local clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActiveScene {
    /// Scene id.
    pub id: SceneId,
    /// `global_frame - start`, always in `[0, duration)`.
    pub local_frame: u64,
    /// The scene's global window.
    pub range: FrameRange,
}

/// Validated, ordered scene timing table.
///
/// Tables must start at frame 0 and tile their span with no gaps and no overlaps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    specs: Vec<SceneSpec>,
    total_frames: u64,
}

impl Timeline {
    /// Validate `specs` and build the timeline. Rows may be given in any order.
    pub fn new(mut specs: Vec<SceneSpec>) -> FramelineResult<Self> {
        if specs.is_empty() {
            return Err(FramelineError::validation(
                "scene table must contain at least one scene",
            ));
        }
        specs.sort_by_key(|s| (s.start, s.id));

        let mut seen = BTreeSet::new();
        for spec in &specs {
            if spec.duration == 0 {
                return Err(FramelineError::validation(format!(
                    "scene '{}' must have a duration > 0",
                    spec.id
                )));
            }
            if !seen.insert(spec.id) {
                return Err(FramelineError::validation(format!(
                    "scene '{}' appears more than once",
                    spec.id
                )));
            }
        }

        if specs[0].start != 0 {
            return Err(FramelineError::validation(format!(
                "scene table must start at frame 0 (first scene '{}' starts at {})",
                specs[0].id, specs[0].start
            )));
        }
        for pair in specs.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.range().overlaps(b.range()) {
                let shared = a.range().intersect(b.range());
                return Err(FramelineError::validation(format!(
                    "scenes '{}' and '{}' overlap at frames {}..{}",
                    a.id, b.id, shared.start.0, shared.end.0
                )));
            }
            if b.start > a.end() {
                return Err(FramelineError::validation(format!(
                    "gap between scenes '{}' and '{}' at frames {}..{}",
                    a.id,
                    b.id,
                    a.end(),
                    b.start
                )));
            }
        }

        let total_frames = specs.last().map(|s| s.end()).unwrap_or(0);
        tracing::debug!(scenes = specs.len(), total_frames, "timeline validated");
        Ok(Self {
            specs,
            total_frames,
        })
    }

    /// Rows ordered by start frame.
    pub fn specs(&self) -> &[SceneSpec] {
        &self.specs
    }

    /// Exclusive end of the last scene.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Global `[0, total_frames)`.
    pub fn span(&self) -> FrameRange {
        FrameRange::with_len(0, self.total_frames)
    }

    /// Row for `id`, if the table contains it.
    pub fn scene(&self, id: SceneId) -> Option<SceneSpec> {
        self.specs.iter().copied().find(|s| s.id == id)
    }

    /// Global window of `id`, if the table contains it.
    pub fn range_of(&self, id: SceneId) -> Option<FrameRange> {
        self.scene(id).map(SceneSpec::range)
    }

    /// Scenes whose half-open window contains `frame`, in start order. Frames outside the
    /// table yield an empty set.
    pub fn active_scenes_at(&self, frame: FrameIndex) -> SmallVec<[ActiveScene; 1]> {
        if frame.0 >= self.total_frames {
            return SmallVec::new();
        }
        self.specs
            .iter()
            .filter(|s| s.range().contains(frame))
            .map(|s| ActiveScene {
                id: s.id,
                local_frame: frame.0 - s.start,
                range: s.range(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/table.rs"]
mod tests;
