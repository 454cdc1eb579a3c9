use crate::{
    composition::model::Composition,
    foundation::{core::FrameIndex, error::FramelineResult},
    scene::node::VisualNode,
    timeline::table::SceneId,
};

/// Complete render description of one global frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameState {
    /// Evaluated global frame.
    pub frame: FrameIndex,
    /// Active scenes in painter's order (first is bottom-most). Empty outside the
    /// composition.
    pub layers: Vec<Layer>,
}

/// One active scene's visual tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layer {
    /// Scene that produced the tree.
    pub scene: SceneId,
    /// Frame on the scene's own clock.
    pub local_frame: u64,
    /// Stacking position, `0` at the bottom.
    pub z: u32,
    /// Scene tree.
    pub root: VisualNode,
}

impl FrameState {
    /// The neutral state: nothing to draw.
    pub fn empty(frame: FrameIndex) -> Self {
        Self {
            frame,
            layers: Vec::new(),
        }
    }

    /// `true` when no scene is active.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Bottom-most layer, if any.
    pub fn primary(&self) -> Option<&Layer> {
        self.layers.first()
    }

    /// Total node count across all layers.
    pub fn node_count(&self) -> usize {
        self.layers.iter().map(|l| l.root.node_count()).sum()
    }
}

impl Composition {
    /// Evaluate global `frame` into its render description.
    ///
    /// Frames at or past the end of the composition produce an empty state, never an error.
    #[tracing::instrument(skip(self), fields(comp = %self.id()))]
    pub fn eval_frame(&self, frame: FrameIndex) -> FramelineResult<FrameState> {
        let active = self.timeline().active_scenes_at(frame);
        if active.is_empty() {
            tracing::debug!(frame = frame.0, "frame outside composition");
            return Ok(FrameState::empty(frame));
        }

        let fps = self.fps();
        let mut layers = Vec::with_capacity(active.len());
        for (z, scene) in active.iter().enumerate() {
            layers.push(Layer {
                scene: scene.id,
                local_frame: scene.local_frame,
                z: u32::try_from(z).unwrap_or(u32::MAX),
                root: scene.id.animate(scene.local_frame, fps)?,
            });
        }
        Ok(FrameState { frame, layers })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
