use crate::{
    composition::config::CompositionConfig,
    foundation::{
        core::{Canvas, Fps},
        error::{FramelineError, FramelineResult},
    },
    timeline::table::Timeline,
};

/// A validated composition: output format plus its scene timeline.
///
/// Holds no mutable state; a shared reference can be evaluated from many threads at once.
#[derive(Clone, Debug, PartialEq)]
pub struct Composition {
    id: String,
    fps: Fps,
    canvas: Canvas,
    font_family: String,
    timeline: Timeline,
}

/// Everything an external renderer needs to set up output before the first frame.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompositionDescriptor {
    /// Composition identifier.
    pub id: String,
    /// Total frames; the composition covers `[0, duration_in_frames)`.
    pub duration_in_frames: u64,
    /// Frame rate.
    pub fps: Fps,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Font family to load once before rendering.
    pub font_family: String,
}

impl CompositionDescriptor {
    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration_in_frames)
    }
}

impl Composition {
    /// Validate `config` and build the composition.
    pub fn new(config: CompositionConfig) -> FramelineResult<Self> {
        if config.id.trim().is_empty() {
            return Err(FramelineError::validation("composition id must not be empty"));
        }
        if config.font_family.trim().is_empty() {
            return Err(FramelineError::validation(
                "composition font_family must not be empty",
            ));
        }
        config.fps.validate()?;
        config.canvas.validate()?;
        let timeline = Timeline::new(config.scenes)?;
        tracing::debug!(
            id = %config.id,
            total_frames = timeline.total_frames(),
            "composition ready"
        );
        Ok(Self {
            id: config.id,
            fps: config.fps,
            canvas: config.canvas,
            font_family: config.font_family,
            timeline,
        })
    }

    /// The shipped composition.
    pub fn shipped() -> FramelineResult<Self> {
        Self::new(CompositionConfig::default())
    }

    /// Composition identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Output size.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Font family name.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Scene timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Total frames.
    pub fn duration_in_frames(&self) -> u64 {
        self.timeline.total_frames()
    }

    /// Renderer-facing descriptor.
    pub fn descriptor(&self) -> CompositionDescriptor {
        CompositionDescriptor {
            id: self.id.clone(),
            duration_in_frames: self.duration_in_frames(),
            fps: self.fps,
            width: self.canvas.width,
            height: self.canvas.height,
            font_family: self.font_family.clone(),
        }
    }

    /// Configuration that rebuilds this composition.
    pub fn to_config(&self) -> CompositionConfig {
        CompositionConfig {
            id: self.id.clone(),
            fps: self.fps,
            canvas: self.canvas,
            font_family: self.font_family.clone(),
            scenes: self.timeline.specs().to_vec(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
