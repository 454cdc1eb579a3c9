use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::{
        core::{Canvas, Fps},
        error::{FramelineError, FramelineResult},
    },
    timeline::table::{SceneId, SceneSpec},
};

/// JSON-facing description of a composition: identity, output format, and scene table.
///
/// [`Default`] is the shipped 375-frame composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompositionConfig {
    /// Composition identifier reported to the renderer.
    #[serde(default = "default_id")]
    pub id: String,
    /// Frame rate.
    pub fps: Fps,
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Font family the renderer must load before the first frame.
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Scene timing table; rows may be listed in any order.
    pub scenes: Vec<SceneSpec>,
}

fn default_id() -> String {
    "Main".to_owned()
}

fn default_font_family() -> String {
    "Inter".to_owned()
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            id: default_id(),
            fps: Fps { num: 30, den: 1 },
            canvas: Canvas {
                width: 720,
                height: 1280,
            },
            font_family: default_font_family(),
            scenes: shipped_scenes(),
        }
    }
}

/// The shipped scene table.
pub fn shipped_scenes() -> Vec<SceneSpec> {
    vec![
        SceneSpec::new(SceneId::TypingPill, 0, 30),
        SceneSpec::new(SceneId::ModelSelection, 30, 30),
        SceneSpec::new(SceneId::PromptInput, 60, 30),
        SceneSpec::new(SceneId::ThinkToggle, 90, 60),
        SceneSpec::new(SceneId::DocumentCards, 150, 30),
        SceneSpec::new(SceneId::StreamingText, 180, 90),
        SceneSpec::new(SceneId::CallToAction, 270, 105),
    ]
}

impl CompositionConfig {
    /// Parse a configuration from a JSON reader. The result is not validated yet; see
    /// [`crate::Composition::new`].
    pub fn from_reader<R: std::io::Read>(r: R) -> FramelineResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FramelineError::serde(format!("parse composition config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FramelineResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FramelineError::Other(
                anyhow::Error::new(e)
                    .context(format!("open composition config '{}'", path.display())),
            )
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty JSON rendering of this configuration.
    pub fn to_json_pretty(&self) -> FramelineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FramelineError::serde(format!("serialize composition config: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/config.rs"]
mod tests;
