use std::io::Write;

use crate::{
    eval::evaluator::{FrameState, Layer},
    foundation::{
        core::{Fps, FrameIndex, FrameRange},
        error::{FramelineError, FramelineResult},
    },
};

/// Configuration provided to a [`FrameSink`] at the start of a range evaluation.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SinkConfig {
    /// Composition identifier.
    pub composition_id: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Font family to load before drawing the first frame.
    pub font_family: String,
    /// Frames that will be pushed.
    pub range: FrameRange,
}

/// Sink contract for consuming evaluated frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order within the
/// requested range. `idx` is authoritative; with static-frame elision `frame.frame` may name the
/// earlier frame whose state is being reused.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> FramelineResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameState) -> FramelineResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> FramelineResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<FrameState>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured frames, each stamped with the index it was pushed at.
    pub fn frames(&self) -> &[FrameState] {
        &self.frames
    }

    /// Take ownership of the captured frames.
    pub fn into_frames(self) -> Vec<FrameState> {
        self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> FramelineResult<()> {
        self.frames.clear();
        self.frames
            .reserve(usize::try_from(cfg.range.len_frames().min(4096)).unwrap_or(0));
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameState) -> FramelineResult<()> {
        self.frames.push(FrameState {
            frame: idx,
            layers: frame.layers.clone(),
        });
        Ok(())
    }

    fn end(&mut self) -> FramelineResult<()> {
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct FrameLine<'a> {
    frame: FrameIndex,
    layers: &'a [Layer],
}

/// Writes one compact JSON `FrameState` per line.
pub struct JsonLinesSink<W: Write + Send> {
    out: W,
    lines: u64,
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Wrap a writer. Buffering is the caller's choice.
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Lines written since the last `begin`.
    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> FramelineResult<()> {
        tracing::debug!(
            comp = %cfg.composition_id,
            start = cfg.range.start.0,
            end = cfg.range.end.0,
            "json lines sink begin"
        );
        self.lines = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameState) -> FramelineResult<()> {
        let line = FrameLine {
            frame: idx,
            layers: &frame.layers,
        };
        serde_json::to_writer(&mut self.out, &line)
            .map_err(|e| FramelineError::serde(format!("serialize frame {}: {e}", idx.0)))?;
        self.out
            .write_all(b"\n")
            .map_err(|e| FramelineError::Other(e.into()))?;
        self.lines += 1;
        Ok(())
    }

    fn end(&mut self) -> FramelineResult<()> {
        self.out
            .flush()
            .map_err(|e| FramelineError::Other(e.into()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
