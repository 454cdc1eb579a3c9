use std::collections::HashMap;

use rayon::prelude::*;

use crate::{
    composition::model::Composition,
    encode::sink::{FrameSink, InMemorySink, SinkConfig},
    eval::{
        evaluator::{FrameState, Layer},
        fingerprint::{FrameFingerprint, fingerprint_frame},
    },
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{FramelineError, FramelineResult},
    },
};

#[derive(Clone, Debug)]
/// Threading and chunking controls for multi-frame evaluation.
pub struct RenderThreading {
    /// Enable parallel evaluation when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
    /// Enable static-frame fingerprint elision in parallel mode.
    pub static_frame_elision: bool,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Aggregated evaluation counters.
pub struct RenderStats {
    /// Total requested frames.
    pub frames_total: u64,
    /// Frames delivered as their own distinct state.
    pub frames_evaluated: u64,
    /// Frames that reused an identical earlier state from the same chunk.
    pub frames_elided: u64,
}

impl RenderStats {
    fn absorb(&mut self, other: RenderStats) {
        self.frames_total += other.frames_total;
        self.frames_evaluated += other.frames_evaluated;
        self.frames_elided += other.frames_elided;
    }
}

/// Evaluate `range` and push every frame to `sink` in increasing order.
///
/// `range` must be non-empty and lie inside the composition.
#[tracing::instrument(skip(comp, sink), fields(comp = %comp.id()))]
pub fn evaluate_range(
    comp: &Composition,
    range: FrameRange,
    threading: &RenderThreading,
    sink: &mut dyn FrameSink,
) -> FramelineResult<RenderStats> {
    if range.is_empty() {
        return Err(FramelineError::validation("evaluation range must be non-empty"));
    }
    let span = comp.timeline().span();
    if range.intersect(span) != range {
        return Err(FramelineError::validation(format!(
            "evaluation range {}..{} exceeds composition duration {}",
            range.start.0, range.end.0, span.end.0
        )));
    }

    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let descriptor = comp.descriptor();
    sink.begin(SinkConfig {
        composition_id: descriptor.id,
        width: descriptor.width,
        height: descriptor.height,
        fps: descriptor.fps,
        font_family: descriptor.font_family,
        range,
    })?;

    let mut stats = RenderStats::default();
    let chunk_size = normalized_chunk_size(threading.chunk_size);

    let Some(pool) = pool else {
        for f in range.start.0..range.end.0 {
            let idx = FrameIndex(f);
            sink.push_frame(idx, &comp.eval_frame(idx)?)?;
        }
        let total = range.len_frames();
        stats.absorb(RenderStats {
            frames_total: total,
            frames_evaluated: total,
            frames_elided: 0,
        });
        sink.end()?;
        return Ok(stats);
    };

    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
            .map_err(|e| FramelineError::evaluation(format!("invalid chunk range: {e}")))?;

        let chunk_out = evaluate_chunk_parallel(comp, chunk, threading, &pool)?;
        for (offset, &u) in chunk_out.frame_to_unique.iter().enumerate() {
            let state = chunk_out.unique_states.get(u).ok_or_else(|| {
                FramelineError::evaluation("internal error: unique frame index out of range")
            })?;
            let idx = FrameIndex(chunk_start + offset as u64);
            if state.frame == idx {
                sink.push_frame(idx, state)?;
            } else {
                sink.push_frame(idx, &restamp(state, idx))?;
            }
        }
        tracing::debug!(
            start = chunk_start,
            end = chunk_end,
            elided = chunk_out.stats.frames_elided,
            "chunk delivered"
        );
        stats.absorb(chunk_out.stats);
        chunk_start = chunk_end;
    }

    sink.end()?;
    Ok(stats)
}

/// Evaluate `range` into memory. Returned states carry their own frame index.
pub fn evaluate_frames(
    comp: &Composition,
    range: FrameRange,
    threading: &RenderThreading,
) -> FramelineResult<(Vec<FrameState>, RenderStats)> {
    let mut sink = InMemorySink::new();
    let stats = evaluate_range(comp, range, threading, &mut sink)?;
    Ok((sink.into_frames(), stats))
}

struct ChunkParallelOut {
    unique_states: Vec<FrameState>,
    frame_to_unique: Vec<usize>,
    stats: RenderStats,
}

fn evaluate_chunk_parallel(
    comp: &Composition,
    range: FrameRange,
    threading: &RenderThreading,
    pool: &rayon::ThreadPool,
) -> FramelineResult<ChunkParallelOut> {
    let states = pool.install(|| {
        (range.start.0..range.end.0)
            .into_par_iter()
            .map(|f| comp.eval_frame(FrameIndex(f)))
            .collect::<FramelineResult<Vec<_>>>()
    })?;
    let total = states.len() as u64;

    if !threading.static_frame_elision {
        let frame_to_unique = (0..states.len()).collect();
        return Ok(ChunkParallelOut {
            unique_states: states,
            frame_to_unique,
            stats: RenderStats {
                frames_total: total,
                frames_evaluated: total,
                frames_elided: 0,
            },
        });
    }

    let fingerprints: Vec<FrameFingerprint> =
        pool.install(|| states.par_iter().map(fingerprint_frame).collect());

    let mut first = HashMap::<FrameFingerprint, usize>::new();
    let mut unique_states = Vec::<FrameState>::with_capacity(states.len());
    let mut frame_to_unique = Vec::<usize>::with_capacity(states.len());
    for (state, fingerprint) in states.into_iter().zip(fingerprints) {
        if let Some(existing) = first.get(&fingerprint).copied() {
            frame_to_unique.push(existing);
        } else {
            let slot = unique_states.len();
            unique_states.push(state);
            first.insert(fingerprint, slot);
            frame_to_unique.push(slot);
        }
    }

    let unique = unique_states.len() as u64;
    Ok(ChunkParallelOut {
        unique_states,
        frame_to_unique,
        stats: RenderStats {
            frames_total: total,
            frames_evaluated: unique,
            frames_elided: total.saturating_sub(unique),
        },
    })
}

/// Move a reused state onto frame `idx`, shifting every layer's local clock to match.
///
/// Reuse only happens within one chunk between states with the same scenes, so each layer's
/// scene start is unchanged and the local shift equals the global one.
fn restamp(state: &FrameState, idx: FrameIndex) -> FrameState {
    let shift = i128::from(idx.0) - i128::from(state.frame.0);
    let layers = state
        .layers
        .iter()
        .map(|layer| Layer {
            local_frame: u64::try_from(i128::from(layer.local_frame) + shift).unwrap_or(0),
            ..layer.clone()
        })
        .collect();
    FrameState { frame: idx, layers }
}

fn build_thread_pool(threads: Option<usize>) -> FramelineResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FramelineError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FramelineError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
