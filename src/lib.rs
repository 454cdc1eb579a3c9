//! Frameline is a frame-driven timing engine for a short, parametrized motion-graphics
//! composition.
//!
//! Every frame is a pure function of its index: the engine maps a global frame to the active
//! scene, runs that scene's animator on its local clock, and returns a declarative tree of
//! visual nodes ([`FrameState`]). Rasterizing and encoding those trees is left to an external
//! renderer.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`CompositionConfig`] (JSON or [`Default`]) -> [`Composition`], validating
//!    the scene table once.
//! 2. **Locate**: [`Timeline::active_scenes_at`] -> scene + local frame.
//! 3. **Animate**: [`SceneId::animate`] -> [`VisualNode`] tree built from [`interpolate`] and
//!    [`spring`] curves.
//! 4. **Deliver** (optional): [`evaluate_range`] streams frames to a [`FrameSink`], sequentially
//!    or on a `rayon` pool.
//!
//! Evaluation holds no hidden state, so frames may be computed out of order, repeatedly, and
//! from many threads at once.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod composition;
mod encode;
mod eval;
mod foundation;
mod render;
mod scene;
mod timeline;

/// Per-scene animators and their sampled state.
pub mod scenes;

pub use animation::ease::Ease;
pub use animation::interpolate::{Extrapolate, InterpolateOpts, interpolate};
pub use animation::spring::{SETTLE_EPSILON, SpringConfig, settling_frame, spring, spring_to};
pub use composition::config::{CompositionConfig, shipped_scenes};
pub use composition::model::{Composition, CompositionDescriptor};
pub use encode::sink::{FrameSink, InMemorySink, JsonLinesSink, SinkConfig};
pub use eval::evaluator::{FrameState, Layer};
pub use eval::fingerprint::{FrameFingerprint, fingerprint_frame};
pub use foundation::color::Rgba8;
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Vec2};
pub use foundation::error::{FramelineError, FramelineResult};
pub use render::pipeline::{RenderStats, RenderThreading, evaluate_frames, evaluate_range};
pub use scene::node::{
    Container, Edges, Justify, Layout, Length, NodeKind, Paint, Shadow, Shape, ShapeNode, Stroke,
    Style, TextAlign, TextNode, VisualNode,
};
pub use timeline::table::{ActiveScene, SceneId, SceneSpec, Timeline};
