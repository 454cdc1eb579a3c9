use crate::foundation::error::{FramelineError, FramelineResult};

pub use kurbo::Vec2;

/// Absolute 0-based frame index in composition timeline space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)` in timeline space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex,
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> FramelineResult<Self> {
        if start.0 > end.0 {
            return Err(FramelineError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Range `[start, start + len)`, saturating at `u64::MAX`.
    pub fn with_len(start: u64, len: u64) -> Self {
        Self {
            start: FrameIndex(start),
            end: FrameIndex(start.saturating_add(len)),
        }
    }

    /// Number of frames contained in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// Return `true` when the range has no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// Return `true` when `f` is inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Return `true` when the two ranges share at least one frame.
    pub fn overlaps(self, other: Self) -> bool {
        self.start.0 < other.end.0 && other.start.0 < self.end.0
    }

    /// Intersection of two ranges; empty (at `self.start`) when disjoint.
    pub fn intersect(self, other: Self) -> Self {
        let start = self.start.0.max(other.start.0);
        let end = self.end.0.min(other.end.0).max(start);
        if start >= end {
            return Self {
                start: self.start,
                end: self.start,
            };
        }
        Self {
            start: FrameIndex(start),
            end: FrameIndex(end),
        }
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> FramelineResult<Self> {
        if den == 0 {
            return Err(FramelineError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(FramelineError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Re-check the invariants of a value built by struct literal or deserialization.
    pub fn validate(self) -> FramelineResult<()> {
        Self::new(self.num, self.den).map(|_| ())
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a (possibly negative or fractional) frame offset to seconds.
    pub fn frame_offset_to_secs(self, frames: f64) -> f64 {
        frames * f64::from(self.den) / f64::from(self.num)
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Reject zero-sized canvases.
    pub fn validate(self) -> FramelineResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FramelineError::validation(
                "canvas width and height must be > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
