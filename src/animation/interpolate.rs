use crate::{
    animation::ease::Ease,
    foundation::error::{FramelineError, FramelineResult},
};

/// Behavior of [`interpolate`] outside the first/last breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Pin to the boundary output value.
    Clamp,
    /// Continue the linear slope of the nearest segment.
    #[default]
    Extend,
}

/// Options for [`interpolate`]. Defaults: extend on both sides, linear easing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    /// Behavior before the first breakpoint.
    pub extrapolate_left: Extrapolate,
    /// Behavior after the last breakpoint.
    pub extrapolate_right: Extrapolate,
    /// Easing applied to normalized progress inside a segment.
    pub easing: Ease,
}

impl InterpolateOpts {
    /// Clamp on both sides.
    pub fn clamp() -> Self {
        Self {
            extrapolate_left: Extrapolate::Clamp,
            extrapolate_right: Extrapolate::Clamp,
            easing: Ease::Linear,
        }
    }

    /// Clamp before the first breakpoint only.
    pub fn clamp_left() -> Self {
        Self {
            extrapolate_left: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    /// Clamp after the last breakpoint only.
    pub fn clamp_right() -> Self {
        Self {
            extrapolate_right: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    /// Replace the easing curve.
    pub fn ease(self, easing: Ease) -> Self {
        Self { easing, ..self }
    }
}

/// Map `frame` through the piecewise curve `input_range -> output_range`.
///
/// `input_range` must hold at least two finite, non-decreasing breakpoints and
/// `output_range` must have the same length. A zero-width segment resolves to its later
/// output value.
pub fn interpolate(
    frame: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: InterpolateOpts,
) -> FramelineResult<f64> {
    validate_ranges(input_range, output_range)?;
    if frame.is_nan() {
        return Err(FramelineError::animation("interpolate frame must not be NaN"));
    }

    let n = input_range.len();
    // First breakpoint at or past `frame` closes the segment.
    let hi = (1..n)
        .find(|&i| input_range[i] >= frame)
        .unwrap_or(n - 1);
    let lo = hi - 1;

    let (in_lo, in_hi) = (input_range[lo], input_range[hi]);
    let (out_lo, out_hi) = (output_range[lo], output_range[hi]);
    let outside = if frame < input_range[0] {
        Some(opts.extrapolate_left)
    } else if frame > input_range[n - 1] {
        Some(opts.extrapolate_right)
    } else {
        None
    };
    if outside == Some(Extrapolate::Clamp) {
        let edge = if frame < input_range[0] { 0 } else { n - 1 };
        return Ok(output_range[edge]);
    }

    let width = in_hi - in_lo;
    if width == 0.0 {
        return Ok(out_hi);
    }
    if outside.is_some() {
        // Linear continuation; easing only shapes the inside of a segment.
        return Ok(out_lo + (frame - in_lo) * (out_hi - out_lo) / width);
    }

    let t = (frame - in_lo) / width;
    let te = opts.easing.apply(t);
    Ok(out_lo + (out_hi - out_lo) * te)
}

fn validate_ranges(input_range: &[f64], output_range: &[f64]) -> FramelineResult<()> {
    if input_range.len() < 2 {
        return Err(FramelineError::animation(
            "interpolate input range needs at least two breakpoints",
        ));
    }
    if input_range.len() != output_range.len() {
        return Err(FramelineError::animation(format!(
            "interpolate ranges differ in length ({} vs {})",
            input_range.len(),
            output_range.len()
        )));
    }
    if input_range
        .iter()
        .chain(output_range.iter())
        .any(|v| !v.is_finite())
    {
        return Err(FramelineError::animation(
            "interpolate ranges must be finite",
        ));
    }
    if !input_range.windows(2).all(|w| w[0] <= w[1]) {
        return Err(FramelineError::animation(
            "interpolate input range must be non-decreasing",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
