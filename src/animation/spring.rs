use crate::foundation::{
    core::Fps,
    error::{FramelineError, FramelineResult},
};

/// Residual displacement (relative to the target) below which a spring reports exactly the
/// target value.
pub const SETTLE_EPSILON: f64 = 1e-4;

const MAX_SETTLE_SCAN_FRAMES: u64 = 60 * 60 * 60;

/// Physical parameters of a damped harmonic oscillator.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Mass `m`.
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_mass() -> f64 {
    1.0
}

impl SpringConfig {
    /// Unit-mass spring.
    pub const fn new(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass: 1.0,
        }
    }

    /// Reject non-finite or non-physical parameters.
    pub fn validate(&self) -> FramelineResult<()> {
        if !(self.damping.is_finite() && self.stiffness.is_finite() && self.mass.is_finite()) {
            return Err(FramelineError::animation("spring parameters must be finite"));
        }
        if self.damping < 0.0 {
            return Err(FramelineError::animation("spring damping must be >= 0"));
        }
        if self.stiffness <= 0.0 {
            return Err(FramelineError::animation("spring stiffness must be > 0"));
        }
        if self.mass <= 0.0 {
            return Err(FramelineError::animation("spring mass must be > 0"));
        }
        Ok(())
    }

    /// Undamped angular frequency `sqrt(k / m)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness.max(0.0) / self.mass.max(1e-9)).sqrt()
    }

    /// Damping ratio `zeta = c / (2 sqrt(k m))`; `< 1` oscillates, `1` is critical.
    pub fn damping_ratio(&self) -> f64 {
        let k = self.stiffness.max(0.0);
        let m = self.mass.max(1e-9);
        self.damping.max(0.0) / (2.0 * (k * m).sqrt()).max(1e-9)
    }
}

/// Spring progress from 0 toward 1 at `frame` frames after the animation's own start.
///
/// Negative (not yet started) frames yield 0. Once the residual falls under
/// [`SETTLE_EPSILON`] the value is exactly 1.
pub fn spring(frame: f64, fps: Fps, config: SpringConfig) -> f64 {
    spring_to(frame, fps, config, 1.0)
}

/// Like [`spring`], driven toward `target` instead of 1.
pub fn spring_to(frame: f64, fps: Fps, config: SpringConfig, target: f64) -> f64 {
    if frame.is_nan() || frame <= 0.0 {
        return 0.0;
    }
    let t = fps.frame_offset_to_secs(frame);
    match step_response(t, config) {
        Some((x, residual)) if residual >= SETTLE_EPSILON => target * x,
        Some(_) => target,
        None => 0.0,
    }
}

/// First whole frame at which [`spring`] reports exactly its target, if it settles within
/// an hour of footage.
pub fn settling_frame(fps: Fps, config: SpringConfig) -> Option<u64> {
    let t_of = |f: u64| fps.frames_to_secs(f);
    (1..=MAX_SETTLE_SCAN_FRAMES).find(|&f| {
        matches!(step_response(t_of(f), config), Some((_, residual)) if residual < SETTLE_EPSILON)
    })
}

/// Unit step response `x(t)` with `x(0) = 0`, `x'(0) = 0`, paired with a bound on
/// `|1 - x(s)|` for all `s >= t`. `None` when the spring has no restoring force.
fn step_response(t: f64, config: SpringConfig) -> Option<(f64, f64)> {
    let w0 = config.natural_frequency();
    if !w0.is_finite() || w0 <= 0.0 {
        return None;
    }
    let zeta = config.damping_ratio();

    if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        let e = (-w0 * t).exp();
        let residual = e * (1.0 + w0 * t);
        Some((1.0 - residual, residual))
    } else if zeta < 1.0 {
        // Underdamped.
        let root = (1.0 - zeta * zeta).sqrt();
        let wd = w0 * root;
        let e = (-zeta * w0 * t).exp();
        let k = zeta / root;
        let x = 1.0 - e * ((wd * t).cos() + k * (wd * t).sin());
        Some((x, e / root))
    } else {
        // Overdamped.
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = (zeta - z2) / (2.0 * z2);
        let a = c2 * (r1 * t).exp();
        let b = c1 * (r2 * t).exp();
        Some((1.0 - (a - b), a.abs() + b.abs()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
