use std::f64::consts::TAU;

use crate::foundation::{
    core::{Point, Vec2, ensure_finite},
    error::BloomResult,
    rng::RandomSource,
};

/// Exponent applied to the radial draw; below 1 it pushes mass toward the curve outline.
pub const RADIAL_BIAS_EXPONENT: f64 = 0.35;
/// Half-width of the uniform positional jitter.
pub const JITTER_HALF_WIDTH: f64 = 7.5;
/// Leaf scale range `[min, max]`.
pub const LEAF_SIZE_RANGE: (f64, f64) = (0.07, 0.45);
/// Leaf opacity range `[min, max]`.
pub const LEAF_OPACITY_RANGE: (f64, f64) = (0.4, 1.0);
/// Upper bound (exclusive) of the pulse animation delay, in seconds.
pub const MAX_ANIMATION_DELAY_SECS: f64 = 6.0;

/// One heart leaf of the canopy.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LeafPoint {
    /// Horizontal position in canvas units.
    pub x: f64,
    /// Vertical position in canvas units (grows downward).
    pub y: f64,
    /// Uniform scale applied to the leaf shape.
    pub size: f64,
    /// Pulse animation start offset in seconds.
    pub animation_delay: f64,
    /// Fill opacity.
    pub opacity: f64,
    /// Fixed leaf orientation in degrees.
    pub rotation_deg: f64,
}

/// Parameters of a canopy generation run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CanopyParams {
    /// Number of candidate samples (the output may be shorter).
    pub count: usize,
    /// Center of the heart curve.
    pub center: Point,
    /// Curve scale in canvas units per curve unit.
    pub scale: f64,
    /// Candidates at or below this line are dropped.
    pub boundary_y: f64,
    /// Fixed seed; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for CanopyParams {
    fn default() -> Self {
        Self {
            count: 1500,
            center: Point::new(200.0, 190.0),
            scale: 11.8,
            boundary_y: 370.0,
            seed: None,
        }
    }
}

impl CanopyParams {
    /// Reject non-finite geometry.
    pub fn validate(&self) -> BloomResult<()> {
        ensure_finite("canopy center.x", self.center.x)?;
        ensure_finite("canopy center.y", self.center.y)?;
        ensure_finite("canopy scale", self.scale)?;
        ensure_finite("canopy boundary_y", self.boundary_y)?;
        Ok(())
    }

    /// Run [`generate`] with these parameters.
    pub fn generate(&self, rng: &mut impl RandomSource) -> Vec<LeafPoint> {
        generate(self.count, self.center, self.scale, self.boundary_y, rng)
    }
}

/// The classic parametric heart, in curve units, y pointing down.
pub fn heart_curve(t: f64) -> Vec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    Vec2::new(x, y)
}

/// Sample a heart-shaped leaf cloud cropped above `boundary_y`.
///
/// Each of the `count` candidates picks an angle on [`heart_curve`] and a radial factor
/// `r^0.35`, so density hugs the outline. Candidates whose anchor is at or below `boundary_y`
/// are dropped (not replaced), so the result has at most `count` leaves. Kept anchors are
/// jittered by up to [`JITTER_HALF_WIDTH`] on each axis; a vertical jitter that would cross the
/// boundary is mirrored, so every leaf satisfies `y < boundary_y`.
pub fn generate(
    count: usize,
    center: Point,
    scale: f64,
    boundary_y: f64,
    rng: &mut impl RandomSource,
) -> Vec<LeafPoint> {
    let mut leaves = Vec::with_capacity(count);

    for _ in 0..count {
        let t = rng.uniform(0.0, TAU);
        let r = rng.next_f64().powf(RADIAL_BIAS_EXPONENT);
        let raw = heart_curve(t);

        let anchor = center + raw * (scale * r);
        if anchor.y >= boundary_y {
            continue;
        }

        let jx = rng.uniform(-JITTER_HALF_WIDTH, JITTER_HALF_WIDTH);
        let mut jy = rng.uniform(-JITTER_HALF_WIDTH, JITTER_HALF_WIDTH);
        if anchor.y + jy >= boundary_y {
            jy = -jy;
        }

        leaves.push(LeafPoint {
            x: anchor.x + jx,
            y: anchor.y + jy,
            size: rng.uniform(LEAF_SIZE_RANGE.0, LEAF_SIZE_RANGE.1),
            animation_delay: rng.uniform(0.0, MAX_ANIMATION_DELAY_SECS),
            opacity: rng.uniform(LEAF_OPACITY_RANGE.0, LEAF_OPACITY_RANGE.1),
            rotation_deg: rng.uniform(0.0, 360.0),
        });
    }

    tracing::debug!(candidates = count, kept = leaves.len(), "generated canopy");
    leaves
}

#[cfg(test)]
#[path = "../../tests/unit/canopy/generator.rs"]
mod tests;
