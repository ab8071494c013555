use crate::foundation::error::{BloomError, BloomResult};

pub use kurbo::{BezPath, Point, Vec2};

/// Logical drawing surface in user units (the SVG `viewBox`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in user units.
    pub width: u32,
    /// Height in user units.
    pub height: u32,
}

impl Canvas {
    /// The landing tree's drawing area.
    pub const LANDING: Canvas = Canvas {
        width: 400,
        height: 500,
    };

    /// Construct a canvas, rejecting zero-sized surfaces.
    pub fn new(width: u32, height: u32) -> BloomResult<Self> {
        if width == 0 || height == 0 {
            return Err(BloomError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Height over width.
    pub fn aspect(self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }
}

pub(crate) fn ensure_finite(name: &str, v: f64) -> BloomResult<()> {
    if !v.is_finite() {
        return Err(BloomError::validation(format!("{name} must be finite")));
    }
    Ok(())
}
