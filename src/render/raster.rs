use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{BloomError, BloomResult};

/// Largest raster edge we agree to allocate.
pub const MAX_DIM: u32 = 16_384;

/// A rasterized image as tightly packed, row-major RGBA8.
#[derive(Clone, Debug)]
pub struct RasterFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl RasterFrame {
    /// Convert to straight alpha in place (no-op if already straight).
    pub fn unpremultiply(&mut self) {
        if !self.premultiplied {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            let a = px[3] as u16;
            if a == 0 {
                px[0] = 0;
                px[1] = 0;
                px[2] = 0;
                continue;
            }
            px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
            px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
            px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
        }
        self.premultiplied = false;
    }
}

/// Parse `svg` and render it scaled to `width` x `height`.
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> BloomResult<RasterFrame> {
    if width == 0 || height == 0 {
        return Err(BloomError::render("raster size must be > 0"));
    }
    if width > MAX_DIM || height > MAX_DIM {
        return Err(BloomError::render(format!(
            "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse svg tree")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| BloomError::render("failed to allocate pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(&tree, xform, &mut pixmap.as_mut());
    Ok(RasterFrame {
        width,
        height,
        data: pixmap.take(),
        premultiplied: true,
    })
}

/// Write `frame` as a PNG, creating parent directories.
pub fn write_png(frame: &RasterFrame, path: &Path) -> BloomResult<()> {
    let mut frame = frame.clone();
    frame.unpremultiply();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
