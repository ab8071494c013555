use kurbo::Point;

use crate::{
    canopy::generator::LeafPoint,
    foundation::core::{BezPath, Canvas},
};

/// Leaf fill color.
pub const LEAF_FILL: &str = "#ff4d6d";
/// Trunk and branch stroke color.
pub const TRUNK_STROKE: &str = "#8B5E5E";
/// Page background.
pub const BACKGROUND: &str = "#fdf2f8";

/// Heart leaf outline, centered on its notch, roughly 30x30 units.
pub fn leaf_path() -> BezPath {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.curve_to((-5.0, -10.0), (-15.0, -10.0), (-15.0, 0.0));
    p.curve_to((-15.0, 10.0), (0.0, 20.0), (0.0, 20.0));
    p.curve_to((0.0, 20.0), (15.0, 10.0), (15.0, 0.0));
    p.curve_to((15.0, -10.0), (5.0, -10.0), (0.0, 0.0));
    p.close_path();
    p
}

/// Trunk and branches as `(path, stroke width)`, in landing canvas units.
pub fn trunk_paths() -> Vec<(BezPath, f64)> {
    const STROKES: [((f64, f64), (f64, f64), (f64, f64), f64); 6] = [
        ((200.0, 480.0), (200.0, 440.0), (200.0, 380.0), 6.0),
        ((200.0, 380.0), (160.0, 360.0), (120.0, 340.0), 4.0),
        ((200.0, 380.0), (240.0, 360.0), (280.0, 340.0), 4.0),
        ((200.0, 350.0), (170.0, 300.0), (150.0, 260.0), 3.0),
        ((200.0, 350.0), (230.0, 300.0), (250.0, 260.0), 3.0),
        ((200.0, 300.0), (200.0, 220.0), (200.0, 180.0), 2.0),
    ];

    STROKES
        .iter()
        .map(|&(start, ctrl, end, width)| {
            let mut p = BezPath::new();
            p.move_to(Point::from(start));
            p.quad_to(Point::from(ctrl), Point::from(end));
            (p, width)
        })
        .collect()
}

/// SVG document of the landing tree: background, faint trunk, then every leaf.
pub fn landing_svg(leaves: &[LeafPoint], canvas: Canvas) -> String {
    let leaf_d = leaf_path().to_svg();
    let mut svg = String::with_capacity(256 + leaves.len() * (leaf_d.len() + 96));

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = canvas.width,
        h = canvas.height,
    ));
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{BACKGROUND}"/>"#,
        canvas.width, canvas.height
    ));

    svg.push_str(&format!(
        r#"<g opacity="0.3" fill="none" stroke="{TRUNK_STROKE}" stroke-linecap="round">"#
    ));
    for (path, width) in trunk_paths() {
        svg.push_str(&format!(
            r#"<path d="{}" stroke-width="{width}"/>"#,
            path.to_svg()
        ));
    }
    svg.push_str("</g>");

    svg.push_str(&format!(r#"<g fill="{LEAF_FILL}">"#));
    for leaf in leaves {
        svg.push_str(&format!(
            r#"<path d="{leaf_d}" transform="translate({:.2} {:.2}) rotate({:.1}) scale({:.3})" fill-opacity="{:.3}"/>"#,
            leaf.x, leaf.y, leaf.rotation_deg, leaf.size, leaf.opacity
        ));
    }
    svg.push_str("</g></svg>");
    svg
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
