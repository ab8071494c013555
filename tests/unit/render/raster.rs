use super::*;
use crate::{
    canopy::generator::LeafPoint,
    foundation::core::Canvas,
    render::svg::landing_svg,
};

fn pixel(frame: &RasterFrame, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[i],
        frame.data[i + 1],
        frame.data[i + 2],
        frame.data[i + 3],
    ]
}

#[test]
fn rejects_degenerate_and_huge_sizes() {
    let svg = landing_svg(&[], Canvas::LANDING);
    assert!(rasterize_svg(&svg, 0, 10).is_err());
    assert!(rasterize_svg(&svg, MAX_DIM + 1, 10).is_err());
}

#[test]
fn invalid_svg_is_an_error() {
    assert!(rasterize_svg("<not-svg", 10, 10).is_err());
}

#[test]
fn background_fills_the_frame() {
    let svg = landing_svg(&[], Canvas::LANDING);
    let frame = rasterize_svg(&svg, 80, 100).unwrap();
    assert_eq!(frame.data.len(), 80 * 100 * 4);
    // #fdf2f8, opaque.
    assert_eq!(pixel(&frame, 2, 2), [0xfd, 0xf2, 0xf8, 255]);
}

#[test]
fn a_large_leaf_paints_leaf_color() {
    let leaves = [LeafPoint {
        x: 100.0,
        y: 100.0,
        size: 3.0,
        animation_delay: 0.0,
        opacity: 1.0,
        rotation_deg: 0.0,
    }];
    let svg = landing_svg(&leaves, Canvas::LANDING);
    let frame = rasterize_svg(&svg, 400, 500).unwrap();
    // Inside the lower lobe of the heart: (100, 100 + 3 * 10).
    let [r, g, b, a] = pixel(&frame, 100, 130);
    assert_eq!(a, 255);
    assert!(r > 240 && g < 100 && b < 130, "got {r},{g},{b}");
}

#[test]
fn unpremultiply_restores_straight_color() {
    let mut frame = RasterFrame {
        width: 1,
        height: 1,
        data: vec![64, 32, 0, 128],
        premultiplied: true,
    };
    frame.unpremultiply();
    assert!(!frame.premultiplied);
    assert_eq!(frame.data, vec![128, 64, 0, 128]);
    frame.unpremultiply();
    assert_eq!(frame.data, vec![128, 64, 0, 128]);
}
