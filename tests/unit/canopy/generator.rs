use super::*;
use crate::foundation::rng::Rng64;

fn default_cloud(seed: u64) -> Vec<LeafPoint> {
    CanopyParams::default().generate(&mut Rng64::new(seed))
}

#[test]
fn output_never_exceeds_candidate_count() {
    for count in [0usize, 1, 10, 500, 1500] {
        let params = CanopyParams {
            count,
            ..CanopyParams::default()
        };
        let leaves = params.generate(&mut Rng64::new(count as u64));
        assert!(leaves.len() <= count);
    }
}

#[test]
fn zero_candidates_yield_empty_cloud() {
    let leaves = generate(0, Point::new(0.0, 0.0), 1.0, 100.0, &mut Rng64::new(1));
    assert!(leaves.is_empty());
}

#[test]
fn every_leaf_is_above_the_boundary() {
    for seed in 0..8 {
        for leaf in default_cloud(seed) {
            assert!(leaf.y < 370.0, "leaf below trunk line: {leaf:?}");
        }
    }
}

#[test]
fn tight_boundary_still_holds_after_jitter() {
    // Boundary through the middle of the heart, so many anchors sit right above it.
    let leaves = generate(
        4000,
        Point::new(200.0, 190.0),
        11.8,
        190.0,
        &mut Rng64::new(5),
    );
    assert!(!leaves.is_empty());
    assert!(leaves.iter().all(|l| l.y < 190.0));
}

#[test]
fn boundary_above_the_curve_drops_everything() {
    let leaves = generate(
        1000,
        Point::new(200.0, 190.0),
        11.8,
        -1_000.0,
        &mut Rng64::new(3),
    );
    assert!(leaves.is_empty());
}

#[test]
fn leaf_attributes_stay_in_range() {
    for leaf in default_cloud(42) {
        assert!((0.07..=0.45).contains(&leaf.size));
        assert!((0.4..=1.0).contains(&leaf.opacity));
        assert!((0.0..6.0).contains(&leaf.animation_delay));
        assert!((0.0..360.0).contains(&leaf.rotation_deg));
    }
}

#[test]
fn most_candidates_survive_the_default_crop() {
    // The heart tip reaches y ~= 190 + 17 * 11.8 = 390.6, so only the lower tip is cropped.
    let leaves = default_cloud(7);
    assert!(leaves.len() > 1200, "kept {}", leaves.len());
    assert!(leaves.len() < 1500);
}

#[test]
fn points_stay_near_the_scaled_heart() {
    // |rawX| <= 16 and rawY in [-17, 12], plus jitter.
    let pad = JITTER_HALF_WIDTH + 1e-9;
    for leaf in default_cloud(11) {
        assert!((leaf.x - 200.0).abs() <= 16.0 * 11.8 + pad);
        assert!(leaf.y >= 190.0 - 12.0 * 11.8 - pad);
    }
}

#[test]
fn radial_bias_concentrates_mass_outward() {
    // With r^0.35, P(r_biased < 0.5) = 0.5^(1/0.35) ~= 0.138.
    let mut rng = Rng64::new(9);
    let n = 20_000;
    let inner = (0..n)
        .filter(|_| rng.next_f64().powf(RADIAL_BIAS_EXPONENT) < 0.5)
        .count();
    let frac = inner as f64 / n as f64;
    assert!((0.11..0.17).contains(&frac), "inner fraction {frac}");
}

#[test]
fn same_seed_same_cloud() {
    assert_eq!(default_cloud(1234), default_cloud(1234));
    assert_ne!(default_cloud(1234), default_cloud(4321));
}

#[test]
fn heart_curve_hits_known_points() {
    let top = heart_curve(0.0);
    assert!(top.x.abs() < 1e-12);
    assert!((top.y - (-5.0)).abs() < 1e-12);

    let tip = heart_curve(std::f64::consts::PI);
    assert!(tip.x.abs() < 1e-9);
    assert!((tip.y - 17.0).abs() < 1e-9);
}

#[test]
fn validate_rejects_non_finite_geometry() {
    let params = CanopyParams {
        scale: f64::INFINITY,
        ..CanopyParams::default()
    };
    assert!(params.validate().is_err());
    assert!(CanopyParams::default().validate().is_ok());
}
