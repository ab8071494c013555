use super::*;

#[test]
fn generation_is_lazy() {
    let canopy = LandingCanopy::new(CanopyParams::default()).unwrap();
    assert!(!canopy.is_generated());
    let _ = canopy.leaves();
    assert!(canopy.is_generated());
}

#[test]
fn repeated_reads_return_the_same_batch() {
    let canopy = LandingCanopy::new(CanopyParams::default()).unwrap();
    let first = canopy.leaves();
    let first_ptr = first.as_ptr();
    let first_copy = first.to_vec();

    for _ in 0..5 {
        let again = canopy.leaves();
        assert_eq!(again.as_ptr(), first_ptr);
        assert_eq!(again, first_copy.as_slice());
    }
}

#[test]
fn seeded_canopies_match_direct_generation() {
    let params = CanopyParams {
        seed: Some(77),
        ..CanopyParams::default()
    };
    let canopy = LandingCanopy::new(params).unwrap();
    let direct = params.generate(&mut Rng64::new(77));
    assert_eq!(canopy.leaves(), direct.as_slice());
}

#[test]
fn invalid_params_are_rejected() {
    let params = CanopyParams {
        boundary_y: f64::NAN,
        ..CanopyParams::default()
    };
    assert!(LandingCanopy::new(params).is_err());
}
