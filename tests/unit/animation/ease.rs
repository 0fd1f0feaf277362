use super::*;

const ALL: [Ease; 3] = [Ease::Linear, Ease::OutQuad, Ease::OutCubic];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-0.5), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn out_cubic_matches_closed_form() {
    assert!((Ease::OutCubic.apply(0.5) - 0.875).abs() < 1e-12);
    assert!((Ease::OutCubic.apply(0.25) - (1.0 - 0.75f64.powi(3))).abs() < 1e-12);
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}
