use super::*;

use crate::random::source::SeededSource;

struct Const(f64);

impl RandomSource for Const {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

#[test]
fn width_without_randomness_returns_clamped_max() {
    let params = EffectParams {
        slice_width_random: 0.0,
        ..EffectParams::default()
    };
    let mut rng = Const(0.7);
    // Configured max (2000) exceeds the available width.
    assert_eq!(randomized_width(&params, 1000.0, &mut rng), 1000.0);

    let params = EffectParams {
        slice_width_random: 0.0,
        slice_max_width: 300.0,
        slice_min_width: 100.0,
        ..EffectParams::default()
    };
    assert_eq!(randomized_width(&params, 1000.0, &mut rng), 300.0);
}

#[test]
fn width_stays_within_configured_and_available_bounds() {
    let params = EffectParams {
        slice_min_width: 200.0,
        slice_max_width: 800.0,
        slice_width_random: 1.0,
        ..EffectParams::default()
    };
    let mut rng = SeededSource::new(3);
    for _ in 0..200 {
        let w = randomized_width(&params, 1000.0, &mut rng);
        assert!(w >= 200.0);
        assert!(w <= 1000.0);
        assert_eq!(w, w.round());
    }
}

#[test]
fn gap_without_randomness_is_the_configured_gap() {
    let params = EffectParams {
        slice_gap: 8.0,
        slice_gap_random: 0.0,
        ..EffectParams::default()
    };
    assert_eq!(randomized_gap(&params, &mut Const(0.99)), 8.0);
}

#[test]
fn gap_randomization_never_goes_negative() {
    let params = EffectParams {
        slice_gap: 8.0,
        slice_gap_random: 1.0,
        ..EffectParams::default()
    };
    // A bottomed-out draw scales the gap to zero, not below.
    assert_eq!(randomized_gap(&params, &mut Const(0.0)), 0.0);
    let mut rng = SeededSource::new(11);
    for _ in 0..100 {
        assert!(randomized_gap(&params, &mut rng) >= 0.0);
    }
}

#[test]
fn tilt_without_randomness_is_the_base_angle() {
    let params = EffectParams {
        tilt_angle_deg: 3.0,
        tilt_angle_random: 0.0,
        ..EffectParams::default()
    };
    assert_eq!(
        randomized_tilt_rad(&params, &mut Const(0.0)),
        3.0f64.to_radians()
    );
}

#[test]
fn tilt_jitter_amplitude_scales_with_the_factor() {
    let params = EffectParams {
        tilt_angle_deg: 0.0,
        tilt_angle_random: 1.0,
        ..EffectParams::default()
    };
    // Centered draw leaves the base angle; extreme draws hit ±10 degrees.
    assert_eq!(randomized_tilt_rad(&params, &mut Const(0.5)), 0.0);
    assert!(
        (randomized_tilt_rad(&params, &mut Const(0.0)) - (-10.0f64).to_radians()).abs() < 1e-9
    );
    let mut rng = SeededSource::new(5);
    for _ in 0..100 {
        let rad = randomized_tilt_rad(&params, &mut rng);
        assert!(rad.abs() <= 10.0f64.to_radians() + 1e-9);
    }
}

#[test]
fn corner_size_is_floored_at_five_pixels() {
    let params = EffectParams {
        corner_size: 1.0,
        corner_size_random: 1.0,
        ..EffectParams::default()
    };
    assert_eq!(randomized_corner_size(&params, &mut Const(0.0)), 5.0);

    let params = EffectParams {
        corner_size: 25.0,
        corner_size_random: 0.0,
        ..EffectParams::default()
    };
    assert_eq!(randomized_corner_size(&params, &mut Const(0.9)), 25.0);
}

#[test]
fn corner_cadence_without_jitter_marks_every_nth_band() {
    let params = EffectParams {
        corner_frequency: 3,
        corner_frequency_random: 0.0,
        ..EffectParams::default()
    };
    let marked: Vec<usize> = (0..10)
        .filter(|&i| should_have_corner(i, &params, &mut Const(0.0)))
        .collect();
    assert_eq!(marked, vec![2, 5, 8]);
}

#[test]
fn eligibility_jitter_is_asymmetric() {
    let params = EffectParams {
        corner_frequency: 3,
        corner_frequency_random: 1.0,
        ..EffectParams::default()
    };
    // Expected cut at index 2 survives only a draw above 0.3.
    assert!(!should_have_corner(2, &params, &mut Const(0.1)));
    assert!(should_have_corner(2, &params, &mut Const(0.5)));
    // Unexpected cut at index 0 appears only on a draw below 0.2.
    assert!(should_have_corner(0, &params, &mut Const(0.1)));
    assert!(!should_have_corner(0, &params, &mut Const(0.5)));
}
