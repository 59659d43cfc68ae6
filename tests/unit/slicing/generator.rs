use super::*;

use crate::random::source::SeededSource;

#[test]
fn bands_respect_height_and_coverage_invariants() {
    let params = EffectParams::default();
    for seed in 0..20u64 {
        let mut rng = SeededSource::new(seed);
        let slices = generate_slices(600.0, &params, &mut rng);

        assert!(!slices.is_empty());
        assert!(slices.len() <= params.slice_count as usize);
        for (i, s) in slices.iter().enumerate() {
            assert_eq!(s.index, i);
            assert!(s.height >= MIN_BAND_HEIGHT, "band {i} too short: {}", s.height);
            assert!(
                s.source_y + s.height <= 600.0 + 1e-9,
                "band {i} overruns the source"
            );
        }
        for pair in slices.windows(2) {
            assert!((pair[0].source_y + pair[0].height - pair[1].source_y).abs() < 1e-9);
        }
    }
}

#[test]
fn single_band_spans_the_full_height() {
    let params = EffectParams {
        slice_count: 1,
        slice_height_random: 0.0,
        ..EffectParams::default()
    };
    let mut rng = SeededSource::new(0);
    let slices = generate_slices(480.0, &params, &mut rng);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].source_y, 0.0);
    assert_eq!(slices[0].height, 480.0);
}

#[test]
fn zero_band_count_yields_no_bands() {
    let params = EffectParams {
        slice_count: 0,
        ..EffectParams::default()
    };
    let mut rng = SeededSource::new(0);
    assert!(generate_slices(600.0, &params, &mut rng).is_empty());
}

#[test]
fn degenerate_heights_yield_no_bands() {
    let params = EffectParams::default();
    let mut rng = SeededSource::new(0);
    assert!(generate_slices(0.0, &params, &mut rng).is_empty());
    assert!(generate_slices(-5.0, &params, &mut rng).is_empty());
    // Below the minimum band height nothing fits.
    assert!(generate_slices(7.0, &params, &mut rng).is_empty());
}

#[test]
fn randomized_heights_blend_toward_the_configured_range() {
    let params = EffectParams {
        slice_count: 100,
        slice_min_height: 20.0,
        slice_max_height: 40.0,
        slice_height_random: 1.0,
        ..EffectParams::default()
    };
    let mut rng = SeededSource::new(9);
    // Average height is 20 here, so every band stays between the minimum
    // band height and the configured maximum.
    let slices = generate_slices(2000.0, &params, &mut rng);
    for s in &slices {
        assert!(s.height >= MIN_BAND_HEIGHT);
        assert!(s.height <= 40.0 + 1e-9);
    }
}
