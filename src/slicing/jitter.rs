//! Per-render randomization of the configured band knobs.
//!
//! Every function takes the random source explicitly and draws nothing when
//! its randomization factor is zero, so draw counts stay predictable for a
//! replayed stream.

use crate::params::model::EffectParams;
use crate::random::source::RandomSource;

/// Randomized band width, clamped to what the source can provide.
///
/// With a zero factor this returns the configured maximum (clamped to the
/// available width); otherwise the width is drawn around the midpoint of
/// the configured `[min, max]` range.
pub fn randomized_width(params: &EffectParams, max_width: f64, rng: &mut dyn RandomSource) -> f64 {
    let min_width = params.slice_min_width.min(max_width);
    let max_width_param = params.slice_max_width.min(max_width);

    if params.slice_width_random == 0.0 {
        return max_width_param;
    }

    let range = max_width_param - min_width;
    let factor = rng.next_f64() * params.slice_width_random;
    let width = min_width + range * (0.5 + (rng.next_f64() - 0.5) * factor);

    width.round().clamp(min_width, max_width)
}

/// Randomized vertical gap after a band, floored at zero.
pub fn randomized_gap(params: &EffectParams, rng: &mut dyn RandomSource) -> f64 {
    if params.slice_gap_random == 0.0 {
        return params.slice_gap;
    }
    let factor = 1.0 + (rng.next_f64() - 0.5) * 2.0 * params.slice_gap_random;
    (params.slice_gap * factor).round().max(0.0)
}

/// Randomized band tilt in radians.
///
/// Jitter amplitude scales with the factor, up to ±10 degrees at 1.
pub fn randomized_tilt_rad(params: &EffectParams, rng: &mut dyn RandomSource) -> f64 {
    if params.tilt_angle_random == 0.0 {
        return params.tilt_angle_deg.to_radians();
    }
    let max_variation = 10.0 * params.tilt_angle_random;
    let angle_deg = params.tilt_angle_deg + (rng.next_f64() - 0.5) * 2.0 * max_variation;
    angle_deg.to_radians()
}

/// Randomized corner-cut size, floored at 5 px.
pub fn randomized_corner_size(params: &EffectParams, rng: &mut dyn RandomSource) -> f64 {
    if params.corner_size_random == 0.0 {
        return params.corner_size;
    }
    let factor = 1.0 + (rng.next_f64() - 0.5) * params.corner_size_random;
    (params.corner_size * factor).round().max(5.0)
}

/// Whether band `index` gets a corner cut.
///
/// The base rule marks every `corner_frequency`-th band. The eligibility
/// jitter is asymmetric on purpose: an expected cut survives a draw above
/// `0.3 × factor`, while an unexpected cut appears on a draw below
/// `0.2 × factor`.
pub fn should_have_corner(
    index: usize,
    params: &EffectParams,
    rng: &mut dyn RandomSource,
) -> bool {
    let frequency = params.corner_frequency.max(1) as usize;
    let base = (index + 1) % frequency == 0;

    if params.corner_frequency_random > 0.0 {
        if base {
            rng.next_f64() > params.corner_frequency_random * 0.3
        } else {
            rng.next_f64() < params.corner_frequency_random * 0.2
        }
    } else {
        base
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slicing/jitter.rs"]
mod tests;
