use crate::params::model::EffectParams;
use crate::random::source::RandomSource;

/// No band is ever shorter than this, in source pixels.
pub const MIN_BAND_HEIGHT: f64 = 10.0;

/// One horizontal band of the source image.
///
/// Derived per render and consumed immediately by the band compositor;
/// never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
    /// Band height in source pixels.
    pub height: f64,
    /// Vertical offset of the band in the source image.
    pub source_y: f64,
    /// Zero-based band index in scan order.
    pub index: usize,
}

/// Partition `total_height` into at most `slice_count` bands.
///
/// Each band starts from the average height and, when
/// `slice_height_random > 0`, is blended toward a fresh uniform draw from
/// `[slice_min_height, slice_max_height]` by a per-band random factor. The
/// final height is clamped between [`MIN_BAND_HEIGHT`] and the remaining
/// height; generation stops once the remaining height cannot fit another
/// band, so fewer bands than requested is a normal outcome, not an error.
pub fn generate_slices(
    total_height: f64,
    params: &EffectParams,
    rng: &mut dyn RandomSource,
) -> Vec<Slice> {
    let mut slices = Vec::new();
    if params.slice_count == 0 || !(total_height > 0.0) {
        return slices;
    }

    let avg_height = total_height / f64::from(params.slice_count);
    let mut remaining = total_height;
    let mut index = 0usize;

    while remaining > 0.0 && index < params.slice_count as usize {
        let mut base_height = avg_height;

        if params.slice_height_random > 0.0 {
            let range = params.slice_max_height - params.slice_min_height;
            let factor = rng.next_f64() * params.slice_height_random;
            let random_height = params.slice_min_height + rng.next_f64() * range;
            base_height = base_height * (1.0 - factor) + random_height * factor;
        }

        let height = base_height.max(MIN_BAND_HEIGHT).min(remaining);
        if height < MIN_BAND_HEIGHT {
            break;
        }

        slices.push(Slice {
            height,
            source_y: total_height - remaining,
            index,
        });

        remaining -= height;
        index += 1;
    }

    tracing::debug!(bands = slices.len(), total_height, "generated band layout");
    slices
}

#[cfg(test)]
#[path = "../../tests/unit/slicing/generator.rs"]
mod tests;
