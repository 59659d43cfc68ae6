use kurbo::Shape;

use crate::effects::pixel;
use crate::foundation::core::{Affine, Bitmap};
use crate::foundation::error::SliceframeResult;
use crate::params::model::{CornerStyle, EffectParams};
use crate::random::source::RandomSource;
use crate::render::surface::{affine_to_cpu, bezpath_to_cpu, rgba_straight_to_image_premul};
use crate::shapes::corner::{CutCorner, all_corners_path, single_corner_path};
use crate::slicing::generator::{Slice, generate_slices};
use crate::slicing::jitter;

/// Draw the full band stack onto the render context.
///
/// The whole stack is scaled by `params.scale` about the image center;
/// borders and decorations are drawn later in unscaled coordinates, so the
/// scale only ever affects the photographic content.
pub(crate) fn draw_band_stack(
    ctx: &mut vello_cpu::RenderContext,
    source: &Bitmap,
    params: &EffectParams,
    rng: &mut dyn RandomSource,
) -> SliceframeResult<()> {
    let img_width = f64::from(source.width);
    let img_height = f64::from(source.height);

    let scaled_width = img_width * params.scale;
    let scaled_height = img_height * params.scale;
    let offset_x = (img_width - scaled_width) / 2.0;
    let offset_y = (img_height - scaled_height) / 2.0;
    let global = Affine::translate((offset_x, offset_y)) * Affine::scale(params.scale);

    let slices = generate_slices(img_height, params, rng);

    let mut cursor_y = 0.0f64;
    for slice in &slices {
        draw_band(ctx, source, params, rng, global, slice, cursor_y)?;
        let gap = jitter::randomized_gap(params, rng);
        cursor_y += slice.height + gap;
    }

    tracing::debug!(bands = slices.len(), "band stack drawn");
    Ok(())
}

fn draw_band(
    ctx: &mut vello_cpu::RenderContext,
    source: &Bitmap,
    params: &EffectParams,
    rng: &mut dyn RandomSource,
    global: Affine,
    slice: &Slice,
    cursor_y: f64,
) -> SliceframeResult<()> {
    let img_width = f64::from(source.width);

    let band_width = jitter::randomized_width(params, img_width, rng);
    let x_offset = (img_width - band_width) / 2.0;

    let (mut pixels, width_px, height_px) =
        extract_region(source, x_offset, slice.source_y, band_width, slice.height);

    pixel::apply_grayscale(&mut pixels, params.grayscale);
    pixel::apply_contrast_brightness(&mut pixels, params.contrast, params.brightness);

    let has_corner = jitter::should_have_corner(slice.index, params, rng);
    let corner_size = if has_corner {
        jitter::randomized_corner_size(params, rng)
    } else {
        0.0
    };
    let tilt_rad = jitter::randomized_tilt_rad(params, rng);

    let band_w = f64::from(width_px);
    let band_h = f64::from(height_px);

    // Rotate about the band's center at the running cursor position.
    let local = Affine::translate((img_width / 2.0, cursor_y + slice.height / 2.0))
        * Affine::rotate(tilt_rad)
        * Affine::translate((-band_w / 2.0, -slice.height / 2.0));
    let transform = global * local;

    // The clip outline stays within the band, so filling it with the band's
    // image paint is equivalent to clip-then-draw.
    let outline = if has_corner && corner_size > 0.0 {
        match params.corner_style {
            CornerStyle::AllCorners => all_corners_path(band_w, band_h, corner_size),
            CornerStyle::SingleRightAngle => {
                let corner = CutCorner::from_unit(rng.next_f64());
                single_corner_path(band_w, band_h, corner_size, corner)
            }
        }
    } else {
        kurbo::Rect::new(0.0, 0.0, band_w, band_h).to_path(0.1)
    };

    if width_px == 0 || height_px == 0 {
        return Ok(());
    }
    let paint = rgba_straight_to_image_premul(&pixels, width_px, height_px)?;

    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(affine_to_cpu(transform));
    ctx.set_paint(paint);
    ctx.fill_path(&bezpath_to_cpu(&outline));

    Ok(())
}

/// Copy the centered band region out of the source into a private buffer.
///
/// Fractional geometry is rounded to whole pixels and clamped to the source
/// bounds; the returned dimensions may therefore be smaller than requested.
fn extract_region(source: &Bitmap, x: f64, y: f64, width: f64, height: f64) -> (Vec<u8>, u32, u32) {
    let x0 = x.round().max(0.0) as u32;
    let y0 = y.round().max(0.0) as u32;
    if x0 >= source.width || y0 >= source.height {
        return (Vec::new(), 0, 0);
    }

    let w = (width.round().max(0.0) as u32).min(source.width - x0);
    let h = (height.round().max(0.0) as u32).min(source.height - y0);
    if w == 0 || h == 0 {
        return (Vec::new(), 0, 0);
    }

    let mut out = Vec::with_capacity((w as usize) * (h as usize) * 4);
    let src_stride = (source.width as usize) * 4;
    for row in 0..h as usize {
        let start = (y0 as usize + row) * src_stride + (x0 as usize) * 4;
        out.extend_from_slice(&source.data[start..start + (w as usize) * 4]);
    }
    (out, w, h)
}

#[cfg(test)]
#[path = "../../tests/unit/render/slices.rs"]
mod tests;
