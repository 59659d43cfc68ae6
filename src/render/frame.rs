//! The unscaled frame: inset border strokes, corner tick marks and the
//! rotated edge labels.

use kurbo::{Cap, Join, Stroke, StrokeOpts, stroke};

use crate::foundation::core::{Affine, BezPath};
use crate::foundation::error::SliceframeResult;
use crate::params::model::EffectParams;
use crate::random::source::RandomSource;
use crate::render::surface::{affine_to_cpu, bezpath_to_cpu, color_to_cpu};
use crate::text::layout::{TextBrushRgba8, TextLayoutEngine};

/// Inset of the edge labels beyond the border rectangle, in pixels.
const LABEL_EXTRA_INSET: f64 = 25.0;

/// Fraction of the shorter canvas side used for the outer tick-mark size.
const TICK_SIZE_FRACTION: f64 = 0.05;

/// Size of the inner tick marks relative to the outer ones.
const INNER_TICK_RATIO: f64 = 0.6;

/// Draw the four (possibly randomized) border strokes inset by
/// `border_offset`.
pub(crate) fn draw_borders(
    ctx: &mut vello_cpu::RenderContext,
    width: f64,
    height: f64,
    params: &EffectParams,
    rng: &mut dyn RandomSource,
) {
    let offset = params.border_offset;

    // Top, bottom, left, right.
    draw_border_line(ctx, offset, offset, width - offset, offset, true, params, rng);
    draw_border_line(
        ctx,
        offset,
        height - offset,
        width - offset,
        height - offset,
        true,
        params,
        rng,
    );
    draw_border_line(ctx, offset, offset, offset, height - offset, false, params, rng);
    draw_border_line(
        ctx,
        width - offset,
        offset,
        width - offset,
        height - offset,
        false,
        params,
        rng,
    );
}

/// Centered trim of an edge stroke: `(start_offset, actual_length)`.
///
/// The randomized factor is capped at 1, so a segment never exceeds its
/// edge and is always trimmed equally from both ends.
pub(crate) fn trimmed_span(line_length: f64, fraction: f64, factor: f64) -> (f64, f64) {
    let actual_length = line_length * fraction * factor.min(1.0);
    ((line_length - actual_length) / 2.0, actual_length)
}

#[allow(clippy::too_many_arguments)]
fn draw_border_line(
    ctx: &mut vello_cpu::RenderContext,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    horizontal: bool,
    params: &EffectParams,
    rng: &mut dyn RandomSource,
) {
    let line_length = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();

    let length_factor = if params.border_length_random > 0.0 {
        1.0 + (rng.next_f64() - 0.5) * 2.0 * params.border_length_random
    } else {
        1.0
    };
    let (start_offset, actual_length) = trimmed_span(line_length, params.border_length, length_factor);

    let mut actual_width = params.border_width;
    if params.border_width_random > 0.0 {
        let factor = 1.0 + (rng.next_f64() - 0.5) * 2.0 * params.border_width_random;
        actual_width = (params.border_width * factor).round().max(1.0);
    }

    if actual_length <= 0.0 {
        return;
    }

    let (ax1, ay1, ax2, ay2) = if horizontal {
        (x1 + start_offset, y1, x2 - start_offset, y2)
    } else {
        (x1, y1 + start_offset, x2, y2 - start_offset)
    };

    let mut line = BezPath::new();
    line.move_to((ax1, ay1));
    line.line_to((ax2, ay2));

    let style = Stroke::new(actual_width).with_caps(Cap::Square);
    let stroked = stroke(line, &style, &StrokeOpts::default(), 0.1);

    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color_to_cpu(params.border_color));
    ctx.fill_path(&bezpath_to_cpu(&stroked));
}

/// Draw the two nested sets of L-shaped tick marks at all four canvas
/// corners.
pub(crate) fn draw_corner_marks(
    ctx: &mut vello_cpu::RenderContext,
    width: f64,
    height: f64,
    params: &EffectParams,
) {
    if params.line_width <= 0.0 {
        return;
    }

    let outer = width.min(height) * TICK_SIZE_FRACTION;
    let inner = outer * INNER_TICK_RATIO;

    let style = Stroke::new(params.line_width)
        .with_caps(Cap::Round)
        .with_join(Join::Round);

    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color_to_cpu(params.line_color));

    for size in [outer, inner] {
        let corners = [
            (size, size, true, true),
            (width - size, size, false, true),
            (size, height - size, true, false),
            (width - size, height - size, false, false),
        ];
        for (x, y, left, top) in corners {
            let stroked = stroke(
                tick_path(x, y, size, left, top),
                &style,
                &StrokeOpts::default(),
                0.1,
            );
            ctx.fill_path(&bezpath_to_cpu(&stroked));
        }
    }
}

fn tick_path(x: f64, y: f64, size: f64, left: bool, top: bool) -> BezPath {
    let dir_x = if left { 1.0 } else { -1.0 };
    let dir_y = if top { 1.0 } else { -1.0 };

    let mut path = BezPath::new();
    path.move_to((x, y - dir_y * size));
    path.line_to((x, y));
    path.line_to((x - dir_x * size, y));
    path
}

/// Draw the uppercased label centered on each edge, with the left and right
/// copies rotated ∓90°.
pub(crate) fn draw_text_labels(
    ctx: &mut vello_cpu::RenderContext,
    width: f64,
    height: f64,
    params: &EffectParams,
    engine: &mut TextLayoutEngine,
    font_bytes: &[u8],
) -> SliceframeResult<()> {
    if params.decor_text.trim().is_empty() || params.text_size <= 0.0 {
        return Ok(());
    }

    let text = params.decor_text.to_uppercase();
    let brush = TextBrushRgba8 {
        r: params.text_color.r,
        g: params.text_color.g,
        b: params.text_color.b,
        a: params.text_color.a,
    };
    let layout = engine.layout_plain(&text, font_bytes, params.text_size as f32, brush)?;
    let label_w = f64::from(layout.width());
    let label_h = f64::from(layout.height());

    let font = vello_cpu::peniko::FontData::new(
        vello_cpu::peniko::Blob::from(font_bytes.to_vec()),
        0,
    );

    let offset = params.border_offset + LABEL_EXTRA_INSET;
    let placements = [
        (width / 2.0, offset, 0.0),
        (width / 2.0, height - offset, 0.0),
        (offset, height / 2.0, -std::f64::consts::FRAC_PI_2),
        (width - offset, height / 2.0, std::f64::consts::FRAC_PI_2),
    ];

    for (cx, cy, rotation) in placements {
        let transform = Affine::translate((cx, cy))
            * Affine::rotate(rotation)
            * Affine::translate((-label_w / 2.0, -label_h / 2.0));
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(affine_to_cpu(transform));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
