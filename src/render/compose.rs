use std::sync::Arc;

use crate::foundation::core::Bitmap;
use crate::foundation::error::SliceframeResult;
use crate::params::model::EffectParams;
use crate::random::source::RandomSource;
use crate::render::{frame, slices, surface};
use crate::text::layout::TextLayoutEngine;

/// The pipeline compositor.
///
/// Owns the reusable rasterizer context and text engine so repeated renders
/// do not reallocate them. Each call to [`EffectRenderer::render`] runs to
/// completion and is independent: no state other than the caller's random
/// source carries over between invocations.
pub struct EffectRenderer {
    text_engine: TextLayoutEngine,
    label_font: Option<Arc<Vec<u8>>>,
    ctx: Option<vello_cpu::RenderContext>,
}

impl Default for EffectRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectRenderer {
    /// Construct a compositor without a label font; edge labels are
    /// skipped until one is configured.
    pub fn new() -> Self {
        Self {
            text_engine: TextLayoutEngine::new(),
            label_font: None,
            ctx: None,
        }
    }

    /// Construct a compositor that shapes edge labels with the given font.
    pub fn with_label_font(font_bytes: Vec<u8>) -> Self {
        Self {
            text_engine: TextLayoutEngine::new(),
            label_font: Some(Arc::new(font_bytes)),
            ctx: None,
        }
    }

    /// Run the full pipeline: background, band stack, borders, decorations.
    ///
    /// The output bitmap matches the source dimensions. Out-of-range
    /// parameters are clamped; a zero-area source yields an equally empty
    /// output instead of failing. With a replayable random source the
    /// result is byte-identical across runs.
    #[tracing::instrument(skip_all, fields(width = source.width, height = source.height))]
    pub fn render(
        &mut self,
        source: &Bitmap,
        params: &EffectParams,
        rng: &mut dyn RandomSource,
    ) -> SliceframeResult<Bitmap> {
        let params = params.clamped();

        if source.is_empty() {
            return Ok(Bitmap::new(source.width, source.height));
        }
        let (width_u16, height_u16) = surface::surface_dims(source.width, source.height)?;

        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width_u16, height_u16),
            Some(ctx) if ctx.width() == width_u16 && ctx.height() == height_u16 => ctx,
            Some(_) => vello_cpu::RenderContext::new(width_u16, height_u16),
        };
        ctx.reset();

        let drawn = self.draw_all(&mut ctx, source, &params, rng);
        let out = drawn.map(|()| {
            let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            surface::readback_bitmap(&pixmap)
        });

        self.ctx = Some(ctx);
        out
    }

    fn draw_all(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        source: &Bitmap,
        params: &EffectParams,
        rng: &mut dyn RandomSource,
    ) -> SliceframeResult<()> {
        let width = f64::from(source.width);
        let height = f64::from(source.height);

        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(surface::color_to_cpu(params.background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, width, height));

        slices::draw_band_stack(ctx, source, params, rng)?;

        if params.border_enabled {
            frame::draw_borders(ctx, width, height, params, rng);
        }

        frame::draw_corner_marks(ctx, width, height, params);
        if let Some(font) = self.label_font.clone() {
            frame::draw_text_labels(ctx, width, height, params, &mut self.text_engine, &font)?;
        }

        Ok(())
    }
}

/// One-shot convenience over [`EffectRenderer`] without edge labels.
pub fn apply_effects(
    source: &Bitmap,
    params: &EffectParams,
    rng: &mut dyn RandomSource,
) -> SliceframeResult<Bitmap> {
    EffectRenderer::new().render(source, params, rng)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
