use anyhow::Context;

use crate::foundation::core::Bitmap;
use crate::foundation::error::SliceframeResult;

/// Decode encoded image bytes into a straight-alpha RGBA8 [`Bitmap`].
///
/// Accepts any format the `image` crate recognizes. This is a boundary
/// convenience for callers; the pipeline itself never performs decoding.
pub fn decode_image(bytes: &[u8]) -> SliceframeResult<Bitmap> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Bitmap {
        width,
        height,
        data: rgba.into_raw(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
