//! Sliceframe is a deterministic sliced-image effect pipeline.
//!
//! Given a decoded source bitmap, an immutable parameter set and a random
//! source, the pipeline slices the image into randomized horizontal bands,
//! applies per-band pixel transforms (grayscale blend, contrast and
//! brightness), optionally clips each band with a corner-cut polygon, and
//! composites the bands with independent tilt and randomized spacing before
//! overlaying border strokes, corner tick marks and rotated edge labels.
//!
//! # Pipeline overview
//!
//! 1. **Partition**: [`generate_slices`] splits the source height into
//!    randomized bands.
//! 2. **Transform**: each band is extracted into a private buffer and run
//!    through [`apply_grayscale`] and [`apply_contrast_brightness`].
//! 3. **Composite**: [`EffectRenderer::render`] places every band with its
//!    own tilt, gap and optional corner-cut clip, then draws the frame.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: all randomness flows through an explicit
//!   [`RandomSource`]; a [`SeededSource`] replays a render byte-for-byte.
//! - **No IO in the pipeline**: decoding is a boundary helper
//!   ([`decode_image`]); the pipeline consumes and produces [`Bitmap`]
//!   values and never touches files or encodings.
//! - **Straight alpha at the boundary**: premultiplication only happens
//!   internally while rasterizing.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod effects;
mod foundation;
mod params;
mod random;
mod render;
mod shapes;
mod slicing;
mod text;

pub use assets::decode::decode_image;
pub use effects::pixel::{apply_contrast_brightness, apply_grayscale};
pub use foundation::core::{Affine, BezPath, Bitmap, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{SliceframeError, SliceframeResult};
pub use params::model::{CornerStyle, EffectParams};
pub use random::source::{EntropySource, RandomSource, SeededSource};
pub use render::compose::{EffectRenderer, apply_effects};
pub use shapes::corner::{CutCorner, all_corners_path, single_corner_path};
pub use slicing::generator::{MIN_BAND_HEIGHT, Slice, generate_slices};
pub use slicing::jitter::{
    randomized_corner_size, randomized_gap, randomized_tilt_rad, randomized_width,
    should_have_corner,
};
pub use text::layout::{TextBrushRgba8, TextLayoutEngine};
