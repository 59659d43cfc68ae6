use crate::foundation::core::Rgba8;
use crate::foundation::error::{SliceframeError, SliceframeResult};

/// Clip style applied to eligible bands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CornerStyle {
    /// Cut an isoceles right triangle from all four band corners.
    #[default]
    AllCorners,
    /// Cut one square notch from a randomly chosen band corner.
    SingleRightAngle,
}

/// The immutable parameter set for one render.
///
/// A parameter set is pure data: build one programmatically, or deserialize
/// a (possibly partial) JSON preset — every missing field falls back to the
/// baseline preset, which matches [`EffectParams::default`]. Out-of-range
/// values are clamped at render time, never rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EffectParams {
    /// Grayscale blend intensity in `[0, 1]`; 1 is full desaturation.
    pub grayscale: f64,
    /// Contrast in `[-1, 1]`; 0 is identity.
    pub contrast: f64,
    /// Brightness in `[-1, 1]`; 0 is identity.
    pub brightness: f64,
    /// Scale applied to the band stack about the image center; the frame
    /// (borders, decorations) is never scaled.
    pub scale: f64,
    /// Background fill color.
    pub background: Rgba8,

    /// Maximum number of bands to produce.
    pub slice_count: u32,
    /// Lower bound of the randomized band height in pixels.
    pub slice_min_height: f64,
    /// Upper bound of the randomized band height in pixels.
    pub slice_max_height: f64,
    /// Band-height randomization factor in `[0, 1]`.
    pub slice_height_random: f64,
    /// Lower bound of the randomized band width in pixels.
    pub slice_min_width: f64,
    /// Upper bound of the randomized band width in pixels.
    pub slice_max_width: f64,
    /// Band-width randomization factor in `[0, 1]`.
    pub slice_width_random: f64,
    /// Vertical gap between consecutive bands in pixels.
    pub slice_gap: f64,
    /// Gap randomization factor in `[0, 1]`.
    pub slice_gap_random: f64,
    /// Base per-band rotation in degrees.
    pub tilt_angle_deg: f64,
    /// Tilt randomization factor in `[0, 1]`; jitter amplitude scales up
    /// to ±10 degrees at 1.
    pub tilt_angle_random: f64,

    /// Every Nth band is eligible for a corner cut.
    pub corner_frequency: u32,
    /// Eligibility jitter factor in `[0, 1]`; can both suppress expected
    /// cuts and inject unexpected ones.
    pub corner_frequency_random: f64,
    /// Corner cut size in pixels.
    pub corner_size: f64,
    /// Corner-size randomization factor in `[0, 1]`.
    pub corner_size_random: f64,
    /// Clip style for eligible bands.
    pub corner_style: CornerStyle,

    /// Whether the inset border strokes are drawn at all.
    pub border_enabled: bool,
    /// Border stroke color.
    pub border_color: Rgba8,
    /// Border stroke width in pixels.
    pub border_width: f64,
    /// Border-width randomization factor in `[0, 1]`.
    pub border_width_random: f64,
    /// Fraction of each edge covered by its border stroke, in `[0, 1]`.
    pub border_length: f64,
    /// Border-length randomization factor in `[0, 1]`.
    pub border_length_random: f64,
    /// Inset of the border rectangle from each canvas edge in pixels.
    pub border_offset: f64,

    /// Label text drawn on each edge (uppercased); blank disables labels.
    pub decor_text: String,
    /// Label font size in pixels.
    pub text_size: f64,
    /// Label color.
    pub text_color: Rgba8,
    /// Corner tick-mark stroke width in pixels.
    pub line_width: f64,
    /// Corner tick-mark color.
    pub line_color: Rgba8,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            grayscale: 0.0,
            contrast: 0.0,
            brightness: 0.0,
            scale: 1.0,
            background: Rgba8::rgb(255, 255, 255),
            slice_count: 12,
            slice_min_height: 20.0,
            slice_max_height: 80.0,
            slice_height_random: 0.5,
            slice_min_width: 500.0,
            slice_max_width: 2000.0,
            slice_width_random: 0.3,
            slice_gap: 8.0,
            slice_gap_random: 0.5,
            tilt_angle_deg: 3.0,
            tilt_angle_random: 0.3,
            corner_frequency: 3,
            corner_frequency_random: 0.4,
            corner_size: 25.0,
            corner_size_random: 0.5,
            corner_style: CornerStyle::AllCorners,
            border_enabled: true,
            border_color: Rgba8::rgb(0, 0, 0),
            border_width: 3.0,
            border_width_random: 0.0,
            border_length: 0.5,
            border_length_random: 0.0,
            border_offset: 10.0,
            decor_text: "IMAGE EFFECT".to_string(),
            text_size: 20.0,
            text_color: Rgba8::rgb(0x33, 0x33, 0x33),
            line_width: 2.0,
            line_color: Rgba8::rgb(0x66, 0x66, 0x66),
        }
    }
}

impl EffectParams {
    /// Deserialize a JSON preset; missing fields fall back to the baseline.
    pub fn from_json_str(json: &str) -> SliceframeResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SliceframeError::serde(format!("invalid preset: {e}")))
    }

    /// Return a copy with every field clamped to its documented range.
    ///
    /// Applied once at render entry, so out-of-range presets degrade to the
    /// nearest valid behavior instead of failing.
    pub fn clamped(&self) -> Self {
        let mut p = self.clone();

        p.grayscale = unit(p.grayscale);
        p.contrast = signed_unit(p.contrast);
        p.brightness = signed_unit(p.brightness);
        p.scale = if p.scale.is_finite() {
            p.scale.max(0.01)
        } else {
            1.0
        };

        p.slice_min_height = finite_min(p.slice_min_height, 1.0, 20.0);
        p.slice_max_height = finite_min(p.slice_max_height, 1.0, 80.0);
        if p.slice_max_height < p.slice_min_height {
            std::mem::swap(&mut p.slice_min_height, &mut p.slice_max_height);
        }
        p.slice_height_random = unit(p.slice_height_random);

        p.slice_min_width = finite_min(p.slice_min_width, 1.0, 500.0);
        p.slice_max_width = finite_min(p.slice_max_width, 1.0, 2000.0);
        if p.slice_max_width < p.slice_min_width {
            std::mem::swap(&mut p.slice_min_width, &mut p.slice_max_width);
        }
        p.slice_width_random = unit(p.slice_width_random);

        p.slice_gap = finite_min(p.slice_gap, 0.0, 8.0);
        p.slice_gap_random = unit(p.slice_gap_random);

        p.tilt_angle_deg = if p.tilt_angle_deg.is_finite() {
            p.tilt_angle_deg
        } else {
            0.0
        };
        p.tilt_angle_random = unit(p.tilt_angle_random);

        p.corner_frequency = p.corner_frequency.max(1);
        p.corner_frequency_random = unit(p.corner_frequency_random);
        p.corner_size = finite_min(p.corner_size, 0.0, 25.0);
        p.corner_size_random = unit(p.corner_size_random);

        p.border_width = finite_min(p.border_width, 1.0, 3.0);
        p.border_width_random = unit(p.border_width_random);
        p.border_length = unit(p.border_length);
        p.border_length_random = unit(p.border_length_random);
        p.border_offset = finite_min(p.border_offset, 0.0, 10.0);

        p.text_size = finite_min(p.text_size, 0.0, 20.0);
        p.line_width = finite_min(p.line_width, 0.0, 2.0);

        p
    }
}

fn unit(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

fn signed_unit(v: f64) -> f64 {
    if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 }
}

fn finite_min(v: f64, min: f64, fallback: f64) -> f64 {
    if v.is_finite() { v.max(min) } else { fallback }
}

#[cfg(test)]
#[path = "../../tests/unit/params/model.rs"]
mod tests;
