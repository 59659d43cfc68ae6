use crate::foundation::core::BezPath;

/// Which band corner receives the square notch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CutCorner {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl CutCorner {
    /// Map a uniform draw in `[0, 1)` onto one of the four corners.
    pub fn from_unit(u: f64) -> Self {
        match (u.clamp(0.0, 1.0) * 4.0) as u32 {
            0 => Self::TopLeft,
            1 => Self::TopRight,
            2 => Self::BottomLeft,
            _ => Self::BottomRight,
        }
    }
}

/// Octagon clip: the `width × height` rectangle with an isoceles right
/// triangle of leg `corner_size` cut from each corner.
///
/// Vertices run clockwise from `(corner_size, 0)`; the cut is clamped so it
/// never exceeds half the band's shorter side.
pub fn all_corners_path(width: f64, height: f64, corner_size: f64) -> BezPath {
    let c = clamp_cut(width, height, corner_size);

    let mut path = BezPath::new();
    path.move_to((c, 0.0));
    path.line_to((width - c, 0.0));
    path.line_to((width, c));
    path.line_to((width, height - c));
    path.line_to((width - c, height));
    path.line_to((c, height));
    path.line_to((0.0, height - c));
    path.line_to((0.0, c));
    path.close_path();
    path
}

/// Notch clip: the full `width × height` rectangle minus one square of side
/// `corner_size` at `corner`.
///
/// The cut is clamped so it never exceeds half the band's shorter side. The
/// outline is a seven-vertex polygon (the last vertex revisits the first
/// before closing).
pub fn single_corner_path(width: f64, height: f64, corner_size: f64, corner: CutCorner) -> BezPath {
    let c = clamp_cut(width, height, corner_size);

    let mut path = BezPath::new();
    match corner {
        CutCorner::TopLeft => {
            path.move_to((c, 0.0));
            path.line_to((width, 0.0));
            path.line_to((width, height));
            path.line_to((0.0, height));
            path.line_to((0.0, c));
            path.line_to((c, c));
            path.line_to((c, 0.0));
        }
        CutCorner::TopRight => {
            path.move_to((0.0, 0.0));
            path.line_to((width - c, 0.0));
            path.line_to((width - c, c));
            path.line_to((width, c));
            path.line_to((width, height));
            path.line_to((0.0, height));
            path.line_to((0.0, 0.0));
        }
        CutCorner::BottomLeft => {
            path.move_to((0.0, 0.0));
            path.line_to((width, 0.0));
            path.line_to((width, height));
            path.line_to((c, height));
            path.line_to((c, height - c));
            path.line_to((0.0, height - c));
            path.line_to((0.0, 0.0));
        }
        CutCorner::BottomRight => {
            path.move_to((0.0, 0.0));
            path.line_to((width, 0.0));
            path.line_to((width, height - c));
            path.line_to((width - c, height - c));
            path.line_to((width - c, height));
            path.line_to((0.0, height));
            path.line_to((0.0, 0.0));
        }
    }
    path.close_path();
    path
}

fn clamp_cut(width: f64, height: f64, corner_size: f64) -> f64 {
    corner_size.clamp(0.0, width.min(height) / 2.0)
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/corner.rs"]
mod tests;
