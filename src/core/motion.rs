//! Values derived from pointer and scroll input: parallax tilt and the
//! scroll-linked heading transform. Only the numbers live here; how they are
//! animated is up to whatever displays them.

/// Maximum tilt, in degrees, for the full-window hero parallax.
pub const WINDOW_TILT_DEG: f64 = 6.0;
/// Maximum tilt, in degrees, for the product image parallax.
pub const ELEMENT_TILT_DEG: f64 = 8.0;
/// How far the journey heading drifts up over a full scroll pass, in pixels.
pub const HEADING_DRIFT_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingTransform {
    pub offset_y: f64,
    pub opacity: f64,
}

impl Default for HeadingTransform {
    fn default() -> Self {
        heading_transform(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse or trackpad.
    Fine,
    /// Touch or no pointer at all.
    Coarse,
}

fn tilt_from_percent(percent_x: f64, percent_y: f64, max_deg: f64) -> Tilt {
    Tilt {
        rotate_x: -percent_y * max_deg,
        rotate_y: percent_x * max_deg,
    }
}

/// Tilt for a pointer position relative to the whole viewport.
pub fn window_tilt(pointer: Point, viewport: Size, max_deg: f64) -> Tilt {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Tilt::default();
    }
    tilt_from_percent(
        pointer.x / viewport.width - 0.5,
        pointer.y / viewport.height - 0.5,
        max_deg,
    )
}

/// Tilt for a pointer position relative to one element's bounding box.
pub fn element_tilt(pointer: Point, rect: Rect, max_deg: f64) -> Tilt {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Tilt::default();
    }
    tilt_from_percent(
        (pointer.x - rect.left) / rect.width - 0.5,
        (pointer.y - rect.top) / rect.height - 0.5,
        max_deg,
    )
}

/// Heading offset and opacity for a scroll progress in `[0, 1]`.
/// Opacity ramps 0 -> 1 over the first half and back to 0 over the second.
pub fn heading_transform(progress: f64) -> HeadingTransform {
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let opacity = if progress <= 0.5 {
        progress / 0.5
    } else {
        (1.0 - progress) / 0.5
    };
    HeadingTransform {
        offset_y: -HEADING_DRIFT_PX * progress,
        opacity,
    }
}
