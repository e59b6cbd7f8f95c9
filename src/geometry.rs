//! Vector primitives shared by every metric extractor.
//!
//! Angles are in degrees. Helpers named `*_2d` (and the tilt/lean/offset
//! helpers) work on the image plane only and ignore `z`.

use crate::landmarks::Point;

/// References shorter than this (in frame fractions) are treated as
/// degenerate when normalising.
pub const MIN_REFERENCE: f32 = 1e-6;

/// Interior angle at `b` between the rays `b→a` and `b→c`, using all three
/// axes. Returns 0.0 when either ray has zero length.
pub fn angle_between(a: Point, b: Point, c: Point) -> f32 {
    let u = (a.x - b.x, a.y - b.y, a.z - b.z);
    let v = (c.x - b.x, c.y - b.y, c.z - b.z);

    let mag =
        (u.0 * u.0 + u.1 * u.1 + u.2 * u.2).sqrt() * (v.0 * v.0 + v.1 * v.1 + v.2 * v.2).sqrt();
    if mag < MIN_REFERENCE * MIN_REFERENCE {
        return 0.0;
    }

    let cos = (u.0 * v.0 + u.1 * v.1 + u.2 * v.2) / mag;
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

pub fn distance_2d(a: Point, b: Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

pub fn distance_3d(a: Point, b: Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

#[inline]
pub fn signed_deviation(value: f32, reference: f32) -> f32 {
    value - reference
}

/// Unsigned angle between the segment `bottom → top` and straight up.
///
/// 0° is perfectly upright, 90° horizontal, 180° upside down.
pub fn lean_from_vertical(top: Point, bottom: Point) -> f32 {
    let dx = (top.x - bottom.x).abs();
    // Image y grows downward, so "up" is negative y.
    let up = bottom.y - top.y;
    if dx < MIN_REFERENCE && up.abs() < MIN_REFERENCE {
        return 0.0;
    }
    dx.atan2(up).to_degrees()
}

/// Unsigned angle of the segment `a–b` from the horizontal, in [0, 90].
pub fn tilt_from_horizontal(a: Point, b: Point) -> f32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    if dx < MIN_REFERENCE && dy < MIN_REFERENCE {
        return 0.0;
    }
    dy.atan2(dx).to_degrees()
}

/// Signed distance from `p` to the infinite line through `a` and `b`.
///
/// Positive when `p` lies to the left of `a → b` as drawn in image
/// coordinates. Returns 0.0 for a degenerate line.
pub fn perpendicular_offset(p: Point, a: Point, b: Point) -> f32 {
    let len = distance_2d(a, b);
    if len < MIN_REFERENCE {
        return 0.0;
    }
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let (px, py) = (p.x - a.x, p.y - a.y);
    (px * dy - py * dx) / len
}

/// Scalar projection of `p` onto the axis `a → b`, as a fraction of the axis
/// length (0.0 at `a`, 1.0 at `b`). `None` for a degenerate axis.
pub fn projection_ratio(p: Point, a: Point, b: Point) -> Option<f32> {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len2 = dx * dx + dy * dy;
    if len2 < MIN_REFERENCE * MIN_REFERENCE {
        return None;
    }
    Some(((p.x - a.x) * dx + (p.y - a.y) * dy) / len2)
}

/// `value` as a percentage of `reference`; `None` when the reference is
/// too small to normalise against.
#[inline]
pub fn percent_of(value: f32, reference: f32) -> Option<f32> {
    if reference.abs() < MIN_REFERENCE {
        None
    } else {
        Some(value / reference * 100.0)
    }
}
