//! # Curve Approximation Formulas
//!
//! Helpers used by the geometry synthesizer to turn bends into drawable
//! Bézier segments.

/// Divisor applied to a segment's length to cap the corner blend radius.
///
/// Each blend eats at most `len / 2.2` from either end of a segment, so two
/// blends sharing a segment leave a straight piece between them.
pub const CORNER_SEGMENT_DIVISOR: f64 = 2.2;

/// Handle length for a cubic Bézier approximating a circular arc
///
/// Both control points sit on the end tangents at this distance from their
/// endpoints.
///
/// # Formula
/// f = r · (4/3) · tan(a/4)
///
/// # Example
/// ```rust
/// use bend_core::equations::curve::arc_bezier_handle;
///
/// // Quarter circle of unit radius: the well-known 0.5523
/// let f = arc_bezier_handle(1.0, 90.0);
/// assert!((f - 0.55228).abs() < 1e-4);
/// ```
#[inline]
pub fn arc_bezier_handle(r: f64, a_deg: f64) -> f64 {
    r * (4.0 / 3.0) * (a_deg.to_radians() / 4.0).tan()
}

/// Radius of the blend placed at a polyline corner
///
/// # Formula
/// r = min(desired, len_prev / 2.2, len_next / 2.2)
#[inline]
pub fn corner_blend_radius(desired: f64, len_prev: f64, len_next: f64) -> f64 {
    desired
        .min(len_prev / CORNER_SEGMENT_DIVISOR)
        .min(len_next / CORNER_SEGMENT_DIVISOR)
}
