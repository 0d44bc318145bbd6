//! # Conduit Bend Formulas
//!
//! Closed-form trigonometry behind every bend a hand or floor bender makes.
//! All lengths are inches, all angles are degrees on the way in; the
//! conversion to radians happens here and nowhere else.
//!
//! ## Notation
//!
//! - `h` = Offset height (rise of the conduit centerline)
//! - `a` = Bend angle
//! - `r` = Centerline bend radius
//! - `s` = Spacing between parallel conduits
//!
//! ## Geometry
//!
//! ```text
//!                    ______________
//!                   /  ↑
//!          travel  /   h
//!                 / a  ↓
//!   _____________/_______
//!                ←─run─→
//! ```
//!
//! Every formula divides by `sin(a)` or `tan(a)`, so `a` must lie strictly
//! inside (0°, 180°). Callers validate first; these functions do not.

// =============================================================================
// OFFSET FORMULAS
// Two equal and opposite bends of angle a, shifting the run up by h
// =============================================================================

/// Horizontal distance covered while the conduit rises through an offset
///
/// # Formula
/// run = h / tan(a)
#[inline]
pub fn offset_run(h: f64, a_deg: f64) -> f64 {
    h / a_deg.to_radians().tan()
}

/// Distance between the two offset marks, measured along the conduit
///
/// # Formula
/// travel = h / sin(a)
///
/// # Example
/// ```rust
/// use bend_core::equations::bend::offset_travel;
///
/// // 10" offset with 30° bends: the classic "multiplier of 2"
/// let travel = offset_travel(10.0, 30.0);
/// assert!((travel - 20.0).abs() < 1e-9);
/// ```
#[inline]
pub fn offset_travel(h: f64, a_deg: f64) -> f64 {
    h / a_deg.to_radians().sin()
}

/// Offset multiplier: inches of travel per inch of offset height
///
/// # Formula
/// multiplier = 1 / sin(a)
#[inline]
pub fn offset_multiplier(a_deg: f64) -> f64 {
    1.0 / a_deg.to_radians().sin()
}

/// Shrinkage per inch of offset height
///
/// # Formula
/// k = (1 − cos(a)) / sin(a)   (≡ tan(a/2))
#[inline]
pub fn shrink_per_inch(a_deg: f64) -> f64 {
    let a = a_deg.to_radians();
    (1.0 - a.cos()) / a.sin()
}

/// Shrinkage of an offset: how much shorter the conduit reaches because
/// it travels diagonally through the rise.
///
/// Computed in the `(1 − cos a)/sin a` form, which stays finite at 90°.
/// Equal to [`offset_shrinkage_secant_form`] and
/// [`offset_shrinkage_half_angle_form`] everywhere in (0°, 180°).
///
/// # Formula
/// shrinkage = h · (1 − cos(a)) / sin(a)
///
/// # Example
/// ```rust
/// use bend_core::equations::bend::offset_shrinkage;
///
/// let shrink = offset_shrinkage(10.0, 30.0);
/// assert!((shrink - 2.679).abs() < 0.001);
/// ```
#[inline]
pub fn offset_shrinkage(h: f64, a_deg: f64) -> f64 {
    h * shrink_per_inch(a_deg)
}

/// Offset shrinkage, secant form
///
/// # Formula
/// shrinkage = h · (1/cos(a) − 1) / tan(a)
#[inline]
pub fn offset_shrinkage_secant_form(h: f64, a_deg: f64) -> f64 {
    let a = a_deg.to_radians();
    h * (1.0 / a.cos() - 1.0) / a.tan()
}

/// Offset shrinkage, half-angle form
///
/// # Formula
/// shrinkage = 2h · sin²(a/2) / sin(a)
#[inline]
pub fn offset_shrinkage_half_angle_form(h: f64, a_deg: f64) -> f64 {
    let a = a_deg.to_radians();
    2.0 * h * (a / 2.0).sin().powi(2) / a.sin()
}

// =============================================================================
// SADDLE FORMULAS
// =============================================================================

/// Distance from the center mark to each side mark of a 3-point saddle
///
/// `a` is the center bend angle; each side bend is `a/2`, so each leg
/// climbs at `a/2` from the run.
///
/// ```text
///                 a
///                /\
///               /  \  ↑
///              /    \ h
///   __________/      \__________
///            a/2     a/2
/// ```
///
/// # Formula
/// center_to_side = h / sin(a/2)
#[inline]
pub fn saddle3_center_to_side(h: f64, a_deg: f64) -> f64 {
    h / (a_deg.to_radians() / 2.0).sin()
}

/// Shrinkage of a 3-point saddle
///
/// # Formula
/// shrinkage = h · (1 − cos(a/2)) / sin(a/2)
#[inline]
pub fn saddle3_shrinkage(h: f64, a_deg: f64) -> f64 {
    let half = a_deg.to_radians() / 2.0;
    h * (1.0 - half.cos()) / half.sin()
}

/// Shrinkage of a 4-point saddle (two full offsets, up and back down)
///
/// # Formula
/// shrinkage = 2h · (1 − cos(a)) / sin(a)
#[inline]
pub fn saddle4_shrinkage(h: f64, a_deg: f64) -> f64 {
    2.0 * offset_shrinkage(h, a_deg)
}

// =============================================================================
// ROLLING OFFSET
// =============================================================================

/// True offset of a rolling offset: the diagonal of the rise/roll box
///
/// # Formula
/// true_offset = √(rise² + roll²)
#[inline]
pub fn rolling_true_offset(rise: f64, roll: f64) -> f64 {
    rise.hypot(roll)
}

// =============================================================================
// CONCENTRIC BENDS
// =============================================================================

/// Stagger between the bend marks of adjacent parallel conduits
///
/// # Formula
/// stagger = s · tan(a/2)
#[inline]
pub fn concentric_stagger(s: f64, a_deg: f64) -> f64 {
    s * (a_deg.to_radians() / 2.0).tan()
}

// =============================================================================
// ARC (SEGMENTED BEND) FORMULAS
// =============================================================================

/// Length of conduit consumed by a bend of radius r through angle a
///
/// # Formula
/// arc = π · r · a / 180
#[inline]
pub fn arc_length(r: f64, a_deg: f64) -> f64 {
    std::f64::consts::PI * r * a_deg / 180.0
}

/// Straight-line distance between the two ends of the arc
///
/// # Formula
/// chord = 2r · sin(a/2)
#[inline]
pub fn chord_length(r: f64, a_deg: f64) -> f64 {
    2.0 * r * (a_deg.to_radians() / 2.0).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 0.001
    }

    #[test]
    fn test_offset_30_degrees() {
        assert!(approx_eq(offset_travel(10.0, 30.0), 20.0));
        assert!(approx_eq(offset_run(10.0, 30.0), 17.3205));
        assert!(approx_eq(offset_shrinkage(10.0, 30.0), 2.6795));
    }

    #[test]
    fn test_offset_multipliers_match_field_values() {
        // The numbers printed on every bender's shoe
        assert!(approx_eq(offset_multiplier(10.0), 5.759));
        assert!(approx_eq(offset_multiplier(22.5), 2.613));
        assert!(approx_eq(offset_multiplier(30.0), 2.0));
        assert!(approx_eq(offset_multiplier(45.0), 1.414));
        assert!(approx_eq(offset_multiplier(60.0), 1.155));
    }

    #[test]
    fn test_shrinkage_forms_agree() {
        for a in [5.0, 10.0, 22.5, 30.0, 45.0, 60.0, 89.0, 120.0] {
            let base = offset_shrinkage(7.5, a);
            let secant = offset_shrinkage_secant_form(7.5, a);
            let half = offset_shrinkage_half_angle_form(7.5, a);
            assert!(((base - secant) / base).abs() < 1e-9, "a = {}: {} vs {}", a, base, secant);
            assert!(((base - half) / base).abs() < 1e-9, "a = {}: {} vs {}", a, base, half);
        }
    }

    #[test]
    fn test_saddle3_formulas() {
        // h = 20, center 45°: legs climb at 22.5°
        assert!(approx_eq(saddle3_center_to_side(20.0, 45.0), 52.263));
        assert!(approx_eq(saddle3_shrinkage(20.0, 45.0), 3.978));
    }

    #[test]
    fn test_saddle4_is_two_offsets() {
        let s4 = saddle4_shrinkage(6.0, 30.0);
        assert!(approx_eq(s4, 2.0 * offset_shrinkage(6.0, 30.0)));
    }

    #[test]
    fn test_rolling_true_offset() {
        assert!(approx_eq(rolling_true_offset(4.0, 3.0), 5.0));
    }

    #[test]
    fn test_concentric_stagger_90() {
        // tan(45°) = 1: stagger equals spacing on a 90° bend
        assert!(approx_eq(concentric_stagger(3.0, 90.0), 3.0));
    }

    #[test]
    fn test_arc_and_chord() {
        assert!(approx_eq(arc_length(24.0, 90.0), 37.699));
        assert!(approx_eq(chord_length(24.0, 90.0), 33.941));
    }
}
