//! Corner rounding for polylines.
//!
//! Each interior vertex becomes a quadratic Bézier with the vertex as its
//! control point. The blend starts and ends `r` away from the vertex along
//! the two adjoining segments, where
//! `r = min(desired, len_prev / 2.2, len_next / 2.2)`. Two blends sharing a
//! segment therefore use at most `2 / 2.2` of it and never overlap.

use super::{ConduitStroke, Point2};
use crate::equations::curve::corner_blend_radius;

/// Smooth a polyline into alternating straight and curved segments.
///
/// Consecutive repeated points are merged first, so a doubled vertex still
/// gets its blend. Fewer than three distinct points have no corners and
/// come back as straight lines. An empty slice gives an empty stroke at
/// the origin.
pub fn round_corners(points: &[Point2], desired_radius: f64) -> ConduitStroke {
    let mut points = points.to_vec();
    points.dedup();

    let Some((&first, rest)) = points.split_first() else {
        return ConduitStroke::new(Point2::default());
    };
    let mut stroke = ConduitStroke::new(first);
    let Some((&last, _)) = rest.split_last() else {
        return stroke;
    };

    for window in points.windows(3) {
        let (prev, vertex, next) = (window[0], window[1], window[2]);
        let r = corner_blend_radius(desired_radius, prev.distance(vertex), vertex.distance(next));
        let entry = vertex - (vertex - prev).normalized() * r;
        let exit = vertex + (next - vertex).normalized() * r;
        stroke = stroke.line_to(entry).quad_to(vertex, exit);
    }

    stroke.line_to(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PathSegment;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_right_angle_corner() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(10.0, 0.0), Point2::new(10.0, 10.0)];
        let stroke = round_corners(&pts, 2.0);
        assert_eq!(stroke.segments.len(), 3);
        assert_eq!(stroke.segments[0], PathSegment::LineTo { to: Point2::new(8.0, 0.0) });
        assert_eq!(
            stroke.segments[1],
            PathSegment::QuadTo {
                ctrl: Point2::new(10.0, 0.0),
                to: Point2::new(10.0, 2.0)
            }
        );
        assert_eq!(stroke.end(), Point2::new(10.0, 10.0));
    }

    #[test]
    fn test_short_segment_caps_radius() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(2.2, 0.0), Point2::new(2.2, 50.0)];
        let stroke = round_corners(&pts, 5.0);
        let PathSegment::LineTo { to } = stroke.segments[0] else {
            panic!("expected a line before the blend");
        };
        assert!(approx_eq(to.x, 1.2), "entry x = {}", to.x);
    }

    #[test]
    fn test_two_points_stay_straight() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(5.0, 5.0)];
        let stroke = round_corners(&pts, 1.0);
        assert_eq!(stroke.segments, vec![PathSegment::LineTo { to: Point2::new(5.0, 5.0) }]);
        assert!(round_corners(&[], 1.0).segments.is_empty());
    }

    #[test]
    fn test_repeated_vertex_keeps_its_corner() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        ];
        let stroke = round_corners(&pts, 2.0);
        assert_eq!(stroke, round_corners(&[pts[0], pts[1], pts[3]], 2.0));
        assert_eq!(
            stroke.segments[1],
            PathSegment::QuadTo {
                ctrl: Point2::new(10.0, 0.0),
                to: Point2::new(10.0, 2.0)
            }
        );
    }

    #[test]
    fn test_all_points_equal() {
        let p = Point2::new(3.0, 4.0);
        let stroke = round_corners(&[p, p, p], 1.0);
        assert_eq!(stroke.start, p);
        assert!(stroke.segments.is_empty());
    }

    /// Is `p` on the segment `a → b`, and how far along it
    fn position_on_segment(p: Point2, a: Point2, b: Point2) -> Option<f64> {
        let len = a.distance(b);
        let t = a.distance(p);
        let off_line = (t + p.distance(b) - len).abs();
        (off_line < 1e-7).then_some(t)
    }

    proptest! {
        #[test]
        fn prop_blends_never_overlap(
            // A coarse grid so repeated and collinear points turn up often
            coords in prop::collection::vec((-6i32..6, -6i32..6), 3..10),
            desired in 0.1f64..20.0,
        ) {
            let pts: Vec<Point2> = coords.iter().map(|&(x, y)| Point2::new(x as f64, y as f64)).collect();
            let stroke = round_corners(&pts, desired);

            let mut distinct = pts.clone();
            distinct.dedup();
            let corners = distinct.len().saturating_sub(2);

            // Pair each blend with the straight piece that leads into it
            let mut blends = Vec::new();
            let mut cursor = stroke.start;
            for seg in &stroke.segments {
                match *seg {
                    PathSegment::LineTo { to } => cursor = to,
                    PathSegment::QuadTo { ctrl, to } => {
                        blends.push((cursor, ctrl, to));
                        cursor = to;
                    }
                    PathSegment::CubicTo { .. } => prop_assert!(false, "no cubics expected"),
                }
            }
            prop_assert_eq!(blends.len(), corners);

            // Straights and curves alternate
            for pair in stroke.segments.windows(2) {
                prop_assert!(!(pair[0].is_curve() && pair[1].is_curve()));
            }

            for (i, &(entry, ctrl, exit)) in blends.iter().enumerate() {
                let (prev, vertex, next) = (distinct[i], distinct[i + 1], distinct[i + 2]);
                prop_assert_eq!(ctrl, vertex);

                // Entry lies on the incoming segment, exit on the outgoing one
                prop_assert!(position_on_segment(entry, vertex, prev).is_some());
                prop_assert!(position_on_segment(exit, vertex, next).is_some());
                prop_assert!(entry.distance(vertex) <= desired + 1e-9);
                prop_assert!(exit.distance(vertex) <= desired + 1e-9);
            }

            // On a segment shared by two blends, the first blend's exit comes
            // strictly before the second blend's entry
            for pair in blends.windows(2) {
                let (_, a, exit) = pair[0];
                let (entry, b, _) = pair[1];
                let exit_at = position_on_segment(exit, a, b);
                let entry_at = position_on_segment(entry, a, b);
                prop_assert!(exit_at.is_some() && entry_at.is_some());
                if let (Some(exit_at), Some(entry_at)) = (exit_at, entry_at) {
                    prop_assert!(exit_at < entry_at, "exit {} not before entry {}", exit_at, entry_at);
                }
            }
        }
    }
}
