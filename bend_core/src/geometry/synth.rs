//! Drawing synthesis: bend parameters in, [`GeometryPath`] out.
//!
//! Every drawing is derived from the same [`compute_bend`] numbers the
//! calculator reports, so the picture always agrees with the measurements.
//! Straight lead-in and lead-out pieces are `lead_ratio` times the bend's
//! characteristic length.

use super::{
    round_corners, ConduitStroke, DimensionLine, GeometryPath, ObstacleRect, Point2, ShotMark,
    Viewport,
};
use crate::calculations::bend::{compute_bend, BendResult, BendSpec, RollingOffsetResult};
use crate::equations::bend::arc_length;
use crate::equations::curve::arc_bezier_handle;
use crate::errors::{CalcError, CalcResult};
use crate::settings::GeometrySettings;

/// Build the drawing for a bend.
///
/// # Returns
///
/// * `Ok(GeometryPath)` - Drawing data with a fitted viewport
/// * `Err(CalcError)` - Whatever [`compute_bend`] rejects
pub fn synthesize(spec: &BendSpec, settings: &GeometrySettings) -> CalcResult<GeometryPath> {
    let result = compute_bend(spec)?;

    let mut path = match (*spec, &result) {
        (BendSpec::Offset { height_in, .. }, BendResult::Offset(r)) => {
            offset_drawing(height_in, r.run_in, r.travel_in, settings)
        }
        (BendSpec::Saddle3 { height_in, .. }, BendResult::Saddle3(r)) => {
            saddle3_drawing(height_in, r.side_angle_deg, r.center_to_side_in, settings)
        }
        (BendSpec::Saddle4 { height_in, width_in, .. }, BendResult::Saddle4(r)) => {
            saddle4_drawing(height_in, width_in, r.run_in, r.travel_in, settings)
        }
        (BendSpec::RollingOffset { rise_in, roll_in, .. }, BendResult::RollingOffset(r)) => {
            rolling_offset_drawing(rise_in, roll_in, r, settings)
        }
        (BendSpec::Concentric { spacing_in, angle_deg, pipe_count }, BendResult::Concentric(r)) => {
            concentric_drawing(spacing_in, angle_deg, pipe_count, r.stagger_in, settings)
        }
        (BendSpec::Segmented { radius_in, angle_deg, shot_count }, BendResult::Segmented(r)) => {
            segmented_drawing(radius_in, angle_deg, shot_count, r.chord_length_in, settings)
        }
        _ => {
            return Err(CalcError::invalid_input(
                "kind",
                spec.kind().to_string(),
                "Bend result does not match its spec",
            ))
        }
    };

    path.viewport = Viewport::fit(path.all_points(), settings.viewport_padding_in);
    tracing::debug!(
        kind = ?spec.kind(),
        strokes = path.strokes.len(),
        width = path.viewport.width,
        height = path.viewport.height,
        "geometry synthesized"
    );
    Ok(path)
}

fn empty_path(centerline: Vec<Point2>, strokes: Vec<ConduitStroke>) -> GeometryPath {
    GeometryPath {
        centerline,
        strokes,
        obstacles: Vec::new(),
        dimensions: Vec::new(),
        shot_marks: Vec::new(),
        viewport: Viewport::fit(std::iter::empty(), 0.0),
    }
}

/// Distance dimension lines sit away from the conduit
fn dimension_offset(points: &[Point2], settings: &GeometrySettings) -> f64 {
    let vp = Viewport::fit(points.iter().copied(), 0.0);
    vp.width.max(vp.height) * settings.dimension_offset_ratio
}

/// Dimension along `from → to`, pushed `offset` to the right of travel
fn offset_dimension(from: Point2, to: Point2, offset: f64, name: &str, value: f64) -> DimensionLine {
    let dir = (to - from).normalized();
    let right = Point2::new(dir.y, -dir.x) * offset;
    DimensionLine::new(from + right, to + right, name, value)
}

/// Flat, rise, flat: the shape shared by offsets and rolling offsets
fn rise_polyline(height: f64, run: f64, lead: f64) -> Vec<Point2> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(lead, 0.0),
        Point2::new(lead + run, height),
        Point2::new(2.0 * lead + run, height),
    ]
}

fn offset_drawing(
    height: f64,
    run: f64,
    travel: f64,
    settings: &GeometrySettings,
) -> GeometryPath {
    let lead = settings.lead_ratio * travel;
    let pts = rise_polyline(height, run, lead);
    let d = dimension_offset(&pts, settings);
    let end = pts[3];

    let mut path = empty_path(pts.clone(), vec![round_corners(&pts, settings.corner_radius_in)]);
    path.obstacles.push(ObstacleRect {
        x: pts[2].x + 0.1 * lead,
        y: 0.0,
        width: 0.8 * lead,
        height: 0.8 * height,
    });
    path.dimensions.push(DimensionLine::new(
        Point2::new(end.x + d, 0.0),
        Point2::new(end.x + d, height),
        "H",
        height,
    ));
    path.dimensions.push(offset_dimension(pts[1], pts[2], d, "Travel", travel));
    path
}

fn saddle3_drawing(
    height: f64,
    side_angle_deg: f64,
    center_to_side: f64,
    settings: &GeometrySettings,
) -> GeometryPath {
    let dx = height / side_angle_deg.to_radians().tan();
    let lead = settings.lead_ratio * 2.0 * center_to_side;
    let pts = vec![
        Point2::new(0.0, 0.0),
        Point2::new(lead, 0.0),
        Point2::new(lead + dx, height),
        Point2::new(lead + 2.0 * dx, 0.0),
        Point2::new(2.0 * lead + 2.0 * dx, 0.0),
    ];
    let d = dimension_offset(&pts, settings);
    let peak = pts[2];
    let end = pts[4];

    let mut path = empty_path(pts.clone(), vec![round_corners(&pts, settings.corner_radius_in)]);
    // Top corners stay below the side legs, which are at 0.75 h there
    path.obstacles.push(ObstacleRect {
        x: peak.x - dx / 4.0,
        y: 0.0,
        width: dx / 2.0,
        height: 0.7 * height,
    });
    path.dimensions.push(DimensionLine::new(
        Point2::new(end.x + d, 0.0),
        Point2::new(end.x + d, height),
        "H",
        height,
    ));
    // Left of the rising leg is above it
    path.dimensions.push(offset_dimension(pts[1], peak, -d, "C-S", center_to_side));
    path
}

fn saddle4_drawing(
    height: f64,
    width: f64,
    run: f64,
    travel: f64,
    settings: &GeometrySettings,
) -> GeometryPath {
    let lead = settings.lead_ratio * travel;
    let pts = vec![
        Point2::new(0.0, 0.0),
        Point2::new(lead, 0.0),
        Point2::new(lead + run, height),
        Point2::new(lead + run + width, height),
        Point2::new(lead + 2.0 * run + width, 0.0),
        Point2::new(2.0 * lead + 2.0 * run + width, 0.0),
    ];
    let d = dimension_offset(&pts, settings);
    let end = pts[5];

    let mut path = empty_path(pts.clone(), vec![round_corners(&pts, settings.corner_radius_in)]);
    path.obstacles.push(ObstacleRect {
        x: pts[2].x,
        y: 0.0,
        width,
        height,
    });
    path.dimensions.push(DimensionLine::new(
        Point2::new(end.x + d, 0.0),
        Point2::new(end.x + d, height),
        "H",
        height,
    ));
    path.dimensions.push(offset_dimension(pts[1], pts[2], d, "Travel", travel));
    path.dimensions.push(DimensionLine::new(
        Point2::new(pts[2].x, height + d),
        Point2::new(pts[3].x, height + d),
        "W",
        width,
    ));
    path
}

fn rolling_offset_drawing(
    rise: f64,
    roll: f64,
    r: &RollingOffsetResult,
    settings: &GeometrySettings,
) -> GeometryPath {
    let lead = settings.lead_ratio * r.travel_in;
    let pts = rise_polyline(r.true_offset_in, r.run_in, lead);
    let d = dimension_offset(&pts, settings);

    let mut path = empty_path(pts.clone(), vec![round_corners(&pts, settings.corner_radius_in)]);
    path.dimensions.push(offset_dimension(pts[1], pts[2], d, "Travel", r.travel_in));

    // Rise/roll box seen end-on, set off to the right of the conduit
    let origin = Point2::new(pts[3].x + 2.0 * d, 0.0);
    let roll_end = origin + Point2::new(roll, 0.0);
    let rise_end = roll_end + Point2::new(0.0, rise);
    path.dimensions.push(DimensionLine::new(origin, roll_end, "Roll", roll));
    path.dimensions.push(DimensionLine::new(roll_end, rise_end, "Rise", rise));
    path.dimensions.push(DimensionLine::new(origin, rise_end, "True", r.true_offset_in));
    path
}

fn concentric_drawing(
    spacing: f64,
    angle_deg: f64,
    pipe_count: u32,
    stagger: f64,
    settings: &GeometrySettings,
) -> GeometryPath {
    let radius = settings.bend_radius_in;
    let lead = settings.lead_ratio * arc_length(radius, angle_deg);
    let handle = arc_bezier_handle(radius, angle_deg);
    let exit_dir = Point2::from_angle_deg(angle_deg);
    let (sin, cos) = angle_deg.to_radians().sin_cos();

    let mut centerline = Vec::new();
    let strokes: Vec<ConduitStroke> = (0..pipe_count)
        .map(|i| {
            let y = -(i as f64) * spacing;
            let bend_start = Point2::new(lead + i as f64 * stagger, y);
            let bend_end = bend_start + Point2::new(radius * sin, radius * (1.0 - cos));
            let exit = bend_end + exit_dir * lead;

            if i == 0 {
                centerline = vec![Point2::new(0.0, y), bend_start, bend_end, exit];
            }

            ConduitStroke::new(Point2::new(0.0, y))
                .line_to(bend_start)
                .cubic_to(
                    bend_start + Point2::new(handle, 0.0),
                    bend_end - exit_dir * handle,
                    bend_end,
                )
                .line_to(exit)
        })
        .collect();

    let mut path = empty_path(centerline, strokes);
    let d = dimension_offset(&path.all_points(), settings);
    let bottom = -((pipe_count - 1) as f64) * spacing;

    path.dimensions.push(DimensionLine::new(
        Point2::new(-d, 0.0),
        Point2::new(-d, -spacing),
        "Spacing",
        spacing,
    ));
    path.dimensions.push(DimensionLine::new(
        Point2::new(lead, bottom - d),
        Point2::new(lead + stagger, bottom - d),
        "Stagger",
        stagger,
    ));
    path
}

fn segmented_drawing(
    radius: f64,
    angle_deg: f64,
    shot_count: u32,
    chord: f64,
    settings: &GeometrySettings,
) -> GeometryPath {
    let lead = settings.lead_ratio * arc_length(radius, angle_deg);
    let start = Point2::new(lead, 0.0);
    let center = Point2::new(lead, radius);
    let step = angle_deg / shot_count as f64;
    let handle = arc_bezier_handle(radius, step);

    let shot_marks: Vec<ShotMark> = (0..=shot_count)
        .map(|k| {
            let phi = k as f64 * step;
            let (sin, cos) = phi.to_radians().sin_cos();
            ShotMark {
                position: start + Point2::new(radius * sin, radius * (1.0 - cos)),
                tangent_deg: phi,
            }
        })
        .collect();

    let arc_end = shot_marks.last().map_or(start, |m| m.position);
    let exit = arc_end + Point2::from_angle_deg(angle_deg) * lead;

    let mut stroke = ConduitStroke::new(Point2::new(0.0, 0.0)).line_to(start);
    for pair in shot_marks.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        stroke = stroke.cubic_to(
            a.position + Point2::from_angle_deg(a.tangent_deg) * handle,
            b.position - Point2::from_angle_deg(b.tangent_deg) * handle,
            b.position,
        );
    }
    stroke = stroke.line_to(exit);

    let mut centerline = vec![Point2::new(0.0, 0.0)];
    centerline.extend(shot_marks.iter().map(|m| m.position));
    centerline.push(exit);

    let mut path = empty_path(centerline, vec![stroke]);
    let d = dimension_offset(&path.all_points(), settings);
    path.dimensions.push(DimensionLine::new(center, start, "R", radius));
    path.dimensions.push(offset_dimension(start, arc_end, d, "Chord", chord));
    path.shot_marks = shot_marks;
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PathSegment;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn settings() -> GeometrySettings {
        GeometrySettings::default()
    }

    fn assert_viewport_covers(path: &GeometryPath) {
        for p in path.all_points() {
            assert!(path.viewport.contains(p), "{:?} outside {:?}", p, path.viewport);
        }
    }

    #[test]
    fn test_offset_centerline_matches_measurements() {
        let spec = BendSpec::Offset { height_in: 10.0, angle_deg: 30.0 };
        let path = synthesize(&spec, &settings()).unwrap();
        let c = &path.centerline;
        assert_eq!(c.len(), 4);
        assert!(approx_eq(c[1].distance(c[2]), 20.0, 1e-9), "travel drawn = {}", c[1].distance(c[2]));
        assert!(approx_eq(c[2].x - c[1].x, 17.3205, 1e-3));
        assert!(approx_eq(c[3].y, 10.0, 1e-12));
        assert_eq!(path.obstacles.len(), 1);

        let travel = path.dimensions.iter().find(|d| d.label.starts_with("Travel")).unwrap();
        assert!(approx_eq(travel.length(), 20.0, 1e-9));
        assert_eq!(travel.label, "Travel 20.00\"");
        assert_viewport_covers(&path);
    }

    #[test]
    fn test_offset_obstacle_sits_under_raised_run() {
        let spec = BendSpec::Offset { height_in: 8.0, angle_deg: 45.0 };
        let path = synthesize(&spec, &settings()).unwrap();
        let rect = path.obstacles[0];
        assert!(rect.x >= path.centerline[2].x);
        assert!(rect.x + rect.width <= path.centerline[3].x);
        assert!(rect.y + rect.height < 8.0);
    }

    #[test]
    fn test_saddle3_peak_and_obstacle_clearance() {
        let spec = BendSpec::Saddle3 { height_in: 6.0, angle_deg: 45.0 };
        let path = synthesize(&spec, &settings()).unwrap();
        let c = &path.centerline;
        assert_eq!(c.len(), 5);
        assert!(approx_eq(c[2].y, 6.0, 1e-12));
        // Each leg is center-to-side long
        let cs = 6.0 / 22.5_f64.to_radians().sin();
        assert!(approx_eq(c[1].distance(c[2]), cs, 1e-9));
        assert!(approx_eq(c[2].distance(c[3]), cs, 1e-9));

        let rect = path.obstacles[0];
        assert!(approx_eq(rect.x + rect.width / 2.0, c[2].x, 1e-9));
        // Legs are at 0.75 h above the obstacle's top corners
        assert!(rect.height < 0.75 * 6.0);
        assert_viewport_covers(&path);
    }

    #[test]
    fn test_saddle4_width_and_obstacle() {
        let spec = BendSpec::Saddle4 { height_in: 6.0, width_in: 12.0, angle_deg: 30.0 };
        let path = synthesize(&spec, &settings()).unwrap();
        let c = &path.centerline;
        assert_eq!(c.len(), 6);
        assert!(approx_eq(c[3].x - c[2].x, 12.0, 1e-9));
        let rect = path.obstacles[0];
        assert_eq!(rect.width, 12.0);
        assert_eq!(rect.height, 6.0);
        assert!(path.dimensions.iter().any(|d| d.label == "W 12.00\""));
        assert_viewport_covers(&path);
    }

    #[test]
    fn test_rounded_stroke_alternates() {
        let spec = BendSpec::Saddle4 { height_in: 6.0, width_in: 12.0, angle_deg: 30.0 };
        let path = synthesize(&spec, &settings()).unwrap();
        let segs = &path.strokes[0].segments;
        // Four corners: line, quad per corner, then the final line
        assert_eq!(segs.len(), 9);
        for (i, seg) in segs.iter().enumerate() {
            assert_eq!(seg.is_curve(), i % 2 == 1, "segment {} out of order", i);
        }
    }

    #[test]
    fn test_rolling_offset_triangle() {
        let spec = BendSpec::RollingOffset { rise_in: 4.0, roll_in: 3.0, angle_deg: 30.0 };
        let path = synthesize(&spec, &settings()).unwrap();
        assert!(path.obstacles.is_empty());
        let true_offset = path.dimensions.iter().find(|d| d.label.starts_with("True")).unwrap();
        assert!(approx_eq(true_offset.length(), 5.0, 1e-9));
        assert!(approx_eq(path.centerline[2].y, 5.0, 1e-9));
        assert_viewport_covers(&path);
    }

    #[test]
    fn test_concentric_pipes_stack_and_stagger() {
        let spec = BendSpec::Concentric { spacing_in: 2.0, angle_deg: 90.0, pipe_count: 3 };
        let path = synthesize(&spec, &settings()).unwrap();
        assert_eq!(path.strokes.len(), 3);

        let stagger = 2.0 * 45.0_f64.to_radians().tan();
        let first_bend_x = match path.strokes[0].segments[0] {
            PathSegment::LineTo { to } => to.x,
            _ => panic!("expected lead-in line"),
        };
        for (i, stroke) in path.strokes.iter().enumerate() {
            assert!(approx_eq(stroke.start.y, -2.0 * i as f64, 1e-12));
            let PathSegment::LineTo { to } = stroke.segments[0] else {
                panic!("expected lead-in line");
            };
            assert!(approx_eq(to.x - first_bend_x, i as f64 * stagger, 1e-9));
            assert!(matches!(stroke.segments[1], PathSegment::CubicTo { .. }));
        }
        assert_viewport_covers(&path);
    }

    #[test]
    fn test_concentric_cubic_handle() {
        let spec = BendSpec::Concentric { spacing_in: 1.0, angle_deg: 90.0, pipe_count: 2 };
        let s = settings();
        let path = synthesize(&spec, &s).unwrap();
        let PathSegment::CubicTo { ctrl1, .. } = path.strokes[0].segments[1] else {
            panic!("expected arc");
        };
        let start = path.strokes[0].segments[0].end();
        let expected = s.bend_radius_in * 4.0 / 3.0 * 22.5_f64.to_radians().tan();
        assert!(approx_eq(start.distance(ctrl1), expected, 1e-9));
    }

    #[test]
    fn test_segmented_shot_marks() {
        let spec = BendSpec::Segmented { radius_in: 24.0, angle_deg: 90.0, shot_count: 5 };
        let path = synthesize(&spec, &settings()).unwrap();
        assert_eq!(path.shot_marks.len(), 6);
        assert_eq!(path.shot_marks[0].tangent_deg, 0.0);
        assert!(approx_eq(path.shot_marks[5].tangent_deg, 90.0, 1e-12));

        let center = path.shot_marks[0].position + Point2::new(0.0, 24.0);
        for mark in &path.shot_marks {
            assert!(approx_eq(mark.position.distance(center), 24.0, 1e-9));
        }

        let chord = path.dimensions.iter().find(|d| d.label.starts_with("Chord")).unwrap();
        assert!(approx_eq(chord.length(), 33.94, 0.005));
        assert_eq!(path.strokes[0].segments.iter().filter(|s| s.is_curve()).count(), 5);
        assert_viewport_covers(&path);
    }

    #[test]
    fn test_invalid_spec_propagates() {
        let spec = BendSpec::Offset { height_in: 10.0, angle_deg: 0.0 };
        assert_eq!(synthesize(&spec, &settings()).unwrap_err().error_code(), "INVALID_ANGLE");
    }

    #[test]
    fn test_viewport_padding_applied() {
        let spec = BendSpec::Offset { height_in: 10.0, angle_deg: 30.0 };
        let mut s = settings();
        s.viewport_padding_in = 0.0;
        let tight = synthesize(&spec, &s).unwrap();
        s.viewport_padding_in = 3.0;
        let padded = synthesize(&spec, &s).unwrap();
        assert!(approx_eq(padded.viewport.width, tight.viewport.width + 6.0, 1e-9));
        assert!(approx_eq(padded.viewport.min_y, tight.viewport.min_y - 3.0, 1e-9));
    }
}
