//! # Bend Geometry
//!
//! Render-agnostic drawing data for a bend: the centerline, smoothed
//! strokes, obstacles, dimension lines, shot hash marks and a viewport.
//!
//! Coordinates are inches with y pointing up. The conduit enters along +x
//! from the origin. A renderer only has to flip y and scale.
//!
//! - [`rounding`] - Quadratic corner blends for polylines
//! - [`synth`] - One drawing per bend kind

pub mod rounding;
pub mod synth;

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

pub use rounding::round_corners;
pub use synth::synthesize;

/// A point in drawing space (in)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }

    /// Unit vector at `deg` from +x
    pub fn from_angle_deg(deg: f64) -> Self {
        let (sin, cos) = deg.to_radians().sin_cos();
        Point2::new(cos, sin)
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(&self, other: Point2) -> f64 {
        (other - *self).length()
    }

    /// Unit vector in the same direction; zero stays zero
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            *self
        } else {
            Point2::new(self.x / len, self.y / len)
        }
    }
}

impl Add for Point2 {
    type Output = Point2;
    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Point2;
    fn mul(self, rhs: f64) -> Point2 {
        Point2::new(self.x * rhs, self.y * rhs)
    }
}

/// One drawing command after the stroke's start point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum PathSegment {
    LineTo { to: Point2 },
    QuadTo { ctrl: Point2, to: Point2 },
    CubicTo { ctrl1: Point2, ctrl2: Point2, to: Point2 },
}

impl PathSegment {
    /// End point of the segment
    pub fn end(&self) -> Point2 {
        match *self {
            PathSegment::LineTo { to }
            | PathSegment::QuadTo { to, .. }
            | PathSegment::CubicTo { to, .. } => to,
        }
    }

    pub fn is_curve(&self) -> bool {
        !matches!(self, PathSegment::LineTo { .. })
    }

    /// Every point the segment carries, control points included
    pub fn points(&self) -> Vec<Point2> {
        match *self {
            PathSegment::LineTo { to } => vec![to],
            PathSegment::QuadTo { ctrl, to } => vec![ctrl, to],
            PathSegment::CubicTo { ctrl1, ctrl2, to } => vec![ctrl1, ctrl2, to],
        }
    }
}

/// A continuous drawn piece of conduit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConduitStroke {
    pub start: Point2,
    pub segments: Vec<PathSegment>,
}

impl ConduitStroke {
    pub fn new(start: Point2) -> Self {
        ConduitStroke {
            start,
            segments: Vec::new(),
        }
    }

    pub fn line_to(mut self, to: Point2) -> Self {
        self.segments.push(PathSegment::LineTo { to });
        self
    }

    pub fn quad_to(mut self, ctrl: Point2, to: Point2) -> Self {
        self.segments.push(PathSegment::QuadTo { ctrl, to });
        self
    }

    pub fn cubic_to(mut self, ctrl1: Point2, ctrl2: Point2, to: Point2) -> Self {
        self.segments.push(PathSegment::CubicTo { ctrl1, ctrl2, to });
        self
    }

    /// Where the stroke finishes
    pub fn end(&self) -> Point2 {
        self.segments.last().map_or(self.start, PathSegment::end)
    }

    pub fn points(&self) -> Vec<Point2> {
        std::iter::once(self.start)
            .chain(self.segments.iter().flat_map(PathSegment::points))
            .collect()
    }
}

/// Axis-aligned obstacle the conduit clears; `(x, y)` is the lower-left
/// corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ObstacleRect {
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.x, self.y),
            Point2::new(self.x + self.width, self.y),
            Point2::new(self.x + self.width, self.y + self.height),
            Point2::new(self.x, self.y + self.height),
        ]
    }
}

/// Measured line with a text label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionLine {
    pub from: Point2,
    pub to: Point2,
    pub label: String,
}

impl DimensionLine {
    pub fn new(from: Point2, to: Point2, name: &str, value_in: f64) -> Self {
        DimensionLine {
            from,
            to,
            label: format!("{} {:.2}\"", name, value_in),
        }
    }

    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }
}

/// Position of a segmented bend's shot, with the conduit's tangent there
/// so a hash mark can be drawn perpendicular to it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotMark {
    pub position: Point2,
    pub tangent_deg: f64,
}

/// Region that contains the whole drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Bounding box of `points` grown by `padding` on every side
    pub fn fit<I: IntoIterator<Item = Point2>>(points: I, padding: f64) -> Self {
        let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        if min.x > max.x {
            min = Point2::default();
            max = Point2::default();
        }
        Viewport {
            min_x: min.x - padding,
            min_y: min.y - padding,
            width: max.x - min.x + 2.0 * padding,
            height: max.y - min.y + 2.0 * padding,
        }
    }

    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.min_x
            && p.x <= self.min_x + self.width
            && p.y >= self.min_y
            && p.y <= self.min_y + self.height
    }
}

/// Everything needed to draw one bend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryPath {
    /// Unsmoothed centerline of the first (or only) conduit
    pub centerline: Vec<Point2>,
    /// Drawn conduits; one per pipe for concentric bends
    pub strokes: Vec<ConduitStroke>,
    pub obstacles: Vec<ObstacleRect>,
    pub dimensions: Vec<DimensionLine>,
    /// Segmented bends only
    pub shot_marks: Vec<ShotMark>,
    pub viewport: Viewport,
}

impl GeometryPath {
    /// Every emitted point: centerline, strokes with their control points,
    /// obstacle corners, dimension ends and shot marks
    pub fn all_points(&self) -> Vec<Point2> {
        let mut points = self.centerline.clone();
        points.extend(self.strokes.iter().flat_map(ConduitStroke::points));
        points.extend(self.obstacles.iter().flat_map(ObstacleRect::corners));
        points.extend(self.dimensions.iter().flat_map(|d| [d.from, d.to]));
        points.extend(self.shot_marks.iter().map(|m| m.position));
        points
    }
}
