//! # Bend Calculation
//!
//! Turns one of six bend shapes into the marks an electrician lays out on
//! the conduit: travel between marks, run, shrinkage, and for segmented
//! bends the developed length and per-shot angle.
//!
//! ## Angle Conventions
//!
//! - Offset, Saddle4, RollingOffset: `angle_deg` is the angle of each bend.
//! - Saddle3: `angle_deg` is the **center** bend; the two side bends are
//!   half of it (45° center with 22.5° sides is the usual saddle).
//! - Concentric, Segmented: `angle_deg` is the total bend angle.
//!
//! ## Example
//!
//! ```rust
//! use bend_core::calculations::bend::{compute_bend, BendResult, BendSpec};
//!
//! let spec = BendSpec::Offset { height_in: 10.0, angle_deg: 30.0 };
//! let result = compute_bend(&spec).unwrap();
//!
//! if let BendResult::Offset(offset) = result {
//!     assert!((offset.travel_in - 20.0).abs() < 1e-9);
//!     println!("Marks {:.2}\" apart, shrink {:.2}\"", offset.travel_in, offset.shrinkage_in);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::bend as eq;
use crate::errors::{CalcError, CalcResult};
use crate::settings::AngleLimits;

/// Bend shape and the parameters that shape needs.
///
/// ## JSON Example
///
/// ```json
/// { "kind": "Segmented", "radius_in": 24.0, "angle_deg": 90.0, "shot_count": 5 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BendSpec {
    /// Two equal and opposite bends
    Offset { height_in: f64, angle_deg: f64 },

    /// Center bend plus two half-angle side bends over a round obstacle
    Saddle3 { height_in: f64, angle_deg: f64 },

    /// Offset up, run across `width_in`, offset back down
    Saddle4 {
        height_in: f64,
        width_in: f64,
        angle_deg: f64,
    },

    /// Offset with simultaneous vertical rise and horizontal roll
    RollingOffset {
        rise_in: f64,
        roll_in: f64,
        angle_deg: f64,
    },

    /// Parallel conduits bent around a common center
    Concentric {
        spacing_in: f64,
        angle_deg: f64,
        pipe_count: u32,
    },

    /// Large sweep made of equal shots
    Segmented {
        radius_in: f64,
        angle_deg: f64,
        shot_count: u32,
    },
}

/// Bend shape without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BendKind {
    Offset,
    Saddle3,
    Saddle4,
    RollingOffset,
    Concentric,
    Segmented,
}

impl BendKind {
    /// All bend kinds for UI selection
    pub const ALL: [BendKind; 6] = [
        BendKind::Offset,
        BendKind::Saddle3,
        BendKind::Saddle4,
        BendKind::RollingOffset,
        BendKind::Concentric,
        BendKind::Segmented,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BendKind::Offset => "Offset",
            BendKind::Saddle3 => "3-Point Saddle",
            BendKind::Saddle4 => "4-Point Saddle",
            BendKind::RollingOffset => "Rolling Offset",
            BendKind::Concentric => "Concentric Bends",
            BendKind::Segmented => "Segmented Bend",
        }
    }
}

impl std::fmt::Display for BendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Record of a defensive angle clamp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleClamp {
    /// Angle as entered
    pub requested_deg: f64,
    /// Angle actually used
    pub applied_deg: f64,
}

impl BendSpec {
    /// Which shape this is
    pub fn kind(&self) -> BendKind {
        match self {
            BendSpec::Offset { .. } => BendKind::Offset,
            BendSpec::Saddle3 { .. } => BendKind::Saddle3,
            BendSpec::Saddle4 { .. } => BendKind::Saddle4,
            BendSpec::RollingOffset { .. } => BendKind::RollingOffset,
            BendSpec::Concentric { .. } => BendKind::Concentric,
            BendSpec::Segmented { .. } => BendKind::Segmented,
        }
    }

    /// The bend angle, whatever the shape
    pub fn angle_deg(&self) -> f64 {
        match *self {
            BendSpec::Offset { angle_deg, .. }
            | BendSpec::Saddle3 { angle_deg, .. }
            | BendSpec::Saddle4 { angle_deg, .. }
            | BendSpec::RollingOffset { angle_deg, .. }
            | BendSpec::Concentric { angle_deg, .. }
            | BendSpec::Segmented { angle_deg, .. } => angle_deg,
        }
    }

    /// Copy of this spec with a different angle
    pub fn with_angle(&self, angle: f64) -> Self {
        let mut spec = *self;
        match &mut spec {
            BendSpec::Offset { angle_deg, .. }
            | BendSpec::Saddle3 { angle_deg, .. }
            | BendSpec::Saddle4 { angle_deg, .. }
            | BendSpec::RollingOffset { angle_deg, .. }
            | BendSpec::Concentric { angle_deg, .. }
            | BendSpec::Segmented { angle_deg, .. } => *angle_deg = angle,
        }
        spec
    }

    /// Number of shots for segmented bends, 1 for everything else
    pub fn shot_count(&self) -> u32 {
        match *self {
            BendSpec::Segmented { shot_count, .. } => shot_count,
            _ => 1,
        }
    }

    /// Validate input parameters.
    ///
    /// The angle must be strictly inside (0°, 180°), every length positive
    /// and finite, and pipe/shot counts at least 2.
    pub fn validate(&self) -> CalcResult<()> {
        let angle = self.angle_deg();
        if !angle.is_finite() || angle <= 0.0 || angle >= 180.0 {
            return Err(CalcError::invalid_angle("angle_deg", angle));
        }

        match *self {
            BendSpec::Offset { height_in, .. } | BendSpec::Saddle3 { height_in, .. } => {
                positive("height_in", height_in)
            }
            BendSpec::Saddle4 { height_in, width_in, .. } => {
                positive("height_in", height_in)?;
                positive("width_in", width_in)
            }
            BendSpec::RollingOffset { rise_in, roll_in, .. } => {
                positive("rise_in", rise_in)?;
                positive("roll_in", roll_in)
            }
            BendSpec::Concentric { spacing_in, pipe_count, .. } => {
                positive("spacing_in", spacing_in)?;
                at_least_two("pipe_count", pipe_count)
            }
            BendSpec::Segmented { radius_in, shot_count, .. } => {
                positive("radius_in", radius_in)?;
                at_least_two("shot_count", shot_count)
            }
        }
    }

    /// Pull an out-of-range angle back inside `limits` when clamping is
    /// enabled.
    ///
    /// Returns the spec to compute with and, if the angle moved, a record
    /// of the clamp so it can be reported back to the user. With clamping
    /// disabled the spec is returned untouched and validation decides.
    pub fn clamp_angle(&self, limits: &AngleLimits) -> (BendSpec, Option<AngleClamp>) {
        let requested = self.angle_deg();
        if !limits.clamp || requested.is_nan() {
            return (*self, None);
        }

        let applied = requested.clamp(limits.min_deg, limits.max_deg);
        if applied == requested {
            return (*self, None);
        }

        tracing::warn!(requested, applied, kind = ?self.kind(), "bend angle clamped");
        (
            self.with_angle(applied),
            Some(AngleClamp {
                requested_deg: requested,
                applied_deg: applied,
            }),
        )
    }
}

fn positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be a positive length in inches",
        ));
    }
    Ok(())
}

fn at_least_two(field: &str, value: u32) -> CalcResult<()> {
    if value < 2 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be at least 2"));
    }
    Ok(())
}

/// Offset measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetResult {
    /// Distance between the two bend marks along the conduit (in)
    pub travel_in: f64,
    /// Horizontal distance covered by the rise (in)
    pub run_in: f64,
    /// Reach lost to the offset (in)
    pub shrinkage_in: f64,
    /// Travel per inch of offset height
    pub multiplier: f64,
    /// Shrinkage per inch of offset height
    pub shrink_per_inch: f64,
}

/// 3-point saddle measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Saddle3Result {
    /// Distance from the center mark to each side mark (in)
    pub center_to_side_in: f64,
    /// Reach lost to the saddle (in)
    pub shrinkage_in: f64,
    /// Center bend angle (degrees)
    pub center_angle_deg: f64,
    /// Each side bend angle (degrees)
    pub side_angle_deg: f64,
}

/// 4-point saddle measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Saddle4Result {
    /// Distance between the marks of each offset pair (in)
    pub travel_in: f64,
    /// Horizontal distance covered by each rise (in)
    pub run_in: f64,
    /// Reach lost to both offsets (in)
    pub shrinkage_in: f64,
}

/// Rolling offset measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingOffsetResult {
    /// Diagonal of the rise/roll box (in)
    pub true_offset_in: f64,
    /// Distance between the two bend marks (in)
    pub travel_in: f64,
    /// Distance covered along the run (in)
    pub run_in: f64,
    /// Reach lost to the offset (in)
    pub shrinkage_in: f64,
    /// Travel per inch of true offset
    pub multiplier: f64,
}

/// Concentric bend measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentricResult {
    /// Stagger between adjacent pipes' marks (in)
    pub stagger_in: f64,
    /// Shrinkage of the innermost pipe (in); equals the stagger
    pub shrinkage_in: f64,
    /// Mark offset for pipe i, innermost first: `i × stagger`
    pub mark_offsets_in: Vec<f64>,
}

/// Segmented bend measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentedResult {
    /// Centerline arc length (in)
    pub arc_length_in: f64,
    /// Straight distance between the arc's ends (in)
    pub chord_length_in: f64,
    /// arc − chord (in)
    pub shrinkage_in: f64,
    /// Conduit consumed by the whole sweep (in)
    pub developed_length_in: f64,
    /// Angle of each shot (degrees)
    pub per_shot_angle_deg: f64,
    /// Distance between shot marks along the conduit (in)
    pub shot_spacing_in: f64,
    /// Number of shots
    pub shot_count: u32,
}

/// Results from a bend calculation, tagged by shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BendResult {
    Offset(OffsetResult),
    Saddle3(Saddle3Result),
    Saddle4(Saddle4Result),
    RollingOffset(RollingOffsetResult),
    Concentric(ConcentricResult),
    Segmented(SegmentedResult),
}

impl BendResult {
    /// Which shape this result belongs to
    pub fn kind(&self) -> BendKind {
        match self {
            BendResult::Offset(_) => BendKind::Offset,
            BendResult::Saddle3(_) => BendKind::Saddle3,
            BendResult::Saddle4(_) => BendKind::Saddle4,
            BendResult::RollingOffset(_) => BendKind::RollingOffset,
            BendResult::Concentric(_) => BendKind::Concentric,
            BendResult::Segmented(_) => BendKind::Segmented,
        }
    }

    /// Shrinkage, whatever the shape
    pub fn shrinkage_in(&self) -> f64 {
        match self {
            BendResult::Offset(r) => r.shrinkage_in,
            BendResult::Saddle3(r) => r.shrinkage_in,
            BendResult::Saddle4(r) => r.shrinkage_in,
            BendResult::RollingOffset(r) => r.shrinkage_in,
            BendResult::Concentric(r) => r.shrinkage_in,
            BendResult::Segmented(r) => r.shrinkage_in,
        }
    }

    /// Distance between consecutive bend marks, where the shape has one
    pub fn travel_in(&self) -> Option<f64> {
        match self {
            BendResult::Offset(r) => Some(r.travel_in),
            BendResult::Saddle3(r) => Some(r.center_to_side_in),
            BendResult::Saddle4(r) => Some(r.travel_in),
            BendResult::RollingOffset(r) => Some(r.travel_in),
            BendResult::Concentric(_) => None,
            BendResult::Segmented(r) => Some(r.shot_spacing_in),
        }
    }
}

/// Compute the layout measurements for a bend.
///
/// # Arguments
///
/// * `spec` - Bend shape and parameters
///
/// # Returns
///
/// * `Ok(BendResult)` - Measurements for that shape
/// * `Err(CalcError::InvalidAngle)` - Angle outside (0°, 180°)
/// * `Err(CalcError::InvalidInput)` - Non-positive length or count below 2
pub fn compute_bend(spec: &BendSpec) -> CalcResult<BendResult> {
    spec.validate()?;

    let result = match *spec {
        BendSpec::Offset { height_in, angle_deg } => BendResult::Offset(OffsetResult {
            travel_in: eq::offset_travel(height_in, angle_deg),
            run_in: eq::offset_run(height_in, angle_deg),
            shrinkage_in: eq::offset_shrinkage(height_in, angle_deg),
            multiplier: eq::offset_multiplier(angle_deg),
            shrink_per_inch: eq::shrink_per_inch(angle_deg),
        }),

        BendSpec::Saddle3 { height_in, angle_deg } => BendResult::Saddle3(Saddle3Result {
            center_to_side_in: eq::saddle3_center_to_side(height_in, angle_deg),
            shrinkage_in: eq::saddle3_shrinkage(height_in, angle_deg),
            center_angle_deg: angle_deg,
            side_angle_deg: angle_deg / 2.0,
        }),

        BendSpec::Saddle4 { height_in, angle_deg, .. } => BendResult::Saddle4(Saddle4Result {
            travel_in: eq::offset_travel(height_in, angle_deg),
            run_in: eq::offset_run(height_in, angle_deg),
            shrinkage_in: eq::saddle4_shrinkage(height_in, angle_deg),
        }),

        BendSpec::RollingOffset { rise_in, roll_in, angle_deg } => {
            let true_offset = eq::rolling_true_offset(rise_in, roll_in);
            BendResult::RollingOffset(RollingOffsetResult {
                true_offset_in: true_offset,
                travel_in: eq::offset_travel(true_offset, angle_deg),
                run_in: eq::offset_run(true_offset, angle_deg),
                shrinkage_in: eq::offset_shrinkage(true_offset, angle_deg),
                multiplier: eq::offset_multiplier(angle_deg),
            })
        }

        BendSpec::Concentric { spacing_in, angle_deg, pipe_count } => {
            let stagger = eq::concentric_stagger(spacing_in, angle_deg);
            BendResult::Concentric(ConcentricResult {
                stagger_in: stagger,
                shrinkage_in: stagger,
                mark_offsets_in: (0..pipe_count).map(|i| i as f64 * stagger).collect(),
            })
        }

        BendSpec::Segmented { radius_in, angle_deg, shot_count } => {
            let arc = eq::arc_length(radius_in, angle_deg);
            let chord = eq::chord_length(radius_in, angle_deg);
            BendResult::Segmented(SegmentedResult {
                arc_length_in: arc,
                chord_length_in: chord,
                shrinkage_in: arc - chord,
                developed_length_in: arc,
                per_shot_angle_deg: angle_deg / shot_count as f64,
                shot_spacing_in: arc / shot_count as f64,
                shot_count,
            })
        }
    };

    tracing::debug!(kind = ?spec.kind(), shrinkage_in = result.shrinkage_in(), "bend computed");
    Ok(result)
}
