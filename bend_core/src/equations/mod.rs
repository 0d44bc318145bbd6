//! # Bending Equations
//!
//! Every closed-form formula the engine uses, in one place, so the bend
//! calculator, the advisory checks and the geometry synthesizer cannot
//! drift apart.
//!
//! ## Modules
//!
//! - [`bend`] - Offset, saddle, rolling offset, concentric and arc formulas
//! - [`curve`] - Bézier arc handles and corner blend radii for drawing
//!
//! ## Conventions
//!
//! - **Lengths**: inches along the conduit centerline
//! - **Angles**: degrees in, radians only inside the trig calls
//! - **Saddle3 angle**: the center bend angle; side bends are half of it

pub mod bend;
pub mod curve;

pub use bend::{
    arc_length,
    chord_length,
    concentric_stagger,
    offset_multiplier,
    offset_run,
    offset_shrinkage,
    offset_shrinkage_half_angle_form,
    offset_shrinkage_secant_form,
    offset_travel,
    rolling_true_offset,
    saddle3_center_to_side,
    saddle3_shrinkage,
    saddle4_shrinkage,
    shrink_per_inch,
};

pub use curve::{arc_bezier_handle, corner_blend_radius, CORNER_SEGMENT_DIVISOR};
