//! # Advisory
//!
//! Guidance layered on top of the bend calculator: a suggested starting
//! angle, the over-bend target that makes up for springback, and warnings
//! for bends that will not fit on a stick or under a floor bender.
//!
//! Nothing here rejects a bend. Warnings are returned alongside results so
//! the user can decide.
//!
//! ## Example
//!
//! ```rust
//! use bend_core::advisory::{bend_warnings, springback_target, suggest_angle, Severity};
//! use bend_core::calculations::bend::{BendKind, BendSpec};
//! use bend_core::tables::ConduitType;
//!
//! assert_eq!(suggest_angle(8.0, 0.75), 30.0);
//!
//! let target = springback_target(30.0, ConduitType::Emt, BendKind::Offset, 1).unwrap();
//! assert!((target - 31.5).abs() < 1e-9);
//!
//! let warnings = bend_warnings(&BendSpec::Offset { height_in: 60.0, angle_deg: 30.0 });
//! assert!(warnings.iter().any(|w| w.severity == Severity::Error));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::bend::{BendKind, BendSpec};
use crate::errors::{CalcError, CalcResult};
use crate::settings::AdvisoryLimits;
use crate::tables::ConduitType;

/// Trade sizes above this (inches) are bent at 30° whatever the height
pub const LARGE_TRADE_SIZE_IN: f64 = 1.25;

/// Suggested bend angle for an offset of `height_in` in conduit of the
/// given nominal trade size (inches).
///
/// | Height (in) | Angle  |
/// |-------------|--------|
/// | ≤ 2         | 10°    |
/// | ≤ 5         | 22.5°  |
/// | ≤ 12        | 30°    |
/// | ≤ 24        | 45°    |
/// | > 24        | 60°    |
///
/// Conduit larger than 1-1/4" always gets 30°.
pub fn suggest_angle(height_in: f64, trade_size_in: f64) -> f64 {
    if trade_size_in > LARGE_TRADE_SIZE_IN {
        return 30.0;
    }
    match height_in {
        h if h <= 2.0 => 10.0,
        h if h <= 5.0 => 22.5,
        h if h <= 12.0 => 30.0,
        h if h <= 24.0 => 45.0,
        _ => 60.0,
    }
}

/// Whether the angle follows the suggestion or the user's choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AngleMode {
    #[default]
    Auto,
    Manual,
}

/// Current bend angle plus where it came from.
///
/// Immutable: every change returns a new selection. A user-entered angle
/// switches to `Manual` and sticks until height or trade size changes,
/// at which point the selection returns to `Auto` and re-suggests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleSelection {
    pub height_in: f64,
    pub trade_size_in: f64,
    pub angle_deg: f64,
    pub mode: AngleMode,
}

impl AngleSelection {
    /// Start in `Auto` with the suggested angle
    pub fn new(height_in: f64, trade_size_in: f64) -> Self {
        AngleSelection {
            height_in,
            trade_size_in,
            angle_deg: suggest_angle(height_in, trade_size_in),
            mode: AngleMode::Auto,
        }
    }

    /// User typed an angle
    pub fn with_user_angle(&self, angle_deg: f64) -> Self {
        AngleSelection {
            angle_deg,
            mode: AngleMode::Manual,
            ..*self
        }
    }

    /// Height or trade size changed.
    ///
    /// Unchanged inputs keep the selection as it is, so a manual angle
    /// survives unrelated edits.
    pub fn with_inputs(&self, height_in: f64, trade_size_in: f64) -> Self {
        if height_in == self.height_in && trade_size_in == self.trade_size_in {
            return *self;
        }
        Self::new(height_in, trade_size_in)
    }
}

/// Angle to bend to so the conduit relaxes to `angle_deg`.
///
/// Segmented bends are compensated per shot.
///
/// # Formula
/// target = effective × (1 + springback factor),
/// effective = angle / shots for segmented bends, else angle
///
/// # Returns
///
/// * `Err(CalcError::UnknownLookupKey)` - No springback factor for the
///   material (PVC, FMC)
/// * `Err(CalcError::InvalidInput)` - Segmented with zero shots
pub fn springback_target(
    angle_deg: f64,
    material: ConduitType,
    kind: BendKind,
    shot_count: u32,
) -> CalcResult<f64> {
    let factor = material.springback_factor()?;
    let effective = match kind {
        BendKind::Segmented => {
            if shot_count == 0 {
                return Err(CalcError::invalid_input("shot_count", "0", "Must be at least 1"));
            }
            angle_deg / shot_count as f64
        }
        _ => angle_deg,
    };
    Ok(effective * (1.0 + factor))
}

/// Warning severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One advisory message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BendWarning {
    pub severity: Severity,
    pub message: String,
}

/// Warnings for a bend with the default limits
pub fn bend_warnings(spec: &BendSpec) -> Vec<BendWarning> {
    bend_warnings_with(spec, &AdvisoryLimits::default())
}

/// Warnings for a bend.
///
/// Only offsets and saddles are checked: travel `h / sin(a)` longer than
/// `max_travel_in` is an error, height over `max_bender_height_in` a
/// warning. Both can fire.
pub fn bend_warnings_with(spec: &BendSpec, limits: &AdvisoryLimits) -> Vec<BendWarning> {
    let (height, angle) = match *spec {
        BendSpec::Offset { height_in, angle_deg }
        | BendSpec::Saddle3 { height_in, angle_deg }
        | BendSpec::Saddle4 { height_in, angle_deg, .. } => (height_in, angle_deg),
        _ => return Vec::new(),
    };

    let mut warnings = Vec::new();

    let travel = height / angle.to_radians().sin();
    if travel > limits.max_travel_in {
        warnings.push(BendWarning {
            severity: Severity::Error,
            message: format!(
                "Travel of {:.2}\" exceeds the {:.0}\" usable on a 10 ft stick",
                travel, limits.max_travel_in
            ),
        });
    }

    if height > limits.max_bender_height_in {
        warnings.push(BendWarning {
            severity: Severity::Warning,
            message: format!(
                "Height of {:.2}\" is over the {:.0}\" a floor bender clears",
                height, limits.max_bender_height_in
            ),
        });
    }

    if !warnings.is_empty() {
        tracing::debug!(kind = ?spec.kind(), count = warnings.len(), "bend warnings raised");
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_angle_table() {
        assert_eq!(suggest_angle(2.0, 0.5), 10.0);
        assert_eq!(suggest_angle(2.01, 0.5), 22.5);
        assert_eq!(suggest_angle(5.0, 0.75), 22.5);
        assert_eq!(suggest_angle(12.0, 1.0), 30.0);
        assert_eq!(suggest_angle(24.0, 1.25), 45.0);
        assert_eq!(suggest_angle(30.0, 1.25), 60.0);
    }

    #[test]
    fn test_suggest_angle_large_conduit() {
        assert_eq!(suggest_angle(1.0, 1.5), 30.0);
        assert_eq!(suggest_angle(40.0, 2.0), 30.0);
    }

    #[test]
    fn test_manual_angle_sticks_until_inputs_change() {
        let auto = AngleSelection::new(10.0, 0.75);
        assert_eq!(auto.mode, AngleMode::Auto);
        assert_eq!(auto.angle_deg, 30.0);

        let manual = auto.with_user_angle(45.0);
        assert_eq!(manual.mode, AngleMode::Manual);
        assert_eq!(manual.with_inputs(10.0, 0.75), manual);

        let changed = manual.with_inputs(3.0, 0.75);
        assert_eq!(changed.mode, AngleMode::Auto);
        assert_eq!(changed.angle_deg, 22.5);

        let resized = manual.with_inputs(10.0, 2.0);
        assert_eq!(resized.mode, AngleMode::Auto);
        assert_eq!(resized.angle_deg, 30.0);
    }

    #[test]
    fn test_springback_by_material() {
        let emt = springback_target(45.0, ConduitType::Emt, BendKind::Offset, 1).unwrap();
        let imc = springback_target(45.0, ConduitType::Imc, BendKind::Offset, 1).unwrap();
        let rmc = springback_target(45.0, ConduitType::Rmc, BendKind::Offset, 1).unwrap();
        assert!((emt - 47.25).abs() < 1e-9);
        assert!((imc - 46.35).abs() < 1e-9);
        assert!((rmc - 45.9).abs() < 1e-9);
    }

    #[test]
    fn test_springback_segmented_is_per_shot() {
        // 90° in 5 shots: 18° per shot, × 1.05
        let target = springback_target(90.0, ConduitType::Emt, BendKind::Segmented, 5).unwrap();
        assert!((target - 18.9).abs() < 1e-9, "target = {}", target);

        // Shot count is ignored for other kinds
        let offset = springback_target(90.0, ConduitType::Emt, BendKind::Offset, 5).unwrap();
        assert!((offset - 94.5).abs() < 1e-9);
    }

    #[test]
    fn test_springback_unknown_material() {
        let err = springback_target(30.0, ConduitType::Pvc40, BendKind::Offset, 1).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_LOOKUP_KEY");
        assert!(springback_target(30.0, ConduitType::Fmc, BendKind::Offset, 1).is_err());
    }

    #[test]
    fn test_warnings_travel_and_height() {
        // 60 / sin 30° = 120 > 110, and 60 > 22
        let warnings = bend_warnings(&BendSpec::Offset { height_in: 60.0, angle_deg: 30.0 });
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].severity, Severity::Error);
        assert_eq!(warnings[1].severity, Severity::Warning);
    }

    #[test]
    fn test_warnings_height_only() {
        // 30 / sin 45° = 42.4, fine on a stick
        let warnings = bend_warnings(&BendSpec::Saddle4 { height_in: 30.0, width_in: 10.0, angle_deg: 45.0 });
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, Severity::Warning);
    }

    #[test]
    fn test_no_warnings_for_other_kinds() {
        let spec = BendSpec::Segmented { radius_in: 500.0, angle_deg: 90.0, shot_count: 10 };
        assert!(bend_warnings(&spec).is_empty());
        let ok = BendSpec::Offset { height_in: 10.0, angle_deg: 30.0 };
        assert!(bend_warnings(&ok).is_empty());
    }

    #[test]
    fn test_custom_limits() {
        let limits = AdvisoryLimits {
            max_travel_in: 15.0,
            max_bender_height_in: 22.0,
        };
        let warnings = bend_warnings_with(&BendSpec::Offset { height_in: 10.0, angle_deg: 30.0 }, &limits);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, Severity::Error);
    }

    #[test]
    fn test_warning_json_severity_lowercase() {
        let w = BendWarning {
            severity: Severity::Warning,
            message: "x".to_string(),
        };
        let json = serde_json::to_string(&w).unwrap();
        assert!(json.contains("\"severity\":\"warning\""));
    }
}
