//! # Calculations
//!
//! Every calculation follows the same pattern:
//!
//! - `*Input` / `*Spec` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure function `fn(&input) -> CalcResult<*Result>`
//!
//! ## Available Calculations
//!
//! - [`bend`] - Offset, saddle, rolling offset, concentric and segmented bends
//! - [`conduit_fill`] - Conductor fill percentage of a conduit
//! - [`box_fill`] - Volume fill of an outlet or device box

pub mod bend;
pub mod box_fill;
pub mod conduit_fill;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::settings::EngineSettings;

// Re-export commonly used types
pub use bend::{compute_bend, AngleClamp, BendKind, BendResult, BendSpec};
pub use box_fill::{box_fill, BoxFillInput, BoxFillResult};
pub use conduit_fill::{conduit_fill, conduit_fill_with_rule, ConduitFillInput, ConduitFillResult, FillRule};

/// Enum wrapper for all calculation inputs.
///
/// Lets a front-end hold "the current parameters" as one value and derive
/// "the current result" from it on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Conduit bend
    Bend(BendSpec),
    /// Conduit fill check
    ConduitFill(ConduitFillInput),
    /// Box fill check
    BoxFill(BoxFillInput),
}

/// Enum wrapper for all calculation results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    /// Bend measurements, plus the clamp applied to the angle if any
    Bend {
        result: BendResult,
        clamp: Option<AngleClamp>,
    },
    ConduitFill(ConduitFillResult),
    BoxFill(BoxFillResult),
}

impl CalculationItem {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Bend(_) => "Bend",
            CalculationItem::ConduitFill(_) => "ConduitFill",
            CalculationItem::BoxFill(_) => "BoxFill",
        }
    }

    /// Run the calculation.
    ///
    /// Bend angles are clamped first when `settings.angles.clamp` is on,
    /// and the clamp is returned with the result. Conduit fill uses
    /// `settings.fill_rule`.
    pub fn evaluate(&self, settings: &EngineSettings) -> CalcResult<CalculationOutput> {
        match self {
            CalculationItem::Bend(spec) => {
                let (spec, clamp) = spec.clamp_angle(&settings.angles);
                let result = compute_bend(&spec)?;
                Ok(CalculationOutput::Bend { result, clamp })
            }
            CalculationItem::ConduitFill(input) => {
                conduit_fill_with_rule(input, settings.fill_rule).map(CalculationOutput::ConduitFill)
            }
            CalculationItem::BoxFill(input) => box_fill(input).map(CalculationOutput::BoxFill),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_json_roundtrip() {
        let item = CalculationItem::Bend(BendSpec::Offset { height_in: 10.0, angle_deg: 30.0 });
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"Bend\""));
        assert!(json.contains("\"kind\":\"Offset\""));
        let back: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
        assert_eq!(back.calc_type(), "Bend");
    }

    #[test]
    fn test_evaluate_respects_clamp_setting() {
        let item = CalculationItem::Bend(BendSpec::Offset { height_in: 10.0, angle_deg: 180.0 });

        let strict = EngineSettings::default();
        assert!(item.evaluate(&strict).is_err());

        let mut lenient = EngineSettings::default();
        lenient.angles.clamp = true;
        let Ok(CalculationOutput::Bend { result, clamp }) = item.evaluate(&lenient) else {
            panic!("expected bend output");
        };
        assert!(matches!(result, BendResult::Offset(_)));
        assert_eq!(clamp, Some(AngleClamp { requested_deg: 180.0, applied_deg: 179.0 }));
    }

    #[test]
    fn test_clamp_travels_in_output_json() {
        let item = CalculationItem::Bend(BendSpec::Offset { height_in: 10.0, angle_deg: 0.0 });
        let mut settings = EngineSettings::default();
        settings.angles.clamp = true;

        let output = item.evaluate(&settings).unwrap();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["type"], "Bend");
        assert_eq!(json["clamp"]["requested_deg"], 0.0);
        assert_eq!(json["clamp"]["applied_deg"], 1.0);
        assert_eq!(json["result"]["kind"], "Offset");

        let back: CalculationOutput = serde_json::from_value(json).unwrap();
        assert_eq!(back, output);
    }

    #[test]
    fn test_in_range_angle_has_no_clamp() {
        let item = CalculationItem::Bend(BendSpec::Offset { height_in: 10.0, angle_deg: 30.0 });
        let mut settings = EngineSettings::default();
        settings.angles.clamp = true;
        let Ok(CalculationOutput::Bend { clamp, .. }) = item.evaluate(&settings) else {
            panic!("expected bend output");
        };
        assert!(clamp.is_none());
    }

    #[test]
    fn test_evaluate_box_fill() {
        let item = CalculationItem::BoxFill(BoxFillInput {
            box_type: "4x1-1/2 Sq".to_string(),
            count_14: 2,
            count_12: 4,
            device_count: 1,
        });
        let Ok(CalculationOutput::BoxFill(result)) = item.evaluate(&EngineSettings::default()) else {
            panic!("expected box fill output");
        };
        assert_eq!(result.volume_used_in3, 17.5);
    }
}
