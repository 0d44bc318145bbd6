//! Conductor Cross-Section Areas
//!
//! Approximate area of THHN/THWN-2 insulated conductors, used as the
//! numerator of a conduit fill check. Values are square inches per
//! conductor including insulation.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::SqIn;

/// Copper conductor size (AWG / kcmil designations)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WireGauge {
    #[serde(rename = "14")]
    Awg14,
    #[serde(rename = "12")]
    Awg12,
    #[serde(rename = "10")]
    Awg10,
    #[serde(rename = "8")]
    Awg8,
    #[serde(rename = "6")]
    Awg6,
    #[serde(rename = "4")]
    Awg4,
    #[serde(rename = "3")]
    Awg3,
    #[serde(rename = "2")]
    Awg2,
    #[serde(rename = "1")]
    Awg1,
    #[serde(rename = "1/0")]
    Awg1_0,
    #[serde(rename = "2/0")]
    Awg2_0,
    #[serde(rename = "3/0")]
    Awg3_0,
    #[serde(rename = "4/0")]
    Awg4_0,
}

impl WireGauge {
    /// All gauges, smallest conductor first
    pub const ALL: [WireGauge; 13] = [
        WireGauge::Awg14,
        WireGauge::Awg12,
        WireGauge::Awg10,
        WireGauge::Awg8,
        WireGauge::Awg6,
        WireGauge::Awg4,
        WireGauge::Awg3,
        WireGauge::Awg2,
        WireGauge::Awg1,
        WireGauge::Awg1_0,
        WireGauge::Awg2_0,
        WireGauge::Awg3_0,
        WireGauge::Awg4_0,
    ];

    /// Table key (e.g., "12", "1/0")
    pub fn code(&self) -> &'static str {
        match self {
            WireGauge::Awg14 => "14",
            WireGauge::Awg12 => "12",
            WireGauge::Awg10 => "10",
            WireGauge::Awg8 => "8",
            WireGauge::Awg6 => "6",
            WireGauge::Awg4 => "4",
            WireGauge::Awg3 => "3",
            WireGauge::Awg2 => "2",
            WireGauge::Awg1 => "1",
            WireGauge::Awg1_0 => "1/0",
            WireGauge::Awg2_0 => "2/0",
            WireGauge::Awg3_0 => "3/0",
            WireGauge::Awg4_0 => "4/0",
        }
    }

    /// THHN conductor area including insulation
    pub fn thhn_area(&self) -> SqIn {
        let area = match self {
            WireGauge::Awg14 => 0.0097,
            WireGauge::Awg12 => 0.0133,
            WireGauge::Awg10 => 0.0211,
            WireGauge::Awg8 => 0.0366,
            WireGauge::Awg6 => 0.0507,
            WireGauge::Awg4 => 0.0824,
            WireGauge::Awg3 => 0.0973,
            WireGauge::Awg2 => 0.1158,
            WireGauge::Awg1 => 0.1562,
            WireGauge::Awg1_0 => 0.1855,
            WireGauge::Awg2_0 => 0.2223,
            WireGauge::Awg3_0 => 0.2679,
            WireGauge::Awg4_0 => 0.3237,
        };
        SqIn(area)
    }

    /// Parse from common string representations ("12", "#12", "12 AWG", "1/0")
    pub fn from_key(s: &str) -> CalcResult<Self> {
        let normalized = s
            .trim()
            .trim_start_matches('#')
            .to_uppercase()
            .replace("AWG", "")
            .replace(' ', "");
        WireGauge::ALL
            .iter()
            .copied()
            .find(|g| g.code() == normalized)
            .ok_or_else(|| CalcError::unknown_key("wire gauge", s))
    }
}

impl std::fmt::Display for WireGauge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.code())
    }
}
