//! Conduit Types, Trade Sizes and Internal Areas
//!
//! Total (100%) internal cross-section of each raceway by type and trade
//! size, plus the springback factor of the bendable metal conduits.
//!
//! Not every type is made in every size: 3/8" exists only for flexible
//! metal conduit, so asking for 3/8" EMT is a lookup failure, not a zero.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::SqIn;

/// Raceway type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConduitType {
    /// Electrical Metallic Tubing
    #[serde(rename = "EMT")]
    Emt,
    /// Intermediate Metal Conduit
    #[serde(rename = "IMC")]
    Imc,
    /// Rigid Metal Conduit
    #[serde(rename = "RMC")]
    Rmc,
    /// Rigid PVC Conduit, Schedule 40
    #[serde(rename = "PVC-40")]
    Pvc40,
    /// Flexible Metal Conduit
    #[serde(rename = "FMC")]
    Fmc,
}

impl ConduitType {
    /// All conduit types for UI selection (most common first)
    pub const ALL: [ConduitType; 5] = [
        ConduitType::Emt,
        ConduitType::Imc,
        ConduitType::Rmc,
        ConduitType::Pvc40,
        ConduitType::Fmc,
    ];

    /// Table key (e.g., "EMT")
    pub fn code(&self) -> &'static str {
        match self {
            ConduitType::Emt => "EMT",
            ConduitType::Imc => "IMC",
            ConduitType::Rmc => "RMC",
            ConduitType::Pvc40 => "PVC-40",
            ConduitType::Fmc => "FMC",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConduitType::Emt => "Electrical Metallic Tubing",
            ConduitType::Imc => "Intermediate Metal Conduit",
            ConduitType::Rmc => "Rigid Metal Conduit",
            ConduitType::Pvc40 => "PVC Schedule 40",
            ConduitType::Fmc => "Flexible Metal Conduit",
        }
    }

    /// Parse from common string representations
    pub fn from_key(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_'], "-").as_str() {
            "EMT" => Ok(ConduitType::Emt),
            "IMC" => Ok(ConduitType::Imc),
            "RMC" | "GRC" | "RIGID" => Ok(ConduitType::Rmc),
            "PVC" | "PVC-40" | "PVC40" | "SCH-40" => Ok(ConduitType::Pvc40),
            "FMC" | "FLEX" => Ok(ConduitType::Fmc),
            _ => Err(CalcError::unknown_key("conduit type", s)),
        }
    }

    /// Springback factor: fraction of the bend angle the conduit relaxes by
    /// after the bender lets go.
    ///
    /// Only conduits bent cold on a hand or floor bender have one. PVC is
    /// heat-bent and FMC is not bent at all.
    pub fn springback_factor(&self) -> CalcResult<f64> {
        match self {
            ConduitType::Emt => Ok(0.05),
            ConduitType::Imc => Ok(0.03),
            ConduitType::Rmc => Ok(0.02),
            ConduitType::Pvc40 | ConduitType::Fmc => {
                Err(CalcError::unknown_key("springback material", self.code()))
            }
        }
    }

    /// Total internal area for a trade size of this conduit type
    pub fn internal_area(&self, size: TradeSize) -> CalcResult<SqIn> {
        use TradeSize::*;

        let area = match (*self, size) {
            (ConduitType::Emt, T1_2) => 0.304,
            (ConduitType::Emt, T3_4) => 0.533,
            (ConduitType::Emt, T1) => 0.864,
            (ConduitType::Emt, T1_1_4) => 1.496,
            (ConduitType::Emt, T1_1_2) => 2.036,
            (ConduitType::Emt, T2) => 3.356,
            (ConduitType::Emt, T2_1_2) => 5.858,
            (ConduitType::Emt, T3) => 8.846,
            (ConduitType::Emt, T3_1_2) => 11.545,
            (ConduitType::Emt, T4) => 14.753,

            (ConduitType::Imc, T1_2) => 0.342,
            (ConduitType::Imc, T3_4) => 0.586,
            (ConduitType::Imc, T1) => 0.959,
            (ConduitType::Imc, T1_1_4) => 1.647,
            (ConduitType::Imc, T1_1_2) => 2.225,
            (ConduitType::Imc, T2) => 3.630,
            (ConduitType::Imc, T2_1_2) => 5.135,
            (ConduitType::Imc, T3) => 7.922,
            (ConduitType::Imc, T3_1_2) => 10.584,
            (ConduitType::Imc, T4) => 13.631,

            (ConduitType::Rmc, T1_2) => 0.314,
            (ConduitType::Rmc, T3_4) => 0.549,
            (ConduitType::Rmc, T1) => 0.887,
            (ConduitType::Rmc, T1_1_4) => 1.526,
            (ConduitType::Rmc, T1_1_2) => 2.071,
            (ConduitType::Rmc, T2) => 3.408,
            (ConduitType::Rmc, T2_1_2) => 4.866,
            (ConduitType::Rmc, T3) => 7.499,
            (ConduitType::Rmc, T3_1_2) => 10.010,
            (ConduitType::Rmc, T4) => 12.882,

            (ConduitType::Pvc40, T1_2) => 0.285,
            (ConduitType::Pvc40, T3_4) => 0.508,
            (ConduitType::Pvc40, T1) => 0.832,
            (ConduitType::Pvc40, T1_1_4) => 1.453,
            (ConduitType::Pvc40, T1_1_2) => 1.986,
            (ConduitType::Pvc40, T2) => 3.291,
            (ConduitType::Pvc40, T2_1_2) => 4.695,
            (ConduitType::Pvc40, T3) => 7.268,
            (ConduitType::Pvc40, T3_1_2) => 9.737,
            (ConduitType::Pvc40, T4) => 12.554,

            (ConduitType::Fmc, T3_8) => 0.116,
            (ConduitType::Fmc, T1_2) => 0.317,
            (ConduitType::Fmc, T3_4) => 0.533,
            (ConduitType::Fmc, T1) => 0.817,
            (ConduitType::Fmc, T1_1_4) => 1.277,
            (ConduitType::Fmc, T1_1_2) => 1.858,
            (ConduitType::Fmc, T2) => 3.269,
            (ConduitType::Fmc, T2_1_2) => 4.909,
            (ConduitType::Fmc, T3) => 7.069,
            (ConduitType::Fmc, T3_1_2) => 9.621,
            (ConduitType::Fmc, T4) => 12.566,

            (_, T3_8) => {
                return Err(CalcError::unknown_key(
                    "conduit size",
                    format!("{} {}", self.code(), size.code()),
                ))
            }
        };
        Ok(SqIn(area))
    }
}

impl std::fmt::Display for ConduitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Nominal trade size designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TradeSize {
    #[serde(rename = "3/8")]
    T3_8,
    #[serde(rename = "1/2")]
    T1_2,
    #[serde(rename = "3/4")]
    T3_4,
    #[serde(rename = "1")]
    T1,
    #[serde(rename = "1-1/4")]
    T1_1_4,
    #[serde(rename = "1-1/2")]
    T1_1_2,
    #[serde(rename = "2")]
    T2,
    #[serde(rename = "2-1/2")]
    T2_1_2,
    #[serde(rename = "3")]
    T3,
    #[serde(rename = "3-1/2")]
    T3_1_2,
    #[serde(rename = "4")]
    T4,
}

impl TradeSize {
    /// All trade sizes, smallest first
    pub const ALL: [TradeSize; 11] = [
        TradeSize::T3_8,
        TradeSize::T1_2,
        TradeSize::T3_4,
        TradeSize::T1,
        TradeSize::T1_1_4,
        TradeSize::T1_1_2,
        TradeSize::T2,
        TradeSize::T2_1_2,
        TradeSize::T3,
        TradeSize::T3_1_2,
        TradeSize::T4,
    ];

    /// Table key (e.g., "3/4", "1-1/4")
    pub fn code(&self) -> &'static str {
        match self {
            TradeSize::T3_8 => "3/8",
            TradeSize::T1_2 => "1/2",
            TradeSize::T3_4 => "3/4",
            TradeSize::T1 => "1",
            TradeSize::T1_1_4 => "1-1/4",
            TradeSize::T1_1_2 => "1-1/2",
            TradeSize::T2 => "2",
            TradeSize::T2_1_2 => "2-1/2",
            TradeSize::T3 => "3",
            TradeSize::T3_1_2 => "3-1/2",
            TradeSize::T4 => "4",
        }
    }

    /// Nominal size in inches (e.g., 1.25 for 1-1/4")
    pub fn nominal_in(&self) -> f64 {
        match self {
            TradeSize::T3_8 => 0.375,
            TradeSize::T1_2 => 0.5,
            TradeSize::T3_4 => 0.75,
            TradeSize::T1 => 1.0,
            TradeSize::T1_1_4 => 1.25,
            TradeSize::T1_1_2 => 1.5,
            TradeSize::T2 => 2.0,
            TradeSize::T2_1_2 => 2.5,
            TradeSize::T3 => 3.0,
            TradeSize::T3_1_2 => 3.5,
            TradeSize::T4 => 4.0,
        }
    }

    /// Parse from common string representations.
    ///
    /// Accepts the fractional key ("1-1/4", "1 1/4", `3/4"`) or the decimal
    /// nominal size ("1.25", "0.75", "0.75in").
    pub fn from_key(s: &str) -> CalcResult<Self> {
        let normalized = s
            .trim()
            .trim_end_matches('"')
            .trim_end_matches("in")
            .trim()
            .replace(' ', "-");

        if let Some(size) = TradeSize::ALL.iter().copied().find(|t| t.code() == normalized) {
            return Ok(size);
        }

        if let Ok(value) = normalized.parse::<f64>() {
            if let Some(size) = TradeSize::ALL
                .iter()
                .copied()
                .find(|t| (t.nominal_in() - value).abs() < 1e-9)
            {
                return Ok(size);
            }
        }

        Err(CalcError::unknown_key("conduit size", s))
    }
}

impl std::fmt::Display for TradeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\"", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emt_three_quarter_area() {
        let area = ConduitType::Emt.internal_area(TradeSize::T3_4).unwrap();
        assert_eq!(area, SqIn(0.533));
    }

    #[test]
    fn test_areas_increase_with_trade_size() {
        for conduit in ConduitType::ALL {
            let areas: Vec<f64> = TradeSize::ALL
                .iter()
                .filter_map(|s| conduit.internal_area(*s).ok())
                .map(|a| a.0)
                .collect();
            assert!(areas.len() >= 10, "{} is missing sizes", conduit);
            assert!(areas.windows(2).all(|w| w[0] < w[1]), "{} areas not ascending", conduit);
        }
    }

    #[test]
    fn test_three_eighths_only_for_flex() {
        assert!(ConduitType::Fmc.internal_area(TradeSize::T3_8).is_ok());
        let err = ConduitType::Emt.internal_area(TradeSize::T3_8).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_LOOKUP_KEY");
    }

    #[test]
    fn test_springback_factors() {
        assert_eq!(ConduitType::Emt.springback_factor().unwrap(), 0.05);
        assert_eq!(ConduitType::Imc.springback_factor().unwrap(), 0.03);
        assert_eq!(ConduitType::Rmc.springback_factor().unwrap(), 0.02);
        assert!(ConduitType::Pvc40.springback_factor().is_err());
    }

    #[test]
    fn test_trade_size_from_key() {
        assert_eq!(TradeSize::from_key("3/4").unwrap(), TradeSize::T3_4);
        assert_eq!(TradeSize::from_key("1 1/4").unwrap(), TradeSize::T1_1_4);
        assert_eq!(TradeSize::from_key("1-1/2\"").unwrap(), TradeSize::T1_1_2);
        assert_eq!(TradeSize::from_key("0.75").unwrap(), TradeSize::T3_4);
        assert_eq!(TradeSize::from_key("0.75in").unwrap(), TradeSize::T3_4);
        assert!(TradeSize::from_key("5").is_err());
    }

    #[test]
    fn test_conduit_type_from_key() {
        assert_eq!(ConduitType::from_key("emt").unwrap(), ConduitType::Emt);
        assert_eq!(ConduitType::from_key("PVC 40").unwrap(), ConduitType::Pvc40);
        assert!(ConduitType::from_key("ENT").is_err());
    }
}
