//! Box Capacities
//!
//! Rated volume of standard metal outlet and device boxes. Box keys are
//! the trade descriptions electricians type ("4x1-1/2 Sq"), so lookups go
//! through a normalized key index rather than an exact string match.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::CuIn;

/// Standard metal box sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxType {
    #[serde(rename = "4x1-1/4 Round/Oct")]
    Round4x1_1_4,
    #[serde(rename = "4x1-1/2 Round/Oct")]
    Round4x1_1_2,
    #[serde(rename = "4x2-1/8 Round/Oct")]
    Round4x2_1_8,
    #[serde(rename = "4x1-1/4 Sq")]
    Square4x1_1_4,
    #[serde(rename = "4x1-1/2 Sq")]
    Square4x1_1_2,
    #[serde(rename = "4x2-1/8 Sq")]
    Square4x2_1_8,
    #[serde(rename = "4-11/16x1-1/4 Sq")]
    Square411x1_1_4,
    #[serde(rename = "4-11/16x1-1/2 Sq")]
    Square411x1_1_2,
    #[serde(rename = "4-11/16x2-1/8 Sq")]
    Square411x2_1_8,
    #[serde(rename = "3x2x2 Device")]
    Device3x2x2,
    #[serde(rename = "3x2x2-1/2 Device")]
    Device3x2x2_1_2,
    #[serde(rename = "3x2x2-3/4 Device")]
    Device3x2x2_3_4,
    #[serde(rename = "3x2x3-1/2 Device")]
    Device3x2x3_1_2,
}

/// Normalized key -> box type
static BOX_KEY_INDEX: Lazy<HashMap<String, BoxType>> = Lazy::new(|| {
    BoxType::ALL
        .iter()
        .map(|b| (normalize_key(b.code()), *b))
        .collect()
});

/// Lowercase, drop whitespace, and fold the usual spellings of the shape
/// suffix so "4x1-1/2 square" and "4X1-1/2SQ" land on the same entry.
fn normalize_key(key: &str) -> String {
    key.to_lowercase()
        .replace(char::is_whitespace, "")
        .replace("square", "sq")
        .replace("octagon", "oct")
        .replace("round/oct", "oct")
        .replace("round", "oct")
}

impl BoxType {
    /// All box types for UI selection
    pub const ALL: [BoxType; 13] = [
        BoxType::Round4x1_1_4,
        BoxType::Round4x1_1_2,
        BoxType::Round4x2_1_8,
        BoxType::Square4x1_1_4,
        BoxType::Square4x1_1_2,
        BoxType::Square4x2_1_8,
        BoxType::Square411x1_1_4,
        BoxType::Square411x1_1_2,
        BoxType::Square411x2_1_8,
        BoxType::Device3x2x2,
        BoxType::Device3x2x2_1_2,
        BoxType::Device3x2x2_3_4,
        BoxType::Device3x2x3_1_2,
    ];

    /// Table key (e.g., "4x1-1/2 Sq")
    pub fn code(&self) -> &'static str {
        match self {
            BoxType::Round4x1_1_4 => "4x1-1/4 Round/Oct",
            BoxType::Round4x1_1_2 => "4x1-1/2 Round/Oct",
            BoxType::Round4x2_1_8 => "4x2-1/8 Round/Oct",
            BoxType::Square4x1_1_4 => "4x1-1/4 Sq",
            BoxType::Square4x1_1_2 => "4x1-1/2 Sq",
            BoxType::Square4x2_1_8 => "4x2-1/8 Sq",
            BoxType::Square411x1_1_4 => "4-11/16x1-1/4 Sq",
            BoxType::Square411x1_1_2 => "4-11/16x1-1/2 Sq",
            BoxType::Square411x2_1_8 => "4-11/16x2-1/8 Sq",
            BoxType::Device3x2x2 => "3x2x2 Device",
            BoxType::Device3x2x2_1_2 => "3x2x2-1/2 Device",
            BoxType::Device3x2x2_3_4 => "3x2x2-3/4 Device",
            BoxType::Device3x2x3_1_2 => "3x2x3-1/2 Device",
        }
    }

    /// Rated box volume
    pub fn capacity(&self) -> CuIn {
        let volume = match self {
            BoxType::Round4x1_1_4 => 12.5,
            BoxType::Round4x1_1_2 => 15.5,
            BoxType::Round4x2_1_8 => 21.5,
            BoxType::Square4x1_1_4 => 18.0,
            BoxType::Square4x1_1_2 => 21.0,
            BoxType::Square4x2_1_8 => 30.3,
            BoxType::Square411x1_1_4 => 25.5,
            BoxType::Square411x1_1_2 => 29.5,
            BoxType::Square411x2_1_8 => 42.0,
            BoxType::Device3x2x2 => 10.0,
            BoxType::Device3x2x2_1_2 => 12.5,
            BoxType::Device3x2x2_3_4 => 14.0,
            BoxType::Device3x2x3_1_2 => 18.0,
        };
        CuIn(volume)
    }

    /// Resolve a box description to a box type
    pub fn from_key(s: &str) -> CalcResult<Self> {
        BOX_KEY_INDEX
            .get(&normalize_key(s))
            .copied()
            .ok_or_else(|| CalcError::unknown_key("box type", s))
    }
}

impl std::fmt::Display for BoxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
