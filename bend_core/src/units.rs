//! # Unit Types
//!
//! Type-safe wrappers for the reference-table quantities and stick lengths.
//! They are plain `f64` newtypes that serialize as bare numbers. Bend angles
//! stay as `f64` degrees throughout the engine.
//!
//! ## Units
//!
//! - Length: inches (in), feet (ft) for stick lengths
//! - Area: square inches (conductor and conduit cross-sections)
//! - Volume: cubic inches (box fill)
//!
//! ## Example
//!
//! ```rust
//! use bend_core::units::{Feet, Inches};
//!
//! let stick: Inches = Feet(10.0).into();
//! assert_eq!(stick.value(), 120.0);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

// ============================================================================
// Area and Volume Units
// ============================================================================

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

/// Volume in cubic inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuIn(pub f64);

macro_rules! impl_value {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_value!(Inches);
impl_value!(SqIn);
impl_value!(CuIn);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_to_inches() {
        let inches: Inches = Feet(10.0).into();
        assert_eq!(inches.value(), 120.0);
    }

    #[test]
    fn test_serialization() {
        let area = SqIn(0.533);
        let json = serde_json::to_string(&area).unwrap();
        assert_eq!(json, "0.533");

        let roundtrip: SqIn = serde_json::from_str(&json).unwrap();
        assert_eq!(area, roundtrip);

        let volume: CuIn = serde_json::from_str("21.0").unwrap();
        assert_eq!(volume.value(), 21.0);
    }
}
