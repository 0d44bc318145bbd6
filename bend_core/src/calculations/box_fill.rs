//! # Box Fill Calculation
//!
//! Sums the volume allowances of what goes into an outlet or device box
//! and compares the total against the box's rated capacity.
//!
//! ## Allowances
//!
//! | Item              | Volume each |
//! |-------------------|-------------|
//! | #14 conductor     | 2.00 in³    |
//! | #12 conductor     | 2.25 in³    |
//! | Device (yoke)     | 4.50 in³    |
//!
//! The device allowance is a fixed 4.5 in³ per yoke rather than twice the
//! largest connected conductor. Changing it would change verdicts, so it
//! stays fixed.
//!
//! ## Example
//!
//! ```rust
//! use bend_core::calculations::box_fill::{box_fill, BoxFillInput};
//!
//! let input = BoxFillInput {
//!     box_type: "4x1-1/2 Sq".to_string(),
//!     count_14: 2,
//!     count_12: 4,
//!     device_count: 1,
//! };
//!
//! let result = box_fill(&input).unwrap();
//! assert_eq!(result.volume_used_in3, 17.5);
//! assert!(result.compliant);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::tables::BoxType;

/// Volume allowance per #14 conductor (in³)
pub const VOLUME_PER_14_AWG: f64 = 2.0;

/// Volume allowance per #12 conductor (in³)
pub const VOLUME_PER_12_AWG: f64 = 2.25;

/// Volume allowance per device yoke (in³)
pub const VOLUME_PER_DEVICE: f64 = 4.5;

/// Input parameters for a box fill check.
///
/// ## JSON Example
///
/// ```json
/// { "box_type": "4x1-1/2 Sq", "count_14": 2, "count_12": 4, "device_count": 1 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxFillInput {
    /// Box description (e.g., "4x1-1/2 Sq", "3x2x2-1/2 Device")
    pub box_type: String,

    /// Number of #14 conductors
    pub count_14: u32,

    /// Number of #12 conductors
    pub count_12: u32,

    /// Number of devices (yokes)
    pub device_count: u32,
}

/// Volume used by each category (in³)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxFillBreakdown {
    pub conductors_14_in3: f64,
    pub conductors_12_in3: f64,
    pub devices_in3: f64,
}

/// Results from a box fill check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxFillResult {
    /// Resolved box type
    pub box_type: BoxType,
    /// Total allowance volume (in³)
    pub volume_used_in3: f64,
    /// Rated box volume (in³)
    pub capacity_in3: f64,
    /// capacity − used; negative when over (in³)
    pub remaining_in3: f64,
    /// Per-category volumes
    pub breakdown: BoxFillBreakdown,
    /// volume_used ≤ capacity
    pub compliant: bool,
}

impl BoxFillResult {
    /// Check if the fill passes
    pub fn passes(&self) -> bool {
        self.compliant
    }
}

/// Check a box fill.
///
/// # Returns
///
/// * `Ok(BoxFillResult)` - Volume, capacity and verdict
/// * `Err(CalcError::UnknownLookupKey)` - Box description not in the table
pub fn box_fill(input: &BoxFillInput) -> CalcResult<BoxFillResult> {
    let box_type = BoxType::from_key(&input.box_type).inspect_err(|e| {
        tracing::warn!(error = %e, "box type lookup failed");
    })?;
    let capacity = box_type.capacity().value();

    let breakdown = BoxFillBreakdown {
        conductors_14_in3: input.count_14 as f64 * VOLUME_PER_14_AWG,
        conductors_12_in3: input.count_12 as f64 * VOLUME_PER_12_AWG,
        devices_in3: input.device_count as f64 * VOLUME_PER_DEVICE,
    };
    let volume_used = breakdown.conductors_14_in3 + breakdown.conductors_12_in3 + breakdown.devices_in3;
    let compliant = volume_used <= capacity;

    tracing::debug!(box_type = %box_type, volume_used, capacity, compliant, "box fill computed");

    Ok(BoxFillResult {
        box_type,
        volume_used_in3: volume_used,
        capacity_in3: capacity,
        remaining_in3: capacity - volume_used,
        breakdown,
        compliant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_four_square_with_one_device() {
        let input = BoxFillInput {
            box_type: "4x1-1/2 Sq".to_string(),
            count_14: 2,
            count_12: 4,
            device_count: 1,
        };
        let result = box_fill(&input).unwrap();
        assert_eq!(result.breakdown.conductors_14_in3, 4.0);
        assert_eq!(result.breakdown.conductors_12_in3, 9.0);
        assert_eq!(result.breakdown.devices_in3, 4.5);
        assert_eq!(result.volume_used_in3, 17.5);
        assert_eq!(result.capacity_in3, 21.0);
        assert_eq!(result.remaining_in3, 3.5);
        assert!(result.passes());
    }

    #[test]
    fn test_exactly_full_is_compliant() {
        // 3x2x2 device box is 10.0 in³; five #14s fill it exactly
        let input = BoxFillInput {
            box_type: "3x2x2 Device".to_string(),
            count_14: 5,
            count_12: 0,
            device_count: 0,
        };
        let result = box_fill(&input).unwrap();
        assert_eq!(result.volume_used_in3, 10.0);
        assert!(result.compliant);
    }

    #[test]
    fn test_over_capacity() {
        let input = BoxFillInput {
            box_type: "4x1-1/4 Round/Oct".to_string(),
            count_14: 0,
            count_12: 4,
            device_count: 1,
        };
        // 9.0 + 4.5 = 13.5 > 12.5
        let result = box_fill(&input).unwrap();
        assert!(!result.compliant);
        assert_eq!(result.remaining_in3, -1.0);
    }

    #[test]
    fn test_unknown_box_is_error() {
        let input = BoxFillInput {
            box_type: "6x6 Junction".to_string(),
            count_14: 1,
            count_12: 0,
            device_count: 0,
        };
        assert_eq!(box_fill(&input).unwrap_err().error_code(), "UNKNOWN_LOOKUP_KEY");
    }

    proptest! {
        #[test]
        fn prop_volume_is_exact_linear_combination(
            c14 in 0u32..40,
            c12 in 0u32..40,
            dev in 0u32..6,
        ) {
            let input = BoxFillInput {
                box_type: "4-11/16x2-1/8 Sq".to_string(),
                count_14: c14,
                count_12: c12,
                device_count: dev,
            };
            let result = box_fill(&input).unwrap();
            let expected = 2.0 * c14 as f64 + 2.25 * c12 as f64 + 4.5 * dev as f64;
            // Quarter-inch multiples are exact in binary floating point
            prop_assert_eq!(result.volume_used_in3, expected);
            prop_assert_eq!(result.compliant, expected <= 42.0);
        }
    }
}
