//! # Conduit Fill Calculation
//!
//! Checks whether a set of conductors fits in a conduit: total conductor
//! cross-section over the conduit's internal area, against a maximum fill
//! percentage.
//!
//! Exceeding the limit is a normal result (`compliant = false`), not an
//! error. An unknown conduit size is an error: there is no fallback area.
//!
//! ## Example
//!
//! ```rust
//! use bend_core::calculations::conduit_fill::{conduit_fill, ConductorGroup, ConduitFillInput};
//! use bend_core::tables::{ConduitType, WireGauge};
//!
//! let input = ConduitFillInput {
//!     conduit_type: ConduitType::Emt,
//!     conduit_size: "3/4".to_string(),
//!     conductors: vec![ConductorGroup { gauge: WireGauge::Awg12, count: 3 }],
//! };
//!
//! let result = conduit_fill(&input).unwrap();
//! assert!(result.compliant);
//! println!("{:.2}% fill", result.fill_percent);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::tables::{ConduitType, TradeSize, WireGauge};

/// Maximum fill for three or more conductors
pub const MAX_FILL_PERCENT: f64 = 40.0;

/// How the maximum fill percentage is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FillRule {
    /// 40% regardless of conductor count
    #[default]
    Flat,
    /// 53% for one conductor, 31% for two, 40% for three or more
    ConductorCount,
}

impl FillRule {
    /// Maximum fill percentage for the given number of conductors
    pub fn max_percent(&self, conductor_count: u32) -> f64 {
        match self {
            FillRule::Flat => MAX_FILL_PERCENT,
            FillRule::ConductorCount => match conductor_count {
                1 => 53.0,
                2 => 31.0,
                _ => MAX_FILL_PERCENT,
            },
        }
    }
}

/// A run of identical conductors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConductorGroup {
    /// Conductor size
    pub gauge: WireGauge,
    /// How many of them
    pub count: u32,
}

/// Input parameters for a conduit fill check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "conduit_type": "EMT",
///   "conduit_size": "3/4",
///   "conductors": [
///     { "gauge": "12", "count": 3 },
///     { "gauge": "10", "count": 1 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConduitFillInput {
    /// Raceway type
    pub conduit_type: ConduitType,

    /// Trade size key (e.g., "3/4", "1-1/4")
    pub conduit_size: String,

    /// Conductors, one entry per gauge
    pub conductors: Vec<ConductorGroup>,
}

impl ConduitFillInput {
    /// Validate input parameters.
    ///
    /// Each gauge may appear once; counts of the same gauge belong in one
    /// group.
    pub fn validate(&self) -> CalcResult<()> {
        let mut seen = HashSet::new();
        for group in &self.conductors {
            if !seen.insert(group.gauge) {
                return Err(CalcError::invalid_input(
                    "conductors",
                    group.gauge.to_string(),
                    "Gauge listed more than once",
                ));
            }
        }
        Ok(())
    }

    /// Resolve the trade size key
    pub fn trade_size(&self) -> CalcResult<TradeSize> {
        TradeSize::from_key(&self.conduit_size)
    }

    /// Total number of conductors
    pub fn conductor_count(&self) -> u32 {
        self.conductors.iter().map(|g| g.count).sum()
    }
}

/// Results from a conduit fill check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConduitFillResult {
    /// Sum of conductor areas (in²)
    pub total_conductor_area_in2: f64,
    /// Conduit internal area (in²)
    pub conduit_internal_area_in2: f64,
    /// total / internal × 100
    pub fill_percent: f64,
    /// Applicable limit (%)
    pub max_allowed_percent: f64,
    /// Area the limit allows (in²)
    pub allowed_area_in2: f64,
    /// allowed − total; negative when over (in²)
    pub remaining_area_in2: f64,
    /// Number of conductors counted
    pub conductor_count: u32,
    /// fill_percent ≤ max_allowed_percent
    pub compliant: bool,
}

impl ConduitFillResult {
    /// Check if the fill passes
    pub fn passes(&self) -> bool {
        self.compliant
    }
}

/// Conduit fill with the flat 40% limit.
pub fn conduit_fill(input: &ConduitFillInput) -> CalcResult<ConduitFillResult> {
    conduit_fill_with_rule(input, FillRule::Flat)
}

/// Conduit fill with an explicit limit rule.
///
/// # Returns
///
/// * `Ok(ConduitFillResult)` - Fill and verdict
/// * `Err(CalcError::UnknownLookupKey)` - Size key unknown, or the type is
///   not made in that size
/// * `Err(CalcError::InvalidInput)` - A gauge listed twice
pub fn conduit_fill_with_rule(input: &ConduitFillInput, rule: FillRule) -> CalcResult<ConduitFillResult> {
    input.validate()?;

    let size = input.trade_size().inspect_err(|e| {
        tracing::warn!(error = %e, "conduit size lookup failed");
    })?;
    let internal_area = input.conduit_type.internal_area(size)?.value();

    let total_area: f64 = input
        .conductors
        .iter()
        .map(|g| g.gauge.thhn_area().value() * g.count as f64)
        .sum();

    let conductor_count = input.conductor_count();
    let max_allowed_percent = rule.max_percent(conductor_count);
    let fill_percent = total_area / internal_area * 100.0;
    let allowed_area = internal_area * max_allowed_percent / 100.0;
    let compliant = fill_percent <= max_allowed_percent;

    tracing::debug!(
        conduit = %input.conduit_type,
        size = %size,
        fill_percent,
        compliant,
        "conduit fill computed"
    );

    Ok(ConduitFillResult {
        total_conductor_area_in2: total_area,
        conduit_internal_area_in2: internal_area,
        fill_percent,
        max_allowed_percent,
        allowed_area_in2: allowed_area,
        remaining_area_in2: allowed_area - total_area,
        conductor_count,
        compliant,
    })
}
