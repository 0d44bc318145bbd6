//! # Engine Settings
//!
//! The few knobs the engine exposes: drawing layout constants, advisory
//! thresholds, defensive angle clamping and the conduit fill rule. Settings
//! are plain data; every engine function takes the part it needs by
//! reference, so there is no global configuration state.
//!
//! Settings files may be TOML or JSON, chosen by extension. Missing fields
//! fall back to their defaults.
//!
//! ## Example
//!
//! ```rust
//! use bend_core::settings::EngineSettings;
//!
//! let settings = EngineSettings::from_toml_str(r#"
//!     [advisory]
//!     max_travel_in = 96.0
//! "#).unwrap();
//!
//! assert_eq!(settings.advisory.max_travel_in, 96.0);
//! assert_eq!(settings.advisory.max_bender_height_in, 22.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculations::conduit_fill::FillRule;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Feet, Inches};

/// Root settings container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineSettings {
    /// Which maximum fill percentage applies to a conduit
    pub fill_rule: FillRule,

    /// Layout constants for the geometry synthesizer
    pub geometry: GeometrySettings,

    /// Thresholds for bend warnings
    pub advisory: AdvisoryLimits,

    /// Defensive clamping of bend angles
    pub angles: AngleLimits,
}

impl EngineSettings {
    /// Create settings with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> CalcResult<Self> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| CalcError::serialization(format!("Invalid TOML settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to TOML text
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CalcError::serialization(format!("Failed to serialize settings: {}", e)))
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> CalcResult<Self> {
        let path_str = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", &path_str, e.to_string()))?;

        let settings: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| CalcError::serialization(format!("Invalid JSON settings: {}", e)))?,
            Some("toml") => return Self::from_toml_str(&content),
            _ => {
                return Err(CalcError::file_error(
                    "read",
                    &path_str,
                    "Settings file must be .json or .toml",
                ))
            }
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> CalcResult<()> {
        self.validate()?;
        let path_str = path.display().to_string();

        let content = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => self.to_toml_string()?,
            _ => {
                return Err(CalcError::file_error(
                    "write",
                    &path_str,
                    "Settings file must be .json or .toml",
                ))
            }
        };

        std::fs::write(path, content)
            .map_err(|e| CalcError::file_error("write", &path_str, e.to_string()))
    }

    /// Validate every section
    pub fn validate(&self) -> CalcResult<()> {
        self.geometry.validate()?;
        self.advisory.validate()?;
        self.angles.validate()
    }
}

/// Layout constants for drawing bends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometrySettings {
    /// Desired radius of the blend drawn at each polyline corner (in)
    pub corner_radius_in: f64,

    /// Centerline bend radius used to draw concentric bends (in)
    pub bend_radius_in: f64,

    /// Straight lead-in/lead-out drawn on either side of a bend, as a
    /// fraction of the bend's travel
    pub lead_ratio: f64,

    /// Fixed margin added around the bounding box of a drawing (in)
    pub viewport_padding_in: f64,

    /// Distance of dimension lines from the conduit, as a fraction of the
    /// drawing's largest extent
    pub dimension_offset_ratio: f64,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        GeometrySettings {
            corner_radius_in: 2.0,
            bend_radius_in: 6.0,
            lead_ratio: 0.5,
            viewport_padding_in: 4.0,
            dimension_offset_ratio: 0.08,
        }
    }
}

impl GeometrySettings {
    fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("geometry.corner_radius_in", self.corner_radius_in),
            ("geometry.bend_radius_in", self.bend_radius_in),
            ("geometry.lead_ratio", self.lead_ratio),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_settings(format!("{} must be positive (got {})", name, value)));
            }
        }
        let non_negative = [
            ("geometry.viewport_padding_in", self.viewport_padding_in),
            ("geometry.dimension_offset_ratio", self.dimension_offset_ratio),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_settings(format!("{} cannot be negative (got {})", name, value)));
            }
        }
        Ok(())
    }
}

/// Thresholds for [`bend_warnings`](crate::advisory::bend_warnings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryLimits {
    /// Longest travel that fits on one stick of conduit (in)
    pub max_travel_in: f64,

    /// Tallest offset a floor bender can clear (in)
    pub max_bender_height_in: f64,
}

impl Default for AdvisoryLimits {
    fn default() -> Self {
        // A 10 ft stick less 10" of working room at the ends
        let stick: Inches = Feet(10.0).into();
        AdvisoryLimits {
            max_travel_in: stick.value() - 10.0,
            max_bender_height_in: 22.0,
        }
    }
}

impl AdvisoryLimits {
    fn validate(&self) -> CalcResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.max_travel_in) || !positive(self.max_bender_height_in) {
            return Err(CalcError::invalid_settings("Advisory limits must be positive"));
        }
        Ok(())
    }
}

/// Defensive clamping of bend angles before they reach the trigonometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleLimits {
    /// Clamp out-of-range angles instead of rejecting them
    pub clamp: bool,

    /// Smallest angle a clamp produces (degrees)
    pub min_deg: f64,

    /// Largest angle a clamp produces (degrees)
    pub max_deg: f64,
}

impl Default for AngleLimits {
    fn default() -> Self {
        AngleLimits {
            clamp: false,
            min_deg: 1.0,
            max_deg: 179.0,
        }
    }
}

impl AngleLimits {
    fn validate(&self) -> CalcResult<()> {
        let ordered = self.min_deg > 0.0 && self.min_deg < self.max_deg && self.max_deg < 180.0;
        if !ordered {
            return Err(CalcError::invalid_settings(format!(
                "Angle limits must satisfy 0 < min < max < 180 (got {}..{})",
                self.min_deg, self.max_deg
            )));
        }
        Ok(())
    }
}
