//! # bend_core - Conduit Bending & Fill Engine
//!
//! `bend_core` turns a handful of field measurements into the numbers an
//! electrician needs at the bender and the panel: bend marks and shrinkage,
//! conduit and box fill verdicts, and drawable geometry of the finished
//! bend. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions, recomputed on every parameter change
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Typed Tables**: Unknown sizes and box types are errors, never defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use bend_core::calculations::bend::{compute_bend, BendSpec};
//! use bend_core::geometry::synthesize;
//! use bend_core::settings::EngineSettings;
//!
//! let spec = BendSpec::Offset { height_in: 10.0, angle_deg: 30.0 };
//! let result = compute_bend(&spec).unwrap();
//! let drawing = synthesize(&spec, &EngineSettings::default().geometry).unwrap();
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("\"kind\": \"Offset\""));
//! assert_eq!(drawing.centerline.len(), 4);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Bend measurements, conduit fill and box fill
//! - [`advisory`] - Suggested angles, springback targets and warnings
//! - [`geometry`] - Drawing data for bends
//! - [`level`] - Digital level comparison
//! - [`tables`] - Wire, conduit and box reference data
//! - [`equations`] - The trigonometry behind the calculations
//! - [`settings`] - Engine configuration
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod advisory;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod geometry;
pub mod level;
pub mod settings;
pub mod tables;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput};
pub use errors::{CalcError, CalcResult};
pub use settings::EngineSettings;
