//! # Reference Tables
//!
//! Static reference data keyed by trade designations. Every table is an
//! explicit enumeration; string keys from the outside world are resolved
//! with `from_key`, which fails with [`CalcError::UnknownLookupKey`]
//! instead of falling back to a default.
//!
//! - [`wire`] - THHN conductor areas by gauge
//! - [`conduit`] - Conduit internal areas by type and trade size, springback factors
//! - [`boxes`] - Outlet and device box capacities
//!
//! ## Example
//!
//! ```rust
//! use bend_core::tables::{ConduitType, TradeSize, WireGauge};
//!
//! let size = TradeSize::from_key("3/4").unwrap();
//! let area = ConduitType::Emt.internal_area(size).unwrap();
//! assert_eq!(area.0, 0.533);
//! assert_eq!(WireGauge::Awg12.thhn_area().0, 0.0133);
//! ```
//!
//! [`CalcError::UnknownLookupKey`]: crate::errors::CalcError::UnknownLookupKey

pub mod boxes;
pub mod conduit;
pub mod wire;

pub use boxes::BoxType;
pub use conduit::{ConduitType, TradeSize};
pub use wire::WireGauge;
