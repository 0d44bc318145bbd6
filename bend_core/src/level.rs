//! # Digital Level
//!
//! Compares a measured conduit tilt against the angle being bent to.
//!
//! The sensor itself lives outside the engine. Front-ends implement
//! [`TiltSource`] over whatever feeds them orientation events and hand the
//! latest reading to [`level_status`].

use serde::{Deserialize, Serialize};

/// Default tolerance for calling a bend on target (degrees)
pub const DEFAULT_TOLERANCE_DEG: f64 = 0.5;

/// Anything that can report the conduit's current tilt.
///
/// Readings are snapshots; the most recent one wins. `None` means no
/// reading has arrived yet.
pub trait TiltSource {
    fn latest_tilt_deg(&self) -> Option<f64>;
}

/// A source that always reports the same reading
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedTilt(pub Option<f64>);

impl TiltSource for FixedTilt {
    fn latest_tilt_deg(&self) -> Option<f64> {
        self.0
    }
}

/// Where a bend stands relative to its target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum LevelStatus {
    /// Keep bending
    UnderBent { remaining_deg: f64 },
    /// Within tolerance
    OnTarget,
    /// Went past the target
    OverBent { excess_deg: f64 },
}

impl LevelStatus {
    pub fn is_on_target(&self) -> bool {
        matches!(self, LevelStatus::OnTarget)
    }
}

/// Compare a tilt reading against a target angle.
///
/// Only the magnitude of the tilt matters; a level held upside down reads
/// the same bend.
pub fn level_status(tilt_deg: f64, target_deg: f64, tolerance_deg: f64) -> LevelStatus {
    let diff = tilt_deg.abs() - target_deg;
    if diff.abs() <= tolerance_deg {
        LevelStatus::OnTarget
    } else if diff < 0.0 {
        LevelStatus::UnderBent { remaining_deg: -diff }
    } else {
        LevelStatus::OverBent { excess_deg: diff }
    }
}

/// Read a source and compare, if it has a reading
pub fn read_level<S: TiltSource + ?Sized>(
    source: &S,
    target_deg: f64,
    tolerance_deg: f64,
) -> Option<LevelStatus> {
    source
        .latest_tilt_deg()
        .map(|tilt| level_status(tilt, target_deg, tolerance_deg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_on_over() {
        assert_eq!(level_status(20.0, 31.5, 0.5), LevelStatus::UnderBent { remaining_deg: 11.5 });
        assert!(level_status(31.2, 31.5, 0.5).is_on_target());
        assert!(level_status(32.0, 31.5, 0.5).is_on_target());
        assert_eq!(level_status(33.5, 31.5, 0.5), LevelStatus::OverBent { excess_deg: 2.0 });
    }

    #[test]
    fn test_negative_tilt_uses_magnitude() {
        assert!(level_status(-45.0, 45.0, DEFAULT_TOLERANCE_DEG).is_on_target());
    }

    #[test]
    fn test_read_level_without_reading() {
        assert_eq!(read_level(&FixedTilt(None), 30.0, 0.5), None);
        let status = read_level(&FixedTilt(Some(29.0)), 30.0, 0.5);
        assert_eq!(status, Some(LevelStatus::UnderBent { remaining_deg: 1.0 }));
    }

    #[test]
    fn test_dyn_source() {
        let source: Box<dyn TiltSource> = Box::new(FixedTilt(Some(30.0)));
        assert_eq!(read_level(source.as_ref(), 30.0, 0.5), Some(LevelStatus::OnTarget));
    }
}
