//! Configuration for U-Matrix rendering.

use crate::error::{Result, UMatrixError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do with a unit that has no grid neighbor besides itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IsolatedUnitPolicy {
    /// Treat the unit as maximally dissimilar (intensity 0).
    #[default]
    MaxDissimilarity,
    /// Fail the render with a degenerate input error.
    Reject,
}

/// Layout and neighborhood parameters for the U-Matrix pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UMatrixConfig {
    /// Linear scale from grid coordinates to canvas units.
    /// Default: 20.0.
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Margin added around the scaled grid.
    /// Default: 10.0.
    #[serde(default = "default_offset")]
    pub offset: f64,

    /// Grid-space radius under which two units count as neighbors.
    ///
    /// Assumes unit spacing between adjacent grid positions. The default
    /// picks up the 8 surrounding units on a rectangular grid and the 6
    /// surrounding units on a hexagonal one.
    /// Default: sqrt(2) * 1.01.
    #[serde(default = "default_neighbor_radius")]
    pub neighbor_radius: f64,

    /// Handling of units without grid neighbors.
    /// Default: MaxDissimilarity.
    #[serde(default)]
    pub isolated_unit_policy: IsolatedUnitPolicy,

    /// Run the distance matrices and the per-unit aggregation on the
    /// rayon thread pool. When false everything runs on the calling thread.
    /// Default: true.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_scale() -> f64 {
    20.0
}

fn default_offset() -> f64 {
    10.0
}

fn default_neighbor_radius() -> f64 {
    std::f64::consts::SQRT_2 * 1.01
}

fn default_parallel() -> bool {
    true
}

impl Default for UMatrixConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            offset: default_offset(),
            neighbor_radius: default_neighbor_radius(),
            isolated_unit_policy: IsolatedUnitPolicy::default(),
            parallel: default_parallel(),
        }
    }
}

impl UMatrixConfig {
    /// Load configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that all values are usable for rendering.
    pub fn validate(&self) -> Result<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(UMatrixError::Config(format!(
                "scale must be positive and finite, got {}",
                self.scale
            )));
        }
        if !(self.offset.is_finite() && self.offset >= 0.0) {
            return Err(UMatrixError::Config(format!(
                "offset must be non-negative and finite, got {}",
                self.offset
            )));
        }
        if !(self.neighbor_radius.is_finite() && self.neighbor_radius > 0.0) {
            return Err(UMatrixError::Config(format!(
                "neighbor_radius must be positive and finite, got {}",
                self.neighbor_radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = UMatrixConfig::default();
        assert_eq!(config.scale, 20.0);
        assert_eq!(config.offset, 10.0);
        assert!((config.neighbor_radius - 1.428355).abs() < 1e-6);
        assert_eq!(config.isolated_unit_policy, IsolatedUnitPolicy::MaxDissimilarity);
        assert!(config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = UMatrixConfig {
            scale: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(UMatrixError::Config(_))));

        let config = UMatrixConfig {
            offset: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = UMatrixConfig {
            neighbor_radius: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"scale": 40.0, "isolated_unit_policy": "reject"}}"#).unwrap();

        let config = UMatrixConfig::from_file(file.path()).unwrap();
        assert_eq!(config.scale, 40.0);
        assert_eq!(config.offset, 10.0);
        assert_eq!(config.isolated_unit_policy, IsolatedUnitPolicy::Reject);
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"scale": -2.0}}"#).unwrap();
        assert!(matches!(
            UMatrixConfig::from_file(file.path()),
            Err(UMatrixError::Config(_))
        ));
    }
}
