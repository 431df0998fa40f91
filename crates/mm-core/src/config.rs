//! Mapper configuration.
//!
//! Every field has a default matching the stock look (20 px grid over a
//! 2000×2000 playground, black dots, 5 px black branches). Partial configs
//! deserialize with the remaining fields defaulted.

use crate::error::{MapError, Result};
use crate::style::{Color, IdeaStyle};
use crate::viewport::Playground;
use serde::{Deserialize, Serialize};

/// Upper bound on lattice points (columns × rows) a config may ask for.
pub const MAX_GRID_POINTS: i64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Spacing between grid points. Must be positive.
    pub grid_size: i32,
    pub playground_width: i32,
    pub playground_height: i32,
    pub grid_color: Color,
    /// Stroke color of the snap marker drawn around the nearest grid point.
    pub snap_color: Color,
    /// Side length of the snap marker square.
    pub snap_marker: i32,
    pub branch_weight: f64,
    pub branch_color: Color,
    /// Style given to ideas created without one.
    pub idea_style: IdeaStyle,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            playground_width: 2000,
            playground_height: 2000,
            grid_color: Color::BLACK,
            snap_color: Color::rgb(0xcc, 0xcc, 0xcc),
            snap_marker: 10,
            branch_weight: 5.0,
            branch_color: Color::BLACK,
            idea_style: IdeaStyle::default(),
        }
    }
}

impl MapperConfig {
    pub fn playground(&self) -> Playground {
        Playground {
            width: self.playground_width,
            height: self.playground_height,
        }
    }

    /// Reject values the grid and routing code cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size <= 0 {
            return Err(MapError::InvalidConfig(format!(
                "grid_size must be positive, got {}",
                self.grid_size
            )));
        }
        if self.playground_width <= 0 || self.playground_height <= 0 {
            return Err(MapError::InvalidConfig(format!(
                "playground must have positive extent, got {}x{}",
                self.playground_width, self.playground_height
            )));
        }
        let size = self.grid_size as i64;
        let cells = |extent: i32| (extent as i64 + size - 1) / size;
        let points = cells(self.playground_width) * cells(self.playground_height);
        if points > MAX_GRID_POINTS {
            return Err(MapError::InvalidConfig(format!(
                "{}x{} playground at grid_size {} needs {points} grid points, limit is {MAX_GRID_POINTS}",
                self.playground_width, self.playground_height, self.grid_size
            )));
        }
        if self.snap_marker < 0 {
            return Err(MapError::InvalidConfig("snap_marker must not be negative".into()));
        }
        if !self.branch_weight.is_finite() || self.branch_weight < 0.0 {
            return Err(MapError::InvalidConfig(format!(
                "branch_weight must be a non-negative number, got {}",
                self.branch_weight
            )));
        }
        if !self.idea_style.padding.is_finite() || self.idea_style.padding < 0.0 {
            return Err(MapError::InvalidConfig("idea padding must not be negative".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = MapperConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.playground(), Playground::default());
    }

    #[test]
    fn rejects_zero_grid() {
        let cfg = MapperConfig {
            grid_size: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(MapError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_oversized_lattice() {
        let cfg = MapperConfig {
            grid_size: 1,
            playground_width: 2_000_000_000,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(MapError::InvalidConfig(_))));

        // 1000 × 1000 points is still allowed.
        let cfg = MapperConfig {
            grid_size: 2,
            playground_width: 2000,
            playground_height: 2000,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_negative_weight() {
        let cfg = MapperConfig {
            branch_weight: -1.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
