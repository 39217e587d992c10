//! Grid extents and the edge policies that keep positions inside them.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::MissionError;

/// Clamps `value` into the inclusive range `[low, high]`.
pub fn clamp<T: PartialOrd>(value: T, low: T, high: T) -> T {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// The bounded field a fleet operates on. Cells span `[0, width) x [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridSize")]
pub struct Grid {
    width: i32,
    height: i32,
}

/// Unchecked wire form of a [`Grid`]; deserialization goes through [`Grid::new`].
#[derive(Deserialize)]
struct GridSize {
    width: i32,
    height: i32,
}

impl TryFrom<GridSize> for Grid {
    type Error = MissionError;

    fn try_from(size: GridSize) -> Result<Self, Self::Error> {
        Self::new(size.width, size.height)
    }
}

impl Grid {
    /// Creates a grid, rejecting non-positive dimensions.
    pub fn new(width: i32, height: i32) -> Result<Self, MissionError> {
        if width <= 0 || height <= 0 {
            return Err(MissionError::Space { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, position: IVec2) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    /// Number of cells on the grid.
    pub fn cell_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Largest valid cell coordinate on each axis.
    pub fn max_cell(&self) -> IVec2 {
        IVec2::new(self.width - 1, self.height - 1)
    }
}

/// Maps a candidate position back onto the grid after every move.
///
/// Implementations must return a position for which [`Grid::contains`] holds.
pub trait EdgePolicy {
    fn apply(&self, grid: &Grid, target: IVec2) -> IVec2;
}

/// Stops at the wall: each axis is clamped independently.
#[derive(Clone, Copy, Debug, Default)]
pub struct Clamp;

impl EdgePolicy for Clamp {
    fn apply(&self, grid: &Grid, target: IVec2) -> IVec2 {
        let max = grid.max_cell();
        IVec2::new(clamp(target.x, 0, max.x), clamp(target.y, 0, max.y))
    }
}

/// Toroidal field: leaving one edge re-enters from the opposite one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Wrap;

impl EdgePolicy for Wrap {
    fn apply(&self, grid: &Grid, target: IVec2) -> IVec2 {
        IVec2::new(
            target.x.rem_euclid(grid.width),
            target.y.rem_euclid(grid.height),
        )
    }
}

/// Serializable selector for the built-in policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    #[default]
    Clamp,
    Wrap,
}

impl EdgePolicy for EdgeMode {
    fn apply(&self, grid: &Grid, target: IVec2) -> IVec2 {
        match self {
            Self::Clamp => Clamp.apply(grid, target),
            Self::Wrap => Wrap.apply(grid, target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_is_inclusive() {
        assert_eq!(clamp(-3, 0, 9), 0);
        assert_eq!(clamp(12, 0, 9), 9);
        assert_eq!(clamp(9, 0, 9), 9);
        assert_eq!(clamp(4, 0, 9), 4);
    }

    #[test]
    fn degenerate_grid_is_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(MissionError::Space {
                width: 0,
                height: 5
            })
        );
        assert!(Grid::new(3, -1).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn deserialized_grid_is_validated() {
        assert!(serde_json::from_str::<Grid>(r#"{"width":0,"height":5}"#).is_err());
        assert!(serde_json::from_str::<Grid>(r#"{"width":4,"height":-3}"#).is_err());
        let grid: Grid = serde_json::from_str(r#"{"width":4,"height":3}"#).unwrap();
        assert_eq!(grid, Grid::new(4, 3).unwrap());
        assert_eq!(grid.cell_count(), 12);
    }

    #[test]
    fn clamp_policy_stops_at_wall() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(Clamp.apply(&grid, IVec2::new(-1, 3)), IVec2::new(0, 2));
        assert_eq!(Clamp.apply(&grid, IVec2::new(2, 1)), IVec2::new(2, 1));
    }

    #[test]
    fn wrap_policy_reenters_opposite_edge() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(Wrap.apply(&grid, IVec2::new(-1, 3)), IVec2::new(3, 0));
        assert_eq!(EdgeMode::Wrap.apply(&grid, IVec2::new(4, -1)), IVec2::new(0, 2));
    }
}
