//! Rover state and the primitive operations it understands.

use crate::bounds::{EdgePolicy, Grid};
use crate::orientation::Orientation;
use glam::IVec2;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rover's pose as reported to callers: `(orientation, x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub orientation: Orientation,
    pub x: i32,
    pub y: i32,
}

impl Location {
    /// Tuple form with the orientation index first.
    pub fn as_tuple(&self) -> (u8, i32, i32) {
        (self.orientation.index(), self.x, self.y)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.orientation.letter())
    }
}

/// A single agent on the grid.
///
/// The rover holds no reference to its fleet. Movement takes the grid and
/// edge policy as arguments, so the fleet stays the sole owner of both.
#[derive(Clone, Debug)]
pub struct Rover {
    /// Optional display name.
    pub name: Option<String>,

    position: IVec2,

    orientation: Orientation,
}

impl Rover {
    /// Creates a rover at `position`. The caller is responsible for having
    /// validated the position against its grid.
    pub(crate) fn new(orientation: Orientation, position: IVec2, name: Option<String>) -> Self {
        Self {
            name,
            position,
            orientation,
        }
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn turn_left(&mut self) {
        self.orientation = self.orientation.left();
    }

    pub fn turn_right(&mut self) {
        self.orientation = self.orientation.right();
    }

    /// Advances one cell along the current heading.
    ///
    /// The target is mapped back onto `grid` by `policy`. If that lands on the
    /// current cell the rover stays put and `false` is returned.
    pub fn move_forward(&mut self, grid: &Grid, policy: &dyn EdgePolicy) -> bool {
        let target = policy.apply(grid, self.position + self.orientation.unit_vector());
        if target == self.position {
            debug!("move blocked at {} facing {}", self.position, self.orientation);
            return false;
        }
        self.position = target;
        true
    }

    pub fn location(&self) -> Location {
        Location {
            orientation: self.orientation,
            x: self.position.x,
            y: self.position.y,
        }
    }

    /// Applies a single primitive operation.
    pub fn apply(&mut self, op: RoverOp, grid: &Grid, policy: &dyn EdgePolicy) {
        match op {
            RoverOp::Move => {
                self.move_forward(grid, policy);
            }
            RoverOp::TurnLeft => self.turn_left(),
            RoverOp::TurnRight => self.turn_right(),
            RoverOp::Ignore => {}
        }
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name}: ")?;
        }
        write!(
            f,
            "{} @ ({}, {})",
            self.orientation, self.position.x, self.position.y
        )
    }
}

/// Operations a rover can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoverOp {
    /// Step forward one cell (`M`).
    Move,
    /// Quarter turn counter-clockwise (`L`).
    TurnLeft,
    /// Quarter turn clockwise (`R`).
    TurnRight,
    /// No-op. Symbol has no registered meaning.
    Ignore,
}
