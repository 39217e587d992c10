//! # rover-fleet
//!
//! A fleet of rovers on a bounded integer grid, steered by strings over the
//! `M` (move), `L` (turn left) and `R` (turn right) command alphabet.
//!
//! A [`Fleet`] owns the grid and its rovers. Rovers are deployed at validated
//! poses and addressed by their deployment index. Every move is kept inside
//! the grid by the configured [`EdgePolicy`], and the whole field can be
//! drawn as a text map with [`Fleet::render`].

pub mod bounds;
pub mod config;
pub mod error;
pub mod fleet;
pub mod interpreter;
pub mod orientation;
pub mod playground;
pub mod render;
pub mod rover;
pub mod scenario;

pub use bounds::*;
pub use config::*;
pub use error::{Error, ErrorKind, MissionError};
pub use fleet::*;
pub use interpreter::*;
pub use orientation::*;
pub use render::*;
pub use rover::*;
pub use scenario::*;
