//! The fleet: grid ownership, rover deployment and validated dispatch.
//!
//! Every public operation validates its inputs before touching any rover,
//! so a rejected call never leaves the fleet half-modified.

use crate::bounds::Grid;
use crate::config::FleetConfig;
use crate::error::MissionError;
use crate::interpreter::CommandInterpreter;
use crate::orientation::Orientation;
use crate::render::FieldRenderer;
use crate::rover::{Location, Rover};
use glam::IVec2;
use log::{debug, info};
use std::fmt;

/// Public identifier of a rover: its position in deployment order.
pub type RoverId = usize;

/// A set of rovers sharing one bounded grid.
#[derive(Clone, Debug)]
pub struct Fleet {
    grid: Grid,
    rovers: Vec<Rover>,
    interpreter: CommandInterpreter,
    config: FleetConfig,
}

impl Fleet {
    /// Creates an empty fleet on a `width x height` grid with default settings.
    pub fn new(width: i32, height: i32) -> Result<Self, MissionError> {
        Self::with_config(width, height, FleetConfig::default())
    }

    pub fn with_config(width: i32, height: i32, config: FleetConfig) -> Result<Self, MissionError> {
        let grid = Grid::new(width, height)?;
        info!(
            "fleet created on {width}x{height} grid ({:?} edges)",
            config.edge_policy
        );
        Ok(Self {
            grid,
            rovers: Vec::new(),
            interpreter: CommandInterpreter::default(),
            config,
        })
    }

    /// Replaces the command interpreter (builder pattern).
    pub fn with_interpreter(mut self, interpreter: CommandInterpreter) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Deploys a rover from a raw orientation index (`0..4`, see [`Orientation`]).
    ///
    /// Returns the new rover's id, which equals the number of rovers deployed before it.
    pub fn deploy_rover(
        &mut self,
        orientation: i64,
        x: i32,
        y: i32,
        name: Option<&str>,
    ) -> Result<RoverId, MissionError> {
        let orientation = Orientation::try_from(orientation)?;
        self.deploy(orientation, IVec2::new(x, y), name.map(str::to_owned))
    }

    /// Deploys a rover with an already-typed orientation.
    pub fn deploy(
        &mut self,
        orientation: Orientation,
        position: IVec2,
        name: Option<String>,
    ) -> Result<RoverId, MissionError> {
        if !self.grid.contains(position) {
            return Err(MissionError::OutOfBounds {
                x: position.x,
                y: position.y,
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }

        let id = self.rovers.len();
        let rover = Rover::new(orientation, position, name);
        info!("deployed rover {id}: {rover}");
        self.rovers.push(rover);
        Ok(id)
    }

    /// Executes a command string on one rover.
    ///
    /// Characters other than the registered command symbols are dropped.
    /// Fails without side effects if the fleet is empty, `rover_id` is
    /// unknown, or nothing actionable is left after filtering.
    pub fn command(&mut self, rover_id: RoverId, commands: &str) -> Result<(), MissionError> {
        self.check_rover(rover_id)?;
        let ops = self.interpreter.translate(commands);
        if ops.is_empty() {
            return Err(MissionError::Communication(rover_id));
        }

        debug!("rover {rover_id} executing {} op(s)", ops.len());
        let rover = &mut self.rovers[rover_id];
        self.interpreter
            .execute(&ops, rover, &self.grid, &self.config.edge_policy);
        Ok(())
    }

    /// Turns one rover a single quarter step; counter-clockwise unless `clockwise`.
    pub fn turn(&mut self, rover_id: RoverId, clockwise: bool) -> Result<(), MissionError> {
        self.check_rover(rover_id)?;
        let rover = &mut self.rovers[rover_id];
        if clockwise {
            rover.turn_right();
        } else {
            rover.turn_left();
        }
        Ok(())
    }

    pub fn locate(&self, rover_id: RoverId) -> Result<Location, MissionError> {
        self.check_rover(rover_id)?;
        Ok(self.rovers[rover_id].location())
    }

    /// `(width, height)` of the grid.
    pub fn get_boundaries(&self) -> (i32, i32) {
        (self.grid.width(), self.grid.height())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// All rovers in deployment order.
    pub fn rovers(&self) -> &[Rover] {
        &self.rovers
    }

    pub fn len(&self) -> usize {
        self.rovers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rovers.is_empty()
    }

    /// Text map of the grid, see [`FieldRenderer`].
    pub fn render(&self) -> String {
        FieldRenderer::new(self.config.render.clone()).render(&self.grid, &self.rovers)
    }

    /// [`render`](Self::render) bounded by `render.max_cells` from the config.
    pub fn render_checked(&self) -> crate::error::Result<String> {
        FieldRenderer::new(self.config.render.clone()).render_checked(&self.grid, &self.rovers)
    }

    fn check_rover(&self, rover_id: RoverId) -> Result<(), MissionError> {
        if self.rovers.is_empty() {
            return Err(MissionError::EmptyFleet);
        }
        if rover_id >= self.rovers.len() {
            return Err(MissionError::UnknownRover {
                id: rover_id,
                len: self.rovers.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Area: {}x{}", self.grid.width(), self.grid.height())?;
        writeln!(f, "Rovers:")?;
        for (index, rover) in self.rovers.iter().enumerate() {
            writeln!(f, "\t{index}) {rover}")?;
        }
        write!(f, "\n{}", self.render())
    }
}
