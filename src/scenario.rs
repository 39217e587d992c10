//! Plain-text mission files.
//!
//! ```text
//! 5 5
//! 1 2 N
//! LMLMLMLMM
//! 3 3 E
//! MMRMMRMRRM
//! ```
//!
//! The first line holds the grid size. Each rover then takes two lines:
//! its starting pose `x y <heading letter>` and its command string.

use crate::config::FleetConfig;
use crate::error::{Error, Result};
use crate::fleet::Fleet;
use crate::orientation::Orientation;
use crate::rover::Location;
use glam::IVec2;
use log::info;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// A rover's starting pose and the commands it will receive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoverPlan {
    pub position: IVec2,
    pub orientation: Orientation,
    pub commands: String,
}

/// A parsed mission file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub width: i32,
    pub height: i32,
    pub rovers: Vec<RoverPlan>,
}

impl Scenario {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// Parses mission text. Errors carry the 1-based line number.
    pub fn parse(input: &str) -> Result<Self> {
        let mut lines: Vec<(usize, &str)> = input
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
            .collect();
        while lines.last().is_some_and(|(_, l)| l.trim().is_empty()) {
            lines.pop();
        }

        let Some(&(first_no, first)) = lines.first() else {
            return Err(Error::parse(1, "missing grid size"));
        };
        let (width, height) = match first.split_whitespace().collect::<Vec<_>>()[..] {
            [w, h] => (parse_int(first_no, w)?, parse_int(first_no, h)?),
            _ => return Err(Error::parse(first_no, "expected `<width> <height>`")),
        };

        let mut rovers = Vec::new();
        for pair in lines[1..].chunks(2) {
            let (pose_no, pose) = pair[0];
            let Some(&(_, commands)) = pair.get(1) else {
                return Err(Error::parse(pose_no + 1, "missing command line"));
            };
            rovers.push(parse_plan(pose_no, pose, commands)?);
        }

        Ok(Self {
            width,
            height,
            rovers,
        })
    }

    /// Builds the fleet, deploys every rover, then sends each its commands in file order.
    pub fn execute(&self, config: &FleetConfig) -> Result<Fleet> {
        let mut fleet = Fleet::with_config(self.width, self.height, config.clone())?;
        for plan in &self.rovers {
            fleet.deploy(plan.orientation, plan.position, None)?;
        }
        for (id, plan) in self.rovers.iter().enumerate() {
            fleet.command(id, &plan.commands)?;
        }
        info!("mission complete: {} rover(s)", fleet.len());
        Ok(fleet)
    }

    pub fn run(&self, config: &FleetConfig) -> Result<MissionReport> {
        Ok(MissionReport::from_fleet(&self.execute(config)?))
    }
}

fn parse_int(line: usize, token: &str) -> Result<i32> {
    token
        .parse()
        .map_err(|_| Error::parse(line, format!("`{token}` is not an integer")))
}

fn parse_plan(line: usize, pose: &str, commands: &str) -> Result<RoverPlan> {
    let [x, y, heading] = pose.split_whitespace().collect::<Vec<_>>()[..] else {
        return Err(Error::parse(line, "expected `<x> <y> <heading>`"));
    };
    let mut letters = heading.chars();
    let orientation = match (letters.next(), letters.next()) {
        (Some(c), None) => Orientation::from_letter(c),
        _ => None,
    }
    .ok_or_else(|| Error::parse(line, format!("`{heading}` is not one of E, N, W, S")))?;

    Ok(RoverPlan {
        position: IVec2::new(parse_int(line, x)?, parse_int(line, y)?),
        orientation,
        commands: commands.to_string(),
    })
}

/// Final poses of every rover after a mission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MissionReport {
    pub width: i32,
    pub height: i32,
    pub rovers: Vec<Location>,
}

impl MissionReport {
    pub fn from_fleet(fleet: &Fleet) -> Self {
        let (width, height) = fleet.get_boundaries();
        Self {
            width,
            height,
            rovers: fleet.rovers().iter().map(|r| r.location()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for MissionReport {
    /// One `x y <heading>` line per rover.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for location in &self.rovers {
            writeln!(f, "{location}")?;
        }
        Ok(())
    }
}
