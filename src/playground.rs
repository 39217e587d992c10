//! Random scenes for manual exploration and smoke testing.
//!
//! Only the public fleet API (`deploy` and `command`) is used, so anything
//! generated here is reachable by a regular caller.

use crate::config::FleetConfig;
use crate::error::MissionError;
use crate::fleet::{Fleet, RoverId};
use crate::orientation::Orientation;
use glam::IVec2;
use rand::Rng;
use rand::seq::SliceRandom;

/// Moves are weighted three to one against each turn direction.
const COMMAND_POOL: [char; 5] = ['M', 'L', 'M', 'R', 'M'];

/// Builds a fleet of 1 to 3 rovers on a random grid, each at a random valid pose.
pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R, config: FleetConfig) -> Result<Fleet, MissionError> {
    let width = rng.gen_range(1..=21);
    let rover_count = rng.gen_range(1..=3);
    let height = rng.gen_range(1..=20 - 2 * rover_count);

    let mut fleet = Fleet::with_config(width, height, config)?;
    for _ in 0..rover_count {
        let orientation = Orientation::ALL[rng.gen_range(0..4)];
        let position = IVec2::new(rng.gen_range(0..width), rng.gen_range(0..height));
        fleet.deploy(orientation, position, None)?;
    }
    Ok(fleet)
}

/// A 10 to 20 character command string drawn from [`COMMAND_POOL`].
pub fn random_command<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(10..=20);
    (0..len)
        .filter_map(|_| COMMAND_POOL.choose(rng).copied())
        .collect()
}

/// Sends one random command string to every rover, returning what was sent.
pub fn random_commands<R: Rng + ?Sized>(
    rng: &mut R,
    fleet: &mut Fleet,
) -> Result<Vec<(RoverId, String)>, MissionError> {
    let mut history = Vec::with_capacity(fleet.len());
    for id in 0..fleet.len() {
        let commands = random_command(rng);
        fleet.command(id, &commands)?;
        history.push((id, commands));
    }
    Ok(history)
}
