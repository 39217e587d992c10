//! Interpreter that expands a command string into primitive [`RoverOp`]s.
//!
//! The entry point is [`CommandInterpreter`]. Register symbol-to-operation
//! mappings via [`CommandInterpreter::set_op`] or
//! [`CommandInterpreter::populate_standard_symbols`], then call
//! [`CommandInterpreter::translate`] and [`CommandInterpreter::execute`].

use crate::bounds::{EdgePolicy, Grid};
use crate::rover::{Rover, RoverOp};
use log::debug;
use std::collections::HashMap;

/// Maps command characters to rover operations.
#[derive(Clone, Debug)]
pub struct CommandInterpreter {
    op_map: HashMap<char, RoverOp>,
}

impl Default for CommandInterpreter {
    /// An interpreter that understands `M`, `L` and `R`.
    fn default() -> Self {
        let mut interpreter = Self::new();
        interpreter.populate_standard_symbols();
        interpreter
    }
}

impl CommandInterpreter {
    /// Creates an interpreter with an empty symbol map.
    pub fn new() -> Self {
        Self {
            op_map: HashMap::new(),
        }
    }

    /// Replaces the entire symbol-to-operation map in one step (builder pattern).
    pub fn with_map(mut self, map: impl IntoIterator<Item = (char, RoverOp)>) -> Self {
        self.op_map = map.into_iter().collect();
        self
    }

    /// Assigns a single [`RoverOp`] to a command character.
    pub fn set_op(&mut self, symbol: char, op: RoverOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers `M` (move), `L` (turn left) and `R` (turn right).
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('M', RoverOp::Move),
            ('L', RoverOp::TurnLeft),
            ('R', RoverOp::TurnRight),
        ];

        for (sym, op) in mappings {
            self.set_op(sym, op);
        }
    }

    pub fn op_for(&self, symbol: char) -> RoverOp {
        self.op_map.get(&symbol).copied().unwrap_or(RoverOp::Ignore)
    }

    /// Filters `commands` down to the recognised symbols, in order.
    ///
    /// Unknown characters are dropped silently from the result. An empty
    /// return value means nothing in the input was actionable.
    pub fn translate(&self, commands: &str) -> Vec<RoverOp> {
        let ops: Vec<RoverOp> = commands
            .chars()
            .map(|c| self.op_for(c))
            .filter(|op| *op != RoverOp::Ignore)
            .collect();

        let dropped = commands.chars().count() - ops.len();
        if dropped > 0 {
            debug!("dropped {dropped} unrecognised command character(s) from {commands:?}");
        }
        ops
    }

    /// Applies `ops` to `rover` strictly left to right. Each op completes,
    /// edge handling included, before the next one starts.
    pub fn execute(&self, ops: &[RoverOp], rover: &mut Rover, grid: &Grid, policy: &dyn EdgePolicy) {
        for &op in ops {
            rover.apply(op, grid, policy);
            debug!("{op:?} -> {rover}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_is_filtered_out() {
        let interpreter = CommandInterpreter::default();
        assert_eq!(
            interpreter.translate("Move L8R"),
            vec![RoverOp::Move, RoverOp::TurnLeft, RoverOp::TurnRight]
        );
        assert!(interpreter.translate("QQQ").is_empty());
        assert!(interpreter.translate("").is_empty());
    }

    #[test]
    fn lowercase_is_not_a_command() {
        let interpreter = CommandInterpreter::default();
        assert!(interpreter.translate("mlr").is_empty());
    }

    #[test]
    fn custom_symbols_can_be_registered() {
        let interpreter =
            CommandInterpreter::new().with_map([('f', RoverOp::Move), ('+', RoverOp::TurnLeft)]);
        assert_eq!(
            interpreter.translate("f+M"),
            vec![RoverOp::Move, RoverOp::TurnLeft]
        );
    }
}
