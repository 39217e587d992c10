//! Error types for fleet operations, configuration and mission files.

use crate::fleet::RoverId;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// The four failure kinds a fleet can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Degenerate grid dimensions.
    Space,
    /// A requested pose lies outside the grid or the orientation domain.
    Navigation,
    /// No eligible rover for the operation.
    Fleet,
    /// A command payload with nothing actionable in it.
    Communication,
}

/// Validation failures raised at the fleet boundary, before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MissionError {
    /// Grid width or height is not positive.
    #[error("non-positive space: grid must be at least 1x1, got {width}x{height}")]
    Space { width: i32, height: i32 },

    /// Orientation index outside `0..4`.
    #[error("unknown orientation {0}: expected 0 (E), 1 (N), 2 (W) or 3 (S)")]
    InvalidOrientation(i64),

    /// Deployment position outside the grid.
    #[error("position ({x}, {y}) misses the grid: aim inside x in [0, {width}), y in [0, {height})")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    /// An operation was addressed to a fleet with no rovers in it.
    #[error("no rovers deployed")]
    EmptyFleet,

    /// Rover id does not resolve to a deployed rover.
    #[error("unknown rover {id}: fleet has {len} rover(s)")]
    UnknownRover { id: RoverId, len: usize },

    /// The command string contained no `M`, `L` or `R`.
    #[error("rover {0} received no actionable command")]
    Communication(RoverId),
}

impl MissionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Space { .. } => ErrorKind::Space,
            Self::InvalidOrientation(_) | Self::OutOfBounds { .. } => ErrorKind::Navigation,
            Self::EmptyFleet | Self::UnknownRover { .. } => ErrorKind::Fleet,
            Self::Communication(_) => ErrorKind::Communication,
        }
    }
}

/// Top-level error for everything outside the in-memory simulation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fleet validation failure
    #[error(transparent)]
    Mission(#[from] MissionError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML configuration
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Malformed mission file
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Grid too large to draw as text
    #[error("Field of {cells} cells exceeds the render limit of {max}")]
    FieldTooLarge { cells: u64, max: u64 },

    /// Report serialisation failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
