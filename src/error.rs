//! Error types for the navigation core and its surroundings.

use thiserror::Error;

use crate::heading::Heading;
use crate::location::Location;

/// Failures reported by a [`Mouse`](crate::Mouse) implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MouseError {
    /// The mouse tried to drive through a wall.
    #[error("collision leaving {location} toward {heading:?}")]
    Collision {
        /// Where the mouse stood.
        location: Location,
        /// Which way it was driving.
        heading: Heading,
    },

    /// The hardware or simulator stopped answering.
    #[error("mouse unavailable: {0}")]
    Unavailable(String),
}

/// Reasons a navigator stops making progress.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The flood navigator recomputed `stalls` times in a row at `location` and found no route to the goal.
    #[error("goal unreachable from {location} after {stalls} recomputes without progress")]
    Unreachable {
        /// Where the mouse is stuck.
        location: Location,
        /// Consecutive recomputes that found no route.
        stalls: u32,
    },

    /// The frontier explorer ran out of unvisited cells that could still lead to the goal.
    #[error("exploration exhausted at {location} with no open cell leading to the goal")]
    Exhausted {
        /// Where the mouse stopped.
        location: Location,
    },

    /// A sensor or actuator call failed.
    #[error(transparent)]
    Mouse(#[from] MouseError),
}

/// Problems with a [`NavigatorConfig`](crate::NavigatorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for [`NavigatorConfig`](crate::NavigatorConfig).
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A maze needs at least one row and one column.
    #[error("maze dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension {
        /// Configured width.
        width: usize,
        /// Configured height.
        height: usize,
    },

    /// A configured cell is not in the maze.
    #[error("{what} {location} lies outside the maze")]
    OutOfBounds {
        /// Which setting the cell came from.
        what: &'static str,
        /// The offending cell.
        location: Location,
    },

    /// An explicit goal list was given but is empty.
    #[error("goal region has no cells")]
    EmptyGoal,
}

/// Problems reading an ASCII maze drawing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeParseError {
    /// Nothing to parse, or too narrow to hold a cell.
    #[error("maze drawing is empty")]
    Empty,

    /// Wall lines and cell lines do not alternate.
    #[error("maze drawing must have an odd number of lines, got {0}")]
    LineCount(usize),

    /// A line is wider than the top line.
    #[error("line {line} is {len} characters wide, expected {expected}")]
    Ragged {
        /// 1-based line number.
        line: usize,
        /// Its width.
        len: usize,
        /// Width of the top line.
        expected: usize,
    },
}

/// Result type for navigation operations.
pub type NavigationResult<T> = Result<T, NavigationError>;
