#![warn(missing_docs)]

//! # `micromouse`
//!
//! The navigation core of a [micromouse](https://en.wikipedia.org/wiki/Micromouse): a small robot that must find the center of an unknown maze using only the walls it can sense around itself.
//! Begin by building a [`MazeState`], either directly or from a [`NavigatorConfig`].
//! Hand it to a [`Navigator`] such as [`FloodNavigator`] together with something implementing [`Mouse`], then [`run()`] it.
//!
//! The [`sim`] module provides a [`SimulatedMouse`](sim::SimulatedMouse) for driving navigators without hardware.
//!
//! # Internals
//! The maze is a dense grid of cells, `(0, 0)` at the bottom left.
//! Every boundary between two cells is owned by exactly one of them: each cell records whether there is a wall on its north side and on its east side.
//! The outer wall is implied and never stored.
//! Walls are only ever added, since the mouse's sensors are assumed to be truthful.
//!
//! A high level overview of one step of [`FloodNavigator`] is as follows:
//!
//! 1. Read the left, front and right wall sensors and record any walls in absolute terms, given the direction the mouse faces.
//! 2. Look at the neighboring cells in the fixed order south, east, west, north and pick the first that is not walled off and whose distance to the goal is strictly smaller than the current cell's.
//! Turn the short way round to face it and drive in.
//! 3. If there is no such neighbor, rebuild the distance field and stay put.
//!
//! The distance field is a breadth-first flood from all goal cells at once, treating every boundary not known to be walled as open.
//! The estimate is therefore optimistic: a dead end looks attractive until the mouse has seen its walls, at which point a recompute steers it elsewhere.
//! A mouse that keeps recomputing without ever finding a way down is walled off from the goal, and the navigator reports it as [`NavigationError::Unreachable`].

pub use config::{NavigatorConfig, Strategy};
pub use distance::{Distance, DistanceField};
pub use error::{ConfigError, MazeParseError, MouseError, NavigationError, NavigationResult};
pub use flood::flood;
pub use goal::GoalRegion;
pub use heading::{Heading, Side, Turn};
pub use location::{Dimension, Location};
pub use maze::{MazeState, RobotState};
pub use mouse::Mouse;
pub use navigator::{decide, run, Decision, FloodNavigator, FrontierNavigator, Navigator, Phase, Progress, RunReport};
pub use perception::{absolute, perceive, Perception, WallReadings};
pub use walls::{Orientation, WallStore};

pub(crate) mod config;
pub(crate) mod distance;
pub mod error;
pub(crate) mod flood;
pub(crate) mod goal;
pub(crate) mod heading;
pub(crate) mod location;
pub(crate) mod maze;
pub(crate) mod mouse;
pub mod navigator;
pub(crate) mod perception;
pub mod sim;
mod tests;
pub(crate) mod walls;
