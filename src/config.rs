use std::num::NonZero;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantArray};

use crate::error::ConfigError;
use crate::goal::GoalRegion;
use crate::heading::Heading;
use crate::location::{Dimension, Location};
use crate::maze::{MazeState, RobotState};
use crate::mouse::Mouse;
use crate::navigator::{FloodNavigator, FrontierNavigator, Navigator};

/// Which [`Navigator`] to run.
///
/// Named in kebab case both in TOML and when parsed from a string.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumString, VariantArray)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// [`FloodNavigator`]
    #[default]
    FloodFill,
    /// [`FrontierNavigator`]
    Frontier,
}

/// Settings for a run, usually read from TOML.
///
/// Every field is optional in the file:
///
/// ```toml
/// width = 16
/// height = 16
/// start = [0, 0]
/// heading = "east"
/// goal = [[7, 7], [8, 8]]  # omit for the center cells
/// strategy = "flood-fill"  # or "frontier"
/// stall_limit = 4
/// recompute_on_discovery = false
/// max_ticks = 10000
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigatorConfig {
    /// Cells per row.
    pub width: usize,
    /// Cells per column.
    pub height: usize,
    /// Cell the mouse starts in.
    pub start: Location,
    /// Direction the mouse starts facing.
    pub heading: Heading,
    /// Explicit goal cells; the center of the maze if absent.
    pub goal: Option<Vec<Location>>,
    /// Which navigator to build.
    pub strategy: Strategy,
    /// See [`FloodNavigator::with_stall_limit`].
    pub stall_limit: u32,
    /// See [`FloodNavigator::with_recompute_on_discovery`].
    pub recompute_on_discovery: bool,
    /// Tick budget for [`run`](crate::run).
    pub max_ticks: usize,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            start: Location(0, 0),
            heading: Heading::East,
            goal: None,
            strategy: Strategy::FloodFill,
            stall_limit: 4,
            recompute_on_discovery: false,
            max_ticks: 10_000,
        }
    }
}

impl NavigatorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Maze dimensions `(width, height)`.
    pub fn dims(&self) -> Result<(Dimension, Dimension), ConfigError> {
        match (NonZero::new(self.width), NonZero::new(self.height)) {
            (Some(width), Some(height)) => Ok((width, height)),
            _ => Err(ConfigError::ZeroDimension { width: self.width, height: self.height }),
        }
    }

    /// The goal region this config describes.
    pub fn goal_region(&self) -> Result<GoalRegion, ConfigError> {
        let dims = self.dims()?;
        match &self.goal {
            None => Ok(GoalRegion::center(dims)),
            Some(cells) => GoalRegion::new(cells.clone(), dims),
        }
    }

    /// Check dimensions, start and goal against each other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = self.dims()?;
        if !self.start.within(dims) {
            return Err(ConfigError::OutOfBounds { what: "start", location: self.start });
        }
        self.goal_region().map(|_| ())
    }

    /// A fresh [`MazeState`] with the mouse at the configured start.
    pub fn build_maze(&self) -> Result<MazeState, ConfigError> {
        self.validate()?;
        Ok(MazeState::new(self.dims()?, self.goal_region()?, RobotState {
            location: self.start,
            heading: self.heading,
        }))
    }

    /// The configured [`Strategy`], driving `mouse` through a fresh maze.
    pub fn navigator<'a, M: Mouse + 'a>(&self, mouse: M) -> Result<Box<dyn Navigator + 'a>, ConfigError> {
        let maze = self.build_maze()?;
        Ok(match self.strategy {
            Strategy::FloodFill => Box::new(FloodNavigator::with_config(mouse, maze, self)),
            Strategy::Frontier => Box::new(FrontierNavigator::new(mouse, maze)),
        })
    }
}
