use itertools::Itertools;

use crate::error::ConfigError;
use crate::location::{Dimension, Location};

/// The cells the mouse is trying to reach, each seeded with distance 0.
///
/// Order matters only for the order in which the flood fill expands equal-distance cells, never for the distances themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalRegion {
    cells: Vec<Location>,
}

impl GoalRegion {
    /// The center of a maze of `dims`: the four middle cells when both dimensions are even.
    ///
    /// For a 16×16 maze the seed order is `(8, 8), (7, 8), (8, 7), (7, 7)`.
    /// An odd dimension has a single middle row or column, so the region shrinks accordingly.
    pub fn center(dims: (Dimension, Dimension)) -> Self {
        let middles = |len: usize| match len % 2 {
            0 => vec![len / 2, len / 2 - 1],
            _ => vec![len / 2],
        };

        Self {
            cells: middles(dims.1.get()).into_iter()
                .cartesian_product(middles(dims.0.get()))
                .map(|(y, x)| Location(x, y))
                .collect_vec(),
        }
    }

    /// An explicit goal region; fails if it is empty or any cell lies outside `dims`.
    pub fn new(cells: Vec<Location>, dims: (Dimension, Dimension)) -> Result<Self, ConfigError> {
        if cells.is_empty() {
            return Err(ConfigError::EmptyGoal);
        }
        if let Some(outside) = cells.iter().find(|cell| !cell.within(dims)) {
            return Err(ConfigError::OutOfBounds { what: "goal", location: *outside });
        }

        Ok(Self { cells: cells.into_iter().unique().collect_vec() })
    }

    /// Goal cells in seed order.
    pub fn cells(&self) -> &[Location] {
        &self.cells
    }

    /// Whether `location` is one of the goal cells.
    pub fn contains(&self, location: Location) -> bool {
        self.cells.contains(&location)
    }
}
