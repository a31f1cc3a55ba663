use std::fmt::{Display, Formatter};

use crate::distance::{Distance, DistanceField};
use crate::flood::flood;
use crate::goal::GoalRegion;
use crate::heading::Heading;
use crate::location::{Dimension, Location};
use crate::walls::WallStore;

/// Where the mouse is and which way it faces.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct RobotState {
    /// The cell the mouse occupies.
    pub location: Location,
    /// The direction it faces.
    pub heading: Heading,
}

/// Everything the mouse knows about the maze, plus its own pose.
///
/// Built once per run and mutated in place by a single navigator.
#[derive(Clone, Debug)]
pub struct MazeState {
    pub(crate) walls: WallStore,
    pub(crate) distances: DistanceField,
    pub(crate) goal: GoalRegion,
    pub(crate) robot: RobotState,
}

impl MazeState {
    /// Set up an unexplored maze of `dims` and compute the initial distances.
    ///
    /// The caller is responsible for `robot` and `goal` lying inside `dims`; [`NavigatorConfig::build_maze`](crate::NavigatorConfig::build_maze) checks this.
    pub fn new(dims: (Dimension, Dimension), goal: GoalRegion, robot: RobotState) -> Self {
        let mut maze = Self {
            walls: WallStore::with_dims(dims),
            distances: DistanceField::with_dims(dims),
            goal,
            robot,
        };
        maze.recompute();
        maze
    }

    /// A maze of `dims` targeting the center, with the mouse in the bottom left corner facing east.
    pub fn centered(dims: (Dimension, Dimension)) -> Self {
        Self::new(dims, GoalRegion::center(dims), RobotState::default())
    }

    /// Rebuild the distance field from the known walls. Returns the number of reachable cells.
    pub fn recompute(&mut self) -> usize {
        flood(&self.walls, &self.goal, &mut self.distances)
    }

    /// Known walls.
    pub fn walls(&self) -> &WallStore {
        &self.walls
    }

    /// Known walls, for recording discoveries.
    ///
    /// Distances are not refreshed until [`Self::recompute`] is called.
    pub fn walls_mut(&mut self) -> &mut WallStore {
        &mut self.walls
    }

    /// Current distance field.
    pub fn distances(&self) -> &DistanceField {
        &self.distances
    }

    /// The goal region.
    pub fn goal(&self) -> &GoalRegion {
        &self.goal
    }

    /// The mouse's pose.
    pub fn robot(&self) -> RobotState {
        self.robot
    }

    /// Distance from the mouse's current cell.
    pub fn current_distance(&self) -> Distance {
        self.distances.get(self.robot.location)
    }

    /// Whether the mouse stands on a goal cell.
    pub fn at_goal(&self) -> bool {
        self.goal.contains(self.robot.location)
    }

    /// Dimensions `(width, height)`.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.walls.dims()
    }

    pub(crate) fn advance(&mut self, heading: Heading) -> Location {
        self.robot.heading = heading;
        self.robot.location = heading.attempt_from(self.robot.location);
        self.robot.location
    }

    pub(crate) fn face(&mut self, heading: Heading) {
        self.robot.heading = heading;
    }
}

impl Display for MazeState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.walls.draw(|location| {
            if location == self.robot.location {
                let arrow = match self.robot.heading {
                    Heading::North => '^',
                    Heading::East => '>',
                    Heading::South => 'v',
                    Heading::West => '<',
                };
                format!(" {arrow} ")
            } else if !self.distances.is_reachable(location) {
                "  -".to_string()
            } else {
                match self.distances.get(location) {
                    distance @ 0..=999 => format!("{distance:>3}"),
                    _ => "  +".to_string(),
                }
            }
        }))
    }
}
