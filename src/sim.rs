//! A simulated maze and mouse, for exercising navigators without hardware.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::num::NonZero;

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;
use unordered_pair::UnorderedPair;

use crate::error::{MazeParseError, MouseError};
use crate::goal::GoalRegion;
use crate::heading::{Heading, Side};
use crate::location::{Dimension, Location};
use crate::maze::RobotState;
use crate::mouse::Mouse;
use crate::perception::absolute;
use crate::walls::WallStore;

/// The true layout of a maze, as opposed to what a mouse has learned about it.
///
/// Walls are placed builder-style and, like [`WallStore`], never removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimMaze {
    walls: WallStore,
}

impl SimMaze {
    /// A maze of `dims` with only its outer wall.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self { walls: WallStore::with_dims(dims) }
    }

    /// Carve a perfect maze of `dims` with a randomized depth-first search from the bottom left corner.
    ///
    /// The center goal cells are then opened up into a single room, as in competition mazes.
    pub fn carve<R: Rng + ?Sized>(dims: (Dimension, Dimension), rng: &mut R) -> Self {
        let mut open: HashSet<UnorderedPair<Location>> = HashSet::new();
        let mut visited = HashSet::from([Location(0, 0)]);
        let mut stack = vec![Location(0, 0)];

        while let Some(&current) = stack.last() {
            let unvisited = Heading::FLOOD_ORDER.iter()
                .map(|heading| heading.attempt_from(current))
                .filter(|next| next.within(dims) && !visited.contains(next))
                .collect_vec();

            match unvisited.choose(rng) {
                None => {
                    stack.pop();
                }
                Some(&next) => {
                    open.insert(UnorderedPair(current, next));
                    visited.insert(next);
                    stack.push(next);
                }
            }
        }

        let goal = GoalRegion::center(dims);
        for (a, b) in goal.cells().iter().tuple_combinations() {
            if Heading::between(*a, *b).is_some() {
                open.insert(UnorderedPair(*a, *b));
            }
        }

        let mut maze = Self::with_dims(dims);
        for x in 0..dims.0.get() {
            for y in 0..dims.1.get() {
                for heading in [Heading::North, Heading::East] {
                    let here = Location(x, y);
                    let there = heading.attempt_from(here);
                    if there.within(dims) && !open.contains(&UnorderedPair(here, there)) {
                        maze.walls.wall_off(here, heading);
                    }
                }
            }
        }

        maze
    }

    /// Read a maze drawn in the format produced by this type's [`Display`] impl.
    ///
    /// ```text
    /// +---+---+
    /// |       |
    /// +   +---+
    /// |   |   |
    /// +---+---+
    /// ```
    ///
    /// The top line fixes the width. Only the `|` left of each cell and the `---` below it are read, so cell interiors may hold anything.
    /// The outer wall is always present, whatever is drawn there.
    pub fn from_ascii(drawing: &str) -> Result<Self, MazeParseError> {
        let lines = drawing.lines()
            .map(|line| line.trim_end().chars().collect_vec())
            .skip_while(|line| line.is_empty())
            .collect_vec();
        let lines = match lines.iter().rposition(|line| !line.is_empty()) {
            None => return Err(MazeParseError::Empty),
            Some(last) => &lines[..=last],
        };

        if lines.len() % 2 == 0 {
            return Err(MazeParseError::LineCount(lines.len()));
        }

        let expected = lines[0].len();
        let (Some(width), Some(height)) = (NonZero::new(expected.saturating_sub(1) / 4), NonZero::new(lines.len() / 2)) else {
            return Err(MazeParseError::Empty);
        };
        if let Some((line, row)) = lines.iter().find_position(|row| row.len() > expected) {
            return Err(MazeParseError::Ragged { line: line + 1, len: row.len(), expected });
        }

        let at = |row: &Vec<char>, column: usize| row.get(column).copied().unwrap_or(' ');
        let mut maze = Self::with_dims((width, height));

        // text runs north to south, so line 1 is the top row of cells
        for (row, y) in (0..height.get()).rev().enumerate() {
            let cells = &lines[2 * row + 1];
            let below = &lines[2 * row + 2];
            for x in 0..width.get() {
                if at(cells, 4 * x) == '|' {
                    maze.walls.wall_off(Location(x, y), Heading::West);
                }
                if (1..4).any(|offset| at(below, 4 * x + offset) == '-') {
                    maze.walls.wall_off(Location(x, y), Heading::South);
                }
            }
        }

        Ok(maze)
    }

    /// Place a wall between two adjacent cells; other pairs are ignored.
    pub fn disconnect(&mut self, cells: UnorderedPair<Location>) -> &mut Self {
        self.walls.disconnect(cells);
        self
    }

    /// Place walls on the given sides of `location`.
    pub fn disconnect_around(&mut self, location: Location, headings: Vec<Heading>) -> &mut Self {
        for heading in headings {
            self.walls.wall_off(location, heading);
        }
        self
    }

    /// Wall `location` in on all four sides.
    pub fn seal(&mut self, location: Location) -> &mut Self {
        self.disconnect_around(location, Heading::FLOOD_ORDER.to_vec())
    }

    /// The true walls.
    pub fn walls(&self) -> &WallStore {
        &self.walls
    }

    /// Dimensions `(width, height)`.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.walls.dims()
    }
}

impl Display for SimMaze {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.walls.draw(|_| "   ".to_string()))
    }
}

/// A motion command received by a [`SimulatedMouse`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[allow(missing_docs)]
pub enum Command {
    TurnLeft,
    TurnRight,
    MoveForward,
}

/// A perfect mouse in a [`SimMaze`]: sensors never lie and motors never slip.
///
/// Every motion command and wall mark is recorded.
#[derive(Clone, Debug)]
pub struct SimulatedMouse {
    maze: SimMaze,
    robot: RobotState,
    commands: Vec<Command>,
    marks: Vec<(Location, Heading)>,
}

impl SimulatedMouse {
    /// Place a mouse in `maze` with the pose `robot`.
    pub fn new(maze: SimMaze, robot: RobotState) -> Self {
        Self {
            maze,
            robot,
            commands: Vec::new(),
            marks: Vec::new(),
        }
    }

    /// The mouse's true pose.
    pub fn robot(&self) -> RobotState {
        self.robot
    }

    /// Motion commands received so far, in order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Walls reported through [`Mouse::mark_wall`], in order.
    pub fn marks(&self) -> &[(Location, Heading)] {
        &self.marks
    }

    /// The maze the mouse is in.
    pub fn maze(&self) -> &SimMaze {
        &self.maze
    }

    fn wall(&self, side: Side) -> bool {
        self.maze.walls.is_walled(self.robot.location, absolute(self.robot.heading, side))
    }
}

impl Mouse for SimulatedMouse {
    fn wall_left(&mut self) -> Result<bool, MouseError> {
        Ok(self.wall(Side::Left))
    }

    fn wall_front(&mut self) -> Result<bool, MouseError> {
        Ok(self.wall(Side::Front))
    }

    fn wall_right(&mut self) -> Result<bool, MouseError> {
        Ok(self.wall(Side::Right))
    }

    fn turn_right(&mut self) -> Result<(), MouseError> {
        self.commands.push(Command::TurnRight);
        self.robot.heading = self.robot.heading.right();
        trace!(heading = ?self.robot.heading, "turned right");
        Ok(())
    }

    fn turn_left(&mut self) -> Result<(), MouseError> {
        self.commands.push(Command::TurnLeft);
        self.robot.heading = self.robot.heading.left();
        trace!(heading = ?self.robot.heading, "turned left");
        Ok(())
    }

    fn move_forward(&mut self) -> Result<(), MouseError> {
        let RobotState { location, heading } = self.robot;
        self.commands.push(Command::MoveForward);

        match self.maze.walls.passage(location, heading) {
            None => Err(MouseError::Collision { location, heading }),
            Some(next) => {
                trace!(from = %location, to = %next, "moved forward");
                self.robot.location = next;
                Ok(())
            }
        }
    }

    fn mark_wall(&mut self, location: Location, heading: Heading) {
        trace!(%location, side = %heading.letter(), "wall");
        self.marks.push((location, heading));
    }
}
