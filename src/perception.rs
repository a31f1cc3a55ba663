use crate::error::MouseError;
use crate::heading::{Heading, Side};
use crate::maze::MazeState;
use crate::mouse::Mouse;

/// One round of wall sensing, relative to the mouse.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[allow(missing_docs)]
pub struct WallReadings {
    pub left: bool,
    pub front: bool,
    pub right: bool,
}

impl WallReadings {
    /// Poll all three sensors, left to right.
    pub fn sense<M: Mouse + ?Sized>(mouse: &mut M) -> Result<Self, MouseError> {
        Ok(Self {
            left: mouse.wall_left()?,
            front: mouse.wall_front()?,
            right: mouse.wall_right()?,
        })
    }

    /// The reading for `side`.
    pub fn get(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Front => self.front,
            Side::Right => self.right,
        }
    }
}

/// The absolute direction of `side` for a mouse facing `facing`.
pub fn absolute(facing: Heading, side: Side) -> Heading {
    match (facing, side) {
        (Heading::North, Side::Left) => Heading::West,
        (Heading::North, Side::Front) => Heading::North,
        (Heading::North, Side::Right) => Heading::East,
        (Heading::East, Side::Left) => Heading::North,
        (Heading::East, Side::Front) => Heading::East,
        (Heading::East, Side::Right) => Heading::South,
        (Heading::South, Side::Left) => Heading::East,
        (Heading::South, Side::Front) => Heading::South,
        (Heading::South, Side::Right) => Heading::West,
        (Heading::West, Side::Left) => Heading::South,
        (Heading::West, Side::Front) => Heading::West,
        (Heading::West, Side::Right) => Heading::North,
    }
}

/// What one round of sensing revealed, in absolute terms.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Perception {
    /// Each sensed side of the current cell and whether it is walled, in left, front, right order.
    pub sides: [(Heading, bool); 3],
    /// How many of the walls seen were not known before.
    pub discovered: usize,
}

impl Perception {
    /// Sensed sides with no wall.
    pub fn open_sides(&self) -> impl Iterator<Item = Heading> + '_ {
        self.sides.iter().filter(|(_, walled)| !walled).map(|(heading, _)| *heading)
    }
}

/// Record `readings`, taken at the mouse's current cell and heading, in the maze's wall store.
///
/// Only walls are written; a missing wall never erases one already known.
/// Every wall seen is also passed to [`Mouse::mark_wall`].
/// Distances are left untouched.
pub fn perceive<M: Mouse + ?Sized>(maze: &mut MazeState, readings: WallReadings, mouse: &mut M) -> Perception {
    let robot = maze.robot();
    let mut discovered = 0;

    let sides = [Side::Left, Side::Front, Side::Right].map(|side| {
        let heading = absolute(robot.heading, side);
        let walled = readings.get(side);
        if walled {
            if maze.walls_mut().wall_off(robot.location, heading) {
                discovered += 1;
            }
            mouse.mark_wall(robot.location, heading);
        }
        (heading, walled)
    });

    Perception { sides, discovered }
}
