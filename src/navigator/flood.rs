use tracing::{debug, warn};

use crate::config::NavigatorConfig;
use crate::error::{NavigationError, NavigationResult};
use crate::heading::Heading;
use crate::maze::MazeState;
use crate::mouse::Mouse;
use crate::navigator::{drive, Navigator, Progress};
use crate::perception::{perceive, WallReadings};

/// Where [`FloodNavigator`] is in its sense-decide-move cycle.
///
/// There is no terminal phase; reaching the goal is for the caller to notice.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Phase {
    /// About to read the wall sensors.
    #[default]
    Sensing,
    /// Walls are up to date; about to pick a neighbor.
    Deciding,
    /// About to turn toward and drive into the neighbor in this direction.
    Moving(Heading),
    /// No neighbor is downhill; about to recompute distances.
    Stuck,
}

/// The outcome of examining the mouse's neighbors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Decision {
    /// Step to the neighbor in this direction.
    Move(Heading),
    /// No neighbor is closer to the goal.
    Stuck,
}

/// Pick the first neighbor, in [`Heading::DECISION_ORDER`], that is in bounds, not known to be walled off, and strictly closer to the goal than the mouse's cell.
pub fn decide(maze: &MazeState) -> Decision {
    let here = maze.robot().location;
    let distance = maze.distances().get(here);

    Heading::DECISION_ORDER.into_iter()
        .find(|heading| maze.walls().passage(here, *heading)
            .is_some_and(|neighbor| maze.distances().get(neighbor) < distance))
        .map_or(Decision::Stuck, Decision::Move)
}

/// Greedy flood-fill navigation.
///
/// Each [`tick`](Navigator::tick) senses the walls around the mouse, then steps to a neighbor with a smaller distance.
/// If there is none, the distance field is rebuilt from everything sensed so far and the mouse stays where it is.
///
/// Distances are optimistic (unknown boundaries count as open), so recomputing after a dead end re-routes around the walls found on the way in.
pub struct FloodNavigator<M: Mouse> {
    mouse: M,
    maze: MazeState,
    phase: Phase,
    stalls: u32,
    stall_limit: u32,
    recompute_on_discovery: bool,
}

impl<M: Mouse> FloodNavigator<M> {
    /// Default number of consecutive recomputes without moving before giving up.
    pub const DEFAULT_STALL_LIMIT: u32 = 4;

    /// Drive `mouse` through `maze`, recomputing only when stuck.
    pub fn new(mouse: M, maze: MazeState) -> Self {
        Self {
            mouse,
            maze,
            phase: Phase::Sensing,
            stalls: 0,
            stall_limit: Self::DEFAULT_STALL_LIMIT,
            recompute_on_discovery: false,
        }
    }

    /// Build from the settings in `config`.
    pub fn with_config(mouse: M, maze: MazeState, config: &NavigatorConfig) -> Self {
        Self::new(mouse, maze)
            .with_stall_limit(config.stall_limit)
            .with_recompute_on_discovery(config.recompute_on_discovery)
    }

    /// Give up with [`NavigationError::Unreachable`] after `limit` consecutive recomputes that leave the mouse's cell with no route to the goal.
    ///
    /// A recompute that finds a route resets the count, so dead ends in a solvable maze never add up.
    ///
    /// `0` never gives up, cycling between sensing and recomputing forever when the goal is sealed off.
    pub fn with_stall_limit(mut self, limit: u32) -> Self {
        self.stall_limit = limit;
        self
    }

    /// Also recompute right after sensing whenever a new wall turns up, rather than only when stuck.
    pub fn with_recompute_on_discovery(mut self, enabled: bool) -> Self {
        self.recompute_on_discovery = enabled;
        self
    }

    /// The phase the next [`Self::step`] will execute.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The mouse being driven.
    pub fn mouse(&self) -> &M {
        &self.mouse
    }

    /// Give back the mouse and everything learned about the maze.
    pub fn into_parts(self) -> (M, MazeState) {
        (self.mouse, self.maze)
    }

    /// Execute the current phase and move to the next one, returning it.
    ///
    /// On error the navigator is left in [`Phase::Sensing`], so it can be resumed.
    pub fn step(&mut self) -> NavigationResult<Phase> {
        let result = self.transition();
        self.phase = match &result {
            Ok(next) => *next,
            Err(_) => Phase::Sensing,
        };
        result
    }

    fn transition(&mut self) -> NavigationResult<Phase> {
        match self.phase {
            Phase::Sensing => {
                let readings = WallReadings::sense(&mut self.mouse)?;
                let perception = perceive(&mut self.maze, readings, &mut self.mouse);
                if self.recompute_on_discovery && perception.discovered > 0 {
                    self.maze.recompute();
                }
                Ok(Phase::Deciding)
            }
            Phase::Deciding => Ok(match decide(&self.maze) {
                Decision::Move(heading) => Phase::Moving(heading),
                Decision::Stuck => Phase::Stuck,
            }),
            Phase::Moving(heading) => {
                let from = self.maze.robot().location;
                let to = drive(&mut self.mouse, &mut self.maze, heading)?;
                self.stalls = 0;
                debug!(%from, %to, ?heading, distance = self.maze.current_distance(), "moved");
                Ok(Phase::Sensing)
            }
            Phase::Stuck => {
                let reached = self.maze.recompute();
                let location = self.maze.robot().location;
                debug!(%location, reached, "stuck, recomputed distances");

                // a fresh field that reaches this cell gives it a downhill neighbor unless it is a goal cell
                if self.maze.distances().is_reachable(location) {
                    self.stalls = 0;
                    return Ok(Phase::Sensing);
                }

                self.stalls += 1;
                if self.stall_limit > 0 && self.stalls >= self.stall_limit {
                    warn!(%location, stalls = self.stalls, "no route to goal");
                    return Err(NavigationError::Unreachable { location, stalls: self.stalls });
                }
                Ok(Phase::Sensing)
            }
        }
    }
}

impl<M: Mouse> Navigator for FloodNavigator<M> {
    fn tick(&mut self) -> NavigationResult<Progress> {
        let from = self.maze.robot().location;
        let mut moved = false;

        loop {
            moved |= matches!(self.phase, Phase::Moving(_));
            if self.step()? == Phase::Sensing {
                break;
            }
        }

        Ok(match moved {
            true => Progress::Moved { from, to: self.maze.robot().location, cells: 1 },
            false => Progress::Recomputed,
        })
    }

    fn maze(&self) -> &MazeState {
        &self.maze
    }
}
