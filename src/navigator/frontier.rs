use std::collections::HashSet;

use petgraph::algo::{astar, dijkstra};
use petgraph::graphmap::UnGraphMap;
use tracing::{debug, warn};

use crate::error::{NavigationError, NavigationResult};
use crate::heading::Heading;
use crate::location::Location;
use crate::maze::MazeState;
use crate::mouse::Mouse;
use crate::navigator::{drive, Navigator, Progress};
use crate::perception::{perceive, Perception, WallReadings};

/// Goal-directed exploration over a graph of discovered cells.
///
/// Cells become nodes only once a sensed opening leads to them, and edges only ever join cells through openings actually seen.
/// Each tick closes the current cell, then travels through known passages to the open cell with the lowest estimated total cost:
/// the path length to get there plus its flood-fill distance to the goal.
///
/// Unlike [`FloodNavigator`](crate::FloodNavigator) this never drives through a boundary it has not sensed, at the price of longer trips back to earlier branches.
pub struct FrontierNavigator<M: Mouse> {
    mouse: M,
    maze: MazeState,
    // passages sensed open; nodes are every cell seen so far
    graph: UnGraphMap<Location, ()>,
    closed: HashSet<Location>,
}

impl<M: Mouse> FrontierNavigator<M> {
    /// Explore `maze` with `mouse`.
    pub fn new(mouse: M, maze: MazeState) -> Self {
        let mut graph = UnGraphMap::new();
        graph.add_node(maze.robot().location);

        Self {
            mouse,
            maze,
            graph,
            closed: HashSet::new(),
        }
    }

    /// The mouse being driven.
    pub fn mouse(&self) -> &M {
        &self.mouse
    }

    /// Give back the mouse and everything learned about the maze.
    pub fn into_parts(self) -> (M, MazeState) {
        (self.mouse, self.maze)
    }

    /// Cells discovered but not yet visited.
    pub fn open_cells(&self) -> impl Iterator<Item = Location> + '_ {
        self.graph.nodes().filter(|node| !self.closed.contains(node))
    }

    fn sense(&mut self) -> NavigationResult<Perception> {
        let readings = WallReadings::sense(&mut self.mouse)?;
        let perception = perceive(&mut self.maze, readings, &mut self.mouse);

        let here = self.maze.robot().location;
        for heading in perception.open_sides() {
            // a sensor claiming an opening in the outer wall is ignored
            if let Some(neighbor) = self.maze.walls().passage(here, heading) {
                self.graph.add_edge(here, neighbor, ());
            }
        }

        Ok(perception)
    }

    /// Sense the current cell; on the very first visit also look behind, since nothing is known about that side yet.
    fn close_current(&mut self) -> NavigationResult<()> {
        let first_visit = self.closed.is_empty();
        self.sense()?;

        let robot = self.maze.robot();
        if first_visit && !self.maze.walls().is_walled(robot.location, robot.heading.invert()) {
            self.mouse.turn_right()?;
            self.mouse.turn_right()?;
            self.maze.face(robot.heading.invert());
            self.sense()?;
        }

        self.closed.insert(robot.location);
        Ok(())
    }

    fn choose_target(&self, here: Location) -> Option<Location> {
        let distances = self.maze.distances();
        let costs = dijkstra(&self.graph, here, None, |_| 1usize);

        costs.into_iter()
            .filter(|(node, _)| !self.closed.contains(node) && distances.is_reachable(*node))
            .min_by_key(|(node, cost)| (*cost + distances.get(*node) as usize, distances.get(*node), *node))
            .map(|(node, _)| node)
    }
}

impl<M: Mouse> Navigator for FrontierNavigator<M> {
    fn tick(&mut self) -> NavigationResult<Progress> {
        self.close_current()?;
        self.maze.recompute();

        let here = self.maze.robot().location;
        let Some(target) = self.choose_target(here) else {
            warn!(location = %here, "no open cell leads to the goal");
            return Err(NavigationError::Exhausted { location: here });
        };

        let path = astar(&self.graph, here, |node| node == target, |_| 1usize, |node| node.manhattan(target))
            .map(|(_, path)| path)
            .ok_or(NavigationError::Exhausted { location: here })?;
        debug!(from = %here, to = %target, cells = path.len() - 1, "heading for frontier cell");

        for leg in path.windows(2) {
            if let Some(heading) = Heading::between(leg[0], leg[1]) {
                drive(&mut self.mouse, &mut self.maze, heading)?;
            }
        }

        Ok(Progress::Moved { from: here, to: self.maze.robot().location, cells: path.len() - 1 })
    }

    fn maze(&self) -> &MazeState {
        &self.maze
    }
}
