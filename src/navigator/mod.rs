//! Control loops that drive a [`Mouse`] toward the goal.
//!
//! [`FloodNavigator`] is the greedy flood-fill descent; [`FrontierNavigator`] is an alternative that explores a graph of discovered cells.
//! Both share the same [`MazeState`], perception and [`Mouse`] interface and are driven by [`run`].

use tracing::{debug, info};

use crate::error::{MouseError, NavigationResult};
use crate::heading::{Heading, Turn};
use crate::location::Location;
use crate::maze::MazeState;
use crate::mouse::Mouse;

pub use flood::{decide, Decision, FloodNavigator, Phase};
pub use frontier::FrontierNavigator;

mod flood;
mod frontier;

/// What a single [`Navigator::tick`] accomplished.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Progress {
    /// The mouse drove from `from` to `to`, covering `cells` cells.
    Moved {
        /// Cell at the start of the tick.
        from: Location,
        /// Cell at the end of it.
        to: Location,
        /// Cells driven; a path may cover several.
        cells: usize,
    },
    /// No move was possible; distances were recomputed and the mouse stayed put.
    Recomputed,
}

/// A strategy that advances the mouse one decision at a time.
pub trait Navigator {
    /// Sense, update the map, and either move or recompute.
    fn tick(&mut self) -> NavigationResult<Progress>;
    /// Everything known so far.
    fn maze(&self) -> &MazeState;
}

/// Summary of a call to [`run`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RunReport {
    /// Whether the mouse ended on a goal cell.
    pub arrived: bool,
    /// Ticks taken, successful or not.
    pub ticks: usize,
    /// Cells driven, summed over all moves.
    pub cells: usize,
    /// Ticks that recomputed instead of moving.
    pub recomputes: usize,
}

/// Tick `navigator` until the mouse stands on a goal cell or `max_ticks` ticks have passed.
///
/// Running out of ticks is not an error; check [`RunReport::arrived`].
pub fn run<N: Navigator + ?Sized>(navigator: &mut N, max_ticks: usize) -> NavigationResult<RunReport> {
    let mut report = RunReport::default();

    while report.ticks < max_ticks {
        if navigator.maze().at_goal() {
            break;
        }

        report.ticks += 1;
        match navigator.tick()? {
            Progress::Moved { cells, .. } => report.cells += cells,
            Progress::Recomputed => report.recomputes += 1,
        }
    }

    report.arrived = navigator.maze().at_goal();
    if report.arrived {
        info!(ticks = report.ticks, cells = report.cells, recomputes = report.recomputes,
            location = %navigator.maze().robot().location, "reached goal");
    } else {
        debug!(ticks = report.ticks, "tick budget spent before reaching goal");
    }

    Ok(report)
}

/// Turn the mouse the short way round to face `heading`, then drive one cell.
///
/// The facing is recorded as soon as the turn completes; the location only once the move does.
pub(crate) fn drive<M: Mouse + ?Sized>(mouse: &mut M, maze: &mut MazeState, heading: Heading) -> Result<Location, MouseError> {
    match maze.robot().heading.turn_to(heading) {
        Turn::None => {}
        Turn::Right => mouse.turn_right()?,
        Turn::Around => {
            mouse.turn_right()?;
            mouse.turn_right()?;
        }
        Turn::Left => mouse.turn_left()?,
    }
    maze.face(heading);

    mouse.move_forward()?;
    Ok(maze.advance(heading))
}
