use std::collections::VecDeque;

use tracing::trace;

use crate::distance::DistanceField;
use crate::goal::GoalRegion;
use crate::heading::Heading;
use crate::walls::WallStore;

/// Recompute `field` from scratch as the breadth-first distance from `goal` through every boundary not known to be walled.
///
/// Unknown boundaries count as open, so the result is an optimistic estimate that only grows as walls are discovered.
/// Cells sealed off by known walls keep the sentinel distance.
///
/// Runs in O(width × height) time; the work queue holds each cell at most once.
/// Returns the number of cells reached, goal cells included.
pub fn flood(walls: &WallStore, goal: &GoalRegion, field: &mut DistanceField) -> usize {
    field.reset();

    let mut frontier = VecDeque::with_capacity(field.len());
    for &cell in goal.cells() {
        field.set(cell, 0);
        frontier.push_back(cell);
    }

    let mut reached = frontier.len();
    while let Some(current) = frontier.pop_front() {
        let next = field.get(current) + 1;
        for heading in Heading::FLOOD_ORDER {
            let Some(neighbor) = walls.passage(current, heading) else {
                continue;
            };
            // BFS order means the first assignment is already the shortest, so this also rules out revisits
            if field.get(neighbor) > next {
                field.set(neighbor, next);
                frontier.push_back(neighbor);
                reached += 1;
            }
        }
    }

    trace!(reached, walls = walls.wall_count(), "flood fill complete");
    reached
}
