use ndarray::Array2;
use unordered_pair::UnorderedPair;

use crate::heading::Heading;
use crate::location::{Dimension, Location};

/// Which of a cell's two owned boundaries a wall sits on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Orientation {
    /// The boundary toward the next row, i.e. on the north side of the owning cell.
    Horizontal,
    /// The boundary toward the next column, i.e. on the east side of the owning cell.
    Vertical,
}

/// The known walls of a maze.
///
/// Every interior boundary is owned by exactly one of its two cells: the southern or western one.
/// The outer boundary is never stored; queries against it always report a wall.
/// Walls are only ever added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallStore {
    dims: (Dimension, Dimension),
    // indexed (y, x) like every other grid in this crate
    horizontal: Array2<bool>,
    vertical: Array2<bool>,
}

impl WallStore {
    /// An empty maze of `dims` (width, height), walled only on the outside.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        let shape = (dims.1.get(), dims.0.get());
        Self {
            dims,
            horizontal: Array2::from_elem(shape, false),
            vertical: Array2::from_elem(shape, false),
        }
    }

    /// Dimensions of the maze, `(width, height)`.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    fn layer(&self, orientation: Orientation) -> &Array2<bool> {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    /// Whether the boundary of the given `orientation` owned by `location` is walled.
    ///
    /// The outward boundaries of the last row and column are implicitly walled, as is anything out of bounds.
    pub fn has_wall(&self, location: Location, orientation: Orientation) -> bool {
        if !location.within(self.dims) {
            return true;
        }

        let on_edge = match orientation {
            Orientation::Horizontal => location.1 + 1 == self.dims.1.get(),
            Orientation::Vertical => location.0 + 1 == self.dims.0.get(),
        };

        on_edge || self.layer(orientation)[location.as_index()]
    }

    /// Record a wall. Returns `true` if it was not already known.
    ///
    /// Out-of-bounds and outer-edge boundaries are already walls, so recording them changes nothing.
    pub fn set_wall(&mut self, location: Location, orientation: Orientation) -> bool {
        if self.has_wall(location, orientation) {
            return false;
        }

        let layer = match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        };
        layer[location.as_index()] = true;
        true
    }

    /// The cell owning the boundary on the `heading` side of `location`, and the boundary's orientation.
    ///
    /// Returns [`None`] when that side is the outside of the maze.
    pub fn boundary(&self, location: Location, heading: Heading) -> Option<(Location, Orientation)> {
        let neighbor = heading.attempt_from(location);
        if !location.within(self.dims) || !neighbor.within(self.dims) {
            return None;
        }

        Some(match heading {
            Heading::North => (location, Orientation::Horizontal),
            Heading::East => (location, Orientation::Vertical),
            Heading::South => (neighbor, Orientation::Horizontal),
            Heading::West => (neighbor, Orientation::Vertical),
        })
    }

    /// Whether a wall is known on the `heading` side of `location`.
    pub fn is_walled(&self, location: Location, heading: Heading) -> bool {
        match self.boundary(location, heading) {
            None => true,
            Some((owner, orientation)) => self.has_wall(owner, orientation),
        }
    }

    /// Record a wall on the `heading` side of `location`. Returns `true` if it was not already known.
    pub fn wall_off(&mut self, location: Location, heading: Heading) -> bool {
        match self.boundary(location, heading) {
            None => false,
            Some((owner, orientation)) => self.set_wall(owner, orientation),
        }
    }

    /// The neighbor on the `heading` side of `location`, if it exists and no wall is known in between.
    pub fn passage(&self, location: Location, heading: Heading) -> Option<Location> {
        match self.is_walled(location, heading) {
            true => None,
            false => Some(heading.attempt_from(location)),
        }
    }

    /// Number of recorded interior walls.
    pub fn wall_count(&self) -> usize {
        self.horizontal.iter().chain(self.vertical.iter()).filter(|wall| **wall).count()
    }

    /// Record a wall between two adjacent cells. Returns `true` if it was not already known.
    ///
    /// Non-adjacent pairs are ignored.
    pub fn disconnect(&mut self, cells: UnorderedPair<Location>) -> bool {
        match Heading::between(cells.0, cells.1) {
            None => false,
            Some(heading) => self.wall_off(cells.0, heading),
        }
    }

    /// Draw the maze as ASCII art, three characters per cell interior, filled by `label`.
    ///
    /// ```text
    /// +---+---+
    /// | 1   0 |
    /// +   +---+
    /// | 2 |   |
    /// +---+---+
    /// ```
    pub(crate) fn draw(&self, label: impl Fn(Location) -> String) -> String {
        let (width, height) = (self.dims.0.get(), self.dims.1.get());
        let mut out = String::with_capacity((2 * height + 1) * (4 * width + 2));

        // north is up, so the top line is the outer wall above the last row
        for x in 0..width {
            out.push_str(if self.is_walled(Location(x, height - 1), Heading::North) { "+---" } else { "+   " });
        }
        out.push_str("+\n");

        for y in (0..height).rev() {
            for x in 0..width {
                out.push(if self.is_walled(Location(x, y), Heading::West) { '|' } else { ' ' });
                out.push_str(&label(Location(x, y)));
            }
            out.push_str("|\n");

            for x in 0..width {
                out.push_str(if self.is_walled(Location(x, y), Heading::South) { "+---" } else { "+   " });
            }
            out.push_str("+\n");
        }

        out
    }
}
