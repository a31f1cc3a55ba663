use ndarray::Array2;

use crate::location::{Dimension, Location};

/// Hop count from a cell to the goal region.
pub type Distance = u32;

/// Per-cell distance to the goal under the currently known walls.
///
/// Cells the flood fill cannot reach hold [`DistanceField::unreachable`], which is larger than any real distance in a maze of this size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    cells: Array2<Distance>,
    unreachable: Distance,
}

impl DistanceField {
    /// A field for a maze of `dims` (width, height) with every cell unreachable.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        // a shortest path visits each cell at most once, so width * height can never be a real distance
        let unreachable = Distance::try_from(dims.0.get() * dims.1.get()).unwrap_or(Distance::MAX);
        Self {
            cells: Array2::from_elem((dims.1.get(), dims.0.get()), unreachable),
            unreachable,
        }
    }

    /// The sentinel marking a cell with no known route to the goal.
    pub fn unreachable(&self) -> Distance {
        self.unreachable
    }

    /// Distance stored for `location`; out-of-bounds cells read as unreachable.
    pub fn get(&self, location: Location) -> Distance {
        self.cells.get(location.as_index()).copied().unwrap_or(self.unreachable)
    }

    pub(crate) fn set(&mut self, location: Location, distance: Distance) {
        if let Some(cell) = self.cells.get_mut(location.as_index()) {
            *cell = distance;
        }
    }

    pub(crate) fn reset(&mut self) {
        self.cells.fill(self.unreachable);
    }

    /// Whether `location` has a known route to the goal.
    pub fn is_reachable(&self, location: Location) -> bool {
        self.get(location) < self.unreachable
    }

    /// All cells with their distances, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, Distance)> + '_ {
        self.cells.indexed_iter().map(|(index, distance)| (Location::from(index), *distance))
    }

    /// Number of cells in the field.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; fields cover at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
