use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::location::Location;

/// The four cardinal directions a mouse can face or step in.
///
/// North points toward increasing `y`, away from the bottom-left origin of [`Location`].
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    /// `y + 1`
    North,
    /// `x + 1`
    #[default]
    East,
    /// `y - 1`
    South,
    /// `x - 1`
    West,
}

impl Heading {
    /// Neighbor expansion order used by the flood fill.
    pub const FLOOD_ORDER: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];
    /// Neighbor preference order used when deciding where to move.
    ///
    /// This is a fixed policy and not derived from distances; changing it changes which of several equally good cells the mouse picks.
    pub const DECISION_ORDER: [Self; 4] = [Self::South, Self::East, Self::West, Self::North];

    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may lie outside the maze, including wrapping past zero; bounds are the caller's concern.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::North => location.offset_by((0, 1)),
            Self::East => location.offset_by((1, 0)),
            Self::South => location.offset_by((0, -1)),
            Self::West => location.offset_by((-1, 0)),
        }
    }

    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// The heading after a 90° clockwise turn.
    pub fn right(&self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The heading after a 90° counterclockwise turn.
    pub fn left(&self) -> Self {
        self.right().invert()
    }

    /// The cheapest rotation taking a mouse facing `self` to face `target`.
    pub fn turn_to(&self, target: Heading) -> Turn {
        if *self == target {
            Turn::None
        } else if self.right() == target {
            Turn::Right
        } else if self.invert() == target {
            Turn::Around
        } else {
            Turn::Left
        }
    }

    /// Determine the direction from `a` to `b`, if they are adjacent.
    pub fn between(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }

    /// Single-letter tag used when marking walls on an external display.
    pub fn letter(&self) -> char {
        match self {
            Self::North => 'n',
            Self::East => 'e',
            Self::South => 's',
            Self::West => 'w',
        }
    }
}

/// A side of the mouse, relative to where it faces.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug)]
#[allow(missing_docs)]
pub enum Side {
    Left,
    Front,
    Right,
}

/// A rotation the mouse can perform in place.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Turn {
    /// Already facing the right way.
    None,
    /// +90°
    Right,
    /// 180°, performed as two right turns.
    Around,
    /// -90°
    Left,
}
