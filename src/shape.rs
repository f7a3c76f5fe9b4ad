use strum::VariantArray;

use crate::location::Location;

/// A single step between edge-adjacent cells of a square board.
///
/// Variants are declared in the order the tracer tries them: [`Up`](SquareStep::Up), [`Left`](SquareStep::Left), [`Down`](SquareStep::Down), [`Right`](SquareStep::Right).
/// On a well-formed solution at most one neighbor ever qualifies, so the order only decides which neighbor wins on a malformed one.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Towards row 0.
    Up,
    /// Towards column 0.
    Left,
    /// Away from row 0.
    Down,
    /// Away from column 0.
    Right,
}

impl SquareStep {
    /// Attempt the step from `location` and return the resultant [`Location`], which may lie off the board.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Down => location.offset_by((0, 1)),
            Self::Right => location.offset_by((1, 0)),
        }
    }

    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Left => Self::Right,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
        }
    }

    // side bits as the oracle numbers them
    fn bit(&self) -> i8 {
        match self {
            Self::Left => 1,
            Self::Right => 2,
            Self::Up => 4,
            Self::Down => 8,
        }
    }
}

/// The shape a flow takes through one cell, named by the two sides of the cell it occupies.
///
/// The oracle encodes these as a bitmask of sides (left 1, right 2, top 4, bottom 8), plus `-1` for a terminus.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug)]
pub enum PipeShape {
    /// `─`, code 3.
    LeftRight,
    /// `┘`, code 5.
    TopLeft,
    /// `└`, code 6.
    TopRight,
    /// `┐`, code 9.
    BottomLeft,
    /// `┌`, code 10.
    BottomRight,
    /// `│`, code 12.
    TopBottom,
    /// A flow endpoint, code -1. The flow may arrive from any side.
    Terminus,
}

impl PipeShape {
    /// Look up the shape for an oracle shape code.
    pub fn from_code(code: i8) -> Option<Self> {
        Self::VARIANTS.iter().find(|shape| shape.code() == code).copied()
    }

    /// The oracle shape code for `self`.
    pub fn code(&self) -> i8 {
        match self {
            Self::LeftRight => 3,
            Self::TopLeft => 5,
            Self::TopRight => 6,
            Self::BottomLeft => 9,
            Self::BottomRight => 10,
            Self::TopBottom => 12,
            Self::Terminus => -1,
        }
    }

    /// Whether the flow leaves this cell through the side `step` points at.
    pub fn exits(&self, step: SquareStep) -> bool {
        match self {
            Self::Terminus => true,
            _ => self.code() & step.bit() != 0,
        }
    }

    /// Whether a flow moving in direction `step` may enter a cell of this shape.
    ///
    /// Moving [`Up`](SquareStep::Up) into a cell enters through its bottom side, and so on.
    pub fn accepts(&self, step: SquareStep) -> bool {
        self.exits(step.invert())
    }

    // termini print as their color instead
    pub(crate) fn glyph(&self) -> Option<char> {
        match self {
            Self::LeftRight => Some('─'),
            Self::TopLeft => Some('┘'),
            Self::TopRight => Some('└'),
            Self::BottomLeft => Some('┐'),
            Self::BottomRight => Some('┌'),
            Self::TopBottom => Some('│'),
            Self::Terminus => None,
        }
    }
}
