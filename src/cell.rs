use crate::shape::PipeShape;

/// A flow color, written as the single symbol the grid reader and the oracle agree on.
pub type Color = char;

/// The symbol for a cell with no terminus on it.
pub const BLANK: char = '.';

/// A cell of the unsolved board, as read from the screen.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum BaseCell {
    /// One of the two endpoints of the flow with this color.
    Terminus {
        /// The flow this endpoint belongs to.
        color: Color,
    },
    /// No terminus; the oracle decides which flow, if any, passes through.
    #[default]
    Blank,
}

impl BaseCell {
    pub(crate) fn from_symbol(symbol: char) -> Self {
        match symbol {
            BLANK => Self::Blank,
            color => Self::Terminus { color },
        }
    }

    pub(crate) fn symbol(&self) -> char {
        match self {
            Self::Terminus { color } => *color,
            Self::Blank => BLANK,
        }
    }
}

/// The solved state of one cell.
///
/// [`Unsolved`](Annotation::Unsolved) (the oracle said nothing about this cell) and [`Consumed`](Annotation::Consumed) (a trace already passed through) are deliberately distinct,
/// so a hole in the oracle's output is never mistaken for a visited cell.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Annotation {
    /// The oracle reported nothing for this cell.
    #[default]
    Unsolved,
    /// Occupied by the flow of `color`, passing through the cell as `shape`.
    Shaped {
        /// The flow occupying the cell.
        color: Color,
        /// How the flow passes through the cell.
        shape: PipeShape,
    },
    /// Occupied by the flow of `color` and already walked by a trace.
    Consumed {
        /// The flow that was walked.
        color: Color,
    },
}
