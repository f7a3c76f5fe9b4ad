use thiserror::Error;

use crate::cell::Color;
use crate::location::Location;

/// Reasons tracing or compressing a flow may fail.
///
/// Failures are reported per color; whether one failed color abandons the whole board is up to the caller.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TraceFailure {
    /// A lookup fell outside the board.
    #[error("{0} is outside the board")]
    OutOfBounds(Location),
    /// The oracle's solution does not describe a single simple path for some flow.
    #[error("malformed solution: {0}")]
    MalformedSolution(Malformation),
    /// A flow's path covers a single cell, so there is nothing to swipe.
    #[error("flow {0:?} collapses to a single cell")]
    DegenerateColor(Color),
}

/// What exactly is wrong with a [`MalformedSolution`](TraceFailure::MalformedSolution).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Malformation {
    /// The board does not hold exactly two termini of this color.
    #[error("flow {color:?} has {found} termini")]
    TerminusCount {
        /// The flow in question.
        color: Color,
        /// How many termini of `color` the board holds.
        found: usize,
    },
    /// The walk reached a cell with no qualifying successor before reaching the far terminus.
    #[error("flow {color:?} dead-ends at {at}")]
    DeadEnd {
        /// The flow being walked.
        color: Color,
        /// The last cell reached.
        at: Location,
    },
    /// A cell with a terminus on it has no token in the solution.
    #[error("no token for terminus at {at}")]
    MissingToken {
        /// The terminus without a token.
        at: Location,
    },
    /// A token could not be read, or names an unknown shape code.
    #[error("unreadable token {token:?} at {at}")]
    BadToken {
        /// Where the token was read.
        at: Location,
        /// The token as written.
        token: String,
    },
    /// A terminus is claimed by a different color in the solution.
    #[error("terminus {expected:?} at {at} is annotated as {found:?}")]
    ColorMismatch {
        /// The terminus in question.
        at: Location,
        /// The terminus's color on the board.
        expected: Color,
        /// The color the solution gives it.
        found: Color,
    },
    /// The solution and the board disagree on size, both given as `(width, height)`.
    #[error("solution is {found:?} but the board is {expected:?}")]
    DimensionMismatch {
        /// The board's size.
        expected: (usize, usize),
        /// The solution's size.
        found: (usize, usize),
    },
    /// The solution is not valid JSON of the expected layout.
    #[error("{0}")]
    Unparseable(String),
}

impl From<Malformation> for TraceFailure {
    fn from(value: Malformation) -> Self {
        Self::MalformedSolution(value)
    }
}
