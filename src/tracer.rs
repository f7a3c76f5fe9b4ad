use itertools::Itertools;
use log::{trace, warn};
use serde::Serialize;
use strum::VariantArray;

use crate::board::Board;
use crate::cell::{Annotation, Color};
use crate::failure::{Malformation, TraceFailure};
use crate::location::Location;
use crate::shape::{PipeShape, SquareStep};

/// The cells one flow covers, in order from its first terminus to its second.
///
/// Consecutive cells are edge-adjacent and no cell appears twice.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Path {
    pub(crate) color: Color,
    pub(crate) cells: Vec<Location>,
}

impl Path {
    /// The color of the flow this path belongs to.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The cells of this path, terminus to terminus.
    pub fn cells(&self) -> &[Location] {
        &self.cells
    }
}

/// Walks one flow through a board's annotation.
///
/// Every cell is consumed as it is entered, which both records progress and keeps the walk from turning back on itself.
/// Each step therefore makes the board strictly smaller, and the walk ends within `width * height` steps.
pub struct Tracer<'a> {
    board: &'a mut Board,
    color: Color,
    start: Location,
    end: Location,
}

impl<'a> Tracer<'a> {
    /// Prepare to trace `color` on `board`, failing unless the board holds exactly two termini of that color.
    pub fn new(board: &'a mut Board, color: Color) -> Result<Self, TraceFailure> {
        let termini = board.termini(color);
        let (start, end) = termini.iter()
            .copied()
            .collect_tuple()
            .ok_or(Malformation::TerminusCount { color, found: termini.len() })?;

        Ok(Self { board, color, start, end })
    }

    // a neighbor qualifies if it is an unwalked cell of this flow that opens towards us
    fn qualifies(&self, step: SquareStep, neighbor: Location) -> bool {
        match self.board.annotation(neighbor) {
            Ok(Annotation::Shaped { color, shape }) => color == self.color && shape.accepts(step),
            // consumed, unsolved, or off the board
            _ => false,
        }
    }

    // `through` is the current cell's shape; a cell with none leads nowhere
    fn successor(&self, current: Location, through: Option<PipeShape>) -> Option<Location> {
        let mut candidates = SquareStep::VARIANTS.iter()
            .filter(|step| through.is_some_and(|shape| shape.exits(**step)))
            .map(|step| (*step, step.attempt_from(current)))
            .filter(|(step, neighbor)| self.qualifies(*step, *neighbor));

        let (step, next) = candidates.next()?;
        let others = candidates.map(|(_, other)| other).collect_vec();
        if !others.is_empty() {
            warn!("{:?} branches at {}; stepping {:?} to {} over {:?}", self.color, current, step, next, others);
        }

        Some(next)
    }

    /// Walk from the first terminus to the second, consuming the cells on the way.
    ///
    /// Each step leaves through a side the current cell's shape opens on and enters through a side the next cell's shape opens on.
    /// Fails with a [`DeadEnd`](Malformation::DeadEnd) if the walk strands before reaching the second terminus.
    pub fn walk(mut self) -> Result<Path, TraceFailure> {
        let mut cells = vec![self.start];
        let mut current = self.start;

        loop {
            let through = match self.board.annotation(current)? {
                Annotation::Shaped { shape, .. } => Some(shape),
                _ => None,
            };
            self.board.consume(current)?;

            if current == self.end {
                return Ok(Path { color: self.color, cells });
            }

            current = self.successor(current, through)
                .ok_or(Malformation::DeadEnd { color: self.color, at: current })?;
            trace!("{:?} steps to {}", self.color, current);
            cells.push(current);
        }
    }
}
