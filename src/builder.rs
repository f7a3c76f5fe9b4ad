use std::num::NonZero;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};

use crate::board::Board;
use crate::cell::{BaseCell, Color};
use crate::location::{Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A terminus was placed outside the bounds specified by `dims`.
    FeatureOutOfBounds,
    /// Rows given to [`SquareBoardBuilder::from_rows`] were not all the same length.
    RaggedRows,
    /// [`SquareBoardBuilder::from_rows`] was given no rows, or only empty ones.
    EmptyBoard,
}

/// A builder for rectangular boards with square cells, as found in Numberlink puzzles and Flow Free.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once invalid, a builder ignores every further change.
#[derive(Clone)]
pub struct SquareBoardBuilder {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<BaseCell>,
    // in the order added, for popping
    colors: Vec<Color>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for SquareBoardBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::new(5).unwrap(), NonZero::new(5).unwrap()))
    }
}

impl SquareBoardBuilder {
    /// Construct a new, blank [`Self`] with the specified dimensions, specified in `(x, y)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), BaseCell::default),
            colors: Default::default(),
            invalid_reasons: Default::default(),
        }
    }

    /// Construct a [`Self`] from the grid reader's output: one string per row, one symbol per cell, `.` for blank.
    ///
    /// Enters a [`RaggedRows`](BuilderInvalidReason::RaggedRows) or [`EmptyBoard`](BuilderInvalidReason::EmptyBoard) invalid state if the rows do not form a rectangle.
    pub fn from_rows(rows: &[&str]) -> Self {
        let symbols = rows.iter().map(|row| row.chars().collect_vec()).collect_vec();
        let width = symbols.first().map_or(0, Vec::len);

        let dims = match (NonZero::new(width), NonZero::new(symbols.len())) {
            (Some(width), Some(height)) => (width, height),
            _ => return Self::invalid(BuilderInvalidReason::EmptyBoard),
        };

        if symbols.iter().any(|row| row.len() != width) {
            return Self::invalid(BuilderInvalidReason::RaggedRows);
        }

        let mut builder = Self::with_dims(dims);
        builder.cells = Array2::from_shape_fn(builder.cells.raw_dim(), |(y, x)| BaseCell::from_symbol(symbols[y][x]));
        builder.colors = Board::new(dims, builder.cells.clone()).colors();

        builder
    }

    fn invalid(reason: BuilderInvalidReason) -> Self {
        let mut builder = Self::default();
        builder.invalid_reasons.push(reason);
        builder
    }

    /// Add termini, or "flow endpoints". The order in which `locations` are specified does not matter;
    /// the tracer always starts from whichever comes first scanning column by column.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if either location is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_termini(&mut self, color: Color, locations: (Location, Location)) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        for location in [locations.0, locations.1] {
            if !location.within(self.dims) {
                self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
                return self;
            }
        }

        self.colors.push(color);
        for location in [locations.0, locations.1] {
            self.cells[location.as_index()].assign_elem(BaseCell::Terminus { color })
        }

        self
    }

    /// Remove the most recently added pair of termini.
    ///
    /// If the builder is in an invalid state or no termini are present, this function does nothing.
    pub fn pop_termini(&mut self) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if let Some(to_remove) = self.colors.pop() {
            self.cells.map_inplace(|cell| if *cell == (BaseCell::Terminus { color: to_remove }) {
                cell.assign_elem(BaseCell::Blank);
            })
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into an unannotated [`Board`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Board::new(self.dims, self.cells.clone()))
    }
}
