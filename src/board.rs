use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::{debug, warn};
use ndarray::Array2;

use crate::cell::{Annotation, BaseCell, Color};
use crate::failure::{Malformation, TraceFailure};
use crate::location::{Dimension, Location};
use crate::solution::Solution;
use crate::swipe::{compress, Swipe};
use crate::tracer::{Path, Tracer};

/// A rectangular board: the termini read off the screen, plus the oracle's annotation once one is installed.
///
/// [`Board`]s should be built using a [`SquareBoardBuilder`](crate::builder::SquareBoardBuilder).
/// Tracing consumes the annotation, so each board traces each flow once.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) cells: Array2<BaseCell>,
    pub(crate) annotations: Array2<Annotation>,
}

impl Board {
    pub(crate) fn new(dims: (Dimension, Dimension), cells: Array2<BaseCell>) -> Self {
        Self {
            dims,
            annotations: Array2::from_elem(cells.raw_dim(), Annotation::Unsolved),
            cells,
        }
    }

    /// The size of this board, `(width, height)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.dims.0.get(), self.dims.1.get())
    }

    fn check(&self, location: Location) -> Result<(usize, usize), TraceFailure> {
        match location.within(self.dims) {
            true => Ok(location.as_index()),
            false => Err(TraceFailure::OutOfBounds(location)),
        }
    }

    /// The unsolved content of the cell at `location`.
    pub fn cell(&self, location: Location) -> Result<BaseCell, TraceFailure> {
        Ok(self.cells[self.check(location)?])
    }

    /// The current annotation of the cell at `location`, reflecting any consumption so far.
    pub fn annotation(&self, location: Location) -> Result<Annotation, TraceFailure> {
        Ok(self.annotations[self.check(location)?])
    }

    /// Mark the cell at `location` as walked. Consuming a cell twice, or a cell without an annotation, does nothing.
    pub fn consume(&mut self, location: Location) -> Result<(), TraceFailure> {
        let index = self.check(location)?;
        if let Annotation::Shaped { color, .. } = self.annotations[index] {
            self.annotations[index] = Annotation::Consumed { color };
        }

        Ok(())
    }

    /// Every terminus of `color`, scanning column by column from the left and each column from the top.
    ///
    /// The first terminus found is where the trace starts.
    pub fn termini(&self, color: Color) -> Vec<Location> {
        self.scan()
            .filter(|location| self.cells[location.as_index()] == BaseCell::Terminus { color })
            .collect_vec()
    }

    /// Each distinct terminus color on the board, in the order [`Self::termini`] would first find it.
    pub fn colors(&self) -> Vec<Color> {
        self.scan()
            .filter_map(|location| match self.cells[location.as_index()] {
                BaseCell::Terminus { color } => Some(color),
                BaseCell::Blank => None,
            })
            .unique()
            .collect_vec()
    }

    // column-major: outer loop over x, inner loop over y
    fn scan(&self) -> impl Iterator<Item = Location> {
        (0..self.dims.0.get()).cartesian_product(0..self.dims.1.get())
            .map(|(x, y)| Location(x, y))
    }

    /// Install the oracle's `solution`, replacing any annotation already present.
    ///
    /// The solution must match the board's size and carry a same-colored token on every terminus.
    /// Tokens on blank cells are taken as given; they are checked only as the tracer walks them.
    pub fn annotate(&mut self, solution: Solution) -> Result<&mut Self, TraceFailure> {
        if solution.dims() != self.dims() {
            return Err(Malformation::DimensionMismatch { expected: self.dims(), found: solution.dims() }.into());
        }

        for (index, cell) in self.cells.indexed_iter() {
            let at = Location::from(index);
            let token = solution.token(at);

            if let BaseCell::Terminus { color: expected } = cell {
                match token {
                    None => return Err(Malformation::MissingToken { at }.into()),
                    Some(token) if token.color != *expected => return Err(Malformation::ColorMismatch {
                        at,
                        expected: *expected,
                        found: token.color,
                    }.into()),
                    Some(_) => {}
                }
            }
        }

        self.annotations = solution.tokens.map(|token| match token {
            None => Annotation::Unsolved,
            Some(token) => Annotation::Shaped { color: token.color, shape: token.shape },
        });

        Ok(self)
    }

    /// Walk the annotation from the first terminus of `color` to the second, consuming every cell on the way.
    ///
    /// Returns according to the result of [`Tracer::walk`].
    pub fn trace(&mut self, color: Color) -> Result<Path, TraceFailure> {
        let path = Tracer::new(self, color)?.walk()?;
        debug!("traced {:?} through {} cells", color, path.cells().len());

        Ok(path)
    }

    /// Trace every flow on the board, in the order of [`Self::colors`], consuming the board.
    pub fn paths(mut self) -> Vec<(Color, Result<Path, TraceFailure>)> {
        self.colors().into_iter()
            .map(|color| (color, self.trace(color)))
            .inspect(|(color, result)| if let Err(failure) = result {
                warn!("could not trace {:?}: {}", color, failure);
            })
            .collect_vec()
    }

    /// Trace and compress every flow on the board, consuming the board.
    pub fn swipes(self) -> Vec<(Color, Result<Swipe, TraceFailure>)> {
        self.paths().into_iter()
            .map(|(color, path)| (color, path.and_then(|path| compress(&path))))
            .collect_vec()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.cells.nrows() * (self.cells.ncols() + 1));

        for (cells, annotations) in self.cells.rows().into_iter().zip(self.annotations.rows()) {
            for (cell, annotation) in cells.iter().zip(annotations.iter()) {
                out.push(match (cell, annotation) {
                    (BaseCell::Terminus { .. }, _) => cell.symbol(),
                    (_, Annotation::Shaped { color, shape }) => shape.glyph().unwrap_or(*color),
                    (_, Annotation::Consumed { color }) => *color,
                    (_, Annotation::Unsolved) => cell.symbol(),
                });
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
