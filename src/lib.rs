#![warn(missing_docs)]

//! # `flowtrace`
//!
//! Recovers the drawn flows of a solved [Numberlink](https://en.wikipedia.org/wiki/Numberlink) board, as posited in the mobile game Flow Free,
//! and reduces each one to the handful of points a finger has to pass through to draw it.
//!
//! Begin by building a board with a [`SquareBoardBuilder`], either from termini or from the rows a screen reader produced.
//! Install a solved annotation from an external solver with [`Board::annotate`], then call [`Board::swipes`],
//! consuming the board and yielding one [`Swipe`] (or the reason it could not be made) per color.
//!
//! # Internals
//! The solver marks every occupied cell with the color of its flow and a "pipe shape" naming the two sides of the cell the flow passes through,
//! as in [Matt Zucker's solution](https://mzucker.github.io/2016/09/02/eating-sat-flavored-crow.html).
//! Termini are marked with their color alone.
//!
//! Given that annotation, a flow is recovered by a walk:
//! 1. Find the two termini of the color, scanning column by column. The first found is the start.
//! 2. Consume the current cell, so it can never be entered again. Stop if it is the second terminus.
//! 3. Step to the one neighbor, trying up, left, down and right in that order, that belongs to the same flow, has not been consumed,
//! and whose shape opens towards the current cell. Repeat from 2.
//!
//! The walk never backtracks: a solved flow is a simple line, so at most one neighbor qualifies at every step.
//! If none does, the annotation is malformed and the walk fails instead of guessing.
//!
//! A walked path is then compressed to a [`Swipe`], keeping only its ends and the cells at which it turns.

pub use board::Board;
pub use builder::SquareBoardBuilder;
pub use cell::{Annotation, BaseCell, Color, BLANK};
pub use failure::{Malformation, TraceFailure};
pub use location::Location;
pub use solution::{Solution, Token};
pub use swipe::{compress, Swipe};
pub use tracer::{Path, Tracer};

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod failure;
pub(crate) mod location;
pub mod shape;
pub mod builder;
pub(crate) mod solution;
pub(crate) mod swipe;
pub(crate) mod tracer;
#[cfg(feature = "wasm")]
mod wasm;
