use itertools::Itertools;
use log::debug;
use serde::Serialize;

use crate::cell::Color;
use crate::failure::TraceFailure;
use crate::location::Location;
use crate::tracer::Path;

/// The waypoints of a single drag that redraws a flow: its first terminus, every cell where the drag turns, and its second terminus.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Swipe {
    pub(crate) color: Color,
    pub(crate) waypoints: Vec<Location>,
}

impl Swipe {
    /// The color of the flow this swipe draws.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The waypoints, in drag order.
    pub fn waypoints(&self) -> &[Location] {
        &self.waypoints
    }

    /// Each straight segment of the drag as a `(from, to)` pair.
    pub fn segments(&self) -> impl Iterator<Item = (Location, Location)> + '_ {
        self.waypoints.iter().copied().tuple_windows()
    }

    /// Walk each segment cell by cell, recovering the full path the swipe was compressed from.
    pub fn replay(&self) -> Vec<Location> {
        let mut cells = Vec::with_capacity(self.waypoints.len());
        cells.extend(self.waypoints.first());

        for (Location(x0, y0), Location(x1, y1)) in self.segments() {
            // segments are axis-aligned, so one of these ranges is a single value
            let xs = if x0 <= x1 { (x0..=x1).collect_vec() } else { (x1..=x0).rev().collect_vec() };
            let ys = if y0 <= y1 { (y0..=y1).collect_vec() } else { (y1..=y0).rev().collect_vec() };

            cells.extend(xs.into_iter()
                .cartesian_product(ys)
                .skip(1)
                .map(|(x, y)| Location(x, y)));
        }

        cells
    }
}

/// Collapse each straight run of `path` into its two ends, yielding the [`Swipe`] that redraws it.
///
/// A turn at some cell shows up as the movement axis changing between the step into that cell and the step out of it,
/// so one pass comparing consecutive steps finds every turn.
/// A path of `k` turns compresses to `k + 2` waypoints.
///
/// Fails with [`DegenerateColor`](TraceFailure::DegenerateColor) if `path` has fewer than two cells.
pub fn compress(path: &Path) -> Result<Swipe, TraceFailure> {
    let cells = path.cells();
    let (first, second, last) = match (cells.first(), cells.get(1), cells.last()) {
        (Some(first), Some(second), Some(last)) => (*first, *second, *last),
        _ => return Err(TraceFailure::DegenerateColor(path.color())),
    };

    let mut waypoints = vec![first];
    let mut vertical = first.shares_column_with(second);

    for (previous, current) in cells.iter().tuple_windows() {
        if previous.shares_column_with(*current) != vertical {
            waypoints.push(*previous);
            vertical = !vertical;
        }
    }

    waypoints.push(last);
    debug!("compressed {:?} from {} cells to {} waypoints", path.color(), cells.len(), waypoints.len());

    Ok(Swipe { color: path.color(), waypoints })
}
