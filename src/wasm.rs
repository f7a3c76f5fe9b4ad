use std::collections::BTreeMap;

use itertools::Itertools;
use wasm_bindgen::prelude::*;

use crate::builder::SquareBoardBuilder;
use crate::location::Location;
use crate::solution::Solution;

/// Compute the swipes for a board and its solved annotation.
///
/// `board` holds one row of symbols per line; `solution` is the solver's JSON output.
/// Returns a JSON object mapping each color to its waypoints as `[x, y]` pairs.
/// Fails on the first flow that cannot be traced, since a partially drawn board is of no use to the page.
#[wasm_bindgen]
pub fn swipes(board: &str, solution: &str) -> Result<String, JsError> {
    let rows = board.lines().map(str::trim).filter(|row| !row.is_empty()).collect_vec();
    let mut board = SquareBoardBuilder::from_rows(&rows)
        .build()
        .map_err(|reasons| JsError::new(&format!("invalid board: {:?}", reasons)))?;
    board.annotate(Solution::from_json(solution)?)?;

    let mut out: BTreeMap<String, Vec<Location>> = BTreeMap::new();
    for (color, swipe) in board.swipes() {
        out.insert(color.to_string(), swipe?.waypoints);
    }

    Ok(serde_json::to_string(&out)?)
}
