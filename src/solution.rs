use itertools::Itertools;
use ndarray::Array2;
use serde::Deserialize;

use crate::cell::{Color, BLANK};
use crate::failure::Malformation;
use crate::location::Location;
use crate::shape::PipeShape;

/// One solved cell, as the oracle reports it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token {
    /// The flow occupying the cell.
    pub color: Color,
    /// How the flow passes through the cell.
    pub shape: PipeShape,
}

impl Token {
    // "R3", "b12", "G-1"; the blank symbol means no data
    fn parse(at: Location, text: &str) -> Result<Option<Self>, Malformation> {
        let text = text.trim();
        let mut chars = text.chars();
        let color = match chars.next() {
            None => return Ok(None),
            Some(BLANK) if chars.as_str().is_empty() => return Ok(None),
            Some(color) => color,
        };

        let bad_token = || Malformation::BadToken { at, token: text.to_string() };
        // the code must be written exactly as the oracle writes it, so no "+3" or "03"
        let digits = chars.as_str();
        let shape = digits.parse::<i8>()
            .ok()
            .and_then(PipeShape::from_code)
            .filter(|shape| shape.code().to_string() == digits)
            .ok_or_else(bad_token)?;

        Ok(Some(Self { color, shape }))
    }
}

// the oracle emits either ["R", 3] pairs or "R3" strings, with null for cells it leaves alone
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonToken {
    Pair(Color, i8),
    Text(String),
}

/// The oracle's solved annotation of a board: a token, or nothing, for every cell.
///
/// Install it onto a board with [`Board::annotate`](crate::Board::annotate).
#[derive(Clone, Debug)]
pub struct Solution {
    pub(crate) tokens: Array2<Option<Token>>,
}

impl Solution {
    /// Read a solution from rows of whitespace-separated tokens, such as `"R3 R9"` and `". R12"`.
    pub fn from_token_rows(rows: &[&str]) -> Result<Self, Malformation> {
        let parsed = rows.iter()
            .enumerate()
            .map(|(y, row)| row.split_whitespace()
                .enumerate()
                .map(|(x, text)| Token::parse(Location(x, y), text))
                .collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(parsed)
    }

    /// Read a solution from the oracle's JSON output: an array of rows, each an array of `["R", 3]` pairs, `"R3"` strings or `null`.
    pub fn from_json(json: &str) -> Result<Self, Malformation> {
        let rows: Vec<Vec<Option<JsonToken>>> = serde_json::from_str(json)
            .map_err(|e| Malformation::Unparseable(e.to_string()))?;

        let parsed = rows.into_iter()
            .enumerate()
            .map(|(y, row)| row.into_iter()
                .enumerate()
                .map(|(x, token)| {
                    let at = Location(x, y);
                    match token {
                        None => Ok(None),
                        Some(JsonToken::Text(text)) => Token::parse(at, &text),
                        Some(JsonToken::Pair(color, code)) => PipeShape::from_code(code)
                            .map(|shape| Some(Token { color, shape }))
                            .ok_or_else(|| Malformation::BadToken { at, token: format!("{color}{code}") }),
                    }
                })
                .collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(parsed)
    }

    fn from_rows(rows: Vec<Vec<Option<Token>>>) -> Result<Self, Malformation> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((y, row)) = rows.iter().find_position(|row| row.len() != width) {
            return Err(Malformation::Unparseable(format!("row {y} has {} cells, expected {width}", row.len())));
        }

        let tokens = Array2::from_shape_vec((height, width), rows.into_iter().flatten().collect_vec())
            .map_err(|e| Malformation::Unparseable(e.to_string()))?;

        Ok(Self { tokens })
    }

    /// The size of the solution, `(width, height)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.tokens.ncols(), self.tokens.nrows())
    }

    /// The token at `location`, if the solution has one there.
    pub fn token(&self, location: Location) -> Option<Token> {
        self.tokens.get(location.as_index()).copied().flatten()
    }
}
