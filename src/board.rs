//! Letter grid model.
//!
//! A board is a row-major sequence of tiles. A tile is an opaque text token,
//! usually one letter, occasionally the `Qu` digraph. Matching always treats
//! a tile as a unit but compares its characters against the text being
//! spelled.

use crate::error::SearchError;
use std::fmt;

/// Tile text used for a lone `Q` face.
pub const DIGRAPH_TILE: &str = "Qu";

/// An immutable `rows x cols` grid of tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    tiles: Vec<String>,
    /// Lower-cased tile text, the form every search compares against.
    keys: Vec<String>,
}

impl Board {
    /// Build a board from a flat, row-major tile sequence.
    pub fn new<S: Into<String>>(
        rows: usize,
        cols: usize,
        tiles: Vec<S>,
    ) -> Result<Self, SearchError> {
        let tiles: Vec<String> = tiles.into_iter().map(Into::into).collect();
        if rows == 0 || cols == 0 || rows.checked_mul(cols) != Some(tiles.len()) {
            return Err(SearchError::shape(rows, cols, tiles.len()));
        }
        if let Some(index) = tiles.iter().position(|t| t.is_empty()) {
            return Err(SearchError::EmptyTile { index });
        }

        let keys = tiles.iter().map(|t| t.to_lowercase()).collect();
        Ok(Self {
            rows,
            cols,
            tiles,
            keys,
        })
    }

    /// Build a board from nested rows, e.g. `[["A", "B"], ["C", "D"]]`.
    pub fn from_rows<R, S>(rows: &[R]) -> Result<Self, SearchError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut tiles = Vec::new();
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                let count = rows.iter().map(|r| r.as_ref().len()).sum();
                return Err(SearchError::shape(height, width, count));
            }
            tiles.extend(row.iter().map(|t| t.as_ref().to_string()));
        }
        Self::new(height, width, tiles)
    }

    /// Parse a textual board.
    ///
    /// Rows are separated by `/` or newlines. A row containing whitespace is
    /// split on whitespace, otherwise every character is one tile. A single
    /// `Q` becomes the [`DIGRAPH_TILE`].
    pub fn parse(text: &str) -> Result<Self, SearchError> {
        let rows: Vec<Vec<String>> = text
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .map(|row| -> Vec<String> {
                if row.contains(char::is_whitespace) {
                    row.split_whitespace().map(normalize_tile).collect()
                } else {
                    row.chars().map(|c| normalize_tile(&c.to_string())).collect()
                }
            })
            .collect();
        Self::from_rows(&rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile text as supplied, e.g. `"Qu"`.
    pub fn tile(&self, index: usize) -> &str {
        &self.tiles[index]
    }

    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    /// Lower-cased tile text.
    #[inline]
    pub(crate) fn key(&self, index: usize) -> &str {
        &self.keys[index]
    }

    /// The lower-cased string a path of cell indices spells.
    pub fn spell(&self, path: &[usize]) -> String {
        path.iter().map(|&i| self.key(i)).collect()
    }
}

fn normalize_tile(tile: &str) -> String {
    if tile.eq_ignore_ascii_case("q") {
        DIGRAPH_TILE.to_string()
    } else {
        tile.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.tiles.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|t| format!("{t:<2}")).collect();
            write!(f, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}
