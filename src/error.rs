//! Error taxonomy for the search core.
//!
//! Every variant is a contract violation by the caller. Searches over a
//! well-formed board never fail: finding nothing is a normal result.

/// Errors returned by board construction and the search operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A dictionary search was invoked before any dictionary index was built.
    #[error("dictionary index not built; load a word list before solving")]
    NotReady,

    /// Non-positive dimensions, or a tile count that disagrees with `rows * cols`.
    #[error("invalid board shape {rows}x{cols} with {tiles} tiles")]
    InvalidShape { rows: usize, cols: usize, tiles: usize },

    /// A cell holds no text.
    #[error("tile {index} is empty")]
    EmptyTile { index: usize },
}

impl SearchError {
    pub(crate) fn shape(rows: usize, cols: usize, tiles: usize) -> Self {
        Self::InvalidShape { rows, cols, tiles }
    }
}
