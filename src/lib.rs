//! # Boggle Solver
//!
//! Word enumeration and live input validation for Boggle-style letter grids.
//!
//! Words are found with a depth-first walk over 8-directional neighbours,
//! pruned by a dictionary trie so branches that cannot become a word are
//! dropped as soon as they leave it. Typed input is checked literally
//! against the same board, reporting both complete paths and the dead-end
//! attempts used to highlight where tracing fails.

pub mod adjacency;
pub mod board;
pub mod error;
pub mod logging;
pub mod path_finder;
pub mod query;
pub mod solver;
pub mod trie;
pub mod validator;

pub use adjacency::{Adjacency, AdjacencyCache};
pub use board::Board;
pub use error::SearchError;
pub use path_finder::{find_paths, Path};
pub use query::{query, MatchMode, WordQuery};
pub use solver::{solve, Solver, WordSet};
pub use trie::{NodeId, Trie};
pub use validator::{validate, Validation, ValidationStatus};

use std::io;

/// Words shorter than this are never indexed.
pub const MIN_INDEXED_LEN: usize = 3;

/// Default minimum word length for a search.
pub const DEFAULT_MIN_WORD_LEN: usize = 4;

/// Largest board (in cells) the search is tuned for. Not enforced.
pub const MAX_CELLS: usize = 36;

/// Split a newline-separated word list into trimmed, lower-cased words.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Load the embedded sample word list.
///
/// It holds a few hundred common words, enough for tests and demos. Real
/// games should load a full list with [`read_word_list`].
pub fn load_dictionary() -> Vec<String> {
    parse_word_list(include_str!("../dictionary/words.txt"))
}

/// Read a word list from disk.
pub fn read_word_list<P: AsRef<std::path::Path>>(path: P) -> io::Result<Vec<String>> {
    Ok(parse_word_list(&std::fs::read_to_string(path)?))
}
