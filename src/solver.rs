//! Exhaustive word enumeration over a board.
//!
//! The search starts a depth-first walk from every cell. Each step descends
//! the dictionary trie by the characters of the tile it lands on, and any
//! branch whose spelling leaves the trie is abandoned immediately. That
//! pruning is what keeps a 6x6 board with a full dictionary tractable.

use crate::adjacency::{Adjacency, AdjacencyCache};
use crate::board::Board;
use crate::error::SearchError;
use crate::path_finder::{self, Path};
use crate::trie::{NodeId, Trie};
use crate::validator::{self, Validation};
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Words found on one board, lower-cased and deduplicated.
pub type WordSet = BTreeSet<String>;

/// Enumerate every indexed word of at least `min_len` characters that can
/// be traced on `board` as a simple path.
pub fn solve(
    trie: &Trie,
    board: &Board,
    adjacency: &Adjacency,
    min_len: usize,
) -> Result<WordSet, SearchError> {
    adjacency.check_board(board)?;

    let mut search = Enumeration {
        trie,
        board,
        adjacency,
        min_len,
        visited: vec![false; board.len()],
        spelled: String::new(),
        spelled_len: 0,
        found: WordSet::new(),
    };

    for start in 0..board.len() {
        search.walk(start, trie.root());
    }

    debug!(
        "Solved {}x{} board (min length {}): {} words",
        board.rows(),
        board.cols(),
        min_len,
        search.found.len()
    );
    Ok(search.found)
}

/// State for one top-level solve call. The visited buffer is allocated once
/// and is clean again whenever a walk from a start cell returns.
struct Enumeration<'a> {
    trie: &'a Trie,
    board: &'a Board,
    adjacency: &'a Adjacency,
    min_len: usize,
    visited: Vec<bool>,
    spelled: String,
    /// Length of `spelled` in characters.
    spelled_len: usize,
    found: WordSet,
}

impl Enumeration<'_> {
    fn walk(&mut self, cell: usize, node: NodeId) {
        let (board, adjacency) = (self.board, self.adjacency);
        let tile = board.key(cell);
        let Some(node) = self.trie.descend_str(node, tile) else {
            return;
        };

        let mark = self.spelled.len();
        let tile_len = tile.chars().count();
        self.visited[cell] = true;
        self.spelled.push_str(tile);
        self.spelled_len += tile_len;

        if self.spelled_len >= self.min_len && self.trie.is_word(node) {
            // Clone only on first sighting.
            if !self.found.contains(&self.spelled) {
                self.found.insert(self.spelled.clone());
            }
        }

        for &next in adjacency.neighbors(cell) {
            if !self.visited[next] {
                self.walk(next, node);
            }
        }

        self.spelled.truncate(mark);
        self.spelled_len -= tile_len;
        self.visited[cell] = false;
    }
}

/// Entry point for callers: owns the dictionary index and the adjacency
/// cache, and exposes the four search operations over them.
///
/// Both are read-only once built, so a `Solver` can be shared across
/// threads and every search runs independently.
#[derive(Debug, Default)]
pub struct Solver {
    trie: Option<Arc<Trie>>,
    adjacency: AdjacencyCache,
}

impl Solver {
    /// A solver with no dictionary yet. Dictionary searches fail with
    /// [`SearchError::NotReady`] until one is set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut solver = Self::new();
        solver.set_dictionary(words);
        solver
    }

    pub fn with_trie(trie: Arc<Trie>) -> Self {
        Self {
            trie: Some(trie),
            adjacency: AdjacencyCache::new(),
        }
    }

    /// Replace the dictionary index.
    pub fn set_dictionary<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.trie = Some(Arc::new(Trie::build(words)));
    }

    pub fn is_ready(&self) -> bool {
        self.trie.is_some()
    }

    pub fn dictionary(&self) -> Result<&Trie, SearchError> {
        self.trie.as_deref().ok_or(SearchError::NotReady)
    }

    pub fn adjacency(&self, rows: usize, cols: usize) -> Result<Arc<Adjacency>, SearchError> {
        self.adjacency.get(rows, cols)
    }

    /// All dictionary words of at least `min_len` characters on the board.
    pub fn solve(&self, board: &Board, min_len: usize) -> Result<WordSet, SearchError> {
        let trie = self.dictionary()?;
        let adjacency = self.adjacency(board.rows(), board.cols())?;
        solve(trie, board, &adjacency, min_len)
    }

    /// Solve many boards at once. Each board is an independent
    /// single-threaded search; the boards themselves are spread over the
    /// rayon pool. Results are in input order.
    pub fn solve_batch(&self, boards: &[Board], min_len: usize) -> Result<Vec<WordSet>, SearchError> {
        self.dictionary()?;
        boards
            .par_iter()
            .map(|board| self.solve(board, min_len))
            .collect()
    }

    /// Literal traceability of `typed`; needs no dictionary.
    pub fn validate(&self, typed: &str, board: &Board) -> Result<Validation, SearchError> {
        let adjacency = self.adjacency(board.rows(), board.cols())?;
        validator::validate(typed, board, &adjacency)
    }

    /// Every path spelling `word`; needs no dictionary.
    pub fn find_paths(&self, word: &str, board: &Board) -> Result<Vec<Path>, SearchError> {
        let adjacency = self.adjacency(board.rows(), board.cols())?;
        path_finder::find_paths(word, board, &adjacency)
    }

    /// Dictionary legality, the check applied after a valid traceability result.
    pub fn is_word(&self, word: &str) -> Result<bool, SearchError> {
        Ok(self.dictionary()?.contains(word))
    }
}
