//! Live traceability check for partially typed input.
//!
//! Matching is literal and case-insensitive: a tile must match the next
//! characters of the typed text as a whole, so `Qu` consumes two typed
//! characters in one step. No dictionary is consulted.

use crate::adjacency::Adjacency;
use crate::board::Board;
use crate::error::SearchError;
use crate::path_finder::Path;
use log::debug;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationStatus {
    /// Nothing typed yet.
    Empty,
    /// The whole input traces along at least one path.
    Valid,
    /// The input cannot be traced in full.
    Invalid,
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValidationStatus::Empty => "empty",
            ValidationStatus::Valid => "valid",
            ValidationStatus::Invalid => "invalid",
        };
        f.write_str(label)
    }
}

/// Outcome of validating one input string against a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub status: ValidationStatus,
    /// Paths that consume the whole input.
    pub complete_paths: Vec<Path>,
    /// Dead-end attempts: paths that matched a prefix of the input and could
    /// not be extended by any neighbour, for highlighting where tracing stops.
    pub partial_paths: Vec<Path>,
}

impl Validation {
    fn empty() -> Self {
        Self {
            status: ValidationStatus::Empty,
            complete_paths: Vec::new(),
            partial_paths: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == ValidationStatus::Valid
    }

    /// Longest partial path, if any.
    pub fn deepest_partial(&self) -> Option<&Path> {
        self.partial_paths.iter().max_by_key(|p| p.len())
    }
}

/// Validate `typed` against `board`.
///
/// A partial path is recorded at each branch that matched so far but where
/// no neighbour produced a complete or partial result of its own. This is a
/// per-branch rule, so several partial paths of different depths may come
/// back for one input.
pub fn validate(
    typed: &str,
    board: &Board,
    adjacency: &Adjacency,
) -> Result<Validation, SearchError> {
    adjacency.check_board(board)?;
    if typed.is_empty() {
        return Ok(Validation::empty());
    }

    let typed = typed.to_lowercase();
    let mut walk = LiteralWalk {
        typed: &typed,
        board,
        adjacency,
        visited: vec![false; board.len()],
        path: Vec::new(),
        complete: Vec::new(),
        partial: Vec::new(),
    };
    for start in 0..board.len() {
        walk.explore(start, 0);
    }

    let status = if walk.complete.is_empty() {
        ValidationStatus::Invalid
    } else {
        ValidationStatus::Valid
    };
    debug!(
        "Validated {:?}: {} ({} complete, {} partial)",
        typed,
        status,
        walk.complete.len(),
        walk.partial.len()
    );

    Ok(Validation {
        status,
        complete_paths: walk.complete,
        partial_paths: walk.partial,
    })
}

struct LiteralWalk<'a> {
    typed: &'a str,
    board: &'a Board,
    adjacency: &'a Adjacency,
    visited: Vec<bool>,
    path: Path,
    complete: Vec<Path>,
    partial: Vec<Path>,
}

impl LiteralWalk<'_> {
    /// Byte offset `pos` into `typed` marks what is already matched.
    fn explore(&mut self, cell: usize, pos: usize) {
        let tile = self.board.key(cell);
        if !self.typed[pos..].starts_with(tile) {
            return;
        }

        let pos = pos + tile.len();
        self.visited[cell] = true;
        self.path.push(cell);

        if pos == self.typed.len() {
            self.complete.push(self.path.clone());
        } else {
            let mut extended = false;
            let adjacency = self.adjacency;
            for &next in adjacency.neighbors(cell) {
                if self.visited[next] {
                    continue;
                }
                let before = self.complete.len() + self.partial.len();
                self.explore(next, pos);
                if self.complete.len() + self.partial.len() > before {
                    extended = true;
                }
            }
            if !extended {
                self.partial.push(self.path.clone());
            }
        }

        self.path.pop();
        self.visited[cell] = false;
    }
}
