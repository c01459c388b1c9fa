//! 8-directional neighbour graph over grid cells, memoized by shape.

use crate::board::Board;
use crate::error::SearchError;
use log::trace;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Neighbour lists for every cell of a `rows x cols` grid, indexed row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    rows: usize,
    cols: usize,
    neighbors: Vec<Vec<usize>>,
}

impl Adjacency {
    /// Compute the graph for a grid shape.
    ///
    /// Cell `(r, c)` lives at index `r * cols + c`; its neighbours are every
    /// in-bounds cell within Chebyshev distance 1, in row-major order.
    pub fn build(rows: usize, cols: usize) -> Result<Self, SearchError> {
        let cells = match rows.checked_mul(cols) {
            Some(cells) if cells > 0 => cells,
            _ => return Err(SearchError::shape(rows, cols, 0)),
        };

        let mut neighbors = Vec::with_capacity(cells);
        for r in 0..rows {
            for c in 0..cols {
                let mut adjacent = Vec::with_capacity(8);
                for nr in r.saturating_sub(1)..=(r + 1).min(rows - 1) {
                    for nc in c.saturating_sub(1)..=(c + 1).min(cols - 1) {
                        if nr != r || nc != c {
                            adjacent.push(nr * cols + nc);
                        }
                    }
                }
                neighbors.push(adjacent);
            }
        }

        Ok(Self {
            rows,
            cols,
            neighbors,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.neighbors.len()
    }

    #[inline]
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }

    /// Fails with `InvalidShape` unless this graph was built for the
    /// board's dimensions.
    pub fn check_board(&self, board: &Board) -> Result<(), SearchError> {
        if self.rows == board.rows() && self.cols == board.cols() {
            Ok(())
        } else {
            Err(SearchError::shape(board.rows(), board.cols(), board.len()))
        }
    }

    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors
            .get(a)
            .is_some_and(|list| list.contains(&b))
    }
}

/// Thread-safe memo of adjacency graphs keyed by `(rows, cols)`.
///
/// Boards change every game but shapes repeat, so each shape is computed
/// once and shared behind an `Arc`.
#[derive(Debug, Default)]
pub struct AdjacencyCache {
    graphs: RwLock<HashMap<(usize, usize), Arc<Adjacency>>>,
}

impl AdjacencyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, rows: usize, cols: usize) -> Result<Arc<Adjacency>, SearchError> {
        let key = (rows, cols);
        if let Some(graph) = self
            .graphs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(Arc::clone(graph));
        }

        trace!("Adjacency cache miss for {rows}x{cols}");
        let graph = Arc::new(Adjacency::build(rows, cols)?);
        let mut graphs = self.graphs.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(graphs.entry(key).or_insert(graph)))
    }

    /// Number of distinct shapes computed so far.
    pub fn len(&self) -> usize {
        self.graphs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
