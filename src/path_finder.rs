//! Locate every path that spells a known word, for highlighting it.

use crate::adjacency::Adjacency;
use crate::board::Board;
use crate::error::SearchError;

/// Cell indices of a simple path, in spelling order.
pub type Path = Vec<usize>;

/// All simple paths on `board` whose tiles spell `word` (case-insensitive).
pub fn find_paths(
    word: &str,
    board: &Board,
    adjacency: &Adjacency,
) -> Result<Vec<Path>, SearchError> {
    adjacency.check_board(board)?;
    let word = word.to_lowercase();
    let mut paths = Vec::new();
    if word.is_empty() {
        return Ok(paths);
    }

    let mut visited = vec![false; board.len()];
    let mut current = Vec::new();
    for start in 0..board.len() {
        extend(
            start,
            &word,
            board,
            adjacency,
            &mut visited,
            &mut current,
            &mut paths,
        );
    }
    Ok(paths)
}

fn extend(
    cell: usize,
    rest: &str,
    board: &Board,
    adjacency: &Adjacency,
    visited: &mut [bool],
    current: &mut Path,
    paths: &mut Vec<Path>,
) {
    let Some(rest) = rest.strip_prefix(board.key(cell)) else {
        return;
    };

    visited[cell] = true;
    current.push(cell);

    if rest.is_empty() {
        paths.push(current.clone());
    } else {
        for &next in adjacency.neighbors(cell) {
            if !visited[next] {
                extend(next, rest, board, adjacency, visited, current, paths);
            }
        }
    }

    current.pop();
    visited[cell] = false;
}
