use boggle_solver::{validate, Adjacency, Board, SearchError, Solver, ValidationStatus};

fn check(typed: &str, board: &str) -> boggle_solver::Validation {
    let board = Board::parse(board).unwrap();
    let adjacency = Adjacency::build(board.rows(), board.cols()).unwrap();
    validate(typed, &board, &adjacency).unwrap()
}

#[test]
fn test_empty_input() {
    let result = check("", "ab/cd");
    assert_eq!(result.status, ValidationStatus::Empty);
    assert!(result.complete_paths.is_empty());
    assert!(result.partial_paths.is_empty());
    assert!(!result.is_valid());
}

#[test]
fn test_complete_path() {
    let result = check("cab", "ab/cd");
    assert_eq!(result.status, ValidationStatus::Valid);
    assert_eq!(result.complete_paths, vec![vec![2, 0, 1]]);
    assert!(result.partial_paths.is_empty());
}

#[test]
fn test_case_insensitive() {
    assert!(check("CaB", "AB/CD").is_valid());
    assert!(check("cab", "AB/CD").is_valid());
}

#[test]
fn test_dead_end_reports_partial() {
    let result = check("cx", "ab/cd");
    assert_eq!(result.status, ValidationStatus::Invalid);
    assert!(result.complete_paths.is_empty());
    assert_eq!(result.partial_paths, vec![vec![2]]);
}

#[test]
fn test_no_match_at_all() {
    let result = check("xyz", "ab/cd");
    assert_eq!(result.status, ValidationStatus::Invalid);
    assert!(result.complete_paths.is_empty());
    assert!(result.partial_paths.is_empty());
    assert!(result.deepest_partial().is_none());
}

#[test]
fn test_digraph_consumed_atomically() {
    let board = Board::new(1, 2, vec!["Qu", "u"]).unwrap();
    let adjacency = Adjacency::build(1, 2).unwrap();
    let result = validate("qu", &board, &adjacency).unwrap();
    assert_eq!(result.status, ValidationStatus::Valid);
    assert_eq!(result.complete_paths, vec![vec![0]]);
    assert!(result.partial_paths.is_empty());
}

#[test]
fn test_digraph_not_split() {
    // "q" alone cannot match the first half of the Qu tile.
    let result = check("q", "qa");
    assert_eq!(result.status, ValidationStatus::Invalid);
    assert!(result.partial_paths.is_empty());

    let result = check("qua", "qa");
    assert_eq!(result.complete_paths, vec![vec![0, 1]]);
}

#[test]
fn test_partial_recorded_per_branch() {
    // b a b c: from the A, the left B dead-ends while the right B completes.
    let result = check("abc", "babc");
    assert_eq!(result.status, ValidationStatus::Valid);
    assert_eq!(result.complete_paths, vec![vec![1, 2, 3]]);
    assert_eq!(result.partial_paths, vec![vec![1, 0]]);
}

#[test]
fn test_partials_of_different_depths() {
    let result = check("abx", "acaby");
    assert_eq!(result.status, ValidationStatus::Invalid);
    assert_eq!(result.partial_paths, vec![vec![0], vec![2, 3]]);
    assert_eq!(result.deepest_partial(), Some(&vec![2, 3]));
}

#[test]
fn test_no_cell_reuse() {
    let result = check("aba", "ab");
    assert_eq!(result.status, ValidationStatus::Invalid);
    assert_eq!(result.partial_paths, vec![vec![0, 1]]);
}

#[test]
fn test_not_dictionary_constrained() {
    // Traceable nonsense is still valid; legality is a separate check.
    let solver = Solver::with_words(["cab"]);
    let board = Board::parse("ab/cd").unwrap();
    let result = solver.validate("dcba", &board).unwrap();
    assert!(result.is_valid());
    assert!(!solver.is_word("dcba").unwrap());
}

#[test]
fn test_works_without_dictionary() {
    let solver = Solver::new();
    let board = Board::parse("ab/cd").unwrap();
    assert!(solver.validate("abc", &board).unwrap().is_valid());
}

#[test]
fn test_status_matches_complete_paths() {
    let board = Board::parse("cats/ored/qlin/esta").unwrap();
    let adjacency = Adjacency::build(4, 4).unwrap();
    for typed in ["", "c", "ca", "cat", "cot", "quest", "ques", "qest", "stain", "zzz", "tidet"] {
        let result = validate(typed, &board, &adjacency).unwrap();
        assert_eq!(result.status == ValidationStatus::Valid, !result.complete_paths.is_empty());
        assert_eq!(result.status == ValidationStatus::Empty, typed.is_empty());
    }
}

#[test]
fn test_status_display() {
    assert_eq!(ValidationStatus::Empty.to_string(), "empty");
    assert_eq!(ValidationStatus::Valid.to_string(), "valid");
    assert_eq!(ValidationStatus::Invalid.to_string(), "invalid");
}

#[test]
fn test_adjacency_shape_must_match() {
    let board = Board::parse("ab/cd").unwrap();
    let larger = Adjacency::build(3, 3).unwrap();
    assert_eq!(
        validate("ab", &board, &larger),
        Err(SearchError::InvalidShape { rows: 2, cols: 2, tiles: 4 })
    );

    // Same cell count, different shape.
    let flat = Adjacency::build(1, 4).unwrap();
    assert!(validate("", &board, &flat).is_err());
}
