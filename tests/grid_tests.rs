//! Grid path search integration tests, built around the snaking-puzzle
//! reference grid.

use puzzle_search::{exists_path, find_path, Coord, Grid, PathSearch, SearchError, SearchLimits};

fn puzzle() -> Grid {
    Grid::new([
        "ANGULAR",
        "REDNCAE",
        "RFIDTCL",
        "AGNEGSA",
        "YTIRTSP",
    ])
}

/// Check every witness-path invariant: length, cell contents, pairwise
/// distinctness, consecutive 4-adjacency.
fn assert_valid_witness(grid: &Grid, target: &str, path: &[Coord]) {
    let chars: Vec<char> = target.chars().collect();
    assert_eq!(path.len(), chars.len(), "witness length mismatch");

    for (i, &coord) in path.iter().enumerate() {
        assert_eq!(grid.get(coord), Some(chars[i]), "wrong char at {coord}");
    }
    for i in 0..path.len() {
        for j in (i + 1)..path.len() {
            assert_ne!(path[i], path[j], "witness revisits {}", path[i]);
        }
    }
    for pair in path.windows(2) {
        assert!(pair[0].is_adjacent(pair[1]), "{} !~ {}", pair[0], pair[1]);
    }
}

// =============================================================================
// Reference Vectors
// =============================================================================

#[test]
fn test_words_present_in_the_puzzle() {
    let grid = puzzle();
    for word in ["ANGULAR", "REACT", "UNDEFINED", "RED", "STRING", "CLASS", "ARRAY"] {
        assert_eq!(exists_path(&grid, word), Ok(true), "expected to find {word}");
    }
}

#[test]
fn test_words_absent_from_the_puzzle() {
    let grid = puzzle();
    for word in ["FUNCTION", "NULL"] {
        assert_eq!(exists_path(&grid, word), Ok(false), "must not find {word}");
    }
}

#[test]
fn test_first_row_witness() {
    let grid = puzzle();
    let path = find_path(&grid, "ANGULAR").unwrap().unwrap();
    let expected: Vec<Coord> = (0..7).map(|c| Coord::new(0, c)).collect();
    assert_eq!(path, expected);
}

#[test]
fn test_every_found_witness_is_valid() {
    let grid = puzzle();
    for word in ["ANGULAR", "REACT", "UNDEFINED", "RED", "STRING", "CLASS", "ARRAY"] {
        let path = find_path(&grid, word).unwrap().expect(word);
        assert_valid_witness(&grid, word, &path);
    }
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn test_empty_target_is_vacuously_true() {
    assert_eq!(find_path(&puzzle(), ""), Ok(Some(Vec::new())));
}

#[test]
fn test_target_longer_than_grid() {
    let grid = Grid::new(["AB"]);
    assert_eq!(exists_path(&grid, "ABX"), Ok(false));
}

#[test]
fn test_empty_grid_matches_nothing_but_the_empty_word() {
    let grid = Grid::new(Vec::<&str>::new());
    assert_eq!(exists_path(&grid, "A"), Ok(false));
    assert_eq!(exists_path(&grid, ""), Ok(true));
}

#[test]
fn test_ragged_puzzle_rows() {
    let grid = Grid::new(["AN", "ANGULAR", "A"]);
    assert_eq!(exists_path(&grid, "ANGULAR"), Ok(true));
    let path = find_path(&grid, "ANGULAR").unwrap().unwrap();
    assert_valid_witness(&grid, "ANGULAR", &path);
}

#[test]
fn test_diagonals_do_not_count() {
    let grid = Grid::new(["AX", "XB"]);
    assert_eq!(exists_path(&grid, "AB"), Ok(false));
}

// =============================================================================
// Limits
// =============================================================================

#[test]
fn test_budget_exhaustion() {
    let search = PathSearch::with_limits(SearchLimits::default().with_max_steps(3));
    let err = search.exists_path(&puzzle(), "UNDEFINED").unwrap_err();
    assert_eq!(err, SearchError::BudgetExhausted { budget: 3 });
    assert!(!err.is_invalid_input());
}

#[test]
fn test_generous_budget_does_not_interfere() {
    let search = PathSearch::with_limits(SearchLimits::default().with_max_steps(1_000_000));
    assert_eq!(search.exists_path(&puzzle(), "UNDEFINED"), Ok(true));
    assert_eq!(search.exists_path(&puzzle(), "NULL"), Ok(false));
}
