//! Seeded Sudoku board generation.
//!
//! Classic three-step construction: seed the diagonal blocks with shuffled
//! values (they do not constrain each other), complete the board by
//! backtracking, then relabel values with a random permutation so repeated
//! generation does not always return the lexicographically first completion.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use quboku_core::{QubokuError, Result};

/// Generates a completed `n x n` board with values `1..=n`, reproducible
/// from `seed`.
///
/// # Errors
///
/// Returns [`QubokuError::InvalidGridSpec`] if `n` is not a perfect square
/// (the generator only handles square-block boards).
pub fn generate_board(n: usize, seed: u64) -> Result<Vec<Vec<u32>>> {
    let side = (n as f64).sqrt() as usize;
    if side * side != n {
        return Err(QubokuError::InvalidGridSpec(format!(
            "board size {n} is not a perfect square"
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);

    // Independently shuffled diagonal blocks are not always completable on
    // small boards (4x4 seedings frequently dead-end), so reroll the
    // seeding until backtracking succeeds. The rng stream keeps advancing,
    // which keeps the result deterministic per seed.
    let mut board;
    loop {
        board = vec![vec![0u32; n]; n];
        fill_diagonal_blocks(&mut board, side, &mut rng);
        if fill_rest(&mut board, side) {
            break;
        }
    }
    permute_values(&mut board, &mut rng);
    Ok(board)
}

/// Blanks `holes` random cells (set to 0), turning a solution into a puzzle.
pub fn punch_holes(board: &mut [Vec<u32>], holes: usize, seed: u64) {
    let n = board.len();
    let mut rng = StdRng::seed_from_u64(seed);
    // Cap at the cells still filled; the board may already have holes.
    let filled = board.iter().flatten().filter(|&&v| v != 0).count();
    let mut remaining = holes.min(filled);
    while remaining > 0 {
        let row = rng.random_range(0..n);
        let col = rng.random_range(0..n);
        if board[row][col] != 0 {
            board[row][col] = 0;
            remaining -= 1;
        }
    }
}

/// True if every row, column, and `subgrid_rows x subgrid_cols` block
/// contains each value `1..=n` exactly once.
pub fn is_valid_solution(board: &[Vec<u32>], subgrid_rows: usize, subgrid_cols: usize) -> bool {
    let n = board.len();
    if n == 0
        || board.iter().any(|row| row.len() != n)
        || subgrid_rows == 0
        || subgrid_cols == 0
        || n % subgrid_rows != 0
        || n % subgrid_cols != 0
    {
        return false;
    }
    let complete = |values: &mut [bool]| {
        let ok = values.iter().all(|&v| v);
        values.fill(false);
        ok
    };
    let mut seen = vec![false; n];
    let mark = |seen: &mut [bool], v: u32| {
        let v = v as usize;
        if v == 0 || v > seen.len() || seen[v - 1] {
            false
        } else {
            seen[v - 1] = true;
            true
        }
    };

    for row in 0..n {
        for col in 0..n {
            if !mark(&mut seen, board[row][col]) {
                return false;
            }
        }
        if !complete(&mut seen) {
            return false;
        }
    }
    for col in 0..n {
        for row in 0..n {
            if !mark(&mut seen, board[row][col]) {
                return false;
            }
        }
        if !complete(&mut seen) {
            return false;
        }
    }
    for block_row in 0..n / subgrid_rows {
        for block_col in 0..n / subgrid_cols {
            for i in 0..subgrid_rows {
                for j in 0..subgrid_cols {
                    if !mark(
                        &mut seen,
                        board[block_row * subgrid_rows + i][block_col * subgrid_cols + j],
                    ) {
                        return false;
                    }
                }
            }
            if !complete(&mut seen) {
                return false;
            }
        }
    }
    true
}

// The blocks on the main diagonal share no row, column, or block, so each
// can be filled with an independent shuffle.
fn fill_diagonal_blocks(board: &mut [Vec<u32>], side: usize, rng: &mut StdRng) {
    let n = side * side;
    for block in 0..side {
        let mut values: Vec<u32> = (1..=n as u32).collect();
        values.shuffle(rng);
        let base = block * side;
        for i in 0..side {
            for j in 0..side {
                board[base + i][base + j] = values[i * side + j];
            }
        }
    }
}

fn placement_ok(board: &[Vec<u32>], side: usize, row: usize, col: usize, value: u32) -> bool {
    let n = side * side;
    for x in 0..n {
        if board[row][x] == value || board[x][col] == value {
            return false;
        }
    }
    let (base_row, base_col) = (row - row % side, col - col % side);
    for i in 0..side {
        for j in 0..side {
            if board[base_row + i][base_col + j] == value {
                return false;
            }
        }
    }
    true
}

fn fill_rest(board: &mut [Vec<u32>], side: usize) -> bool {
    let n = side * side;
    let Some((row, col)) = (0..n)
        .flat_map(|r| (0..n).map(move |c| (r, c)))
        .find(|&(r, c)| board[r][c] == 0)
    else {
        return true;
    };
    for value in 1..=n as u32 {
        if placement_ok(board, side, row, col, value) {
            board[row][col] = value;
            if fill_rest(board, side) {
                return true;
            }
            board[row][col] = 0;
        }
    }
    false
}

// Random relabeling: every occurrence of value v becomes perm[v - 1], which
// preserves validity.
fn permute_values(board: &mut [Vec<u32>], rng: &mut StdRng) {
    let n = board.len();
    let mut perm: Vec<u32> = (1..=n as u32).collect();
    perm.shuffle(rng);
    for row in board {
        for cell in row {
            *cell = perm[(*cell - 1) as usize];
        }
    }
}
