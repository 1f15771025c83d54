//! Grid specification and binary-variable encoding.
//!
//! A [`GridSpec`] fixes the board geometry and the per-cell encoding width
//! once, at construction, and every later stage reads it immutably. The
//! variable encoding is the deterministic bijection
//! `(row, col, bit) -> (row * cols + col) * qubits_per_cell + bit`.

use serde::Serialize;

use crate::error::{QubokuError, Result};

/// Immutable description of a generalized Sudoku board and its encoding.
///
/// Construction validates that the subgrid shape tiles the board exactly and
/// that `qubits_per_cell` bits can distinguish `max(rows, cols)` values.
/// The penalty weight `alpha` is deliberately *not* validated: a non-positive
/// value produces a degenerate, under-constrained model and is the caller's
/// responsibility.
///
/// # Example
///
/// ```
/// use quboku_core::GridSpec;
///
/// let spec = GridSpec::new(4, 4, 2, 2, 2, 1000.0).unwrap();
/// assert_eq!(spec.total_vars(), 32);
/// assert_eq!(spec.var_index(1, 2, 1).unwrap(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSpec {
    rows: usize,
    cols: usize,
    qubits_per_cell: usize,
    subgrid_rows: usize,
    subgrid_cols: usize,
    alpha: f64,
}

impl GridSpec {
    /// Creates a validated grid specification.
    ///
    /// # Errors
    ///
    /// Returns [`QubokuError::InvalidGridSpec`] if any dimension is zero, the
    /// subgrid shape does not tile the board, or `qubits_per_cell` is too
    /// narrow for `max(rows, cols)` distinct values.
    pub fn new(
        rows: usize,
        cols: usize,
        qubits_per_cell: usize,
        subgrid_rows: usize,
        subgrid_cols: usize,
        alpha: f64,
    ) -> Result<Self> {
        if rows == 0 || cols == 0 || qubits_per_cell == 0 || subgrid_rows == 0 || subgrid_cols == 0
        {
            return Err(QubokuError::InvalidGridSpec(
                "all dimensions must be nonzero".to_string(),
            ));
        }
        if rows % subgrid_rows != 0 {
            return Err(QubokuError::InvalidGridSpec(format!(
                "subgrid_rows {subgrid_rows} does not divide rows {rows}"
            )));
        }
        if cols % subgrid_cols != 0 {
            return Err(QubokuError::InvalidGridSpec(format!(
                "subgrid_cols {subgrid_cols} does not divide cols {cols}"
            )));
        }
        let representable = match 1usize.checked_shl(qubits_per_cell as u32) {
            Some(n) => n,
            // Wider than the machine word can ever be required.
            None => usize::MAX,
        };
        let needed = rows.max(cols);
        if representable < needed {
            return Err(QubokuError::InvalidGridSpec(format!(
                "{qubits_per_cell} qubits per cell can encode {representable} values, \
                 but the board needs {needed}"
            )));
        }
        Ok(GridSpec {
            rows,
            cols,
            qubits_per_cell,
            subgrid_rows,
            subgrid_cols,
            alpha,
        })
    }

    /// Creates a square `n x n` specification with `isqrt(n)`-sided subgrids
    /// and the minimal encoding width for `n` values.
    ///
    /// # Errors
    ///
    /// Returns [`QubokuError::InvalidGridSpec`] if `n` is not a perfect
    /// square.
    pub fn square(n: usize, alpha: f64) -> Result<Self> {
        let side = (n as f64).sqrt() as usize;
        if side * side != n {
            return Err(QubokuError::InvalidGridSpec(format!(
                "square board size {n} is not a perfect square"
            )));
        }
        Self::new(n, n, min_encoding_bits(n), side, side, alpha)
    }

    /// Number of board rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of board columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Binary variables per cell.
    #[inline]
    pub const fn qubits_per_cell(&self) -> usize {
        self.qubits_per_cell
    }

    /// Rows per subgrid block.
    #[inline]
    pub const fn subgrid_rows(&self) -> usize {
        self.subgrid_rows
    }

    /// Columns per subgrid block.
    #[inline]
    pub const fn subgrid_cols(&self) -> usize {
        self.subgrid_cols
    }

    /// Penalty weight applied to every constraint family.
    #[inline]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Total number of binary decision variables.
    #[inline]
    pub const fn total_vars(&self) -> usize {
        self.rows * self.cols * self.qubits_per_cell
    }

    /// Number of subgrid blocks tiling the board.
    #[inline]
    pub const fn num_subgrids(&self) -> usize {
        (self.rows / self.subgrid_rows) * (self.cols / self.subgrid_cols)
    }

    /// Encodes `(row, col, bit)` as a flat variable index.
    ///
    /// # Errors
    ///
    /// Returns [`QubokuError::IndexOutOfRange`] if any argument is outside
    /// its declared domain.
    pub fn var_index(&self, row: usize, col: usize, bit: usize) -> Result<usize> {
        if row >= self.rows {
            return Err(QubokuError::IndexOutOfRange {
                axis: "row",
                value: row,
                bound: self.rows,
            });
        }
        if col >= self.cols {
            return Err(QubokuError::IndexOutOfRange {
                axis: "col",
                value: col,
                bound: self.cols,
            });
        }
        if bit >= self.qubits_per_cell {
            return Err(QubokuError::IndexOutOfRange {
                axis: "bit",
                value: bit,
                bound: self.qubits_per_cell,
            });
        }
        Ok((row * self.cols + col) * self.qubits_per_cell + bit)
    }
}

/// Minimal number of bits whose patterns cover `n` distinct values.
pub fn min_encoding_bits(n: usize) -> usize {
    let mut bits = 1;
    while (1usize << bits) < n {
        bits += 1;
    }
    bits
}
