//! Decoding solver assignments back onto the grid.

use crate::error::{QubokuError, Result};
use crate::grid::GridSpec;

/// Decodes a bit assignment into a `rows x cols` grid of cell values.
///
/// The assignment is sliced row-major into `qubits_per_cell`-bit groups,
/// cell `(row, col)` starting at `(row * cols + col) * qubits_per_cell`.
/// Within a cell, bit `k` is the binary digit of weight `2^k`, matching the
/// encoder's bit axis. `value_offset` shifts the decoded integer into the
/// caller's labeling convention (0 for 0-based values, 1 for Sudoku's 1-based
/// digits).
///
/// # Errors
///
/// Returns [`QubokuError::AssignmentLength`] if `bits.len()` differs from
/// `spec.total_vars()`.
///
/// # Example
///
/// ```
/// use quboku_core::{decode_assignment, GridSpec};
///
/// let spec = GridSpec::new(2, 2, 2, 1, 2, 1.0).unwrap();
/// // Cells encode 0, 1, 2, 3 (LSB first within each pair).
/// let bits = [0, 0, 1, 0, 0, 1, 1, 1];
/// let grid = decode_assignment(&spec, &bits, 1).unwrap();
/// assert_eq!(grid, vec![vec![1, 2], vec![3, 4]]);
/// ```
pub fn decode_assignment(spec: &GridSpec, bits: &[u8], value_offset: u32) -> Result<Vec<Vec<u32>>> {
    if bits.len() != spec.total_vars() {
        return Err(QubokuError::AssignmentLength {
            expected: spec.total_vars(),
            actual: bits.len(),
        });
    }
    let qpc = spec.qubits_per_cell();
    let mut grid = Vec::with_capacity(spec.rows());
    for row in 0..spec.rows() {
        let mut out_row = Vec::with_capacity(spec.cols());
        for col in 0..spec.cols() {
            let base = (row * spec.cols() + col) * qpc;
            let mut value = 0u32;
            for bit in 0..qpc {
                if bits[base + bit] != 0 {
                    value |= 1 << bit;
                }
            }
            out_row.push(value + value_offset);
        }
        grid.push(out_row);
    }
    Ok(grid)
}
