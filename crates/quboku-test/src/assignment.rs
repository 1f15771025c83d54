//! Encoding a grid of cell values as a solver bit assignment.

use quboku_core::{GridSpec, QubokuError, Result};

/// Encodes a `rows x cols` grid into a length-`total_vars` bit vector, the
/// inverse of [`quboku_core::decode_assignment`].
///
/// Each cell value minus `value_offset` is written LSB-first across the
/// cell's `qubits_per_cell` variables.
///
/// # Errors
///
/// Returns [`QubokuError::InvalidGridSpec`] if the board shape does not
/// match the grid spec, and [`QubokuError::ValueOutOfRange`] if a shifted
/// value does not fit the encoding width.
pub fn board_to_assignment(
    spec: &GridSpec,
    board: &[Vec<u32>],
    value_offset: u32,
) -> Result<Vec<u8>> {
    if board.len() != spec.rows() || board.iter().any(|row| row.len() != spec.cols()) {
        return Err(QubokuError::InvalidGridSpec(format!(
            "board shape does not match {} x {} spec",
            spec.rows(),
            spec.cols()
        )));
    }
    let qpc = spec.qubits_per_cell();
    let mut bits = vec![0u8; spec.total_vars()];
    for (row, cells) in board.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            let out_of_range = QubokuError::ValueOutOfRange {
                row,
                col,
                value: cell,
                bits: qpc,
            };
            let value = cell.checked_sub(value_offset).ok_or(out_of_range)?;
            if qpc < u32::BITS as usize && value >> qpc != 0 {
                return Err(QubokuError::ValueOutOfRange {
                    row,
                    col,
                    value: cell,
                    bits: qpc,
                });
            }
            for bit in 0..qpc.min(u32::BITS as usize) {
                bits[spec.var_index(row, col, bit)?] = ((value >> bit) & 1) as u8;
            }
        }
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quboku_core::decode_assignment;

    #[test]
    fn test_encode_known_board() {
        let spec = GridSpec::new(2, 2, 2, 1, 2, 1.0).unwrap();
        let board = vec![vec![1, 2], vec![3, 4]];
        let bits = board_to_assignment(&spec, &board, 1).unwrap();
        assert_eq!(bits, vec![0, 0, 1, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_roundtrip_with_decoder() {
        let spec = GridSpec::new(4, 4, 2, 2, 2, 1000.0).unwrap();
        let board = vec![
            vec![1, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![2, 1, 4, 3],
            vec![4, 3, 2, 1],
        ];
        let bits = board_to_assignment(&spec, &board, 1).unwrap();
        assert_eq!(decode_assignment(&spec, &bits, 1).unwrap(), board);
    }

    #[test]
    fn test_value_too_wide() {
        let spec = GridSpec::new(2, 2, 1, 1, 1, 1.0).unwrap();
        let board = vec![vec![1, 2], vec![3, 1]];
        // Value 3 shifted to 2 needs two bits.
        assert!(matches!(
            board_to_assignment(&spec, &board, 1),
            Err(QubokuError::ValueOutOfRange { row: 1, col: 0, .. })
        ));
    }

    #[test]
    fn test_shape_mismatch() {
        let spec = GridSpec::new(2, 2, 2, 1, 2, 1.0).unwrap();
        let board = vec![vec![1, 2]];
        assert!(board_to_assignment(&spec, &board, 1).is_err());
    }
}
