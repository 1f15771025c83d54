//! Subgrid uniqueness family.

use quboku_core::{GridSpec, InteractionTerm, Result};

use crate::builders::FamilyTerms;

/// Penalizes two cells of a subgrid block agreeing on an encoding bit.
///
/// Blocks of `subgrid_rows x subgrid_cols` tile the board exactly (enforced
/// at `GridSpec` construction). Within a block, cells are enumerated in
/// lexicographic `(local_row, local_col)` order and every unordered pair
/// emits `alpha * z(cell1, bit) * z(cell2, bit)`, for
/// `C(subgrid_rows * subgrid_cols, 2)` terms per block per bit. A `1 x 1`
/// block shape is legal and yields no terms.
pub fn unique_per_subgrid(spec: &GridSpec) -> Result<FamilyTerms> {
    let (sr, sc) = (spec.subgrid_rows(), spec.subgrid_cols());
    let mut family = FamilyTerms::default();
    for block_row in 0..spec.rows() / sr {
        for block_col in 0..spec.cols() / sc {
            let cells: Vec<(usize, usize)> = (0..sr)
                .flat_map(|i| (0..sc).map(move |j| (block_row * sr + i, block_col * sc + j)))
                .collect();
            for bit in 0..spec.qubits_per_cell() {
                for (k, &(r1, c1)) in cells.iter().enumerate() {
                    for &(r2, c2) in &cells[k + 1..] {
                        let a = spec.var_index(r1, c1, bit)?;
                        let b = spec.var_index(r2, c2, bit)?;
                        family.terms.push(InteractionTerm::quadratic(a, b, spec.alpha()));
                    }
                }
            }
        }
    }
    Ok(family)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subgrid_family_count() {
        let spec = GridSpec::new(4, 4, 2, 2, 2, 1000.0).unwrap();
        // 4 blocks * 2 bits * C(4, 2).
        assert_eq!(unique_per_subgrid(&spec).unwrap().len(), 4 * 2 * 6);
    }

    #[test]
    fn test_degenerate_block_shapes() {
        // 1x1 blocks: no pairs, no terms.
        let unit = GridSpec::new(2, 2, 2, 1, 1, 100.0).unwrap();
        assert!(unique_per_subgrid(&unit).unwrap().is_empty());

        // One 2x2 block covering the board: 1 * 2 * C(4, 2) terms.
        let full = GridSpec::new(2, 2, 2, 2, 2, 100.0).unwrap();
        assert_eq!(unique_per_subgrid(&full).unwrap().len(), 12);
    }

    #[test]
    fn test_rectangular_blocks() {
        // 6x6 board with 2x3 blocks: 6 blocks * 3 bits * C(6, 2).
        let spec = GridSpec::new(6, 6, 3, 2, 3, 1.0).unwrap();
        assert_eq!(unique_per_subgrid(&spec).unwrap().len(), 6 * 3 * 15);
    }

    #[test]
    fn test_block_pairs_stay_in_block() {
        let spec = GridSpec::new(4, 4, 2, 2, 2, 1.0).unwrap();
        let family = unique_per_subgrid(&spec).unwrap();
        // First block covers cells (0,0) (0,1) (1,0) (1,1), whose two bits
        // each occupy vars {0,1, 2,3, 8,9, 10,11}. Both bit planes of the
        // block are emitted before the next block starts.
        let block_vars = [0usize, 1, 2, 3, 8, 9, 10, 11];
        let per_block = 2 * 6;
        for t in family.terms.iter().take(per_block) {
            let quboku_core::TermVars::Pair(a, b) = t.vars else {
                panic!("subgrid family emitted a linear term");
            };
            assert!(block_vars.contains(&a) && block_vars.contains(&b));
        }
    }
}
