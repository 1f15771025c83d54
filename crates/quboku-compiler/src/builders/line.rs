//! Row and column uniqueness families.
//!
//! For every line, every encoding bit, and every unordered pair of distinct
//! cells on that line, one term `alpha * z(cell1, bit) * z(cell2, bit)` is
//! emitted. The terms are already degree 2, so no expansion is involved.
//! Pairs are enumerated in canonical order (`col1 < col2`, `row1 < row2`),
//! giving `rows * qubits_per_cell * C(cols, 2)` terms for the row family
//! and the transpose-symmetric count for columns.

use quboku_core::{GridSpec, InteractionTerm, Result};

use crate::builders::FamilyTerms;

/// Penalizes two cells of a row agreeing on an encoding bit.
pub fn unique_per_row(spec: &GridSpec) -> Result<FamilyTerms> {
    let mut family = FamilyTerms::default();
    for row in 0..spec.rows() {
        for bit in 0..spec.qubits_per_cell() {
            for col1 in 0..spec.cols() {
                for col2 in col1 + 1..spec.cols() {
                    let a = spec.var_index(row, col1, bit)?;
                    let b = spec.var_index(row, col2, bit)?;
                    family.terms.push(InteractionTerm::quadratic(a, b, spec.alpha()));
                }
            }
        }
    }
    Ok(family)
}

/// Penalizes two cells of a column agreeing on an encoding bit.
pub fn unique_per_column(spec: &GridSpec) -> Result<FamilyTerms> {
    let mut family = FamilyTerms::default();
    for col in 0..spec.cols() {
        for bit in 0..spec.qubits_per_cell() {
            for row1 in 0..spec.rows() {
                for row2 in row1 + 1..spec.rows() {
                    let a = spec.var_index(row1, col, bit)?;
                    let b = spec.var_index(row2, col, bit)?;
                    family.terms.push(InteractionTerm::quadratic(a, b, spec.alpha()));
                }
            }
        }
    }
    Ok(family)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(n: usize) -> usize {
        n * (n - 1) / 2
    }

    #[test]
    fn test_row_family_count() {
        let spec = GridSpec::new(4, 4, 2, 2, 2, 1000.0).unwrap();
        let family = unique_per_row(&spec).unwrap();
        assert_eq!(family.len(), 4 * 2 * pairs(4));
        assert_eq!(family.offset, 0.0);
        assert!(family.terms.iter().all(|t| t.coefficient == 1000.0));
    }

    #[test]
    fn test_column_family_count() {
        let spec = GridSpec::new(4, 4, 2, 2, 2, 1000.0).unwrap();
        assert_eq!(unique_per_column(&spec).unwrap().len(), 4 * 2 * pairs(4));
    }

    #[test]
    fn test_rectangular_counts_are_transpose_symmetric() {
        let spec = GridSpec::new(2, 4, 2, 1, 2, 1.0).unwrap();
        assert_eq!(unique_per_row(&spec).unwrap().len(), 2 * 2 * pairs(4));
        assert_eq!(unique_per_column(&spec).unwrap().len(), 4 * 2 * pairs(2));
    }

    #[test]
    fn test_row_pairs_stay_on_one_row_and_bit() {
        let spec = GridSpec::new(2, 2, 2, 1, 1, 1.0).unwrap();
        let family = unique_per_row(&spec).unwrap();
        // Row 0 bit 0 pairs vars 0 and 2; row 0 bit 1 pairs 1 and 3.
        assert_eq!(family.terms[0], InteractionTerm::quadratic(0, 2, 1.0));
        assert_eq!(family.terms[1], InteractionTerm::quadratic(1, 3, 1.0));
        assert_eq!(family.terms[2], InteractionTerm::quadratic(4, 6, 1.0));
        assert_eq!(family.terms[3], InteractionTerm::quadratic(5, 7, 1.0));
    }
}
