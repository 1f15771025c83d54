//! One-number-per-cell constraint family.

use quboku_core::{GridSpec, Result};

use crate::builders::FamilyTerms;
use crate::expand::SquaredSum;

/// Builds the pre-expansion cell expressions, one per cell in row-major
/// order.
///
/// A cell over `m = qubits_per_cell` sign variables must satisfy
/// `z_0 + ... + z_{m-1} == m - 1` (for the 2-bit case: `z0 + z1 == 1`), so
/// each cell contributes the squared residual
/// `(z_0 + ... + z_{m-1} - (m - 1))^2`. Exactly `rows * cols` expressions
/// are produced.
pub fn cell_expressions(spec: &GridSpec) -> Result<Vec<SquaredSum>> {
    let qpc = spec.qubits_per_cell();
    let target = (qpc - 1) as f64;
    let mut exprs = Vec::with_capacity(spec.rows() * spec.cols());
    for row in 0..spec.rows() {
        for col in 0..spec.cols() {
            let vars = (0..qpc)
                .map(|bit| spec.var_index(row, col, bit))
                .collect::<Result<Vec<_>>>()?;
            exprs.push(SquaredSum::new(vars, target));
        }
    }
    Ok(exprs)
}

/// Expands every cell expression into `alpha`-scaled interaction terms.
pub fn one_number_per_cell(spec: &GridSpec) -> Result<FamilyTerms> {
    let mut family = FamilyTerms::default();
    for expr in cell_expressions(spec)? {
        let (constant, terms) = expr.expand(spec.alpha());
        family.offset += constant;
        family.terms.extend(terms);
    }
    Ok(family)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quboku_core::{InteractionTerm, TermVars};

    #[test]
    fn test_one_expression_per_cell() {
        let spec = GridSpec::new(4, 4, 2, 2, 2, 1000.0).unwrap();
        let exprs = cell_expressions(&spec).unwrap();
        assert_eq!(exprs.len(), 16);
        for expr in &exprs {
            assert_eq!(expr.vars().len(), 2);
            assert_eq!(expr.target(), 1.0);
        }
    }

    #[test]
    fn test_two_bit_cell_terms() {
        // Single cell, alpha = 1: 3 + (-2 z0) + (-2 z1) + 2 z0 z1.
        let spec = GridSpec::new(1, 1, 2, 1, 1, 1.0).unwrap();
        let family = one_number_per_cell(&spec).unwrap();
        assert_eq!(family.offset, 3.0);
        assert_eq!(
            family.terms,
            vec![
                InteractionTerm::linear(0, -2.0),
                InteractionTerm::linear(1, -2.0),
                InteractionTerm::quadratic(0, 1, 2.0),
            ]
        );
    }

    #[test]
    fn test_alpha_scales_every_cell() {
        let spec = GridSpec::new(2, 2, 2, 1, 1, 100.0).unwrap();
        let family = one_number_per_cell(&spec).unwrap();
        // 4 cells, constant 3 * alpha each.
        assert_eq!(family.offset, 1200.0);
        for t in &family.terms {
            match t.vars {
                TermVars::One(_) => assert_eq!(t.coefficient, -200.0),
                TermVars::Pair(..) => assert_eq!(t.coefficient, 200.0),
            }
        }
    }

    #[test]
    fn test_wide_encoding_pairs_all_bits() {
        // qpc = 3: each cell expands to 3 linear + C(3,2) quadratic terms.
        let spec = GridSpec::new(2, 2, 3, 1, 1, 1.0).unwrap();
        let family = one_number_per_cell(&spec).unwrap();
        assert_eq!(family.len(), 4 * (3 + 3));
    }
}
