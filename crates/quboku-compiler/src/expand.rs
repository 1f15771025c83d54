//! Symbolic expansion of squared sum-expressions.
//!
//! The one-number-per-cell constraint is a squared residual
//! `(z_0 + ... + z_{m-1} - t)^2` over sign variables. Rather than building
//! an operator algebra and squaring it, the binomial expansion is written
//! out directly:
//!
//! ```text
//! (S - t)^2 = S^2 - 2tS + t^2
//! S^2       = m + 2 * sum_{i<j} z_i z_j        (z_k^2 == 1)
//! ```
//!
//! so each expression contributes a constant `m + t^2`, a linear term `-2t`
//! per variable, and a quadratic term `+2` per unordered variable pair.

use quboku_core::InteractionTerm;

/// A squared sum-expression `(sum of sign variables - target)^2`, the
/// pre-expansion form of one cell's encoding constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct SquaredSum {
    vars: Vec<usize>,
    target: f64,
}

impl SquaredSum {
    /// Creates the expression `(z(vars[0]) + ... + z(vars[m-1]) - target)^2`.
    pub fn new(vars: Vec<usize>, target: f64) -> Self {
        SquaredSum { vars, target }
    }

    /// The sign variables under the square.
    pub fn vars(&self) -> &[usize] {
        &self.vars
    }

    /// The target sum.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Expands into `(constant, terms)`, everything scaled by `scale`.
    ///
    /// The `z_k^2 == 1` identities are folded into the constant, so the
    /// returned terms are strictly linear or pairwise.
    pub fn expand(&self, scale: f64) -> (f64, Vec<InteractionTerm>) {
        let m = self.vars.len();
        let constant = scale * (m as f64 + self.target * self.target);

        let mut terms = Vec::with_capacity(m + m * m.saturating_sub(1) / 2);
        for &v in &self.vars {
            terms.push(InteractionTerm::linear(v, -2.0 * self.target * scale));
        }
        for (i, &a) in self.vars.iter().enumerate() {
            for &b in &self.vars[i + 1..] {
                terms.push(InteractionTerm::quadratic(a, b, 2.0 * scale));
            }
        }
        (constant, terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quboku_core::TermVars;

    #[test]
    fn test_two_bit_expansion() {
        // (z0 + z1 - 1)^2 = 3 - 2 z0 - 2 z1 + 2 z0 z1
        let (constant, terms) = SquaredSum::new(vec![0, 1], 1.0).expand(1.0);
        assert_eq!(constant, 3.0);
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[0], InteractionTerm::linear(0, -2.0));
        assert_eq!(terms[1], InteractionTerm::linear(1, -2.0));
        assert_eq!(terms[2], InteractionTerm::quadratic(0, 1, 2.0));
    }

    #[test]
    fn test_scale_applies_everywhere() {
        let (constant, terms) = SquaredSum::new(vec![4, 7], 1.0).expand(1000.0);
        assert_eq!(constant, 3000.0);
        for t in &terms {
            assert!(t.coefficient == -2000.0 || t.coefficient == 2000.0);
        }
    }

    #[test]
    fn test_three_bit_expansion() {
        // m = 3, t = 2: constant = 3 + 4 = 7, linear -4 each, pairs +2.
        let (constant, terms) = SquaredSum::new(vec![0, 1, 2], 2.0).expand(1.0);
        assert_eq!(constant, 7.0);
        let linear: Vec<_> = terms
            .iter()
            .filter(|t| matches!(t.vars, TermVars::One(_)))
            .collect();
        let pairs: Vec<_> = terms
            .iter()
            .filter(|t| matches!(t.vars, TermVars::Pair(..)))
            .collect();
        assert_eq!(linear.len(), 3);
        assert!(linear.iter().all(|t| t.coefficient == -4.0));
        assert_eq!(pairs.len(), 3);
        assert!(pairs.iter().all(|t| t.coefficient == 2.0));
    }

    #[test]
    fn test_zero_target_keeps_constant_only_nonzero() {
        // m = 1, t = 0: (z)^2 == 1, no residual beyond the constant.
        let (constant, terms) = SquaredSum::new(vec![5], 0.0).expand(2.0);
        assert_eq!(constant, 2.0);
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].coefficient, 0.0);
    }
}
