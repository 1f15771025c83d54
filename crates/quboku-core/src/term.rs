//! Weighted Ising interaction terms.
//!
//! Every variable is sign-encoded: a bit `x` in `{0, 1}` enters the
//! objective as `z = 1 - 2x` in `{+1, -1}`. An [`InteractionTerm`] is a
//! real coefficient times a product of one or two such sign variables;
//! the whole system stays at degree <= 2.

/// Ordered variable set of an interaction term.
///
/// Pairs are kept in canonical `lo < hi` order so that the aggregator can
/// merge terms coming from different constraint families under one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TermVars {
    /// A single sign variable (a linear term).
    One(usize),
    /// An unordered pair of distinct sign variables (a quadratic term).
    Pair(usize, usize),
}

impl TermVars {
    /// Variable set of a linear term.
    #[inline]
    pub const fn one(var: usize) -> Self {
        TermVars::One(var)
    }

    /// Canonical variable set of a quadratic term.
    ///
    /// The two variables must be distinct; `z * z` folds to a constant and
    /// never reaches term form.
    #[inline]
    pub fn pair(a: usize, b: usize) -> Self {
        debug_assert_ne!(a, b, "quadratic term over a single variable");
        if a < b {
            TermVars::Pair(a, b)
        } else {
            TermVars::Pair(b, a)
        }
    }
}

/// A weighted product of one or two sign-encoded variables.
///
/// # Example
///
/// ```
/// use quboku_core::{InteractionTerm, TermVars};
///
/// let t = InteractionTerm::quadratic(7, 3, 1000.0);
/// assert_eq!(t.vars, TermVars::Pair(3, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionTerm {
    /// Weight of this term in the objective.
    pub coefficient: f64,
    /// Which sign variables the term multiplies.
    pub vars: TermVars,
}

impl InteractionTerm {
    /// Creates a linear term `coefficient * z(var)`.
    #[inline]
    pub const fn linear(var: usize, coefficient: f64) -> Self {
        InteractionTerm {
            coefficient,
            vars: TermVars::One(var),
        }
    }

    /// Creates a quadratic term `coefficient * z(a) * z(b)` with the pair in
    /// canonical order.
    #[inline]
    pub fn quadratic(a: usize, b: usize, coefficient: f64) -> Self {
        InteractionTerm {
            coefficient,
            vars: TermVars::pair(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_canonical_order() {
        assert_eq!(TermVars::pair(2, 9), TermVars::Pair(2, 9));
        assert_eq!(TermVars::pair(9, 2), TermVars::Pair(2, 9));
    }

    #[test]
    fn test_quadratic_normalizes() {
        let a = InteractionTerm::quadratic(5, 1, 2.0);
        let b = InteractionTerm::quadratic(1, 5, 2.0);
        assert_eq!(a, b);
    }
}
