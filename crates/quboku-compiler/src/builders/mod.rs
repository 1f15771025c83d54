//! The four constraint-term builders.
//!
//! Each builder is a pure function from an immutable [`GridSpec`] to a
//! [`FamilyTerms`] list; no builder shares state with another, so the
//! compiler may evaluate them in any order or in parallel.
//!
//! Every builder returns `Result` because it reaches variables through the
//! checked encoder, but for a spec that passed construction the loops stay
//! inside the declared domains and term generation cannot fail.

mod cell;
mod line;
mod subgrid;

pub use cell::{cell_expressions, one_number_per_cell};
pub use line::{unique_per_column, unique_per_row};
pub use subgrid::unique_per_subgrid;

use quboku_core::InteractionTerm;

/// The output of one constraint family: an accumulated constant plus a term
/// list, not yet merged with the other families.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FamilyTerms {
    /// Constant contribution folded out of this family's expressions.
    pub offset: f64,
    /// Linear and quadratic interaction terms.
    pub terms: Vec<InteractionTerm>,
}

impl FamilyTerms {
    /// Number of interaction terms (the constant offset is not a term).
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if the family produced no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
