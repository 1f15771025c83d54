//! Compilation pipeline: builders fan out, aggregator merges.

use quboku_core::{GridSpec, PenaltyModel, Result};
use tracing::{debug, info};

use crate::builders::{
    one_number_per_cell, unique_per_column, unique_per_row, unique_per_subgrid, FamilyTerms,
};

/// Compiles a grid specification into the canonical penalty model.
///
/// The four constraint families are pure functions over the immutable spec
/// and are evaluated on the rayon pool; the merge runs in a fixed family
/// order (cell, row, column, subgrid), so the resulting model is
/// deterministic regardless of which family finishes first. Coefficient
/// addition is commutative, so the order only fixes map iteration order,
/// never the coefficients themselves.
///
/// # Errors
///
/// Propagates encoder errors, which cannot occur for a spec that passed
/// [`GridSpec::new`].
pub fn compile(spec: &GridSpec) -> Result<PenaltyModel> {
    info!(
        event = "compile_start",
        rows = spec.rows(),
        cols = spec.cols(),
        qubits_per_cell = spec.qubits_per_cell(),
        total_vars = spec.total_vars(),
    );

    let (cell, (row, (col, sub))) = rayon::join(
        || one_number_per_cell(spec),
        || {
            rayon::join(
                || unique_per_row(spec),
                || rayon::join(|| unique_per_column(spec), || unique_per_subgrid(spec)),
            )
        },
    );
    let families = [cell?, row?, col?, sub?];

    debug!(
        cell_terms = families[0].len(),
        row_terms = families[1].len(),
        column_terms = families[2].len(),
        subgrid_terms = families[3].len(),
    );

    let model = aggregate(spec.total_vars(), families);

    info!(
        event = "compile_end",
        linear = model.linear().len(),
        quadratic = model.quadratic().len(),
        offset = model.offset(),
    );
    Ok(model)
}

/// Merges family term lists into one model, summing coefficients on key
/// collision and pruning entries that cancel to zero.
fn aggregate<const N: usize>(total_vars: usize, families: [FamilyTerms; N]) -> PenaltyModel {
    let mut model = PenaltyModel::new(total_vars);
    for family in families {
        model.add_offset(family.offset);
        for term in family.terms {
            model.add_term(term);
        }
    }
    model.prune_zeros();
    model
}
