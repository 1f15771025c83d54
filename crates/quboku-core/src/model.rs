//! The aggregated quadratic penalty model.

use indexmap::IndexMap;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::error::{QubokuError, Result};
use crate::term::{InteractionTerm, TermVars};

/// A constant offset plus linear and quadratic coefficient maps over
/// sign-encoded binary variables.
///
/// Built once by the compiler and treated as read-only afterwards: terms
/// inserted under an existing key sum their coefficients, entries that sum
/// to exactly zero are pruned, and the surviving maps keep deterministic
/// insertion order. Any QUBO/Ising-style backend can consume the model
/// without reference to a specific solver API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PenaltyModel {
    total_vars: usize,
    offset: f64,
    linear: IndexMap<usize, f64>,
    #[serde(serialize_with = "serialize_quadratic")]
    quadratic: IndexMap<(usize, usize), f64>,
}

impl PenaltyModel {
    /// Creates an empty model over `total_vars` binary variables.
    pub fn new(total_vars: usize) -> Self {
        PenaltyModel {
            total_vars,
            offset: 0.0,
            linear: IndexMap::new(),
            quadratic: IndexMap::new(),
        }
    }

    /// Accumulates a constant contribution into the offset.
    pub fn add_offset(&mut self, constant: f64) {
        self.offset += constant;
    }

    /// Inserts a term, summing coefficients on key collision.
    pub fn add_term(&mut self, term: InteractionTerm) {
        match term.vars {
            TermVars::One(v) => {
                *self.linear.entry(v).or_insert(0.0) += term.coefficient;
            }
            TermVars::Pair(a, b) => {
                *self.quadratic.entry((a, b)).or_insert(0.0) += term.coefficient;
            }
        }
    }

    /// Drops entries whose coefficients summed to exactly zero.
    ///
    /// Semantics-preserving: a zero-weight term contributes nothing to the
    /// objective at any assignment.
    pub fn prune_zeros(&mut self) {
        self.linear.retain(|_, c| *c != 0.0);
        self.quadratic.retain(|_, c| *c != 0.0);
    }

    /// Number of binary variables the model is defined over.
    #[inline]
    pub const fn total_vars(&self) -> usize {
        self.total_vars
    }

    /// The constant offset.
    #[inline]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Linear coefficients, keyed by variable index.
    #[inline]
    pub fn linear(&self) -> &IndexMap<usize, f64> {
        &self.linear
    }

    /// Quadratic coefficients, keyed by canonical `(lo, hi)` variable pair.
    #[inline]
    pub fn quadratic(&self) -> &IndexMap<(usize, usize), f64> {
        &self.quadratic
    }

    /// Linear coefficient of one variable, zero if absent.
    pub fn linear_coefficient(&self, var: usize) -> f64 {
        self.linear.get(&var).copied().unwrap_or(0.0)
    }

    /// Quadratic coefficient of an unordered pair, zero if absent.
    pub fn quadratic_coefficient(&self, a: usize, b: usize) -> f64 {
        let key = if a < b { (a, b) } else { (b, a) };
        self.quadratic.get(&key).copied().unwrap_or(0.0)
    }

    /// Total number of stored coefficient entries.
    pub fn num_terms(&self) -> usize {
        self.linear.len() + self.quadratic.len()
    }

    /// Evaluates the objective at a bit assignment under the sign encoding
    /// `z = 1 - 2x`.
    ///
    /// This is point evaluation only; the model never searches for or
    /// samples assignments.
    ///
    /// # Errors
    ///
    /// Returns [`QubokuError::AssignmentLength`] if `bits` does not cover
    /// every variable exactly once.
    pub fn energy(&self, bits: &[u8]) -> Result<f64> {
        if bits.len() != self.total_vars {
            return Err(QubokuError::AssignmentLength {
                expected: self.total_vars,
                actual: bits.len(),
            });
        }
        let sign = |v: usize| if bits[v] != 0 { -1.0 } else { 1.0 };
        let mut e = self.offset;
        for (&v, &c) in &self.linear {
            e += c * sign(v);
        }
        for (&(a, b), &c) in &self.quadratic {
            e += c * sign(a) * sign(b);
        }
        Ok(e)
    }
}

// JSON maps need string keys, so pair-keyed coefficients serialize as a
// sequence of (lo, hi, coefficient) triples.
fn serialize_quadratic<S: Serializer>(
    map: &IndexMap<(usize, usize), f64>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(map.len()))?;
    for (&(a, b), &c) in map {
        seq.serialize_element(&(a, b, c))?;
    }
    seq.end()
}
