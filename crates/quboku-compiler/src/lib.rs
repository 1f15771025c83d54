//! Quboku Compiler - From board constraints to a quadratic penalty model
//!
//! Turns a [`quboku_core::GridSpec`] into a [`quboku_core::PenaltyModel`]
//! whose minimum-energy assignments correspond to valid boards. Four
//! independent constraint families contribute weighted Ising terms:
//!
//! - one encoded number per cell ([`builders::one_number_per_cell`])
//! - row uniqueness ([`builders::unique_per_row`])
//! - column uniqueness ([`builders::unique_per_column`])
//! - subgrid uniqueness ([`builders::unique_per_subgrid`])
//!
//! The compiler only builds the objective and its decode rule; searching,
//! verifying, or sampling assignments is the job of whatever optimizer
//! consumes the model.

pub mod builders;
pub mod compile;
pub mod expand;

pub use builders::FamilyTerms;
pub use compile::compile;
pub use expand::SquaredSum;
