//! Quboku Core - Core types for the penalty-model compiler
//!
//! This crate provides the fundamental abstractions for Quboku:
//! - [`GridSpec`] describing a generalized Sudoku board and its binary encoding
//! - [`InteractionTerm`] and [`TermVars`] for weighted Ising interactions
//! - [`PenaltyModel`] holding the aggregated quadratic objective
//! - [`decode_assignment`] for mapping solver bit vectors back onto a grid

pub mod decode;
pub mod error;
pub mod grid;
pub mod model;
pub mod term;

pub use decode::decode_assignment;
pub use error::{QubokuError, Result};
pub use grid::GridSpec;
pub use model::PenaltyModel;
pub use term::{InteractionTerm, TermVars};
