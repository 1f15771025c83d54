//! Shared test fixtures for quboku crates.
//!
//! This crate provides seeded board generation and bit-assignment encoding
//! for testing the compiler against known-valid solutions. It is test
//! tooling: the compiler itself never generates, validates, or searches for
//! boards.
//!
//! - [`generator`] - seeded Sudoku board generation and validity checking
//! - [`assignment`] - encoding a grid of values as a solver bit vector
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! quboku-test = { workspace = true }
//! ```

pub mod assignment;
pub mod generator;

pub use assignment::board_to_assignment;
pub use generator::{generate_board, is_valid_solution, punch_holes};
