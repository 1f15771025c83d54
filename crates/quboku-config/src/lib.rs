//! Problem configuration for the quboku compiler.
//!
//! Load a board description from TOML or YAML and validate it into a
//! [`GridSpec`] without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use quboku_config::ProblemConfig;
//!
//! let config = ProblemConfig::from_toml_str(r#"
//!     alpha = 500.0
//!
//!     [board]
//!     rows = 4
//!     cols = 4
//!     subgrid_rows = 2
//!     subgrid_cols = 2
//!     qubits_per_cell = 2
//! "#).unwrap();
//!
//! let spec = config.to_spec().unwrap();
//! assert_eq!(spec.total_vars(), 32);
//! assert_eq!(spec.alpha(), 500.0);
//! ```
//!
//! Square boards need only a size; subgrid shape and encoding width are
//! derived:
//!
//! ```
//! use quboku_config::ProblemConfig;
//!
//! let config = ProblemConfig::from_toml_str("board = { size = 9 }").unwrap();
//! let spec = config.to_spec().unwrap();
//! assert_eq!(spec.subgrid_rows(), 3);
//! assert_eq!(spec.qubits_per_cell(), 4);
//! assert_eq!(spec.alpha(), 1000.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use quboku_core::grid::min_encoding_bits;
use quboku_core::{GridSpec, QubokuError};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Spec(#[from] QubokuError),
}

/// Default penalty weight, matching the reference problem setup.
pub const DEFAULT_ALPHA: f64 = 1000.0;

/// Top-level problem configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProblemConfig {
    /// Board geometry and encoding.
    #[serde(default)]
    pub board: BoardConfig,

    /// Penalty weight for every constraint family. Values `<= 0` produce a
    /// degenerate model and are accepted as-is.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

/// Board geometry section.
///
/// Either give `size` for a square board (subgrid side and encoding width
/// derived) or `rows`/`cols` with an explicit subgrid shape. Explicit
/// fields always override derived ones.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BoardConfig {
    /// Square-board shorthand: `rows = cols = size`.
    #[serde(default)]
    pub size: Option<usize>,

    #[serde(default)]
    pub rows: Option<usize>,

    #[serde(default)]
    pub cols: Option<usize>,

    #[serde(default)]
    pub subgrid_rows: Option<usize>,

    #[serde(default)]
    pub subgrid_cols: Option<usize>,

    /// Encoding width per cell; defaults to the minimal width for
    /// `max(rows, cols)` values.
    #[serde(default)]
    pub qubits_per_cell: Option<usize>,
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

impl Default for ProblemConfig {
    fn default() -> Self {
        ProblemConfig {
            board: BoardConfig::default(),
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl ProblemConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the square board size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.board.size = Some(size);
        self
    }

    /// Sets the penalty weight.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Validates the configuration into an immutable [`GridSpec`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the geometry is underspecified
    /// and propagates [`GridSpec::new`] validation failures.
    pub fn to_spec(&self) -> Result<GridSpec, ConfigError> {
        let b = &self.board;
        let (rows, cols) = match (b.size, b.rows, b.cols) {
            (Some(n), None, None) => (n, n),
            (None, Some(r), Some(c)) => (r, c),
            (None, Some(r), None) => (r, r),
            (None, None, _) => {
                return Err(ConfigError::Invalid(
                    "board needs either `size` or `rows`/`cols`".to_string(),
                ))
            }
            (Some(_), _, _) => {
                return Err(ConfigError::Invalid(
                    "`size` conflicts with explicit `rows`/`cols`".to_string(),
                ))
            }
        };
        let (subgrid_rows, subgrid_cols) = match (b.subgrid_rows, b.subgrid_cols) {
            (Some(sr), Some(sc)) => (sr, sc),
            (Some(sr), None) => (sr, sr),
            (None, Some(sc)) => (sc, sc),
            (None, None) => {
                // Square-board rule: isqrt-sided blocks.
                let side = (rows as f64).sqrt() as usize;
                if rows != cols || side * side != rows {
                    return Err(ConfigError::Invalid(
                        "subgrid shape required for non-square-block boards".to_string(),
                    ));
                }
                (side, side)
            }
        };
        let qubits_per_cell = b
            .qubits_per_cell
            .unwrap_or_else(|| min_encoding_bits(rows.max(cols)));

        Ok(GridSpec::new(
            rows,
            cols,
            qubits_per_cell,
            subgrid_rows,
            subgrid_cols,
            self.alpha,
        )?)
    }
}
