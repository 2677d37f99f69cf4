use core::fmt;

/// Result alias for `modclust`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the clustering engine and its sparse helpers.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input was empty (0×0 matrix or a graph without nodes).
    EmptyInput,

    /// Adjacency matrix is not square.
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// Dimension mismatch between a matrix and a per-vertex vector.
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Entry index outside the matrix.
    IndexOutOfBounds {
        /// Offending row.
        row: usize,
        /// Offending column.
        col: usize,
        /// Matrix dimension.
        n: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// A sparse product or operator assembly failed while building a coarser level.
    Coarsening(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::NotSquare { rows, cols } => {
                write!(f, "adjacency matrix must be square, got {rows}x{cols}")
            }
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::IndexOutOfBounds { row, col, n } => {
                write!(f, "entry ({row}, {col}) outside {n}x{n} matrix")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Error::Coarsening(msg) => write!(f, "coarsening failed: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
