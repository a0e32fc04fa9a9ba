use thiserror::Error;

/// Errors returned by the clustering entry points in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Points in a dataset (or a periodic box) have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A flat coordinate array whose length is not a multiple of the dimension.
    #[error("flat coordinate array of length {len} is not divisible by ndim {ndim}")]
    RaggedInput {
        /// Length of the flat array.
        len: usize,
        /// Claimed number of dimensions.
        ndim: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
