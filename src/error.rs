use thiserror::Error;

/// Why a single path outline could not be measured.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// The path parser rejected the string.
    #[error("malformed path data: {0}")]
    Syntax(String),

    /// The path parsed but contains no coordinates.
    #[error("path data contains no coordinates")]
    Empty,

    /// A coordinate, or the path's width or height, is infinite or NaN.
    #[error("path data contains a non-finite coordinate")]
    NonFinite,
}

/// Failure of a strict viewBox aggregation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewBoxError {
    #[error("invalid path at index {index}: {source}")]
    InvalidPath {
        index: usize,
        #[source]
        source: PathError,
    },

    #[error("no paths to fit")]
    EmptyInput,

    /// Every path is finite but together they span more than `f64` can hold.
    #[error("combined extent of the paths overflows")]
    Overflow,
}

impl ViewBoxError {
    /// Position of the offending path, if the error refers to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            ViewBoxError::InvalidPath { index, .. } => Some(*index),
            ViewBoxError::EmptyInput | ViewBoxError::Overflow => None,
        }
    }
}
