use std::num::ParseIntError;

/// Errors produced while parsing a range list such as `1,3-5,7-`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("invalid number format: {token:?}")]
    InvalidNumberFormat { token: String },

    #[error("invalid range bound {bound:?} in {token:?}")]
    InvalidRangeBound {
        token: String,
        bound: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid range format: {token:?}")]
    InvalidRangeFormat { token: String },

    #[error("invalid decreasing range: {start}-{end}")]
    DecreasingRange { start: usize, end: usize },

    #[error("invalid range with no endpoint: -")]
    InvalidRangeWithNoEndpoint,

    #[error("positions are numbered from 1: {token:?}")]
    ZeroPosition { token: String },
}

/// Errors produced while slicing a single line.
///
/// Intervals are clamped to the line before any read, so hitting one of these
/// means an interval escaped clamping.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("read past end of line: position {position}, length {len}")]
    OutOfBounds { position: usize, len: usize },
}
