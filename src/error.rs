//! Errors reported by decoding and conversion.

use thiserror::Error;

/// Why a code unit sequence could not be decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum DecodeError {
    /// The sequence is malformed: a bad continuation unit, a lone or
    /// mismatched surrogate, an overlong encoding, or a value outside the
    /// Unicode scalar range. Retrying with more input does not help.
    #[error("illegal code unit sequence")]
    Illegal,

    /// The input ended in the middle of a multi-unit sequence.
    #[error("incomplete code unit sequence")]
    Incomplete,
}

/// Errors which can occur when converting a whole sequence to another
/// encoding.
///
/// No partial output is ever returned alongside this error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("conversion failed: {kind} at unit {valid_up_to}")]
pub struct ConversionError {
    kind: DecodeError,
    valid_up_to: usize,
}

impl ConversionError {
    #[inline]
    pub(crate) fn new(kind: DecodeError, valid_up_to: usize) -> Self {
        Self { kind, valid_up_to }
    }

    /// Returns what went wrong with the offending sequence.
    #[inline]
    pub fn kind(&self) -> DecodeError {
        self.kind
    }

    /// Returns the index in the source, in code units, up to which the input
    /// was well-formed.
    ///
    /// The sequence that failed to decode starts at this index.
    #[inline]
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }
}

/// Errors which can occur when converting into a caller-supplied buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum BufferError {
    /// The source is not well-formed.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// The buffer cannot hold the converted text plus its terminator.
    #[error("buffer of {capacity} units is too small for the converted text")]
    Capacity {
        /// Length of the buffer that was supplied, terminator included.
        capacity: usize,
    },
}
