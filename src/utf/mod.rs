//! Per-width codecs between code points and UTF code units.
//!
//! The [`Utf`] trait is implemented for `u8` (UTF-8), `u16` (UTF-16) and
//! `u32` (UTF-32). The encoding is picked by the code unit type at compile
//! time.

use crate::error::{ConversionError, DecodeError};
use crate::CodePoint;
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

mod utf16;
mod utf32;
mod utf8;

#[cfg(test)]
mod tests;

mod private {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A UTF code unit: converts code points to and from sequences of `Self`.
///
/// Decoding works on a cursor, a `&mut &[Self]` that is advanced past every
/// unit consumed, including the units of a sequence that turned out to be
/// malformed.
///
/// This trait is sealed and not meant to be implemented by an user of this
/// library.
pub trait Utf: Copy + Eq + fmt::Debug + private::Sealed + 'static {
    /// The unit terminating NUL-delimited strings.
    const NUL: Self;

    /// Maximal width of a valid sequence, in code units.
    const MAX_WIDTH: usize;

    /// Returns how many trail units follow `self` when it leads a sequence.
    ///
    /// Returns `None` if `self` can never start a valid sequence.
    fn trail_length(self) -> Option<usize>;

    /// Returns `true` if `self` is a continuation unit. Always `false` for
    /// UTF-32.
    fn is_trail(self) -> bool;

    /// Returns `true` if `self` is not a continuation unit. Always `true` for
    /// UTF-32.
    #[inline]
    fn is_lead(self) -> bool {
        !self.is_trail()
    }

    /// The number of code units needed to encode `code_point`, in
    /// `1..=MAX_WIDTH`.
    fn width(code_point: CodePoint) -> usize;

    /// Reads one code point from the front of `units`.
    ///
    /// Returns [`DecodeError::Incomplete`] if `units` ends before the
    /// sequence does (or is empty), and [`DecodeError::Illegal`] for a
    /// malformed or non-canonical sequence.
    fn decode(units: &mut &[Self]) -> Result<CodePoint, DecodeError>;

    /// Reads one code point from the front of `units` without any checking.
    ///
    /// # Safety
    ///
    /// `units` must start with a complete, well-formed sequence, such as the
    /// bytes of a `str`.
    unsafe fn decode_valid(units: &mut &[Self]) -> CodePoint;

    /// Writes the encoding of `code_point` to the front of `out` and returns
    /// the number of units written, `Self::width(code_point)`.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than `Self::width(code_point)`.
    fn encode(code_point: CodePoint, out: &mut [Self]) -> usize;

    /// Appends the encoding of `code_point` to `out`.
    #[inline]
    fn encode_to_vec(code_point: CodePoint, out: &mut Vec<Self>) {
        let mut scratch = [Self::NUL; 4];
        let width = Self::encode(code_point, &mut scratch);
        out.extend_from_slice(&scratch[..width]);
    }
}

/// Pops the first unit of the cursor.
#[inline]
fn next_unit<U: Copy>(units: &mut &[U]) -> Option<U> {
    let slice = *units;
    let (&first, rest) = slice.split_first()?;
    *units = rest;
    Some(first)
}

/// Returns `units` up to, not including, the first NUL unit.
///
/// The whole slice is returned when it holds no NUL.
#[inline]
pub fn until_nul<U: Utf>(units: &[U]) -> &[U] {
    match units.iter().position(|&unit| unit == U::NUL) {
        Some(end) => &units[..end],
        None => units,
    }
}

/// Returns an iterator decoding the code points of `units`.
#[inline]
pub fn code_points<U: Utf>(units: &[U]) -> CodePoints<'_, U> {
    CodePoints { units, offset: 0 }
}

/// Checks that `units` is entirely well-formed.
pub fn validate<U: Utf>(units: &[U]) -> Result<(), ConversionError> {
    let mut iter = code_points(units);
    loop {
        let offset = iter.offset();
        match iter.next() {
            None => return Ok(()),
            Some(Ok(_)) => {}
            Some(Err(kind)) => return Err(ConversionError::new(kind, offset)),
        }
    }
}

/// Iterator over the code points of a code unit sequence.
///
/// Yields one item per sequence read. Decoding carries on after an error,
/// from the unit following the ones the bad sequence consumed.
#[derive(Clone, Debug)]
pub struct CodePoints<'a, U> {
    units: &'a [U],
    offset: usize,
}

impl<'a, U: Utf> CodePoints<'a, U> {
    /// The number of units consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The units not decoded yet.
    #[inline]
    pub fn as_slice(&self) -> &'a [U] {
        self.units
    }
}

impl<U: Utf> Iterator for CodePoints<'_, U> {
    type Item = Result<CodePoint, DecodeError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.units.is_empty() {
            return None;
        }
        let before = self.units.len();
        let item = U::decode(&mut self.units);
        self.offset += before - self.units.len();
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let v = self.units.len();
        (v.saturating_add(U::MAX_WIDTH - 1) / U::MAX_WIDTH, Some(v))
    }
}

impl<U: Utf> FusedIterator for CodePoints<'_, U> {}
