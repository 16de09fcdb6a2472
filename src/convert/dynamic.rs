use crate::error::ConversionError;
use crate::utf::{code_points, until_nul, Utf};
use alloc::string::String;
use alloc::vec::Vec;
use tracing::debug;

/// Converts `source` to a newly allocated sequence of `O` units.
///
/// The result is pre-sized to `source.len()` units and grows as needed.
///
/// # Errors
///
/// Returns a [`ConversionError`] if `source` is not well-formed. Nothing
/// converted before the error is returned.
pub fn utf_to_utf<O, I>(source: &[I]) -> Result<Vec<O>, ConversionError>
where
    O: Utf,
    I: Utf,
{
    let mut result = Vec::with_capacity(source.len());
    let mut iter = code_points(source);
    loop {
        let offset = iter.offset();
        match iter.next() {
            None => return Ok(result),
            Some(Ok(code_point)) => O::encode_to_vec(code_point, &mut result),
            Some(Err(kind)) => {
                debug!(valid_up_to = offset, kind = %kind, "utf conversion failed");
                return Err(ConversionError::new(kind, offset));
            }
        }
    }
}

/// Converts `source` up to its first NUL unit.
///
/// See [`utf_to_utf`].
#[inline]
pub fn utf_to_utf_nul<O, I>(source: &[I]) -> Result<Vec<O>, ConversionError>
where
    O: Utf,
    I: Utf,
{
    utf_to_utf(until_nul(source))
}

/// Converts a UTF-16 or UTF-32 `source` to a UTF-8 `String`.
pub fn narrow<W: Utf>(source: &[W]) -> Result<String, ConversionError> {
    let bytes = utf_to_utf::<u8, W>(source)?;
    // Safety: every code point was encoded as well-formed UTF-8.
    Ok(unsafe { String::from_utf8_unchecked(bytes) })
}

/// Like [`narrow`], stopping at the first NUL unit of `source`.
#[inline]
pub fn narrow_nul<W: Utf>(source: &[W]) -> Result<String, ConversionError> {
    narrow(until_nul(source))
}

/// Converts UTF-8 bytes to UTF-16 or UTF-32.
#[inline]
pub fn widen<W: Utf>(source: &[u8]) -> Result<Vec<W>, ConversionError> {
    utf_to_utf(source)
}

/// Like [`widen`], stopping at the first NUL byte of `source`.
#[inline]
pub fn widen_nul<W: Utf>(source: &[u8]) -> Result<Vec<W>, ConversionError> {
    utf_to_utf_nul(source)
}

/// Converts a `str` to UTF-16 or UTF-32.
///
/// A `str` is always well-formed, so this cannot fail.
pub fn widen_str<W: Utf>(source: &str) -> Vec<W> {
    let mut units = source.as_bytes();
    let mut result = Vec::with_capacity(units.len());
    while !units.is_empty() {
        // Safety: `str` holds well-formed UTF-8, and the cursor only ever
        // stops on sequence boundaries.
        let code_point = unsafe { <u8 as Utf>::decode_valid(&mut units) };
        W::encode_to_vec(code_point, &mut result);
    }
    result
}
