use crate::error::{BufferError, ConversionError};
use crate::utf::{code_points, until_nul, Utf};
use tracing::debug;

/// Converts `source` into `buffer` and NUL-terminates it.
///
/// `buffer.len()` is the capacity, terminator included. On success the
/// converted units are returned as the front of `buffer`, and `O::NUL` is
/// stored right after them.
///
/// # Errors
///
/// Returns [`BufferError::Capacity`] if `buffer` is empty or cannot hold the
/// converted text plus its terminator, and [`BufferError::Conversion`] if
/// `source` is not well-formed.
///
/// On failure, the units converted before the failing one are left in
/// `buffer`, followed by `O::NUL`. The rest of the buffer is untouched.
/// Callers should not rely on this partial content.
pub fn convert_into<'b, O, I>(buffer: &'b mut [O], source: &[I]) -> Result<&'b mut [O], BufferError>
where
    O: Utf,
    I: Utf,
{
    // One unit is kept back for the terminator.
    let budget = match buffer.len().checked_sub(1) {
        Some(budget) => budget,
        None => {
            debug!("cannot convert into an empty buffer");
            return Err(BufferError::Capacity { capacity: 0 });
        }
    };

    let mut written = 0;
    let mut iter = code_points(source);
    let result = loop {
        let offset = iter.offset();
        let code_point = match iter.next() {
            None => break Ok(()),
            Some(Ok(code_point)) => code_point,
            Some(Err(kind)) => {
                let error = ConversionError::new(kind, offset);
                debug!(valid_up_to = offset, kind = %kind, "utf conversion failed");
                break Err(BufferError::Conversion(error));
            }
        };

        if budget - written < O::width(code_point) {
            debug!(
                capacity = buffer.len(),
                valid_up_to = offset,
                "utf conversion ran out of buffer"
            );
            break Err(BufferError::Capacity {
                capacity: buffer.len(),
            });
        }
        written += O::encode(code_point, &mut buffer[written..budget]);
    };

    buffer[written] = O::NUL;
    result?;
    Ok(&mut buffer[..written])
}

/// Converts `source` up to its first NUL unit into `buffer`.
///
/// See [`convert_into`].
#[inline]
pub fn convert_nul_into<'b, O, I>(
    buffer: &'b mut [O],
    source: &[I],
) -> Result<&'b mut [O], BufferError>
where
    O: Utf,
    I: Utf,
{
    convert_into(buffer, until_nul(source))
}

/// Converts a UTF-16 or UTF-32 `source` to NUL-terminated UTF-8 in `buffer`.
///
/// See [`convert_into`].
#[inline]
pub fn narrow_into<'b, W: Utf>(buffer: &'b mut [u8], source: &[W]) -> Result<&'b mut [u8], BufferError> {
    convert_into(buffer, source)
}

/// Like [`narrow_into`], stopping at the first NUL unit of `source`.
#[inline]
pub fn narrow_nul_into<'b, W: Utf>(
    buffer: &'b mut [u8],
    source: &[W],
) -> Result<&'b mut [u8], BufferError> {
    convert_nul_into(buffer, source)
}

/// Converts a UTF-8 `source` to NUL-terminated UTF-16 or UTF-32 in `buffer`.
///
/// See [`convert_into`].
#[inline]
pub fn widen_into<'b, W: Utf>(buffer: &'b mut [W], source: &[u8]) -> Result<&'b mut [W], BufferError> {
    convert_into(buffer, source)
}

/// Like [`widen_into`], stopping at the first NUL byte of `source`.
#[inline]
pub fn widen_nul_into<'b, W: Utf>(
    buffer: &'b mut [W],
    source: &[u8],
) -> Result<&'b mut [W], BufferError> {
    convert_nul_into(buffer, source)
}

/// Returns the number of `O` units `source` converts to, terminator
/// excluded.
///
/// A buffer of `encoded_len(source)? + 1` units is enough for
/// [`convert_into`].
pub fn encoded_len<O, I>(source: &[I]) -> Result<usize, ConversionError>
where
    O: Utf,
    I: Utf,
{
    let mut len = 0;
    let mut iter = code_points(source);
    loop {
        let offset = iter.offset();
        match iter.next() {
            None => return Ok(len),
            Some(Ok(code_point)) => len += O::width(code_point),
            Some(Err(kind)) => return Err(ConversionError::new(kind, offset)),
        }
    }
}
