use super::{next_unit, Utf};
use crate::codepoint::Surrogate;
use crate::error::DecodeError;
use crate::CodePoint;

// See RFC 2781.
impl Utf for u16 {
    const NUL: u16 = 0;
    const MAX_WIDTH: usize = 2;

    #[inline]
    fn trail_length(self) -> Option<usize> {
        match Surrogate::from_u16(self) {
            None => Some(0),
            Some(s) if s.is_high_surrogate() => Some(1),
            Some(_) => None,
        }
    }

    #[inline]
    fn is_trail(self) -> bool {
        matches!(self, 0xDC00..=0xDFFF)
    }

    #[inline]
    fn width(code_point: CodePoint) -> usize {
        if code_point.to_u32() >= 0x1_0000 {
            2
        } else {
            1
        }
    }

    fn decode(units: &mut &[u16]) -> Result<CodePoint, DecodeError> {
        let first = next_unit(units).ok_or(DecodeError::Incomplete)?;
        let high = match Surrogate::from_u16(first) {
            // Safety: not a surrogate, and every u16 is below 0x10FFFF.
            None => return Ok(unsafe { CodePoint::from_u32_unchecked(first as u32) }),
            Some(s) if s.is_high_surrogate() => s,
            Some(_) => return Err(DecodeError::Illegal),
        };

        let second = next_unit(units).ok_or(DecodeError::Incomplete)?;
        Surrogate::from_u16(second)
            .and_then(|low| CodePoint::from_surrogates(high, low))
            .ok_or(DecodeError::Illegal)
    }

    unsafe fn decode_valid(units: &mut &[u16]) -> CodePoint {
        let slice = *units;
        // Safety: the caller guarantees a complete sequence is present.
        let first = unsafe { *slice.get_unchecked(0) };
        if !matches!(first, 0xD800..=0xDFFF) {
            *units = unsafe { slice.get_unchecked(1..) };
            // Safety: not a surrogate.
            return unsafe { CodePoint::from_u32_unchecked(first as u32) };
        }

        // Safety: a well-formed high surrogate is followed by a low one.
        let second = unsafe { *slice.get_unchecked(1) };
        *units = unsafe { slice.get_unchecked(2..) };
        let value = 0x1_0000 + ((((first & 0x3FF) as u32) << 10) | (second & 0x3FF) as u32);
        unsafe { CodePoint::from_u32_unchecked(value) }
    }

    fn encode(code_point: CodePoint, out: &mut [u16]) -> usize {
        match code_point.to_surrogates() {
            None => {
                out[0] = code_point.to_u32() as u16;
                1
            }
            Some((high, low)) => {
                let out = &mut out[..2];
                out[0] = high.to_u16();
                out[1] = low.to_u16();
                2
            }
        }
    }
}
