use super::{next_unit, Utf};
use crate::codepoint::is_valid_code_point;
use crate::error::DecodeError;
use crate::CodePoint;

impl Utf for u32 {
    const NUL: u32 = 0;
    const MAX_WIDTH: usize = 1;

    #[inline]
    fn trail_length(self) -> Option<usize> {
        if is_valid_code_point(self) {
            Some(0)
        } else {
            None
        }
    }

    #[inline]
    fn is_trail(self) -> bool {
        false
    }

    #[inline]
    fn width(_: CodePoint) -> usize {
        1
    }

    #[inline]
    fn decode(units: &mut &[u32]) -> Result<CodePoint, DecodeError> {
        let unit = next_unit(units).ok_or(DecodeError::Incomplete)?;
        CodePoint::from_u32(unit).ok_or(DecodeError::Illegal)
    }

    #[inline]
    unsafe fn decode_valid(units: &mut &[u32]) -> CodePoint {
        let slice = *units;
        // Safety: the caller guarantees a valid unit is present.
        unsafe {
            *units = slice.get_unchecked(1..);
            CodePoint::from_u32_unchecked(*slice.get_unchecked(0))
        }
    }

    #[inline]
    fn encode(code_point: CodePoint, out: &mut [u32]) -> usize {
        out[0] = code_point.to_u32();
        1
    }
}
