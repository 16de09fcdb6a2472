use super::{next_unit, Utf};
use crate::error::DecodeError;
use crate::CodePoint;

/// Mask of the value bits of a continuation byte.
const CONT_MASK: u8 = 0b0011_1111;

/// Tag bits of a continuation byte.
const TAG_CONT: u8 = 0b1000_0000;

/// Returns the value bits of a lead byte followed by `trail` continuation
/// bytes: bottom 5 bits for one, 4 bits for two and 3 bits for three.
#[inline]
fn lead_bits(byte: u8, trail: usize) -> u32 {
    (byte & (CONT_MASK >> trail)) as u32
}

/// Returns the value of `acc` updated with continuation byte `byte`.
#[inline]
fn acc_cont_byte(acc: u32, byte: u8) -> u32 {
    (acc << 6) | (byte & CONT_MASK) as u32
}

impl Utf for u8 {
    const NUL: u8 = 0;
    const MAX_WIDTH: usize = 4;

    #[inline]
    fn trail_length(self) -> Option<usize> {
        match self {
            0x00..=0x7F => Some(0),
            // Continuation bytes, and C0/C1 which could only start overlong
            // two byte sequences.
            0x80..=0xC1 => None,
            0xC2..=0xDF => Some(1),
            0xE0..=0xEF => Some(2),
            0xF0..=0xF4 => Some(3),
            0xF5..=0xFF => None,
        }
    }

    #[inline]
    fn is_trail(self) -> bool {
        self & !CONT_MASK == TAG_CONT
    }

    #[inline]
    fn width(code_point: CodePoint) -> usize {
        match code_point.to_u32() {
            0..=0x7F => 1,
            0x80..=0x7FF => 2,
            0x800..=0xFFFF => 3,
            _ => 4,
        }
    }

    fn decode(units: &mut &[u8]) -> Result<CodePoint, DecodeError> {
        let lead = next_unit(units).ok_or(DecodeError::Incomplete)?;
        let trail = lead.trail_length().ok_or(DecodeError::Illegal)?;

        if trail == 0 {
            // Safety: the byte is ascii.
            return Ok(unsafe { CodePoint::from_u32_unchecked(lead as u32) });
        }

        let mut value = lead_bits(lead, trail);
        for _ in 0..trail {
            let byte = next_unit(units).ok_or(DecodeError::Incomplete)?;
            if !byte.is_trail() {
                return Err(DecodeError::Illegal);
            }
            value = acc_cont_byte(value, byte);
        }

        // Rejects surrogates and values past U+10FFFF.
        let code_point = CodePoint::from_u32(value).ok_or(DecodeError::Illegal)?;

        // Only the shortest form is accepted.
        if Self::width(code_point) != trail + 1 {
            return Err(DecodeError::Illegal);
        }

        Ok(code_point)
    }

    unsafe fn decode_valid(units: &mut &[u8]) -> CodePoint {
        let slice = *units;
        // Safety: the caller guarantees a complete sequence is present.
        let lead = unsafe { *slice.get_unchecked(0) };
        let trail = match lead {
            0x00..=0xBF => 0,
            0xC0..=0xDF => 1,
            0xE0..=0xEF => 2,
            _ => 3,
        };

        let mut value = if trail == 0 {
            lead as u32
        } else {
            lead_bits(lead, trail)
        };
        for i in 1..=trail {
            // Safety: as above.
            value = acc_cont_byte(value, unsafe { *slice.get_unchecked(i) });
        }

        // Safety: as above.
        *units = unsafe { slice.get_unchecked(trail + 1..) };
        // Safety: well-formed UTF-8 only decodes to scalar values.
        unsafe { CodePoint::from_u32_unchecked(value) }
    }

    fn encode(code_point: CodePoint, out: &mut [u8]) -> usize {
        let value = code_point.to_u32();
        match Self::width(code_point) {
            1 => {
                out[0] = value as u8;
                1
            }
            2 => {
                let out = &mut out[..2];
                out[0] = (value >> 6) as u8 | 0xC0;
                out[1] = (value as u8 & CONT_MASK) | TAG_CONT;
                2
            }
            3 => {
                let out = &mut out[..3];
                out[0] = (value >> 12) as u8 | 0xE0;
                out[1] = ((value >> 6) as u8 & CONT_MASK) | TAG_CONT;
                out[2] = (value as u8 & CONT_MASK) | TAG_CONT;
                3
            }
            _ => {
                let out = &mut out[..4];
                out[0] = (value >> 18) as u8 | 0xF0;
                out[1] = ((value >> 12) as u8 & CONT_MASK) | TAG_CONT;
                out[2] = ((value >> 6) as u8 & CONT_MASK) | TAG_CONT;
                out[3] = (value as u8 & CONT_MASK) | TAG_CONT;
                4
            }
        }
    }
}
