//! A Unicode scalar value and the UTF-16 surrogates used to build one.

use core::fmt;
use core::num::NonZeroU16;


/// Checks if `value` is a Unicode scalar value: at most 0x10FFFF and not a
/// surrogate (U+D800 to U+DFFF).
#[inline]
pub const fn is_valid_code_point(value: u32) -> bool {
    value <= 0x10FFFF && !(0xD800 <= value && value <= 0xDFFF)
}

/// A Unicode code point that can be encoded: from U+0000 to U+10FFFF,
/// excluding the surrogates U+D800 to U+DFFF.
///
/// Decoders only ever return valid code points, and encoders rely on it, so
/// no value of this type can be confused with a decoding failure.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy)]
pub struct CodePoint {
    value: u32,
}

/// Format the code point as `U+` followed by four to six hexadecimal digits.
/// Example: `U+1F4A9`
impl fmt::Debug for CodePoint {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "U+{:04X}", self.value)
    }
}

impl fmt::Display for CodePoint {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_char(), formatter)
    }
}

impl CodePoint {
    /// The highest code point, U+10FFFF.
    pub const MAX: CodePoint = CodePoint { value: 0x10FFFF };

    /// Unsafely creates a new `CodePoint` without checking the value.
    ///
    /// # Safety
    ///
    /// Only safe if [`is_valid_code_point`] holds for `value`.
    #[inline]
    pub const unsafe fn from_u32_unchecked(value: u32) -> CodePoint {
        CodePoint { value }
    }

    /// Creates a new `CodePoint` if the value is a valid code point.
    ///
    /// Returns `None` if `value` is above 0x10FFFF or is a surrogate.
    #[inline]
    pub const fn from_u32(value: u32) -> Option<CodePoint> {
        if is_valid_code_point(value) {
            Some(CodePoint { value })
        } else {
            None
        }
    }

    /// Creates a new `CodePoint` from a `char`.
    ///
    /// Since all Unicode scalar values are code points, this always succeeds.
    #[inline]
    pub const fn from_char(value: char) -> CodePoint {
        CodePoint {
            value: value as u32,
        }
    }

    /// Combines a surrogate pair into the supplementary code point it encodes.
    ///
    /// Returns `None` unless `high` is a high surrogate and `low` a low one.
    #[inline]
    pub fn from_surrogates(high: Surrogate, low: Surrogate) -> Option<CodePoint> {
        if !high.is_high_surrogate() || !low.is_low_surrogate() {
            return None;
        }
        let value = 0x1_0000
            + ((((high.to_u16() & 0x3FF) as u32) << 10) | (low.to_u16() & 0x3FF) as u32);
        // Safety: the result lies in 0x10000..=0x10FFFF by construction.
        Some(unsafe { CodePoint::from_u32_unchecked(value) })
    }

    /// Returns the numeric value of the code point.
    #[inline]
    pub const fn to_u32(&self) -> u32 {
        self.value
    }

    /// Returns the code point as a `char`.
    #[inline]
    pub fn to_char(&self) -> char {
        // Safety: the type only holds Unicode scalar values.
        unsafe { char::from_u32_unchecked(self.value) }
    }

    /// Splits a supplementary code point into its UTF-16 surrogate pair.
    ///
    /// Returns `None` for code points in the Basic Multilingual Plane, which
    /// UTF-16 stores in a single unit.
    #[inline]
    pub fn to_surrogates(&self) -> Option<(Surrogate, Surrogate)> {
        if self.value < 0x1_0000 {
            return None;
        }
        let offset = self.value - 0x1_0000;
        // Safety: offset is below 0x100000, so both halves land in their
        // surrogate ranges.
        unsafe {
            Some((
                Surrogate::from_u16_unchecked(0xD800 | (offset >> 10) as u16),
                Surrogate::from_u16_unchecked(0xDC00 | (offset & 0x3FF) as u16),
            ))
        }
    }
}

impl From<char> for CodePoint {
    #[inline]
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl From<CodePoint> for char {
    #[inline]
    fn from(c: CodePoint) -> Self {
        c.to_char()
    }
}

impl From<CodePoint> for u32 {
    #[inline]
    fn from(c: CodePoint) -> Self {
        c.to_u32()
    }
}

/// A Unicode high or low surrogate: from U+D800 to U+DFFF.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy)]
pub struct Surrogate {
    // By using a non-zero u16 (which all surrogates are guaranteed to be),
    // we allow Option<Surrogate>s to be packed into 2 bytes, among other
    // optimizations.
    value: NonZeroU16,
}

/// Format the surrogate as `U+` followed by four hexadecimal digits.
/// Example: `U+D8F9`
impl fmt::Debug for Surrogate {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "U+{:04X}", self.value)
    }
}

impl Surrogate {
    /// Unsafely creates a new `Surrogate` without checking the value.
    ///
    /// # Safety
    ///
    /// Only safe if `value` is between 0xD800 and 0xDFFF, inclusive.
    #[inline]
    pub const unsafe fn from_u16_unchecked(value: u16) -> Surrogate {
        // Safety: if the value is >= 0xD800, it must be non-zero.
        Surrogate {
            value: unsafe { NonZeroU16::new_unchecked(value) },
        }
    }

    /// Creates a new `Surrogate` if the value is a valid Unicode surrogate.
    ///
    /// Returns `None` if `value` is below 0xD800 or above 0xDFFF.
    #[inline]
    pub const fn from_u16(value: u16) -> Option<Surrogate> {
        match value {
            // Safety: we have just checked the function invariant.
            0xD800..=0xDFFF => Some(unsafe { Surrogate::from_u16_unchecked(value) }),
            _ => None,
        }
    }

    /// Returns the numeric value of the surrogate.
    #[inline]
    pub const fn to_u16(&self) -> u16 {
        self.value.get()
    }

    /// Returns `true` if the surrogate is a high surrogate (from U+D800 to U+DBFF)
    /// and `false` if the surrogate is a low surrogate (from U+DC00 to U+DFFF).
    #[inline]
    pub const fn is_high_surrogate(&self) -> bool {
        matches!(self.value.get(), 0xD800..=0xDBFF)
    }

    /// Returns `true` if the surrogate is a low surrogate (from U+DC00 to U+DFFF).
    #[inline]
    pub const fn is_low_surrogate(&self) -> bool {
        !self.is_high_surrogate()
    }
}
