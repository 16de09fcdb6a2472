#![no_std]

//! # utf-convert
//!
//! Checked conversion between UTF-8, UTF-16 and UTF-32 code unit sequences.
//!
//! Code units are `u8`, `u16` and `u32`; the [`Utf`] trait holds the codec of
//! each width. Decoding rejects overlong UTF-8, lone surrogates and values
//! outside the Unicode scalar range, and tells truncated input apart from
//! malformed input.
//!
//! ```
//! use utf_convert::{narrow, widen, widen_into};
//!
//! let hello = "שלום".as_bytes();
//! let wide: Vec<u16> = widen(hello).unwrap();
//! assert_eq!(wide, [0x05E9, 0x05DC, 0x05D5, 0x05DD]);
//! assert_eq!(narrow(&wide[..]).unwrap(), "שלום");
//!
//! // Four characters plus the terminator.
//! let mut buffer = [0u16; 5];
//! assert_eq!(widen_into(&mut buffer, hello).unwrap().len(), 4);
//! assert!(widen_into(&mut buffer[..4], hello).is_err());
//! ```
extern crate alloc;

pub mod codepoint;
pub mod convert;
pub mod error;
pub mod utf;

pub use codepoint::{is_valid_code_point, CodePoint, Surrogate};
pub use convert::{
    convert_into, convert_nul_into, encoded_len, narrow, narrow_into, narrow_nul,
    narrow_nul_into, utf_to_utf, utf_to_utf_nul, widen, widen_into, widen_nul, widen_nul_into,
    widen_str,
};
pub use error::{BufferError, ConversionError, DecodeError};
pub use utf::Utf;
