//! Conversion of whole code unit sequences between UTF encodings.
//!
//! Two flavours exist:
//!
//! * bounded conversion ([`convert_into`] and friends) writes into a buffer
//!   supplied by the caller, never past its end, and NUL-terminates the
//!   result;
//! * dynamic conversion ([`utf_to_utf`] and friends) allocates a new
//!   container sized to fit.
//!
//! "Narrow" converts a wide (UTF-16 or UTF-32) sequence to UTF-8, "widen"
//! goes the other way.

mod bounded;
mod dynamic;


pub use bounded::{
    convert_into, convert_nul_into, encoded_len, narrow_into, narrow_nul_into, widen_into,
    widen_nul_into,
};
pub use dynamic::{
    narrow, narrow_nul, utf_to_utf, utf_to_utf_nul, widen, widen_nul, widen_str,
};
