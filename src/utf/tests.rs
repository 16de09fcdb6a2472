use super::*;
use alloc::vec;

fn c(value: u32) -> CodePoint {
    CodePoint::from_u32(value).unwrap()
}

/// Decodes the front of `units` and reports how many units were consumed.
fn decode<U: Utf>(units: &[U]) -> (Result<CodePoint, DecodeError>, usize) {
    let mut cursor = units;
    let result = U::decode(&mut cursor);
    (result, units.len() - cursor.len())
}

#[test]
fn utf8_trail_length() {
    assert_eq!(b'a'.trail_length(), Some(0));
    assert_eq!(0x7Fu8.trail_length(), Some(0));
    assert_eq!(0x80u8.trail_length(), None);
    assert_eq!(0xBFu8.trail_length(), None);
    assert_eq!(0xC0u8.trail_length(), None);
    assert_eq!(0xC1u8.trail_length(), None);
    assert_eq!(0xC2u8.trail_length(), Some(1));
    assert_eq!(0xD7u8.trail_length(), Some(1));
    assert_eq!(0xE0u8.trail_length(), Some(2));
    assert_eq!(0xEFu8.trail_length(), Some(2));
    assert_eq!(0xF0u8.trail_length(), Some(3));
    assert_eq!(0xF4u8.trail_length(), Some(3));
    assert_eq!(0xF5u8.trail_length(), None);
    assert_eq!(0xFFu8.trail_length(), None);
}

#[test]
fn utf8_lead_and_trail() {
    assert!(0x80u8.is_trail());
    assert!(0xBFu8.is_trail());
    assert!(!0xC2u8.is_trail());
    assert!(!b'a'.is_trail());
    assert!(b'a'.is_lead());
    assert!(0xF0u8.is_lead());
    assert!(!0x9Cu8.is_lead());
}

#[test]
fn utf8_width() {
    assert_eq!(u8::width(c(0)), 1);
    assert_eq!(u8::width(c(0x7F)), 1);
    assert_eq!(u8::width(c(0x80)), 2);
    assert_eq!(u8::width(c(0x7FF)), 2);
    assert_eq!(u8::width(c(0x800)), 3);
    assert_eq!(u8::width(c(0xFFFF)), 3);
    assert_eq!(u8::width(c(0x10000)), 4);
    assert_eq!(u8::width(c(0x10FFFF)), 4);
}

#[test]
fn utf8_decode() {
    assert_eq!(decode(b"a"), (Ok(c(0x61)), 1));
    assert_eq!(decode(b"\xD7\xA9\xD7\x9C"), (Ok(c(0x05E9)), 2));
    assert_eq!(decode(b"\xE2\x82\xAC"), (Ok(c(0x20AC)), 3));
    assert_eq!(decode(b"\xF0\x9F\x92\xA9"), (Ok(c(0x1F4A9)), 4));
    assert_eq!(decode(b"\xF4\x8F\xBF\xBF"), (Ok(c(0x10FFFF)), 4));
}

#[test]
fn utf8_decode_incomplete() {
    assert_eq!(decode::<u8>(&[]), (Err(DecodeError::Incomplete), 0));
    assert_eq!(decode(b"\xD7"), (Err(DecodeError::Incomplete), 1));
    assert_eq!(decode(b"\xE2\x82"), (Err(DecodeError::Incomplete), 2));
    assert_eq!(decode(b"\xF0\x9F\x92"), (Err(DecodeError::Incomplete), 3));
}

#[test]
fn utf8_decode_illegal() {
    assert_eq!(decode(b"\xFF\xFF"), (Err(DecodeError::Illegal), 1));
    assert_eq!(decode(b"\x80"), (Err(DecodeError::Illegal), 1));
    // Bad continuation byte is consumed with the lead.
    assert_eq!(decode(b"\xD7a"), (Err(DecodeError::Illegal), 2));
    assert_eq!(decode(b"\xE2\x82a"), (Err(DecodeError::Illegal), 3));
    // Overlong forms.
    assert_eq!(decode(b"\xC0\x80"), (Err(DecodeError::Illegal), 1));
    assert_eq!(decode(b"\xE0\x80\x80"), (Err(DecodeError::Illegal), 3));
    assert_eq!(decode(b"\xE0\x9F\xBF"), (Err(DecodeError::Illegal), 3));
    assert_eq!(decode(b"\xF0\x8F\xBF\xBF"), (Err(DecodeError::Illegal), 4));
    // Surrogates.
    assert_eq!(decode(b"\xED\xA0\x80"), (Err(DecodeError::Illegal), 3));
    assert_eq!(decode(b"\xED\xBF\xBF"), (Err(DecodeError::Illegal), 3));
    // Past U+10FFFF.
    assert_eq!(decode(b"\xF4\x90\x80\x80"), (Err(DecodeError::Illegal), 4));
}

#[test]
fn utf8_encode() {
    let mut buf = [0u8; 4];
    assert_eq!(u8::encode(c(0x61), &mut buf), 1);
    assert_eq!(&buf[..1], b"a");
    assert_eq!(u8::encode(c(0x05DD), &mut buf), 2);
    assert_eq!(&buf[..2], b"\xD7\x9D");
    assert_eq!(u8::encode(c(0x20AC), &mut buf), 3);
    assert_eq!(&buf[..3], b"\xE2\x82\xAC");
    assert_eq!(u8::encode(c(0x1F4A9), &mut buf), 4);
    assert_eq!(&buf, b"\xF0\x9F\x92\xA9");
}

#[test]
#[should_panic]
fn utf8_encode_short_buffer() {
    let mut buf = [0u8; 2];
    u8::encode(c(0x20AC), &mut buf);
}

#[test]
fn utf8_decode_valid() {
    let source = "aש€💩";
    let mut cursor = source.as_bytes();
    let mut decoded = vec![];
    while !cursor.is_empty() {
        decoded.push(unsafe { u8::decode_valid(&mut cursor) });
    }
    assert_eq!(decoded, [c(0x61), c(0x05E9), c(0x20AC), c(0x1F4A9)]);
}

#[test]
fn utf16_classify() {
    assert_eq!(0x61u16.trail_length(), Some(0));
    assert_eq!(0xD7FFu16.trail_length(), Some(0));
    assert_eq!(0xD800u16.trail_length(), Some(1));
    assert_eq!(0xDBFFu16.trail_length(), Some(1));
    assert_eq!(0xDC00u16.trail_length(), None);
    assert_eq!(0xDFFFu16.trail_length(), None);
    assert_eq!(0xE000u16.trail_length(), Some(0));

    assert!(0xDC00u16.is_trail());
    assert!(!0xDBFFu16.is_trail());
    assert!(0xD800u16.is_lead());
    assert!(!0xDFFFu16.is_lead());

    assert_eq!(u16::width(c(0xFFFF)), 1);
    assert_eq!(u16::width(c(0x10000)), 2);
}

#[test]
fn utf16_decode() {
    assert_eq!(decode(&[0x05E9u16, 0x05DC]), (Ok(c(0x05E9)), 1));
    assert_eq!(decode(&[0xD83Du16, 0xDCA9]), (Ok(c(0x1F4A9)), 2));
    assert_eq!(decode(&[0xDBFFu16, 0xDFFF]), (Ok(c(0x10FFFF)), 2));

    assert_eq!(decode::<u16>(&[]), (Err(DecodeError::Incomplete), 0));
    assert_eq!(decode(&[0xD83Du16]), (Err(DecodeError::Incomplete), 1));
    assert_eq!(decode(&[0xDCA9u16, 0xD83D]), (Err(DecodeError::Illegal), 1));
    assert_eq!(decode(&[0xD83Du16, 0x0061]), (Err(DecodeError::Illegal), 2));
    assert_eq!(decode(&[0xD83Du16, 0xD83D]), (Err(DecodeError::Illegal), 2));
}

#[test]
fn utf16_encode() {
    let mut buf = [0u16; 2];
    assert_eq!(u16::encode(c(0x05E9), &mut buf), 1);
    assert_eq!(buf[0], 0x05E9);
    assert_eq!(u16::encode(c(0x1F4A9), &mut buf), 2);
    assert_eq!(buf, [0xD83D, 0xDCA9]);
}

#[test]
fn utf16_decode_valid() {
    let units = [0x61u16, 0xD83D, 0xDCA9, 0x05E9];
    let mut cursor = &units[..];
    assert_eq!(unsafe { u16::decode_valid(&mut cursor) }, c(0x61));
    assert_eq!(unsafe { u16::decode_valid(&mut cursor) }, c(0x1F4A9));
    assert_eq!(unsafe { u16::decode_valid(&mut cursor) }, c(0x05E9));
    assert!(cursor.is_empty());
}

#[test]
fn utf32_codec() {
    assert_eq!(0x61u32.trail_length(), Some(0));
    assert_eq!(0x10FFFFu32.trail_length(), Some(0));
    assert_eq!(0xD800u32.trail_length(), None);
    assert_eq!(0x110000u32.trail_length(), None);
    assert!(!0xDC00u32.is_trail());
    assert!(0xDC00u32.is_lead());
    assert_eq!(u32::width(c(0x10FFFF)), 1);

    assert_eq!(decode(&[0x1F4A9u32]), (Ok(c(0x1F4A9)), 1));
    assert_eq!(decode::<u32>(&[]), (Err(DecodeError::Incomplete), 0));
    assert_eq!(decode(&[0xDFFFu32]), (Err(DecodeError::Illegal), 1));
    assert_eq!(decode(&[0xFFFF_FFFFu32]), (Err(DecodeError::Illegal), 1));

    let mut buf = [0u32; 1];
    assert_eq!(u32::encode(c(0x1F4A9), &mut buf), 1);
    assert_eq!(buf, [0x1F4A9]);

    let mut cursor = &[0x05E9u32][..];
    assert_eq!(unsafe { u32::decode_valid(&mut cursor) }, c(0x05E9));
    assert!(cursor.is_empty());
}

#[test]
fn encode_to_vec_appends() {
    let mut out = vec![b'>'];
    u8::encode_to_vec(c(0x1F4A9), &mut out);
    assert_eq!(out, b">\xF0\x9F\x92\xA9");

    let mut out = vec![];
    u16::encode_to_vec(c(0x1F4A9), &mut out);
    u16::encode_to_vec(c(0x61), &mut out);
    assert_eq!(out, [0xD83D, 0xDCA9, 0x61]);
}

#[test]
fn code_points_iterator() {
    let mut iter = code_points(b"\xD7\xA9\xFFa\xE2\x82");
    assert_eq!(iter.size_hint(), (2, Some(6)));
    assert_eq!(iter.next(), Some(Ok(c(0x05E9))));
    assert_eq!(iter.offset(), 2);
    assert_eq!(iter.next(), Some(Err(DecodeError::Illegal)));
    assert_eq!(iter.offset(), 3);
    assert_eq!(iter.next(), Some(Ok(c(0x61))));
    assert_eq!(iter.as_slice(), b"\xE2\x82");
    assert_eq!(iter.next(), Some(Err(DecodeError::Incomplete)));
    assert_eq!(iter.offset(), 6);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn until_nul_stops_at_terminator() {
    assert_eq!(until_nul(b"xy\0z"), b"xy");
    assert_eq!(until_nul(b"xy"), b"xy");
    assert_eq!(until_nul(&[0u16, 0x61]), &[] as &[u16]);
    assert_eq!(until_nul::<u32>(&[]), &[] as &[u32]);
}

#[test]
fn validate_reports_offset() {
    assert_eq!(validate(b"\xD7\xA9\xD7\x9C"), Ok(()));
    assert_eq!(validate::<u16>(&[]), Ok(()));

    let error = validate(b"\xD7\xA9\xFF").unwrap_err();
    assert_eq!(error.kind(), DecodeError::Illegal);
    assert_eq!(error.valid_up_to(), 2);

    let error = validate(&[0x61u16, 0xD83D]).unwrap_err();
    assert_eq!(error.kind(), DecodeError::Incomplete);
    assert_eq!(error.valid_up_to(), 1);
}
