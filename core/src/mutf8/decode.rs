use byteorder::{BigEndian, ByteOrder};

use crate::constants::SHORT_UTF_LEN_WIDTH;
use crate::mutf8::types::Mutf8Error;

/// Decode a length-prefixed modified UTF-8 string from the start of `buf`.
///
/// Returns the string and the number of bytes consumed (length field
/// included). Trailing bytes after the string are left to the caller.
pub fn decode_short_utf(buf: &[u8]) -> Result<(String, usize), Mutf8Error> {
    if buf.len() < SHORT_UTF_LEN_WIDTH {
        return Err(Mutf8Error::Truncated { have: buf.len(), need: SHORT_UTF_LEN_WIDTH });
    }

    let utf_len = BigEndian::read_u16(&buf[..SHORT_UTF_LEN_WIDTH]) as usize;
    let end = SHORT_UTF_LEN_WIDTH + utf_len;
    if buf.len() < end {
        return Err(Mutf8Error::Truncated { have: buf.len(), need: end });
    }

    let body = &buf[SHORT_UTF_LEN_WIDTH..end];
    let mut units: Vec<u16> = Vec::with_capacity(utf_len);
    // Byte offset in `body` where each unit starts.
    let mut starts: Vec<usize> = Vec::with_capacity(utf_len);
    let mut i = 0usize;

    while i < body.len() {
        let b0 = body[i];
        let invalid = Mutf8Error::InvalidEncoding { offset: SHORT_UTF_LEN_WIDTH + i };
        starts.push(i);
        match b0 {
            // 0x00 is not a lead byte; NUL travels as C0 80.
            0x01..=0x7F => {
                units.push(b0 as u16);
                i += 1;
            }
            0xC0..=0xDF => {
                let b1 = continuation(body, i + 1).ok_or(invalid)?;
                units.push(((b0 as u16 & 0x1F) << 6) | b1);
                i += 2;
            }
            0xE0..=0xEF => {
                let b1 = continuation(body, i + 1).ok_or(invalid.clone())?;
                let b2 = continuation(body, i + 2).ok_or(invalid)?;
                units.push(((b0 as u16 & 0x0F) << 12) | (b1 << 6) | b2);
                i += 3;
            }
            _ => return Err(invalid),
        }
    }

    // Surrogates must pair up; an unpaired one is reported where it starts.
    let mut s = String::with_capacity(utf_len);
    let mut unit = 0usize;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => {
                s.push(c);
                unit += c.len_utf16();
            }
            Err(_) => {
                return Err(Mutf8Error::InvalidEncoding { offset: SHORT_UTF_LEN_WIDTH + starts[unit] });
            }
        }
    }
    Ok((s, end))
}

/// Low six bits of a continuation byte, if `body[at]` is one.
#[inline]
fn continuation(body: &[u8], at: usize) -> Option<u16> {
    match body.get(at) {
        Some(&b) if b & 0xC0 == 0x80 => Some((b & 0x3F) as u16),
        _ => None,
    }
}
