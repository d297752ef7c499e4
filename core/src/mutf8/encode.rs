use crate::constants::{MAX_SHORT_UTF_LEN, SHORT_UTF_LEN_WIDTH};
use crate::mutf8::types::Mutf8Error;

/// Number of modified UTF-8 bytes one UTF-16 code unit occupies.
#[inline]
fn unit_len(unit: u16) -> usize {
    match unit {
        0x0001..=0x007F => 1,
        0x0000 | 0x0080..=0x07FF => 2,
        _ => 3,
    }
}

/// Modified UTF-8 byte length of `s`, without the length field.
///
/// Supplementary characters count as two surrogates of three bytes each,
/// so the result can exceed `s.len()`.
pub fn encoded_len(s: &str) -> usize {
    s.encode_utf16().map(unit_len).sum()
}

/// Append `[u16 BE length][modified UTF-8]` for `s` to `out`.
///
/// Fails with `PayloadTooLarge` before touching `out` when the encoded
/// length exceeds `MAX_SHORT_UTF_LEN`.
pub fn write_short_utf(out: &mut Vec<u8>, s: &str) -> Result<(), Mutf8Error> {
    let utf_len = encoded_len(s);
    let len_field = u16::try_from(utf_len).map_err(|_| Mutf8Error::PayloadTooLarge {
        have: utf_len,
        max: MAX_SHORT_UTF_LEN,
    })?;

    out.reserve(SHORT_UTF_LEN_WIDTH + utf_len);
    let start = out.len();

    out.extend_from_slice(&len_field.to_be_bytes());

    for unit in s.encode_utf16() {
        match unit {
            0x0001..=0x007F => out.push(unit as u8),
            0x0000 | 0x0080..=0x07FF => {
                out.push(0xC0 | ((unit >> 6) & 0x1F) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
            _ => {
                out.push(0xE0 | ((unit >> 12) & 0x0F) as u8);
                out.push(0x80 | ((unit >> 6) & 0x3F) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
        }
    }

    debug_assert_eq!(out.len() - start, SHORT_UTF_LEN_WIDTH + utf_len, "encoder wrote incorrect length");
    Ok(())
}

/// Encode `s` into a fresh buffer. See [`write_short_utf`].
pub fn encode_short_utf(s: &str) -> Result<Vec<u8>, Mutf8Error> {
    let mut out = Vec::new();
    write_short_utf(&mut out, s)?;
    Ok(out)
}
