// Covers the length-prefixed modified UTF-8 codec:
// * length field is always 2 bytes, big-endian, counting encoded bytes
// * multi-byte and supplementary characters
// * the 65535-byte ceiling
// * decode(encode(s)) == s for arbitrary strings

#[cfg(test)]
mod tests {
    use byteorder::{BigEndian, ByteOrder};
    use proptest::prelude::*;

    use payload_core::constants::MAX_SHORT_UTF_LEN;
    use payload_core::mutf8::{decode_short_utf, encode_short_utf, encoded_len, Mutf8Error};

// # 1. Length field

    #[test]
    fn length_field_counts_bytes_not_chars() {
        let s = "héllo€";
        let enc = encode_short_utf(s).unwrap();
        assert_eq!(s.chars().count(), 6);
        assert_eq!(BigEndian::read_u16(&enc[..2]), 9);
        assert_eq!(enc.len(), 2 + 9);
    }

    #[test]
    fn length_128_is_not_a_rune() {
        // A rune-style length would emit C2 80 here.
        let enc = encode_short_utf(&"x".repeat(128)).unwrap();
        assert_eq!(&enc[..3], &[0x00, 0x80, b'x']);
    }

    #[test]
    fn empty_string_is_two_zero_bytes() {
        assert_eq!(encode_short_utf("").unwrap(), vec![0x00, 0x00]);
        assert_eq!(decode_short_utf(&[0x00, 0x00]).unwrap(), (String::new(), 2));
    }

// # 2. Ceiling

    #[test]
    fn exactly_max_is_accepted() {
        let enc = encode_short_utf(&"a".repeat(MAX_SHORT_UTF_LEN)).unwrap();
        assert_eq!(&enc[..2], &[0xFF, 0xFF]);
        assert_eq!(enc.len(), MAX_SHORT_UTF_LEN + 2);
    }

    #[test]
    fn multibyte_overflow_is_rejected() {
        // 32768 chars, 65536 encoded bytes.
        let s = "é".repeat(32_768);
        assert_eq!(encoded_len(&s), 65_536);
        assert_eq!(
            encode_short_utf(&s).unwrap_err(),
            Mutf8Error::PayloadTooLarge { have: 65_536, max: MAX_SHORT_UTF_LEN }
        );
    }

// # 3. Round trips

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(s in "\\PC{0,200}") {
            let enc = encode_short_utf(&s).unwrap();
            let (back, used) = decode_short_utf(&enc).unwrap();
            prop_assert_eq!(back, s);
            prop_assert_eq!(used, enc.len());
        }

        #[test]
        fn prop_encoded_len_matches_field(s in any::<String>()) {
            let enc = encode_short_utf(&s).unwrap();
            prop_assert_eq!(BigEndian::read_u16(&enc[..2]) as usize, encoded_len(&s));
            prop_assert_eq!(enc.len(), 2 + encoded_len(&s));
        }

        #[test]
        fn prop_never_emits_raw_nul(s in any::<String>()) {
            let enc = encode_short_utf(&s).unwrap();
            prop_assert!(!enc[2..].contains(&0x00));
        }
    }
}
