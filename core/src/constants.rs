/// Java object serialization stream header.
/// `STREAM_MAGIC` (0xACED) followed by `STREAM_VERSION` (5), big-endian.
pub const STREAM_HEADER: [u8; 4] = [0xAC, 0xED, 0x00, 0x05];

/// Type code introducing a string with a 2-byte length field.
pub const TC_STRING: u8 = 0x74;

/// Width of the length field that precedes a short string.
pub const SHORT_UTF_LEN_WIDTH: usize = 2;

/// Largest modified UTF-8 byte length a 2-byte length field can carry.
pub const MAX_SHORT_UTF_LEN: usize = u16::MAX as usize;

/// Helper function identifiers advertised to the host.
pub mod function_names {
    pub const COMMONS_COLLECTIONS_5: &str = "common_collection_5";
}
