//! Length-prefixed modified UTF-8 strings.
//!
//! Wire form used by `TC_STRING` in a Java serialization stream:
//!
//! ```text
//! [ utf_len (2, big-endian) ]
//! [ modified UTF-8 bytes (utf_len) ]
//! ```
//!
//! `utf_len` counts encoded bytes, not characters.
//!
//! Responsibilities:
//! - Encode a `&str` into the short-string wire form
//! - Decode the wire form back, with strict validation
//!
//! Non-responsibilities:
//! - Type codes and back-references (owned by the template)

pub mod types;
pub mod encode;
pub mod decode;

pub use types::Mutf8Error;
pub use encode::{encode_short_utf, encoded_len, write_short_utf};
pub use decode::decode_short_utf;
