use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Mutf8Error {
    /// Encoded byte length does not fit the 2-byte length field.
    #[error("string too large for short length field: {have} > {max} bytes")]
    PayloadTooLarge { have: usize, max: usize },

    /// Buffer ends before the declared length.
    #[error("truncated string: have {have} bytes, need {need}")]
    Truncated { have: usize, need: usize },

    /// Byte sequence is not valid modified UTF-8.
    #[error("invalid modified UTF-8 at byte offset {offset}")]
    InvalidEncoding { offset: usize },
}
