use thiserror::Error;

use crate::config::ConfigError;
use crate::mutf8::Mutf8Error;
use crate::template::{TemplateError, TemplateSection};

/// Unified payload error covering template, config, string encoding, and framing.
/// - `From<T>` impls enable `?` from the template, config, and mutf8 layers.
/// - Messages are stable; hosts surface them verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayloadError {
    /// Command's encoded length exceeds the length field (or configured cap).
    #[error("payload too large: command encodes to {have} bytes, limit is {max}")]
    PayloadTooLarge { have: usize, max: usize },

    /// Embedded template literal is malformed. Fatal at initialization.
    #[error("template decode failure: {0}")]
    TemplateDecodeFailure(#[from] TemplateError),

    /// Configuration rejected before any payload is built.
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    /// Bytes outside the insertion point differ from the template.
    #[error("payload does not match template {section}")]
    FramingMismatch { section: TemplateSection },

    /// Inserted string could not be read back.
    #[error("invalid embedded string: {0}")]
    InvalidString(Mutf8Error),
}

impl From<Mutf8Error> for PayloadError {
    fn from(e: Mutf8Error) -> Self {
        match e {
            Mutf8Error::PayloadTooLarge { have, max } => PayloadError::PayloadTooLarge { have, max },
            other => PayloadError::InvalidString(other),
        }
    }
}
