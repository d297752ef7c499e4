use std::fmt;

use thiserror::Error;

use crate::constants::{STREAM_HEADER, TC_STRING};
use crate::utils::fmt_bytes;

/// Which half of a template an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TemplateSection {
    Prefix,
    Suffix,
}

impl fmt::Display for TemplateSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSection::Prefix => f.write_str("prefix"),
            TemplateSection::Suffix => f.write_str("suffix"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TemplateError {
    /// Embedded literal is not valid hex.
    #[error("template {section} is not valid hex: {source}")]
    InvalidHex {
        section: TemplateSection,
        #[source]
        source: hex::FromHexError,
    },

    /// A section decoded to zero bytes.
    #[error("template {section} is empty")]
    EmptySection { section: TemplateSection },

    /// Prefix does not open with the serialization stream header.
    #[error("invalid stream header: expected {}, got {}", fmt_bytes(&STREAM_HEADER), fmt_bytes(.have))]
    InvalidStreamHeader { have: Vec<u8> },

    /// Prefix does not end at a `TC_STRING` insertion point.
    #[error("prefix must end with TC_STRING (0x{:02x}), got 0x{have:02x}", TC_STRING)]
    MissingInsertionPoint { have: u8 },
}

/// Serialized stream skeleton with a single string insertion point.
///
/// `prefix ++ [u16 BE len][modified UTF-8] ++ suffix` is a complete
/// stream. Both halves are fixed once built; there is no mutation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTemplate {
    name: &'static str,
    prefix: Box<[u8]>,
    suffix: Box<[u8]>,
}

impl BinaryTemplate {
    /// Build and validate a template from raw halves.
    pub fn new(name: &'static str, prefix: Vec<u8>, suffix: Vec<u8>) -> Result<Self, TemplateError> {
        let template = Self {
            name,
            prefix: prefix.into_boxed_slice(),
            suffix: suffix.into_boxed_slice(),
        };
        template.validate()?;
        Ok(template)
    }

    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.prefix.is_empty() {
            return Err(TemplateError::EmptySection { section: TemplateSection::Prefix });
        }
        if self.suffix.is_empty() {
            return Err(TemplateError::EmptySection { section: TemplateSection::Suffix });
        }

        // Stream header
        if !self.prefix.starts_with(&STREAM_HEADER) {
            let n = self.prefix.len().min(STREAM_HEADER.len());
            return Err(TemplateError::InvalidStreamHeader { have: self.prefix[..n].to_vec() });
        }

        // Insertion point
        let last = self.prefix[self.prefix.len() - 1];
        if last != TC_STRING {
            return Err(TemplateError::MissingInsertionPoint { have: last });
        }

        Ok(())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    pub fn suffix(&self) -> &[u8] {
        &self.suffix
    }

    /// Bytes contributed by the template regardless of the inserted string.
    pub fn fixed_len(&self) -> usize {
        self.prefix.len() + self.suffix.len()
    }
}
