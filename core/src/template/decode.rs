use tracing::debug;

use crate::template::types::{BinaryTemplate, TemplateError, TemplateSection};

/// Decode hex literals into a validated [`BinaryTemplate`].
///
/// Whitespace in the literals is not accepted; a malformed literal is a
/// build defect and surfaces as `TemplateError::InvalidHex`.
pub fn decode_template(
    name: &'static str,
    prefix_hex: &str,
    suffix_hex: &str,
) -> Result<BinaryTemplate, TemplateError> {
    let prefix = hex::decode(prefix_hex)
        .map_err(|source| TemplateError::InvalidHex { section: TemplateSection::Prefix, source })?;
    let suffix = hex::decode(suffix_hex)
        .map_err(|source| TemplateError::InvalidHex { section: TemplateSection::Suffix, source })?;

    let template = BinaryTemplate::new(name, prefix, suffix)?;
    debug!(
        template = name,
        prefix_len = template.prefix().len(),
        suffix_len = template.suffix().len(),
        "decoded payload template"
    );
    Ok(template)
}
