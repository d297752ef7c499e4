use std::sync::LazyLock;

use tracing::error;

use crate::template::decode::decode_template;
use crate::template::literals::{COMMONS_COLLECTIONS_5_PREFIX_HEX, COMMONS_COLLECTIONS_5_SUFFIX_HEX};
use crate::template::types::{BinaryTemplate, TemplateError};

static COMMONS_COLLECTIONS_5: LazyLock<Result<BinaryTemplate, TemplateError>> = LazyLock::new(|| {
    decode_template(
        "commons-collections-5",
        COMMONS_COLLECTIONS_5_PREFIX_HEX,
        COMMONS_COLLECTIONS_5_SUFFIX_HEX,
    )
    .inspect_err(|e| error!(error = %e, "commons-collections-5 template failed to decode"))
});

/// Process-wide CommonsCollections5 template, decoded on first use.
///
/// The decode runs once; a failure is cached and returned to every caller.
pub fn commons_collections_5() -> Result<&'static BinaryTemplate, TemplateError> {
    COMMONS_COLLECTIONS_5.as_ref().map_err(Clone::clone)
}
