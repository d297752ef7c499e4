//! Template store: fixed serialized-stream skeletons.
//!
//! A template is two immutable byte runs around one `TC_STRING` insertion
//! point. Literals are embedded as hex and decoded once per process.

pub mod types;
pub mod decode;
pub mod literals;
pub mod store;

pub use types::{BinaryTemplate, TemplateError, TemplateSection};
pub use decode::decode_template;
pub use store::commons_collections_5;
