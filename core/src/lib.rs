//! payload-core
//!
//! Byte-exact Java serialization payloads built from a fixed template with
//! one length-prefixed string insertion point.
//! No I/O, no transport, no host runtime.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;
pub mod utils;

// Wire building blocks
pub mod mutf8;
pub mod template;

// Assembly and host contract
pub mod assembler;
pub mod plugin;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::assembler::{assemble, Payload, PayloadAssembler};
    pub use crate::config::PayloadConfig;
    pub use crate::plugin::{GadgetPlugin, HelperPlugin, PluginError, Request, Response, Scalar};
    pub use crate::types::PayloadError;
}
