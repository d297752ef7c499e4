//! Helper-function contract consumed by the scanning host.
//!
//! The host asks for `info()` once, then calls `execute()` by name with
//! scalar arguments. Dispatch is a match over [`HelperFunction`]; there is
//! no open-ended lookup.

pub mod types;
pub mod registry;
pub mod dispatch;

pub use types::{Capability, PluginError, Request, Response, Scalar};
pub use registry::{capabilities, resolve, HelperFunction};
pub use dispatch::{GadgetPlugin, HelperPlugin};
