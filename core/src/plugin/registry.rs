//! Closed set of helper functions and name resolution.

use crate::constants::function_names;
use crate::plugin::types::{Capability, PluginError};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HelperFunction {
    CommonsCollections5,
}

impl HelperFunction {
    pub const ALL: &'static [HelperFunction] = &[HelperFunction::CommonsCollections5];

    pub fn name(self) -> &'static str {
        match self {
            HelperFunction::CommonsCollections5 => function_names::COMMONS_COLLECTIONS_5,
        }
    }

    pub fn arity(self) -> usize {
        match self {
            HelperFunction::CommonsCollections5 => 1,
        }
    }

    pub fn capability(self) -> Capability {
        Capability { name: self.name(), arity: self.arity() }
    }
}

pub fn resolve(name: &str) -> Result<HelperFunction, PluginError> {
    HelperFunction::ALL
        .iter()
        .copied()
        .find(|f| f.name() == name)
        .ok_or_else(|| PluginError::UnknownFunction { name: name.to_owned() })
}

/// Smallest arity across the registry; checked before name resolution.
pub fn min_arity() -> usize {
    HelperFunction::ALL.iter().map(|f| f.arity()).min().unwrap_or(0)
}

pub fn capabilities() -> Vec<Capability> {
    HelperFunction::ALL.iter().map(|f| f.capability()).collect()
}
