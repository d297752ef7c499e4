use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::PayloadError;

/// What the host learns about one helper function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capability {
    pub name: &'static str,
    pub arity: usize,
}

/// Scalar value crossing the host boundary, in either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Scalar {
    String(String),
    Int(i64),
    Double(f64),
    Bool(bool),
    Bytes(Vec<u8>),
}

impl Scalar {
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::String(_) => "string",
            Scalar::Int(_) => "int",
            Scalar::Double(_) => "double",
            Scalar::Bool(_) => "bool",
            Scalar::Bytes(_) => "bytes",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Scalar::Bytes(b) => Some(b),
            Scalar::String(s) => Some(s.as_bytes()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub name: String,
    pub args: Vec<Scalar>,
}

impl Request {
    pub fn new(name: impl Into<String>, args: Vec<Scalar>) -> Self {
        Self { name: name.into(), args }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub result: Scalar,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PluginError {
    #[error("invalid number of arguments: got {have}, need at least {need}")]
    InvalidArgumentCount { have: usize, need: usize },

    #[error("unknown function: {name:?}")]
    UnknownFunction { name: String },

    #[error("argument {index} must be {expected}, got {have}")]
    InvalidArgumentType { index: usize, expected: &'static str, have: &'static str },

    #[error(transparent)]
    Payload(#[from] PayloadError),
}
