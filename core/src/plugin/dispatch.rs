use tracing::{debug, warn};

use crate::assembler::PayloadAssembler;
use crate::config::PayloadConfig;
use crate::plugin::registry::{capabilities, min_arity, resolve, HelperFunction};
use crate::plugin::types::{Capability, PluginError, Request, Response, Scalar};
use crate::types::PayloadError;

/// Host-facing helper contract.
pub trait HelperPlugin: Send + Sync {
    /// Functions this plugin serves.
    fn info(&self) -> Vec<Capability>;
    /// Run one named function.
    fn execute(&self, req: &Request) -> Result<Response, PluginError>;
}

/// Serves the gadget payload builders.
#[derive(Debug, Clone)]
pub struct GadgetPlugin {
    commons_collections_5: PayloadAssembler,
}

impl GadgetPlugin {
    /// Validate `config` and decode every template up front; either failure
    /// aborts construction.
    pub fn new(config: &PayloadConfig) -> Result<Self, PayloadError> {
        Ok(Self {
            commons_collections_5: PayloadAssembler::commons_collections_5(config)?,
        })
    }

    fn run(&self, function: HelperFunction, args: &[Scalar]) -> Result<Response, PluginError> {
        match function {
            HelperFunction::CommonsCollections5 => {
                let command = string_arg(args, 0)?;
                let payload = self.commons_collections_5.assemble(command)?;
                Ok(Response { result: Scalar::Bytes(payload.into_vec()) })
            }
        }
    }
}

impl HelperPlugin for GadgetPlugin {
    fn info(&self) -> Vec<Capability> {
        capabilities()
    }

    fn execute(&self, req: &Request) -> Result<Response, PluginError> {
        let outcome = check_arg_count(req.args.len(), min_arity())
            .and_then(|_| resolve(&req.name))
            .and_then(|function| {
                check_arg_count(req.args.len(), function.arity())?;
                self.run(function, &req.args)
            });

        match &outcome {
            Ok(_) => debug!(function = %req.name, args = req.args.len(), "helper executed"),
            Err(e) => warn!(function = %req.name, error = %e, "helper rejected"),
        }
        outcome
    }
}

fn check_arg_count(have: usize, need: usize) -> Result<(), PluginError> {
    if have < need {
        return Err(PluginError::InvalidArgumentCount { have, need });
    }
    Ok(())
}

fn string_arg(args: &[Scalar], index: usize) -> Result<&str, PluginError> {
    let arg = args
        .get(index)
        .ok_or(PluginError::InvalidArgumentCount { have: args.len(), need: index + 1 })?;
    arg.as_str().ok_or(PluginError::InvalidArgumentType {
        index,
        expected: "string",
        have: arg.kind(),
    })
}
