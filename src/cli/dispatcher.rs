//! Command dispatcher
//!
//! webrelay-setup has a single operation: run the provisioning pipeline.

use crate::cli::args::Cli;
use crate::error::Result;
use crate::pipeline;

pub fn dispatch(args: &Cli) -> Result<()> {
    pipeline::run(args)
}
