//! Command dispatch logic for curio

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use curio_core::error::{CurioError, Result};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => Err(CurioError::UsageError(
            "no command given (try `curio recommend --help`)".to_string(),
        )),

        Some(Commands::Recommend(args)) => commands::recommend::execute(cli, args, start),
    }
}
