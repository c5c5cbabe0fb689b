mod evaluate;

use stockpick_core::EvaluationResult;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<EvaluationResult, CliError> {
    match &cli.command {
        Command::Evaluate(args) => evaluate::run(args, cli.timeout_ms, cli.mock).await,
    }
}
