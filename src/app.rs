use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        json,
        verbose,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(json, verbose)?;
    tracing::debug!(config_file = %ctx.paths.config_file().display(), "resolved config path");

    match command {
        Command::Config(args) => commands::config::run(&ctx, args.command),
    }
}
