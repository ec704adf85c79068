use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::constants::EXIT_OK;
use crate::error::Result;

/// Route parsed arguments to their command and produce the exit code.
pub fn dispatch(args: &Cli) -> Result<i32> {
    match &args.command {
        Command::Remove {
            names,
            regex,
            all,
            backend,
            noconfirm,
        } => {
            let outcome = commands::remove::run(commands::remove::RemoveOptions {
                names: names.clone(),
                regex: *regex,
                all: *all,
                backend: backend.clone(),
                yes: args.global.yes,
                noconfirm: *noconfirm,
                dry_run: args.global.dry_run,
            })?;
            Ok(outcome.exit_code())
        }
        Command::List { backend, format } => {
            commands::list::run(commands::list::ListOptions {
                backend: backend.clone(),
                format: format.clone(),
            })?;
            Ok(EXIT_OK)
        }
        Command::Completions { shell } => {
            commands::completions::run(*shell)?;
            Ok(EXIT_OK)
        }
    }
}
