pub mod cli;
pub mod commands;
pub mod constants;
pub mod core;
pub mod error;
pub mod packages;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run the pkgrm CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Signal handling: a removal in flight belongs to the backend
    //    process; we only report and leave with the conventional code.
    ctrlc::set_handler(move || {
        eprintln!();
        ui::warning("Operation cancelled by user.");
        exit(constants::EXIT_INTERRUPT);
    })
    .expect("Error setting Ctrl-C handler");

    // 2. Parse & Run
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    match cli::dispatcher::dispatch(&args) {
        Ok(code) => exit(code),
        Err(e) => {
            ui::error(&format!("{}", e));
            exit(constants::EXIT_ERROR);
        }
    }
}
