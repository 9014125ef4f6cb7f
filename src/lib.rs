pub mod cli;
pub mod constants;
pub mod core;
pub mod error;
pub mod pipeline;
pub mod stages;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run webrelay-setup CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Signal handling: mark cancellation, the pipeline stops between stages
    ctrlc::set_handler(move || {
        eprintln!();
        ui::mark_interrupted();
        ui::warning("Operation cancelled by user.");
    })
    .expect("Error setting Ctrl-C handler");

    // 2. Parse & run (unknown tokens are filtered out before clap sees them)
    let argv = cli::args::filter_known_args(std::env::args());
    let args = cli::args::Cli::parse_from(argv);
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        exit(1);
    }
}
