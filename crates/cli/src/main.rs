use std::process::ExitCode;

use clap::Parser;
use line_tally_cli::args::Args;
use line_tally_core::ConsoleSink;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.into_config();
    let mut sink = ConsoleSink::new();

    match line_tally_core::run(&config, &mut sink) {
        Ok(outcome) if outcome.root_valid => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
