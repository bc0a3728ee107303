use std::process::ExitCode;

use clap::Parser;
use gymcopy_cli::commands::hero::{self, HeroArgs};
use gymcopy_cli::{logging, output};

fn main() -> ExitCode {
    let args = HeroArgs::parse();
    logging::init(args.verbose);

    match hero::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::report_failure(&e);
            ExitCode::FAILURE
        }
    }
}
