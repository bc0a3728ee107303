use std::process::ExitCode;

use clap::Parser;
use gymcopy_cli::commands::audience::{self, AudienceArgs};
use gymcopy_cli::{logging, output};

fn main() -> ExitCode {
    let args = AudienceArgs::parse();
    logging::init(args.verbose);

    match audience::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::report_failure(&e);
            ExitCode::FAILURE
        }
    }
}
