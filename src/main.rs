use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use resonate::cli::Cli;
use resonate::{logging, run};

const USAGE_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Usage problems are reported on stdout alongside every other diagnostic.
            print!("{}", err.render());
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    match logging::init(cli.verbose).and_then(|()| run(&cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
