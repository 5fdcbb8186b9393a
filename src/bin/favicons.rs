use std::process::ExitCode;

use clap::Parser;
use favicons::cli::{init_logging, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match run(&cli, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
