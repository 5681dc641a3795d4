use std::process::ExitCode;

use clap::Parser;

use stockroom_cli::{run, Cli};

fn main() -> ExitCode {
    stockroom_observability::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
