use std::{io, process::ExitCode};

use anyhow::Context;
use credgen::prompt::Prompt;

fn run() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    Prompt::new(stdin.lock(), stdout.lock())
        .run()
        .context("could not generate credentials")?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
