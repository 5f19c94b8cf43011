// src/main.rs
use clap::Parser;
use std::process::ExitCode;

use textlens::{Args, InputError, run};

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<InputError>()
                .map_or(1, InputError::exit_code);
            ExitCode::from(code)
        }
    }
}
