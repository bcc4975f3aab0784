//! Blueprint CLI - Convert project proposals into structured task graphs

use std::process::ExitCode;

fn main() -> ExitCode {
    match blueprint_cli::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
