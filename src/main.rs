use std::process::ExitCode;

use clap::Parser;
use siftmerge::cli::{Arguments, ExitStatus, report};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match siftmerge::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            report::print_error(&err);
            ExitStatus::Error.into()
        }
    }
}
