use std::process::ExitCode;

use clap::Parser;

use fntdump::Args;

fn main() -> ExitCode {
    let self_name = std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_owned());

    // Usage problems, unknown flags, and plain -h all exit 1.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            eprint!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = fntdump::run(&args) {
        eprintln!("{self_name}: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
