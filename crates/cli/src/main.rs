use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use img3info::commands::{exit_status, inspect_command, report_failure, status, InspectError};

/// Inspector for Apple IMG3 firmware containers.
///
/// Prints the container header followed by every section in the chain.
/// All decoding lives in `img3-core` (exposed in code as `img3_core`).
#[derive(Parser, Debug)]
#[command(
    name = "img3info",
    version,
    about = "Inspect Apple IMG3 firmware containers",
    long_about = None
)]
struct Cli {
    /// IMG3 file to inspect.
    file: Option<PathBuf>,

    /// Emit JSON instead of human-readable text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::from(status::SUCCESS),
        Err(err) => {
            let code = exit_status(&err);
            report_failure(&err, code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // A missing file is reported with our own usage line rather than clap's.
    let path = cli.file.ok_or(InspectError::Usage)?;
    inspect_command(&path, cli.json)
}
