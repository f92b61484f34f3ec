use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use modhier_core::{HierarchyError, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "modhier")]
#[command(
    about = "Convert Lmod spider JSON (stdin) into hierarchy.json and hidden-hierarchy.json.",
    long_about = None
)]
#[command(version)]
struct Cli {}

fn main() -> std::process::ExitCode {
    match try_main() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            let code = err
                .downcast_ref::<HierarchyError>()
                .map(HierarchyError::exit_code)
                .unwrap_or(1);
            std::process::ExitCode::from(code)
        }
    }
}

fn try_main() -> Result<()> {
    let _cli = Cli::parse();
    let config = RunConfig::default();

    let stdin = std::io::stdin();
    let is_terminal = stdin.is_terminal();
    modhier_core::run(&config, stdin.lock(), is_terminal)?;

    eprintln!("{}", modhier_core::output::success_message(&config));
    Ok(())
}
