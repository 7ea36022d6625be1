use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::io::{self, Write};
use tracing::debug;

use check_dependent_docstrings::interesting_files;

mod config;

use config::AppConfig;

/// Builds the option parser. Called once from `main`.
fn build_cli() -> Command {
    Command::new("check_dependent_docstrings")
        .version("0.1.0")
        .about("Picks out the Cryptol sources and documents from a list of paths")
        .args_override_self(true)
        .arg(
            Arg::new("files")
                .long("files")
                .num_args(1)
                .default_value("")
                .help("Whitespace-separated list of file paths"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}

fn init_logging(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .with_ansi(false)
            .init();
    }
}

/// Writes the report line for `config` to `out`.
///
/// The filtered paths are computed but only logged; the printed line is the
/// raw option value as a one-element list.
fn report<W: Write>(config: &AppConfig, out: &mut W) -> Result<()> {
    let files = interesting_files(&config.files);
    debug!(
        matched = files.count(),
        total = config.files.split_whitespace().count(),
        "filtered --files"
    );
    writeln!(out, "{:?}", [config.files.as_str()]).context("Failed to write to stdout")?;
    Ok(())
}

fn run(cli: Command) -> Result<()> {
    let matches = cli.get_matches();
    let config = AppConfig::from_matches(&matches);
    init_logging(config.verbose);
    debug!(?config, "parsed arguments");

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    report(&config, &mut handle)?;
    handle.flush().context("Failed to flush stdout")?;
    Ok(())
}

fn main() -> Result<()> {
    run(build_cli())
}
