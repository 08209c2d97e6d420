use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use tag_ratio::bench::WallClock;
use tag_ratio::ingest::load_data_dir;
use tag_ratio::logging::init_logger;
use tag_ratio::menu::Menu;
use tag_ratio::report::write_load_summary;
use tag_ratio::{Config, Result, Session};

/// Compare a max-heap and a hash table for like/view ratio queries by tag.
#[derive(Debug, Parser)]
#[command(name = "tag-ratio", version)]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Folder holding the CSV datasets (overrides the config)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log progress at info level
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    log::info!("Using data folder {}", config.data_dir.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "--------------------------------------------------")?;
    writeln!(out, "   {}", "YouTube Tag Correlation Analyzer".bold())?;
    writeln!(out, "--------------------------------------------------")?;

    let outcome = load_data_dir(&config.data_dir, &config.layout)?;
    write_load_summary(
        &mut out,
        &outcome.datasets,
        outcome.store.len(),
        config.min_expected_records,
    )?;
    if outcome.store.len() < config.min_expected_records {
        log::warn!(
            "Combined dataset has only {} videos (expected at least {})",
            outcome.store.len(),
            config.min_expected_records
        );
    }

    let mut session = Session::new(outcome.store);
    let mut stopwatch = WallClock;
    Menu::new(io::stdin().lock(), out, &config, &mut stopwatch).run(&mut session)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
