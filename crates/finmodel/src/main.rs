use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use finmodel::{Command, execute, init_logging};

#[derive(Parser, Debug)]
#[command(name = "finmodel")]
#[command(about = "Monthly financial projections and scenario comparison")]
struct Args {
    /// Path to the data directory (default: ~/.finmodel/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".finmodel")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;
    tracing::debug!(command = ?args.command, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&args.command, &mut out)?;
    out.flush()?;

    Ok(())
}
