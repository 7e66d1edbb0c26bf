use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;

use crate::command;
use crate::config::Config;
use crate::logger;

#[derive(Parser)]
#[command(name = "raffle")]
#[command(version, about = "Spin a raffle wheel over the lines of a file", long_about = None)]
pub struct Cli {
    /// Path to a file containing a list of options, newline delimited
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Fewest frames the wheel spins for
    #[arg(long, value_name = "N")]
    min_steps: Option<usize>,

    /// Upper bound (exclusive) on frames the wheel spins for
    #[arg(long, value_name = "N")]
    max_steps: Option<usize>,

    /// Milliseconds between frames
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Options shown before and after the current choice
    #[arg(short, long, value_name = "N")]
    window: Option<usize>,

    /// Seconds to keep the result on screen (any key ends it early)
    #[arg(long, value_name = "SECS")]
    settle_secs: Option<u64>,

    /// Seed the random source for a reproducible spin
    #[arg(long)]
    seed: Option<u64>,

    /// Config file to use instead of ~/.config/raffle/config.yaml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    completions: Option<Shell>,
}

impl Cli {
    /// Spin settings given on the command line.
    fn overrides(&self) -> Config {
        Config {
            min_steps: self.min_steps,
            max_steps: self.max_steps,
            delay_ms: self.delay_ms,
            window: self.window,
            settle_secs: self.settle_secs,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "raffle", &mut io::stdout());
        return Ok(());
    }

    let _log_guard = logger::init();

    let file = cli.file.as_deref().context("No input file given")?;
    command::spin::run(command::spin::SpinRequest {
        file,
        config_path: cli.config.as_deref(),
        overrides: cli.overrides(),
        seed: cli.seed,
    })
}
