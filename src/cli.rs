use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use countdown::constants::DEFAULT_LARGES;
use countdown::draws::{Sweep, SweepConfig};
use countdown::report::{Report, milestone_line};
use countdown::search::solve;
use countdown::stats::CountingMode;
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - reachability statistics for the numbers round
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(
    about = "Count the targets in 100..=999 reachable from every admissible six-number draw"
)]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Large-number pool: four distinct numbers in 11..=100
    #[arg(short = 'L', long, num_args = 4, value_name = "N", default_values_t = DEFAULT_LARGES.to_vec())]
    pub larges: Vec<u64>,

    /// Count each reached target once per draw instead of once per way of reaching it
    #[arg(long)]
    pub distinct: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one chain of operations reaching a target
    Solve {
        /// Target value in 100..=999
        target: u64,

        /// The numbers available (one to six)
        #[arg(required = true, num_args = 1..=6)]
        numbers: Vec<u64>,
    },
}

/// What the application was asked to do
#[derive(Debug)]
pub enum Mode {
    Sweep(SweepConfig),
    Solve { target: u64, numbers: Vec<u64> },
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub mode: Mode,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

/// Validate parsed arguments into a configuration
pub fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let mode = match args.command {
        Some(Command::Solve { target, numbers }) => Mode::Solve { target, numbers },
        None => {
            let counting = if args.distinct {
                CountingMode::DistinctTargets
            } else {
                CountingMode::Occurrences
            };
            let config = SweepConfig::with_larges(&args.larges, counting)
                .context("Invalid large-number pool")?;
            Mode::Sweep(config)
        }
    };

    Ok(CliConfig {
        mode,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    match config.mode {
        Mode::Sweep(sweep_config) => run_sweep(sweep_config),
        Mode::Solve { target, numbers } => run_solve(&numbers, target),
    }
}

fn run_sweep(config: SweepConfig) -> Result<()> {
    let start = Instant::now();
    let mode = config.counting;
    let sweep = Sweep::new(config).context("Invalid sweep configuration")?;

    let counters = sweep
        .run_with_progress(|progress| println!("{}", milestone_line(&progress)))
        .context("Sweep failed")?;

    let report = Report {
        counters: &counters,
        mode,
        elapsed: start.elapsed(),
    };
    println!("{}", report);
    Ok(())
}

fn run_solve(numbers: &[u64], target: u64) -> Result<()> {
    info!("Searching for a chain using {:?} that reaches {}", numbers, target);

    match solve(numbers, target).context("Invalid solve request")? {
        Some(solution) => println!("{}", solution),
        None => {
            warn!("No matching chain found");
            println!("Unknown.");
        }
    }
    Ok(())
}
