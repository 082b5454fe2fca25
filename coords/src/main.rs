use clap::{Parser, Subcommand};
use colored::Colorize;
use coordinate_systems::generator::{DEFAULT_MAX_RADIUS, GeneratorConfig, PointGenerator};
use coords::{HarnessErrors, Menu, ReportFormat, run_benchmark, write_report};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Seed for the point generator, for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Upper bound of generated radii
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_RADIUS)]
    max_radius: f64,
    /// Log filter, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Menu,
    /// Run the distance benchmarks once and print the timings
    Bench {
        /// Number of random points per coordinate system
        #[arg(short, long)]
        count: usize,
        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("error: {e}").red());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), HarnessErrors> {
    let config = GeneratorConfig {
        max_radius: cli.max_radius,
    };
    let mut generator = match cli.seed {
        Some(seed) => PointGenerator::from_seed(seed, config)?,
        None => PointGenerator::from_os_rng(config)?,
    };

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => Menu::new(io::stdin().lock(), io::stdout().lock(), generator).run(),
        Commands::Bench { count, format } => {
            let report = run_benchmark(&mut generator, count);
            write_report(&report, format, &mut io::stdout().lock())
        }
    }
}
