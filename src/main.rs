//! Monte Carlo approximation of pi, plus a small bitwise arithmetic demo.
//!
//! ```bash
//! # Prompt for the number of points on stdin
//! monte_carlo_pi
//!
//! # Ten million points on four threads with a fixed seed
//! monte_carlo_pi --samples 10000000 --workers 4 --seed 7
//!
//! # Trace 14 + 15 and 14 * 19 bit by bit
//! monte_carlo_pi bitwise
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use monte_carlo_pi::bitwise;
use monte_carlo_pi::estimator::{self, SampleCount};
use monte_carlo_pi::input;
use monte_carlo_pi::report;
use monte_carlo_pi::{run_parallel, run_parallel_async, Estimate, Result};

#[derive(Parser)]
#[command(name = "monte_carlo_pi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log errors only
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Number of points (0 for the maximum); read from stdin when omitted
    #[arg(short = 'n', long)]
    samples: Option<u64>,

    /// Number of workers sharing the sampling
    #[arg(short, long, default_value_t = 1)]
    workers: usize,

    /// Where the workers run
    #[arg(long, value_enum, default_value_t = Runtime::Threads)]
    runtime: Runtime,

    /// Fixed seed; defaults to the current time in milliseconds
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add and multiply two integers using only bit operations
    Bitwise {
        #[arg(default_value_t = 14, allow_negative_numbers = true)]
        lhs: i32,

        /// Right operand for both traces; without it, 14 + 15 and 14 * 19
        #[arg(allow_negative_numbers = true)]
        rhs: Option<i32>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Runtime {
    /// Plain OS threads
    Threads,
    /// tokio's blocking pool
    Tokio,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn estimate_pi(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let count = match cli.samples {
        Some(n) => SampleCount::from_requested(n),
        None => {
            report::write_prompt(&mut out)?;
            let count = input::read_sample_count(&mut io::stdin().lock())?;
            writeln!(out, "\n")?;
            count
        }
    };
    report::write_announcement(&mut out, count)?;

    let seed = cli.seed.unwrap_or_else(estimator::time_seed);
    let estimate: Estimate = match (cli.runtime, cli.workers) {
        (Runtime::Threads, 1) => estimator::run(&mut estimator::seeded_rng(seed), count),
        (Runtime::Threads, workers) => run_parallel(count, workers, seed)?,
        (Runtime::Tokio, tasks) => tokio::runtime::Runtime::new()?
            .block_on(run_parallel_async(count, tasks, seed))?,
    };

    report::write_estimate(&mut out, &estimate)
}

const DEFAULT_ADD_RHS: i32 = 15;
const DEFAULT_MULTIPLY_RHS: i32 = 19;

fn bitwise_demo(lhs: i32, rhs: Option<i32>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let add_rhs = rhs.unwrap_or(DEFAULT_ADD_RHS);
    let multiply_rhs = rhs.unwrap_or(DEFAULT_MULTIPLY_RHS);
    writeln!(out, "{}", bitwise::add_report(lhs, add_rhs))?;
    write!(out, "{}", bitwise::multiply_report(lhs, multiply_rhs))?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Bitwise { lhs, rhs }) => bitwise_demo(*lhs, *rhs),
        None => estimate_pi(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(%e, "run failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
