//! E20 simulator CLI.
//!
//! This binary loads an E20 machine-code listing and runs it. It performs:
//! 1. **Plain run:** Execute until halt and print the final machine state.
//! 2. **Cache run:** With `--cache`, print the cache geometry and one log line per data access.
//! 3. **Diagnostics:** Optional statistics (`--stats`) and per-instruction tracing (`--trace`, `RUST_LOG`).

use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use e20sim_core::Simulator;
use e20sim_core::config::{CacheHierarchyConfig, Config};
use e20sim_core::sim::{RunOutcome, loader, report};

#[derive(Parser, Debug)]
#[command(
    name = "e20sim",
    version,
    about = "Simulate E20 machine",
    long_about = "Simulate an E20 machine, optionally with one or two levels of cache.\n\nExamples:\n  e20sim prog.bin\n  e20sim --cache 8,2,2 prog.bin\n  e20sim --cache 4,1,1,16,2,2 prog.bin"
)]
struct Cli {
    /// The file containing machine code, typically with .bin suffix.
    filename: PathBuf,

    /// Cache configuration: size,associativity,blocksize (for one cache) or
    /// size,associativity,blocksize,size,associativity,blocksize (for two caches).
    #[arg(long, value_name = "CACHE")]
    cache: Option<String>,

    /// JSON configuration file; `--cache` and `--max-steps` override its values.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Stop after this many instructions if the program has not halted.
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Print simulation statistics to stderr after the run.
    #[arg(long)]
    stats: bool,

    /// Log every executed instruction to stderr.
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(message) => {
            eprint!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(cli.trace || config.general.trace_instructions);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Parses the command line.
///
/// On failure returns the text to print on stderr before exiting with status 1.
/// Help and version requests fail too. Argument errors always carry the usage line.
fn parse_args<I, T>(args: I) -> Result<Cli, String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| render_parse_error(&e))
}

/// Renders a clap error, appending the usage line where clap left it out.
fn render_parse_error(err: &clap::Error) -> String {
    let mut text = err.render().to_string();
    let is_request = matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    );
    if !is_request && !text.contains("Usage:") {
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text.push('\n');
        text.push_str(&Cli::command().render_usage().to_string());
        text.push('\n');
    }
    text
}

/// Merges the JSON file (if any) with the command-line overrides.
fn build_config(cli: &Cli) -> Result<Config, e20sim_core::common::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(text) = &cli.cache {
        config.cache = text.parse::<CacheHierarchyConfig>()?;
    }
    if cli.max_steps.is_some() {
        config.general.max_steps = cli.max_steps;
    }
    Ok(config)
}

/// Installs the stderr subscriber. `RUST_LOG` wins unless `trace` forces full tracing.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Loads the program, runs it and prints the reports.
fn run(cli: &Cli, config: &Config) -> Result<(), e20sim_core::common::SimError> {
    let mem = loader::load_file(&cli.filename)?;
    let mut sim = Simulator::new(mem, config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Some(caches) = &sim.caches {
        report::write_cache_config(&mut out, caches)?;
    }

    match sim.run(&mut out)? {
        RunOutcome::Halted { steps } => debug!(steps, "program halted"),
        RunOutcome::StepLimit { steps } => {
            warn!(steps, pc = sim.cpu.pc.val(), "step limit reached before halt");
        }
    }

    if sim.caches.is_none() {
        report::write_final_state(&mut out, &sim.cpu)?;
    }
    out.flush()?;

    if cli.stats {
        sim.cpu.stats.print();
    }
    Ok(())
}
