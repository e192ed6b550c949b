use clap::Parser;
use payroll_calc::cli::{self, Args, Command};
use payroll_calc::error::EngineResult;
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn main_inner(args: Args) -> EngineResult<()> {
    trace!("{args:?}");
    let rules = args.common().rules()?;

    let output = match args.command() {
        Command::Calculate(calculate_args) => cli::calculate(calculate_args, rules)?,
        Command::Rules => cli::rules(&rules),
    };
    print!("{output}");
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(level, std::env::var("RUST_LOG").ok()))
        .with_writer(std::io::stderr)
        .init();
}

fn log_filter(level: LevelFilter, rust_log: Option<String>) -> EnvFilter {
    match rust_log {
        Some(directives) => {
            // RUST_LOG exists; use it.
            EnvFilter::new(directives)
        }
        None => {
            // RUST_LOG does not exist; use the requested level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    }
}
