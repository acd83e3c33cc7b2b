mod commands;
mod helpers;

use clap::Parser;
use euler_core::domain::{ConfigError, EulerError};
use tracing_subscriber::EnvFilter;

const PROGRAM_NAME: &str = "euler-viz";
const DEFAULT_LOG_FILTER: &str = "warn";

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let diagnostic = error.as_euler_error();
            eprintln!("{}", diagnostic.diagnostic_line());
            if let Some(summary_line) = diagnostic.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            diagnostic.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once(PROGRAM_NAME.to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            init_tracing(cli.log_level.as_deref());
            dispatch_parsed(cli.command)
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

/// `--log-level` wins over `RUST_LOG`; with neither set only warnings are shown.
fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new(DEFAULT_LOG_FILTER),
        },
    };
    // Already installed when `run` is called more than once in a process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Parser)]
#[command(
    name = "euler-viz",
    version,
    about = "Euler-angle rotation sequences, matrices and derivations"
)]
struct Cli {
    /// Log level for diagnostics on stderr (overrides RUST_LOG)
    #[arg(
        long,
        global = true,
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    log_level: Option<String>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Compose the three intrinsic rotations and print every frame
    Compose(commands::ComposeArgs),
    /// Print the numeric composed rotation matrix
    Matrix(commands::MatrixArgs),
    /// Print the closed-form symbolic matrix for an order
    Formula(commands::FormulaArgs),
    /// Print the LaTeX derivation block
    Derive(commands::DeriveArgs),
    /// Emit renderer scene descriptions as JSON
    Scene(commands::SceneArgs),
    /// Emit the complete render state as JSON
    Render(commands::RenderArgs),
    /// List the recognized rotation orders
    Orders(commands::ListArgs),
    /// List the symbol presets and their LaTeX
    Symbols(commands::ListArgs),
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Compose(args) => commands::run_compose_command(args),
        CliCommand::Matrix(args) => commands::run_matrix_command(args),
        CliCommand::Formula(args) => commands::run_formula_command(args),
        CliCommand::Derive(args) => commands::run_derive_command(args),
        CliCommand::Scene(args) => commands::run_scene_command(args),
        CliCommand::Render(args) => commands::run_render_command(args),
        CliCommand::Orders(args) => commands::run_orders_command(args),
        CliCommand::Symbols(args) => commands::run_symbols_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(EulerError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        Self::Compute(error.into())
    }
}

impl CliError {
    fn as_euler_error(&self) -> EulerError {
        match self {
            Self::Usage(message) => {
                EulerError::input_validation("INPUT.CLI_USAGE", message.trim_end().to_string())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => EulerError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}
