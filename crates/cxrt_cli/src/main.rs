//! cxhash: command-line front end for the cxrt fingerprinting hashers.
//!
//! Provides `cxhash digest` to fold files, strings and integers into one digest,
//! `cxhash each` to fingerprint files one by one, and `cxhash combine` to hash
//! files independently and merge their states in argument order.

#![warn(missing_docs)]

mod combine;
mod digest;
mod output;

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use cxrt_config::{Algorithm, OutputFormat, ToolConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Deterministic, combinable content fingerprints.
#[derive(Parser, Debug)]
#[command(name = "cxhash", version, about = "cxrt content fingerprinting")]
pub struct Cli {
    /// Suppress all log output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a custom `cxrt.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fold every input into a single digest.
    Digest(DigestArgs),
    /// Print one digest per file.
    Each(EachArgs),
    /// Hash files independently and combine their states in order.
    Combine(CombineArgs),
}

/// Algorithm and rendering overrides shared by the digest commands.
#[derive(Parser, Debug)]
pub struct HashOptions {
    /// Hash algorithm (defaults to the configured one).
    #[arg(short, long, value_enum)]
    pub algo: Option<AlgoArg>,

    /// Output format (defaults to the configured one).
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Arguments for the `cxhash digest` subcommand.
#[derive(Parser, Debug)]
pub struct DigestArgs {
    /// Files whose contents are folded in, in order.
    pub files: Vec<PathBuf>,

    /// Literal strings folded in after the files.
    #[arg(long = "text")]
    pub texts: Vec<String>,

    /// Integers folded in last, 8 bytes each.
    #[arg(long = "int", allow_negative_numbers = true)]
    pub ints: Vec<i64>,

    /// Algorithm and format overrides.
    #[command(flatten)]
    pub hash: HashOptions,
}

/// Arguments for the `cxhash each` subcommand.
#[derive(Parser, Debug)]
pub struct EachArgs {
    /// Files to fingerprint.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Algorithm and format overrides.
    #[command(flatten)]
    pub hash: HashOptions,
}

/// Arguments for the `cxhash combine` subcommand.
#[derive(Parser, Debug)]
pub struct CombineArgs {
    /// Files to hash independently, combined in the order given.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Rehash the concatenation and fail if it disagrees with the combination.
    #[arg(long)]
    pub check: bool,

    /// Output format (defaults to the configured one).
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Hash algorithm selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgoArg {
    /// Streaming FNV-1a.
    Fnv,
    /// Combinable polynomial hash.
    Poly,
}

impl From<AlgoArg> for Algorithm {
    fn from(arg: AlgoArg) -> Self {
        match arg {
            AlgoArg::Fnv => Algorithm::Fnv,
            AlgoArg::Poly => Algorithm::Poly,
        }
    }
}

/// Digest output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// 16 uppercase hex characters.
    Hex,
    /// Unsigned decimal integer.
    Decimal,
    /// JSON object with the raw state.
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Hex => OutputFormat::Hex,
            FormatArg::Decimal => OutputFormat::Decimal,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Settings resolved from global flags and the configuration file.
pub struct GlobalArgs {
    /// The loaded (or default) tool configuration.
    pub config: ToolConfig,
}

impl GlobalArgs {
    /// Picks the command-line algorithm if given, otherwise the configured one.
    pub fn algorithm(&self, arg: Option<AlgoArg>) -> Algorithm {
        arg.map(Algorithm::from).unwrap_or(self.config.hash.algorithm)
    }

    /// Picks the command-line format if given, otherwise the configured one.
    pub fn format(&self, arg: Option<FormatArg>) -> OutputFormat {
        arg.map(OutputFormat::from).unwrap_or(self.config.hash.format)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    let global = GlobalArgs { config };

    let mut stdout = io::stdout().lock();
    let result = match cli.command {
        Command::Digest(ref args) => digest::run_digest(args, &global, &mut stdout),
        Command::Each(ref args) => digest::run_each(args, &global, &mut stdout),
        Command::Combine(ref args) => combine::run(args, &global, &mut stdout),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr subscriber: warn by default, info with -v, debug with -vv.
fn init_logging(quiet: bool, verbose: u8) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            _ => EnvFilter::new("debug"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

/// Loads the explicit config file if given, otherwise `cxrt.toml` in the
/// current directory when present.
fn load_config(path: Option<&Path>) -> Result<ToolConfig, cxrt_config::ConfigError> {
    match path {
        Some(path) => {
            debug!("loading config from {}", path.display());
            cxrt_config::load_config_file(path)
        }
        None => {
            let cwd = std::env::current_dir()?;
            cxrt_config::load_config(&cwd)
        }
    }
}
