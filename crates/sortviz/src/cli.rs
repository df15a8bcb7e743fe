#![forbid(unsafe_code)]

//! Command-line argument parsing.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via the `SORTVIZ_*` prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
sortviz — watch sorting algorithms work, one swap per frame

USAGE:
    sortviz [OPTIONS]

OPTIONS:
    --bars=N             Number of bars (default: fit terminal width)
    --fps=N              Frame rate in ticks per second (default: 60)
    --seed=N             Seed the RNG for reproducible runs
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    SPACE           Start sorting with the current algorithm and order
    R               Reset: regenerate the array and return to idle
    A / D           Sort ascending / descending (idle only)
    1-6             Select insertion, bubble, selection, shell, merge, bogo
    Q / Esc         Quit

ENVIRONMENT VARIABLES:
    SORTVIZ_BARS         Override --bars
    SORTVIZ_FPS          Override --fps
    SORTVIZ_SEED         Override --seed
    SORTVIZ_LOG          Write tracing output to this file
    SORTVIZ_LOG_FILTER   Tracing filter directive (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone)]
pub struct Opts {
    /// Bar count; `None` fits the terminal width.
    pub bars: Option<usize>,
    /// Frame rate in ticks per second.
    pub fps: u32,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            bars: None,
            fps: 60,
            seed: None,
        }
    }
}

impl Opts {
    /// Parse process arguments, exiting on `--help`/`--version` or a
    /// malformed flag.
    pub fn parse() -> Self {
        match Self::try_parse(env::args().skip(1)) {
            Ok(ParseResult::Opts(opts)) => opts,
            Ok(ParseResult::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(ParseResult::Version) => {
                println!("sortviz {VERSION}");
                process::exit(0);
            }
            Err(message) => {
                eprintln!("error: {message}");
                eprintln!("try --help");
                process::exit(2);
            }
        }
    }

    /// Parse from an explicit argument iterator (testable core of `parse`).
    pub fn try_parse<I>(args: I) -> Result<ParseResult, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut opts = Self::from_env();

        for arg in args {
            if arg == "--help" || arg == "-h" {
                return Ok(ParseResult::Help);
            }
            if arg == "--version" || arg == "-V" {
                return Ok(ParseResult::Version);
            }
            if let Some(value) = arg.strip_prefix("--bars=") {
                opts.bars = Some(parse_number(value, "--bars")?);
            } else if let Some(value) = arg.strip_prefix("--fps=") {
                opts.fps = parse_number(value, "--fps")?;
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                opts.seed = Some(parse_number(value, "--seed")?);
            } else {
                return Err(format!("unrecognized argument: {arg}"));
            }
        }
        Ok(ParseResult::Opts(opts))
    }

    /// Defaults with `SORTVIZ_*` environment overrides applied.
    fn from_env() -> Self {
        let mut opts = Self::default();
        if let Some(bars) = env_number("SORTVIZ_BARS") {
            opts.bars = Some(bars);
        }
        if let Some(fps) = env_number("SORTVIZ_FPS") {
            opts.fps = fps;
        }
        if let Some(seed) = env_number("SORTVIZ_SEED") {
            opts.seed = Some(seed);
        }
        opts
    }
}

/// Outcome of argument parsing.
#[derive(Debug)]
pub enum ParseResult {
    Opts(Opts),
    Help,
    Version,
}

fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} expects a number, got {value:?}"))
}

fn env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
