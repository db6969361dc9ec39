//! Command-line options.

use std::fmt;
use std::num::ParseIntError;

use clearpath_paths::{Metric, UnknownMetric};

pub const USAGE: &str = "usage: clearpath-demo [seed] [metric] [--no-jump] [--wall-factor N] \
                         [--show small|large] [--sweep]";

/// Which agent's score map to shade instead of the clearance field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Show {
    Small,
    Large,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub seed: u64,
    pub metric: Metric,
    pub jumping: bool,
    /// Overrides the small agent's wall factor.
    pub wall_factor: Option<i32>,
    pub show: Option<Show>,
    /// Print a table over every metric and small-agent wall factor.
    pub sweep: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: 42,
            metric: Metric::default(),
            jumping: true,
            wall_factor: None,
            show: None,
            sweep: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    MissingValue(&'static str),
    BadNumber { arg: String, source: ParseIntError },
    BadMetric(UnknownMetric),
    BadShow(String),
    Unexpected(String),
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::BadNumber { arg, source } => write!(f, "bad number {arg:?}: {source}"),
            Self::BadMetric(e) => write!(f, "{e}"),
            Self::BadShow(s) => write!(f, "--show expects small or large, got {s:?}"),
            Self::Unexpected(s) => write!(f, "unexpected argument {s:?}\n{USAGE}"),
        }
    }
}

impl std::error::Error for ArgError {}

fn number<T: std::str::FromStr<Err = ParseIntError>>(arg: String) -> Result<T, ArgError> {
    arg.parse()
        .map_err(|source| ArgError::BadNumber { arg, source })
}

impl Options {
    /// Parse arguments, not including the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ArgError> {
        let mut opts = Self::default();
        let mut positional = 0;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--no-jump" => opts.jumping = false,
                "--sweep" => opts.sweep = true,
                "--wall-factor" => {
                    let v = args.next().ok_or(ArgError::MissingValue("--wall-factor"))?;
                    opts.wall_factor = Some(number(v)?);
                }
                "--show" => {
                    let v = args.next().ok_or(ArgError::MissingValue("--show"))?;
                    opts.show = Some(match v.as_str() {
                        "small" => Show::Small,
                        "large" => Show::Large,
                        _ => return Err(ArgError::BadShow(v)),
                    });
                }
                s if s.starts_with("--") => return Err(ArgError::Unexpected(arg)),
                _ => {
                    match positional {
                        0 => opts.seed = number(arg)?,
                        1 => opts.metric = arg.parse().map_err(ArgError::BadMetric)?,
                        _ => return Err(ArgError::Unexpected(arg)),
                    }
                    positional += 1;
                }
            }
        }
        Ok(opts)
    }
}
