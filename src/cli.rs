use crate::error::SimError;
use crate::simulation::BoundaryPolicy;
use clap::Parser;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// CLI arguments for the ant simulation
#[derive(Parser, Debug)]
#[command(name = "langtons_ant", about = "🐜 Langton's ant on a growing grid")]
pub struct Args {
    /// Initial size of grid
    #[arg(short = 's', long = "size", default_value_t = 10, allow_negative_numbers = true)]
    pub size: i64,

    /// Number of iterations to run
    #[arg(short = 'n', long = "iterations", default_value_t = 10, allow_negative_numbers = true)]
    pub iterations: i64,

    /// Debug level <info|debug|fatal>
    #[arg(short = 'v', long = "verbosity", default_value = "info")]
    pub verbosity: Verbosity,

    /// What to do when the ant walks off the grid <extend|terminate>
    #[arg(short = 'b', long = "boundary", default_value = "extend")]
    pub boundary: BoundaryPolicy,

    /// Highlight black cells in the rendered grid
    #[arg(long, default_value_t = false)]
    pub color: bool,
}

/// Log verbosity selectable from the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    #[default]
    Info,
    Debug,
    /// Only fatal errors
    Fatal,
}

impl FromStr for Verbosity {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            b"info" => Ok(Verbosity::Info),
            b"debug" => Ok(Verbosity::Debug),
            b"fatal" => Ok(Verbosity::Fatal),
            _ => Err(SimError::InvalidVerbosity(s.to_string())),
        }
    }
}

impl Verbosity {
    /// tracing has no fatal level; errors are the closest
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Info => LevelFilter::INFO,
            Verbosity::Debug => LevelFilter::DEBUG,
            Verbosity::Fatal => LevelFilter::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_parsing() {
        assert_eq!("info".parse::<Verbosity>(), Ok(Verbosity::Info));
        assert_eq!("debug".parse::<Verbosity>(), Ok(Verbosity::Debug));
        assert_eq!("fatal".parse::<Verbosity>(), Ok(Verbosity::Fatal));
        assert_eq!(
            "trace".parse::<Verbosity>(),
            Err(SimError::InvalidVerbosity("trace".to_string()))
        );
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(Verbosity::Info.level_filter(), LevelFilter::INFO);
        assert_eq!(Verbosity::Debug.level_filter(), LevelFilter::DEBUG);
        assert_eq!(Verbosity::Fatal.level_filter(), LevelFilter::ERROR);
    }

    #[test]
    fn test_rejects_unknown_verbosity() {
        let res = Args::try_parse_from(["langtons_ant", "-v", "loud"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_color_flag() {
        let args = Args::parse_from(["langtons_ant", "--color"]);
        assert!(args.color);
        assert_eq!(args.verbosity, Verbosity::Info);
    }
}
