use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use gesture_parser_core::geometry::Point;

use crate::cli::validate::parse_point;

#[derive(Parser)]
#[command(
    name = "gesture_parser",
    version,
    about = "Classify single-touch gestures (swipe, flick, spiral, rub-out, click)"
)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify an already-filtered list of points
    Classify {
        /// Retained points in path order, each as X,Y
        #[arg(allow_hyphen_values = true, value_parser = parse_point)]
        points: Vec<Point>,

        /// Initial contact as X,Y (defaults to the first point)
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        down: Option<Point>,

        /// Touch-down time (ms)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        down_time: i64,

        /// Lift time (ms)
        #[arg(long, default_value_t = 1000, allow_hyphen_values = true)]
        up_time: i64,

        /// Show the intermediate values behind the verdict
        #[arg(long)]
        explain: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay a recorded touch trace (.json or .csv) through the parser
    Replay {
        file: PathBuf,

        /// Trace format (defaults to the file extension)
        #[arg(long, value_enum)]
        format: Option<TraceFormatArg>,

        /// Also print every "points so far" notification
        #[arg(long)]
        progress: bool,

        /// Show the intermediate values behind each verdict
        #[arg(long)]
        explain: bool,

        /// Print recognized gestures as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every gesture type
    Types,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TraceFormatArg {
    Json,
    Csv,
}
