pub mod args;
pub mod color;
pub mod commands;
pub mod export;
pub mod logging;
pub mod validate;

use anyhow::Result;
use clap::Parser;

use crate::ui::Style;

pub fn run() -> Result<()> {
    let cli = args::Cli::parse();
    logging::init_logging(cli.verbose, cli.log_format)?;

    let style = Style::detect(cli.no_color);

    match &cli.cmd {
        args::Commands::Classify {
            points,
            down,
            down_time,
            up_time,
            explain,
            json,
        } => {
            validate::validate_classify(points, *down_time, *up_time)?;
            let opts = commands::classify::ClassifyOptions {
                down: *down,
                down_time: *down_time,
                up_time: *up_time,
                explain: *explain,
                json: *json,
            };
            commands::classify::run(points, opts, style)
        }

        args::Commands::Replay {
            file,
            format,
            progress,
            explain,
            json,
        } => {
            let opts = commands::replay::ReplayOptions {
                format: *format,
                progress: *progress,
                explain: *explain,
                json: *json,
            };
            commands::replay::run(file, opts, style)
        }

        args::Commands::Types => commands::types::run(style),
    }
}
