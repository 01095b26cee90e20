use anyhow::Result;

mod cli;
mod ui;
mod utils;

fn main() -> Result<()> {
    cli::run()
}
