//! CLI entrypoint for `env-overlay`.

use std::io;

use clap::Parser;
use env_overlay_cli::cli::Args;
use env_overlay_cli::{commands, logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::init(args.verbose)?;
    let mut stdout = io::stdout().lock();
    commands::run(&args, &mut stdout)?;
    Ok(())
}
