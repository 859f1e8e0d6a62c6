// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::{eyre, Result};

use course_sched::{cli, log};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();

    log::init(log::level_for(args.quiet, args.verbose), args.log_file.as_deref())
        .map_err(|e| eyre!("failed to initialize logging: {e}"))?;

    cli::run(&args)?;
    Ok(())
}
