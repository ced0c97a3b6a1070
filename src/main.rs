//! Menu Promos command line tool

use std::io;

use anyhow::Result;
use clap::Parser;

use menu_promos::{
    cli::{CliArgs, run},
    observability::init_subscriber,
};

/// Menu Promos entry point
fn main() -> Result<()> {
    let args = CliArgs::parse();

    init_subscriber(&args.logging)?;

    let stdout = io::stdout();
    let handle = stdout.lock();

    run(&args, handle)?;

    Ok(())
}
