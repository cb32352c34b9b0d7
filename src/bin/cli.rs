// src/bin/cli.rs
use color_eyre::eyre::{Result, WrapErr};
use gapp::cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run().wrap_err("gapp-cli failed")
}
