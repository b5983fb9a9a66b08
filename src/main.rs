// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Count the preimages of the reference grid and print the total.
//!
//! Stdout carries the decimal total only. Diagnostics go to stderr and are
//! controlled by `RUST_LOG` (default `warn`).

use anyhow::Context;
use log::info;
use preimage_count::propagation::render;
use preimage_count::{CountConfig, CountContext, Grid};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let config = CountConfig::reference();
    info!(
        "Reference configuration: {}x{} grid, {}-bit accumulator",
        config.rows, config.cols, config.precision_bits
    );
    let mut ctx = CountContext::new(config).context("Invalid counting configuration")?;

    let total = ctx
        .count(&Grid::reference())
        .context("Reference grid does not match the configuration")?;
    println!("{}", render(&total));
    Ok(())
}
