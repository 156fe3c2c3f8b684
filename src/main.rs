// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use pennyplot::{cli, commands, config::Config, utils};

fn main() -> Result<()> {
    utils::init_tracing();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let cfg = Config::load()?;

    match matches.subcommand() {
        Some(("run", sub)) => commands::interactive::handle(&cfg, Some(sub))?,
        Some(("plot", sub)) => commands::plot::handle(&cfg, sub)?,
        Some(("config", sub)) => commands::config::handle(&cfg, sub)?,
        _ => commands::interactive::handle(&cfg, None)?,
    }
    Ok(())
}
