// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{config_path, Config};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("path", _)) => println!("{}", config_path()?.display()),
        Some(("show", _)) => {
            let rows = vec![
                vec!["chart_radius".to_string(), cfg.chart_radius.to_string()],
                vec!["color".to_string(), cfg.color.to_string()],
                vec![
                    "max_budget_attempts".to_string(),
                    cfg.max_budget_attempts.to_string(),
                ],
            ];
            println!("{}", pretty_table(&["Key", "Value"], rows));
        }
        _ => {}
    }
    Ok(())
}
