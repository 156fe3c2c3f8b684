// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing::info;

use crate::chart::PieChart;
use crate::config::Config;
use crate::ledger::BudgetLedger;
use crate::session::rejection_message;
use crate::utils::maybe_print_json;
use crate::view::ledger_table;

pub fn handle(cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let (ledger, warnings) = build_ledger(sub)?;
    for w in &warnings {
        eprintln!("warning: {}", w);
    }

    let series = ledger.chart_series();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &series)? {
        return Ok(());
    }

    println!("{}", ledger_table(&ledger));
    if !sub.get_flag("no-chart") {
        println!();
        println!("{}", PieChart::new(cfg.chart_radius, cfg.color).render(&series));
    }
    Ok(())
}

/// Replays `--budget` and every `--expense` in order. Rejected expenses are
/// skipped and reported back as messages; an unparseable budget is an error.
pub fn build_ledger(sub: &clap::ArgMatches) -> Result<(BudgetLedger, Vec<String>)> {
    let mut ledger = BudgetLedger::new();
    let budget = sub
        .get_one::<String>("budget")
        .map(String::as_str)
        .unwrap_or_default();
    ledger.set_budget(budget)?;

    let mut warnings = Vec::new();
    let raw_expenses = sub
        .get_many::<String>("expense")
        .map(|v| v.collect::<Vec<_>>())
        .unwrap_or_default();
    for raw in raw_expenses {
        let Some((desc, amount)) = raw.rsplit_once('=') else {
            warnings.push(format!("'{}': expected DESC=AMOUNT", raw));
            continue;
        };
        if let Err(e) = ledger.add_entry(desc, amount) {
            info!(expense = %raw, error = %e, "expense skipped");
            warnings.push(format!("'{}': {}", raw, rejection_message(&e)));
        }
    }
    Ok((ledger, warnings))
}
