// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Once;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Installs the stderr tracing subscriber. `RUST_LOG` overrides the default
/// `pennyplot=warn` filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pennyplot=warn"));
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

/// Parses user-entered numeric text. Surrounding whitespace is ignored and
/// scientific notation (`1e3`) is accepted.
pub fn parse_decimal(s: &str) -> Result<Decimal> {
    let t = s.trim();
    if t.is_empty() {
        anyhow::bail!("Invalid decimal '{}'", s);
    }
    if let Ok(d) = t.parse::<Decimal>() {
        return Ok(d);
    }
    Decimal::from_scientific(&t.to_ascii_lowercase())
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Two decimal places, halves rounded away from zero.
pub fn fmt_amount(d: &Decimal) -> String {
    let r = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", r)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Right-aligns the given columns, the way prices read in a ledger.
pub fn align_right(table: &mut Table, columns: &[usize]) {
    for idx in columns {
        if let Some(col) = table.column_mut(*idx) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
