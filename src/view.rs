// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use comfy_table::Table;

use crate::ledger::{BudgetLedger, Entry};
use crate::utils::{align_right, fmt_amount, pretty_table};

pub const HEADERS: [&str; 3] = ["Description", "Price", "Monthly Budget"];

pub fn entry_row(e: &Entry) -> Vec<String> {
    vec![
        e.description.clone(),
        fmt_amount(&e.amount),
        fmt_amount(&e.budget_after),
    ]
}

/// Entry rows followed by the derived remaining-budget row, whose budget
/// column stays blank. The trailing row is omitted while no budget is set.
pub fn ledger_rows(ledger: &BudgetLedger) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = ledger.entries().iter().map(entry_row).collect();
    if ledger.is_initialized() {
        let summary = ledger.remaining_summary();
        rows.push(vec![summary.label, fmt_amount(&summary.value), String::new()]);
    }
    rows
}

pub fn ledger_table(ledger: &BudgetLedger) -> Table {
    let mut t = pretty_table(&HEADERS, ledger_rows(ledger));
    align_right(&mut t, &[1, 2]);
    t
}
