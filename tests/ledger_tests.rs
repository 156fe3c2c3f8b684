// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pennyplot::{BudgetLedger, LedgerError, Slice};
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn ledger_with(budget: &str) -> BudgetLedger {
    let mut l = BudgetLedger::new();
    l.set_budget(budget).unwrap();
    l
}

#[test]
fn rent_reduces_budget() {
    let mut l = ledger_with("1000");
    let e = l.add_entry("Rent", "400").unwrap();
    assert_eq!(l.budget(), Some(dec("600")));
    assert_eq!(e.budget_after, dec("600"));
    assert_eq!(format!("{:.2}", e.budget_after), "600.00");
    assert_eq!(l.entries().len(), 1);
}

#[test]
fn over_budget_leaves_ledger_untouched() {
    let mut l = ledger_with("1000");
    let err = l.add_entry("Car", "2000").unwrap_err();
    assert_eq!(
        err,
        LedgerError::OverBudget {
            amount: dec("2000"),
            budget: dec("1000")
        }
    );
    assert_eq!(l.budget(), Some(dec("1000")));
    assert!(l.entries().is_empty());
}

#[test]
fn invalid_budget_text_keeps_uninitialized() {
    let mut l = BudgetLedger::new();
    assert_eq!(
        l.set_budget("abc"),
        Err(LedgerError::InvalidNumber("abc".into()))
    );
    assert!(!l.is_initialized());
    assert_eq!(l.budget(), None);
}

#[test]
fn invalid_budget_text_keeps_prior_budget() {
    let mut l = ledger_with("250");
    l.add_entry("Food", "50").unwrap();
    assert!(l.set_budget("lots").is_err());
    assert_eq!(l.budget(), Some(dec("200")));
    assert_eq!(l.entries().len(), 1);
}

#[test]
fn negative_budget_is_accepted() {
    let mut l = BudgetLedger::new();
    assert_eq!(l.set_budget("-10").unwrap(), dec("-10"));
    assert!(l.is_initialized());
    assert!(matches!(
        l.add_entry("Snack", "1"),
        Err(LedgerError::OverBudget { .. })
    ));
}

#[test]
fn chart_series_lists_entries_then_remaining() {
    let mut l = ledger_with("500");
    l.add_entry("A", "100").unwrap();
    l.add_entry("B", "200").unwrap();
    let series = l.chart_series();
    assert_eq!(
        series,
        vec![
            Slice::new("A", dec("100")),
            Slice::new("B", dec("200")),
            Slice::new("Remaining Budget", dec("200")),
        ]
    );
    // Pure: asking again changes nothing
    assert_eq!(l.chart_series(), series);
    assert_eq!(l.entries().len(), 2);
}

#[test]
fn amount_equal_to_budget_is_accepted() {
    let mut l = ledger_with("300");
    let e = l.add_entry("Everything", "300").unwrap();
    assert_eq!(e.budget_after, Decimal::ZERO);
    assert!(matches!(
        l.add_entry("More", "0.01"),
        Err(LedgerError::OverBudget { .. })
    ));
}

#[test]
fn failed_adds_never_mutate() {
    let mut l = ledger_with("100");
    l.add_entry("Coffee", "3.50").unwrap();
    let before = l.entries().to_vec();
    let budget = l.budget();

    let failures = [
        ("Tea", "abc", "InvalidAmount"),
        ("Tea", "", "InvalidAmount"),
        ("Tea", "0", "NonPositive"),
        ("Tea", "-4", "NonPositive"),
        ("Tea", "1000", "OverBudget"),
        ("   ", "4", "EmptyDescription"),
    ];
    for (desc, amount, kind) in failures {
        let err = l.add_entry(desc, amount).unwrap_err();
        let ok = match kind {
            "InvalidAmount" => matches!(err, LedgerError::InvalidAmount(_)),
            "NonPositive" => matches!(err, LedgerError::NonPositiveAmount(_)),
            "OverBudget" => matches!(err, LedgerError::OverBudget { .. }),
            _ => matches!(err, LedgerError::EmptyDescription),
        };
        assert!(ok, "{desc:?}/{amount:?} gave {err:?}");
        assert_eq!(l.entries(), before.as_slice());
        assert_eq!(l.budget(), budget);
    }
}

#[test]
fn adding_requires_budget() {
    let mut l = BudgetLedger::new();
    assert_eq!(l.add_entry("Rent", "400"), Err(LedgerError::Uninitialized));
    assert!(l.entries().is_empty());
}

#[test]
fn budget_tracks_initial_minus_sum() {
    let amounts = ["12.40", "7", "100.01", "0.59", "30", "49.99", "1e2"];
    let mut l = ledger_with("1234.56");
    let mut expected = dec("1234.56");
    for (i, a) in amounts.iter().enumerate() {
        let e = l.add_entry(&format!("item {i}"), a).unwrap();
        expected -= e.amount;
        assert_eq!(e.budget_after, expected);
        assert_eq!(l.budget(), Some(expected));
    }
    let sum: Decimal = l.entries().iter().map(|e| e.amount).sum();
    assert_eq!(l.budget(), Some(dec("1234.56") - sum));
    assert_eq!(l.spent(), sum);
    assert_eq!(l.remaining_summary().value, expected);
}

#[test]
fn rejected_entries_do_not_drift_remaining() {
    let mut l = ledger_with("100");
    l.add_entry("A", "40").unwrap();
    assert!(l.add_entry("B", "70").is_err());
    l.add_entry("C", "60").unwrap();
    assert_eq!(l.remaining_summary().value, Decimal::ZERO);
    assert_eq!(l.chart_series().len(), l.entries().len() + 1);
}

#[test]
fn clear_always_resets() {
    let mut l = BudgetLedger::new();
    l.clear();
    assert!(l.entries().is_empty());
    assert!(!l.is_initialized());

    let mut l = ledger_with("900");
    l.add_entry("A", "1").unwrap();
    l.add_entry("B", "2").unwrap();
    l.clear();
    assert!(l.entries().is_empty());
    assert_eq!(l.budget(), None);
    assert_eq!(l.chart_series().len(), 1);
}

#[test]
fn entries_keep_insertion_order_and_duplicates() {
    let mut l = ledger_with("100");
    for (d, a) in [("Z", "1"), ("A", "2"), ("Z", "1")] {
        l.add_entry(d, a).unwrap();
    }
    let names: Vec<&str> = l.entries().iter().map(|e| e.description.as_str()).collect();
    assert_eq!(names, ["Z", "A", "Z"]);
}

#[test]
fn resetting_budget_sets_current_value() {
    let mut l = ledger_with("100");
    l.add_entry("A", "30").unwrap();
    assert_eq!(l.set_budget("200").unwrap(), dec("200"));
    assert_eq!(l.budget(), Some(dec("200")));
    assert_eq!(l.remaining_summary().value, dec("200"));
    // Earlier snapshot is kept as recorded
    assert_eq!(l.entries()[0].budget_after, dec("70"));

    let e = l.add_entry("B", "50").unwrap();
    assert_eq!(e.budget_after, dec("150"));
    assert_eq!(l.budget(), Some(dec("150")));
}

#[test]
fn extreme_budgets_never_panic() {
    let max = Decimal::MAX.to_string();
    let mut l = ledger_with(&max);
    l.add_entry("All", &max).unwrap();
    assert_eq!(l.budget(), Some(Decimal::ZERO));

    assert_eq!(l.set_budget("-1").unwrap(), dec("-1"));
    assert_eq!(l.budget(), Some(dec("-1")));
    assert_eq!(l.chart_series().last().unwrap().value, dec("-1"));
    assert!(matches!(
        l.add_entry("More", "1"),
        Err(LedgerError::OverBudget { .. })
    ));
}

#[test]
fn unrepresentable_budget_is_rejected() {
    let max = Decimal::MAX.to_string();
    let mut l = ledger_with(&max);
    l.add_entry("Small", "1").unwrap();
    // MAX on top of what was already spent overflows
    assert_eq!(l.set_budget(&max), Err(LedgerError::InvalidNumber(max.clone())));
    assert_eq!(l.budget(), Some(Decimal::MAX - Decimal::ONE));
    assert_eq!(l.entries().len(), 1);
}
