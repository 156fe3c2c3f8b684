// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Recoverable failures reported by [`crate::ledger::BudgetLedger`].
///
/// None of these are fatal; the presentation layer turns each one into a
/// user-facing notification and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Invalid input for monthly budget: '{0}'")]
    InvalidNumber(String),
    #[error("Invalid price '{0}'")]
    InvalidAmount(String),
    #[error("Price must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("Price {amount} exceeds monthly budget {budget}")]
    OverBudget { amount: Decimal, budget: Decimal },
    #[error("Monthly budget has not been set")]
    Uninitialized,
    #[error("Description must not be empty")]
    EmptyDescription,
}
