// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The monthly budget ledger: an opening figure and the ordered expenses
//! recorded against it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::LedgerError;
use crate::utils::parse_decimal;

pub const REMAINING_LABEL: &str = "Remaining Budget";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub description: String,
    pub amount: Decimal,
    /// Budget left right after this entry was accepted.
    pub budget_after: Decimal,
}

/// One (label, value) pair of the expense breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub value: Decimal,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BudgetLedger {
    opening: Option<Decimal>,
    entries: Vec<Entry>,
}

impl BudgetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `value` and makes it the current budget. Any sign is accepted.
    /// Recorded entries stay, so the opening figure becomes `value` plus what
    /// has been spent. On failure the ledger keeps whatever budget it had.
    pub fn set_budget(&mut self, value: &str) -> Result<Decimal, LedgerError> {
        let invalid = || LedgerError::InvalidNumber(value.to_string());
        let parsed = parse_decimal(value).map_err(|_| invalid())?;
        let opening = self
            .checked_spent()
            .and_then(|spent| parsed.checked_add(spent))
            .ok_or_else(invalid)?;
        self.opening = Some(opening);
        debug!(budget = %parsed, entries = self.entries.len(), "budget set");
        Ok(parsed)
    }

    /// Records an expense. The amount may use up the budget exactly but
    /// never exceed it; every failure leaves the ledger untouched.
    pub fn add_entry(
        &mut self,
        description: &str,
        amount_text: &str,
    ) -> Result<Entry, LedgerError> {
        let budget = self.budget().ok_or(LedgerError::Uninitialized)?;
        let description = description.trim();
        if description.is_empty() {
            return Err(LedgerError::EmptyDescription);
        }
        let amount = parse_decimal(amount_text)
            .map_err(|_| LedgerError::InvalidAmount(amount_text.to_string()))?;
        if amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        if amount > budget {
            info!(%amount, %budget, "expense rejected: over budget");
            return Err(LedgerError::OverBudget { amount, budget });
        }

        let entry = Entry {
            description: description.to_string(),
            amount,
            // 0 < amount <= budget, so this cannot leave the Decimal range
            budget_after: budget.saturating_sub(amount),
        };
        self.entries.push(entry.clone());
        debug!(description, %amount, budget_after = %entry.budget_after, "expense recorded");
        Ok(entry)
    }

    /// Current budget, always recomputed from the opening figure and the
    /// recorded amounts. `None` until a budget is set.
    ///
    /// `set_budget` only stores openings for which `opening - spent` is
    /// representable, so the saturation never kicks in.
    pub fn budget(&self) -> Option<Decimal> {
        self.opening.map(|o| o.saturating_sub(self.spent()))
    }

    pub fn opening(&self) -> Option<Decimal> {
        self.opening
    }

    pub fn spent(&self) -> Decimal {
        self.entries
            .iter()
            .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount))
    }

    fn checked_spent(&self) -> Option<Decimal> {
        self.entries
            .iter()
            .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.amount))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_initialized(&self) -> bool {
        self.opening.is_some()
    }

    /// The derived "Remaining Budget" row. Zero while uninitialized.
    pub fn remaining_summary(&self) -> Slice {
        Slice::new(REMAINING_LABEL, self.budget().unwrap_or(Decimal::ZERO))
    }

    pub fn clear(&mut self) {
        debug!(entries = self.entries.len(), "ledger cleared");
        self.entries.clear();
        self.opening = None;
    }

    /// One slice per entry in insertion order, then the remaining budget.
    pub fn chart_series(&self) -> Vec<Slice> {
        self.entries
            .iter()
            .map(|e| Slice::new(e.description.clone(), e.amount))
            .chain(std::iter::once(self.remaining_summary()))
            .collect()
    }
}
