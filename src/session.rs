// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Presentation state that sits between a front end and the ledger: the
//! budget prompt flow, the expense form and its submit rule, plotting and
//! clearing. Front ends supply input and notifications through [`Prompter`].

use anyhow::Result;
use comfy_table::Table;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::chart::PieChart;
use crate::config::Config;
use crate::error::LedgerError;
use crate::ledger::{BudgetLedger, Entry};
use crate::view::ledger_table;

pub const INVALID_BUDGET_MSG: &str = "Invalid input for monthly budget.";
pub const OVER_BUDGET_MSG: &str = "Price exceeds monthly budget!";

pub trait Prompter {
    /// Asks for the monthly budget. `None` means the user backed out.
    fn budget_text(&mut self) -> Result<Option<String>>;
    /// Blocking error notification.
    fn error(&mut self, message: &str);
    /// Blocking, non-fatal warning.
    fn warning(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetPrompt {
    Set(Decimal),
    Cancelled,
    /// Every allowed attempt was invalid.
    GaveUp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    Added(Entry),
    /// The form is incomplete or no budget is set.
    Disabled,
    Rejected(LedgerError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub description: String,
    pub price: String,
}

impl Form {
    pub fn clear(&mut self) {
        self.description.clear();
        self.price.clear();
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    ledger: BudgetLedger,
    form: Form,
    max_budget_attempts: u32,
    chart: PieChart,
}

impl Session {
    pub fn new(cfg: &Config) -> Self {
        Self {
            ledger: BudgetLedger::new(),
            form: Form::default(),
            max_budget_attempts: cfg.max_budget_attempts.max(1),
            chart: PieChart::new(cfg.chart_radius, cfg.color),
        }
    }

    pub fn ledger(&self) -> &BudgetLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut BudgetLedger {
        &mut self.ledger
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.form.description = text.into();
    }

    pub fn set_price(&mut self, text: impl Into<String>) {
        self.form.price = text.into();
    }

    /// Whether the Add action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.form.description.trim().is_empty()
            && !self.form.price.trim().is_empty()
            && self.ledger.is_initialized()
    }

    /// Asks for a budget until one parses, the user cancels, or the attempt
    /// limit runs out. A cancelled or exhausted prompt leaves the ledger as
    /// it was.
    pub fn prompt_budget<P: Prompter>(&mut self, p: &mut P) -> Result<BudgetPrompt> {
        for attempt in 1..=self.max_budget_attempts {
            let Some(text) = p.budget_text()? else {
                debug!("budget prompt cancelled");
                return Ok(BudgetPrompt::Cancelled);
            };
            if text.trim().is_empty() {
                return Ok(BudgetPrompt::Cancelled);
            }
            match self.ledger.set_budget(&text) {
                Ok(v) => return Ok(BudgetPrompt::Set(v)),
                Err(e) => {
                    warn!(attempt, error = %e, "budget rejected");
                    p.error(INVALID_BUDGET_MSG);
                }
            }
        }
        Ok(BudgetPrompt::GaveUp)
    }

    /// Submits the form. Success clears it; any rejection keeps the text so
    /// the user can correct it.
    pub fn submit<P: Prompter>(&mut self, p: &mut P) -> Submit {
        if !self.can_submit() {
            return Submit::Disabled;
        }
        match self.ledger.add_entry(&self.form.description, &self.form.price) {
            Ok(entry) => {
                self.form.clear();
                Submit::Added(entry)
            }
            Err(e) => {
                p.warning(&rejection_message(&e));
                Submit::Rejected(e)
            }
        }
    }

    pub fn table(&self) -> Table {
        ledger_table(&self.ledger)
    }

    pub fn plot(&self) -> String {
        self.chart.render(&self.ledger.chart_series())
    }

    /// Empties the ledger and form, then asks for a fresh budget.
    pub fn clear<P: Prompter>(&mut self, p: &mut P) -> Result<BudgetPrompt> {
        self.ledger.clear();
        self.form.clear();
        self.prompt_budget(p)
    }
}

pub fn rejection_message(e: &LedgerError) -> String {
    match e {
        LedgerError::OverBudget { .. } => OVER_BUDGET_MSG.to_string(),
        LedgerError::InvalidAmount(text) => format!(
            "That is not a valid input: {}. Make sure to enter a price!",
            text
        ),
        LedgerError::NonPositiveAmount(_) => "Price must be greater than zero.".to_string(),
        other => other.to_string(),
    }
}
