// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing::debug;

use crate::config::Config;
use crate::session::{BudgetPrompt, Prompter, Session, Submit, INVALID_BUDGET_MSG};
use crate::utils::fmt_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SetBudget,
    AddExpense,
    Plot,
    Table,
    Clear,
    Quit,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::SetBudget => "Set monthly budget",
            Action::AddExpense => "Add expense",
            Action::Plot => "Plot",
            Action::Table => "Show table",
            Action::Clear => "Clear",
            Action::Quit => "Quit",
        }
    }
}

/// Menu entries for the current state. Adding is only offered once a budget
/// exists; until then the budget prompt takes its place.
pub fn menu_actions(session: &Session) -> Vec<Action> {
    let first = if session.ledger().is_initialized() {
        Action::AddExpense
    } else {
        Action::SetBudget
    };
    vec![first, Action::Plot, Action::Table, Action::Clear, Action::Quit]
}

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// dialoguer's text input has no Esc path, so a blank answer is how the
/// terminal cancels the budget prompt.
pub fn cancel_on_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

impl Prompter for TerminalPrompter {
    fn budget_text(&mut self) -> Result<Option<String>> {
        let text: String = Input::with_theme(&self.theme)
            .with_prompt("Enter your monthly budget (blank to cancel)")
            .allow_empty(true)
            .interact_text()?;
        Ok(cancel_on_blank(text))
    }

    fn error(&mut self, message: &str) {
        println!("{} {}", "Error:".red().bold(), message);
    }

    fn warning(&mut self, message: &str) {
        println!("{} {}", "Warning:".yellow().bold(), message);
    }
}

pub fn handle(cfg: &Config, sub: Option<&clap::ArgMatches>) -> Result<()> {
    let mut session = Session::new(cfg);
    let mut prompter = TerminalPrompter::new();

    let preset = sub.and_then(|m| m.get_one::<String>("budget"));
    match preset {
        Some(b) if session.ledger_mut().set_budget(b).is_ok() => {}
        Some(_) => {
            prompter.error(INVALID_BUDGET_MSG);
            report_prompt(&session.prompt_budget(&mut prompter)?);
        }
        None => report_prompt(&session.prompt_budget(&mut prompter)?),
    }

    loop {
        let actions = menu_actions(&session);
        let labels: Vec<&str> = actions.iter().map(Action::label).collect();
        let prompt = match session.ledger().budget() {
            Some(b) => format!("Monthly budget {}", fmt_amount(&b)),
            None => "No monthly budget set".to_string(),
        };
        let choice = Select::with_theme(&prompter.theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact_opt()?;
        // Esc quits like the menu entry
        let Some(idx) = choice else { break };
        let action = actions[idx];
        debug!(?action, "menu action");
        match action {
            Action::SetBudget => report_prompt(&session.prompt_budget(&mut prompter)?),
            Action::AddExpense => add_expense(&mut session, &mut prompter)?,
            Action::Plot => println!("{}", session.plot()),
            Action::Table => println!("{}", session.table()),
            Action::Clear => report_prompt(&session.clear(&mut prompter)?),
            Action::Quit => break,
        }
    }
    Ok(())
}

fn report_prompt(outcome: &BudgetPrompt) {
    match outcome {
        BudgetPrompt::Set(v) => println!("Monthly budget set to {}", fmt_amount(v)),
        BudgetPrompt::Cancelled => println!(
            "No monthly budget set; choose '{}' to add one.",
            Action::SetBudget.label()
        ),
        BudgetPrompt::GaveUp => println!("Too many invalid attempts; no monthly budget set."),
    }
}

fn add_expense(session: &mut Session, prompter: &mut TerminalPrompter) -> Result<()> {
    let description: String = Input::with_theme(&prompter.theme)
        .with_prompt("Description")
        .with_initial_text(session.form().description.clone())
        .allow_empty(true)
        .interact_text()?;
    session.set_description(description);
    let price: String = Input::with_theme(&prompter.theme)
        .with_prompt("Price")
        .with_initial_text(session.form().price.clone())
        .allow_empty(true)
        .interact_text()?;
    session.set_price(price);

    match session.submit(prompter) {
        Submit::Added(e) => println!(
            "Added {} ({}), monthly budget now {}",
            e.description,
            fmt_amount(&e.amount),
            fmt_amount(&e.budget_after)
        ),
        Submit::Disabled => prompter.warning("Enter both a description and a price."),
        Submit::Rejected(_) => {}
    }
    Ok(())
}
