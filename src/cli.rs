// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print the chart series as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print the chart series as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("pennyplot")
        .about("Monthly budget ledger with an expense table and pie chart")
        .version(crate_version!())
        .subcommand(
            Command::new("run")
                .about("Start the interactive session (default)")
                .arg(
                    Arg::new("budget")
                        .long("budget")
                        .value_name("AMOUNT")
                        .help("Monthly budget; skips the initial prompt"),
                ),
        )
        .subcommand(json_flags(
            Command::new("plot")
                .about("Record expenses against a budget and print the table and chart")
                .arg(
                    Arg::new("budget")
                        .long("budget")
                        .value_name("AMOUNT")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("expense")
                        .long("expense")
                        .short('e')
                        .value_name("DESC=AMOUNT")
                        .action(ArgAction::Append)
                        .help("Expense to record, in order; repeatable"),
                )
                .arg(
                    Arg::new("no-chart")
                        .long("no-chart")
                        .action(ArgAction::SetTrue)
                        .help("Print only the table"),
                ),
        ))
        .subcommand(
            Command::new("config")
                .about("Inspect configuration")
                .subcommand(Command::new("path").about("Print the config file location"))
                .subcommand(Command::new("show").about("Print the effective configuration")),
        )
}
