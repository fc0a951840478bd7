use lmr::dates::{self, DateError};
use lmr::money;

use std::path::PathBuf;

use chrono::NaiveDate;

use clap::{Parser, Subcommand, ValueEnum};

use rust_decimal::Decimal;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("Couldn't parse amount: {0}")]
    Amount(String),

    #[error("Couldn't parse date: {0}")]
    Date(#[from] DateError),
}

#[derive(Parser, Debug)]
#[command(
    name = "ledger-mirror",
    about = "Mirror of a personal finance backend's accounts and transactions"
)]
pub struct CliArgs {
    /// Path to config file
    #[arg(short, long, default_value = "ledger-mirror.toml")]
    pub config: PathBuf,

    /// Backend host or base URL (overrides config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Log level (overrides config file)
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// List accounts and their total
    Accounts,

    /// List transactions with running balances
    Transactions,

    /// Create an account
    AddAccount {
        #[arg(long)]
        name: String,

        #[arg(long, allow_hyphen_values = true, value_parser = parse_amount)]
        amount: Decimal,
    },

    /// Create a transaction
    AddTransaction {
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,

        #[arg(long, allow_hyphen_values = true, value_parser = parse_amount)]
        amount: Decimal,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Delete a record by identifier
    Delete {
        #[arg(value_enum)]
        resource: Resource,

        id: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Accounts,
    Transactions,
}

fn parse_amount(raw: &str) -> Result<Decimal, ArgsError> {
    return money::parse(raw).map_err(|e| ArgsError::Amount(e.to_string()));
}

fn parse_date(raw: &str) -> Result<NaiveDate, ArgsError> {
    return Ok(dates::normalize(raw)?);
}
