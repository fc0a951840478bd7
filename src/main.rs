mod args;
mod config;
mod writer;

use args::{CliArgs, Command, Resource};
use config::Config;

use lmr::ids::{AccountId, TransactionId};
use lmr::{Account, AccountStore, HttpBackend, Journal, Reconciled, Result, Transaction, TransactionStore};

use anyhow::Context;

use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let cli = CliArgs::parse();
    let config = Config::load(&cli)?;

    config::configure_logger(&config)?;

    log::debug!("Application configured. Backend is {}", config.backend.host);

    let backend = HttpBackend::from_host(&config.backend.host);
    let journal = Journal::global("lmr");

    match cli.command {
        Command::Accounts => {
            let accounts = load_accounts(backend, journal).await?;
            report_accounts(&accounts)?;
        }
        Command::Transactions => {
            let transactions = load_transactions(backend, journal).await?;
            report_transactions(&transactions)?;
        }
        Command::AddAccount { name, amount } => {
            let mut accounts = load_accounts(backend, journal).await?;
            let saved = accounts
                .save(Account::new(name, amount))
                .await
                .context("Couldn't create account")?;

            report_reconciled(&saved, |account| writer::accounts_to_csv(&[account.clone()]))?;
            println!("Total: {}", accounts.total_display());
        }
        Command::AddTransaction {
            date,
            amount,
            description,
        } => {
            let mut transactions = load_transactions(backend, journal).await?;
            let saved = transactions
                .save(Transaction::new(date, description, amount))
                .await
                .context("Couldn't create transaction")?;

            report_reconciled(&saved, |transaction| {
                writer::transactions_to_csv(&[transaction.clone()])
            })?;
        }
        Command::Delete { resource, id } => delete(backend, journal, resource, id).await?,
    }

    log::debug!("Application finished successfully!");

    Ok(())
}

async fn load_accounts(backend: HttpBackend, journal: Journal) -> Result<AccountStore<HttpBackend>> {
    let accounts = AccountStore::load(backend, journal)
        .await
        .context("Couldn't load accounts")?;

    log::debug!("Loaded {} accounts", accounts.len());

    return Ok(accounts);
}

async fn load_transactions(
    backend: HttpBackend,
    journal: Journal,
) -> Result<TransactionStore<HttpBackend>> {
    let transactions = TransactionStore::load(backend, journal)
        .await
        .context("Couldn't load transactions")?;

    log::debug!("Loaded {} transactions", transactions.len());

    return Ok(transactions);
}

async fn delete(backend: HttpBackend, journal: Journal, resource: Resource, id: String) -> Result {
    match resource {
        Resource::Accounts => {
            let mut accounts = load_accounts(backend, journal).await?;
            let deleted = accounts
                .delete(&AccountId::from(id))
                .await
                .context("Couldn't delete account")?;

            log::debug!("Removed from local copy: {}", deleted.is_applied());
            println!("Total: {}", accounts.total_display());
        }
        Resource::Transactions => {
            let mut transactions = load_transactions(backend, journal).await?;
            let deleted = transactions
                .delete(&TransactionId::from(id))
                .await
                .context("Couldn't delete transaction")?;

            log::debug!("Removed from local copy: {}", deleted.is_applied());
            println!("Closing balance: {}", transactions.closing_balance());
        }
    }

    Ok(())
}

/// Writes accounts and their total to stdout
fn report_accounts(accounts: &AccountStore<HttpBackend>) -> Result {
    let output = writer::accounts_to_csv(accounts.accounts())?;

    print!("{output}");
    println!("Total: {}", accounts.total_display());

    Ok(())
}

fn report_transactions(transactions: &TransactionStore<HttpBackend>) -> Result {
    let output = writer::transactions_to_csv(transactions.transactions())?;

    print!("{output}");
    println!("Closing balance: {}", transactions.closing_balance());

    Ok(())
}

fn report_reconciled<T>(saved: &Reconciled<T>, to_csv: impl Fn(&T) -> Result<String>) -> Result {
    match saved {
        Reconciled::Applied(record) => print!("{}", to_csv(record)?),
        Reconciled::Diverged => log::debug!("Saved remotely, local copy left as it was"),
    }

    Ok(())
}
