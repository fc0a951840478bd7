use lmr::dates;
use lmr::{Account, Result, Transaction};

use csv::Writer;

use serde::Serialize;

#[derive(Serialize, Debug, PartialEq)]
pub struct AccountRow {
    pub id: String,
    pub name: String,
    pub amount: String,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub balance: String,
}

impl From<&Account> for AccountRow {
    fn from(account: &Account) -> Self {
        return Self {
            id: account.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            name: account.name.clone(),
            amount: account.amount.to_string(),
        };
    }
}

impl From<&Transaction> for TransactionRow {
    fn from(transaction: &Transaction) -> Self {
        return Self {
            id: transaction.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            date: dates::format_short(&transaction.date),
            description: transaction.description.clone(),
            amount: transaction.amount.to_string(),
            balance: transaction.balance.to_string(),
        };
    }
}

pub fn build_csv_writer() -> Writer<Vec<u8>> {
    return Writer::from_writer(vec![]);
}

pub fn write_to_string(writer: Writer<Vec<u8>>) -> Result<String> {
    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}

/// Serializes `rows` into a CSV document with a header line.
pub fn rows_to_csv<T: Serialize>(rows: impl IntoIterator<Item = T>) -> Result<String> {
    let mut wtr = build_csv_writer();

    for row in rows {
        wtr.serialize(row)?;
    }

    return write_to_string(wtr);
}

pub fn accounts_to_csv(accounts: &[Account]) -> Result<String> {
    return rows_to_csv(accounts.iter().map(AccountRow::from));
}

pub fn transactions_to_csv(transactions: &[Transaction]) -> Result<String> {
    return rows_to_csv(transactions.iter().map(TransactionRow::from));
}
