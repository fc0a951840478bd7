use super::Record;

use crate::dates::serde_date;
use crate::ids::{self, TransactionId};
use crate::massage;
use crate::money::MoneyError;

use chrono::NaiveDate;

use rust_decimal::Decimal;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "ids::is_absent")]
    pub id: Option<TransactionId>,

    #[serde(with = "serde_date")]
    pub date: NaiveDate,

    #[serde(default)]
    pub description: String,

    pub amount: Decimal,

    /// Running total up to and including this transaction. Derived locally,
    /// never read from or sent to the backend.
    #[serde(skip)]
    pub balance: Decimal,
}

impl Transaction {
    /// A transaction that has not been created on the backend yet.
    pub fn new(date: NaiveDate, description: impl Into<String>, amount: Decimal) -> Self {
        return Self {
            id: None,
            date,
            description: description.into(),
            amount,
            balance: Decimal::ZERO,
        };
    }
}

impl Record for Transaction {
    type Id = TransactionId;

    const RESOURCE: &'static str = "transactions";

    fn id(&self) -> Option<&TransactionId> {
        return self.id.as_ref().filter(|id| !ids::is_blank(*id));
    }

    fn set_id(&mut self, id: TransactionId) {
        self.id = Some(id);
    }

    fn derive(records: &mut Vec<Self>) -> Result<(), MoneyError> {
        return massage::massage_transactions(records);
    }
}
