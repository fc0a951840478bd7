use super::Record;

use crate::ids::{self, AccountId};
use crate::money::{self, MoneyError};

use rust_decimal::Decimal;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Account {
    #[serde(default, skip_serializing_if = "ids::is_absent")]
    pub id: Option<AccountId>,

    #[serde(default)]
    pub name: String,

    pub amount: Decimal,
}

impl Account {
    /// An account that has not been created on the backend yet.
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        return Self {
            id: None,
            name: name.into(),
            amount,
        };
    }
}

impl Record for Account {
    type Id = AccountId;

    const RESOURCE: &'static str = "accounts";

    fn id(&self) -> Option<&AccountId> {
        return self.id.as_ref().filter(|id| !ids::is_blank(*id));
    }

    fn set_id(&mut self, id: AccountId) {
        self.id = Some(id);
    }

    // Nothing is stored per account, but the total must stay computable
    fn derive(records: &mut Vec<Self>) -> Result<(), MoneyError> {
        money::total(records.iter().map(|account| account.amount))?;

        return Ok(());
    }
}
