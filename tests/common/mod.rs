#![allow(dead_code)]

use lmr::ids::{AccountId, TransactionId};
use lmr::{Account, Backend, BackendError, Journal, MemoryLog, Record, Transaction};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// In-process stand-in for the remote backend.
pub struct FakeBackend<R: Record> {
    state: Mutex<FakeState<R>>,
}

struct FakeState<R: Record> {
    records: Vec<R>,
    next_id: Option<String>,
    issued: usize,
    failing: bool,
    calls: Vec<String>,
}

impl<R: Record> FakeBackend<R> {
    pub fn with_records(records: Vec<R>) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(FakeState {
                records,
                next_id: None,
                issued: 0,
                failing: false,
                calls: vec![],
            }),
        })
    }

    /// Identifier handed out by the next create
    pub fn assign_next_id(&self, id: &str) {
        self.state.lock().unwrap().next_id = Some(id.to_string());
    }

    /// Every call fails from now on
    pub fn fail(&self, failing: bool) {
        self.state.lock().unwrap().failing = failing;
    }

    /// Changes the remote collection behind the store's back
    pub fn push_remote(&self, record: R) {
        self.state.lock().unwrap().records.push(record);
    }

    pub fn remote_records(&self) -> Vec<R> {
        self.state.lock().unwrap().records.clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record_call(&self, call: String) -> Result<(), BackendError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);

        if state.failing {
            return Err(BackendError::Status {
                url: format!("fake://{}/", R::RESOURCE),
                status: 500,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl<R: Record> Backend<R> for FakeBackend<R> {
    async fn fetch_all(&self) -> Result<Vec<R>, BackendError> {
        self.record_call("fetch_all".to_string())?;

        Ok(self.remote_records())
    }

    async fn create(&self, record: &R) -> Result<R::Id, BackendError> {
        self.record_call("create".to_string())?;

        let mut state = self.state.lock().unwrap();
        state.issued += 1;
        let issued = state.issued;
        let id = state
            .next_id
            .take()
            .unwrap_or_else(|| format!("generated-{issued}"));

        let mut stored = record.clone();
        stored.set_id(R::Id::from(id.clone()));
        state.records.push(stored);

        Ok(R::Id::from(id))
    }

    async fn update(&self, id: &R::Id, record: &R) -> Result<(), BackendError> {
        self.record_call(format!("update {id}"))?;

        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.records.iter_mut().find(|r| r.id() == Some(id)) {
            *existing = record.clone();
        }

        Ok(())
    }

    async fn delete(&self, id: &R::Id) -> Result<(), BackendError> {
        self.record_call(format!("delete {id}"))?;

        self.state.lock().unwrap().records.retain(|r| r.id() != Some(id));

        Ok(())
    }
}

pub fn capturing_journal() -> (Journal, Arc<MemoryLog>) {
    let sink = Arc::new(MemoryLog::new());
    let journal = Journal::new(sink.clone(), "test");

    (journal, sink)
}

pub fn account(id: &str, amount: Decimal) -> Account {
    Account {
        id: Some(AccountId::from(id)),
        name: format!("account {id}"),
        amount,
    }
}

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

pub fn transaction(id: &str, on: &str, amount: Decimal) -> Transaction {
    let mut transaction = Transaction::new(date(on), format!("transaction {id}"), amount);
    transaction.id = Some(TransactionId::from(id));

    transaction
}

pub fn ids<R: Record>(records: &[R]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.id().map(|id| id.to_string()).unwrap_or_default())
        .collect()
}

pub fn balances(transactions: &[Transaction]) -> Vec<Decimal> {
    transactions.iter().map(|transaction| transaction.balance).collect()
}
