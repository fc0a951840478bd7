mod account;
mod record;
mod transaction;

pub use account::Account;
pub use record::Record;
pub use transaction::Transaction;
