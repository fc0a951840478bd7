use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TransactionId(pub String);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

impl AsRef<str> for TransactionId {
    fn as_ref(&self) -> &str {
        return &self.0;
    }
}

impl From<String> for TransactionId {
    fn from(id: String) -> Self {
        return Self(id);
    }
}

impl From<&str> for TransactionId {
    fn from(id: &str) -> Self {
        return Self(id.to_string());
    }
}
