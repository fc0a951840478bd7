use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-assigned identifier of an account
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        return &self.0;
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        return Self(id);
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        return Self(id.to_string());
    }
}
