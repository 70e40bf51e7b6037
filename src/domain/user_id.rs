use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque identifier of a reporting user. Comparison is strict, the text `"1"` and the number `1`
/// identify different users.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(serde_json::Number),
    Text(String),
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UserId::Number(number) => write!(f, "{}", number),
            UserId::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId::Text(value.to_string())
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        UserId::Number(value.into())
    }
}
