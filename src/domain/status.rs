use crate::domain::Status::*;

/// Reported condition of a user. Codes outside the known range are kept as-is.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Status {
    Active,
    Critical,
    Normal,
    Disconnected,
    Unknown(i64),
}

impl Status {
    pub fn code(&self) -> i64 {
        match self {
            Active => 0,
            Critical => 1,
            Normal => 2,
            Disconnected => 3,
            Unknown(code) => *code,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Active => "green",
            Critical => "red",
            Normal => "blue",
            Disconnected => "gray",
            Unknown(_) => "purple",
        }
    }
}

impl From<i64> for Status {
    fn from(code: i64) -> Self {
        match code {
            0 => Active,
            1 => Critical,
            2 => Normal,
            3 => Disconnected,
            code => Unknown(code),
        }
    }
}
