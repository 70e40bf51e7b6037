use crate::domain::Status;

pub const DISCONNECTED_AFTER_SECS: i64 = 60;
pub const EXPIRED_AFTER_SECS: i64 = 120;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Tier {
    Active,
    StaleButVisible,
    Expired,
}

impl Tier {
    /// Classifies a record by its age according to the store clock, so viewers never compare against
    /// their own clock.
    pub fn classify(server_time: i64, last_update: i64) -> Tier {
        let age = server_time.saturating_sub(last_update);
        if age < DISCONNECTED_AFTER_SECS {
            Tier::Active
        } else if age <= EXPIRED_AFTER_SECS {
            Tier::StaleButVisible
        } else {
            Tier::Expired
        }
    }

    pub fn display_status(&self, status: Status) -> Option<Status> {
        match self {
            Tier::Active => Some(status),
            Tier::StaleButVisible => Some(Status::Disconnected),
            Tier::Expired => None,
        }
    }
}
