use chrono::Utc;
use std::fmt::Debug;

pub trait Clock: Debug + Send + Sync {
    fn now(&self) -> i64;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

#[cfg(test)]
pub use fixed::FixedClock;
