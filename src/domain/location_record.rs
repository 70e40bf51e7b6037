use crate::domain::{Status, UserId};
use serde::{Deserialize, Serialize};

/// Last known position of a user, stamped by the store when it was written.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "userID")]
    pub user_id: UserId,
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64, // In meters
    pub status: Status,
    #[serde(rename = "lastUpdate")]
    pub last_update: i64,
}

impl LocationRecord {
    pub fn new(update: LocationUpdate, last_update: i64) -> Self {
        LocationRecord {
            user_id: update.user_id,
            longitude: update.longitude,
            latitude: update.latitude,
            height: update.height,
            status: update.status,
            last_update,
        }
    }

    pub fn apply(&mut self, update: LocationUpdate, last_update: i64) {
        self.longitude = update.longitude;
        self.latitude = update.latitude;
        self.height = update.height;
        self.status = update.status;
        self.last_update = last_update;
    }
}

#[derive(PartialEq, Clone, Debug)]
pub struct LocationUpdate {
    pub user_id: UserId,
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
    pub status: Status,
}

#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "data")]
    pub records: Vec<LocationRecord>,
    #[serde(rename = "serverTime")]
    pub server_time: i64,
}
