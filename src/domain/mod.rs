mod location_record;
mod status;
mod status_serde;
mod user_id;

pub use location_record::{LocationRecord, LocationUpdate, Snapshot};
pub use status::Status;
pub use user_id::UserId;
