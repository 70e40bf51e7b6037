mod error;
mod location_store;
mod snapshot_file;

pub use error::StoreError;
pub use location_store::LocationStore;
