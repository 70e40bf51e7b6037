mod client;
mod marker_board;
mod staleness;
mod watch;

pub use client::LocationClient;
pub use marker_board::{MarkerBoard, MarkerChange};
pub use staleness::Tier;
pub use watch::watch;
