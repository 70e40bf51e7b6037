use crate::viewer::{LocationClient, MarkerBoard, MarkerChange};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, instrument, warn};

// tokio::time::interval panics on a zero period
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Polls the store forever and keeps a marker board in sync with it. A failed poll is logged and the
/// next tick simply tries again.
#[instrument(skip_all, fields(url = client.url()))]
pub async fn watch(client: LocationClient, poll_interval: Duration) {
    let mut board = MarkerBoard::default();
    let mut ticker = interval(poll_interval.max(MIN_POLL_INTERVAL));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let changes = poll(&client, &mut board).await;
        if !changes.is_empty() {
            debug!("👀 {} marker(s) on the board", board.len());
        }
    }
}

pub async fn poll(client: &LocationClient, board: &mut MarkerBoard) -> Vec<MarkerChange> {
    let changes = match client.fetch().await {
        Ok(Some(snapshot)) => board.apply(&snapshot),
        Ok(None) => board.clear(),
        Err(e) => {
            warn!("⚠️ Could not fetch locations: {}", e);
            return Vec::new();
        }
    };

    for change in &changes {
        match change {
            MarkerChange::Added(marker) => info!(
                user_id = %marker.user_id,
                "📍 Added {} marker for {} at ({}, {}), {}",
                marker.color(),
                marker.user_label(),
                marker.longitude,
                marker.latitude,
                marker.height_label()
            ),
            MarkerChange::Updated(marker) => info!(
                user_id = %marker.user_id,
                "📍 Updated {} marker at ({}, {}), {}",
                marker.color(),
                marker.longitude,
                marker.latitude,
                marker.height_label()
            ),
            MarkerChange::Removed(user_id) => info!(user_id = %user_id, "🗑️ Removed marker for user '{}'", user_id),
        }
    }

    changes
}
