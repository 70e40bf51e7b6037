use crate::domain::{LocationRecord, Snapshot, Status, UserId};
use crate::viewer::Tier;
use std::collections::{HashMap, HashSet};

#[derive(PartialEq, Clone, Debug)]
pub struct Marker {
    pub user_id: UserId,
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
    pub status: Status,
}

impl Marker {
    fn displayed(record: &LocationRecord, status: Status) -> Self {
        Marker {
            user_id: record.user_id.clone(),
            longitude: record.longitude,
            latitude: record.latitude,
            height: record.height,
            status,
        }
    }

    pub fn color(&self) -> &'static str {
        self.status.color()
    }

    pub fn height_label(&self) -> String {
        format!("Height: {:.2}m", self.height)
    }

    pub fn user_label(&self) -> String {
        format!("User: {}", self.user_id)
    }
}

#[derive(PartialEq, Debug)]
pub enum MarkerChange {
    Added(Marker),
    Updated(Marker),
    Removed(UserId),
}

#[derive(Default, Debug)]
pub struct MarkerBoard {
    markers: HashMap<UserId, Marker>,
}

impl MarkerBoard {
    /// Brings the board in line with a snapshot. Expired records and users that are no longer in the
    /// snapshot lose their marker, the store itself is left alone.
    pub fn apply(&mut self, snapshot: &Snapshot) -> Vec<MarkerChange> {
        let mut changes = Vec::new();
        let mut seen = HashSet::new();

        for record in &snapshot.records {
            seen.insert(&record.user_id);

            let tier = Tier::classify(snapshot.server_time, record.last_update);
            let Some(status) = tier.display_status(record.status) else {
                if self.markers.remove(&record.user_id).is_some() {
                    changes.push(MarkerChange::Removed(record.user_id.clone()));
                }
                continue;
            };

            let marker = Marker::displayed(record, status);
            match self.markers.insert(record.user_id.clone(), marker.clone()) {
                None => changes.push(MarkerChange::Added(marker)),
                Some(previous) if previous != marker => changes.push(MarkerChange::Updated(marker)),
                Some(_) => {}
            }
        }

        let mut gone = self.markers.keys().filter(|user_id| !seen.contains(user_id)).cloned().collect::<Vec<_>>();
        gone.sort_by_key(|user_id| user_id.to_string());
        for user_id in gone {
            self.markers.remove(&user_id);
            changes.push(MarkerChange::Removed(user_id));
        }

        changes
    }

    pub fn clear(&mut self) -> Vec<MarkerChange> {
        let mut removed = self.markers.drain().map(|(user_id, _)| user_id).collect::<Vec<_>>();
        removed.sort_by_key(|user_id| user_id.to_string());
        removed.into_iter().map(MarkerChange::Removed).collect()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const T: i64 = 1_700_000_000;

    fn record(user_id: &str, status: Status, last_update: i64) -> LocationRecord {
        LocationRecord {
            user_id: UserId::from(user_id),
            longitude: 106.66,
            latitude: 10.76,
            height: 1.5,
            status,
            last_update,
        }
    }

    fn snapshot(records: Vec<LocationRecord>) -> Snapshot {
        Snapshot { records, server_time: T }
    }

    #[test]
    fn adds_markers_per_tier() {
        let mut board = MarkerBoard::default();

        let changes = board.apply(&snapshot(vec![
            record("active", Status::Critical, T - 30),
            record("stale", Status::Critical, T - 90),
            record("expired", Status::Critical, T - 150),
        ]));

        assert_eq!(changes.len(), 2);
        assert_eq!(board.len(), 2);
        assert_eq!(board.markers.get(&UserId::from("active")).unwrap().status, Status::Critical);
        assert_eq!(board.markers.get(&UserId::from("stale")).unwrap().status, Status::Disconnected);
        assert_eq!(board.markers.get(&UserId::from("stale")).unwrap().color(), "gray");
        assert!(board.markers.get(&UserId::from("expired")).is_none());
    }

    #[test]
    fn reports_updates_only_when_something_changed() {
        let mut board = MarkerBoard::default();
        board.apply(&snapshot(vec![record("u1", Status::Active, T - 10)]));

        let unchanged = board.apply(&snapshot(vec![record("u1", Status::Active, T - 5)]));
        let moved = board.apply(&snapshot(vec![LocationRecord {
            longitude: 106.7,
            ..record("u1", Status::Active, T)
        }]));

        assert_eq!(unchanged, vec![]);
        assert_eq!(moved.len(), 1);
        assert!(matches!(&moved[0], MarkerChange::Updated(marker) if marker.longitude == 106.7));
    }

    #[test]
    fn removes_a_marker_once_its_record_expires() {
        let mut board = MarkerBoard::default();
        board.apply(&snapshot(vec![record("u1", Status::Active, T - 10)]));

        let changes = board.apply(&snapshot(vec![record("u1", Status::Active, T - 121)]));
        let again = board.apply(&snapshot(vec![record("u1", Status::Active, T - 200)]));

        assert_eq!(changes, vec![MarkerChange::Removed(UserId::from("u1"))]);
        assert_eq!(again, vec![]);
        assert_eq!(board.len(), 0);
    }

    #[test]
    fn revives_a_marker_when_the_user_reports_again() {
        let mut board = MarkerBoard::default();
        board.apply(&snapshot(vec![record("u1", Status::Active, T - 150)]));

        let changes = board.apply(&snapshot(vec![record("u1", Status::Normal, T)]));

        assert!(matches!(&changes[..], [MarkerChange::Added(marker)] if marker.status == Status::Normal));
    }

    #[test]
    fn removes_markers_of_deleted_users() {
        let mut board = MarkerBoard::default();
        board.apply(&snapshot(vec![record("u1", Status::Active, T), record("u2", Status::Active, T)]));

        let changes = board.apply(&snapshot(vec![record("u2", Status::Active, T)]));

        assert_eq!(changes, vec![MarkerChange::Removed(UserId::from("u1"))]);
    }

    #[test]
    fn clear_removes_everything() {
        let mut board = MarkerBoard::default();
        board.apply(&snapshot(vec![record("b", Status::Active, T), record("a", Status::Active, T)]));

        let changes = board.clear();

        assert_eq!(
            changes,
            vec![MarkerChange::Removed(UserId::from("a")), MarkerChange::Removed(UserId::from("b"))]
        );
        assert_eq!(board.len(), 0);
    }

    #[test]
    fn labels_height_and_user() {
        let marker = Marker::displayed(&record("u1", Status::Unknown(5), T), Status::Unknown(5));

        assert_eq!(marker.height_label(), "Height: 1.50m");
        assert_eq!(marker.user_label(), "User: u1");
        assert_eq!(marker.color(), "purple");
    }
}
