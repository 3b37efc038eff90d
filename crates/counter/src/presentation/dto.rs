//! Counter DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::view_model::CounterSnapshot;
use crate::domain::entities::CounterRecord;

/// Counter state view for the UI layer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterView {
    pub count: u64,
    pub syncing: bool,
}

impl From<CounterSnapshot> for CounterView {
    fn from(snapshot: CounterSnapshot) -> Self {
        Self {
            count: snapshot.count,
            syncing: snapshot.syncing,
        }
    }
}

/// One leaderboard row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub email: String,
    pub click_count: u64,
    pub last_updated: DateTime<Utc>,
}

impl From<&CounterRecord> for LeaderboardEntry {
    fn from(record: &CounterRecord) -> Self {
        Self {
            user_id: record.user_id.to_string(),
            email: record.email.to_string(),
            click_count: record.click_count,
            last_updated: record.last_updated,
        }
    }
}
