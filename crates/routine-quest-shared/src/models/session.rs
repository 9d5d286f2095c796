//! Play-through sessions of a routine and their per-step check-ins.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::new_id;

/// Outcome recorded for a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckInStatus {
    Completed,
    Skipped,
    Failed,
}

/// Recorded outcome of one step within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub id: String,
    pub session_id: String,
    pub step_id: String,
    pub time_spent_seconds: u32,
    pub status: CheckInStatus,
    pub completed_at: DateTime<Utc>,
}

impl CheckIn {
    pub fn new(
        session_id: impl Into<String>,
        step_id: impl Into<String>,
        time_spent_seconds: u32,
        status: CheckInStatus,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_id(),
            session_id: session_id.into(),
            step_id: step_id.into(),
            time_spent_seconds,
            status,
            completed_at,
        }
    }
}

/// One run of a routine by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub routine_id: String,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub checkins: Vec<CheckIn>,
}

impl Session {
    /// Opens a new, unfinished session.
    pub fn start(
        user_id: impl Into<String>,
        routine_id: impl Into<String>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_id(),
            user_id: user_id.into(),
            routine_id: routine_id.into(),
            started_at,
            finished_at: None,
            checkins: Vec::new(),
        }
    }

    /// Appends a check-in for `step_id` and returns it.
    pub fn record_checkin(
        &mut self,
        step_id: impl Into<String>,
        time_spent_seconds: u32,
        status: CheckInStatus,
        completed_at: DateTime<Utc>,
    ) -> &CheckIn {
        let checkin = CheckIn::new(
            self.id.clone(),
            step_id,
            time_spent_seconds,
            status,
            completed_at,
        );
        self.checkins.push(checkin);
        &self.checkins[self.checkins.len() - 1]
    }

    /// Marks the session finished. Ordering against `started_at` is left to
    /// the caller.
    pub fn finish(&mut self, finished_at: DateTime<Utc>) {
        self.finished_at = Some(finished_at);
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Wall-clock length of a finished session.
    pub fn elapsed(&self) -> Option<Duration> {
        self.finished_at.map(|end| end - self.started_at)
    }

    pub fn total_time_spent_seconds(&self) -> u64 {
        self.checkins
            .iter()
            .map(|c| u64::from(c.time_spent_seconds))
            .sum()
    }

    pub fn count_by_status(&self, status: CheckInStatus) -> usize {
        self.checkins.iter().filter(|c| c.status == status).count()
    }
}
