//! Routines and their ordered steps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a step is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    #[default]
    Action,
    Timer,
    Check,
    Input,
}

/// A single step of a routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub routine_id: String,
    /// Position within the routine; not required to be unique
    pub order: i32,
    pub title: String,
    pub difficulty: f64,
    pub estimated_seconds: u32,
    #[serde(rename = "type")]
    pub step_type: StepType,
}

/// A user's routine. `version` is bumped by the API on every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub is_public: bool,
    pub version: i32,
    pub last_changed_at: DateTime<Utc>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Routine {
    /// Steps in execution order. Steps sharing an `order` keep their
    /// stored relative position.
    pub fn ordered_steps(&self) -> Vec<&Step> {
        let mut steps: Vec<&Step> = self.steps.iter().collect();
        steps.sort_by_key(|s| s.order);
        steps
    }

    pub fn total_estimated_seconds(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.estimated_seconds)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: &str, order: i32, seconds: u32) -> Step {
        Step {
            id: id.into(),
            routine_id: "r-1".into(),
            order,
            title: format!("Step {id}"),
            difficulty: 1.0,
            estimated_seconds: seconds,
            step_type: StepType::Action,
        }
    }

    fn routine(steps: Vec<Step>) -> Routine {
        Routine {
            id: "r-1".into(),
            user_id: "u-1".into(),
            title: "Morning".into(),
            is_public: false,
            version: 1,
            last_changed_at: "2026-03-01T06:00:00Z".parse().unwrap(),
            steps,
        }
    }

    #[test]
    fn ordered_steps_sorts_stably() {
        let r = routine(vec![step("c", 3, 60), step("a", 1, 30), step("b", 1, 45)]);
        let ids: Vec<&str> = r.ordered_steps().into_iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn total_estimated_seconds_sums_steps() {
        let r = routine(vec![step("a", 1, 120), step("b", 2, 300)]);
        assert_eq!(r.total_estimated_seconds(), 420);
        assert_eq!(routine(vec![]).total_estimated_seconds(), 0);
    }

    #[test]
    fn step_type_serializes_under_type_key() {
        let json = serde_json::to_value(step("a", 1, 30)).unwrap();
        assert_eq!(json["type"], "action");
        assert_eq!(json["routineId"], "r-1");
        assert_eq!(json["estimatedSeconds"], 30);
    }

    #[test]
    fn routine_without_steps_key_deserializes() {
        let r: Routine = serde_json::from_value(serde_json::json!({
            "id": "r-9",
            "userId": "u-1",
            "title": "Evening",
            "isPublic": true,
            "version": 3,
            "lastChangedAt": "2026-03-01T21:00:00Z"
        }))
        .unwrap();
        assert!(r.steps.is_empty());
        assert!(r.is_public);
    }
}
