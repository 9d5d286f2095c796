//! Gamification rewards.
//!
//! A reward's payload shape depends on its kind and is owned by the
//! service that grants it, so every variant of [`RewardPayload`] carries an
//! open JSON object. On the wire a reward keeps the flat
//! `{ "type": ..., "payload": {...} }` layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::new_id;

/// Kind of reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardType {
    Xp,
    StreakRing,
    SeasonItem,
    Achievement,
}

/// Reward payload keyed by its [`RewardType`].
#[derive(Debug, Clone, PartialEq)]
pub enum RewardPayload {
    Xp(Map<String, Value>),
    StreakRing(Map<String, Value>),
    SeasonItem(Map<String, Value>),
    Achievement(Map<String, Value>),
}

impl RewardPayload {
    pub fn from_parts(reward_type: RewardType, fields: Map<String, Value>) -> Self {
        match reward_type {
            RewardType::Xp => Self::Xp(fields),
            RewardType::StreakRing => Self::StreakRing(fields),
            RewardType::SeasonItem => Self::SeasonItem(fields),
            RewardType::Achievement => Self::Achievement(fields),
        }
    }

    pub fn reward_type(&self) -> RewardType {
        match self {
            Self::Xp(_) => RewardType::Xp,
            Self::StreakRing(_) => RewardType::StreakRing,
            Self::SeasonItem(_) => RewardType::SeasonItem,
            Self::Achievement(_) => RewardType::Achievement,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        match self {
            Self::Xp(f) | Self::StreakRing(f) | Self::SeasonItem(f) | Self::Achievement(f) => f,
        }
    }

    pub fn into_parts(self) -> (RewardType, Map<String, Value>) {
        let reward_type = self.reward_type();
        match self {
            Self::Xp(f) | Self::StreakRing(f) | Self::SeasonItem(f) | Self::Achievement(f) => {
                (reward_type, f)
            }
        }
    }
}

/// A reward earned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RewardWire", into = "RewardWire")]
pub struct Reward {
    pub id: String,
    pub user_id: String,
    pub payload: RewardPayload,
    pub earned_at: DateTime<Utc>,
}

impl Reward {
    pub fn new(
        user_id: impl Into<String>,
        payload: RewardPayload,
        earned_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_id(),
            user_id: user_id.into(),
            payload,
            earned_at,
        }
    }

    pub fn reward_type(&self) -> RewardType {
        self.payload.reward_type()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RewardWire {
    id: String,
    user_id: String,
    #[serde(rename = "type")]
    reward_type: RewardType,
    #[serde(default)]
    payload: Map<String, Value>,
    earned_at: DateTime<Utc>,
}

impl From<RewardWire> for Reward {
    fn from(wire: RewardWire) -> Self {
        Self {
            id: wire.id,
            user_id: wire.user_id,
            payload: RewardPayload::from_parts(wire.reward_type, wire.payload),
            earned_at: wire.earned_at,
        }
    }
}

impl From<Reward> for RewardWire {
    fn from(reward: Reward) -> Self {
        let (reward_type, payload) = reward.payload.into_parts();
        Self {
            id: reward.id,
            user_id: reward.user_id,
            reward_type,
            payload,
            earned_at: reward.earned_at,
        }
    }
}
