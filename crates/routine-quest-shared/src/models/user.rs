//! User entity, subscription tiers and the personal boost time format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Subscription level gating feature limits and AI credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserTier {
    #[default]
    Free,
    Basic,
    Pro,
    Team,
}

impl UserTier {
    pub const ALL: [UserTier; 4] = [
        UserTier::Free,
        UserTier::Basic,
        UserTier::Pro,
        UserTier::Team,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserTier::Free => "free",
            UserTier::Basic => "basic",
            UserTier::Pro => "pro",
            UserTier::Team => "team",
        }
    }
}

impl fmt::Display for UserTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(UserTier::Free),
            "basic" => Ok(UserTier::Basic),
            "pro" => Ok(UserTier::Pro),
            "team" => Ok(UserTier::Team),
            other => Err(AppError::validation(format!("unknown tier: {other}"))),
        }
    }
}

/// Personal boost time of day in strict `HH:MM` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PbtTime {
    hours: u8,
    minutes: u8,
}

impl PbtTime {
    pub fn new(hours: u8, minutes: u8) -> Result<Self, AppError> {
        if hours > 23 || minutes > 59 {
            return Err(AppError::validation(format!(
                "pbtTime out of range: {hours:02}:{minutes:02}"
            )));
        }
        Ok(Self { hours, minutes })
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Minutes since midnight.
    pub fn minute_of_day(&self) -> u32 {
        u32::from(self.hours) * 60 + u32::from(self.minutes)
    }
}

impl FromStr for PbtTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::validation(format!("pbtTime must be HH:MM, got '{s}'"));

        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(h) || !two_digits(m) {
            return Err(invalid());
        }

        let hours = h.parse::<u8>().map_err(|_| invalid())?;
        let minutes = m.parse::<u8>().map_err(|_| invalid())?;
        Self::new(hours, minutes)
    }
}

impl fmt::Display for PbtTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// A Routine Quest account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub tier: UserTier,
    /// IANA zone name, e.g. "Asia/Seoul"
    pub timezone: String,
    /// Personal boost time, "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pbt_time: Option<String>,
    pub streak: u32,
    pub grace_tokens: u32,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Checks the invariants that the type system does not already enforce.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(pbt) = &self.pbt_time {
            pbt.parse::<PbtTime>()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(pbt: Option<&str>) -> User {
        User {
            id: "u-1".into(),
            email: "quest@example.com".into(),
            tier: UserTier::Pro,
            timezone: "Asia/Seoul".into(),
            pbt_time: pbt.map(String::from),
            streak: 4,
            grace_tokens: 1,
            created_at: "2026-01-05T08:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn pbt_time_parses_strict_format() {
        let t: PbtTime = "07:30".parse().unwrap();
        assert_eq!(t.hours(), 7);
        assert_eq!(t.minutes(), 30);
        assert_eq!(t.minute_of_day(), 450);
        assert_eq!(t.to_string(), "07:30");

        assert!("7:30".parse::<PbtTime>().is_err());
        assert!("24:00".parse::<PbtTime>().is_err());
        assert!("12:60".parse::<PbtTime>().is_err());
        assert!("1230".parse::<PbtTime>().is_err());
        assert!("ab:cd".parse::<PbtTime>().is_err());
    }

    #[test]
    fn validate_checks_pbt_pattern() {
        assert!(sample_user(None).validate().is_ok());
        assert!(sample_user(Some("23:59")).validate().is_ok());

        let err = sample_user(Some("25:00")).validate().unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn tier_parses_and_displays() {
        assert_eq!("PRO".parse::<UserTier>().unwrap(), UserTier::Pro);
        assert_eq!(UserTier::Team.to_string(), "team");
        assert!("platinum".parse::<UserTier>().is_err());
    }

    #[test]
    fn user_json_uses_camel_case_and_omits_missing_pbt() {
        let json = serde_json::to_value(sample_user(None)).unwrap();
        assert_eq!(json["graceTokens"], 1);
        assert_eq!(json["tier"], "pro");
        assert!(json.get("pbtTime").is_none());

        let json = serde_json::to_value(sample_user(Some("06:00"))).unwrap();
        assert_eq!(json["pbtTime"], "06:00");
    }
}
