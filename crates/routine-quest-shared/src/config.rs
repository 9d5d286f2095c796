//! Gameplay and tier parameters.
//!
//! [`APP_CONFIG`] is fixed at build time and has no mutation path, so it
//! can be read from any thread without synchronization.

use serde::Serialize;

use crate::error::AppError;
use crate::models::UserTier;

/// AI coach credits granted per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AiCredits {
    pub free: u32,
    pub basic: u32,
    pub pro: u32,
    pub team: u32,
}

impl AiCredits {
    pub const fn for_tier(&self, tier: UserTier) -> u32 {
        match tier {
            UserTier::Free => self.free,
            UserTier::Basic => self.basic,
            UserTier::Pro => self.pro,
            UserTier::Team => self.team,
        }
    }
}

/// Static gameplay configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AppConfig {
    pub base_xp_per_step: u32,
    /// Applied inside the personal boost window
    pub pbt_bonus_multiplier: f64,
    /// Nominal per-day streak multiplier; scoring adds 0.05 per counted day
    pub streak_bonus_multiplier: f64,
    /// Cap on streak days counted toward the bonus
    pub max_streak_bonus: u32,
    /// Half-width of the boost window
    pub pbt_window_minutes: u32,
    pub free_tier_routines: u32,
    pub free_tier_steps_per_routine: u32,
    pub free_tier_history_days: u32,
    pub ai_credits: AiCredits,
}

pub const APP_CONFIG: AppConfig = AppConfig {
    base_xp_per_step: 10,
    pbt_bonus_multiplier: 1.1,
    streak_bonus_multiplier: 1.05,
    max_streak_bonus: 10,
    pbt_window_minutes: 30,
    free_tier_routines: 1,
    free_tier_steps_per_routine: 5,
    free_tier_history_days: 3,
    ai_credits: AiCredits {
        free: 0,
        basic: 3,
        pro: 15,
        team: 50,
    },
};

/// Feature limits for a tier. `None` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierLimits {
    pub tier: UserTier,
    pub routines: Option<u32>,
    pub steps_per_routine: Option<u32>,
    pub history_days: Option<u32>,
    pub ai_credits: u32,
}

impl TierLimits {
    pub const fn for_tier(tier: UserTier) -> Self {
        let ai_credits = APP_CONFIG.ai_credits.for_tier(tier);
        match tier {
            UserTier::Free => Self {
                tier,
                routines: Some(APP_CONFIG.free_tier_routines),
                steps_per_routine: Some(APP_CONFIG.free_tier_steps_per_routine),
                history_days: Some(APP_CONFIG.free_tier_history_days),
                ai_credits,
            },
            UserTier::Basic | UserTier::Pro | UserTier::Team => Self {
                tier,
                routines: None,
                steps_per_routine: None,
                history_days: None,
                ai_credits,
            },
        }
    }
}

impl UserTier {
    pub const fn ai_credits(&self) -> u32 {
        APP_CONFIG.ai_credits.for_tier(*self)
    }

    pub const fn limits(&self) -> TierLimits {
        TierLimits::for_tier(*self)
    }
}

/// Fails when a user on `tier` who already owns `existing_routines`
/// routines tries to create another one.
pub fn check_routine_quota(tier: UserTier, existing_routines: usize) -> Result<(), AppError> {
    match tier.limits().routines {
        Some(max) if existing_routines >= max as usize => Err(AppError::validation(format!(
            "{tier} tier allows at most {max} routine(s)"
        ))),
        _ => Ok(()),
    }
}

/// Fails when a routine with `step_count` steps exceeds the tier's
/// per-routine step limit.
pub fn check_step_quota(tier: UserTier, step_count: usize) -> Result<(), AppError> {
    match tier.limits().steps_per_routine {
        Some(max) if step_count > max as usize => Err(AppError::validation(format!(
            "{tier} tier allows at most {max} steps per routine"
        ))),
        _ => Ok(()),
    }
}
